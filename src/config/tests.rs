use super::*;

const DART_OPTIONS: &str = r#"
class DefaultFirebaseOptions {
  static const FirebaseOptions web = FirebaseOptions(
    apiKey: 'AIzaSyTestKey',
    appId: '1:276653859682:web:a2c398526fe9c625c6423b',
    messagingSenderId: '276653859682',
    projectId: 'flutterproject-72994',
    authDomain: 'flutterproject-72994.firebaseapp.com',
    storageBucket: 'flutterproject-72994.appspot.com',
  );

  static const FirebaseOptions android = FirebaseOptions(
    apiKey: 'AIzaSyAndroidKey',
    appId: '1:276653859682:android:ffff',
    messagingSenderId: '276653859682',
    projectId: 'flutterproject-72994',
    storageBucket: 'flutterproject-72994.appspot.com',
  );
}
"#;

const SERVICE_WORKER: &str = r#"importScripts('https://www.gstatic.com/firebasejs/10.7.1/firebase-app-compat.js');

const firebaseConfig = {
  apiKey: "YOUR_API_KEY_HERE",
  authDomain: "old.firebaseapp.com",
  projectId: "old",
  storageBucket: "old.appspot.com",
  messagingSenderId: "1",
  appId: "1:1:web:1"
};

firebase.initializeApp(firebaseConfig);
"#;

fn sample_config() -> FirebaseWebConfig {
    FirebaseWebConfig {
        api_key: "AIzaSyTestKey".to_string(),
        auth_domain: "flutterproject-72994.firebaseapp.com".to_string(),
        project_id: "flutterproject-72994".to_string(),
        storage_bucket: "flutterproject-72994.appspot.com".to_string(),
        messaging_sender_id: "276653859682".to_string(),
        app_id: "1:276653859682:web:a2c398526fe9c625c6423b".to_string(),
    }
}

#[test]
fn test_from_dart_options_takes_first_occurrence() {
    let config = FirebaseWebConfig::from_dart_options(DART_OPTIONS).unwrap();
    assert_eq!(config, sample_config());
}

#[test]
fn test_from_dart_options_accepts_double_quotes() {
    let source = DART_OPTIONS.replace("'AIzaSyTestKey'", "\"AIzaSyTestKey\"");
    let config = FirebaseWebConfig::from_dart_options(&source).unwrap();
    assert_eq!(config.api_key, "AIzaSyTestKey");
}

#[test]
fn test_from_dart_options_missing_value() {
    let source = DART_OPTIONS.replace("authDomain", "authHost");
    let err = FirebaseWebConfig::from_dart_options(&source).unwrap_err();
    assert!(matches!(err, ConfigError::MissingValue("authDomain")));
}

#[test]
fn test_validate_rejects_empty_value() {
    assert!(sample_config().validate().is_ok());

    let config = FirebaseWebConfig {
        storage_bucket: String::new(),
        ..sample_config()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingValue("storageBucket"))
    ));
}

#[test]
fn test_config_serializes_camel_case() {
    let value = serde_json::to_value(sample_config()).unwrap();
    assert_eq!(value["messagingSenderId"], "276653859682");
    assert_eq!(value["appId"], "1:276653859682:web:a2c398526fe9c625c6423b");
}

#[test]
fn test_service_worker_block_format() {
    let block = sample_config().to_service_worker_block();
    let expected = r#"const firebaseConfig = {
  apiKey: "AIzaSyTestKey",
  authDomain: "flutterproject-72994.firebaseapp.com",
  projectId: "flutterproject-72994",
  storageBucket: "flutterproject-72994.appspot.com",
  messagingSenderId: "276653859682",
  appId: "1:276653859682:web:a2c398526fe9c625c6423b"
};"#;
    assert_eq!(block, expected);
}

#[test]
fn test_replace_keeps_surrounding_source() {
    let updated = replace_service_worker_config(SERVICE_WORKER, &sample_config()).unwrap();

    assert!(updated.starts_with("importScripts("));
    assert!(updated.contains(&sample_config().to_service_worker_block()));
    assert!(updated.ends_with("firebase.initializeApp(firebaseConfig);\n"));
    assert!(!updated.contains("YOUR_API_KEY_HERE"));
}

#[test]
fn test_replace_does_not_expand_dollar_signs() {
    let config = FirebaseWebConfig {
        api_key: "key$1".to_string(),
        ..sample_config()
    };
    let updated = replace_service_worker_config(SERVICE_WORKER, &config).unwrap();
    assert!(updated.contains("apiKey: \"key$1\""));
}

#[test]
fn test_replace_without_block_fails() {
    let err = replace_service_worker_config("self.addEventListener('push', () => {});", &sample_config())
        .unwrap_err();
    assert!(matches!(err, ConfigError::BlockNotFound));
}

#[tokio::test]
async fn test_sync_service_worker_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let options_path = dir.path().join("firebase_options.dart");
    let worker_path = dir.path().join("firebase-messaging-sw.js");
    std::fs::write(&options_path, DART_OPTIONS).unwrap();
    std::fs::write(&worker_path, SERVICE_WORKER).unwrap();

    let config = sync_service_worker(&options_path, &worker_path).await.unwrap();
    assert_eq!(config, sample_config());

    let written = std::fs::read_to_string(&worker_path).unwrap();
    assert!(written.contains("projectId: \"flutterproject-72994\""));
    assert!(written.contains("firebase.initializeApp(firebaseConfig);"));
}

#[tokio::test]
async fn test_sync_service_worker_missing_options_file() {
    let dir = tempfile::tempdir().unwrap();
    let options_path = dir.path().join("missing.dart");
    let worker_path = dir.path().join("firebase-messaging-sw.js");
    std::fs::write(&worker_path, SERVICE_WORKER).unwrap();

    let err = sync_service_worker(&options_path, &worker_path).await.unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert_eq!(path, options_path),
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(std::fs::read_to_string(&worker_path).unwrap(), SERVICE_WORKER);
}

#[test]
fn test_value_patterns_follow_key_order() {
    let keys: Vec<&str> = VALUE_PATTERNS.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, FirebaseWebConfig::KEYS);
}

#[test]
fn test_from_dart_options_reports_each_missing_key() {
    for key in FirebaseWebConfig::KEYS {
        let source = DART_OPTIONS.replace(&format!("{}:", key), "removed:");
        match FirebaseWebConfig::from_dart_options(&source) {
            Err(ConfigError::MissingValue(missing)) => assert_eq!(missing, key),
            other => panic!("expected missing {key}, got {other:?}"),
        }
    }
}
