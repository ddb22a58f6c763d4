use chrono::Utc;

/// Source of wall-clock time, in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// [`Clock`] backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Derives a notification id from a timestamp by keeping the low 32 bits.
///
/// Two notifications posted within the same millisecond get the same id, and
/// hosts replace the earlier one.
pub fn notification_id_from_millis(millis: i64) -> i32 {
    millis as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_id_truncates() {
        assert_eq!(notification_id_from_millis(42), 42);
        // 1_700_000_000_000 = 0x18B_CFE5_6800
        assert_eq!(notification_id_from_millis(1_700_000_000_000), 0xCFE5_6800_u32 as i32);
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
