//! Time source for attachment timestamps.
//!
//! Attachments are stamped with their construction time. Going through a
//! [`Clock`] lets tests pin that value instead of racing the system clock.

use std::time::SystemTime;

/// Abstraction over the current wall-clock time.
///
/// # Example
///
/// ```
/// use slackhook::time::{Clock, SystemClock};
///
/// assert!(SystemClock.unix_secs() > 0);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;

    /// Returns the current time as whole seconds since the Unix epoch.
    ///
    /// Times before the epoch collapse to 0.
    fn unix_secs(&self) -> u64 {
        self.now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}

/// Clock backed by [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct FixedClock(SystemTime);

    impl Clock for FixedClock {
        fn now(&self) -> SystemTime {
            self.0
        }
    }

    #[test]
    fn system_clock_tracks_real_time() {
        let before = SystemTime::now();
        let result = SystemClock.now();
        let after = SystemTime::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn unix_secs_truncates_sub_second_part() {
        let clock = FixedClock(SystemTime::UNIX_EPOCH + Duration::from_millis(1_500_900));
        assert_eq!(clock.unix_secs(), 1_500);
    }

    #[test]
    fn unix_secs_before_epoch_is_zero() {
        let clock = FixedClock(SystemTime::UNIX_EPOCH - Duration::from_secs(10));
        assert_eq!(clock.unix_secs(), 0);
    }

    #[test]
    fn system_clock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
    }
}
