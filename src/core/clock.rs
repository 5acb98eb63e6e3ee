use crate::domain::model::TimePair;
use crate::domain::ports::Clock;

/// Wall clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }
}

/// Current wall-clock time as `(seconds, nanoseconds)` since the Unix epoch.
///
/// Resolution is one millisecond: the nanosecond half is always a multiple
/// of 1_000_000.
pub fn system_time() -> (i64, u32) {
    SystemClock.system_time().into()
}

/// Same reading as [`system_time`], as a [`TimePair`].
pub fn now() -> TimePair {
    SystemClock.system_time()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_nanos_are_whole_millis() {
        for _ in 0..100 {
            let (_, nanos) = system_time();
            assert!(nanos <= 999_000_000);
            assert_eq!(nanos % 1_000_000, 0);
        }
    }

    #[test]
    fn test_system_time_is_after_2020() {
        let (seconds, _) = system_time();
        assert!(seconds > 1_577_836_800);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(1_704_067_200_250);
        assert_eq!(clock.now_millis(), 1_704_067_200_250);
        assert_eq!(
            clock.system_time(),
            TimePair { seconds: 1_704_067_200, nanoseconds: 250_000_000 }
        );
    }
}
