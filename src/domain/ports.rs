use crate::domain::model::TimePair;

/// Source of wall-clock time at millisecond resolution.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    fn system_time(&self) -> TimePair {
        TimePair::from_millis(self.now_millis())
    }
}
