use chrono::{DateTime, Local};

/// Source of the current wall-clock time.
///
/// The relative-time formatter reads "now" through this trait, so the
/// reference instant is under the caller's control in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
