use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynClock = Arc<dyn ClockTrait + Send + Sync>;

/// Source of "now" in local wall-clock time.
pub trait ClockTrait {
    fn now(&self) -> NaiveDateTime;
}
