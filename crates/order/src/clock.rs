use crate::abstract_trait::ClockTrait;
use chrono::{Local, NaiveDateTime};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockTrait for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant. Used to make submissions reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl ClockTrait for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
