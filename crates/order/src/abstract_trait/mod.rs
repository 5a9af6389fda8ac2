pub mod clock;
pub mod order;

pub use self::clock::{ClockTrait, DynClock};
