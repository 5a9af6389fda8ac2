pub mod order;
pub mod queue;
