mod command;
mod query;
mod schedule;

pub use self::command::{OrderCommandService, OrderCommandServiceDeps};
pub use self::query::OrderQueryService;
pub use self::schedule::resolve_delivery_at;
