mod logs;
mod parse_datetime;

pub use self::logs::init_logger;
pub use self::parse_datetime::{TIMESTAMP_FORMAT, format_timestamp, parse_timestamp, timestamp};
