pub mod clock;
pub mod path;
pub mod table;
pub mod time;

pub use time::{format_minutes, format_total, parse_time};
