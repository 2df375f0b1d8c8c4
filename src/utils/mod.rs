pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::delta2readable;
pub use time::{format_time, parse_time};
