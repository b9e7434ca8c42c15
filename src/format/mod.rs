pub mod clock;
pub mod parse;
pub mod relative;

pub use clock::{clock_time, clock_time_in, second_to_time};
pub use parse::parse_timestamp;
pub use relative::{RelativeBucket, absolute_date, created_at, created_at_at};
