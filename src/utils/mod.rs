mod maths_utils;
mod perf;
pub(crate) mod time_utils;

pub use time_utils::{AppInstant, Clock, FixedClock, SystemClock, TimeUtils, format_duration};

pub use maths_utils::remap;
pub(crate) use maths_utils::integer_ticks;
