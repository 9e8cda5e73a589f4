// Domain types and value objects
mod series;

pub use series::{SeriesPoint, SeriesRequest, SeriesSet};
