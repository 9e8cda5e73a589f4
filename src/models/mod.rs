mod nearest;
mod tooltip;
mod viewport;
mod visibility;

pub use nearest::{nearest_index, nearest_point};
pub use tooltip::{Tooltip, TooltipRow};
pub use viewport::ChartViewport;
pub use visibility::VisibleSeries;
