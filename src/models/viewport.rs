use crate::config::WalkBounds;
use crate::config::plot::Padding;
use crate::domain::SeriesSet;
use crate::utils::remap;

/// Domain <-> pixel mapping for a chart drawn inside a padded rectangle.
///
/// Pixel space has y growing downwards, so larger values map to smaller y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartViewport {
    pub origin: (f64, f64),
    pub size: (f64, f64),
    pub padding: Padding,
    pub min_time: f64,
    pub max_time: f64,
    pub bounds: WalkBounds,
}

impl ChartViewport {
    pub fn new(size: (f64, f64), padding: Padding, time_domain: (i64, i64)) -> Self {
        Self {
            origin: (0.0, 0.0),
            size,
            padding,
            min_time: time_domain.0 as f64,
            max_time: time_domain.1 as f64,
            bounds: WalkBounds::default(),
        }
    }

    /// Viewport spanning the set's first..last timestamps. `None` for an empty set.
    pub fn for_series(size: (f64, f64), padding: Padding, series: &SeriesSet) -> Option<Self> {
        series
            .time_domain()
            .map(|domain| Self::new(size, padding, domain))
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn left(&self) -> f64 {
        self.origin.0 + self.padding.left
    }

    pub fn right(&self) -> f64 {
        self.origin.0 + self.size.0 - self.padding.right
    }

    pub fn top(&self) -> f64 {
        self.origin.1 + self.padding.top
    }

    pub fn bottom(&self) -> f64 {
        self.origin.1 + self.size.1 - self.padding.bottom
    }

    /// Time to horizontal pixel. A single-instant domain pins to the left edge.
    pub fn x(&self, time_ms: f64) -> f64 {
        remap(time_ms, self.min_time, self.max_time, self.left(), self.right())
    }

    /// Value to vertical pixel (inverted).
    pub fn y(&self, value: f64) -> f64 {
        remap(value, self.bounds.min, self.bounds.max, self.bottom(), self.top())
    }

    /// Horizontal pixel back to time.
    pub fn time_at(&self, px: f64) -> f64 {
        remap(px, self.left(), self.right(), self.min_time, self.max_time)
    }

    /// Inside the plot area (edges included).
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CANVAS_STYLE;
    use approx::assert_relative_eq;

    fn viewport() -> ChartViewport {
        ChartViewport::new((1200.0, 600.0), CANVAS_STYLE.padding, (0, 14_400_000))
    }

    #[test]
    fn plot_area_excludes_padding() {
        let vp = viewport();
        assert_relative_eq!(vp.left(), 80.0);
        assert_relative_eq!(vp.right(), 1000.0);
        assert_relative_eq!(vp.top(), 40.0);
        assert_relative_eq!(vp.bottom(), 540.0);
    }

    #[test]
    fn time_maps_linearly_across_plot() {
        let vp = viewport();
        assert_relative_eq!(vp.x(0.0), 80.0);
        assert_relative_eq!(vp.x(14_400_000.0), 1000.0);
        assert_relative_eq!(vp.x(7_200_000.0), 540.0);
    }

    #[test]
    fn values_map_upwards() {
        let vp = viewport();
        assert_relative_eq!(vp.y(5.0), 40.0);
        assert_relative_eq!(vp.y(-5.0), 540.0);
        assert_relative_eq!(vp.y(0.0), 290.0);
        assert!(vp.y(1.0) < vp.y(-1.0));
    }

    #[test]
    fn time_at_inverts_x() {
        let vp = viewport().with_origin(15.0, 30.0);
        for t in [0.0, 1_234_567.0, 14_400_000.0] {
            assert_relative_eq!(vp.time_at(vp.x(t)), t, max_relative = 1e-9);
        }
    }

    #[test]
    fn origin_shifts_plot_area() {
        let vp = viewport().with_origin(100.0, 50.0);
        assert_relative_eq!(vp.x(0.0), 180.0);
        assert_relative_eq!(vp.y(5.0), 90.0);
    }

    #[test]
    fn single_instant_domain_pins_left() {
        let vp = ChartViewport::new((1200.0, 600.0), CANVAS_STYLE.padding, (500, 500));
        assert_relative_eq!(vp.x(500.0), vp.left());
        assert_relative_eq!(vp.time_at(700.0), 500.0);
    }

    #[test]
    fn containment_uses_plot_area() {
        let vp = viewport();
        assert!(vp.contains(80.0, 40.0));
        assert!(vp.contains(500.0, 300.0));
        assert!(!vp.contains(79.0, 300.0));
        assert!(!vp.contains(1001.0, 300.0));
        assert!(!vp.contains(500.0, 541.0));
    }
}
