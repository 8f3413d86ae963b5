/// Vertical scroll state of a surface, in whatever unit the surface uses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    pub offset: f64,
    /// Total content height.
    pub extent: f64,
    /// Visible height.
    pub viewport: f64,
}

impl ScrollPosition {
    pub fn new(offset: f64, extent: f64, viewport: f64) -> Self {
        Self {
            offset,
            extent,
            viewport,
        }
    }

    /// How far the content can scroll. Never negative.
    pub fn range(&self) -> f64 {
        let range = self.extent - self.viewport;
        if range.is_finite() && range > 0.0 {
            range
        } else {
            0.0
        }
    }

    /// Offset as a fraction of the range, in `[0, 1]`. Zero when nothing scrolls.
    pub fn fraction(&self) -> f64 {
        let range = self.range();
        if range == 0.0 {
            return 0.0;
        }
        let fraction = self.offset / range;
        if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// The offset that puts this surface at `fraction` of its range.
    pub fn offset_for(&self, fraction: f64) -> f64 {
        if !fraction.is_finite() {
            return 0.0;
        }
        fraction.clamp(0.0, 1.0) * self.range()
    }
}
