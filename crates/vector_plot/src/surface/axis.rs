//! Axis range bookkeeping.

/// Inclusive range of one coordinate axis.
///
/// Plot operations only ever widen a range: the high bound rises to cover
/// expanded coordinates and the low bound falls to cover them (and is pinned
/// at or below zero once a vector is drawn, so the origin stays visible).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Lower bound
    pub lo: f32,
    /// Upper bound
    pub hi: f32,
}

impl AxisRange {
    /// Create a range with explicit bounds
    pub fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Widen the range to cover `expansion * extreme` for a vector whose
    /// smallest and largest components are `min_component` / `max_component`.
    ///
    /// Never shrinks either bound. The low bound is additionally clamped to
    /// at most zero so the arrow tails at the origin are always in frame.
    pub fn extend(&mut self, min_component: f32, max_component: f32, expansion: f32) {
        self.hi = self.hi.max(expansion * max_component);
        self.lo = self.lo.min(expansion * min_component).min(0.0);
    }

    /// Width of the range
    pub fn span(&self) -> f32 {
        self.hi - self.lo
    }
}

impl Default for AxisRange {
    /// Fresh surfaces start with the unit range `0..=1`.
    fn default() -> Self {
        Self { lo: 0.0, hi: 1.0 }
    }
}
