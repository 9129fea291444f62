/// Raw pinned region as reported by the host pin primitive, in scroll pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinnedRegion {
    /// Scroll offset where pinning begins.
    pub start: f64,
    /// Scroll offset where pinning ends.
    pub end: f64,
}

impl PinnedRegion {
    /// Build a region from raw scroll offsets.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// A pinned region normalized to fractions of the maximum scroll offset.
///
/// Always satisfies `0 <= start <= center <= end <= 1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinnedRange {
    /// Normalized start fraction.
    pub start: f64,
    /// Normalized end fraction.
    pub end: f64,
    /// Midpoint between `start` and `end`.
    pub center: f64,
}

impl PinnedRange {
    /// Normalize `region` against `max_scroll`.
    ///
    /// Returns `None` when `max_scroll` is not positive and finite or the region has non-finite
    /// offsets. Inverted regions are swapped.
    pub fn normalize(region: PinnedRegion, max_scroll: f64) -> Option<Self> {
        if !(max_scroll.is_finite() && max_scroll > 0.0) {
            return None;
        }
        if !(region.start.is_finite() && region.end.is_finite()) {
            return None;
        }
        let a = (region.start / max_scroll).clamp(0.0, 1.0);
        let b = (region.end / max_scroll).clamp(0.0, 1.0);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Some(Self {
            start,
            end,
            center: start + (end - start) * 0.5,
        })
    }

    /// `true` when `v` lies within `[start - tolerance, end + tolerance]` (inclusive).
    pub fn contains(&self, v: f64, tolerance: f64) -> bool {
        self.start - tolerance <= v && v <= self.end + tolerance
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/pinned.rs"]
mod tests;
