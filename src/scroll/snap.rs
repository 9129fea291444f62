use std::time::Duration;

use crate::{
    animation::ease::Ease,
    scroll::pinned::{PinnedRange, PinnedRegion},
};

/// Fraction of total scroll distance within which a snap engages around a pinned range.
pub const DEFAULT_SNAP_TOLERANCE: f64 = 0.02;

/// Snap targeting over a fixed snapshot of pinned ranges.
///
/// Built once per pin-set change (layout, resize); [`SnapCoordinator::snap`] is then pure.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapCoordinator {
    ranges: Vec<PinnedRange>,
    tolerance: f64,
}

/// Outcome of a snap query.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SnapOutcome {
    /// Scroll fraction the viewport should ease toward.
    pub target: f64,
    /// Index (in start-sorted order) of the range that captured the input, if any.
    pub range_index: Option<usize>,
}

impl SnapCoordinator {
    /// Build a coordinator from raw regions and the page's maximum scroll offset.
    ///
    /// Returns `None` (no snapping) when there are no usable regions or `max_scroll` is not a
    /// positive finite number.
    pub fn new(
        regions: impl IntoIterator<Item = PinnedRegion>,
        max_scroll: f64,
        tolerance: f64,
    ) -> Option<Self> {
        let mut ranges: Vec<PinnedRange> = regions
            .into_iter()
            .filter_map(|r| PinnedRange::normalize(r, max_scroll))
            .collect();
        if ranges.is_empty() {
            tracing::debug!(max_scroll, "no pinned ranges; snapping disabled");
            return None;
        }
        ranges.sort_by(|a, b| a.start.total_cmp(&b.start));
        let tolerance = if tolerance.is_finite() {
            tolerance.max(0.0)
        } else {
            DEFAULT_SNAP_TOLERANCE
        };
        tracing::debug!(ranges = ranges.len(), tolerance, "built snap coordinator");
        Some(Self { ranges, tolerance })
    }

    /// Build a coordinator with [`DEFAULT_SNAP_TOLERANCE`].
    pub fn with_default_tolerance(
        regions: impl IntoIterator<Item = PinnedRegion>,
        max_scroll: f64,
    ) -> Option<Self> {
        Self::new(regions, max_scroll, DEFAULT_SNAP_TOLERANCE)
    }

    /// Normalized ranges, sorted by start.
    pub fn ranges(&self) -> &[PinnedRange] {
        &self.ranges
    }

    /// Membership tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Snap target for the settled scroll fraction `v`.
    pub fn snap(&self, v: f64) -> f64 {
        self.snap_with_index(v).target
    }

    /// Snap target for `v` plus the index of the capturing range.
    ///
    /// Free scroll (no capturing range) returns `v` unchanged. Among capturing ranges the nearest
    /// center wins; ties go to the earlier range.
    pub fn snap_with_index(&self, v: f64) -> SnapOutcome {
        let free = SnapOutcome {
            target: v,
            range_index: None,
        };
        if !v.is_finite() {
            return free;
        }

        let mut best: Option<(usize, f64)> = None;
        for (i, r) in self.ranges.iter().enumerate() {
            if !r.contains(v, self.tolerance) {
                continue;
            }
            let d = (r.center - v).abs();
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        match best {
            Some((i, _)) => SnapOutcome {
                target: self.ranges[i].center,
                range_index: Some(i),
            },
            None => free,
        }
    }
}

/// How the host eases the viewport onto a snap target. Never affects the target itself.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SnapSettle {
    /// Easing curve.
    pub ease: Ease,
    /// Settle duration for negligible distances, in seconds.
    pub min_duration_s: f64,
    /// Settle duration for a full-page distance, in seconds.
    pub max_duration_s: f64,
    /// Idle time after the last scroll event before settling begins, in seconds.
    pub delay_s: f64,
}

impl Default for SnapSettle {
    fn default() -> Self {
        Self {
            ease: Ease::InOutCubic,
            min_duration_s: 0.2,
            max_duration_s: 0.6,
            delay_s: 0.05,
        }
    }
}

impl SnapSettle {
    /// Settle duration for travelling `distance` (a scroll fraction), scaled linearly between
    /// the minimum and maximum.
    pub fn duration_for(&self, distance: f64) -> Duration {
        let lo = self.min_duration_s.max(0.0);
        let hi = self.max_duration_s.max(lo);
        let t = if distance.is_finite() {
            distance.abs().clamp(0.0, 1.0)
        } else {
            1.0
        };
        Duration::from_secs_f64(lo + (hi - lo) * t)
    }

    /// Scroll fraction reached `elapsed` into a settle from `from` to `to`, eased along
    /// [`SnapSettle::duration_for`]. Holds `to` once the settle has finished.
    pub fn position_at(&self, elapsed: Duration, from: f64, to: f64) -> f64 {
        let total = self.duration_for(to - from);
        if total.is_zero() {
            return to;
        }
        let t = elapsed.as_secs_f64() / total.as_secs_f64();
        if t >= 1.0 {
            return to;
        }
        from + (to - from) * self.ease.apply(t)
    }

    /// `samples` evenly spaced positions over the whole settle, endpoints included.
    pub fn curve(&self, from: f64, to: f64, samples: usize) -> Vec<f64> {
        let total = self.duration_for(to - from);
        match samples {
            0 => Vec::new(),
            1 => vec![to],
            n => (0..n)
                .map(|i| {
                    let elapsed = total.mul_f64(i as f64 / (n - 1) as f64);
                    self.position_at(elapsed, from, to)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/snap.rs"]
mod tests;
