use std::{path::Path, time::Duration};

use crate::{
    config::{read_json, read_json_path},
    foundation::error::{MarqueeError, MarqueeResult},
    scroll::{
        pinned::PinnedRegion,
        snap::{DEFAULT_SNAP_TOLERANCE, SnapCoordinator, SnapSettle},
    },
};

/// Snap setup for a landing page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Membership tolerance around each pinned range, as a scroll fraction.
    pub tolerance: f64,
    /// Delay between mounting and installing the snap, in milliseconds.
    pub setup_delay_ms: u64,
    /// Easing policy handed to the host.
    pub settle: SnapSettle,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SNAP_TOLERANCE,
            setup_delay_ms: 100,
            settle: SnapSettle::default(),
        }
    }
}

impl SnapConfig {
    /// Parse a snap config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MarqueeResult<Self> {
        let cfg: Self = read_json(r, "snap config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a snap config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        let cfg: Self = read_json_path(path.as_ref(), "snap config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate numeric ranges.
    pub fn validate(&self) -> MarqueeResult<()> {
        if !self.tolerance.is_finite() || !(0.0..=1.0).contains(&self.tolerance) {
            return Err(MarqueeError::validation(
                "snap tolerance must be finite and within [0, 1]",
            ));
        }
        let s = &self.settle;
        for (name, value) in [
            ("min_duration_s", s.min_duration_s),
            ("max_duration_s", s.max_duration_s),
            ("delay_s", s.delay_s),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MarqueeError::validation(format!(
                    "snap settle.{name} must be finite and >= 0"
                )));
            }
        }
        if s.max_duration_s < s.min_duration_s {
            return Err(MarqueeError::validation(
                "snap settle.max_duration_s must be >= min_duration_s",
            ));
        }
        Ok(())
    }

    /// Deferred setup delay.
    pub fn setup_delay(&self) -> Duration {
        Duration::from_millis(self.setup_delay_ms)
    }
}

/// Snapshot of a page's pinned regions, as measured by the host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SnapInput {
    /// Maximum scroll offset in pixels.
    pub max_scroll: f64,
    /// Raw pinned regions.
    #[serde(default)]
    pub regions: Vec<PinnedRegion>,
}

impl SnapInput {
    /// Parse a snapshot from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MarqueeResult<Self> {
        read_json(r, "snap input")
    }

    /// Parse a snapshot from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        read_json_path(path.as_ref(), "snap input")
    }

    /// Build a coordinator for this snapshot; `None` when snapping is disabled.
    pub fn coordinator(&self, config: &SnapConfig) -> Option<SnapCoordinator> {
        SnapCoordinator::new(
            self.regions.iter().copied(),
            self.max_scroll,
            config.tolerance,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/snap.rs"]
mod tests;
