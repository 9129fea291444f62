use crate::{
    animation::ramp::Ramp,
    foundation::error::{MarqueeError, MarqueeResult},
};

/// Frames covered by the entry ramp at the start of a scene.
pub const ENTRY_RAMP_FRAMES: u64 = 20;
/// Frames covered by the exit ramp at the end of a scene.
pub const EXIT_RAMP_FRAMES: u64 = 15;

const ZOOM_SCALE_HIDDEN: f64 = 1.2;
const BLUR_MAX_PX: f64 = 20.0;
const BLUR_FILL_RGBA8: [u8; 4] = [0, 0, 0, 128];

/// Overlay transition kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Opaque overlay fading out (entry) or in (exit).
    Fade,
    /// Hard-edged gradient boundary sweeping across the frame.
    Wipe,
    /// Fade combined with a scale factor between 1.2 and 1.0.
    Zoom,
    /// Horizontal offset between +/-100% and 0%.
    Slide,
    /// Fade combined with a blur radius and a semi-transparent fill.
    Blur,
}

/// Which scene boundaries receive a transition ramp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionDirection {
    /// Entry ramp only.
    In,
    /// Exit ramp only.
    Out,
    /// Entry and exit ramps.
    #[default]
    Both,
}

impl TransitionDirection {
    fn has_entry(self) -> bool {
        matches!(self, Self::In | Self::Both)
    }

    fn has_exit(self) -> bool {
        matches!(self, Self::Out | Self::Both)
    }
}

/// Style values the host applies to an overlay surface for one frame.
///
/// Absent fields leave the corresponding property untouched.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayStyle {
    /// Overlay opacity in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Uniform scale factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Horizontal offset as a percentage of the frame width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_percent: Option<f64>,
    /// Blur radius in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_px: Option<f64>,
    /// Covered fraction of the frame for wipes, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wipe_percent: Option<f64>,
    /// Straight-alpha fill color painted under the overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_rgba8: Option<[u8; 4]>,
}

impl OverlayStyle {
    /// CSS gradient for wipe overlays: `color` up to the covered percentage, then transparent.
    pub fn wipe_gradient(&self, color: &str) -> Option<String> {
        let p = self.wipe_percent?;
        Some(format!(
            "linear-gradient(to right, {color} {p}%, transparent {p}%)"
        ))
    }
}

/// Overlays produced for one frame of a scene. The caller composites both when present.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionFrame {
    /// Entry-ramp overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<OverlayStyle>,
    /// Exit-ramp overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<OverlayStyle>,
}

impl TransitionFrame {
    /// `true` when neither overlay is present.
    pub fn is_empty(&self) -> bool {
        self.entry.is_none() && self.exit.is_none()
    }
}

/// Compute overlay styles for `frame` (0-based, local to the scene) of a scene lasting
/// `duration` frames.
///
/// Entry ramps run over `[0, ENTRY_RAMP_FRAMES]` from covering to clear; exit ramps run over
/// `[duration - EXIT_RAMP_FRAMES, duration]` from clear to covering. Scenes shorter than both
/// ramps combined get overlapping ramps.
pub fn transition_frame(
    frame: u64,
    duration: u64,
    kind: TransitionKind,
    direction: TransitionDirection,
) -> TransitionFrame {
    let f = frame as f64;
    let entry = direction.has_entry().then(|| {
        let ramp = Ramp::starting_at(0, ENTRY_RAMP_FRAMES);
        // 1.0 = covering, 0.0 = clear
        overlay_for(kind, ramp.sample(f, 1.0, 0.0), Edge::Entry)
    });
    let exit = direction.has_exit().then(|| {
        let ramp = Ramp::ending_at(duration, EXIT_RAMP_FRAMES);
        overlay_for(kind, ramp.sample(f, 0.0, 1.0), Edge::Exit)
    });
    TransitionFrame { entry, exit }
}

#[derive(Clone, Copy)]
enum Edge {
    Entry,
    Exit,
}

fn overlay_for(kind: TransitionKind, cover: f64, edge: Edge) -> OverlayStyle {
    match kind {
        TransitionKind::Fade => OverlayStyle {
            opacity: Some(cover),
            ..OverlayStyle::default()
        },
        TransitionKind::Wipe => OverlayStyle {
            wipe_percent: Some(cover * 100.0),
            ..OverlayStyle::default()
        },
        TransitionKind::Zoom => OverlayStyle {
            opacity: Some(cover),
            scale: Some(1.0 + (ZOOM_SCALE_HIDDEN - 1.0) * cover),
            ..OverlayStyle::default()
        },
        TransitionKind::Slide => {
            // Enters from the left, leaves to the right.
            let offset = cover * 100.0;
            let offset = match edge {
                Edge::Entry => 0.0 - offset,
                Edge::Exit => offset,
            };
            OverlayStyle {
                offset_percent: Some(offset),
                ..OverlayStyle::default()
            }
        }
        TransitionKind::Blur => OverlayStyle {
            opacity: Some(cover),
            blur_px: Some(BLUR_MAX_PX * cover),
            fill_rgba8: Some(BLUR_FILL_RGBA8),
            ..OverlayStyle::default()
        },
    }
}

/// Parse a transition kind name (case-insensitive).
pub fn parse_transition_kind(kind: &str) -> MarqueeResult<TransitionKind> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(MarqueeError::validation("transition kind must be non-empty"));
    }
    match kind.as_str() {
        "fade" => Ok(TransitionKind::Fade),
        "wipe" => Ok(TransitionKind::Wipe),
        "zoom" => Ok(TransitionKind::Zoom),
        "slide" => Ok(TransitionKind::Slide),
        "blur" => Ok(TransitionKind::Blur),
        _ => Err(MarqueeError::validation(format!(
            "unknown transition kind '{kind}'"
        ))),
    }
}

/// Parse a transition direction name (case-insensitive).
pub fn parse_transition_direction(direction: &str) -> MarqueeResult<TransitionDirection> {
    match direction.trim().to_ascii_lowercase().as_str() {
        "in" => Ok(TransitionDirection::In),
        "out" => Ok(TransitionDirection::Out),
        "both" | "" => Ok(TransitionDirection::Both),
        other => Err(MarqueeError::validation(format!(
            "unknown transition direction '{other}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
