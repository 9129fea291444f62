//! Marquee computes the deterministic pieces behind two presentation front-ends.
//!
//! - **Scroll snapping** for landing pages with pinned sections: pinned regions reported by the
//!   host pin runtime become [`PinnedRange`]s, and a [`SnapCoordinator`] pulls a settled scroll
//!   fraction onto the nearest pinned center. [`SnapLifecycle`] owns the host registration.
//! - **Scene timelines** for programmatic promo videos: ordered `(component, frames)` pairs are
//!   placed back to back by [`Timeline::schedule`], and [`transition_frame`] produces per-frame
//!   overlay styles. [`Evaluator`] combines both for the host sequencer.
//!
//! Everything is pure and recomputed from inputs; the host owns rendering, pinning and playback.
//! Timelines and snap setups can be loaded from JSON ([`TimelineDef`], [`SnapConfig`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod effects;
mod eval;
mod foundation;
mod scroll;
mod timeline;

pub use animation::ease::Ease;
pub use animation::ramp::{Ramp, interpolate};
pub use config::snap::{SnapConfig, SnapInput};
pub use config::timeline::{SceneDef, TimelineDef};
pub use effects::transitions::{
    ENTRY_RAMP_FRAMES, EXIT_RAMP_FRAMES, OverlayStyle, TransitionDirection, TransitionFrame,
    TransitionKind, parse_transition_direction, parse_transition_kind, transition_frame,
};
pub use eval::evaluator::{ActiveScene, EvaluatedFrame, Evaluator};
pub use foundation::core::{Fps, FrameIndex, FrameRange};
pub use foundation::error::{MarqueeError, MarqueeResult};
pub use scroll::lifecycle::{SnapHost, SnapLifecycle, SnapToken};
pub use scroll::pinned::{PinnedRange, PinnedRegion};
pub use scroll::snap::{DEFAULT_SNAP_TOLERANCE, SnapCoordinator, SnapOutcome, SnapSettle};
pub use timeline::scene::{Scene, SceneComponent, SceneSpec, SceneTransition};
pub use timeline::schedule::{ScheduledScene, Timeline};
