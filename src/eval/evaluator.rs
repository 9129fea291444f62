use crate::{
    effects::transitions::{TransitionFrame, transition_frame},
    foundation::core::FrameIndex,
    foundation::error::{MarqueeError, MarqueeResult},
    timeline::{scene::SceneComponent, schedule::Timeline},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Timeline state for one frame, as consumed by the host sequencer.
pub struct EvaluatedFrame {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Mounted scene, if any.
    pub scene: Option<ActiveScene>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// The scene mounted at an evaluated frame.
pub struct ActiveScene {
    /// Position in the schedule.
    pub index: usize,
    /// Scene identifier.
    pub id: String,
    /// First frame of the scene on the timeline.
    pub start_frame: FrameIndex,
    /// Frame offset within the scene (0-based).
    pub local_frame: u64,
    /// Scene length in frames.
    pub duration_in_frames: u64,
    /// Transition overlays for this frame; empty when the scene has no transition.
    pub overlay: TransitionFrame,
}

/// Stateless evaluator from a scheduled timeline to per-frame state.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(timeline))]
    /// Evaluate one frame. Frames at or past the timeline end are an error.
    pub fn eval_frame<C: SceneComponent>(
        timeline: &Timeline<C>,
        frame: FrameIndex,
    ) -> MarqueeResult<EvaluatedFrame> {
        if frame.0 >= timeline.total_frames() {
            return Err(MarqueeError::evaluation(format!(
                "frame {} is out of bounds (timeline has {} frames)",
                frame.0,
                timeline.total_frames()
            )));
        }

        let scene = timeline.local_frame(frame).map(|(index, local_frame)| {
            let s = &timeline.scenes()[index];
            let overlay = s
                .component
                .transition()
                .map(|tr| transition_frame(local_frame, s.duration_in_frames, tr.kind, tr.direction))
                .unwrap_or_default();
            ActiveScene {
                index,
                id: s.component.id().to_string(),
                start_frame: s.start_frame,
                local_frame,
                duration_in_frames: s.duration_in_frames,
                overlay,
            }
        });

        Ok(EvaluatedFrame { frame, scene })
    }

    /// Evaluate every frame of the timeline in order.
    pub fn eval_all<C: SceneComponent>(
        timeline: &Timeline<C>,
    ) -> impl Iterator<Item = MarqueeResult<EvaluatedFrame>> + '_ {
        (0..timeline.total_frames()).map(move |f| Self::eval_frame(timeline, FrameIndex(f)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
