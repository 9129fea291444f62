use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{MarqueeError, MarqueeResult},
    timeline::scene::Scene,
};

/// A scene placed on the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledScene<C> {
    /// Host-defined renderable unit.
    pub component: C,
    /// First frame the scene is mounted.
    pub start_frame: FrameIndex,
    /// Number of frames the scene stays mounted.
    pub duration_in_frames: u64,
}

impl<C> ScheduledScene<C> {
    /// Frames during which the scene is mounted, `[start, start + duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: self.start_frame,
            end: FrameIndex(self.start_frame.0.saturating_add(self.duration_in_frames)),
        }
    }
}

/// Ordered, non-overlapping scene schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<C> {
    scenes: Vec<ScheduledScene<C>>,
    total_frames: u64,
}

impl<C> Timeline<C> {
    /// Place `scenes` back to back in input order.
    ///
    /// Each scene starts where the previous one ends; the first starts at frame 0. Zero-length
    /// scenes and totals that overflow `u64` are rejected.
    #[tracing::instrument(skip(scenes))]
    pub fn schedule(scenes: impl IntoIterator<Item = Scene<C>>) -> MarqueeResult<Self> {
        let (scenes, total_frames) = scenes.into_iter().enumerate().try_fold(
            (Vec::new(), 0u64),
            |(mut out, cursor), (index, scene)| -> MarqueeResult<(Vec<ScheduledScene<C>>, u64)> {
                if scene.frames == 0 {
                    return Err(MarqueeError::validation(format!(
                        "scene {index} must last at least one frame"
                    )));
                }
                let range = FrameRange::from_len(FrameIndex(cursor), scene.frames).map_err(|_| {
                    MarqueeError::validation(format!("scene {index} overflows the timeline"))
                })?;
                out.push(ScheduledScene {
                    component: scene.component,
                    start_frame: range.start,
                    duration_in_frames: scene.frames,
                });
                Ok((out, range.end.0))
            },
        )?;
        tracing::debug!(scenes = scenes.len(), total_frames, "scheduled timeline");
        Ok(Self {
            scenes,
            total_frames,
        })
    }

    /// Like [`Timeline::schedule`], also requiring the total to equal `expected_total`.
    pub fn schedule_expecting(
        scenes: impl IntoIterator<Item = Scene<C>>,
        expected_total: u64,
    ) -> MarqueeResult<Self> {
        let timeline = Self::schedule(scenes)?;
        if timeline.total_frames != expected_total {
            return Err(MarqueeError::validation(format!(
                "scene durations sum to {} frames but the timeline declares {expected_total}",
                timeline.total_frames
            )));
        }
        Ok(timeline)
    }

    /// Total timeline length in frames.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Scheduled scenes in timeline order.
    pub fn scenes(&self) -> &[ScheduledScene<C>] {
        &self.scenes
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// `true` when no scenes are scheduled.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Iterate scheduled scenes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledScene<C>> {
        self.scenes.iter()
    }

    /// Scene mounted at `frame`, if any.
    pub fn active_at(&self, frame: FrameIndex) -> Option<&ScheduledScene<C>> {
        self.local_frame(frame).map(|(i, _)| &self.scenes[i])
    }

    /// Index of the scene mounted at `frame` and the frame offset within it.
    pub fn local_frame(&self, frame: FrameIndex) -> Option<(usize, u64)> {
        if frame.0 >= self.total_frames {
            return None;
        }
        // Scenes are contiguous and sorted by start.
        let i = self
            .scenes
            .partition_point(|s| s.start_frame.0 <= frame.0)
            .checked_sub(1)?;
        self.scenes[i].range().local(frame).map(|local| (i, local))
    }
}

impl<'a, C> IntoIterator for &'a Timeline<C> {
    type Item = &'a ScheduledScene<C>;
    type IntoIter = std::slice::Iter<'a, ScheduledScene<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/schedule.rs"]
mod tests;
