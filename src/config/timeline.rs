use std::{collections::BTreeSet, path::Path};

use crate::{
    config::{read_json, read_json_path},
    foundation::core::Fps,
    foundation::error::{MarqueeError, MarqueeResult},
    timeline::{
        scene::{Scene, SceneSpec, SceneTransition},
        schedule::Timeline,
    },
};

/// JSON-facing description of a promo video timeline.
///
/// ```json
/// {
///   "fps": { "num": 30, "den": 1 },
///   "duration_frames": 510,
///   "scenes": [
///     { "id": "intro", "frames": 180, "transition": { "kind": "fade", "direction": "in" } },
///     { "id": "features", "seconds": 5 },
///     { "id": "outro", "frames": 180, "transition": { "kind": "slide", "direction": "out" } }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineDef {
    /// Frame rate used to convert `seconds` durations.
    #[serde(default)]
    pub fps: Fps,
    /// Declared total length; when set, scene durations must sum to it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_frames: Option<u64>,
    /// Scenes in playback order.
    pub scenes: Vec<SceneDef>,
}

/// One scene entry. Exactly one of `frames` / `seconds` must be set.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDef {
    /// Unique scene identifier.
    pub id: String,
    /// Length in frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<u64>,
    /// Length in seconds, rounded to the nearest frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
    /// Optional transition overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<SceneTransition>,
}

impl TimelineDef {
    /// Parse a timeline from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MarqueeResult<Self> {
        read_json(r, "timeline")
    }

    /// Parse a timeline from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        read_json_path(path.as_ref(), "timeline")
    }

    /// Validate scene ids and durations.
    pub fn validate(&self) -> MarqueeResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.scenes.is_empty() {
            return Err(MarqueeError::validation("timeline must contain scenes"));
        }
        let mut seen = BTreeSet::new();
        for scene in &self.scenes {
            if scene.id.trim().is_empty() {
                return Err(MarqueeError::validation("scene id must be non-empty"));
            }
            if !seen.insert(scene.id.as_str()) {
                return Err(MarqueeError::validation(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }
            self.frames_for(scene)?;
        }
        Ok(())
    }

    /// Validate and schedule the scenes.
    pub fn into_timeline(self) -> MarqueeResult<Timeline<SceneSpec>> {
        self.validate()?;
        let scenes = self
            .scenes
            .iter()
            .map(|def| -> MarqueeResult<Scene<SceneSpec>> {
                Ok(Scene::new(
                    SceneSpec {
                        id: def.id.clone(),
                        transition: def.transition,
                    },
                    self.frames_for(def)?,
                ))
            })
            .collect::<MarqueeResult<Vec<_>>>()?;
        match self.duration_frames {
            Some(total) => Timeline::schedule_expecting(scenes, total),
            None => Timeline::schedule(scenes),
        }
    }

    fn frames_for(&self, scene: &SceneDef) -> MarqueeResult<u64> {
        let frames = match (scene.frames, scene.seconds) {
            (Some(f), None) => f,
            (None, Some(s)) => {
                if !s.is_finite() || s <= 0.0 {
                    return Err(MarqueeError::validation(format!(
                        "scene '{}' seconds must be finite and > 0",
                        scene.id
                    )));
                }
                self.fps.secs_to_frames_round(s)
            }
            _ => {
                return Err(MarqueeError::validation(format!(
                    "scene '{}' must set exactly one of frames/seconds",
                    scene.id
                )));
            }
        };
        if frames == 0 {
            return Err(MarqueeError::validation(format!(
                "scene '{}' must last at least one frame",
                scene.id
            )));
        }
        Ok(frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/timeline.rs"]
mod tests;
