use crate::effects::transitions::{TransitionDirection, TransitionKind};

/// A timed visual segment: a renderable unit plus its length in frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene<C> {
    /// Host-defined renderable unit.
    pub component: C,
    /// Length in frames (must be > 0).
    pub frames: u64,
}

impl<C> Scene<C> {
    /// Pair a component with its length.
    pub fn new(component: C, frames: u64) -> Self {
        Self { component, frames }
    }
}

/// Transition overlay attached to a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneTransition {
    /// Overlay kind.
    pub kind: TransitionKind,
    /// Which boundaries are ramped.
    #[serde(default)]
    pub direction: TransitionDirection,
}

/// Components that can be evaluated frame-by-frame.
pub trait SceneComponent {
    /// Stable identifier used in diagnostics and evaluated output.
    fn id(&self) -> &str;

    /// Transition overlay for this scene, if any.
    fn transition(&self) -> Option<SceneTransition> {
        None
    }
}

/// Named scene with an optional transition; the component type produced by timeline configs.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneSpec {
    /// Scene identifier.
    pub id: String,
    /// Optional transition overlay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<SceneTransition>,
}

impl SceneComponent for SceneSpec {
    fn id(&self) -> &str {
        &self.id
    }

    fn transition(&self) -> Option<SceneTransition> {
        self.transition
    }
}

impl SceneComponent for &str {
    fn id(&self) -> &str {
        self
    }
}

impl SceneComponent for String {
    fn id(&self) -> &str {
        self
    }
}
