//! Scene scheduling for frame-based video timelines.

pub(crate) mod scene;
pub(crate) mod schedule;
