//! Scroll-snap targeting for pinned landing-page sections.
//!
//! The host pin runtime reports raw pixel offsets for each pinned section; this module normalizes
//! them into [`PinnedRange`]s, picks snap targets, and owns the host snap registration lifetime.

pub(crate) mod lifecycle;
pub(crate) mod pinned;
pub(crate) mod snap;
