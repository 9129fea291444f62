use std::time::Duration;

use crate::{
    config::snap::SnapConfig,
    scroll::{
        pinned::PinnedRegion,
        snap::{SnapCoordinator, SnapSettle},
    },
};

/// Host-issued handle for an installed snap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SnapToken(pub u64);

/// The host animation engine seam: installs snap coordinators and removes them again.
pub trait SnapHost {
    /// Install `coordinator` as the active snap function, eased per `settle`.
    fn install(&mut self, coordinator: SnapCoordinator, settle: SnapSettle) -> SnapToken;
    /// Remove a snap previously returned by [`SnapHost::install`].
    fn remove(&mut self, token: SnapToken);
}

impl<H: SnapHost + ?Sized> SnapHost for &mut H {
    fn install(&mut self, coordinator: SnapCoordinator, settle: SnapSettle) -> SnapToken {
        (**self).install(coordinator, settle)
    }

    fn remove(&mut self, token: SnapToken) {
        (**self).remove(token)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Pending { ready_at: Duration },
    Active { token: SnapToken },
    Closed,
}

/// Owned snap registration tied to the lifetime of the component that pins sections.
///
/// Setup is deferred by [`SnapConfig::setup_delay`] so the host pin runtime can finish measuring.
/// The registration is released on [`SnapLifecycle::teardown`] or on drop, whichever comes first.
pub struct SnapLifecycle<H: SnapHost> {
    host: H,
    config: SnapConfig,
    state: State,
}

impl<H: SnapHost> SnapLifecycle<H> {
    /// Create an idle lifecycle bound to `host`.
    pub fn new(host: H, config: SnapConfig) -> Self {
        Self {
            host,
            config,
            state: State::Idle,
        }
    }

    /// Arm a deferred setup at `now + setup_delay`. An installed snap is removed first.
    pub fn schedule(&mut self, now: Duration) {
        if self.state == State::Closed {
            return;
        }
        self.release();
        let ready_at = now.saturating_add(self.config.setup_delay());
        tracing::debug!(?ready_at, "snap setup scheduled");
        self.state = State::Pending { ready_at };
    }

    /// Complete a pending setup once `now` reaches its deadline.
    ///
    /// Returns `true` when a snap is installed after the call. Without usable pinned regions the
    /// lifecycle returns to idle and nothing is installed.
    pub fn poll(&mut self, now: Duration, regions: &[PinnedRegion], max_scroll: f64) -> bool {
        if let State::Pending { ready_at } = self.state
            && now >= ready_at
        {
            self.install(regions, max_scroll);
        }
        self.is_active()
    }

    /// Rebuild an installed snap after the pinned regions changed (layout, resize).
    pub fn refresh(&mut self, regions: &[PinnedRegion], max_scroll: f64) -> bool {
        if matches!(self.state, State::Active { .. }) {
            self.release();
            self.install(regions, max_scroll);
        }
        self.is_active()
    }

    /// Cancel any pending setup and remove the installed snap. Idempotent.
    pub fn teardown(&mut self) {
        if self.state == State::Closed {
            return;
        }
        self.release();
        self.state = State::Closed;
        tracing::debug!("snap lifecycle closed");
    }

    /// `true` while a snap is installed on the host.
    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// `true` while a deferred setup is armed.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    /// `true` after [`SnapLifecycle::teardown`].
    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    fn install(&mut self, regions: &[PinnedRegion], max_scroll: f64) {
        let coordinator = SnapCoordinator::new(
            regions.iter().copied(),
            max_scroll,
            self.config.tolerance,
        );
        self.state = match coordinator {
            Some(c) => {
                let token = self.host.install(c, self.config.settle);
                tracing::debug!(?token, "snap installed");
                State::Active { token }
            }
            None => State::Idle,
        };
    }

    fn release(&mut self) {
        if let State::Active { token } = self.state {
            self.host.remove(token);
            tracing::debug!(?token, "snap removed");
        }
        self.state = State::Idle;
    }
}

impl<H: SnapHost> Drop for SnapLifecycle<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/lifecycle.rs"]
mod tests;
