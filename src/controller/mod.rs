//! View controller: the active screen, the committed workspace, and the
//! timed transition between workspaces.
//!
//! # State machine
//!
//! ```text
//!               select_project / back_to_personal
//!   ┌──────────┐ ───────────────────────────────▶ ┌──────────────────────────┐
//!   │ Idle(ws) │                                  │ Transitioning(ws, next)  │
//!   └──────────┘ ◀─────────────────────────────── └──────────────────────────┘
//!                 transition timer fires (tick):
//!                 ws = next, view = dashboard
//! ```
//!
//! Requests made while a transition is in flight are ignored. After the
//! commit a short cosmetic timer keeps the overlay on screen while it exits;
//! it is invisible to [`ControllerSnapshot`].

pub mod timer;
pub mod view;

pub use timer::{Clock, ManualClock, OneShot, SystemClock};
pub use view::{navigable_views, route, ScreenKind, ViewId, Workspace};

use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Durations of the two transition timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    /// Delay between a workspace request and its commit.
    pub transition: Duration,
    /// Cosmetic delay that lets the overlay finish exiting after the commit.
    pub overlay_exit: Duration,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(1500),
            overlay_exit: Duration::from_millis(300),
        }
    }
}

/// Outcome of a workspace switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRequest {
    /// A transition was started.
    Started,
    /// Ignored: a transition is already in flight or the controller was torn down.
    Ignored,
}

/// Emitted by [`ViewController::tick`] when a transition commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEvent {
    Committed { workspace: Workspace },
}

/// Read-only view of the controller handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerSnapshot {
    pub active_view: ViewId,
    pub is_project_workspace: bool,
    pub current_project_id: Option<String>,
    pub is_transitioning: bool,
}

/// What the transition overlay should draw, if anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay<'a> {
    /// Transition in flight; `progress` runs from 0 to 1 over the transition timer.
    Entering { target: &'a Workspace, progress: f64 },
    /// Commit done; `progress` runs from 0 to 1 over the exit delay.
    Exiting { target: &'a Workspace, progress: f64 },
}

#[derive(Debug)]
enum Phase {
    Idle,
    Transitioning { pending: Workspace, timer: OneShot },
}

/// Owner of the active view and workspace.
#[derive(Debug)]
pub struct ViewController<C: Clock = SystemClock> {
    clock: C,
    timings: TransitionTimings,
    lock_navigation: bool,
    active_view: ViewId,
    workspace: Workspace,
    phase: Phase,
    overlay_exit: Option<OneShot>,
    disposed: bool,
}

impl ViewController<SystemClock> {
    /// Controller on the wall clock, starting on the personal dashboard.
    pub fn new(timings: TransitionTimings) -> Self {
        Self::with_clock(SystemClock, timings)
    }
}

impl<C: Clock> ViewController<C> {
    /// Controller measuring its timers against `clock`.
    pub fn with_clock(clock: C, timings: TransitionTimings) -> Self {
        Self {
            clock,
            timings,
            lock_navigation: false,
            active_view: ViewId::Dashboard,
            workspace: Workspace::Personal,
            phase: Phase::Idle,
            overlay_exit: None,
            disposed: false,
        }
    }

    /// Ignore `set_active_view` while a transition is in flight.
    pub fn lock_navigation_during_transition(mut self, lock: bool) -> Self {
        self.lock_navigation = lock;
        self
    }

    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    /// The committed workspace. During a transition this is still the
    /// outgoing one.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Target of the in-flight transition.
    pub fn pending_workspace(&self) -> Option<&Workspace> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Transitioning { pending, .. } => Some(pending),
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn timings(&self) -> TransitionTimings {
        self.timings
    }

    /// Screen the router picks for the current state.
    pub fn current_screen(&self) -> Option<ScreenKind> {
        route(self.active_view, &self.workspace)
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            active_view: self.active_view,
            is_project_workspace: self.workspace.is_project_workspace(),
            current_project_id: self.workspace.current_project_id().map(str::to_string),
            is_transitioning: self.is_transitioning(),
        }
    }

    /// Switch screens. Returns whether the view was applied.
    pub fn set_active_view(&mut self, view: ViewId) -> bool {
        if self.disposed {
            return false;
        }
        if self.lock_navigation && self.is_transitioning() {
            debug!("Navigation to {} ignored during transition", view);
            return false;
        }
        if self.active_view != view {
            debug!("Active view {} -> {}", self.active_view, view);
        }
        self.active_view = view;
        true
    }

    /// Start a transition into the given project's workspace.
    pub fn select_project(&mut self, project_id: impl Into<String>) -> TransitionRequest {
        self.begin_transition(Workspace::project(project_id))
    }

    /// Start a transition back to the personal workspace.
    pub fn back_to_personal(&mut self) -> TransitionRequest {
        self.begin_transition(Workspace::Personal)
    }

    fn begin_transition(&mut self, target: Workspace) -> TransitionRequest {
        if self.disposed {
            warn!("Transition to {:?} requested after teardown", target);
            return TransitionRequest::Ignored;
        }
        if let Phase::Transitioning { pending, .. } = &self.phase {
            warn!(
                "Transition to {:?} ignored: already transitioning to {:?}",
                target, pending
            );
            return TransitionRequest::Ignored;
        }

        info!("Transition started: {:?} -> {:?}", self.workspace, target);
        let timer = OneShot::start(self.clock.now(), self.timings.transition);
        self.overlay_exit = None;
        self.phase = Phase::Transitioning {
            pending: target,
            timer,
        };
        TransitionRequest::Started
    }

    /// Advance both timers. Commits the pending workspace when the
    /// transition timer has fired.
    pub fn tick(&mut self) -> Option<TransitionEvent> {
        if self.disposed {
            return None;
        }
        let now = self.clock.now();

        if self.overlay_exit.is_some_and(|exit| exit.is_due(now)) {
            self.overlay_exit = None;
        }

        let due = matches!(&self.phase, Phase::Transitioning { timer, .. } if timer.is_due(now));
        if !due {
            return None;
        }

        let Phase::Transitioning { pending, .. } = std::mem::replace(&mut self.phase, Phase::Idle)
        else {
            return None;
        };

        self.workspace = pending;
        self.active_view = ViewId::Dashboard;
        self.overlay_exit = Some(OneShot::start(now, self.timings.overlay_exit));
        info!("Transition committed: now in {:?}", self.workspace);

        Some(TransitionEvent::Committed {
            workspace: self.workspace.clone(),
        })
    }

    /// Overlay state for the transition animation.
    pub fn overlay(&self) -> Option<Overlay<'_>> {
        let now = self.clock.now();
        match &self.phase {
            Phase::Transitioning { pending, timer } => Some(Overlay::Entering {
                target: pending,
                progress: timer.progress(now),
            }),
            Phase::Idle => self.overlay_exit.map(|exit| Overlay::Exiting {
                target: &self.workspace,
                progress: exit.progress(now),
            }),
        }
    }

    /// Cancel both timers. No commit can happen afterwards and every later
    /// request is ignored.
    pub fn teardown(&mut self) {
        if self.disposed {
            return;
        }
        if let Phase::Transitioning { pending, .. } = &self.phase {
            info!("Teardown cancelled transition to {:?}", pending);
        }
        self.phase = Phase::Idle;
        self.overlay_exit = None;
        self.disposed = true;
    }
}
