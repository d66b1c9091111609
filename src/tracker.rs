//! Idle/dragging state machine behind [`use_drag`](crate::use_drag).
//!
//! The tracker owns the committed [`DragState`] and, during a mouse drag, a
//! capture guard `C` whose `Drop` undoes the document-wide subscription.
//! It knows nothing about the DOM, so it runs the same natively and in the
//! browser.

use crate::input::{InputKind, PointerInput};
use crate::state::DragState;
use yew::Callback;

/// Caller supplied hooks into the gesture lifecycle.
///
/// `on_drag_move` returns whether the candidate state should be committed.
pub struct DragCallbacks<E> {
    pub on_drag_start: Option<Callback<(E, DragState)>>,
    pub on_drag_move: Option<Callback<(E, DragState), bool>>,
    pub on_drag_end: Option<Callback<(E, DragState)>>,
}

impl<E> Default for DragCallbacks<E> {
    fn default() -> Self {
        Self {
            on_drag_start: None,
            on_drag_move: None,
            on_drag_end: None,
        }
    }
}

impl<E> Clone for DragCallbacks<E> {
    fn clone(&self) -> Self {
        Self {
            on_drag_start: self.on_drag_start.clone(),
            on_drag_move: self.on_drag_move.clone(),
            on_drag_end: self.on_drag_end.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Handler was a no-op (idle, or the event had no usable position).
    Ignored,
    Started,
    Moved,
    /// `on_drag_move` rejected the candidate state.
    Vetoed,
    Ended,
}

impl DragOutcome {
    /// Whether the committed state changed and the host should re-render.
    pub fn committed(self) -> bool {
        matches!(self, DragOutcome::Started | DragOutcome::Moved | DragOutcome::Ended)
    }
}

pub struct DragTracker<E, C = ()> {
    state: DragState,
    callbacks: DragCallbacks<E>,
    capture: Option<C>,
}

impl<E, C> Default for DragTracker<E, C> {
    fn default() -> Self {
        Self {
            state: DragState::default(),
            callbacks: DragCallbacks::default(),
            capture: None,
        }
    }
}

impl<E: PointerInput + Clone, C> DragTracker<E, C> {
    pub fn new(callbacks: DragCallbacks<E>) -> Self {
        Self {
            callbacks,
            ..Default::default()
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// True while a mouse drag holds its global capture.
    pub fn is_captured(&self) -> bool {
        self.capture.is_some()
    }

    pub fn set_callbacks(&mut self, callbacks: DragCallbacks<E>) {
        self.callbacks = callbacks;
    }

    /// Begins a gesture at the event's position.
    ///
    /// Any capture left over from an earlier gesture is dropped before
    /// `acquire` runs; `acquire` is only called for mouse input.
    pub fn start(
        &mut self,
        event: &E,
        now: f64,
        acquire: impl FnOnce() -> Option<C>,
    ) -> DragOutcome {
        let at = match event.position() {
            Ok(at) => at,
            Err(err) => {
                log::warn!("drag start ignored: {err}");
                return DragOutcome::Ignored;
            }
        };
        self.capture = None;
        self.state = DragState::started(at, now);
        if event.kind() == InputKind::Mouse {
            self.capture = acquire();
        }
        log::debug!("drag start at ({}, {}) via {:?}", at.x, at.y, event.kind());
        if let Some(cb) = &self.callbacks.on_drag_start {
            cb.emit((event.clone(), self.state));
        }
        DragOutcome::Started
    }

    pub fn move_to(&mut self, event: &E) -> DragOutcome {
        if !self.state.is_dragging() {
            return DragOutcome::Ignored;
        }
        let at = match event.position() {
            Ok(at) => at,
            Err(err) => {
                log::warn!("drag move ignored: {err}");
                return DragOutcome::Ignored;
            }
        };
        let Some(candidate) = self.state.moved_to(at) else {
            return DragOutcome::Ignored;
        };
        if let Some(cb) = &self.callbacks.on_drag_move {
            if !cb.emit((event.clone(), candidate)) {
                return DragOutcome::Vetoed;
            }
        }
        self.state = candidate;
        DragOutcome::Moved
    }

    pub fn end(&mut self, event: &E) -> DragOutcome {
        if !self.state.is_dragging() {
            return DragOutcome::Ignored;
        }
        // idle never holds a capture, whichever input ends the gesture
        self.capture = None;
        let last = self.state;
        if let Some(cb) = &self.callbacks.on_drag_end {
            cb.emit((event.clone(), last));
        }
        self.state = DragState::default();
        log::debug!("drag end, offset {:?}", last.offset());
        DragOutcome::Ended
    }

    /// Drops the capture and returns to idle without firing callbacks.
    pub fn release(&mut self) {
        self.capture = None;
        self.state = DragState::default();
    }
}
