//! `use_drag`: pointer drag tracking for function components.
//!
//! ```ignore
//! let drag = use_drag(UseDragProps {
//!     on_drag_move: Some(Callback::from(|(_, state): (DragEvent, DragState)| {
//!         state.offset_x.unwrap_or(0.0).abs() < 200.0
//!     })),
//!     ..Default::default()
//! });
//! html! {
//!     <div onmousedown={drag.on_mouse_down.clone()}
//!          onmousemove={drag.on_mouse_move.clone()}
//!          onmouseup={drag.on_mouse_up.clone()}
//!          ontouchstart={drag.on_touch_start.clone()}
//!          ontouchmove={drag.on_touch_move.clone()}
//!          ontouchend={drag.on_touch_end.clone()} />
//! }
//! ```

use crate::capture::{CaptureListeners, CaptureTarget, GlobalCapture};
use crate::input::DragEvent;
use crate::state::DragState;
use crate::tracker::{DragCallbacks, DragTracker};
use crate::util::now;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

type SharedTracker = Rc<RefCell<DragTracker<DragEvent, GlobalCapture>>>;
type SharedListeners = Rc<RefCell<Option<Rc<CaptureListeners>>>>;

#[derive(Clone, Default, PartialEq)]
pub struct UseDragProps {
    pub on_drag_start: Option<Callback<(DragEvent, DragState)>>,
    /// Return `false` to drop the candidate state for this move.
    pub on_drag_move: Option<Callback<(DragEvent, DragState), bool>>,
    pub on_drag_end: Option<Callback<(DragEvent, DragState)>>,
    pub capture_target: CaptureTarget,
}

impl UseDragProps {
    fn callbacks(&self) -> DragCallbacks<DragEvent> {
        DragCallbacks {
            on_drag_start: self.on_drag_start.clone(),
            on_drag_move: self.on_drag_move.clone(),
            on_drag_end: self.on_drag_end.clone(),
        }
    }
}

/// Bindings to attach to the dragged element, plus the last committed state.
#[derive(Clone, PartialEq)]
pub struct DragHandlers {
    pub on_touch_start: Callback<TouchEvent>,
    pub on_touch_move: Callback<TouchEvent>,
    pub on_touch_end: Callback<TouchEvent>,
    pub on_touch_cancel: Callback<TouchEvent>,
    pub on_mouse_down: Callback<MouseEvent>,
    pub on_mouse_move: Callback<MouseEvent>,
    pub on_mouse_up: Callback<MouseEvent>,
    pub state: DragState,
}

impl DragHandlers {
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }
}

fn drag_start(
    tracker: &SharedTracker,
    listeners: &SharedListeners,
    target: CaptureTarget,
    trigger: &UseForceUpdateHandle,
    event: DragEvent,
) {
    let outcome = tracker.borrow_mut().start(&event, now(), || {
        let listeners = listeners
            .borrow_mut()
            .get_or_insert_with(|| Rc::new(capture_listeners(tracker, trigger)))
            .clone();
        match GlobalCapture::acquire(target, listeners) {
            Ok(capture) => Some(capture),
            Err(err) => {
                log::warn!("dragging without global capture: {err}");
                None
            }
        }
    });
    if outcome.committed() {
        trigger.force_update();
    }
}

fn drag_move(tracker: &SharedTracker, trigger: &UseForceUpdateHandle, event: DragEvent) {
    let outcome = tracker.borrow_mut().move_to(&event);
    if outcome.committed() {
        trigger.force_update();
    }
}

fn drag_end(tracker: &SharedTracker, trigger: &UseForceUpdateHandle, event: DragEvent) {
    let outcome = tracker.borrow_mut().end(&event);
    if outcome.committed() {
        trigger.force_update();
    }
}

// Listeners hold the tracker weakly; the tracker owns the capture that
// holds the listeners.
fn capture_listeners(tracker: &SharedTracker, trigger: &UseForceUpdateHandle) -> CaptureListeners {
    let on_move = {
        let tracker = Rc::downgrade(tracker);
        let trigger = trigger.clone();
        move |e: MouseEvent| {
            if let Some(tracker) = tracker.upgrade() {
                drag_move(&tracker, &trigger, e.into());
            }
        }
    };
    let on_up = {
        let tracker = Rc::downgrade(tracker);
        let trigger = trigger.clone();
        move |e: MouseEvent| {
            if let Some(tracker) = tracker.upgrade() {
                drag_end(&tracker, &trigger, e.into());
            }
        }
    };
    CaptureListeners::new(on_move, on_up)
}

#[hook]
pub fn use_drag(props: UseDragProps) -> DragHandlers {
    let tracker: SharedTracker = use_mut_ref(DragTracker::default);
    let listeners: SharedListeners = use_mut_ref(|| None);
    let trigger = use_force_update();

    // latest callbacks win; they may be recreated on every render
    tracker.borrow_mut().set_callbacks(props.callbacks());

    // Unmounting mid-drag never sees a mouseup; drop the capture here.
    {
        let tracker = tracker.clone();
        let listeners = listeners.clone();
        use_effect_with((), move |_| {
            move || {
                tracker.borrow_mut().release();
                listeners.borrow_mut().take();
            }
        });
    }

    let target = props.capture_target;
    let start = {
        let tracker = tracker.clone();
        let listeners = listeners.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: DragEvent| drag_start(&tracker, &listeners, target, &trigger, e))
    };
    let move_ = {
        let tracker = tracker.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: DragEvent| drag_move(&tracker, &trigger, e))
    };
    let end = {
        let tracker = tracker.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: DragEvent| drag_end(&tracker, &trigger, e))
    };

    let state = tracker.borrow().state();
    DragHandlers {
        on_touch_start: start.reform(DragEvent::from),
        on_touch_move: move_.reform(DragEvent::from),
        on_touch_end: end.reform(DragEvent::from),
        on_touch_cancel: end.reform(DragEvent::from),
        on_mouse_down: start.reform(DragEvent::from),
        on_mouse_move: move_.reform(DragEvent::from),
        on_mouse_up: end.reform(DragEvent::from),
        state,
    }
}
