//! Document-wide mouse capture for the duration of a drag.
//!
//! The `mousemove`/`mouseup` closures live as long as the hook that made
//! them; a [`GlobalCapture`] only registers them on a target and removes the
//! registration again when dropped. Dropping the guard from inside the
//! `mouseup` listener is therefore fine: the running closure stays alive.

use crate::error::DragError;
use crate::events;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, MouseEvent};

/// Where move/up listeners are attached while a mouse drag is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureTarget {
    #[default]
    Body,
    Document,
    Window,
}

impl CaptureTarget {
    pub fn resolve(self) -> Result<EventTarget, DragError> {
        let window = web_sys::window().ok_or(DragError::NoWindow)?;
        match self {
            CaptureTarget::Window => Ok(window.into()),
            CaptureTarget::Document => Ok(window.document().ok_or(DragError::NoDocument)?.into()),
            CaptureTarget::Body => {
                let document = window.document().ok_or(DragError::NoDocument)?;
                Ok(document.body().ok_or(DragError::NoBody)?.into())
            }
        }
    }
}

pub struct CaptureListeners {
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_up: Closure<dyn FnMut(MouseEvent)>,
}

impl CaptureListeners {
    pub fn new(
        on_move: impl FnMut(MouseEvent) + 'static,
        on_up: impl FnMut(MouseEvent) + 'static,
    ) -> Self {
        Self {
            on_move: Closure::wrap(Box::new(on_move) as Box<dyn FnMut(MouseEvent)>),
            on_up: Closure::wrap(Box::new(on_up) as Box<dyn FnMut(MouseEvent)>),
        }
    }
}

/// Registration of [`CaptureListeners`] on a target; removed on drop.
pub struct GlobalCapture {
    target: EventTarget,
    listeners: Rc<CaptureListeners>,
}

impl GlobalCapture {
    pub fn acquire(
        target: CaptureTarget,
        listeners: Rc<CaptureListeners>,
    ) -> Result<Self, DragError> {
        let capture = Self {
            target: target.resolve()?,
            listeners,
        };
        // on failure `capture` drops here and detaches whatever got attached
        events::on(
            &capture.target,
            "mousemove",
            capture.listeners.on_move.as_ref().unchecked_ref(),
        )?;
        events::on(
            &capture.target,
            "mouseup",
            capture.listeners.on_up.as_ref().unchecked_ref(),
        )?;
        Ok(capture)
    }
}

impl Drop for GlobalCapture {
    fn drop(&mut self) {
        let registered = [
            ("mousemove", &self.listeners.on_move),
            ("mouseup", &self.listeners.on_up),
        ];
        for (event, handler) in registered {
            let detached = events::off(&self.target, event, handler.as_ref().unchecked_ref());
            if let Err(err) = detached {
                log::warn!("drag capture release failed: {err}");
            }
        }
    }
}
