// Thin add/remove listener helpers over `EventTarget`.

use crate::error::DragError;
use js_sys::Function;
use wasm_bindgen::JsValue;
use web_sys::EventTarget;

fn listener_error(event: &str, err: JsValue) -> DragError {
    DragError::Listener {
        event: event.to_string(),
        message: format!("{:?}", err),
    }
}

pub fn on(target: &EventTarget, event: &str, handler: &Function) -> Result<(), DragError> {
    target
        .add_event_listener_with_callback(event, handler)
        .map_err(|e| listener_error(event, e))
}

pub fn off(target: &EventTarget, event: &str, handler: &Function) -> Result<(), DragError> {
    target
        .remove_event_listener_with_callback(event, handler)
        .map_err(|e| listener_error(event, e))
}
