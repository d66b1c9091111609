use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    /// A touch event arrived with an empty `touches` list (e.g. `touchend`).
    #[error("touch event carries no touch point")]
    NoTouchPoint,
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("failed to update `{event}` listener: {message}")]
    Listener { event: String, message: String },
}
