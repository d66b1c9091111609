//! Mouse and touch drag tracking for Yew components.
//!
//! [`use_drag`] returns handlers to bind on an element. While a gesture is
//! active it reports offsets from the start point to the optional callbacks;
//! a move callback may veto a state update by returning `false`.

pub mod capture;
pub mod error;
pub mod events;
pub mod hook;
pub mod input;
pub mod state;
pub mod tracker;
pub mod util;

pub use capture::CaptureTarget;
pub use error::DragError;
pub use hook::{DragHandlers, UseDragProps, use_drag};
pub use input::{DragEvent, InputKind, Point, PointerInput};
pub use state::DragState;
pub use tracker::{DragCallbacks, DragOutcome, DragTracker};
