pub mod app;
pub mod drag_pad;
