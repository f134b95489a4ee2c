//! Domain Ports
//!
//! Seams between the menu model and application code.

mod selection_callback;

pub use selection_callback::MenuCallback;
