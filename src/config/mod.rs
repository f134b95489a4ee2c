//! Declarative menu definitions
//!
//! Menus can be described in TOML (or JSON) and built into a [`PopupMenu`].
//! Unknown keys are reported as warnings rather than rejected, so a typo in a
//! definition file never prevents the menu from loading.
//!
//! This is an optional builder layer on top of the model. A [`PopupMenu`]
//! built by hand behaves exactly like one built from a definition, and
//! nothing in the model reads or writes these formats.
//!
//! [`PopupMenu`]: crate::domain::entities::PopupMenu

mod loader;
mod types;

pub use loader::{load, load_with_warnings, DefinitionWarning};
pub use types::{ItemDefinition, MenuDefinition};
