//! Error types for popmenu
//!
//! Absence (out-of-range index, nothing chosen) is never an error here; those
//! lookups return `Option` or `bool`. Errors cover contract violations when
//! composing menus, misuse of callback execution, and definition loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// Submenu inserted at an explicit position already has its own callback
    #[error("submenu '{text}' already has a callback; it must inherit the parent's")]
    SubmenuHasCallback { text: String },

    /// Submenu appended via the pre-built path carries no callback
    #[error("submenu '{text}' has no callback; build it with one before appending")]
    SubmenuMissingCallback { text: String },

    /// Parent and submenu each carry a different callback
    #[error("submenu '{text}' and its parent define different callbacks")]
    CallbackConflict { text: String },

    /// `exec_function` called with no callback installed
    #[error("no callback installed on this menu")]
    NoCallback,

    /// `exec_function` called before anything was chosen
    #[error("no item has been chosen")]
    NoSelection,

    /// Chosen index no longer points at an item (e.g. after `clear`)
    #[error("chosen index {index} is out of range for a menu with {len} items")]
    StaleSelection { index: usize, len: usize },

    /// A nested selection path does not resolve to an item
    #[error("path {path:?} does not resolve to a menu item")]
    InvalidPath { path: Vec<usize> },

    /// Numeric prefix outside 0..=3
    #[error("invalid number prefix {value}; expected 0, 1, 2 or 3")]
    InvalidPrefix { value: u8 },

    /// Menu definition failed to deserialize
    #[error("invalid menu definition in {file}: {message}")]
    InvalidDefinition { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
