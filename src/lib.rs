//! Popmenu - data model and selection protocol for popup menus
//!
//! A [`PopupMenu`] is an ordered list of [`MenuItem`]s (plain, checkable,
//! titles, separators, and submenu holders) plus the state a host needs to
//! report which entry the user picked and to run application logic for it.
//! Nothing here renders or reads input; a host layer walks the model, shows
//! it, and reports the chosen index back.
//!
//! ```
//! use popmenu::{ItemFlags, MenuCallback, PopupMenu};
//!
//! let mut menu = PopupMenu::new();
//! menu.set_function(MenuCallback::new(|index, item| {
//!     println!("picked {index}: {}", item.text());
//! }));
//! menu.add_text_item("Mono", None, ItemFlags::empty());
//! menu.add_text_item("Stereo", None, ItemFlags::CHECKED);
//!
//! // ...host presents the menu, the user picks "Mono"...
//! menu.set_chosen_index(0);
//! menu.check_item_alone(0);
//! menu.exec_function()?;
//! # Ok::<(), popmenu::MenuError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use config::{load_with_warnings, DefinitionWarning, ItemDefinition, MenuDefinition};
pub use domain::entities::{MenuItem, PopupMenu};
pub use domain::ports::MenuCallback;
pub use domain::services::{FlattenedItem, ItemSnapshot, MenuSnapshot};
pub use domain::value_objects::{ItemFlags, NumberPrefix};
pub use error::{MenuError, MenuResult};
