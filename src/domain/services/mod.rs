//! Domain Services
//!
//! Tree-wide operations on menus: traversal, nested selection and snapshots.
//! No I/O happens here.

mod menu_walker;
mod snapshot;

pub use menu_walker::FlattenedItem;
pub use snapshot::{ItemSnapshot, MenuSnapshot};
