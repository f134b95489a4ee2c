//! Domain Layer
//!
//! The menu model itself, with no I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The menu tree (PopupMenu, MenuItem)
//! - `value_objects/` - Copyable presentation types (ItemFlags, NumberPrefix)
//! - `services/` - Tree-wide operations (flattening, nested selection, snapshots)
//! - `ports/` - Seams to application code (MenuCallback)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
