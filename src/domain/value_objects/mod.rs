//! Domain Value Objects
//!
//! Small copyable types that describe how an item or a menu is presented.

mod item_flags;
mod number_prefix;

pub use item_flags::ItemFlags;
pub use number_prefix::NumberPrefix;
