//! Domain Entities
//!
//! The menu tree: menus own items, items may own a nested menu.

mod menu_item;
mod popup_menu;

pub use menu_item::MenuItem;
pub use popup_menu::PopupMenu;
