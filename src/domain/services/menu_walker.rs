//! Depth-first traversal of a menu tree.
//!
//! Hosts use these to render nested menus and to route a pick made inside a
//! submenu back to the menu that owns the picked item.

use tracing::debug;

use crate::domain::entities::{MenuItem, PopupMenu};
use crate::domain::value_objects::ItemFlags;
use crate::error::{MenuError, MenuResult};

/// A flattened representation of a menu item for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedItem {
    /// Index at each level, root menu first
    pub path: Vec<usize>,
    /// Nesting level (0 = root menu)
    pub depth: usize,
    /// Display text
    pub text: String,
    pub flags: ItemFlags,
    pub tag: Option<i32>,
    /// Whether this item opens a submenu
    pub has_submenu: bool,
}

impl PopupMenu {
    /// Every item of the tree, depth-first in display order
    pub fn flatten(&self) -> Vec<FlattenedItem> {
        let mut result = Vec::new();
        flatten_menu(self, 0, &[], &mut result);
        result
    }

    /// Path to the first item carrying `tag`, searching submenus depth-first
    pub fn find_path_by_tag(&self, tag: i32) -> Option<Vec<usize>> {
        for (i, item) in self.items().iter().enumerate() {
            if item.tag() == Some(tag) {
                return Some(vec![i]);
            }
            if let Some(mut rest) = item.submenu().and_then(|sub| sub.find_path_by_tag(tag)) {
                rest.insert(0, i);
                return Some(rest);
            }
        }
        None
    }

    /// Item at `path`, following submenus for every index but the last
    pub fn item_at_path(&self, path: &[usize]) -> Option<&MenuItem> {
        let (&last, parents) = path.split_last()?;
        let mut menu = self;
        for &step in parents {
            menu = menu.get_item(step)?.submenu()?;
        }
        menu.get_item(last)
    }

    /// Record a pick made at `path` and return the menu that owns the item.
    ///
    /// Every index but the last must name an item holding a submenu; the last
    /// becomes that submenu's chosen index. Call
    /// [`PopupMenu::exec_function`] on the returned menu to fire its callback.
    pub fn choose_path(&mut self, path: &[usize]) -> MenuResult<&mut PopupMenu> {
        let invalid = || MenuError::InvalidPath {
            path: path.to_vec(),
        };

        let (&last, parents) = path.split_last().ok_or_else(invalid)?;
        let mut menu = self;
        for &step in parents {
            menu = menu
                .get_item_mut(step)
                .and_then(MenuItem::submenu_mut)
                .ok_or_else(invalid)?;
        }

        if last >= menu.n_items() {
            return Err(invalid());
        }

        debug!(?path, "nested selection recorded");
        menu.set_chosen_index(last);
        Ok(menu)
    }
}

fn flatten_menu(menu: &PopupMenu, depth: usize, path: &[usize], out: &mut Vec<FlattenedItem>) {
    for (i, item) in menu.items().iter().enumerate() {
        let mut item_path = path.to_vec();
        item_path.push(i);

        out.push(FlattenedItem {
            path: item_path.clone(),
            depth,
            text: item.text().to_string(),
            flags: item.flags(),
            tag: item.tag(),
            has_submenu: item.has_submenu(),
        });

        if let Some(submenu) = item.submenu() {
            flatten_menu(submenu, depth + 1, &item_path, out);
        }
    }
}
