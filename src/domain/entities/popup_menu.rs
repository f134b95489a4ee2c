//! PopupMenu entity - ordered items plus selection state
//!
//! A menu owns its items, and through submenu items it owns nested menus. The
//! host layer walks the items to present them, reports the user's pick with
//! [`PopupMenu::set_chosen_index`], then usually calls
//! [`PopupMenu::exec_function`].
//!
//! Two state axes are independent: empty/populated (insert, remove, clear)
//! and unselected/selected (set once a selection is reported). Clearing the
//! items does not reset the selection.

use tracing::{debug, trace};

use crate::domain::entities::MenuItem;
use crate::domain::ports::MenuCallback;
use crate::domain::value_objects::{ItemFlags, NumberPrefix};
use crate::error::{MenuError, MenuResult};

/// Hierarchical popup menu model.
///
/// Must outlive the presentation cycle it is handed to, since selection and
/// callback execution happen after the host returns.
#[derive(Debug, Default)]
pub struct PopupMenu {
    items: Vec<MenuItem>,
    prefix: NumberPrefix,
    multi_check: bool,
    chosen: Option<usize>,
    callback: Option<MenuCallback>,
}

impl PopupMenu {
    /// Create an empty menu without numbering or multi-check
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty menu with a numbering hint and multi-check flag
    pub fn with_options(prefix: NumberPrefix, multi_check: bool) -> Self {
        Self {
            prefix,
            multi_check,
            ..Self::default()
        }
    }

    // === Insertion ===

    /// Insert an item at `index`, or append when `index` is `None` or past the end.
    ///
    /// Returns the inserted item for further configuration.
    pub fn add_item(&mut self, item: MenuItem, index: Option<usize>) -> &mut MenuItem {
        let len = self.items.len();
        let at = match index {
            Some(i) if i < len => i,
            _ => len,
        };

        self.items.insert(at, item);
        debug!(index = at, items = self.items.len(), "inserted menu item");
        &mut self.items[at]
    }

    /// Build a terminal item from `text` and `flags` and insert it
    pub fn add_text_item(
        &mut self,
        text: impl Into<String>,
        index: Option<usize>,
        flags: ItemFlags,
    ) -> &mut MenuItem {
        self.add_item(MenuItem::new(text, flags), index)
    }

    /// Insert a submenu that inherits this menu's callback.
    ///
    /// The submenu must not carry a callback of its own. If this menu has one,
    /// it is shared with the submenu so selections inside it reach the same
    /// logic.
    pub fn add_submenu_at(
        &mut self,
        text: impl Into<String>,
        index: Option<usize>,
        mut submenu: PopupMenu,
    ) -> MenuResult<&mut MenuItem> {
        let text = text.into();
        if submenu.callback.is_some() {
            return Err(MenuError::SubmenuHasCallback { text });
        }

        if let Some(callback) = &self.callback {
            debug!(submenu = %text, "propagating callback into submenu");
            submenu.callback = Some(callback.clone());
        }

        Ok(self.add_item(MenuItem::with_submenu(text, submenu), index))
    }

    /// Append a submenu that was built with its own callback.
    ///
    /// The submenu must already carry a callback. If this menu also has one,
    /// both must be the same shared callback. This menu's callback is never
    /// changed.
    pub fn add_submenu(
        &mut self,
        text: impl Into<String>,
        submenu: PopupMenu,
    ) -> MenuResult<&mut MenuItem> {
        let text = text.into();
        let Some(own) = submenu.callback.as_ref() else {
            return Err(MenuError::SubmenuMissingCallback { text });
        };

        if let Some(parent) = &self.callback {
            if !parent.same_as(own) {
                return Err(MenuError::CallbackConflict { text });
            }
        }

        Ok(self.add_item(MenuItem::with_submenu(text, submenu), None))
    }

    /// Insert a separator at `index`, or append
    pub fn add_separator(&mut self, index: Option<usize>) -> &mut MenuItem {
        self.add_item(MenuItem::separator(), index)
    }

    // === Removal ===

    /// Remove and return the item at `index`.
    ///
    /// The chosen index is left as is, like [`PopupMenu::clear`].
    pub fn remove_item(&mut self, index: usize) -> Option<MenuItem> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        debug!(index, items = self.items.len(), "removed menu item");
        Some(item)
    }

    /// Release every item (and every submenu they own)
    pub fn clear(&mut self) {
        debug!(released = self.items.len(), "cleared menu");
        self.items.clear();
    }

    // === Queries ===

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in display order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get_item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn get_item_mut(&mut self, index: usize) -> Option<&mut MenuItem> {
        self.items.get_mut(index)
    }

    /// Text of the item at `index`, or an empty string when there is none
    pub fn item_text(&self, index: usize) -> &str {
        self.items.get(index).map(MenuItem::text).unwrap_or("")
    }

    /// First item at this level carrying `tag`
    pub fn find_by_tag(&self, tag: i32) -> Option<(usize, &MenuItem)> {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.tag() == Some(tag))
    }

    // === Selection ===

    /// Record the index the user picked. Called by the host once per
    /// completed interaction; cancelled interactions never call it.
    pub fn set_chosen_index(&mut self, index: usize) {
        trace!(index, "chosen index set");
        self.chosen = Some(index);
    }

    pub fn chosen_index(&self) -> Option<usize> {
        self.chosen
    }

    /// Item at the chosen index, if something was chosen and it still exists
    pub fn chosen_item(&self) -> Option<&MenuItem> {
        self.chosen.and_then(|index| self.items.get(index))
    }

    // === Checkmarks ===

    /// Set or clear the checkmark on one item. Returns false if `index` is out of range.
    pub fn check_item(&mut self, index: usize, state: bool) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.set_checked(state);
                true
            }
            None => false,
        }
    }

    pub fn is_item_checked(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(MenuItem::is_checked)
    }

    /// Check the item at `index` and uncheck every other item at this level.
    ///
    /// Submenus are not touched. With an out-of-range index every item ends up
    /// unchecked and false is returned.
    pub fn check_item_alone(&mut self, index: usize) -> bool {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.set_checked(i == index);
        }
        index < self.items.len()
    }

    // === Presentation hints ===

    pub fn prefix(&self) -> NumberPrefix {
        self.prefix
    }

    pub fn set_prefix(&mut self, prefix: NumberPrefix) {
        self.prefix = prefix;
    }

    /// Set the prefix from its numeric code; out-of-range codes are ignored
    pub fn set_prefix_count(&mut self, count: u8) -> bool {
        match NumberPrefix::try_from(count) {
            Ok(prefix) => {
                self.prefix = prefix;
                true
            }
            Err(_) => false,
        }
    }

    /// Advisory only: nothing prevents several checked items. Use
    /// [`PopupMenu::check_item_alone`] for exclusive checking.
    pub fn can_multi_check(&self) -> bool {
        self.multi_check
    }

    pub fn set_multi_check(&mut self, multi_check: bool) {
        self.multi_check = multi_check;
    }

    // === Callback ===

    /// Install the selection callback.
    ///
    /// Submenus already attached keep whatever callback they had; sharing
    /// only happens when a submenu is inserted.
    pub fn set_function(&mut self, callback: MenuCallback) {
        self.callback = Some(callback);
    }

    pub fn function(&self) -> Option<&MenuCallback> {
        self.callback.as_ref()
    }

    /// Remove and return the selection callback
    pub fn take_function(&mut self) -> Option<MenuCallback> {
        self.callback.take()
    }

    /// Invoke the callback with the chosen index and item
    pub fn exec_function(&self) -> MenuResult<()> {
        let callback = self.callback.as_ref().ok_or(MenuError::NoCallback)?;
        let index = self.chosen.ok_or(MenuError::NoSelection)?;
        let item = self.items.get(index).ok_or(MenuError::StaleSelection {
            index,
            len: self.items.len(),
        })?;

        debug!(index, text = item.text(), "executing menu callback");
        callback.call(index, item);
        Ok(())
    }
}
