//! MenuItem entity - one entry of a popup menu

use crate::domain::entities::PopupMenu;
use crate::domain::value_objects::ItemFlags;

/// One entry in a [`PopupMenu`].
///
/// An item is either a terminal entry (plain, checkable, title or separator)
/// or a holder for a nested submenu. The submenu is owned exclusively: moving
/// an item moves its whole subtree, and dropping it releases the subtree once.
#[derive(Debug, Default)]
pub struct MenuItem {
    text: String,
    flags: ItemFlags,
    tag: Option<i32>,
    submenu: Option<Box<PopupMenu>>,
}

impl MenuItem {
    /// Create a terminal item
    pub fn new(text: impl Into<String>, flags: ItemFlags) -> Self {
        Self {
            text: text.into(),
            flags,
            tag: None,
            submenu: None,
        }
    }

    /// Create a textless, non-selectable separator
    pub fn separator() -> Self {
        Self::new(String::new(), ItemFlags::SEPARATOR)
    }

    /// Create an item that opens `submenu`
    pub fn with_submenu(text: impl Into<String>, submenu: PopupMenu) -> Self {
        Self {
            text: text.into(),
            flags: ItemFlags::empty(),
            tag: None,
            submenu: Some(Box::new(submenu)),
        }
    }

    /// Attach a caller-defined tag
    pub fn with_tag(mut self, tag: i32) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: ItemFlags) {
        self.flags = flags;
    }

    pub fn is_enabled(&self) -> bool {
        !self.flags.contains(ItemFlags::DISABLED)
    }

    pub fn is_checked(&self) -> bool {
        self.flags.contains(ItemFlags::CHECKED)
    }

    pub fn is_title(&self) -> bool {
        self.flags.contains(ItemFlags::TITLE)
    }

    pub fn is_separator(&self) -> bool {
        self.flags.contains(ItemFlags::SEPARATOR)
    }

    /// Returns true unless the item is disabled, a title, or a separator
    pub fn is_selectable(&self) -> bool {
        self.flags.is_selectable()
    }

    /// Set or clear the checkmark, leaving the other flags alone
    pub fn set_checked(&mut self, state: bool) {
        self.flags.set(ItemFlags::CHECKED, state);
    }

    pub fn tag(&self) -> Option<i32> {
        self.tag
    }

    pub fn set_tag(&mut self, tag: Option<i32>) {
        self.tag = tag;
    }

    pub fn submenu(&self) -> Option<&PopupMenu> {
        self.submenu.as_deref()
    }

    pub fn submenu_mut(&mut self) -> Option<&mut PopupMenu> {
        self.submenu.as_deref_mut()
    }

    pub fn has_submenu(&self) -> bool {
        self.submenu.is_some()
    }

    /// Detach the submenu, handing ownership to the caller
    pub fn take_submenu(&mut self) -> Option<PopupMenu> {
        self.submenu.take().map(|submenu| *submenu)
    }
}
