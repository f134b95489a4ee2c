//! ItemFlags value object - display and selectability flags of a menu item

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flags carried by every menu item.
    ///
    /// Disabled, title and separator items are not selectable. The host layer
    /// enforces that; the model only records it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ItemFlags: u32 {
        /// Item is grayed out and not selectable
        const DISABLED = 1 << 0;
        /// Item is a title and not selectable
        const TITLE = 1 << 1;
        /// Item shows a checkmark
        const CHECKED = 1 << 2;
        /// Item is a separator
        const SEPARATOR = 1 << 3;
    }
}

impl ItemFlags {
    /// Flags that make an item non-selectable
    pub const NON_SELECTABLE: ItemFlags = ItemFlags::DISABLED
        .union(ItemFlags::TITLE)
        .union(ItemFlags::SEPARATOR);

    /// Returns true if none of the non-selectable flags are set
    pub fn is_selectable(&self) -> bool {
        !self.intersects(Self::NON_SELECTABLE)
    }
}
