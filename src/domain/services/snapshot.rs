//! Serializable, read-only copy of a menu tree for out-of-process hosts.

use serde::Serialize;

use crate::domain::entities::{MenuItem, PopupMenu};
use crate::domain::value_objects::{ItemFlags, NumberPrefix};
use crate::error::MenuResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSnapshot {
    pub prefix: NumberPrefix,
    pub multi_check: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_index: Option<usize>,
    pub has_callback: bool,
    pub items: Vec<ItemSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSnapshot {
    pub text: String,
    pub flags: ItemFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submenu: Option<MenuSnapshot>,
}

impl MenuSnapshot {
    pub fn to_json(&self) -> MenuResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> MenuResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&MenuItem> for ItemSnapshot {
    fn from(item: &MenuItem) -> Self {
        Self {
            text: item.text().to_string(),
            flags: item.flags(),
            tag: item.tag(),
            submenu: item.submenu().map(PopupMenu::snapshot),
        }
    }
}

impl PopupMenu {
    /// Copy the whole tree, including selection state, into a [`MenuSnapshot`]
    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            prefix: self.prefix(),
            multi_check: self.can_multi_check(),
            chosen_index: self.chosen_index(),
            has_callback: self.function().is_some(),
            items: self.items().iter().map(ItemSnapshot::from).collect(),
        }
    }
}
