//! Declarative menu definitions

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{MenuItem, PopupMenu};
use crate::domain::value_objects::{ItemFlags, NumberPrefix};
use crate::error::MenuResult;

/// A menu described in TOML or JSON.
///
/// ```toml
/// prefix = 1
/// multi_check = false
///
/// [[items]]
/// text = "Sine"
/// checked = true
///
/// [[items]]
/// separator = true
///
/// [[items]]
/// text = "More"
/// [[items.submenu.items]]
/// text = "Noise"
/// tag = 12
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDefinition {
    #[serde(default)]
    pub prefix: u8,

    #[serde(default)]
    pub multi_check: bool,

    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

/// One item of a [`MenuDefinition`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<i32>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub title: bool,

    #[serde(default)]
    pub checked: bool,

    #[serde(default)]
    pub separator: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<MenuDefinition>,
}

impl MenuDefinition {
    pub fn from_toml_str(content: &str) -> MenuResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> MenuResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the menu tree.
    ///
    /// Submenus are attached as plain items, so no callback is involved;
    /// install one on the result afterwards.
    pub fn build(&self) -> MenuResult<PopupMenu> {
        let prefix = NumberPrefix::try_from(self.prefix)?;
        let mut menu = PopupMenu::with_options(prefix, self.multi_check);

        for item in &self.items {
            menu.add_item(item.build()?, None);
        }

        debug!(items = menu.n_items(), "built menu from definition");
        Ok(menu)
    }
}

impl ItemDefinition {
    pub fn flags(&self) -> ItemFlags {
        let mut flags = ItemFlags::empty();
        flags.set(ItemFlags::DISABLED, self.disabled);
        flags.set(ItemFlags::TITLE, self.title);
        flags.set(ItemFlags::CHECKED, self.checked);
        flags.set(ItemFlags::SEPARATOR, self.separator);
        flags
    }

    fn build(&self) -> MenuResult<MenuItem> {
        let mut item = match &self.submenu {
            Some(submenu) => {
                let mut item = MenuItem::with_submenu(self.text.clone(), submenu.build()?);
                item.set_flags(self.flags());
                item
            }
            None => MenuItem::new(self.text.clone(), self.flags()),
        };
        item.set_tag(self.tag);
        Ok(item)
    }
}
