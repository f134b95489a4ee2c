//! Ownership contracts (OWN-001 through OWN-003)
//!
//! A menu owns its items exclusively, and through submenu items it owns the
//! nested menus. Releasing a menu releases every item exactly once.

use crate::common::*;
use popmenu::{ItemFlags, MenuCallback, MenuItem, PopupMenu};

/// CONTRACT OWN-001: Dropping a parent releases the whole subtree
mod subtree_release {
    use super::*;

    #[test]
    fn contract_dropping_parent_releases_every_submenu() {
        init_tracing();
        let log = CallLog::default();
        let callback = log.callback();

        let menu = effects_menu(Some(callback.clone()));
        // caller + root + "Add effect" + "Filters"
        assert_eq!(callback.share_count(), 4);

        drop(menu);
        assert_eq!(callback.share_count(), 1);
    }

    #[test]
    fn contract_clear_releases_subtree_but_keeps_menu() {
        let log = CallLog::default();
        let callback = log.callback();

        let mut menu = effects_menu(Some(callback.clone()));
        menu.clear();

        // Only the caller and the root menu itself still hold it
        assert_eq!(callback.share_count(), 2);
        assert!(menu.is_empty());
        assert!(menu.function().unwrap().same_as(&callback));
    }

    #[test]
    fn contract_removed_item_carries_its_subtree() {
        let callback = MenuCallback::new(|_, _| {});
        let mut menu = effects_menu(Some(callback.clone()));

        let mut removed = menu.remove_item(1).unwrap();
        assert_eq!(menu.n_items(), 3);
        assert_eq!(callback.share_count(), 4);

        let effects = removed.take_submenu().unwrap();
        assert_eq!(effects.n_items(), 3);
        drop(effects);
        assert_eq!(callback.share_count(), 2);
    }
}

/// CONTRACT OWN-002: An item lives in exactly one menu
mod single_owner {
    use super::*;

    #[test]
    fn contract_moving_item_between_menus_transfers_it() {
        let mut first = PopupMenu::new();
        first.add_text_item("Travelling", None, ItemFlags::CHECKED);

        let mut second = PopupMenu::new();
        let item = first.remove_item(0).unwrap();
        second.add_item(item, None);

        assert!(first.is_empty());
        assert_eq!(second.item_text(0), "Travelling");
        assert!(second.is_item_checked(0));
    }

    #[test]
    fn contract_submenu_detaches_into_standalone_menu() {
        let mut menu = effects_menu(None);
        let filters = menu
            .get_item_mut(1)
            .and_then(MenuItem::submenu_mut)
            .and_then(|effects| effects.get_item_mut(2))
            .and_then(MenuItem::take_submenu)
            .unwrap();

        assert_eq!(filters.item_text(0), "Low pass");
        assert!(!menu.item_at_path(&[1, 2]).unwrap().has_submenu());
    }
}

/// CONTRACT OWN-003: Item count tracks inserts, removals and clears
mod item_count {
    use super::*;

    #[test]
    fn contract_count_follows_operations() {
        let mut menu = PopupMenu::new();
        menu.add_item(MenuItem::new("A", ItemFlags::empty()), None);
        menu.add_separator(None);
        menu.add_text_item("B", Some(0), ItemFlags::empty());
        assert_eq!(menu.n_items(), 3);

        menu.remove_item(1);
        assert_eq!(menu.n_items(), 2);

        menu.clear();
        assert_eq!(menu.n_items(), 0);

        menu.add_separator(None);
        assert_eq!(menu.n_items(), 1);
    }
}
