//! Checkmark contracts (CHECK-001 through CHECK-002)
//!
//! `check_item` changes one item. `check_item_alone` is the only operation
//! that makes checkmarks exclusive; the multi-check flag is advisory.

use crate::common::*;
use popmenu::{ItemFlags, MenuItem, NumberPrefix, PopupMenu};

/// CONTRACT CHECK-001: Exclusive checking
mod exclusive {
    use super::*;

    #[test]
    fn contract_check_item_alone_leaves_exactly_one_checked() {
        for k in 0..5 {
            let mut menu = five_item_menu();
            menu.check_item(0, true);
            menu.check_item(4, true);

            assert!(menu.check_item_alone(k));

            let checked: Vec<usize> = (0..menu.n_items())
                .filter(|&i| menu.is_item_checked(i))
                .collect();
            assert_eq!(checked, vec![k]);
        }
    }

    #[test]
    fn contract_check_item_alone_ignores_submenu_contents() {
        let mut menu = effects_menu(None);
        menu.get_item_mut(1)
            .and_then(MenuItem::submenu_mut)
            .unwrap()
            .check_item(0, true);

        menu.check_item_alone(3);

        assert!(menu.item_at_path(&[1, 0]).unwrap().is_checked());
        assert!(menu.is_item_checked(3));
    }
}

/// CONTRACT CHECK-002: Multi-check flag enforces nothing
mod advisory_multi_check {
    use super::*;

    #[test]
    fn contract_single_check_menu_still_allows_many_checks() {
        let mut menu = PopupMenu::with_options(NumberPrefix::None, false);
        for text in ["A", "B", "C"] {
            menu.add_text_item(text, None, ItemFlags::empty());
        }

        for i in 0..3 {
            assert!(menu.check_item(i, true));
        }
        assert!((0..3).all(|i| menu.is_item_checked(i)));
        assert!(!menu.can_multi_check());
    }
}
