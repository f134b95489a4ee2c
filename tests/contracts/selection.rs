//! Selection contracts (SEL-001 through SEL-002)
//!
//! The chosen index is set by the host once per completed interaction and is
//! independent of item insertion, removal and checkmarks.

use crate::common::*;
use popmenu::ItemFlags;

/// CONTRACT SEL-001: Chosen item is stable under unrelated edits
mod stable_choice {
    use super::*;

    #[test]
    fn contract_chosen_item_survives_unrelated_checks() {
        let mut menu = five_item_menu();
        menu.set_chosen_index(2);

        menu.check_item(0, true);
        menu.check_item(4, true);
        menu.check_item(1, false);

        assert_eq!(menu.chosen_item().unwrap().text(), "Item 2");
    }

    #[test]
    fn contract_unselected_menu_reports_absence() {
        let menu = five_item_menu();
        assert_eq!(menu.chosen_index(), None);
        assert!(menu.chosen_item().is_none());
    }
}

/// CONTRACT SEL-002: Populated and selected are independent axes
mod independent_axes {
    use super::*;

    #[test]
    fn contract_clear_does_not_unselect() {
        let mut menu = five_item_menu();
        menu.set_chosen_index(3);
        menu.clear();

        assert_eq!(menu.chosen_index(), Some(3));
        assert!(menu.chosen_item().is_none());

        for text in ["a", "b", "c", "d"] {
            menu.add_text_item(text, None, ItemFlags::empty());
        }
        // Same index now resolves against the new items
        assert_eq!(menu.chosen_item().unwrap().text(), "d");
    }

    #[test]
    fn contract_selection_out_of_range_is_absent_not_fatal() {
        let mut menu = five_item_menu();
        menu.set_chosen_index(17);
        assert!(menu.chosen_item().is_none());
        assert!(menu.get_item(17).is_none());
    }
}
