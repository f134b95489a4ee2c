//! Property tests for checkmarks and selection.

use proptest::prelude::*;

use popmenu::{ItemFlags, PopupMenu};

fn menu_with_checks(checks: &[bool]) -> PopupMenu {
    let mut menu = PopupMenu::new();
    for (i, &checked) in checks.iter().enumerate() {
        let flags = if checked { ItemFlags::CHECKED } else { ItemFlags::empty() };
        menu.add_text_item(format!("Item {i}"), None, flags);
    }
    menu
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after check_item_alone(k), exactly item k is checked.
    #[test]
    fn property_check_item_alone_is_exclusive(
        (checks, k) in proptest::collection::vec(any::<bool>(), 1..12)
            .prop_flat_map(|checks| {
                let len = checks.len();
                (Just(checks), 0..len)
            })
    ) {
        let mut menu = menu_with_checks(&checks);

        prop_assert!(menu.check_item_alone(k));
        for i in 0..menu.n_items() {
            prop_assert_eq!(menu.is_item_checked(i), i == k);
        }
    }

    /// PROPERTY: check_item touches only the addressed item.
    #[test]
    fn property_check_item_is_independent(
        checks in proptest::collection::vec(any::<bool>(), 0..12),
        index in 0usize..16,
        state in any::<bool>(),
    ) {
        let mut menu = menu_with_checks(&checks);

        let ok = menu.check_item(index, state);
        prop_assert_eq!(ok, index < checks.len());

        for (i, &was) in checks.iter().enumerate() {
            let expected = if i == index { state } else { was };
            prop_assert_eq!(menu.is_item_checked(i), expected);
        }
    }

    /// PROPERTY: the chosen item is the one inserted at that index, whatever
    /// checkmarks change afterwards.
    #[test]
    fn property_chosen_item_stable_under_checks(
        len in 1usize..10,
        chosen_seed in any::<prop::sample::Index>(),
        toggles in proptest::collection::vec((0usize..10, any::<bool>()), 0..20),
    ) {
        let mut menu = menu_with_checks(&vec![false; len]);
        let chosen = chosen_seed.index(len);
        menu.set_chosen_index(chosen);

        for (index, state) in toggles {
            menu.check_item(index, state);
        }

        let expected = format!("Item {chosen}");
        prop_assert_eq!(menu.chosen_item().map(|item| item.text()), Some(expected.as_str()));
    }
}
