use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_view_is_landing() {
    let state = UiState::default();
    assert_eq!(state.view, View::Landing);
    assert!(state.is_active(View::Landing));
}

// =============================================================
// View
// =============================================================

#[test]
fn view_labels_match_navigation() {
    let labels: Vec<_> = View::ALL.iter().map(|v| v.label()).collect();
    assert_eq!(labels, ["Home", "Owners", "Hunters", "Legal", "Contact"]);
}

#[test]
fn view_keys_round_trip() {
    for view in View::ALL {
        assert_eq!(View::from_key(view.key()), Some(view));
    }
    assert_eq!(View::from_key("Home"), None);
    assert_eq!(View::from_key("landing"), None);
}

#[test]
fn view_variants_are_distinct() {
    for (i, a) in View::ALL.iter().enumerate() {
        for (j, b) in View::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_activates_exactly_one_view() {
    let mut state = UiState::default();
    for view in View::ALL {
        state.select(view);
        let active: Vec<_> = View::ALL.into_iter().filter(|v| state.is_active(*v)).collect();
        assert_eq!(active, vec![view]);
    }
}

#[test]
fn select_key_ignores_unknown_keys() {
    let mut state = UiState::default();
    assert!(state.select_key("Hunters"));
    assert_eq!(state.view, View::Hunters);
    assert!(!state.select_key("Booking"));
    assert_eq!(state.view, View::Hunters);
}
