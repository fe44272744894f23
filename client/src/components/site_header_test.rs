use super::*;

#[test]
fn nav_button_class_marks_only_active_button() {
    assert_eq!(nav_button_class(true), "nav__button nav__button--active");
    assert_eq!(nav_button_class(false), "nav__button");
}

#[test]
fn exactly_one_nav_button_is_active_per_selection() {
    for selected in View::ALL {
        let ui = UiState { view: selected };
        let active: Vec<_> = View::ALL
            .into_iter()
            .filter(|view| nav_button_class(ui.is_active(*view)).ends_with("--active"))
            .collect();
        assert_eq!(active, [selected]);
    }
}

#[test]
fn picker_value_names_an_option_that_selects_the_same_view() {
    let options: Vec<_> = View::ALL.into_iter().map(View::key).collect();
    for selected in View::ALL {
        let value = picker_value(&UiState { view: selected });
        assert!(options.contains(&value));

        let mut ui = UiState::default();
        ui.select_key(value);
        assert_eq!(ui.view, selected);
    }
}
