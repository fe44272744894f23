//! Sticky site header: logo, desktop navigation, and the mobile view picker.

use leptos::prelude::*;

use crate::state::ui::{UiState, View};

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

/// Class list for a desktop navigation button.
pub fn nav_button_class(active: bool) -> &'static str {
    if active { "nav__button nav__button--active" } else { "nav__button" }
}

/// Option value the mobile picker shows for the current view.
pub fn picker_value(ui: &UiState) -> &'static str {
    ui.view.key()
}

/// Header shown above every view.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_select = move |ev: leptos::ev::Event| {
        let key = event_target_value(&ev);
        let changed = ui.try_update(|u| u.select_key(&key)).unwrap_or(false);
        if !changed {
            log::warn!("unknown view key: {key}");
        }
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <button class="brand" type="button" on:click=move |_| ui.update(|u| u.select(View::Landing))>
                    <span class="brand__logo">"OA"</span>
                    <span class="brand__name">"OpenAcre"</span>
                </button>
                <nav class="nav nav--desktop">
                    {View::ALL
                        .into_iter()
                        .map(|view| {
                            view! {
                                <button
                                    type="button"
                                    class=move || nav_button_class(ui.with(|u| u.is_active(view)))
                                    on:click=move |_| ui.update(|u| u.select(view))
                                >
                                    {view.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <select
                    class="nav nav--mobile"
                    aria-label="Navigate"
                    prop:value=move || ui.with(picker_value)
                    on:change=on_select
                >
                    {View::ALL
                        .into_iter()
                        .map(|view| {
                            view! {
                                <option value=view.key()>
                                    {view.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </header>
    }
}
