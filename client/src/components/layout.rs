//! Shared page-layout primitives: sections, labelled fields, inputs, pills,
//! and info cards.
//!
//! DESIGN
//! ======
//! Pages compose these instead of repeating markup so that every section and
//! form field gets the same structure and class names.

use leptos::prelude::*;

/// Two-way binding between one string field of a form record and an input.
///
/// Returns the derived value signal and the input callback that writes back.
pub fn field_binding<T>(form: RwSignal<T>, get: fn(&T) -> String, set: fn(&mut T, String)) -> (Signal<String>, Callback<String>)
where
    T: Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(get));
    let on_input = Callback::new(move |next: String| form.update(|record| set(record, next)));
    (value, on_input)
}

/// Page section with an optional eyebrow/title/subtitle header.
#[component]
pub fn Section(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] eyebrow: Option<&'static str>,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let has_header = eyebrow.is_some() || title.is_some() || subtitle.is_some();
    view! {
        <section id=id class="section">
            <div class="section__inner">
                {has_header.then(|| view! {
                    <header class="section__header">
                        {eyebrow.map(|text| view! { <div class="section__eyebrow">{text}</div> })}
                        {title.map(|text| view! { <h2 class="section__title">{text}</h2> })}
                        {subtitle.map(|text| view! { <p class="section__subtitle">{text}</p> })}
                    </header>
                })}
                {children()}
            </div>
        </section>
    }
}

/// Form label wrapping one control; required fields get a red asterisk.
#[component]
pub fn Field(label: &'static str, #[prop(optional)] required: bool, children: Children) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">
                {label}
                {required.then(|| view! { <span class="field__required">" *"</span> })}
            </span>
            {children()}
        </label>
    }
}

/// Single-line text input bound to a string signal.
#[component]
pub fn TextInput(
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            class="input"
            type=input_type.unwrap_or("text")
            placeholder=placeholder
            required=required
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Multi-line text input bound to a string signal.
#[component]
pub fn TextArea(value: Signal<String>, on_input: Callback<String>, rows: u32) -> impl IntoView {
    view! {
        <textarea
            class="input"
            rows=rows
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        ></textarea>
    }
}

/// Rounded tag used for rule highlights.
#[component]
pub fn Pill(icon: &'static str, children: Children) -> impl IntoView {
    view! {
        <span class="pill">
            <span class="pill__icon" aria-hidden="true">{icon}</span>
            {children()}
        </span>
    }
}

/// Bordered card with an icon badge, a title, and one line of copy.
#[component]
pub fn InfoCard(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__heading">
                <span class="card__badge" aria-hidden="true">{icon}</span>
                {title}
            </div>
            <p class="card__text">{text}</p>
        </div>
    }
}
