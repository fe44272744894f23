//! Legal view: placeholder policy text until the real terms are published.

use leptos::prelude::*;

use crate::components::layout::Section;
use crate::pages::content::{LEGAL_HEADING, LEGAL_TEXT};

/// Policy placeholder text.
#[component]
pub fn LegalPage() -> impl IntoView {
    view! {
        <Section eyebrow="Legal" title="Our policies" subtitle="Placeholders; replace with counsel-approved text.">
            <div class="card legal">
                <h3 class="legal__heading">{LEGAL_HEADING}</h3>
                <p>{LEGAL_TEXT}</p>
            </div>
        </Section>
    }
}
