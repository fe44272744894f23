//! Contact view: support email, phone line, and launch regions.

use leptos::prelude::*;

use crate::components::layout::Section;
use crate::pages::content::{CONTACT_EMAIL, CONTACT_PHONE, LAUNCH_REGIONS, mailto};

/// Contact channels and launch regions.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Section eyebrow="Contact" title="We’re here to help" subtitle="Partnerships, onboarding, media.">
            <div class="grid grid--3">
                <div class="card">
                    <div class="card__heading">"✉ Email"</div>
                    <a class="link" href=mailto(CONTACT_EMAIL)>{CONTACT_EMAIL}</a>
                </div>
                <div class="card">
                    <div class="card__heading">"☎ Phone"</div>
                    <div class="card__text">{CONTACT_PHONE}</div>
                </div>
                <div class="card">
                    <div class="card__heading">"🌐 Launch Regions"</div>
                    <div class="card__text">{LAUNCH_REGIONS}</div>
                </div>
            </div>
        </Section>
    }
}
