//! Landowner view: benefits, onboarding steps, and the owner waitlist.

use leptos::prelude::*;

use crate::components::layout::{InfoCard, Section};
use crate::components::waitlist::OwnerWaitlistForm;
use crate::pages::content::{OWNER_BENEFITS, OWNER_STEPS};

#[component]
pub fn OwnersPage() -> impl IntoView {
    view! {
        <Section
            eyebrow="For Landowners"
            title="Turn acres into income without losing control"
            subtitle="Approve who comes on. Set rules and hours. Get paid automatically."
        >
            <div class="grid grid--3">
                {OWNER_BENEFITS
                    .into_iter()
                    .map(|card| view! { <InfoCard icon=card.icon title=card.title text=card.text/> })
                    .collect_view()}
            </div>
        </Section>

        <Section title="How it works">
            <ol class="grid grid--3 steps">
                {OWNER_STEPS.into_iter().map(|step| view! { <li class="card">{step}</li> }).collect_view()}
            </ol>
        </Section>

        <Section title="Join the Owner waitlist" subtitle="We’ll notify you when onboarding opens in your region.">
            <OwnerWaitlistForm/>
        </Section>
    }
}
