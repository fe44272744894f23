//! Hunter and angler view: benefits, requirements, steps, and the waitlist.

use leptos::prelude::*;

use crate::components::layout::{InfoCard, Section};
use crate::components::waitlist::HunterWaitlistForm;
use crate::pages::content::{HUNTER_BENEFITS, HUNTER_REQUIREMENTS, HUNTER_STEPS};

#[component]
pub fn HuntersPage() -> impl IntoView {
    view! {
        <Section
            eyebrow="For Hunters & Anglers"
            title="Access new ground the right way"
            subtitle="Real properties. Clear boundaries. Rules first."
        >
            <div class="grid grid--3">
                {HUNTER_BENEFITS
                    .into_iter()
                    .map(|card| view! { <InfoCard icon=card.icon title=card.title text=card.text/> })
                    .collect_view()}
            </div>
        </Section>

        <Section title="Requirements">
            <ul class="grid grid--3 requirements">
                {HUNTER_REQUIREMENTS.into_iter().map(|item| view! { <li class="card">{item}</li> }).collect_view()}
            </ul>
        </Section>

        <Section title="Steps">
            <ol class="grid grid--3 steps">
                {HUNTER_STEPS.into_iter().map(|step| view! { <li class="card">{step}</li> }).collect_view()}
            </ol>
        </Section>

        <Section title="Join the Hunter waitlist" subtitle="We’ll ping you when access opens in your region.">
            <HunterWaitlistForm/>
        </Section>
    }
}
