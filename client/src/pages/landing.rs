//! Landing view: hero, features, live map with quick-add, pricing, FAQ.

use leptos::prelude::*;

use crate::components::layout::{InfoCard, Pill, Section};
use crate::components::listings_map::ListingsMap;
use crate::components::quick_add::QuickAddForm;
use crate::pages::content::{FAQ, FEATURES, HERO_MAP_CAPTION, PITCH, PLANS, Plan, RULE_PILLS, TAGLINE, plan_class};
use crate::state::ui::{UiState, View};

#[component]
pub fn LandingPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let go = move |view: View| move |_: leptos::ev::MouseEvent| ui.update(|u| u.select(view));

    view! {
        <div class="hero">
            <div class="hero__inner">
                <div class="hero__copy">
                    <h1 class="hero__title">"OpenAcre"</h1>
                    <p class="hero__tagline">{TAGLINE}</p>
                    <p class="hero__pitch">{PITCH}</p>
                    <div class="hero__actions">
                        <button class="btn btn--primary" type="button" on:click=go(View::Owners)>
                            "🛡 I’m an Owner"
                        </button>
                        <button class="btn btn--secondary" type="button" on:click=go(View::Hunters)>
                            "🎣 I’m a Hunter"
                        </button>
                    </div>
                    <div class="hero__pills">
                        {RULE_PILLS.into_iter().map(|(icon, text)| view! { <Pill icon=icon>{text}</Pill> }).collect_view()}
                    </div>
                </div>
                <div class="hero__map card">
                    <ListingsMap caption=HERO_MAP_CAPTION/>
                </div>
            </div>
        </div>

        <Section
            id="features"
            eyebrow="Why OpenAcre"
            title="Clean, safe access with rules that work"
            subtitle="Built like Airbnb: identity, reviews, clear fees, and reliable payouts."
        >
            <div class="grid grid--3">
                {FEATURES
                    .into_iter()
                    .map(|card| view! { <InfoCard icon=card.icon title=card.title text=card.text/> })
                    .collect_view()}
            </div>
        </Section>

        <Section
            id="experiences"
            eyebrow="Experiences"
            title="Browse access by species & season"
            subtitle="Add or edit locations anytime. This is your live map."
        >
            <div class="grid grid--map">
                <ListingsMap tall=true/>
                <QuickAddForm/>
            </div>
        </Section>

        <Section
            id="pricing"
            eyebrow="Pricing"
            title="Transparent fees, no surprises"
            subtitle="Choose pay-as-you-go or memberships for savings."
        >
            <div class="grid grid--3">{PLANS.into_iter().map(|plan| view! { <PlanCard plan=plan/> }).collect_view()}</div>
        </Section>

        <Section id="faq" eyebrow="FAQ" title="Got questions? We’ve got answers.">
            <div class="grid grid--2">
                {FAQ
                    .into_iter()
                    .map(|faq| {
                        view! {
                            <details class="faq card">
                                <summary class="faq__question">{faq.question}</summary>
                                <p class="faq__answer">{faq.answer}</p>
                            </details>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn PlanCard(plan: Plan) -> impl IntoView {
    view! {
        <div class=plan_class(&plan)>
            <h3 class="plan__name">{plan.name}</h3>
            <p class="plan__blurb">{plan.blurb}</p>
            <div class="plan__price">
                {plan.price}
                <span class="plan__unit">{plan.price_unit}</span>
            </div>
            {plan.fee_note.map(|note| view! { <div class="plan__note">"+ " {note}</div> })}
            <ul class="plan__perks">{plan.perks.into_iter().map(|perk| view! { <li>{perk}</li> }).collect_view()}</ul>
            <button class="btn btn--primary" type="button">{plan.cta}</button>
        </div>
    }
}
