//! Owner and hunter waitlist forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form edits a [`WaitlistRecord`] held in a signal. The record renders
//! from the defaults on server and client alike, picks up whatever the browser
//! stored last time once mounted, and is written back as a whole on submit.
//!
//! ERROR HANDLING
//! ==============
//! Validation and storage failures are shown under the form. Only a
//! successful save raises the blocking acknowledgement.

use leptos::prelude::*;

use crate::components::layout::{Field, TextArea, TextInput, field_binding};
use crate::state::waitlist::{
    Experience, HunterWaitlistEntry, Insurance, OwnerWaitlistEntry, TargetSpecies, WaitlistRecord, submit,
};
use crate::util::dialog::acknowledge;
use crate::util::storage::{BrowserStorage, KeyValueStore};

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

const CONSENT_NOTE: &str = "By joining, you accept our Terms, Privacy, and Waiver.";

/// Submit `record` to `store`, returning the acknowledgement text on success
/// or the message to show inline on failure.
///
/// # Errors
///
/// Returns the user-facing message of the validation or storage failure.
pub fn submit_message<R, S>(record: &R, store: &S) -> Result<&'static str, String>
where
    R: WaitlistRecord,
    S: KeyValueStore + ?Sized,
{
    match submit(record, store) {
        Ok(()) => Ok(R::ACKNOWLEDGEMENT),
        Err(err) => {
            log::warn!("{} submission refused: {err}", R::STORAGE_KEY);
            Err(err.to_string())
        }
    }
}

fn submit_handler<R>(form: RwSignal<R>, error: RwSignal<Option<String>>) -> impl Fn(leptos::ev::SubmitEvent) + Copy
where
    R: WaitlistRecord + Send + Sync + 'static,
{
    move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|record| submit_message(record, &BrowserStorage)) {
            Ok(ack) => {
                error.set(None);
                acknowledge(ack);
            }
            Err(message) => error.set(Some(message)),
        }
    }
}

/// Form state that first renders from the defaults, then takes the stored
/// record after mount.
fn restored_form<R>() -> RwSignal<R>
where
    R: WaitlistRecord + Send + Sync + 'static,
{
    let form = RwSignal::new(R::default());
    Effect::new(move || form.set(R::load(&BrowserStorage)));
    form
}

#[component]
fn FormFooter(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="form-error form__wide" role="alert">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <div class="form__actions form__wide">
            <button class="btn btn--primary" type="submit">"Join waitlist"</button>
            <span class="form__note">{CONSENT_NOTE}</span>
        </div>
    }
}

/// Landowner waitlist form.
#[component]
pub fn OwnerWaitlistForm() -> impl IntoView {
    let form = restored_form::<OwnerWaitlistEntry>();
    let error = RwSignal::new(None::<String>);

    let (name, set_name) = field_binding(form, |f| f.name.clone(), |f, v| f.name = v);
    let (phone, set_phone) = field_binding(form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (email, set_email) = field_binding(form, |f| f.email.clone(), |f, v| f.email = v);
    let (location, set_location) =
        field_binding(form, |f| f.property_location.clone(), |f, v| f.property_location = v);
    let (day_rate, set_day_rate) = field_binding(form, |f| f.day_rate.clone(), |f, v| f.day_rate = v);
    let (rules, set_rules) = field_binding(form, |f| f.rules.clone(), |f, v| f.rules = v);
    let (zones, set_zones) = field_binding(form, |f| f.zones_hours.clone(), |f, v| f.zones_hours = v);
    let (checkin, set_checkin) = field_binding(form, |f| f.checkin.clone(), |f, v| f.checkin = v);

    view! {
        <form class="form card" on:submit=submit_handler(form, error)>
            <Field label="Full name" required=true>
                <TextInput value=name on_input=set_name required=true/>
            </Field>
            <Field label="Phone" required=true>
                <TextInput value=phone on_input=set_phone input_type="tel" required=true/>
            </Field>
            <Field label="Email" required=true>
                <TextInput value=email on_input=set_email input_type="email" required=true/>
            </Field>
            <Field label="Property location" required=true>
                <TextInput value=location on_input=set_location placeholder="address or lat,lng" required=true/>
            </Field>
            <Field label="Day rate ($)" required=true>
                <TextInput value=day_rate on_input=set_day_rate input_type="number" required=true/>
            </Field>
            <Field label="House rules">
                <TextArea value=rules on_input=set_rules rows=3/>
            </Field>
            <Field label="Zones & Hours">
                <TextArea value=zones on_input=set_zones rows=2/>
            </Field>
            <Field label="Check-in/out">
                <TextArea value=checkin on_input=set_checkin rows=2/>
            </Field>
            <label class="checkbox form__wide">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.no_transfer)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| f.no_transfer = checked);
                    }
                />
                "No-Transfer (bookings cannot be transferred or resold)"
            </label>
            <FormFooter error=error/>
        </form>
    }
}

/// Hunter and angler waitlist form.
#[component]
pub fn HunterWaitlistForm() -> impl IntoView {
    let form = restored_form::<HunterWaitlistEntry>();
    let error = RwSignal::new(None::<String>);

    let (name, set_name) = field_binding(form, |f| f.name.clone(), |f, v| f.name = v);
    let (phone, set_phone) = field_binding(form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (email, set_email) = field_binding(form, |f| f.email.clone(), |f, v| f.email = v);
    let (license, set_license) = field_binding(form, |f| f.license_id.clone(), |f, v| f.license_id = v);

    let on_species = move |ev: leptos::ev::Event| {
        if let Some(species) = TargetSpecies::from_label(&event_target_value(&ev)) {
            form.update(|f| f.species = species);
        }
    };
    let on_insurance = move |ev: leptos::ev::Event| {
        if let Some(insurance) = Insurance::from_value(&event_target_value(&ev)) {
            form.update(|f| f.insurance = insurance);
        }
    };
    let on_experience = move |ev: leptos::ev::Event| {
        if let Some(experience) = Experience::from_label(&event_target_value(&ev)) {
            form.update(|f| f.experience = experience);
        }
    };

    view! {
        <form class="form card" on:submit=submit_handler(form, error)>
            <Field label="Full name" required=true>
                <TextInput value=name on_input=set_name required=true/>
            </Field>
            <Field label="Phone" required=true>
                <TextInput value=phone on_input=set_phone input_type="tel" required=true/>
            </Field>
            <Field label="Email" required=true>
                <TextInput value=email on_input=set_email input_type="email" required=true/>
            </Field>
            <Field label="Target species">
                <select class="input" prop:value=move || form.with(|f| f.species.label()) on:change=on_species>
                    {TargetSpecies::ALL
                        .into_iter()
                        .map(|species| {
                            view! {
                                <option value=species.label()>
                                    {species.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </Field>
            <Field label="Insurance proof on file?">
                <select class="input" prop:value=move || form.with(|f| f.insurance.value()) on:change=on_insurance>
                    {Insurance::ALL
                        .into_iter()
                        .map(|insurance| {
                            view! {
                                <option value=insurance.value()>
                                    {insurance.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </Field>
            <Field label="License ID (optional)">
                <TextInput value=license on_input=set_license/>
            </Field>
            <Field label="Experience level">
                <select class="input" prop:value=move || form.with(|f| f.experience.label()) on:change=on_experience>
                    {Experience::ALL
                        .into_iter()
                        .map(|experience| {
                            view! {
                                <option value=experience.label()>{experience.label()}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </Field>
            <FormFooter error=error/>
        </form>
    }
}
