//! Quick-add form that drops a new listing onto the landing-page maps.
//!
//! ERROR HANDLING
//! ==============
//! Input is parsed into a [`Listing`] by [`ListingDraft::to_listing`].
//! Unparseable coordinates or price leave the collection untouched and show
//! the reason under the form.

use leptos::prelude::*;

use crate::components::layout::{Field, TextInput, field_binding};
use crate::state::listings::{Listing, ListingsState, listing_id};
use crate::util::clock::now_ms;

#[cfg(test)]
#[path = "quick_add_test.rs"]
mod quick_add_test;

/// Name used when the form's name field is blank.
pub const DEFAULT_LISTING_NAME: &str = "New Listing";

/// Why a draft could not become a listing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListingError {
    #[error("Longitude must be a number, e.g. -82.75.")]
    InvalidLongitude,

    #[error("Latitude must be a number, e.g. 42.08.")]
    InvalidLatitude,

    #[error("Price per day must be a number, zero or more.")]
    InvalidPrice,
}

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub name: String,
    pub lng: String,
    pub lat: String,
    /// Comma-separated species.
    pub species: String,
    pub price_per_day: String,
}

impl ListingDraft {
    /// Build a listing stamped with `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns the first field that does not parse: longitude, latitude, then
    /// price.
    pub fn to_listing(&self, now_ms: u64) -> Result<Listing, ListingError> {
        let lng = parse_coordinate(&self.lng).ok_or(ListingError::InvalidLongitude)?;
        let lat = parse_coordinate(&self.lat).ok_or(ListingError::InvalidLatitude)?;
        let price_per_day = parse_price(&self.price_per_day)?;
        let name = self.name.trim();
        Ok(Listing {
            id: listing_id(name, now_ms),
            name: if name.is_empty() { DEFAULT_LISTING_NAME.to_owned() } else { name.to_owned() },
            species: parse_species(&self.species),
            price_per_day,
            lng,
            lat,
        })
    }
}

/// Parse a coordinate in degrees; only finite numbers are accepted.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the day price. Blank means free.
///
/// # Errors
///
/// Returns [`ListingError::InvalidPrice`] for non-numeric, non-finite, or
/// negative input.
pub fn parse_price(raw: &str) -> Result<f64, ListingError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ListingError::InvalidPrice),
    }
}

/// Split comma-separated species, dropping blanks and repeats.
pub fn parse_species(raw: &str) -> Vec<String> {
    let mut species: Vec<String> = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !species.iter().any(|s| s == part) {
            species.push(part.to_owned());
        }
    }
    species
}

/// Quick-add listing card shown beside the experiences map.
#[component]
pub fn QuickAddForm() -> impl IntoView {
    let listings = expect_context::<RwSignal<ListingsState>>();
    let draft = RwSignal::new(ListingDraft::default());
    let error = RwSignal::new(None::<String>);

    let (name, set_name) = field_binding(draft, |d| d.name.clone(), |d, v| d.name = v);
    let (lng, set_lng) = field_binding(draft, |d| d.lng.clone(), |d, v| d.lng = v);
    let (lat, set_lat) = field_binding(draft, |d| d.lat.clone(), |d, v| d.lat = v);
    let (species, set_species) = field_binding(draft, |d| d.species.clone(), |d, v| d.species = v);
    let (price, set_price) = field_binding(draft, |d| d.price_per_day.clone(), |d, v| d.price_per_day = v);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(|d| d.to_listing(now_ms())) {
            Ok(listing) => {
                log::info!("listing added: {}", listing.id);
                listings.update(|state| state.append(listing));
                draft.set(ListingDraft::default());
                error.set(None);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="quick-add card">
            <h3 class="quick-add__title">"Quick add a listing"</h3>
            <form class="quick-add__form" on:submit=on_submit>
                <Field label="Name" required=true>
                    <TextInput value=name on_input=set_name required=true/>
                </Field>
                <div class="quick-add__coords">
                    <Field label="Longitude" required=true>
                        <TextInput value=lng on_input=set_lng placeholder="-82.75" required=true/>
                    </Field>
                    <Field label="Latitude" required=true>
                        <TextInput value=lat on_input=set_lat placeholder="42.08" required=true/>
                    </Field>
                </div>
                <Field label="Species (comma-separated)">
                    <TextInput value=species on_input=set_species placeholder="Whitetail, Turkey"/>
                </Field>
                <Field label="Price per day ($)">
                    <TextInput value=price on_input=set_price input_type="number" placeholder="85"/>
                </Field>
                <Show when=move || error.get().is_some()>
                    <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary btn--block" type="submit">"Add to Map"</button>
            </form>
            <p class="quick-add__tip">"Tip: Owners page has full property details + rules."</p>
        </div>
    }
}
