#![allow(clippy::float_cmp)]

use super::*;

fn draft(name: &str, lng: &str, lat: &str, species: &str, price: &str) -> ListingDraft {
    ListingDraft {
        name: name.to_owned(),
        lng: lng.to_owned(),
        lat: lat.to_owned(),
        species: species.to_owned(),
        price_per_day: price.to_owned(),
    }
}

// =============================================================
// to_listing
// =============================================================

#[test]
fn to_listing_builds_full_record() {
    let listing = draft("Lakeview Blind", "-82.6", " 42.1 ", "Waterfowl, Bass", "40")
        .to_listing(1_700_000_000_000)
        .unwrap();
    assert_eq!(listing.id, "lakeview-blind1700000000000");
    assert_eq!(listing.name, "Lakeview Blind");
    assert_eq!(listing.species, ["Waterfowl", "Bass"]);
    assert_eq!(listing.price_per_day, 40.0);
    assert_eq!(listing.lng, -82.6);
    assert_eq!(listing.lat, 42.1);
}

#[test]
fn to_listing_defaults_blank_name_and_price() {
    let listing = draft("  ", "-82.6", "42.1", "", "").to_listing(7).unwrap();
    assert_eq!(listing.name, DEFAULT_LISTING_NAME);
    assert_eq!(listing.id, "listing7");
    assert!(listing.species.is_empty());
    assert_eq!(listing.price_per_day, 0.0);
}

#[test]
fn to_listing_rejects_non_numeric_coordinates() {
    assert_eq!(
        draft("A", "west", "42.1", "", "").to_listing(1),
        Err(ListingError::InvalidLongitude)
    );
    assert_eq!(
        draft("A", "-82.6", "forty-two", "", "").to_listing(1),
        Err(ListingError::InvalidLatitude)
    );
    assert_eq!(draft("A", "-82.6", "", "", "").to_listing(1), Err(ListingError::InvalidLatitude));
}

#[test]
fn to_listing_rejects_non_finite_coordinates() {
    assert_eq!(draft("A", "inf", "42", "", "").to_listing(1), Err(ListingError::InvalidLongitude));
    assert_eq!(draft("A", "1", "NaN", "", "").to_listing(1), Err(ListingError::InvalidLatitude));
}

#[test]
fn to_listing_rejects_bad_price() {
    assert_eq!(draft("A", "1", "2", "", "cheap").to_listing(1), Err(ListingError::InvalidPrice));
    assert_eq!(draft("A", "1", "2", "", "-5").to_listing(1), Err(ListingError::InvalidPrice));
}

#[test]
fn invalid_latitude_leaves_collection_unchanged() {
    let mut state = ListingsState::default();
    let before = state.clone();
    if let Ok(listing) = draft("A", "-82.6", "north", "", "").to_listing(1) {
        state.append(listing);
    }
    assert_eq!(state, before);
}

#[test]
fn valid_draft_adds_exactly_one_marker_with_popup() {
    let mut state = ListingsState::default();
    let before = state.marker_specs().len();
    state.append(draft("Oak Ridge", "-82.5", "42.2", "Turkey", "55").to_listing(9).unwrap());

    let specs = state.marker_specs();
    assert_eq!(specs.len(), before + 1);
    let popup = &specs.last().unwrap().popup;
    assert_eq!(popup.title, "Oak Ridge");
    assert_eq!(popup.species_line(), "Turkey");
    assert_eq!(popup.price_line(), "$55/day");
}

// =============================================================
// Field parsers
// =============================================================

#[test]
fn parse_species_trims_and_dedupes() {
    assert_eq!(parse_species(" Whitetail ,Turkey,, Whitetail "), ["Whitetail", "Turkey"]);
    assert!(parse_species(" , ").is_empty());
}

#[test]
fn parse_coordinate_accepts_scientific_notation() {
    assert_eq!(parse_coordinate("4.2e1"), Some(42.0));
    assert_eq!(parse_coordinate(""), None);
}

#[test]
fn listing_error_messages_are_user_facing() {
    assert_eq!(ListingError::InvalidLatitude.to_string(), "Latitude must be a number, e.g. 42.08.");
}
