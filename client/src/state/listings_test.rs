#![allow(clippy::float_cmp)]

use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// Seed data
// =============================================================

#[test]
fn seed_listings_has_three_demo_properties() {
    let seed = seed_listings();
    let ids: Vec<_> = seed.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["acres-kingsville", "cedar-creek-bass", "harrow-waterfowl"]);
    assert_eq!(seed[0].species, ["Whitetail", "Turkey"]);
    assert_eq!(seed[0].price_per_day, 85.0);
}

#[test]
fn default_state_is_seeded() {
    assert_eq!(ListingsState::default().items, seed_listings());
}

// =============================================================
// Identifiers
// =============================================================

#[test]
fn slugify_collapses_non_alphanumeric_runs() {
    assert_eq!(slugify("Kingsville Whitetail & Turkey"), "kingsville-whitetail-turkey");
    assert_eq!(slugify("  Lake  #2 "), "-lake-2-");
    assert_eq!(slugify("Étang"), "-tang");
}

#[test]
fn listing_id_appends_timestamp() {
    assert_eq!(listing_id("Cedar Creek", 1_700_000_000_000), "cedar-creek1700000000000");
    assert_eq!(listing_id("", 42), "listing42");
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn load_without_stored_value_uses_seed() {
    let store = MemoryStore::new();
    assert_eq!(ListingsState::load(&store).items, seed_listings());
}

#[test]
fn load_with_corrupt_value_uses_seed() {
    let store = MemoryStore::new();
    store.set(LISTINGS_KEY, "{\"oops\":").unwrap();
    assert_eq!(ListingsState::load(&store).items, seed_listings());
}

#[test]
fn load_with_wrong_shape_uses_seed() {
    let store = MemoryStore::new();
    store.set(LISTINGS_KEY, r#"[{"id":"x","name":"missing coords"}]"#).unwrap();
    assert_eq!(ListingsState::load(&store).items, seed_listings());
}

#[test]
fn append_then_save_round_trips() {
    let store = MemoryStore::new();
    let mut state = ListingsState::load(&store);
    state.append(Listing {
        id: "pond1".to_owned(),
        name: "Pond".to_owned(),
        species: vec!["Bass".to_owned()],
        price_per_day: 20.0,
        lng: -82.5,
        lat: 42.2,
    });
    state.save(&store).unwrap();

    let reloaded = ListingsState::load(&store);
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.items.last().unwrap().name, "Pond");
}

#[test]
fn first_render_state_ignores_stored_listings() {
    let store = MemoryStore::new();
    let mut stored = ListingsState::default();
    stored.append(Listing {
        id: "pond1".to_owned(),
        name: "Pond".to_owned(),
        species: vec!["Bass".to_owned()],
        price_per_day: 20.0,
        lng: -82.5,
        lat: 42.2,
    });
    stored.save(&store).unwrap();

    // Server and client both render from the default; storage arrives after mount.
    assert_eq!(ListingsState::default().len(), 3);
    assert_eq!(ListingsState::load(&store).len(), 4);
}

#[test]
fn stored_json_uses_camel_case_fields() {
    let store = MemoryStore::new();
    ListingsState::default().save(&store).unwrap();
    let raw = store.get(LISTINGS_KEY).unwrap().unwrap();
    assert!(raw.contains("\"pricePerDay\":85"));
    assert!(raw.contains("\"lng\":-82.7169"));
}

#[test]
fn stored_listing_without_species_or_price_defaults() {
    let store = MemoryStore::new();
    store.set(LISTINGS_KEY, r#"[{"id":"a","name":"A","lng":1.0,"lat":2.0}]"#).unwrap();
    let state = ListingsState::load(&store);
    assert_eq!(state.items[0].species, Vec::<String>::new());
    assert_eq!(state.items[0].price_per_day, 0.0);
}

#[test]
fn empty_stored_collection_is_kept() {
    let store = MemoryStore::new();
    store.set(LISTINGS_KEY, "[]").unwrap();
    let state = ListingsState::load(&store);
    assert!(state.is_empty());
    assert!(state.marker_specs().is_empty());
}

// =============================================================
// Markers
// =============================================================

#[test]
fn marker_specs_follow_listing_order_and_content() {
    let specs = ListingsState::default().marker_specs();
    assert_eq!(specs.len(), 3);
    assert_eq!(specs[1].id, "cedar-creek-bass");
    assert_eq!(specs[1].lng_lat, LngLat::new(-82.765, 42.146));
    assert_eq!(specs[1].popup.title, "Cedar Creek Bass Access");
    assert_eq!(specs[1].popup.species_line(), "Bass, Panfish");
    assert_eq!(specs[1].popup.price_line(), "$35/day");
}
