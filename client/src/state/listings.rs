//! Listing records and the persisted listing collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listings are demo points of interest shown on the landing-page maps. The
//! collection is seeded from [`seed_listings`] on first load, grows through
//! the quick-add form, and is written back to local storage after every
//! change. There is no server-side copy.

use pinmap::{LngLat, MarkerSpec, PopupContent};
use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, LISTINGS_KEY, StorageError, load_or, save_json};

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

/// A bookable property shown as a map pin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub price_per_day: f64,
    pub lng: f64,
    pub lat: f64,
}

impl Listing {
    #[must_use]
    pub fn lng_lat(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }

    /// Pin and popup for this listing.
    #[must_use]
    pub fn marker_spec(&self) -> MarkerSpec {
        MarkerSpec {
            id: self.id.clone(),
            lng_lat: self.lng_lat(),
            popup: PopupContent {
                title: self.name.clone(),
                species: self.species.clone(),
                price_per_day: self.price_per_day,
            },
        }
    }
}

/// The fixed demo set used when nothing valid is stored.
pub fn seed_listings() -> Vec<Listing> {
    fn seed(id: &str, name: &str, species: &[&str], price_per_day: f64, lng: f64, lat: f64) -> Listing {
        Listing {
            id: id.to_owned(),
            name: name.to_owned(),
            species: species.iter().map(|s| (*s).to_owned()).collect(),
            price_per_day,
            lng,
            lat,
        }
    }

    vec![
        seed("acres-kingsville", "Kingsville Whitetail & Turkey", &["Whitetail", "Turkey"], 85.0, -82.7169, 42.0370),
        seed("cedar-creek-bass", "Cedar Creek Bass Access", &["Bass", "Panfish"], 35.0, -82.765, 42.146),
        seed("harrow-waterfowl", "Harrow Waterfowl Field", &["Waterfowl"], 60.0, -82.918, 42.043),
    ]
}

/// Lowercase `name` and collapse every run of characters outside `[a-z0-9]`
/// into a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_gap = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            in_gap = false;
        } else if !in_gap {
            slug.push('-');
            in_gap = true;
        }
    }
    slug
}

/// Identifier for a new listing: its slug followed by the insertion time.
///
/// Uniqueness is best effort; two listings with the same name added in the
/// same millisecond collide.
pub fn listing_id(name: &str, now_ms: u64) -> String {
    let base = if name.is_empty() { "listing" } else { name };
    format!("{}{now_ms}", slugify(base))
}

/// The listing collection shown on the maps.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingsState {
    pub items: Vec<Listing>,
}

impl Default for ListingsState {
    fn default() -> Self {
        Self { items: seed_listings() }
    }
}

impl ListingsState {
    /// Load the stored collection, or the seed set if none is readable.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self { items: load_or(store, LISTINGS_KEY, seed_listings) }
    }

    /// Write the whole collection back to storage.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the collection cannot be written.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), StorageError> {
        save_json(store, LISTINGS_KEY, &self.items)
    }

    pub fn append(&mut self, listing: Listing) {
        self.items.push(listing);
    }

    /// One marker spec per listing, in collection order.
    #[must_use]
    pub fn marker_specs(&self) -> Vec<MarkerSpec> {
        self.items.iter().map(Listing::marker_spec).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
