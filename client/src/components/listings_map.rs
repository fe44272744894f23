//! Bridge component between the listing collection and a `pinmap` map.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page shows two maps over the same collection. Each instance
//! mounts its own MapLibre map into its container once the container exists
//! in the DOM, then redraws every pin whenever the collection changes.
//!
//! ERROR HANDLING
//! ==============
//! A missing map library or a backend failure is logged and shown as a short
//! notice under the map; the rest of the page keeps working. A camera fit
//! failure leaves every pin drawn, so it is only logged.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use pinmap::{MapLibreSurface, MapOptions, MarkerLayer};

use pinmap::MapError;

use crate::state::listings::ListingsState;

#[cfg(test)]
#[path = "listings_map_test.rs"]
mod listings_map_test;

/// CSS class for the map frame at a given height.
pub fn frame_class(tall: bool) -> &'static str {
    if tall { "map-frame map-frame--tall" } else { "map-frame" }
}

/// Caption under the map, naming how many pins are shown.
pub fn pin_count_label(count: usize) -> String {
    match count {
        0 => "No listings yet.".to_owned(),
        1 => "1 listing on the map.".to_owned(),
        n => format!("{n} listings on the map."),
    }
}

/// Notice shown after a failed pin update, if the failure is visible to users.
pub fn update_notice(err: &MapError) -> Option<String> {
    match err {
        MapError::Fit(_) => None,
        err => Some(format!("Some pins could not be drawn: {err}")),
    }
}

/// Map of every listing in context, with a popup per pin.
#[component]
pub fn ListingsMap(#[prop(optional)] tall: bool, #[prop(optional)] caption: Option<&'static str>) -> impl IntoView {
    let listings = expect_context::<RwSignal<ListingsState>>();
    let container = NodeRef::<leptos::html::Div>::new();
    let notice = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let layer: Rc<RefCell<Option<MarkerLayer<MapLibreSurface>>>> = Rc::new(RefCell::new(None));
        Effect::new(move || {
            let specs = listings.with(ListingsState::marker_specs);
            let Some(element) = container.get() else {
                return;
            };
            let mut slot = layer.borrow_mut();
            if slot.is_none() {
                match MapLibreSurface::mount(&element, &MapOptions::default()) {
                    Ok(surface) => *slot = Some(MarkerLayer::new(surface)),
                    Err(err) => {
                        log::error!("map mount failed: {err}");
                        notice.set(Some(format!("Map unavailable: {err}")));
                        return;
                    }
                }
            }
            if let Some(layer) = slot.as_mut() {
                match layer.set_points(&specs) {
                    Ok(placed) => {
                        log::debug!("map pins placed: {placed}");
                        notice.set(None);
                    }
                    Err(err) => {
                        log::warn!("map update failed: {err}");
                        notice.set(update_notice(&err));
                    }
                }
            }
        });
    }

    let count = move || pin_count_label(listings.with(ListingsState::len));

    view! {
        <figure class="map">
            <div class=frame_class(tall) node_ref=container></div>
            <Show when=move || notice.get().is_some()>
                <div class="map__notice" role="status">{move || notice.get().unwrap_or_default()}</div>
            </Show>
            <figcaption class="map__caption">
                {caption.map(|text| view! { <span>{text}</span> " " })}
                <span class="map__count">{count}</span>
            </figcaption>
        </figure>
    }
}
