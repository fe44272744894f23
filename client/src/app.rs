//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::site::SitePage;
use crate::state::{listings::ListingsState, ui::UiState};
use crate::util::storage::{BrowserStorage, StorageError};

/// MapLibre GL JS build loaded from the CDN; `pinmap` binds to its global.
pub const MAPLIBRE_JS: &str = "https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.js";
pub const MAPLIBRE_CSS: &str = "https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=MAPLIBRE_CSS/>
                <script src=MAPLIBRE_JS></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the view selector and the listing collection. The collection
/// starts from the seed on both server and client so hydration matches the
/// server markup; the stored collection is swapped in once mounted and written
/// back to local storage whenever it changes after that.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let listings = RwSignal::new(ListingsState::default());

    provide_context(ui);
    provide_context(listings);

    Effect::new(move |restored: Option<()>| {
        listings.track();
        if restored.is_none() {
            // Saving here would overwrite the stored collection with the seed.
            listings.set(ListingsState::load(&BrowserStorage));
            return;
        }
        listings.with_untracked(|state| match state.save(&BrowserStorage) {
            Ok(()) | Err(StorageError::Unavailable) => {}
            Err(err) => log::warn!("listings not saved: {err}"),
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/openacre.css"/>
        <Title text="OpenAcre"/>
        <Meta name="description" content="Hunt & Fish Everywhere."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SitePage/>
            </Routes>
        </Router>
    }
}
