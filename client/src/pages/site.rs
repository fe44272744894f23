//! Single-route site frame: header, the selected view, footer.
//!
//! DESIGN
//! ======
//! The five views share one route. [`UiState`] decides which one renders, so
//! switching views never touches the URL and a reload lands on the landing
//! view.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::pages::contact::ContactPage;
use crate::pages::hunters::HuntersPage;
use crate::pages::landing::LandingPage;
use crate::pages::legal::LegalPage;
use crate::pages::owners::OwnersPage;
use crate::state::ui::{UiState, View};

#[component]
pub fn SitePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let current = Memo::new(move |_| ui.with(|u| u.view));

    view! {
        <div class="site">
            <SiteHeader/>
            <main class="site__main">
                {move || match current.get() {
                    View::Landing => view! { <LandingPage/> }.into_any(),
                    View::Owners => view! { <OwnersPage/> }.into_any(),
                    View::Hunters => view! { <HuntersPage/> }.into_any(),
                    View::Legal => view! { <LegalPage/> }.into_any(),
                    View::Contact => view! { <ContactPage/> }.into_any(),
                }}
            </main>
            <SiteFooter/>
        </div>
    }
}
