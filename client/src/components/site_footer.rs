//! Site footer with the copyright line.

use leptos::prelude::*;

use crate::util::clock::current_year;

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

pub fn copyright_line(year: i32) -> String {
    format!("© {year} OpenAcre. All rights reserved.")
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">{copyright_line(current_year())}</div>
        </footer>
    }
}
