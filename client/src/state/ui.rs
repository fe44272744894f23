//! Site navigation state: which view is on screen.
//!
//! DESIGN
//! ======
//! Navigation is a single in-memory selector. There is no history stack and
//! no URL synchronization, so a reload always lands on [`View::Landing`].

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level views of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Home page: hero, map, quick-add, pricing, FAQ.
    #[default]
    Landing,
    Owners,
    Hunters,
    Legal,
    Contact,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [Self; 5] = [Self::Landing, Self::Owners, Self::Hunters, Self::Legal, Self::Contact];

    /// Stable key, used as the mobile `<select>` option value.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Landing => "Landing",
            Self::Owners => "Owners",
            Self::Hunters => "Hunters",
            Self::Legal => "Legal",
            Self::Contact => "Contact",
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            other => other.key(),
        }
    }

    /// Parse a key produced by [`View::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.key() == key)
    }
}

/// UI state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub view: View,
}

impl UiState {
    /// Switch to `view`.
    pub fn select(&mut self, view: View) {
        self.view = view;
    }

    /// Switch to the view named by `key`. Unknown keys leave the view as is
    /// and return `false`.
    pub fn select_key(&mut self, key: &str) -> bool {
        match View::from_key(key) {
            Some(view) => {
                self.select(view);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_active(&self, view: View) -> bool {
        self.view == view
    }
}
