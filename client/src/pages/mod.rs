//! Page modules for the site's views.
//!
//! ARCHITECTURE
//! ============
//! `site` owns the frame and view switching; each view module is layout only
//! and pulls its copy from `content`.

pub mod contact;
pub mod content;
pub mod hunters;
pub mod landing;
pub mod legal;
pub mod owners;
pub mod site;
