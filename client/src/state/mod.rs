//! View-model state for the site.
//!
//! DESIGN
//! ======
//! Each module holds plain data plus the operations on it; components wrap
//! the structs in `RwSignal`s provided through context.

pub mod listings;
pub mod ui;
pub mod waitlist;
