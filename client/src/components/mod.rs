pub mod layout;
pub mod listings_map;
pub mod quick_add;
pub mod site_footer;
pub mod site_header;
pub mod waitlist;
