pub mod admin;
pub mod home;
pub mod listing;
pub mod property;

pub use admin::{admin_page, AdminVm};
pub use home::home_page;
pub use listing::{listing_page, ListingVm};
pub use property::property_page;
