pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{property_card, search_form};
pub use layouts::desktop::desktop_layout;
