use maud::{html, Markup};

pub mod card;
pub mod search_form;

pub use card::{price_block, property_card};
pub use search_form::search_form;

/// Listing page link with the category key percent-encoded for the query string.
pub fn category_href(key: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(key.as_bytes()).collect();
    format!("/listings?category={encoded}")
}

pub fn property_count(n: usize) -> String {
    match n {
        1 => "1 property".to_string(),
        n => format!("{n} properties"),
    }
}

pub fn empty_state(message: &str) -> Markup {
    html! {
        div class="card" {
            div class="card-body" {
                p { (message) }
                a href="/" { "Back to home" }
            }
        }
    }
}
