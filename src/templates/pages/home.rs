// templates/pages/home.rs

use crate::domain::property::Property;
use crate::domain::search::SearchFilters;
use crate::geos::COMMUNES;
use crate::templates::components::category_href;
use crate::templates::{desktop_layout, property_card, search_form};
use maud::{html, Markup};

pub fn home_page(properties: &[Property]) -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="container" {
                h1 { "Luxury homes in the Biobío region and beyond" }
                p { "Find your next home with the agency that knows every commune." }
                (search_form(&SearchFilters::default()))
            }

            section class="container" {
                h2 { "Browse by commune" }
                ul {
                    @for commune in COMMUNES {
                        li { a href=(category_href(commune)) { (commune) } }
                    }
                }
            }

            section class="container" {
                h2 { "Featured properties" }
                div class="grid" {
                    @for property in properties {
                        (property_card(property))
                    }
                }
            }
        },
    )
}
