use crate::domain::property::Property;
use crate::domain::search::SearchFilters;
use crate::templates::components::{empty_state, property_count};
use crate::templates::{desktop_layout, property_card, search_form};
use maud::{html, Markup};

pub struct ListingVm<'a> {
    pub title: String,
    /// Last breadcrumb entry: the category key or the search location.
    pub crumb: String,
    pub properties: &'a [Property],
    /// Present on search result pages so the form keeps its values.
    pub filters: Option<&'a SearchFilters>,
}

pub fn listing_page(vm: &ListingVm) -> Markup {
    desktop_layout(
        &vm.title,
        html! {
            main class="container" {
                p class="price-clp" {
                    a href="/" { "Home" } " / " strong { (vm.crumb) }
                }
                h1 { (vm.title) }

                @if let Some(filters) = vm.filters {
                    (search_form(filters))
                }

                @if vm.properties.is_empty() {
                    (empty_state(&format!("No properties available in {} right now.", vm.crumb)))
                } @else {
                    p { (property_count(vm.properties.len())) }
                    div class="grid" {
                        @for property in vm.properties {
                            (property_card(property))
                        }
                    }
                }
            }
        },
    )
}
