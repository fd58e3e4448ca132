use crate::domain::property::PropertyType;
use crate::domain::search::SearchFilters;
use crate::geos::COMMUNES;
use maud::{html, Markup};

/// Hero search. Pre-fills from the filters of the current results page.
pub fn search_form(current: &SearchFilters) -> Markup {
    let location = current.location.as_deref().unwrap_or("");

    html! {
        form method="get" action="/search" class="search-form" {
            label class="sr-only" for="location" { "Location" }
            input
                type="text"
                id="location"
                name="location"
                list="communes"
                placeholder="Commune or city"
                value=(location);
            datalist id="communes" {
                @for commune in COMMUNES {
                    option value=(commune) {}
                }
            }

            select name="bedrooms" {
                option value="" selected[current.min_bedrooms.is_none()] { "Bedrooms" }
                @for n in 1..=5u32 {
                    option value=(n) selected[current.min_bedrooms == Some(n)] { (n) "+" }
                }
            }

            select name="type" {
                option value="" selected[current.property_type.is_none()] { "Any type" }
                @for t in PropertyType::ALL {
                    option value=(t.form_value()) selected[current.property_type == Some(t)] { (t.label()) }
                }
            }

            input type="number" name="min_uf" min="0" placeholder="Min UF"
                value=[current.min_uf];
            input type="number" name="max_uf" min="0" placeholder="Max UF"
                value=[current.max_uf];

            button type="submit" { "Search" }
        }
    }
}
