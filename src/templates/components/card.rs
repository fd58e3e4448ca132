use crate::domain::property::Property;
use maud::{html, Markup};

/// UF on the first line, pesos underneath.
pub fn price_block(property: &Property) -> Markup {
    let price = property.price_display();
    html! {
        div class="price" {
            div class="price-uf" { (price.uf) }
            div class="price-clp" { (price.clp) }
        }
    }
}

pub fn property_card(property: &Property) -> Markup {
    html! {
        article class="card" {
            a href={ "/properties/" (property.id) } {
                img src=(property.image_url) alt=(property.title) loading="lazy";
            }
            div class="card-body" {
                p class="price-clp" { (property.property_type.label()) " · " (property.location) }
                h3 {
                    a href={ "/properties/" (property.id) } { (property.title) }
                }
                p {
                    (property.bedrooms) " bd · "
                    (property.bathrooms) " ba · "
                    (property.area) " m²"
                }
                (price_block(property))
            }
        }
    }
}
