use crate::domain::property::Property;
use crate::templates::components::price_block;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Interior shots shown under every listing's main photo.
const GALLERY: &[&str] = &[
    "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=800&auto=format&fit=crop",
];

/// Public detail page. Private owner data is never rendered here.
pub fn property_page(property: &Property) -> Markup {
    desktop_layout(
        &property.title,
        html! {
            main class="container" {
                p class="price-clp" {
                    a href="/" { "Home" } " / " (property.location)
                }

                h1 { (property.title) }
                p { (property.location) }

                div class="grid" {
                    img src=(property.image_url) alt=(property.title);
                    @for url in GALLERY {
                        img src=(url) alt="" loading="lazy";
                    }
                }

                (price_block(property))

                table {
                    tbody {
                        tr { th { "Type" } td { (property.property_type.label()) } }
                        tr { th { "Bedrooms" } td { (property.bedrooms) } }
                        tr { th { "Bathrooms" } td { (property.bathrooms) } }
                        tr { th { "Area" } td { (property.area) " m²" } }
                        tr { th { "Reference" } td { (property.id) } }
                    }
                }

                h2 { "Description" }
                p { (property.description) }

                section class="card" {
                    div class="card-body" {
                        h3 { "Interested?" }
                        p {
                            "Write to "
                            a href={ "mailto:contacto@casacatalog.cl?subject=" (property.id) } {
                                "contacto@casacatalog.cl"
                            }
                            " quoting reference " strong { (property.id) } "."
                        }
                    }
                }
            }
        },
    )
}
