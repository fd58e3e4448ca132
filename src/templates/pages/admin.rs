use crate::domain::property::{Property, PropertyType};
use crate::forms::{PropertyForm, CURRENCY_OPTIONS};
use crate::geos::COMMUNES;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AdminVm {
    /// Values to pre-fill, either a blank form or the rejected submission.
    pub form: PropertyForm,
    pub error: Option<String>,
    pub properties: Vec<Property>,
}

pub fn admin_page(vm: &AdminVm) -> Markup {
    desktop_layout(
        "Admin",
        html! {
            main class="container" {
                h1 { "Admin" }

                @if let Some(err) = &vm.error {
                    p class="error" id="form-error" { (err) }
                }

                div class="card" style="margin-bottom: 2rem;" {
                    div class="card-body" {
                        h3 { "New property" }
                        (property_form(&vm.form))
                    }
                }

                div class="card" {
                    div class="card-body" {
                        div style="display: flex; justify-content: space-between; align-items: center;" {
                            h3 { "Catalog (" (vm.properties.len()) ")" }
                            a href="/admin/export.xlsx" { "Download .xlsx" }
                        }
                        div style="overflow-x: auto;" {
                            table style="font-size: 0.9em;" {
                                thead {
                                    tr {
                                        th { "ID" }
                                        th { "Title" }
                                        th { "Location" }
                                        th { "Price" }
                                        th { "Owner" }
                                        th { "Notes" }
                                    }
                                }
                                tbody {
                                    @for property in &vm.properties {
                                        tr {
                                            td { a href={ "/properties/" (property.id) } { (property.id) } }
                                            td { (property.title) }
                                            td { (property.location) }
                                            td { (property.price_display().uf) }
                                            @match &property.private_data {
                                                Some(data) => {
                                                    td { (data.owner_name) br; span style="color: #6b7280;" { (data.owner_phone) } }
                                                    td style="color: #6b7280;" { (data.private_notes) }
                                                }
                                                None => {
                                                    td style="color: #9ca3af; font-style: italic;" { "—" }
                                                    td {}
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn property_form(form: &PropertyForm) -> Markup {
    html! {
        form action="/admin/properties" method="post" class="stack" {
            h4 { "Public listing" }

            label for="title" { "Title" }
            input type="text" id="title" name="title" required value=(form.title)
                placeholder="e.g. Spectacular house in El Venado";

            label for="commune" { "Commune" }
            select id="commune" name="commune" {
                @for commune in COMMUNES {
                    option value=(commune) selected[form.commune == *commune] { (commune) }
                }
            }

            label for="price" { "Price" }
            input type="number" id="price" name="price" min="0" step="any" required value=(form.price);

            label for="currency" { "Currency" }
            select id="currency" name="currency" {
                @for (value, label) in CURRENCY_OPTIONS {
                    option value=(value) selected[form.currency == *value] { (label) }
                }
            }

            label for="type" { "Type" }
            select id="type" name="type" {
                @for t in PropertyType::ALL {
                    option value=(t.form_value()) selected[form.property_type == t.form_value()] { (t.label()) }
                }
            }

            label for="bedrooms" { "Bedrooms" }
            input type="number" id="bedrooms" name="bedrooms" min="0" value=(form.bedrooms);
            label for="bathrooms" { "Bathrooms" }
            input type="number" id="bathrooms" name="bathrooms" min="0" value=(form.bathrooms);
            label for="area" { "Total m²" }
            input type="number" id="area" name="area" min="0" step="any" value=(form.area);

            label for="image_url" { "Main image URL" }
            input type="url" id="image_url" name="image_url" value=(form.image_url) placeholder="https://...";

            label for="description" { "Description" }
            textarea id="description" name="description" rows="4" required { (form.description) }

            h4 style="color: #b91c1c;" { "Private data (admin only)" }

            label for="owner_name" { "Owner name" }
            input type="text" id="owner_name" name="owner_name" value=(form.owner_name);
            label for="owner_phone" { "Owner phone" }
            input type="tel" id="owner_phone" name="owner_phone" value=(form.owner_phone);
            label for="legal_description" { "Legal description" }
            textarea id="legal_description" name="legal_description" rows="2" { (form.legal_description) }
            label for="private_notes" { "Private notes" }
            textarea id="private_notes" name="private_notes" rows="3"
                placeholder="Commission agreements, key availability, etc." { (form.private_notes) }

            p {
                button type="submit" style="padding: 8px 16px; background: #111; color: white; border: none; border-radius: 4px; cursor: pointer;" {
                    "Publish property"
                }
                " "
                a href="/" { "Cancel" }
            }
        }
    }
}
