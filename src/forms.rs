// src/forms.rs

use crate::domain::property::{PrivateData, Property, PropertyType};
use crate::geos;
use std::collections::HashMap;
use std::io::Read;

/// Decode `application/x-www-form-urlencoded` pairs. Later keys win.
pub fn parse_urlencoded(input: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(input.as_bytes())
        .into_owned()
        .collect()
}

pub fn parse_query(req: &astra::Request) -> HashMap<String, String> {
    req.uri().query().map(parse_urlencoded).unwrap_or_default()
}

pub fn read_form_body(req: &mut astra::Request) -> std::io::Result<HashMap<String, String>> {
    let mut body = String::new();
    req.body_mut().reader().read_to_string(&mut body)?;
    Ok(parse_urlencoded(&body))
}

/// Currencies offered in the admin form: (value, label).
pub const CURRENCY_OPTIONS: &[(&str, &str)] = &[
    ("UF", "UF"),
    ("CLP", "Pesos (CLP)"),
    ("USD", "Dollars (USD)"),
];

pub const DEFAULT_CURRENCY: &str = "UF";

/// Raw admin form values, kept as typed so the form can be re-rendered
/// after a failed submission.
#[derive(Debug, Clone, Default)]
pub struct PropertyForm {
    pub title: String,
    pub commune: String,
    pub price: String,
    pub currency: String,
    pub property_type: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub image_url: String,
    pub description: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub legal_description: String,
    pub private_notes: String,
}

impl PropertyForm {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let field = |key: &str| params.get(key).cloned().unwrap_or_default();

        PropertyForm {
            title: field("title"),
            commune: field("commune"),
            price: field("price"),
            currency: field("currency"),
            property_type: field("type"),
            bedrooms: field("bedrooms"),
            bathrooms: field("bathrooms"),
            area: field("area"),
            image_url: field("image_url"),
            description: field("description"),
            owner_name: field("owner_name"),
            owner_phone: field("owner_phone"),
            legal_description: field("legal_description"),
            private_notes: field("private_notes"),
        }
    }

    /// Blank form with the same defaults the admin page starts with.
    pub fn blank() -> Self {
        PropertyForm {
            commune: geos::COMMUNES[0].to_string(),
            price: "0".into(),
            currency: DEFAULT_CURRENCY.into(),
            property_type: PropertyType::Villa.form_value().into(),
            bedrooms: "1".into(),
            bathrooms: "1".into(),
            area: "0".into(),
            ..Default::default()
        }
    }

    /// Checks the form and builds the property the catalog will store.
    /// Location is stored as "<commune>, Chile"; an empty currency falls back
    /// to UF; private data is attached only when something was filled in.
    pub fn into_property(self, id: String) -> Result<Property, String> {
        let title = required(&self.title, "Title")?;
        let description = required(&self.description, "Description")?;

        let commune = self.commune.trim();
        if !geos::is_commune(commune) {
            return Err(format!("Unknown commune: {commune}"));
        }

        let price = non_negative_number(&self.price, "Price")?;
        let area = non_negative_number(&self.area, "Area")?;
        let bedrooms = count(&self.bedrooms, "Bedrooms")?;
        let bathrooms = count(&self.bathrooms, "Bathrooms")?;

        let currency = match self.currency.trim() {
            "" => DEFAULT_CURRENCY.to_string(),
            c => c.to_string(),
        };

        let private_data = PrivateData {
            owner_name: self.owner_name.trim().to_string(),
            owner_phone: self.owner_phone.trim().to_string(),
            legal_description: self.legal_description.trim().to_string(),
            private_notes: self.private_notes.trim().to_string(),
        };

        Ok(Property {
            id,
            title,
            location: format!("{commune}, {}", geos::COUNTRY),
            price,
            currency,
            bedrooms,
            bathrooms,
            area,
            image_url: self.image_url.trim().to_string(),
            description,
            property_type: PropertyType::from_form_value(&self.property_type),
            private_data: (!private_data.is_blank()).then_some(private_data),
        })
    }
}

fn required(value: &str, name: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{name} is required"));
    }
    Ok(value.to_string())
}

fn non_negative_number(value: &str, name: &str) -> Result<f64, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0.0);
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(format!("{name} must be a non-negative number")),
    }
}

fn count(value: &str, name: &str) -> Result<u32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<u32>()
        .map_err(|_| format!("{name} must be a whole number, zero or more"))
}
