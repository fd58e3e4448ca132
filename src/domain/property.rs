// src/domain/property.rs

use crate::domain::pricing::{price_display, PriceDisplay};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Image shown for listings submitted without one.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1518780664697-55e3ad937233?q=80&w=800&auto=format&fit=crop";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Villa,
    Apartment,
    Penthouse,
    Mansion,
    Estate,
    Unknown,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Villa,
        PropertyType::Apartment,
        PropertyType::Penthouse,
        PropertyType::Mansion,
        PropertyType::Estate,
        PropertyType::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Villa => "Villa",
            PropertyType::Apartment => "Apartment",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Mansion => "Mansion",
            PropertyType::Estate => "Estate",
            PropertyType::Unknown => "Unknown",
        }
    }

    /// Value used in HTML forms and query strings.
    pub fn form_value(self) -> &'static str {
        match self {
            PropertyType::Villa => "villa",
            PropertyType::Apartment => "apartment",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Mansion => "mansion",
            PropertyType::Estate => "estate",
            PropertyType::Unknown => "unknown",
        }
    }

    /// `None` when the value names none of the types.
    pub fn parse_form_value(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.form_value().eq_ignore_ascii_case(value))
    }

    /// Anything we don't recognize becomes `Unknown`.
    pub fn from_form_value(value: &str) -> Self {
        Self::parse_form_value(value).unwrap_or(PropertyType::Unknown)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Owner details captured by the admin form. Never shown on public pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateData {
    pub owner_name: String,
    pub owner_phone: String,
    pub legal_description: String,
    pub private_notes: String,
}

impl PrivateData {
    pub fn is_blank(&self) -> bool {
        [
            &self.owner_name,
            &self.owner_phone,
            &self.legal_description,
            &self.private_notes,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    /// Conventionally "<area>, <country>".
    pub location: String,
    pub price: f64,
    /// Open set of unit tags ("UF", "$", "USD", "€", ...). See `domain::pricing`.
    pub currency: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square meters.
    pub area: f64,
    pub image_url: String,
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_data: Option<PrivateData>,
}

impl Property {
    pub fn price_display(&self) -> PriceDisplay {
        price_display(self.price, &self.currency)
    }

    pub fn public_listing(&self) -> PublicListing<'_> {
        PublicListing {
            id: &self.id,
            title: &self.title,
            location: &self.location,
            price: self.price,
            currency: &self.currency,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            image_url: &self.image_url,
            description: &self.description,
            property_type: self.property_type,
            display: self.price_display(),
        }
    }
}

/// What the JSON listing exposes: everything except private owner data,
/// plus the ready-to-render price strings.
#[derive(Debug, Serialize)]
pub struct PublicListing<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub location: &'a str,
    pub price: f64,
    pub currency: &'a str,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    pub image_url: &'a str,
    pub description: &'a str,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub display: PriceDisplay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_values_map_back_to_types() {
        for t in PropertyType::ALL {
            assert_eq!(PropertyType::from_form_value(t.form_value()), t);
        }
        assert_eq!(PropertyType::from_form_value(" Villa "), PropertyType::Villa);
        assert_eq!(PropertyType::from_form_value("castle"), PropertyType::Unknown);
        assert_eq!(PropertyType::parse_form_value("castle"), None);
        assert_eq!(PropertyType::parse_form_value("Estate"), Some(PropertyType::Estate));
    }

    #[test]
    fn blank_private_data_is_detected() {
        let mut data = PrivateData {
            owner_name: " ".into(),
            owner_phone: String::new(),
            legal_description: String::new(),
            private_notes: String::new(),
        };
        assert!(data.is_blank());

        data.private_notes = "keys at the front desk".into();
        assert!(!data.is_blank());
    }

    #[test]
    fn public_listing_leaves_out_private_data() {
        let property = Property {
            id: "p-1".into(),
            title: "Casa".into(),
            location: "Penco, Chile".into(),
            price: 100.0,
            currency: "UF".into(),
            bedrooms: 3,
            bathrooms: 2,
            area: 120.0,
            image_url: PLACEHOLDER_IMAGE_URL.into(),
            description: "Vista al mar".into(),
            property_type: PropertyType::Villa,
            private_data: Some(PrivateData {
                owner_name: "Ana".into(),
                owner_phone: "+56 9 1234 5678".into(),
                legal_description: String::new(),
                private_notes: String::new(),
            }),
        };

        let json = serde_json::to_value(property.public_listing()).unwrap();
        assert!(json.get("private_data").is_none());
        assert_eq!(json["type"], "villa");
        assert_eq!(json["display"]["uf"], "UF 100");
        assert!(!json.to_string().contains("Ana"));
    }
}
