// src/domain/search.rs

use crate::domain::pricing::normalize;
use crate::domain::property::{Property, PropertyType};
use std::collections::HashMap;

/// Hero-search criteria. Every bound is optional and inclusive; an empty
/// filter matches the whole catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub location: Option<String>,
    pub min_bedrooms: Option<u32>,
    pub property_type: Option<PropertyType>,
    pub min_uf: Option<f64>,
    pub max_uf: Option<f64>,
}

impl SearchFilters {
    /// Blank or unparsable parameters are ignored rather than rejected.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let text = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        SearchFilters {
            location: text("location").map(str::to_string),
            min_bedrooms: text("bedrooms").and_then(|v| v.parse().ok()),
            property_type: text("type").and_then(PropertyType::parse_form_value),
            min_uf: text("min_uf").and_then(parse_amount),
            max_uf: text("max_uf").and_then(parse_amount),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }

    pub fn matches(&self, property: &Property) -> bool {
        if let Some(loc) = &self.location {
            if !property
                .location
                .to_lowercase()
                .contains(&loc.to_lowercase())
            {
                return false;
            }
        }
        if let Some(min) = self.min_bedrooms {
            if property.bedrooms < min {
                return false;
            }
        }
        if let Some(t) = self.property_type {
            if property.property_type != t {
                return false;
            }
        }
        if self.min_uf.is_some() || self.max_uf.is_some() {
            let uf = normalize(property.price, &property.currency).uf;
            if self.min_uf.is_some_and(|min| uf < min) || self.max_uf.is_some_and(|max| uf > max)
            {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, catalog: &[Property]) -> Vec<Property> {
        catalog.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    /// Page heading for a results page.
    pub fn title(&self) -> String {
        match &self.location {
            Some(loc) => format!("Results for \"{loc}\""),
            None => "Search results".to_string(),
        }
    }
}

/// Finite numbers only: "NaN" and "inf" parse as f64 but make no sense as bounds.
fn parse_amount(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
