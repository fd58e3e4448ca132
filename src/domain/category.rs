// src/domain/category.rs

use crate::domain::property::Property;
use crate::geos;

pub const REAL_ESTATE: &str = "real_estate";
pub const DEVELOPMENTS: &str = "developments";

/// A category key resolved against the known communes and pseudo-categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category<'a> {
    Area(&'a str),
    RealEstate,
    Developments,
    FreeText(&'a str),
}

impl<'a> Category<'a> {
    pub fn parse(key: &'a str) -> Self {
        match key {
            REAL_ESTATE => Category::RealEstate,
            DEVELOPMENTS => Category::Developments,
            area if geos::is_commune(area) => Category::Area(area),
            other => Category::FreeText(other),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Category::Area(area) => format!("Luxury properties in {area}"),
            Category::RealEstate => "Luxury Real Estate".to_string(),
            Category::Developments => "New Developments".to_string(),
            Category::FreeText(key) => format!("Results for \"{key}\""),
        }
    }

    /// Only commune keys narrow the catalog. Pseudo-categories and free text
    /// have no filtering rule yet and match everything.
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            Category::Area(area) => leading_area(&property.location) == *area,
            Category::RealEstate | Category::Developments | Category::FreeText(_) => true,
        }
    }
}

/// "Concepción, Chile" -> "Concepción". A location without a comma is its own area.
pub fn leading_area(location: &str) -> &str {
    location
        .split_once(',')
        .map_or(location, |(area, _)| area)
        .trim()
}

#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub title: String,
    pub properties: Vec<Property>,
}

pub fn filter_by_category(key: &str, catalog: &[Property]) -> CategoryListing {
    let category = Category::parse(key);

    CategoryListing {
        title: category.title(),
        properties: catalog
            .iter()
            .filter(|p| category.matches(p))
            .cloned()
            .collect(),
    }
}
