// src/catalog/store.rs

use crate::domain::property::{Property, PLACEHOLDER_IMAGE_URL};
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("a property with id `{0}` already exists")]
    DuplicateId(String),
}

/// Ordered, append-only collection of properties.
///
/// Shared by every server worker. `append` does the uniqueness check and the
/// push under one write lock, so concurrent submissions can't both claim an id.
/// Readers get a cloned snapshot.
#[derive(Debug, Default)]
pub struct CatalogStore {
    properties: RwLock<Vec<Property>>,
}

impl CatalogStore {
    /// Loads the seed in order. Seed rows go through the same image fallback
    /// as appended ones.
    pub fn initialize(seed: Vec<Property>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(seed.len());
        let mut properties = Vec::with_capacity(seed.len());

        for property in seed {
            if !seen.insert(property.id.clone()) {
                return Err(CatalogError::DuplicateId(property.id));
            }
            properties.push(with_image_fallback(property));
        }

        info!(count = properties.len(), "catalog initialized");

        Ok(Self {
            properties: RwLock::new(properties),
        })
    }

    pub fn append(&self, property: Property) -> Result<(), CatalogError> {
        // A panicking writer can only have died before its push, so the
        // vector is still consistent.
        let mut properties = self
            .properties
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if properties.iter().any(|p| p.id == property.id) {
            warn!(id = %property.id, "rejected property with duplicate id");
            return Err(CatalogError::DuplicateId(property.id));
        }

        let property = with_image_fallback(property);
        info!(id = %property.id, title = %property.title, "property added");
        properties.push(property);
        Ok(())
    }

    pub fn all(&self) -> Vec<Property> {
        self.properties
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, id: &str) -> Option<Property> {
        self.properties
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.properties
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

fn with_image_fallback(mut property: Property) -> Property {
    if property.image_url.trim().is_empty() {
        property.image_url = PLACEHOLDER_IMAGE_URL.to_string();
    }
    property
}
