// src/app.rs
use crate::catalog::{CatalogError, CatalogStore, IdSource, TimestampIds};

/// Everything a request handler can reach. Built once in `main` and shared
/// by reference across the worker pool.
pub struct App {
    pub catalog: CatalogStore,
    pub ids: Box<dyn IdSource>,
}

impl App {
    pub fn new(catalog: CatalogStore, ids: Box<dyn IdSource>) -> Self {
        Self { catalog, ids }
    }

    /// Production wiring: seeded catalog and timestamp ids.
    pub fn seeded() -> Result<Self, CatalogError> {
        let catalog = CatalogStore::initialize(crate::catalog::seed_properties())?;
        Ok(Self::new(catalog, Box::new(TimestampIds::new())))
    }
}
