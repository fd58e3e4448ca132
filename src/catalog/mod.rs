pub mod ids;
pub mod seed;
pub mod store;

pub use ids::{IdSource, SequentialIds, TimestampIds};
pub use seed::seed_properties;
pub use store::{CatalogError, CatalogStore};
