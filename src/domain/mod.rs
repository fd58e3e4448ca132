pub mod category;
pub mod pricing;
pub mod property;
pub mod search;
