// src/geos.rs

/// Communes the agency lists properties in. Order is the order shown in menus.
pub const COMMUNES: &[&str] = &[
    "Concepción",
    "Chiguayante",
    "San Pedro de la Paz",
    "Talcahuano",
    "Coronel",
    "Penco",
    "Los Ángeles",
];

/// Country appended to commune names for admin-authored locations.
pub const COUNTRY: &str = "Chile";

pub fn is_commune(name: &str) -> bool {
    COMMUNES.iter().any(|c| *c == name)
}
