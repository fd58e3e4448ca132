// src/catalog/seed.rs

use crate::domain::property::{Property, PropertyType};

struct SeedRow {
    id: &'static str,
    title: &'static str,
    location: &'static str,
    price: f64,
    currency: &'static str,
    image_url: &'static str,
    bedrooms: u32,
    bathrooms: u32,
    area: f64,
    property_type: PropertyType,
    description: &'static str,
}

const SEED: &[SeedRow] = &[
    // International
    SeedRow {
        id: "1",
        title: "Villa Moderna Frente al Mar",
        location: "Marbella, España",
        price: 4_500_000.0,
        currency: "€",
        image_url: "https://picsum.photos/seed/leroy1/800/600",
        bedrooms: 5,
        bathrooms: 6,
        area: 650.0,
        property_type: PropertyType::Villa,
        description: "Espectacular villa moderna con acceso directo a la playa y vistas panorámicas al Mediterráneo.",
    },
    SeedRow {
        id: "5",
        title: "Residencia Exclusiva en Pedregal",
        location: "Cabo San Lucas, México",
        price: 12_500_000.0,
        currency: "$",
        image_url: "https://images.unsplash.com/photo-1512813195386-6cf811ad3542?q=80&w=800&auto=format&fit=crop",
        bedrooms: 7,
        bathrooms: 9,
        area: 1500.0,
        property_type: PropertyType::Mansion,
        description: "Obra maestra de la arquitectura con vistas al Arco y al Océano Pacífico.",
    },
    SeedRow {
        id: "7",
        title: "Eco-Villa en la Selva",
        location: "Tulum, México",
        price: 4_200_000.0,
        currency: "$",
        image_url: "https://images.unsplash.com/photo-1580587771525-78b9dba3b91d?q=80&w=800&auto=format&fit=crop",
        bedrooms: 4,
        bathrooms: 4,
        area: 320.0,
        property_type: PropertyType::Villa,
        description: "Santuario privado rodeado de naturaleza exuberante.",
    },
    // Biobío region
    SeedRow {
        id: "cl-1",
        title: "Casa Estilo Georgiano en Lonco Parque",
        location: "Chiguayante, Chile",
        price: 18_500.0,
        currency: "UF",
        image_url: "https://images.unsplash.com/photo-1600596542815-2a434f678417?q=80&w=800&auto=format&fit=crop",
        bedrooms: 5,
        bathrooms: 4,
        area: 420.0,
        property_type: PropertyType::Mansion,
        description: "Exclusiva propiedad en el sector más consolidado de Chiguayante con amplios jardines.",
    },
    SeedRow {
        id: "cl-2",
        title: "Penthouse con Vista al Río Biobío",
        location: "San Pedro de la Paz, Chile",
        price: 12_500.0,
        currency: "UF",
        image_url: "https://images.unsplash.com/photo-1567767292278-a4f21aa2d36e?q=80&w=800&auto=format&fit=crop",
        bedrooms: 3,
        bathrooms: 3,
        area: 210.0,
        property_type: PropertyType::Penthouse,
        description: "Vista panorámica inigualable hacia Concepción y desembocadura, Condominio Andalué.",
    },
    SeedRow {
        id: "cl-3",
        title: "Casona Patronal Remodelada",
        location: "Los Ángeles, Chile",
        price: 25_000.0,
        currency: "UF",
        image_url: "https://images.unsplash.com/photo-1588880331179-bc9b93a8cb5e?q=80&w=800&auto=format&fit=crop",
        bedrooms: 8,
        bathrooms: 6,
        area: 850.0,
        property_type: PropertyType::Estate,
        description: "Finca histórica a minutos del centro, ideal para proyecto hotelero o residencia de lujo.",
    },
    SeedRow {
        id: "cl-4",
        title: "Departamento Moderno Centro",
        location: "Concepción, Chile",
        price: 8_500.0,
        currency: "UF",
        image_url: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?q=80&w=800&auto=format&fit=crop",
        bedrooms: 2,
        bathrooms: 2,
        area: 95.0,
        property_type: PropertyType::Apartment,
        description: "Ubicación privilegiada frente al Parque Ecuador, acabados de primera calidad.",
    },
    SeedRow {
        id: "cl-5",
        title: "Casa Mediterránea en El Venado",
        location: "San Pedro de la Paz, Chile",
        price: 22_000.0,
        currency: "UF",
        image_url: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=800&auto=format&fit=crop",
        bedrooms: 6,
        bathrooms: 5,
        area: 380.0,
        property_type: PropertyType::Villa,
        description: "Arquitectura de vanguardia en el barrio más exclusivo de la región.",
    },
    SeedRow {
        id: "cl-6",
        title: "Parcela de Agrado con Vista al Mar",
        location: "Penco, Chile",
        price: 9_500.0,
        currency: "UF",
        image_url: "https://images.unsplash.com/photo-1510798831971-661eb04b3739?q=80&w=800&auto=format&fit=crop",
        bedrooms: 4,
        bathrooms: 3,
        area: 250.0,
        property_type: PropertyType::Estate,
        description: "Tranquilidad absoluta en sector Lirquén, rodeado de bosque nativo.",
    },
    SeedRow {
        id: "cl-7",
        title: "Departamento Duplex Puerto",
        location: "Talcahuano, Chile",
        price: 6_800.0,
        currency: "UF",
        image_url: "https://images.unsplash.com/photo-1560185008-b033106af5c3?q=80&w=800&auto=format&fit=crop",
        bedrooms: 3,
        bathrooms: 2,
        area: 120.0,
        property_type: PropertyType::Apartment,
        description: "Vista despejada a la bahía, sector Brisas del Sol, cercano a Casino.",
    },
];

/// The listings the site starts with, in display order.
pub fn seed_properties() -> Vec<Property> {
    SEED.iter()
        .map(|row| Property {
            id: row.id.to_string(),
            title: row.title.to_string(),
            location: row.location.to_string(),
            price: row.price,
            currency: row.currency.to_string(),
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            area: row.area,
            image_url: row.image_url.to_string(),
            description: row.description.to_string(),
            property_type: row.property_type,
            private_data: None,
        })
        .collect()
}
