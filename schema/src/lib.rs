// Pokedex Service Schema - Shared type definitions
// This crate contains the catalog record structs and supporting enums that are
// shared between the analysis engine, the request layer, and the importer.

// Re-export the main types
pub use pokedex_data::*;
pub use type_data::*;

pub mod pokedex_data;
pub mod type_data;
