//! Pokedex Reference & Team Analysis Service
//!
//! A Pokemon reference catalog with two derived analyses: pairwise stat
//! comparison and six-member team type-synergy scoring. Catalog data is
//! populated from PokeAPI by the `pokedex-populate` bin and served over MCP.

// --- MODULE DECLARATIONS ---
pub mod analysis;
pub mod catalog;
pub mod errors;
pub mod mcp_interface;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Re-export the core data definitions.
pub use schema::{
    Ability,
    BaseStats,
    DamageRelations,
    Pokemon,
    PokemonIdentifier,
    Role,
    Stat,
    StatBlock,
    TypeData,
};

// --- From this crate's modules (`src/`) ---

// Core analysis entry points.
pub use analysis::comparator::{classify_role, compare, ComparisonReport, Winner};
pub use analysis::effectiveness::TypeChart;
pub use analysis::synergy::{analyze_offensive_coverage, analyze_team_synergy, SynergyReport};

// Primary data access functions.
pub use catalog::{all_types, get_pokemon, initialize_catalog, list_pokemon, PokedexFilter};

// Crate-specific error and result types.
pub use errors::{
    AnalysisError, AnalysisResult, CatalogError, CatalogResult, PokedexError, PokedexResult,
};
