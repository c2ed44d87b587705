use schema::PokemonIdentifier;
use std::fmt;
use std::path::PathBuf;

/// Main error type for the Pokedex analysis service
#[derive(Debug, Clone, PartialEq)]
pub enum PokedexError {
    /// Error related to catalog data lookup or loading
    Catalog(CatalogError),
    /// Error related to a rejected analysis request
    Analysis(AnalysisError),
}

/// Errors related to catalog data operations
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The referenced Pokemon does not exist in the catalog
    PokemonNotFound(PokemonIdentifier),
    /// The catalog data directory (or one of its subdirectories) is missing
    DataDirMissing(PathBuf),
    /// A catalog file could not be read or parsed
    Load { path: PathBuf, reason: String },
}

/// Errors related to analysis request preconditions
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The named Pokemon has no complete stats record
    MissingStats(String),
    /// A synergy request did not supply exactly six team members
    InvalidTeamSize(usize),
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokedexError::Catalog(err) => write!(f, "Catalog error: {}", err),
            PokedexError::Analysis(err) => write!(f, "Analysis error: {}", err),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::PokemonNotFound(identifier) => {
                write!(f, "Pokemon '{}' not found", identifier)
            }
            CatalogError::DataDirMissing(path) => {
                write!(f, "Catalog data directory not found: {}", path.display())
            }
            CatalogError::Load { path, reason } => {
                write!(f, "Failed to load {}: {}", path.display(), reason)
            }
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::MissingStats(name) => {
                write!(f, "Pokemon '{}' has no stats saved", name)
            }
            AnalysisError::InvalidTeamSize(size) => {
                write!(f, "Exactly 6 Pokemon are required, got {}", size)
            }
        }
    }
}

impl std::error::Error for PokedexError {}
impl std::error::Error for CatalogError {}
impl std::error::Error for AnalysisError {}

impl From<CatalogError> for PokedexError {
    fn from(err: CatalogError) -> Self {
        PokedexError::Catalog(err)
    }
}

impl From<AnalysisError> for PokedexError {
    fn from(err: AnalysisError) -> Self {
        PokedexError::Analysis(err)
    }
}

/// Type alias for Results using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using AnalysisError
pub type AnalysisResult<T> = Result<T, AnalysisError>;
