use crate::errors::{CatalogError, CatalogResult};
use schema::{Pokemon, PokemonIdentifier, TypeData};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{LazyLock, RwLock};

// Global catalog storage - loaded once at startup
static CATALOG: LazyLock<RwLock<Pokedex>> = LazyLock::new(|| RwLock::new(Pokedex::default()));

/// Initialize the global catalog by loading from disk
pub fn initialize_catalog(data_path: &Path) -> CatalogResult<()> {
    let catalog = Pokedex::load(data_path)?;
    let mut global_data = CATALOG.write().unwrap();
    *global_data = catalog;
    Ok(())
}

/// Get a Pokemon record from the global catalog
pub fn get_pokemon(identifier: &PokemonIdentifier) -> CatalogResult<Pokemon> {
    CATALOG.read().unwrap().get(identifier)
}

/// Get every type record from the global catalog
pub fn all_types() -> Vec<TypeData> {
    CATALOG.read().unwrap().all_types()
}

/// List Pokemon records matching a filter, ordered by catalog id
pub fn list_pokemon(filter: &PokedexFilter) -> Vec<Pokemon> {
    CATALOG.read().unwrap().list(filter)
}

/// Optional, conjunctive listing filters: name substring, exact type name,
/// exact ability name. All matches are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokedexFilter {
    pub name: Option<String>,
    pub type_name: Option<String>,
    pub ability: Option<String>,
}

impl PokedexFilter {
    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        if let Some(fragment) = &self.name {
            let fragment = fragment.to_ascii_lowercase();
            if !pokemon.name.to_ascii_lowercase().contains(&fragment) {
                return false;
            }
        }
        if let Some(type_name) = &self.type_name {
            if !pokemon.types.iter().any(|t| t.eq_ignore_ascii_case(type_name)) {
                return false;
            }
        }
        if let Some(ability) = &self.ability {
            if !pokemon
                .abilities
                .iter()
                .any(|a| a.name.eq_ignore_ascii_case(ability))
            {
                return false;
            }
        }
        true
    }
}

/// The read-only catalog store: type and Pokemon records keyed for lookup.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    types: HashMap<String, TypeData>,
    pokemon: HashMap<u32, Pokemon>,
}

impl Pokedex {
    pub fn new(types: Vec<TypeData>, pokemon: Vec<Pokemon>) -> Self {
        Self {
            types: types.into_iter().map(|t| (t.name.clone(), t)).collect(),
            pokemon: pokemon.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Load the catalog from RON files under `<data>/types/` and
    /// `<data>/pokemon/`.
    pub fn load(data_path: &Path) -> CatalogResult<Self> {
        let types = load_records::<TypeData>(&data_path.join("types"))?;
        let pokemon = load_records::<Pokemon>(&data_path.join("pokemon"))?;
        Ok(Self::new(types, pokemon))
    }

    pub fn all_types(&self) -> Vec<TypeData> {
        self.types.values().cloned().collect()
    }

    pub fn get(&self, identifier: &PokemonIdentifier) -> CatalogResult<Pokemon> {
        let found = match identifier {
            PokemonIdentifier::ById(id) => self.pokemon.get(id).cloned(),
            PokemonIdentifier::ByName(name) => self
                .pokemon
                .values()
                .find(|p| p.name.eq_ignore_ascii_case(name))
                .cloned(),
        };
        found.ok_or_else(|| CatalogError::PokemonNotFound(identifier.clone()))
    }

    pub fn list(&self, filter: &PokedexFilter) -> Vec<Pokemon> {
        let mut results: Vec<Pokemon> = self
            .pokemon
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        results.sort_by_key(|p| p.id);
        results
    }
}

/// Read every `.ron` file in a directory and parse it as a `T` record.
fn load_records<T: DeserializeOwned>(dir: &Path) -> CatalogResult<Vec<T>> {
    if !dir.exists() {
        return Err(CatalogError::DataDirMissing(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| CatalogError::Load {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CatalogError::Load {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            let content = fs::read_to_string(&path).map_err(|e| CatalogError::Load {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            let record = ron::from_str(&content).map_err(|e| CatalogError::Load {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            records.push(record);
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::Ability;

    fn pokemon(id: u32, name: &str, types: &[&str], abilities: &[&str]) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            height: None,
            weight: None,
            image_url: None,
            types: types.iter().map(|t| t.to_string()).collect(),
            abilities: abilities
                .iter()
                .map(|a| Ability {
                    name: a.to_string(),
                    is_hidden: false,
                })
                .collect(),
            stats: None,
        }
    }

    fn sample_pokedex() -> Pokedex {
        Pokedex::new(
            Vec::new(),
            vec![
                pokemon(1, "bulbasaur", &["grass", "poison"], &["overgrow"]),
                pokemon(4, "charmander", &["fire"], &["blaze"]),
                pokemon(7, "squirtle", &["water"], &["torrent"]),
                pokemon(25, "pikachu", &["electric"], &["static"]),
            ],
        )
    }

    #[test]
    fn lookup_by_id_and_name() {
        let pokedex = sample_pokedex();
        assert_eq!(
            pokedex.get(&PokemonIdentifier::ById(25)).unwrap().name,
            "pikachu"
        );
        // Name lookup is case-insensitive
        assert_eq!(
            pokedex
                .get(&PokemonIdentifier::ByName("Pikachu".to_string()))
                .unwrap()
                .id,
            25
        );
    }

    #[test]
    fn missing_pokemon_is_not_found() {
        let pokedex = sample_pokedex();
        let err = pokedex
            .get(&PokemonIdentifier::ByName("mewtwo".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::PokemonNotFound(PokemonIdentifier::ByName("mewtwo".to_string()))
        );
    }

    #[test]
    fn filters_are_conjunctive() {
        let pokedex = sample_pokedex();

        let by_name = pokedex.list(&PokedexFilter {
            name: Some("saur".to_string()),
            ..PokedexFilter::default()
        });
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "bulbasaur");

        let by_type = pokedex.list(&PokedexFilter {
            type_name: Some("poison".to_string()),
            ..PokedexFilter::default()
        });
        assert_eq!(by_type.len(), 1);

        let mismatched = pokedex.list(&PokedexFilter {
            name: Some("saur".to_string()),
            ability: Some("blaze".to_string()),
            ..PokedexFilter::default()
        });
        assert!(mismatched.is_empty());
    }

    #[test]
    fn unfiltered_listing_is_ordered_by_id() {
        let pokedex = sample_pokedex();
        let all = pokedex.list(&PokedexFilter::default());
        let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4, 7, 25]);
    }
}
