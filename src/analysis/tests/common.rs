use crate::analysis::effectiveness::TypeChart;
use schema::{BaseStats, DamageRelations, Pokemon, TypeData};

/// Build a type record from its damage-relation lists.
pub fn type_data(name: &str, double: &[&str], half: &[&str], none: &[&str]) -> TypeData {
    TypeData {
        name: name.to_string(),
        damage_relations: DamageRelations {
            double_damage_to: double.iter().map(|s| s.to_string()).collect(),
            half_damage_to: half.iter().map(|s| s.to_string()).collect(),
            no_damage_to: none.iter().map(|s| s.to_string()).collect(),
        },
    }
}

/// A fifteen-type chart with first-generation damage relations, enough to
/// exercise every matchup class without touching the catalog.
pub fn gen1_chart() -> TypeChart {
    TypeChart::from_types(&[
        type_data("normal", &[], &["rock"], &["ghost"]),
        type_data("fire", &["grass", "ice", "bug"], &["fire", "water", "rock", "dragon"], &[]),
        type_data("water", &["fire", "ground", "rock"], &["water", "grass", "dragon"], &[]),
        type_data(
            "electric",
            &["water", "flying"],
            &["electric", "grass", "dragon"],
            &["ground"],
        ),
        type_data(
            "grass",
            &["water", "ground", "rock"],
            &["fire", "grass", "poison", "flying", "bug", "dragon"],
            &[],
        ),
        type_data(
            "ice",
            &["grass", "ground", "flying", "dragon"],
            &["fire", "water", "ice"],
            &[],
        ),
        type_data(
            "fighting",
            &["normal", "ice", "rock"],
            &["poison", "flying", "psychic", "bug"],
            &["ghost"],
        ),
        type_data("poison", &["grass"], &["poison", "ground", "rock", "ghost"], &[]),
        type_data(
            "ground",
            &["fire", "electric", "poison", "rock"],
            &["grass", "bug"],
            &["flying"],
        ),
        type_data(
            "flying",
            &["grass", "fighting", "bug"],
            &["electric", "rock"],
            &[],
        ),
        type_data("psychic", &["fighting", "poison"], &["psychic"], &[]),
        type_data(
            "bug",
            &["grass", "psychic"],
            &["fire", "fighting", "poison", "flying", "ghost"],
            &[],
        ),
        type_data("rock", &["fire", "ice", "flying", "bug"], &["fighting", "ground"], &[]),
        type_data("ghost", &["ghost", "psychic"], &[], &["normal"]),
        type_data("dragon", &["dragon"], &[], &[]),
    ])
}

/// A builder for creating test Pokemon records with common defaults.
///
/// # Example
/// ```
/// let pokemon = TestPokemonBuilder::new(25, "pikachu")
///     .with_types(&["electric"])
///     .with_stats(35, 55, 40, 50, 50, 90)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    id: u32,
    name: String,
    types: Vec<String>,
    stats: Option<BaseStats>,
}

impl TestPokemonBuilder {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            types: Vec::new(),
            stats: None,
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Sets all six stats; the total is their sum.
    pub fn with_stats(mut self, hp: u32, atk: u32, def: u32, spa: u32, spd: u32, spe: u32) -> Self {
        self.stats = Some(BaseStats {
            hp: Some(hp),
            attack: Some(atk),
            defense: Some(def),
            special_attack: Some(spa),
            special_defense: Some(spd),
            speed: Some(spe),
            total: Some(hp + atk + def + spa + spd + spe),
        });
        self
    }

    pub fn build(self) -> Pokemon {
        Pokemon {
            id: self.id,
            name: self.name,
            height: None,
            weight: None,
            image_url: None,
            types: self.types,
            abilities: Vec::new(),
            stats: self.stats,
        }
    }
}

/// Six identical single-type team members.
pub fn mono_type_team(type_name: &str) -> Vec<Pokemon> {
    (1..=6)
        .map(|i| {
            TestPokemonBuilder::new(i, &format!("{}-{}", type_name, i))
                .with_types(&[type_name])
                .build()
        })
        .collect()
}
