use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// The six base stat fields every complete stat record carries.
///
/// Iteration order (via `strum::EnumIter`) matches the order the stats are
/// reported in catalog data and comparison output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special_attack",
            Stat::SpecialDefense => "special_defense",
            Stat::Speed => "speed",
        };
        write!(f, "{}", display_name)
    }
}

/// Role a Pokemon's stat profile classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Offensive,
    Defensive,
    Tank,
    Balanced,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Role::Offensive => "Offensive",
            Role::Defensive => "Defensive",
            Role::Tank => "Tank",
            Role::Balanced => "Balanced",
        };
        write!(f, "{}", display_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Raw base stats as stored in the catalog. Every field is optional because
/// the upstream catalog may not carry stats for every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub attack: Option<u32>,
    #[serde(default)]
    pub defense: Option<u32>,
    #[serde(default)]
    pub special_attack: Option<u32>,
    #[serde(default)]
    pub special_defense: Option<u32>,
    #[serde(default)]
    pub speed: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
}

impl BaseStats {
    /// Returns the record as a complete `StatBlock`, or `None` if any of the
    /// six fields is absent. A stored `total` is trusted as-is; it is only
    /// recomputed when the catalog never wrote one.
    pub fn complete(&self) -> Option<StatBlock> {
        let hp = self.hp?;
        let attack = self.attack?;
        let defense = self.defense?;
        let special_attack = self.special_attack?;
        let special_defense = self.special_defense?;
        let speed = self.speed?;
        let total = self
            .total
            .unwrap_or(hp + attack + defense + special_attack + special_defense + speed);
        Some(StatBlock {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
            total,
        })
    }
}

/// A complete stat record: all six fields present, plus the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
    pub total: u32,
}

impl StatBlock {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }
}

/// A catalog Pokemon record with its types, abilities, and stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub stats: Option<BaseStats>,
}

/// How a request refers to a Pokemon: by catalog id or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PokemonIdentifier {
    ById(u32),
    ByName(String),
}

impl PokemonIdentifier {
    /// Parses a raw request string: all-digit input becomes an id lookup,
    /// anything else a name lookup.
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(id) = raw.parse::<u32>() {
                return PokemonIdentifier::ById(id);
            }
        }
        PokemonIdentifier::ByName(raw.to_string())
    }
}

impl fmt::Display for PokemonIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokemonIdentifier::ById(id) => write!(f, "#{}", id),
            PokemonIdentifier::ByName(name) => write!(f, "{}", name),
        }
    }
}
