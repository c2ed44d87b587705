use serde::{Deserialize, Serialize};

/// A type's raw damage-relation declarations, as the catalog stores them.
///
/// Each list names the defending types this type deals double, half, or no
/// damage to. A type absent from every list takes neutral damage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<String>,
    #[serde(default)]
    pub half_damage_to: Vec<String>,
    #[serde(default)]
    pub no_damage_to: Vec<String>,
}

/// A catalog type record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeData {
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
}
