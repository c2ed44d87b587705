use crate::errors::{AnalysisError, AnalysisResult};
use schema::{Pokemon, Role, Stat, StatBlock};
use serde::Serialize;
use std::fmt;
use strum::IntoEnumIterator;

/// Outcome of a single value comparison: the winning Pokemon's name, or a
/// tie when the values are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Winner {
    Pokemon(String),
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Pokemon(name) => write!(f, "{}", name),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatComparison {
    pub stat: Stat,
    pub first: u32,
    pub second: u32,
    pub winner: Winner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalComparison {
    pub first: u32,
    pub second: u32,
    pub winner: Winner,
}

/// The full structured comparison of two Pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    pub first_name: String,
    pub second_name: String,
    pub stats: Vec<StatComparison>,
    pub total: TotalComparison,
    pub first_role: Role,
    pub second_role: Role,
    pub overall_winner: Winner,
}

/// Assign a role based on a stat profile.
///
/// Offense is the mean of the two attack stats, defense the mean of the two
/// defense stats, and hp stands alone. The rules are checked in fixed
/// priority order (Offensive, Defensive, Tank), so any tie between the
/// aggregates falls through to Balanced.
pub fn classify_role(stats: &StatBlock) -> Role {
    let offense = (stats.attack + stats.special_attack) as f64 / 2.0;
    let defense = (stats.defense + stats.special_defense) as f64 / 2.0;
    let tank = stats.hp as f64;

    if offense > defense && offense > tank {
        Role::Offensive
    } else if defense > offense && defense > tank {
        Role::Defensive
    } else if tank > offense && tank > defense {
        Role::Tank
    } else {
        Role::Balanced
    }
}

/// Compare two Pokemon stat by stat.
///
/// Both must carry a complete stats record; a missing or partial record is
/// rejected with `MissingStats` naming the offending Pokemon.
pub fn compare(first: &Pokemon, second: &Pokemon) -> AnalysisResult<ComparisonReport> {
    let first_stats = complete_stats(first)?;
    let second_stats = complete_stats(second)?;

    let stats = Stat::iter()
        .map(|stat| {
            let (a, b) = (first_stats.get(stat), second_stats.get(stat));
            StatComparison {
                stat,
                first: a,
                second: b,
                winner: declare_winner(first, second, a, b),
            }
        })
        .collect();

    let total = TotalComparison {
        first: first_stats.total,
        second: second_stats.total,
        winner: declare_winner(first, second, first_stats.total, second_stats.total),
    };
    let overall_winner = total.winner.clone();

    Ok(ComparisonReport {
        first_name: first.name.clone(),
        second_name: second.name.clone(),
        stats,
        total,
        first_role: classify_role(&first_stats),
        second_role: classify_role(&second_stats),
        overall_winner,
    })
}

fn complete_stats(pokemon: &Pokemon) -> AnalysisResult<StatBlock> {
    pokemon
        .stats
        .as_ref()
        .and_then(|s| s.complete())
        .ok_or_else(|| AnalysisError::MissingStats(pokemon.name.clone()))
}

fn declare_winner(first: &Pokemon, second: &Pokemon, a: u32, b: u32) -> Winner {
    if a > b {
        Winner::Pokemon(first.name.clone())
    } else if b > a {
        Winner::Pokemon(second.name.clone())
    } else {
        Winner::Tie
    }
}
