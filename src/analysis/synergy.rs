use crate::analysis::effectiveness::TypeChart;
use ordered_float::OrderedFloat;
use schema::Pokemon;
use serde::Serialize;
use std::collections::HashSet;

const BASE_SCORE: f64 = 70.0;
const THREAT_WEAKNESS_PENALTY: f64 = 5.0;
const THREAT_MULTIPLIER_PENALTY: f64 = 10.0;
const SAFE_MATCHUP_REWARD: f64 = 3.0;

/// A team member affected by an attacking type, with the composed
/// effectiveness against its own type combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffectedPokemon {
    pub name: String,
    pub effectiveness: f64,
}

/// How one attacking type fares against the whole team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeMatchup {
    pub weak_count: usize,
    pub resist_count: usize,
    pub immune_count: usize,
    pub vulnerable: Vec<AffectedPokemon>,
    pub resistant: Vec<AffectedPokemon>,
    pub immune: Vec<AffectedPokemon>,
    pub worst_multiplier: f64,
}

impl Default for TypeMatchup {
    fn default() -> Self {
        Self {
            weak_count: 0,
            resist_count: 0,
            immune_count: 0,
            vulnerable: Vec::new(),
            resistant: Vec::new(),
            immune: Vec::new(),
            worst_multiplier: 1.0,
        }
    }
}

/// An attacking type with multiple weak members and no mitigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorThreat {
    pub type_name: String,
    pub weak_count: usize,
    pub worst_multiplier: f64,
    pub vulnerable: Vec<AffectedPokemon>,
}

/// An attacking type the team is both weak to and covered against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancedMatchup {
    pub type_name: String,
    pub weak_count: usize,
    pub resist_count: usize,
    pub immune_count: usize,
    pub vulnerable: Vec<AffectedPokemon>,
    pub resistant: Vec<AffectedPokemon>,
    pub immune: Vec<AffectedPokemon>,
}

/// An attacking type no member is weak to and at least one resists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafeMatchup {
    pub type_name: String,
    pub resist_count: usize,
    pub immune_count: usize,
    pub resistant: Vec<AffectedPokemon>,
    pub immune: Vec<AffectedPokemon>,
}

/// One (member, own-type) pair hitting a defending type super-effectively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageEntry {
    pub pokemon: String,
    pub type_name: String,
    pub effectiveness: f64,
}

/// The team's super-effective options against one defending type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeCoverage {
    pub type_name: String,
    pub best_effectiveness: f64,
    pub coverage: Vec<CoverageEntry>,
}

/// The full synergy analysis result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SynergyReport {
    pub score: u8,
    pub major_threats: Vec<MajorThreat>,
    pub balanced_matchups: Vec<BalancedMatchup>,
    pub safe_matchups: Vec<SafeMatchup>,
    pub suggestions: Vec<String>,
}

/// Analyze a team of up to six Pokemon with a focus on team-level matchups.
///
/// An empty team yields the zero report without consulting the chart. The
/// request layer is responsible for enforcing the exactly-six rule; the
/// engine itself accepts any length up to six.
pub fn analyze_team_synergy(team: &[Pokemon], chart: &TypeChart) -> SynergyReport {
    if team.is_empty() {
        return SynergyReport::default();
    }

    let matchups: Vec<(String, TypeMatchup)> = chart
        .type_names()
        .iter()
        .map(|attacking| {
            (
                attacking.clone(),
                analyze_type_matchup(attacking, team, chart),
            )
        })
        .collect();

    let (major_threats, balanced_matchups, safe_matchups) = categorize_matchups(matchups);
    let offensive_coverage = analyze_offensive_coverage(team, chart);
    let score = synergy_score(&major_threats, &safe_matchups);
    let suggestions = generate_suggestions(
        &major_threats,
        &safe_matchups,
        &offensive_coverage,
        chart,
    );

    SynergyReport {
        score,
        major_threats,
        balanced_matchups,
        safe_matchups,
        suggestions,
    }
}

/// Bucket every team member by how the attacking type affects it.
fn analyze_type_matchup(attacking: &str, team: &[Pokemon], chart: &TypeChart) -> TypeMatchup {
    let mut matchup = TypeMatchup::default();

    for pokemon in team {
        let effectiveness = chart.effectiveness(attacking, &pokemon.types);
        let affected = AffectedPokemon {
            name: pokemon.name.clone(),
            effectiveness,
        };

        if effectiveness > 1.0 {
            matchup.weak_count += 1;
            matchup.vulnerable.push(affected);
            if effectiveness > matchup.worst_multiplier {
                matchup.worst_multiplier = effectiveness;
            }
        } else if effectiveness > 0.0 && effectiveness < 1.0 {
            matchup.resist_count += 1;
            matchup.resistant.push(affected);
        } else if effectiveness == 0.0 {
            matchup.immune_count += 1;
            matchup.immune.push(affected);
        }
    }

    matchup
}

/// Sort matchups into major threats, balanced, and safe. The rules are
/// mutually exclusive; a pure-neutral type lands in none of the three.
fn categorize_matchups(
    matchups: Vec<(String, TypeMatchup)>,
) -> (Vec<MajorThreat>, Vec<BalancedMatchup>, Vec<SafeMatchup>) {
    let mut major_threats = Vec::new();
    let mut balanced_matchups = Vec::new();
    let mut safe_matchups = Vec::new();

    for (type_name, matchup) in matchups {
        if matchup.weak_count >= 2 && matchup.resist_count == 0 && matchup.immune_count == 0 {
            major_threats.push(MajorThreat {
                type_name,
                weak_count: matchup.weak_count,
                worst_multiplier: matchup.worst_multiplier,
                vulnerable: matchup.vulnerable,
            });
        } else if matchup.weak_count > 0
            && (matchup.resist_count > 0 || matchup.immune_count > 0)
        {
            balanced_matchups.push(BalancedMatchup {
                type_name,
                weak_count: matchup.weak_count,
                resist_count: matchup.resist_count,
                immune_count: matchup.immune_count,
                vulnerable: matchup.vulnerable,
                resistant: matchup.resistant,
                immune: matchup.immune,
            });
        } else if matchup.weak_count == 0
            && (matchup.resist_count > 0 || matchup.immune_count > 0)
        {
            safe_matchups.push(SafeMatchup {
                type_name,
                resist_count: matchup.resist_count,
                immune_count: matchup.immune_count,
                resistant: matchup.resistant,
                immune: matchup.immune,
            });
        }
    }

    (major_threats, balanced_matchups, safe_matchups)
}

/// Which defending types the team's own types hit super effectively.
pub fn analyze_offensive_coverage(team: &[Pokemon], chart: &TypeChart) -> Vec<TypeCoverage> {
    let mut strengths = Vec::new();

    for defending in chart.type_names() {
        let mut coverage = Vec::new();

        for pokemon in team {
            for own_type in &pokemon.types {
                let effectiveness = chart.effectiveness(own_type, &[defending.as_str()]);
                if effectiveness > 1.0 {
                    coverage.push(CoverageEntry {
                        pokemon: pokemon.name.clone(),
                        type_name: own_type.clone(),
                        effectiveness,
                    });
                }
            }
        }

        if !coverage.is_empty() {
            let best_effectiveness = coverage
                .iter()
                .map(|c| OrderedFloat(c.effectiveness))
                .max()
                .map_or(1.0, |m| m.0);
            strengths.push(TypeCoverage {
                type_name: defending.clone(),
                best_effectiveness,
                coverage,
            });
        }
    }

    strengths
}

/// Score the team 0-100: 70 base, penalized per major threat, rewarded per
/// safe matchup. Balanced matchups leave the score untouched.
fn synergy_score(major_threats: &[MajorThreat], safe_matchups: &[SafeMatchup]) -> u8 {
    let mut score = BASE_SCORE;

    for threat in major_threats {
        score -= threat.weak_count as f64 * THREAT_WEAKNESS_PENALTY
            + (threat.worst_multiplier - 1.0) * THREAT_MULTIPLIER_PENALTY;
    }

    for matchup in safe_matchups {
        score += (matchup.resist_count + matchup.immune_count) as f64 * SAFE_MATCHUP_REWARD;
    }

    score.clamp(0.0, 100.0) as u8
}

/// Generate targeted suggestions, in a fixed rule order: threat counters,
/// stacking weaknesses, strong defenses, offensive gaps, then a single
/// positive line when nothing else applied.
fn generate_suggestions(
    major_threats: &[MajorThreat],
    safe_matchups: &[SafeMatchup],
    offensive_coverage: &[TypeCoverage],
    chart: &TypeChart,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    for threat in major_threats {
        let resisting_types = chart.types_resisting(&threat.type_name);
        if !resisting_types.is_empty() {
            suggestions.push(format!(
                "Major threat: {} - {} Pokemon weak, no reliable counters. \
                 Consider adding {} type Pokemon.",
                capitalize(&threat.type_name),
                threat.weak_count,
                resisting_types.join(", ")
            ));
        }
    }

    for threat in major_threats.iter().filter(|t| t.weak_count >= 3) {
        suggestions.push(format!(
            "Stacking weakness: {} - {} Pokemon are weak. This is a critical vulnerability.",
            capitalize(&threat.type_name),
            threat.weak_count
        ));
    }

    for defense in safe_matchups
        .iter()
        .filter(|s| s.resist_count + s.immune_count >= 3)
    {
        suggestions.push(format!(
            "Strong defense: Your team handles {} well with {} resistances/immunities.",
            capitalize(&defense.type_name),
            defense.resist_count + defense.immune_count
        ));
    }

    let covered_types: HashSet<&str> = offensive_coverage
        .iter()
        .filter(|c| c.best_effectiveness >= 2.0)
        .map(|c| c.type_name.as_str())
        .collect();
    let uncovered_types: Vec<&str> = chart
        .type_names()
        .iter()
        .filter(|t| !covered_types.contains(t.as_str()))
        .map(|t| t.as_str())
        .collect();

    if !uncovered_types.is_empty() {
        suggestions.push(format!(
            "Offensive gap: Your team can't hit {} types super effectively. \
             Consider adding Pokemon with types that cover these weaknesses.",
            uncovered_types.join(", ")
        ));
    }

    if suggestions.is_empty() {
        suggestions.push("Your team has excellent type coverage and synergy!".to_string());
    }

    suggestions
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
