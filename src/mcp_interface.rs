//! MCP interface functions for the Pokedex service
//!
//! This module contains the display, command handling, and validation
//! functions the MCP server exposes as tools. Identifier resolution and the
//! exactly-six team rule live here; the analysis engine only ever receives
//! resolved Pokemon records.

use crate::analysis::comparator::{compare, ComparisonReport};
use crate::analysis::effectiveness::TypeChart;
use crate::analysis::synergy::{analyze_team_synergy, SynergyReport};
use crate::catalog::{self, PokedexFilter};
use crate::errors::{AnalysisError, PokedexResult};
use schema::{Pokemon, PokemonIdentifier};

/// Team size the synergy endpoint accepts.
pub const TEAM_SIZE: usize = 6;

/// Returns a formatted listing of catalog Pokemon matching the filters
pub fn handle_list_command(
    name: Option<&str>,
    type_name: Option<&str>,
    ability: Option<&str>,
) -> String {
    let filter = PokedexFilter {
        name: name.map(str::to_string),
        type_name: type_name.map(str::to_string),
        ability: ability.map(str::to_string),
    };
    let results = catalog::list_pokemon(&filter);

    if results.is_empty() {
        return "No Pokemon matched the given filters.".to_string();
    }

    let mut output = format!("Found {} Pokemon:\n", results.len());
    for pokemon in &results {
        output.push_str(&format!(
            "  #{:03} {} [{}]\n",
            pokemon.id,
            pokemon.name,
            pokemon.types.join("/")
        ));
    }
    output
}

/// Returns the detail card for a single Pokemon, or an error message
pub fn handle_lookup_command(raw_identifier: &str) -> String {
    let identifier = PokemonIdentifier::parse(raw_identifier);
    match catalog::get_pokemon(&identifier) {
        Ok(pokemon) => display_pokemon_details(&pokemon),
        Err(e) => format!("Error: {}", e),
    }
}

/// Resolves both identifiers and renders the stat comparison.
/// Fails if either Pokemon is unknown or lacks a stats record.
pub fn handle_compare_command(first_raw: &str, second_raw: &str) -> PokedexResult<String> {
    let first = catalog::get_pokemon(&PokemonIdentifier::parse(first_raw))?;
    let second = catalog::get_pokemon(&PokemonIdentifier::parse(second_raw))?;
    let report = compare(&first, &second)?;
    Ok(display_comparison_report(&report))
}

/// Validates the team size, resolves every member, and renders the synergy
/// report. The engine itself tolerates short teams; the exactly-six rule is
/// enforced here at the request boundary.
pub fn handle_team_synergy_command(raw_members: &[String]) -> PokedexResult<String> {
    if raw_members.len() != TEAM_SIZE {
        return Err(AnalysisError::InvalidTeamSize(raw_members.len()).into());
    }

    let mut team = Vec::with_capacity(TEAM_SIZE);
    for raw in raw_members {
        let identifier = PokemonIdentifier::parse(raw);
        team.push(catalog::get_pokemon(&identifier)?);
    }

    let report = analyze_team_synergy(&team, TypeChart::global());
    Ok(display_synergy_report(&team, &report))
}

/// Format a Pokemon detail card: number, name, measurements, types,
/// abilities, and the stats table
pub fn display_pokemon_details(pokemon: &Pokemon) -> String {
    let mut output = format!("#{:03} {}\n", pokemon.id, pokemon.name);
    output.push_str("--------------------\n");

    if pokemon.height.is_some() || pokemon.weight.is_some() {
        output.push_str(&format!(
            "Height: {}  Weight: {}\n",
            pokemon
                .height
                .map_or("?".to_string(), |h| h.to_string()),
            pokemon
                .weight
                .map_or("?".to_string(), |w| w.to_string())
        ));
    }

    output.push_str(&format!("Type(s): {}\n", pokemon.types.join(" / ")));

    if !pokemon.abilities.is_empty() {
        let ability_names: Vec<String> = pokemon
            .abilities
            .iter()
            .map(|a| {
                if a.is_hidden {
                    format!("{} (hidden)", a.name)
                } else {
                    a.name.clone()
                }
            })
            .collect();
        output.push_str(&format!("Abilities: {}\n", ability_names.join(", ")));
    }

    match pokemon.stats.as_ref().and_then(|s| s.complete()) {
        Some(stats) => {
            output.push_str("Base Stats:\n");
            const LABEL_WIDTH: usize = 12;
            output.push_str(&format!("{:<LABEL_WIDTH$} : {}\n", "HP", stats.hp));
            output.push_str(&format!("{:<LABEL_WIDTH$} : {}\n", "Attack", stats.attack));
            output.push_str(&format!("{:<LABEL_WIDTH$} : {}\n", "Defense", stats.defense));
            output.push_str(&format!(
                "{:<LABEL_WIDTH$} : {}\n",
                "Sp. Atk", stats.special_attack
            ));
            output.push_str(&format!(
                "{:<LABEL_WIDTH$} : {}\n",
                "Sp. Def", stats.special_defense
            ));
            output.push_str(&format!("{:<LABEL_WIDTH$} : {}\n", "Speed", stats.speed));
            output.push_str(&format!("{:<LABEL_WIDTH$} : {}\n", "Total", stats.total));
        }
        None => output.push_str("Base Stats: (none recorded)\n"),
    }

    output
}

/// Format a comparison report as aligned text
pub fn display_comparison_report(report: &ComparisonReport) -> String {
    let mut output = format!(
        "--- Stat Comparison: {} vs {} ---\n",
        report.first_name, report.second_name
    );

    for line in &report.stats {
        output.push_str(&format!(
            "{:<16}: {} vs {} -> {}\n",
            line.stat.to_string(),
            line.first,
            line.second,
            line.winner
        ));
    }

    output.push_str(&format!(
        "{:<16}: {} vs {} -> {}\n",
        "total", report.total.first, report.total.second, report.total.winner
    ));
    output.push_str(&format!(
        "Roles: {} is {}, {} is {}\n",
        report.first_name, report.first_role, report.second_name, report.second_role
    ));
    output.push_str(&format!("Overall winner: {}\n", report.overall_winner));

    output
}

/// Format a synergy report: score, the three matchup sections, suggestions
pub fn display_synergy_report(team: &[Pokemon], report: &SynergyReport) -> String {
    let member_names: Vec<&str> = team.iter().map(|p| p.name.as_str()).collect();
    let mut output = String::from("=== Team Synergy Report ===\n");
    output.push_str(&format!("Team: {}\n", member_names.join(", ")));
    output.push_str(&format!("Synergy score: {}/100\n", report.score));

    if !report.major_threats.is_empty() {
        output.push_str("\nMajor threats:\n");
        for threat in &report.major_threats {
            output.push_str(&format!(
                "  {} - {} weak (worst x{})\n",
                threat.type_name, threat.weak_count, threat.worst_multiplier
            ));
        }
    }

    if !report.balanced_matchups.is_empty() {
        output.push_str("\nBalanced matchups:\n");
        for matchup in &report.balanced_matchups {
            output.push_str(&format!(
                "  {} - {} weak, {} resist, {} immune\n",
                matchup.type_name, matchup.weak_count, matchup.resist_count, matchup.immune_count
            ));
        }
    }

    if !report.safe_matchups.is_empty() {
        output.push_str("\nSafe matchups:\n");
        for matchup in &report.safe_matchups {
            output.push_str(&format!(
                "  {} - {} resist, {} immune\n",
                matchup.type_name, matchup.resist_count, matchup.immune_count
            ));
        }
    }

    output.push_str("\nSuggestions:\n");
    for suggestion in &report.suggestions {
        output.push_str(&format!("  - {}\n", suggestion));
    }

    output
}
