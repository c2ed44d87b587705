use pokedex_service::analysis::effectiveness::TypeChart;
use pokedex_service::mcp_interface::{
    handle_compare_command, handle_list_command, handle_lookup_command,
    handle_team_synergy_command,
};
use pokedex_service::{initialize_catalog, list_pokemon, PokedexFilter};
use std::path::PathBuf;

fn main() {
    env_logger::init();

    let data_path = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "data".to_string()));

    if let Err(e) = initialize_catalog(&data_path) {
        println!("Error initializing catalog: {}", e);
        println!("Run `pokedex-populate {}` to fetch catalog data first.", data_path.display());
        return;
    }

    let chart = TypeChart::global();
    println!(
        "Catalog loaded: {} types known to the effectiveness chart.",
        chart.type_names().len()
    );
    println!();

    // Example 1: filtered listing
    println!("{}", handle_list_command(None, Some("fire"), None));

    // Example 2: single lookup
    println!("{}", handle_lookup_command("pikachu"));

    // Example 3: stat comparison
    match handle_compare_command("charizard", "blastoise") {
        Ok(report) => println!("{}", report),
        Err(e) => println!("Comparison failed: {}", e),
    }

    // Example 4: team synergy over the first six catalog entries
    let team: Vec<String> = list_pokemon(&PokedexFilter::default())
        .iter()
        .take(6)
        .map(|p| p.id.to_string())
        .collect();
    match handle_team_synergy_command(&team) {
        Ok(report) => println!("{}", report),
        Err(e) => println!("Team analysis failed: {}", e),
    }
}
