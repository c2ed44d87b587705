//! Pokedex catalog importer
//!
//! Fetches the first-generation Pokemon and their type detail pages from
//! PokeAPI and writes the RON catalog files the service loads at startup.
//! Individual fetch failures are logged and skipped so one bad record does
//! not abort the whole import.

use log::{info, warn};
use ron::ser::PrettyConfig;
use schema::{Ability, BaseStats, DamageRelations, Pokemon, TypeData};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

const FIRST_GENERATION_COUNT: u32 = 151;
const MAX_CONCURRENT_FETCHES: usize = 10;

fn api_base() -> String {
    std::env::var("POKEAPI_BASE_URL")
        .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let data_path = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "data".to_string()));
    tokio::fs::create_dir_all(data_path.join("pokemon")).await?;
    tokio::fs::create_dir_all(data_path.join("types")).await?;

    let client = reqwest::Client::new();
    let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_FETCHES));

    info!("Fetching Pokemon data...");
    let type_names = populate_pokemon(&client, &semaphore, &data_path).await;
    info!("Pokemon data saved; {} types referenced", type_names.len());

    info!("Fetching type details...");
    populate_type_details(&client, &semaphore, &data_path, type_names).await;
    info!("Catalog import complete: {}", data_path.display());

    Ok(())
}

/// Fetch and save every first-generation Pokemon. Returns the set of type
/// names referenced by the saved records.
async fn populate_pokemon(
    client: &reqwest::Client,
    semaphore: &Arc<Semaphore>,
    data_path: &Path,
) -> BTreeSet<String> {
    let mut tasks = JoinSet::new();

    for pokemon_id in 1..=FIRST_GENERATION_COUNT {
        let client = client.clone();
        let semaphore = semaphore.clone();
        let pokemon_dir = data_path.join("pokemon");

        tasks.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| e.to_string())?;
            fetch_and_save_pokemon(&client, pokemon_id, &pokemon_dir).await
        });
    }

    let mut type_names = BTreeSet::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(referenced)) => type_names.extend(referenced),
            Ok(Err(e)) => warn!("{}", e),
            Err(e) => warn!("Fetch task failed: {}", e),
        }
    }
    type_names
}

/// Fetch and save a single Pokemon record, returning its type names.
async fn fetch_and_save_pokemon(
    client: &reqwest::Client,
    pokemon_id: u32,
    pokemon_dir: &Path,
) -> Result<Vec<String>, String> {
    let url = format!("{}/pokemon/{}/", api_base(), pokemon_id);
    let data = fetch_json(client, &url)
        .await
        .map_err(|e| format!("Error fetching Pokemon #{}: {}", pokemon_id, e))?;

    let pokemon = parse_pokemon(&data)
        .ok_or_else(|| format!("Error parsing Pokemon #{}: malformed payload", pokemon_id))?;

    let file_path = pokemon_dir.join(format!("{:03}-{}.ron", pokemon.id, pokemon.name));
    let types = pokemon.types.clone();
    write_ron(&file_path, &pokemon)
        .await
        .map_err(|e| format!("Error saving Pokemon #{}: {}", pokemon_id, e))?;

    Ok(types)
}

/// Fetch and save the damage relations for every referenced type.
async fn populate_type_details(
    client: &reqwest::Client,
    semaphore: &Arc<Semaphore>,
    data_path: &Path,
    type_names: BTreeSet<String>,
) {
    let mut tasks = JoinSet::new();

    for type_name in type_names {
        let client = client.clone();
        let semaphore = semaphore.clone();
        let types_dir = data_path.join("types");

        tasks.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| e.to_string())?;
            fetch_and_save_type(&client, &type_name, &types_dir).await
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("{}", e),
            Err(e) => warn!("Fetch task failed: {}", e),
        }
    }
}

async fn fetch_and_save_type(
    client: &reqwest::Client,
    type_name: &str,
    types_dir: &Path,
) -> Result<(), String> {
    let url = format!("{}/type/{}/", api_base(), type_name);
    let data = fetch_json(client, &url)
        .await
        .map_err(|e| format!("Error fetching type {}: {}", type_name, e))?;

    let record = TypeData {
        name: type_name.to_string(),
        damage_relations: DamageRelations {
            double_damage_to: relation_names(&data, "double_damage_to"),
            half_damage_to: relation_names(&data, "half_damage_to"),
            no_damage_to: relation_names(&data, "no_damage_to"),
        },
    };

    let file_path = types_dir.join(format!("{}.ron", type_name));
    write_ron(&file_path, &record)
        .await
        .map_err(|e| format!("Error saving type {}: {}", type_name, e))
}

async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<Value, String> {
    let response = client.get(url).send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

/// Map a PokeAPI pokemon payload to a catalog record. `total` is the sum of
/// the fetched base stats, matching what the service trusts at read time.
fn parse_pokemon(data: &Value) -> Option<Pokemon> {
    let id = data["id"].as_u64()? as u32;
    let name = data["name"].as_str()?.to_string();

    let mut stats = BaseStats::default();
    let mut total = 0;
    if let Some(entries) = data["stats"].as_array() {
        for entry in entries {
            let base_value = entry["base_stat"].as_u64().unwrap_or(0) as u32;
            let field = match entry["stat"]["name"].as_str().unwrap_or("") {
                "hp" => &mut stats.hp,
                "attack" => &mut stats.attack,
                "defense" => &mut stats.defense,
                "special-attack" => &mut stats.special_attack,
                "special-defense" => &mut stats.special_defense,
                "speed" => &mut stats.speed,
                _ => continue,
            };
            *field = Some(base_value);
            total += base_value;
        }
    }
    stats.total = Some(total);

    let types = data["types"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|t| t["type"]["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let abilities = data["abilities"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|a| {
                    a["ability"]["name"].as_str().map(|name| Ability {
                        name: name.to_string(),
                        is_hidden: a["is_hidden"].as_bool().unwrap_or(false),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Some(Pokemon {
        id,
        name,
        height: data["height"].as_u64().map(|v| v as u32),
        weight: data["weight"].as_u64().map(|v| v as u32),
        image_url: data["sprites"]["front_default"].as_str().map(str::to_string),
        types,
        abilities,
        stats: Some(stats),
    })
}

/// Extract the names from one damage-relation list of a type payload.
fn relation_names(data: &Value, relation: &str) -> Vec<String> {
    data["damage_relations"][relation]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

async fn write_ron<T: serde::Serialize>(path: &Path, record: &T) -> Result<(), String> {
    let content =
        ron::ser::to_string_pretty(record, PrettyConfig::new()).map_err(|e| e.to_string())?;
    tokio::fs::write(path, content).await.map_err(|e| e.to_string())
}
