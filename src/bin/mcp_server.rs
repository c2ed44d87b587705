//! Pokedex MCP Server
//!
//! A Model Context Protocol server that exposes the Pokedex catalog and its
//! analysis endpoints (stat comparison, team synergy) for LLM interaction.

use std::borrow::Cow;
use std::future::Future;
use std::path::PathBuf;

use log::info;
use pokedex_service::analysis::effectiveness::TypeChart;
use pokedex_service::mcp_interface::*;
use pokedex_service::initialize_catalog;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};

#[derive(Debug, Clone)]
pub struct PokedexService {
    tool_router: ToolRouter<PokedexService>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListPokemonRequest {
    #[schemars(description = "Name fragment to filter by (case-insensitive)")]
    pub name: Option<String>,
    #[schemars(description = "Exact type name to filter by (e.g. 'fire')")]
    pub type_name: Option<String>,
    #[schemars(description = "Exact ability name to filter by")]
    pub ability: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupPokemonRequest {
    #[schemars(description = "Pokemon id or name to look up")]
    pub identifier: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComparePokemonRequest {
    #[schemars(description = "First Pokemon id or name")]
    pub first: String,
    #[schemars(description = "Second Pokemon id or name")]
    pub second: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTeamRequest {
    #[schemars(description = "Exactly six Pokemon ids or names")]
    pub members: Vec<String>,
}

#[tool_router]
impl PokedexService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "List catalog Pokemon, optionally filtered by name, type, or ability")]
    async fn list_pokemon(
        &self,
        Parameters(request): Parameters<ListPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = handle_list_command(
            request.name.as_deref(),
            request.type_name.as_deref(),
            request.ability.as_deref(),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Look up detailed information about a Pokemon by id or name")]
    async fn lookup_pokemon(
        &self,
        Parameters(request): Parameters<LookupPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = handle_lookup_command(&request.identifier);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Compare two Pokemon stat by stat, with role classification")]
    async fn compare_pokemon(
        &self,
        Parameters(request): Parameters<ComparePokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        match handle_compare_command(&request.first, &request.second) {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => Err(McpError {
                code: ErrorCode(-32603),
                message: Cow::from(format!("Error comparing Pokemon: {}", e)),
                data: None,
            }),
        }
    }

    #[tool(description = "Analyze the type synergy of a team of exactly six Pokemon")]
    async fn analyze_team(
        &self,
        Parameters(request): Parameters<AnalyzeTeamRequest>,
    ) -> Result<CallToolResult, McpError> {
        match handle_team_synergy_command(&request.members) {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => Err(McpError {
                code: ErrorCode(-32603),
                message: Cow::from(format!("Error analyzing team: {}", e)),
                data: None,
            }),
        }
    }
}

#[tool_handler]
impl ServerHandler for PokedexService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let data_path = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "data".to_string()));
    initialize_catalog(&data_path)?;

    // Publish the effectiveness chart before accepting requests
    let chart = TypeChart::global();
    info!(
        "Pokedex MCP server starting: {} types in the effectiveness chart",
        chart.type_names().len()
    );

    let service = PokedexService::new();
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    let quit_reason = server.waiting().await?;

    info!("Pokedex MCP server exiting: {:?}", quit_reason);
    Ok(())
}
