//! Command-line front end for the organization lookup.
//!
//! # Usage
//!
//! ```bash
//! # Check whether the registry is reachable
//! org-lookup ping
//!
//! # Resolve a name through the registry (falls back to the local store)
//! org-lookup search "example college"
//!
//! # Query only the local store
//! org-lookup local example
//!
//! # Show the effective configuration
//! org-lookup config
//! ```
//!
//! # Environment Variables
//!
//! See [`org_lookup::config`]. `APP_NAME` and `APP_EMAIL` are required; a
//! `.env` file in the working directory is loaded first.

use org_lookup::application::services::RegistryService;
use org_lookup::config::{self, Config};
use org_lookup::domain::entities::OrgMatches;
use org_lookup::infrastructure::http::{RegistryHttpClient, ReqwestTransport};
use org_lookup::infrastructure::persistence::MemoryOrgRepository;
use org_lookup::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// Resolve organization names against the registry.
#[derive(Parser)]
#[command(name = "org-lookup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the registry heartbeat
    Ping,

    /// Search the registry, falling back to the local store
    Search {
        /// Organization name (or part of it)
        name: String,
    },

    /// Search only the local store
    Local {
        /// Organization name (or part of it); lists everything when omitted
        name: Option<String>,
    },

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init(&config.log_level, &config.log_format);

    if let Commands::Config = cli.command {
        config.print_summary();
        return Ok(());
    }

    let service = build_service(&config)?;

    match cli.command {
        Commands::Ping => handle_ping(&service).await,
        Commands::Search { name } => {
            let matches = service.search(&name).await;
            print_matches(&name, &matches, cli.json)?;
        }
        Commands::Local { name } => {
            let name = name.unwrap_or_default();
            let matches = service.local_search(&name).await;
            print_matches(&name, &matches, cli.json)?;
        }
        Commands::Config => {}
    }

    Ok(())
}

/// Wires the reqwest transport and the local store into a search service.
fn build_service(config: &Config) -> Result<RegistryService<MemoryOrgRepository>> {
    let registry = Arc::new(config.registry.clone());
    let transport =
        ReqwestTransport::from_config(&registry).context("Failed to create HTTP transport")?;
    let client = RegistryHttpClient::new(registry, Arc::new(transport));

    let repository = match config.local_orgs_path {
        Some(ref path) => MemoryOrgRepository::from_json_file(path)
            .with_context(|| format!("Failed to load local organizations from {}", path.display()))?,
        None => MemoryOrgRepository::default(),
    };
    tracing::debug!(orgs = repository.len(), "Local organization store ready");

    Ok(RegistryService::new(client, Arc::new(repository)))
}

async fn handle_ping(service: &RegistryService<MemoryOrgRepository>) {
    if service.ping().await {
        println!("{}", "✅ Registry is up".green().bold());
    } else {
        println!("{}", "❌ Registry is unavailable".red().bold());
    }
}

/// Prints search results, labelled by the source that produced them.
///
/// # Output Format
///
/// ```text
/// 🔎 Results for "example" (registry)
///
///   Example University (example.edu)    https://ror.org/1234567890
///   Universidade de Example (Mexico)    https://ror.org/0987654321
///
///   Total: 2
/// ```
fn print_matches(name: &str, matches: &OrgMatches, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(matches)?);
        return Ok(());
    }

    let source = if matches.is_local() {
        "local fallback".yellow()
    } else {
        "registry".green()
    };
    println!(
        "{} {} ({})",
        "🔎 Results for".bright_blue().bold(),
        format!("\"{name}\"").cyan(),
        source
    );
    println!();

    if matches.is_empty() {
        println!("{}", "  No organizations found".yellow());
        return Ok(());
    }

    match matches {
        OrgMatches::Registry(results) => {
            for result in results {
                println!("  {:<50} {}", result.name.cyan(), result.id.bright_black());
            }
        }
        OrgMatches::Local(orgs) => {
            for org in orgs {
                println!("  {:<50} {}", org.name.cyan(), org.abbreviation.bright_black());
            }
        }
    }

    println!();
    println!(
        "  Total: {}",
        matches.len().to_string().bright_white().bold()
    );

    Ok(())
}
