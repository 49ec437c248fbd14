//! Gateway CLI - probe tool for Substrate node API gateways
//!
//! Runs the canonical smoke suite against a gateway, or hits any single
//! endpoint, always printing the raw response body.

mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gateway_client::GatewayClient;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::commands::{ChainQuery, StorageQuery, SystemPart};
use crate::config::Config;
use crate::output::OutputContext;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(author, version, about = "Node API gateway probe CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Gateway URL
    #[arg(short, long, env = "GATEWAY_SERVER")]
    server: Option<String>,

    /// Node websocket identifier the gateway should query through
    #[arg(short, long, env = "GATEWAY_WEBSOCKET")]
    websocket: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimal output: response bodies only
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full smoke suite against the gateway
    Run {
        /// Print the probe sequence without issuing any requests
        #[arg(long)]
        list: bool,
    },

    /// Ping the gateway, then the node behind it
    Ping,

    /// List the gateway's node connections
    Connections,

    /// Chain RPC queries (block hashes, headers)
    Chain {
        #[command(subcommand)]
        query: ChainQuery,
    },

    /// List the methods the node RPC exposes
    RpcMethods,

    /// System RPC queries (chain name, health, network state, properties)
    System {
        /// Which system value to fetch
        #[arg(value_enum)]
        part: SystemPart,
    },

    /// Chain-state storage queries
    Query {
        #[command(subcommand)]
        query: StorageQuery,
    },

    /// Amount slashed from an account
    SlashAmount {
        /// Account address
        account: String,

        /// Block hash to query at
        #[arg(long)]
        block_hash: Option<String>,
    },

    /// Derived staking overview of the current validators
    Validators,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let merged = config.merge_with_args(
        cli.server.as_deref(),
        cli.websocket.as_deref(),
        cli.no_color,
    );

    // Create output context
    let ctx = OutputContext::new(merged.no_color, cli.quiet);

    tracing::debug!(server = %merged.server, websocket = %merged.websocket, "resolved configuration");

    let client = create_client(&merged.server, &merged.websocket)?;

    // Execute command
    match &cli.command {
        Commands::Run { list } => {
            commands::run(&client, *list, &ctx).await?;
        }

        Commands::Ping => {
            commands::ping(&client, &ctx).await?;
        }

        Commands::Connections => {
            commands::connections(&client, &ctx).await?;
        }

        Commands::Chain { query } => {
            commands::chain(&client, query, &ctx).await?;
        }

        Commands::RpcMethods => {
            commands::rpc_methods(&client, &ctx).await?;
        }

        Commands::System { part } => {
            commands::system(&client, *part, &ctx).await?;
        }

        Commands::Query { query } => {
            commands::query(&client, query, &ctx).await?;
        }

        Commands::SlashAmount {
            account,
            block_hash,
        } => {
            commands::slash_amount(&client, account, block_hash.as_deref(), &ctx).await?;
        }

        Commands::Validators => {
            commands::validators(&client, &ctx).await?;
        }
    }

    Ok(())
}

/// Create a gateway client for the given server URL and websocket
fn create_client(server: &str, websocket: &str) -> Result<GatewayClient> {
    GatewayClient::new(server, websocket).context("Failed to create gateway client")
}
