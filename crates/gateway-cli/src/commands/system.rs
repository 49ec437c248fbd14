//! System command - system RPC queries

use anyhow::Result;
use clap::ValueEnum;
use gateway_client::GatewayClient;

use crate::output::OutputContext;

/// System RPC values the gateway exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SystemPart {
    /// Chain name
    Chain,
    /// Node health (peers, syncing)
    Health,
    /// Current network state
    NetworkState,
    /// Chain properties (token, decimals, address format)
    Properties,
}

/// Fetch one system RPC value and print the raw answer
pub async fn system(client: &GatewayClient, part: SystemPart, ctx: &OutputContext) -> Result<()> {
    let response = match part {
        SystemPart::Chain => client.system_chain().await?,
        SystemPart::Health => client.system_health().await?,
        SystemPart::NetworkState => client.system_network_state().await?,
        SystemPart::Properties => client.system_properties().await?,
    };

    ctx.body(&response.body);
    Ok(())
}
