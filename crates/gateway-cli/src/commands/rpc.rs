//! RPC methods command

use anyhow::Result;
use gateway_client::GatewayClient;

use crate::output::OutputContext;

/// List the methods the node RPC exposes
pub async fn rpc_methods(client: &GatewayClient, ctx: &OutputContext) -> Result<()> {
    let response = client.rpc_methods().await?;
    ctx.body(&response.body);
    Ok(())
}
