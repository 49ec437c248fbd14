//! Ping command - gateway and node reachability

use anyhow::Result;
use gateway_client::GatewayClient;

use crate::output::OutputContext;

/// Ping the gateway itself, then the node behind the configured websocket
pub async fn ping(client: &GatewayClient, ctx: &OutputContext) -> Result<()> {
    ctx.label("/api/pingApi");
    let api = client.ping_api().await?;
    ctx.body(&api.body);

    ctx.label("/api/pingNode");
    let node = client.ping_node().await?;
    ctx.body(&node.body);

    Ok(())
}
