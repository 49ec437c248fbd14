//! Connections command - gateway's node connection list

use anyhow::Result;
use gateway_client::GatewayClient;

use crate::output::OutputContext;

/// Show which node connections the gateway has set up
pub async fn connections(client: &GatewayClient, ctx: &OutputContext) -> Result<()> {
    let response = client.connections_list().await?;
    ctx.body(&response.body);
    Ok(())
}
