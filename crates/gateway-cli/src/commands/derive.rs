//! Validators command - derived staking overview

use anyhow::Result;
use gateway_client::GatewayClient;

use crate::output::OutputContext;

/// Show the derived staking overview of the current validators
pub async fn validators(client: &GatewayClient, ctx: &OutputContext) -> Result<()> {
    let response = client.derive_staking_validators().await?;
    ctx.body(&response.body);
    Ok(())
}
