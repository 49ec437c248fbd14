//! Slash-amount command - the gateway's custom derived query

use anyhow::Result;
use gateway_client::GatewayClient;

use crate::output::OutputContext;

/// Show the amount slashed from an account, at the head or at a block
pub async fn slash_amount(
    client: &GatewayClient,
    account: &str,
    block_hash: Option<&str>,
    ctx: &OutputContext,
) -> Result<()> {
    let response = client.slash_amount(account, block_hash).await?;
    ctx.body(&response.body);
    Ok(())
}
