//! Chain command - chain RPC queries

use anyhow::Result;
use clap::Subcommand;
use gateway_client::GatewayClient;

use crate::output::OutputContext;

#[derive(Subcommand)]
pub enum ChainQuery {
    /// Hash of the head block, or of a numbered block
    BlockHash {
        /// Block number to look up
        #[arg(long)]
        block_number: Option<u64>,
    },

    /// Hash of the last finalized block
    FinalizedHead,

    /// Header of the head block, or of a block by hash
    Header {
        /// Block hash to look up
        #[arg(long)]
        hash: Option<String>,
    },
}

/// Run one chain RPC query and print the raw answer
pub async fn chain(client: &GatewayClient, query: &ChainQuery, ctx: &OutputContext) -> Result<()> {
    let response = match query {
        ChainQuery::BlockHash { block_number } => client.chain_block_hash(*block_number).await?,
        ChainQuery::FinalizedHead => client.chain_finalized_head().await?,
        ChainQuery::Header { hash } => client.chain_header(hash.as_deref()).await?,
    };

    ctx.body(&response.body);
    Ok(())
}
