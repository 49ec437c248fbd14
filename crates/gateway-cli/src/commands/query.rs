//! Query command - chain-state storage queries

use anyhow::Result;
use clap::Subcommand;
use gateway_client::GatewayClient;

use crate::output::OutputContext;

/// Storage items the gateway can read, grouped the way the chain's
/// pallets group them.
#[derive(Subcommand)]
pub enum StorageQuery {
    /// Total units issued on the chain
    TotalIssuance,

    /// Current council members
    CouncilMembers,

    /// Number of council proposals made so far
    ProposalCount,

    /// A council proposal by its hash
    ProposalOf {
        /// Proposal hash
        hash: String,
    },

    /// Hashes of the active council proposals
    Proposals,

    /// Number of public democracy proposals made so far
    PublicPropCount,

    /// Number of referenda started so far
    ReferendumCount,

    /// Information about a referendum by its index
    ReferendumInfoOf {
        /// Referendum index
        referendum_index: u32,
    },

    /// Blocks authored by a validator within a session
    AuthoredBlocks {
        /// Session index
        session_index: u32,
        /// Validator account
        validator_id: String,
    },

    /// Heartbeats received from an authority within a session
    ReceivedHeartbeats {
        /// Session index
        session_index: u32,
        /// Authority index within the session
        auth_index: u32,
    },

    /// Current session index
    CurrentIndex,

    /// Validators disabled in the current session
    DisabledValidators,

    /// Current session validator set
    Validators,

    /// The active staking era
    ActiveEra,

    /// Validator reward points, for the active era or a given one
    ErasRewardPoints {
        /// Era to look up
        #[arg(long)]
        era_index: Option<u32>,
    },

    /// Staker exposure of a validator
    ErasStakers {
        /// Validator account
        account_id: String,
        /// Era to look up
        #[arg(long)]
        era_index: Option<u32>,
    },

    /// Total staked amount, for the active era or a given one
    ErasTotalStake {
        /// Era to look up
        #[arg(long)]
        era_index: Option<u32>,
    },

    /// Total validator reward, for the active era or a given one
    ErasValidatorReward {
        /// Era to look up
        #[arg(long)]
        era_index: Option<u32>,
    },

    /// Events of the head block, or of a block by hash
    Events {
        /// Block hash to query at
        #[arg(long)]
        block_hash: Option<String>,
    },
}

/// Run one storage query and print the raw answer
pub async fn query(
    client: &GatewayClient,
    query: &StorageQuery,
    ctx: &OutputContext,
) -> Result<()> {
    let response = match query {
        StorageQuery::TotalIssuance => client.balances_total_issuance().await?,
        StorageQuery::CouncilMembers => client.council_members().await?,
        StorageQuery::ProposalCount => client.council_proposal_count().await?,
        StorageQuery::ProposalOf { hash } => client.council_proposal_of(hash).await?,
        StorageQuery::Proposals => client.council_proposals().await?,
        StorageQuery::PublicPropCount => client.democracy_public_prop_count().await?,
        StorageQuery::ReferendumCount => client.democracy_referendum_count().await?,
        StorageQuery::ReferendumInfoOf { referendum_index } => {
            client.democracy_referendum_info_of(*referendum_index).await?
        }
        StorageQuery::AuthoredBlocks {
            session_index,
            validator_id,
        } => {
            client
                .im_online_authored_blocks(*session_index, validator_id)
                .await?
        }
        StorageQuery::ReceivedHeartbeats {
            session_index,
            auth_index,
        } => {
            client
                .im_online_received_heartbeats(*session_index, *auth_index)
                .await?
        }
        StorageQuery::CurrentIndex => client.session_current_index().await?,
        StorageQuery::DisabledValidators => client.session_disabled_validators().await?,
        StorageQuery::Validators => client.session_validators().await?,
        StorageQuery::ActiveEra => client.staking_active_era().await?,
        StorageQuery::ErasRewardPoints { era_index } => {
            client.staking_eras_reward_points(*era_index).await?
        }
        StorageQuery::ErasStakers {
            account_id,
            era_index,
        } => client.staking_eras_stakers(account_id, *era_index).await?,
        StorageQuery::ErasTotalStake { era_index } => {
            client.staking_eras_total_stake(*era_index).await?
        }
        StorageQuery::ErasValidatorReward { era_index } => {
            client.staking_eras_validator_reward(*era_index).await?
        }
        StorageQuery::Events { block_hash } => client.system_events(block_hash.as_deref()).await?,
    };

    ctx.body(&response.body);
    Ok(())
}
