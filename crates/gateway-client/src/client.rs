//! Gateway HTTP client implementation

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use crate::error::Result;
use crate::probe::Probe;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A raw gateway response: the HTTP status and the body text.
///
/// Non-2xx statuses are deliberately represented here rather than as
/// errors. The gateway probes error paths on purpose (for example an
/// unknown websocket identifier) and the error body is the interesting
/// part of the answer.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub body: String,
}

impl GatewayResponse {
    /// Whether the gateway answered with a 2xx status
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP client for a Substrate node API gateway
///
/// Holds the gateway origin and the websocket identifier naming which
/// underlying node connection the gateway should use. Both are fixed for
/// the lifetime of the client.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: Url,
    websocket: String,
}

impl GatewayClient {
    /// Create a new gateway client
    ///
    /// # Arguments
    /// * `base_url` - Origin of the gateway (e.g., "http://localhost:3000")
    /// * `websocket` - Node connection identifier (e.g., "ws://1.2.3.4:9944")
    pub fn new(base_url: &str, websocket: &str) -> Result<Self> {
        Self::with_config(base_url, websocket, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new gateway client with custom timeouts
    pub fn with_config(
        base_url: &str,
        websocket: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self {
            client,
            base_url,
            websocket: websocket.to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the configured websocket identifier
    pub fn websocket(&self) -> &str {
        &self.websocket
    }

    /// Perform one configured probe: a single GET at `base_url + path`
    /// with the probe's parameters attached verbatim as the query string.
    #[instrument(skip(self), fields(path = %probe.path))]
    pub async fn probe(&self, probe: &Probe) -> Result<GatewayResponse> {
        let url = self.base_url.join(&probe.path)?;
        let response = self.client.get(url).query(&probe.params).send().await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, "probe answered");

        Ok(GatewayResponse { status, body })
    }

    // =========================================================================
    // Status Endpoints
    // =========================================================================

    /// Ping the gateway itself
    #[instrument(skip(self))]
    pub async fn ping_api(&self) -> Result<GatewayResponse> {
        self.get_text("/api/pingApi", &[]).await
    }

    /// Ping the node behind the configured websocket
    #[instrument(skip(self))]
    pub async fn ping_node(&self) -> Result<GatewayResponse> {
        self.get_text("/api/pingNode", &self.ws_params()).await
    }

    /// List the node connections the gateway has set up
    #[instrument(skip(self))]
    pub async fn connections_list(&self) -> Result<GatewayResponse> {
        self.get_text("/api/getConnectionsList", &[]).await
    }

    // =========================================================================
    // Chain RPC
    // =========================================================================

    /// Block hash of the head, or of `block_number` when given
    #[instrument(skip(self))]
    pub async fn chain_block_hash(&self, block_number: Option<u64>) -> Result<GatewayResponse> {
        let mut params = self.ws_params();
        if let Some(number) = block_number {
            params.push(("block_number", number.to_string()));
        }
        self.get_text("/api/rpc/chain/getBlockHash", &params).await
    }

    /// Hash of the last finalized block
    #[instrument(skip(self))]
    pub async fn chain_finalized_head(&self) -> Result<GatewayResponse> {
        self.get_text("/api/rpc/chain/getFinalizedHead", &self.ws_params())
            .await
    }

    /// Header of the head block, or of the block at `hash` when given
    #[instrument(skip(self))]
    pub async fn chain_header(&self, hash: Option<&str>) -> Result<GatewayResponse> {
        let mut params = self.ws_params();
        if let Some(hash) = hash {
            params.push(("hash", hash.to_string()));
        }
        self.get_text("/api/rpc/chain/getHeader", &params).await
    }

    // =========================================================================
    // RPC / System RPC
    // =========================================================================

    /// Methods the node RPC exposes
    #[instrument(skip(self))]
    pub async fn rpc_methods(&self) -> Result<GatewayResponse> {
        self.get_text("/api/rpc/rpc/methods", &self.ws_params()).await
    }

    /// Chain name
    #[instrument(skip(self))]
    pub async fn system_chain(&self) -> Result<GatewayResponse> {
        self.get_text("/api/rpc/system/chain", &self.ws_params()).await
    }

    /// Node health (peers, syncing)
    #[instrument(skip(self))]
    pub async fn system_health(&self) -> Result<GatewayResponse> {
        self.get_text("/api/rpc/system/health", &self.ws_params()).await
    }

    /// Current network state of the node
    #[instrument(skip(self))]
    pub async fn system_network_state(&self) -> Result<GatewayResponse> {
        self.get_text("/api/rpc/system/networkState", &self.ws_params())
            .await
    }

    /// Chain properties (token symbol, decimals, address format)
    #[instrument(skip(self))]
    pub async fn system_properties(&self) -> Result<GatewayResponse> {
        self.get_text("/api/rpc/system/properties", &self.ws_params())
            .await
    }

    // =========================================================================
    // Storage Queries - Balances
    // =========================================================================

    /// Total units issued on the chain
    #[instrument(skip(self))]
    pub async fn balances_total_issuance(&self) -> Result<GatewayResponse> {
        self.get_text("/api/query/balances/totalIssuance", &self.ws_params())
            .await
    }

    // =========================================================================
    // Storage Queries - Council
    // =========================================================================

    /// Current council members
    #[instrument(skip(self))]
    pub async fn council_members(&self) -> Result<GatewayResponse> {
        self.get_text("/api/query/council/members", &self.ws_params())
            .await
    }

    /// Number of proposals made so far
    #[instrument(skip(self))]
    pub async fn council_proposal_count(&self) -> Result<GatewayResponse> {
        self.get_text("/api/query/council/proposalCount", &self.ws_params())
            .await
    }

    /// A council proposal by its hash
    #[instrument(skip(self))]
    pub async fn council_proposal_of(&self, hash: &str) -> Result<GatewayResponse> {
        let mut params = self.ws_params();
        params.push(("hash", hash.to_string()));
        self.get_text("/api/query/council/proposalOf", &params).await
    }

    /// Hashes of the active council proposals
    #[instrument(skip(self))]
    pub async fn council_proposals(&self) -> Result<GatewayResponse> {
        self.get_text("/api/query/council/proposals", &self.ws_params())
            .await
    }

    // =========================================================================
    // Storage Queries - Democracy
    // =========================================================================

    /// Number of public proposals made so far
    #[instrument(skip(self))]
    pub async fn democracy_public_prop_count(&self) -> Result<GatewayResponse> {
        self.get_text("/api/query/democracy/publicPropCount", &self.ws_params())
            .await
    }

    /// Number of referenda started so far
    #[instrument(skip(self))]
    pub async fn democracy_referendum_count(&self) -> Result<GatewayResponse> {
        self.get_text("/api/query/democracy/referendumCount", &self.ws_params())
            .await
    }

    /// Information about a referendum by its index
    #[instrument(skip(self))]
    pub async fn democracy_referendum_info_of(
        &self,
        referendum_index: u32,
    ) -> Result<GatewayResponse> {
        let mut params = self.ws_params();
        params.push(("referendum_index", referendum_index.to_string()));
        self.get_text("/api/query/democracy/referendumInfoOf", &params)
            .await
    }

    // =========================================================================
    // Storage Queries - ImOnline
    // =========================================================================

    /// Blocks authored by a validator within a session
    #[instrument(skip(self))]
    pub async fn im_online_authored_blocks(
        &self,
        session_index: u32,
        validator_id: &str,
    ) -> Result<GatewayResponse> {
        let mut params = self.ws_params();
        params.push(("session_index", session_index.to_string()));
        params.push(("validator_id", validator_id.to_string()));
        self.get_text("/api/query/imOnline/authoredBlocks", &params)
            .await
    }

    /// Heartbeats received from an authority within a session
    #[instrument(skip(self))]
    pub async fn im_online_received_heartbeats(
        &self,
        session_index: u32,
        auth_index: u32,
    ) -> Result<GatewayResponse> {
        let mut params = self.ws_params();
        params.push(("session_index", session_index.to_string()));
        params.push(("auth_index", auth_index.to_string()));
        self.get_text("/api/query/imOnline/receivedHeartbeats", &params)
            .await
    }

    // =========================================================================
    // Storage Queries - Session
    // =========================================================================

    /// Current session index
    #[instrument(skip(self))]
    pub async fn session_current_index(&self) -> Result<GatewayResponse> {
        self.get_text("/api/query/session/currentIndex", &self.ws_params())
            .await
    }

    /// Validators disabled in the current session
    #[instrument(skip(self))]
    pub async fn session_disabled_validators(&self) -> Result<GatewayResponse> {
        self.get_text("/api/query/session/disabledValidators", &self.ws_params())
            .await
    }

    /// Current session validator set
    #[instrument(skip(self))]
    pub async fn session_validators(&self) -> Result<GatewayResponse> {
        self.get_text("/api/query/session/validators", &self.ws_params())
            .await
    }

    // =========================================================================
    // Storage Queries - Staking
    // =========================================================================

    /// The active staking era
    #[instrument(skip(self))]
    pub async fn staking_active_era(&self) -> Result<GatewayResponse> {
        self.get_text("/api/query/staking/activeEra", &self.ws_params())
            .await
    }

    /// Reward points of validators, for the active era or for `era_index`
    #[instrument(skip(self))]
    pub async fn staking_eras_reward_points(
        &self,
        era_index: Option<u32>,
    ) -> Result<GatewayResponse> {
        let params = self.era_params(era_index);
        self.get_text("/api/query/staking/erasRewardPoints", &params)
            .await
    }

    /// Staker exposure of a validator, for the active era or for `era_index`
    #[instrument(skip(self))]
    pub async fn staking_eras_stakers(
        &self,
        account_id: &str,
        era_index: Option<u32>,
    ) -> Result<GatewayResponse> {
        let mut params = self.ws_params();
        params.push(("account_id", account_id.to_string()));
        if let Some(era) = era_index {
            params.push(("era_index", era.to_string()));
        }
        self.get_text("/api/query/staking/erasStakers", &params).await
    }

    /// Total staked amount, for the active era or for `era_index`
    #[instrument(skip(self))]
    pub async fn staking_eras_total_stake(
        &self,
        era_index: Option<u32>,
    ) -> Result<GatewayResponse> {
        let params = self.era_params(era_index);
        self.get_text("/api/query/staking/erasTotalStake", &params)
            .await
    }

    /// Total validator reward, for the active era or for `era_index`
    #[instrument(skip(self))]
    pub async fn staking_eras_validator_reward(
        &self,
        era_index: Option<u32>,
    ) -> Result<GatewayResponse> {
        let params = self.era_params(era_index);
        self.get_text("/api/query/staking/erasValidatorReward", &params)
            .await
    }

    // =========================================================================
    // Storage Queries - System
    // =========================================================================

    /// Events of the head block, or of the block at `block_hash` when given
    #[instrument(skip(self))]
    pub async fn system_events(&self, block_hash: Option<&str>) -> Result<GatewayResponse> {
        let mut params = self.ws_params();
        if let Some(hash) = block_hash {
            params.push(("block_hash", hash.to_string()));
        }
        self.get_text("/api/query/system/events", &params).await
    }

    // =========================================================================
    // Custom / Derived Queries
    // =========================================================================

    /// Amount slashed from an account, at the head or at `block_hash`
    #[instrument(skip(self))]
    pub async fn slash_amount(
        &self,
        account_address: &str,
        block_hash: Option<&str>,
    ) -> Result<GatewayResponse> {
        let mut params = self.ws_params();
        if let Some(hash) = block_hash {
            params.push(("block_hash", hash.to_string()));
        }
        params.push(("account_address", account_address.to_string()));
        self.get_text("/api/custom/getSlashAmount", &params).await
    }

    /// Derived staking overview of the current validators
    #[instrument(skip(self))]
    pub async fn derive_staking_validators(&self) -> Result<GatewayResponse> {
        self.get_text("/api/derive/staking/validators", &self.ws_params())
            .await
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Issue a GET and hand back status and body text, whatever the status
    async fn get_text(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<GatewayResponse> {
        let url = self.base_url.join(path)?;
        debug!(%url, "GET");

        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(GatewayResponse { status, body })
    }

    /// Query parameters every node-bound endpoint starts from
    fn ws_params(&self) -> Vec<(&'static str, String)> {
        vec![("websocket", self.websocket.clone())]
    }

    /// Websocket plus an optional era index
    fn era_params(&self, era_index: Option<u32>) -> Vec<(&'static str, String)> {
        let mut params = self.ws_params();
        if let Some(era) = era_index {
            params.push(("era_index", era.to_string()));
        }
        params
    }
}
