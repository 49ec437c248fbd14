//! Probe definitions and the canonical smoke suite
//!
//! A probe is one configured GET request: a path under the gateway origin
//! and a set of query parameters, both fixed at build time. The smoke
//! suite is the ordered sequence of probes that walks the whole endpoint
//! surface of the gateway with known example arguments.

use serde::Serialize;

/// Example validator used by the session-scoped queries
const EXAMPLE_VALIDATOR: &str = "DNDBcYD8zzqAoZEtgNzouVp2sVxsvqzD4UdB5WrAUwjqpL8";
/// Example account for the slash-amount query
const EXAMPLE_SLASH_ACCOUNT: &str = "HsGrsqL4nCBCW2ovc4kKG98c4mFp99BHRFkBSRZW1ETDe3U";
/// A known block header hash
const EXAMPLE_HEADER_HASH: &str =
    "0xdd661348a4971e0cf75d89da69de01907e81070cb8099dddc12b611c18371679";
/// A known block hash with events and a slashing record
const EXAMPLE_EVENTS_BLOCK: &str =
    "0x1511c16054f1beaa4995cf8c637d6450f1a77acfa40f9f3f51579bba2b92a6c7";
/// A websocket identifier no gateway connection exists for; exercises the
/// gateway's unknown-connection error body
const UNKNOWN_WEBSOCKET: &str = "ws://2.3.4.5:9944";

/// One configured HTTP request in a probe sequence
///
/// Parameters are plain string pairs; values reach the wire exactly as
/// written here, with nothing but standard percent-encoding applied.
#[derive(Debug, Clone, Serialize)]
pub struct Probe {
    /// Name printed before the response body
    pub label: String,
    /// URL path appended to the gateway origin
    pub path: String,
    /// Query parameters, order preserved for readability
    pub params: Vec<(String, String)>,
}

impl Probe {
    /// Create a probe for `path`, labeled with the path itself
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            label: path.clone(),
            path,
            params: Vec::new(),
        }
    }

    /// Attach one query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

/// A titled group of probes, executed in declaration order
#[derive(Debug, Clone, Serialize)]
pub struct ProbeSection {
    pub title: String,
    pub probes: Vec<Probe>,
}

impl ProbeSection {
    pub fn new(title: impl Into<String>, probes: Vec<Probe>) -> Self {
        Self {
            title: title.into(),
            probes,
        }
    }
}

/// Build the canonical smoke suite against a node connection.
///
/// Every endpoint group the gateway exposes is visited once, in a fixed
/// order, with example arguments where an endpoint takes any. Endpoints
/// with an optional argument are probed twice, without and with it. The
/// final section asks for a websocket the gateway has no connection for,
/// so the run ends with the gateway's error body on display.
pub fn smoke_suite(websocket: &str) -> Vec<ProbeSection> {
    let ws = |path: &str| Probe::new(path).param("websocket", websocket);

    vec![
        ProbeSection::new(
            "Miscellaneous Endpoints",
            vec![
                Probe::new("/api/pingApi"),
                ws("/api/pingNode"),
                Probe::new("/api/getConnectionsList"),
            ],
        ),
        ProbeSection::new(
            "Chain",
            vec![
                ws("/api/rpc/chain/getBlockHash"),
                ws("/api/rpc/chain/getBlockHash").param("block_number", "36430"),
                ws("/api/rpc/chain/getFinalizedHead"),
                ws("/api/rpc/chain/getHeader"),
                ws("/api/rpc/chain/getHeader").param("hash", EXAMPLE_HEADER_HASH),
            ],
        ),
        ProbeSection::new("RPC", vec![ws("/api/rpc/rpc/methods")]),
        ProbeSection::new(
            "System",
            vec![
                ws("/api/rpc/system/chain"),
                ws("/api/rpc/system/health"),
                ws("/api/rpc/system/networkState"),
                ws("/api/rpc/system/properties"),
            ],
        ),
        ProbeSection::new(
            "Balances",
            vec![ws("/api/query/balances/totalIssuance")],
        ),
        ProbeSection::new(
            "Council",
            vec![
                ws("/api/query/council/members"),
                ws("/api/query/council/proposalCount"),
                ws("/api/query/council/proposalOf").param("hash", "boq"),
                ws("/api/query/council/proposals"),
            ],
        ),
        ProbeSection::new(
            "Democracy",
            vec![
                ws("/api/query/democracy/publicPropCount"),
                ws("/api/query/democracy/referendumCount"),
                ws("/api/query/democracy/referendumInfoOf").param("referendum_index", "43"),
            ],
        ),
        ProbeSection::new(
            "ImOnline",
            vec![
                ws("/api/query/imOnline/authoredBlocks")
                    .param("session_index", "3")
                    .param("validator_id", EXAMPLE_VALIDATOR),
                ws("/api/query/imOnline/receivedHeartbeats")
                    .param("session_index", "3")
                    .param("auth_index", "0"),
            ],
        ),
        ProbeSection::new(
            "Session",
            vec![
                ws("/api/query/session/currentIndex"),
                ws("/api/query/session/disabledValidators"),
                ws("/api/query/session/validators"),
            ],
        ),
        ProbeSection::new(
            "Staking",
            vec![
                ws("/api/query/staking/activeEra"),
                ws("/api/query/staking/erasRewardPoints"),
                ws("/api/query/staking/erasRewardPoints").param("era_index", "630"),
                ws("/api/query/staking/erasStakers").param("account_id", EXAMPLE_VALIDATOR),
                ws("/api/query/staking/erasStakers")
                    .param("account_id", EXAMPLE_VALIDATOR)
                    .param("era_index", "630"),
                ws("/api/query/staking/erasTotalStake"),
                ws("/api/query/staking/erasTotalStake").param("era_index", "630"),
                ws("/api/query/staking/erasValidatorReward"),
                ws("/api/query/staking/erasValidatorReward").param("era_index", "840"),
            ],
        ),
        ProbeSection::new(
            "Events",
            vec![
                ws("/api/query/system/events"),
                ws("/api/query/system/events").param("block_hash", EXAMPLE_EVENTS_BLOCK),
            ],
        ),
        ProbeSection::new(
            "Custom",
            vec![
                ws("/api/custom/getSlashAmount").param("account_address", EXAMPLE_SLASH_ACCOUNT),
                ws("/api/custom/getSlashAmount")
                    .param("block_hash", EXAMPLE_EVENTS_BLOCK)
                    .param("account_address", EXAMPLE_SLASH_ACCOUNT),
            ],
        ),
        ProbeSection::new("Derive", vec![ws("/api/derive/staking/validators")]),
        ProbeSection::new("Misc", vec![ws("/api/query/session/validators")]),
        ProbeSection::new(
            "Invalid IP",
            vec![Probe::new("/api/query/session/validators")
                .param("websocket", UNKNOWN_WEBSOCKET)],
        ),
    ]
}
