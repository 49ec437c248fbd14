//! Gateway Client Library
//!
//! Typed HTTP client and probe runner for Substrate node API gateways.
//! The gateway fronts one or more node websocket connections and exposes
//! chain state over plain HTTP; this crate drives that surface either
//! endpoint by endpoint or as one ordered smoke suite.
//!
//! # Example
//!
//! ```rust,no_run
//! use gateway_client::GatewayClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GatewayClient::new("http://localhost:3000", "ws://1.2.3.4:9944")?;
//!
//!     // Ping the gateway and the node behind it
//!     let pong = client.ping_api().await?;
//!     println!("{}", pong.body);
//!
//!     // Ask for a block hash; the body is raw text whatever the status
//!     let hash = client.chain_block_hash(Some(36430)).await?;
//!     println!("{}", hash.body);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Smoke suite
//!
//! ```rust,no_run
//! use gateway_client::{runner, smoke_suite, GatewayClient};
//! use gateway_client::runner::RecordingSink;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GatewayClient::new("http://localhost:3000", "ws://1.2.3.4:9944")?;
//!     let suite = smoke_suite(client.websocket());
//!
//!     let mut sink = RecordingSink::default();
//!     let summary = runner::run(&client, &suite, &mut sink).await?;
//!     println!("{} probes answered", summary.probes);
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module provides utilities for integration testing:
//!
//! ```rust,ignore
//! use gateway_client::testing::TestServer;
//!
//! let server = TestServer::start(mock_gateway_router()).await?;
//! let pong = server.client.ping_api().await?;
//! ```

mod client;
mod error;
mod probe;
pub mod runner;
pub mod testing;

pub use client::{GatewayClient, GatewayResponse};
pub use error::{GatewayError, Result};
pub use probe::{smoke_suite, Probe, ProbeSection};

// Re-export the runner entry points for convenience
pub use runner::{run, ProbeSink, RunSummary};
