//! Command implementations for gateway-cli

pub mod chain;
pub mod connections;
pub mod custom;
pub mod derive;
pub mod ping;
pub mod query;
pub mod rpc;
pub mod run;
pub mod system;

pub use chain::{chain, ChainQuery};
pub use connections::connections;
pub use custom::slash_amount;
pub use derive::validators;
pub use ping::ping;
pub use query::{query, StorageQuery};
pub use rpc::rpc_methods;
pub use run::run;
pub use system::{system, SystemPart};
