//! Tendermint Node Key Library
//!
//! This crate generates ed25519 node keys for Tendermint-based chains and exposes
//! the three values a node operator needs: the node ID, the raw private key
//! (base64) and the `node_key.json` envelope a node loads at startup.
//!
//! ## Security Requirements
//!
//! **CRITICAL**: `node_key` and `node_key_json` are secrets. Callers must never log
//! them and should drop them as soon as they are persisted.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod generator;
pub mod resource;

// Re-export commonly used types
pub use config::{Config, NodeKeyConfig};
pub use crypto::{KeyEncoding, NodeId, NodeKey};
pub use envelope::{write_node_key_file, NodeKeyJson, PrivKeyJson, PRIV_KEY_ED25519_TYPE};
pub use error::NodeKeyError;
pub use generator::{GeneratedNodeKey, NodeKeyGenerator};
pub use resource::{NodeKeyResource, ReadOutcome, ResourceSchema, ResourceState};
