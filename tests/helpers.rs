//! Shared test helpers
//!
//! This module provides helper functions used by the integration tests:
//! - **Known-answer constants**: RFC 8032 test vector 1 and its node ID
//! - **Configuration builders**: Functions to create test configurations
//! - **Independent derivations**: Node ID and base64 decoding done without the crate

#![allow(dead_code)]

use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};
use tendermint_nodekey::config::{Config, NodeKeyConfig};
use tendermint_nodekey::crypto::{KeyEncoding, NodeKey};

// ============================================================================
// CONSTANTS
// ============================================================================

/// RFC 8032 section 7.1, test 1: secret key
pub const RFC8032_SEED_HEX: &str =
    "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

/// RFC 8032 section 7.1, test 1: public key
pub const RFC8032_PUBLIC_KEY_HEX: &str =
    "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

/// Standard base64 of the RFC 8032 test 1 seed
pub const RFC8032_SEED_B64: &str = "nWGxne/9WmC6hEr0kuwsxERJxWl7MmkZcDusAxyuf2A=";

/// sha256(RFC8032_PUBLIC_KEY)[0:20] as lowercase hex
pub const RFC8032_NODE_ID: &str = "21fe31dfa154a261626bf854046fd2271b7bed4b";

// ============================================================================
// BUILDERS
// ============================================================================

/// Node key built from the RFC 8032 test 1 seed.
pub fn rfc8032_node_key() -> NodeKey {
    let seed: [u8; 32] = hex::decode(RFC8032_SEED_HEX)
        .unwrap()
        .try_into()
        .unwrap();
    NodeKey::from_seed(&seed)
}

/// Build a test configuration with the given encoding and no output file.
pub fn build_test_config(encoding: KeyEncoding) -> Config {
    Config {
        node_key: NodeKeyConfig {
            encoding,
            output_path: None,
        },
    }
}

// ============================================================================
// INDEPENDENT DERIVATIONS
// ============================================================================

/// Node ID computed directly from public key bytes: hex(sha256(pk)[0:20]).
pub fn expected_node_id(public_key: &[u8]) -> String {
    let hash = Sha256::digest(public_key);
    hex::encode(&hash[..20])
}

pub fn decode_base64(value: &str) -> Vec<u8> {
    general_purpose::STANDARD
        .decode(value)
        .expect("Should be valid standard base64")
}
