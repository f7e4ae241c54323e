//! Test module organization
//!
//! This module re-exports test helpers for use in test files.

mod helpers;

#[allow(unused_imports)]
pub use helpers::{
    build_test_config, decode_base64, expected_node_id, rfc8032_node_key, RFC8032_NODE_ID,
    RFC8032_PUBLIC_KEY_HEX, RFC8032_SEED_B64, RFC8032_SEED_HEX,
};
