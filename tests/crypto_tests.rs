//! Unit tests for node key cryptography
//!
//! These tests verify ed25519 key generation, import and node ID derivation.

use std::str::FromStr;

use ed25519_dalek::SigningKey;
use tendermint_nodekey::crypto::{KeyEncoding, NodeId, NodeKey};
use tendermint_nodekey::error::NodeKeyError;

#[path = "mod.rs"]
mod test_helpers;
use test_helpers::{
    decode_base64, expected_node_id, rfc8032_node_key, RFC8032_NODE_ID, RFC8032_PUBLIC_KEY_HEX,
    RFC8032_SEED_B64, RFC8032_SEED_HEX,
};

/// Test that generated keys have 32-byte private and public halves
/// Why: ed25519 keys are fixed size; anything else means a broken encoding
#[test]
fn test_generated_key_lengths() {
    let node_key = NodeKey::generate();

    assert_eq!(node_key.private_key_bytes(KeyEncoding::Seed).len(), 32);
    assert_eq!(node_key.public_key_bytes().len(), 32);
}

/// Test that every generated key is different
/// Why: Two nodes sharing a key would share a node ID and collide on the network
#[test]
fn test_unique_key_generation() {
    let key1 = NodeKey::generate();
    let key2 = NodeKey::generate();

    assert_ne!(
        key1.private_key_bytes(KeyEncoding::Seed).as_slice(),
        key2.private_key_bytes(KeyEncoding::Seed).as_slice()
    );
    assert_ne!(key1.node_id(), key2.node_id());
}

/// Test that the public key is the ed25519 counterpart of the private key
/// Why: The node ID is only meaningful if it belongs to the key the node signs with
#[test]
fn test_public_key_matches_private_key() {
    let node_key = NodeKey::generate();
    let seed: [u8; 32] = node_key
        .private_key_bytes(KeyEncoding::Seed)
        .as_slice()
        .try_into()
        .unwrap();

    let reference = SigningKey::from_bytes(&seed).verifying_key();
    assert_eq!(node_key.public_key_bytes(), reference.to_bytes());
}

/// Test the RFC 8032 known answer
/// Why: Pins the key derivation and address hash against an external reference
#[test]
fn test_rfc8032_known_answer() {
    let node_key = rfc8032_node_key();

    assert_eq!(hex::encode(node_key.public_key_bytes()), RFC8032_PUBLIC_KEY_HEX);
    assert_eq!(node_key.node_id().to_string(), RFC8032_NODE_ID);
    assert_eq!(node_key.private_key_base64(KeyEncoding::Seed), RFC8032_SEED_B64);
}

/// Test that the node ID is the first 20 bytes of sha256(public key) in lowercase hex
/// Why: Peers address each other by this value; any other convention breaks interop
#[test]
fn test_node_id_derivation() {
    let node_key = NodeKey::generate();
    let node_id = node_key.node_id().to_string();

    assert_eq!(node_id, expected_node_id(&node_key.public_key_bytes()));
    assert_eq!(node_id.len(), 40);
    assert!(node_id
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert!(!node_id.starts_with("0x"));
}

/// Test that the node ID depends only on the public key
/// Why: Anyone holding the public key must be able to reproduce the ID
#[test]
fn test_node_id_from_public_key_bytes() {
    let node_key = rfc8032_node_key();
    let from_bytes = NodeId::from_public_key_bytes(&node_key.public_key_bytes());

    assert_eq!(from_bytes, node_key.node_id());
}

/// Test that node IDs parse from hex and normalize to lowercase
/// Why: Node IDs arrive from config files written by hand
#[test]
fn test_node_id_parse() {
    let parsed = NodeId::from_str(RFC8032_NODE_ID).unwrap();
    assert_eq!(parsed, rfc8032_node_key().node_id());

    let upper = NodeId::from_str(&RFC8032_NODE_ID.to_uppercase()).unwrap();
    assert_eq!(upper.to_string(), RFC8032_NODE_ID);
}

/// Test that malformed node IDs are rejected
/// Why: A prefixed or truncated ID would silently point at no peer
#[test]
fn test_node_id_parse_rejects_invalid() {
    let prefixed = format!("0x{}", RFC8032_NODE_ID);
    assert!(matches!(
        NodeId::from_str(&prefixed),
        Err(NodeKeyError::InvalidNodeId(_))
    ));
    assert!(matches!(
        NodeId::from_str(&RFC8032_NODE_ID[..38]),
        Err(NodeKeyError::InvalidNodeId(_))
    ));
    assert!(matches!(
        NodeId::from_str("zz".repeat(20).as_str()),
        Err(NodeKeyError::InvalidNodeId(_))
    ));
}

/// Test that a base64 seed round-trips to the same key
/// Why: node_key must decode to exactly the private key that produced node_id
#[test]
fn test_base64_seed_round_trip() {
    let node_key = NodeKey::generate();
    let encoded = node_key.private_key_base64(KeyEncoding::Seed);

    assert_eq!(
        decode_base64(&encoded),
        node_key.private_key_bytes(KeyEncoding::Seed).to_vec()
    );

    let imported = NodeKey::from_base64(&encoded).unwrap();
    assert_eq!(imported.node_id(), node_key.node_id());
}

/// Test the expanded 64-byte layout
/// Why: Tendermint nodes store seed || public key; the tail must be the public key
#[test]
fn test_expanded_encoding_layout() {
    let node_key = rfc8032_node_key();
    let expanded = node_key.private_key_bytes(KeyEncoding::Expanded);

    assert_eq!(expanded.len(), KeyEncoding::Expanded.byte_len());
    assert_eq!(hex::encode(&expanded[..32]), RFC8032_SEED_HEX);
    assert_eq!(hex::encode(&expanded[32..]), RFC8032_PUBLIC_KEY_HEX);

    let imported = NodeKey::from_bytes(&expanded).unwrap();
    assert_eq!(imported.node_id(), node_key.node_id());
}

/// Test that an expanded key with a foreign public half is rejected
/// Why: Loading such a key would advertise an ID the node cannot sign for
#[test]
fn test_expanded_key_mismatch_rejected() {
    let node_key = rfc8032_node_key();
    let other = NodeKey::generate();

    let mut tampered = node_key.private_key_bytes(KeyEncoding::Seed).to_vec();
    tampered.extend_from_slice(&other.public_key_bytes());

    assert!(matches!(
        NodeKey::from_bytes(&tampered),
        Err(NodeKeyError::KeyPairMismatch)
    ));
}

/// Test that keys of the wrong size are rejected
/// Why: Only 32 and 64 byte keys are valid ed25519 node keys
#[test]
fn test_invalid_key_length_rejected() {
    assert!(matches!(
        NodeKey::from_bytes(&[0u8; 31]),
        Err(NodeKeyError::InvalidKeyLength(31))
    ));
    assert!(matches!(
        NodeKey::from_bytes(&[]),
        Err(NodeKeyError::InvalidKeyLength(0))
    ));
    assert!(matches!(
        NodeKey::from_base64("not base64!"),
        Err(NodeKeyError::InvalidBase64(_))
    ));
}

/// Test that Debug output never contains key material
/// Why: Keys must not leak through logs or panic messages
#[test]
fn test_debug_redacts_private_key() {
    let node_key = rfc8032_node_key();
    let debug = format!("{:?}", node_key);

    assert!(debug.contains(RFC8032_NODE_ID));
    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains(RFC8032_SEED_B64));
    assert!(!debug.contains(RFC8032_SEED_HEX));
}
