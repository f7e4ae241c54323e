//! Node ID derivation
//!
//! A Tendermint node ID is the address of the node's ed25519 public key:
//! the first 20 bytes of `sha256(public_key)`, rendered as lowercase hex.

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::VerifyingKey;
use sha2::{Digest, Sha256};

use crate::error::NodeKeyError;

/// Length of a node address in bytes.
pub const NODE_ID_LENGTH: usize = 20;

/// Address of a node's public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId([u8; NODE_ID_LENGTH]);

impl NodeId {
    /// Derives the node ID from an ed25519 public key.
    pub fn from_public_key(public_key: &VerifyingKey) -> Self {
        Self::from_public_key_bytes(public_key.as_bytes())
    }

    /// Derives the node ID from raw ed25519 public key bytes.
    ///
    /// Address derivation: sha256(public_key)[0:20]
    pub fn from_public_key_bytes(public_key: &[u8; 32]) -> Self {
        let hash = Sha256::digest(public_key);
        let mut address = [0u8; NODE_ID_LENGTH];
        address.copy_from_slice(&hash[..NODE_ID_LENGTH]);
        Self(address)
    }

    pub fn as_bytes(&self) -> &[u8; NODE_ID_LENGTH] {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for NodeId {
    type Err = NodeKeyError;

    /// Parses a node ID. Uppercase hex is accepted and normalized; a `0x`
    /// prefix is not, since node IDs never carry one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != NODE_ID_LENGTH * 2 {
            return Err(NodeKeyError::InvalidNodeId(s.to_string()));
        }

        let bytes = hex::decode(s).map_err(|_| NodeKeyError::InvalidNodeId(s.to_string()))?;
        let address: [u8; NODE_ID_LENGTH] = bytes
            .try_into()
            .map_err(|_| NodeKeyError::InvalidNodeId(s.to_string()))?;

        Ok(Self(address))
    }
}
