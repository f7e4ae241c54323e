//! Cryptographic Operations Module
//!
//! This module handles the node key itself: ed25519 key generation from the OS
//! random source, import of existing keys, raw-key encodings and derivation of
//! the node ID from the public key.
//!
//! ## Security Requirements
//!
//! **CRITICAL**: Keys must only be generated from a secure random source and
//! private key bytes must never be logged. The signing key is zeroized on drop.

pub mod node_id;

use base64::{engine::general_purpose, Engine as _};
use ed25519_dalek::{SigningKey, VerifyingKey, KEYPAIR_LENGTH, SECRET_KEY_LENGTH};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{NodeKeyError, Result};

pub use node_id::{NodeId, NODE_ID_LENGTH};

// ============================================================================
// KEY ENCODING
// ============================================================================

/// Byte layout used when the private key is exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEncoding {
    /// The 32-byte ed25519 secret seed
    #[default]
    Seed,
    /// The 64-byte `seed || public_key` layout Tendermint nodes store
    Expanded,
}

impl KeyEncoding {
    /// Number of raw bytes an encoded key occupies.
    pub fn byte_len(&self) -> usize {
        match self {
            KeyEncoding::Seed => SECRET_KEY_LENGTH,
            KeyEncoding::Expanded => KEYPAIR_LENGTH,
        }
    }
}

// ============================================================================
// NODE KEY
// ============================================================================

/// An ed25519 node keypair.
///
/// The public key is always derived from the private key, so the two can never
/// disagree.
pub struct NodeKey {
    /// Private key (zeroized on drop by ed25519-dalek)
    signing_key: SigningKey,
    /// Public key derived from `signing_key`
    verifying_key: VerifyingKey,
}

impl NodeKey {
    /// Generates a fresh node key from the operating system's CSPRNG.
    pub fn generate() -> Self {
        let mut rng = rand::rngs::OsRng;
        let mut secret_key_bytes = [0u8; SECRET_KEY_LENGTH];
        rng.fill(&mut secret_key_bytes);

        let node_key = Self::from_seed(&secret_key_bytes);
        secret_key_bytes.zeroize();

        debug!("Generated node key for node {}", node_key.node_id());
        node_key
    }

    /// Builds a node key from a 32-byte ed25519 seed.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Builds a node key from raw private key bytes.
    ///
    /// Accepts either encoding: a 32-byte seed or a 64-byte `seed || public_key`.
    /// For the 64-byte form the public half must match the one derived from the seed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            SECRET_KEY_LENGTH => {
                let mut seed: [u8; SECRET_KEY_LENGTH] = bytes
                    .try_into()
                    .map_err(|_| NodeKeyError::InvalidKeyLength(bytes.len()))?;
                let node_key = Self::from_seed(&seed);
                seed.zeroize();
                Ok(node_key)
            }
            KEYPAIR_LENGTH => {
                let mut keypair: [u8; KEYPAIR_LENGTH] = bytes
                    .try_into()
                    .map_err(|_| NodeKeyError::InvalidKeyLength(bytes.len()))?;
                let signing_key = SigningKey::from_keypair_bytes(&keypair)
                    .map_err(|_| NodeKeyError::KeyPairMismatch);
                keypair.zeroize();
                let signing_key = signing_key?;
                let verifying_key = signing_key.verifying_key();
                Ok(Self {
                    signing_key,
                    verifying_key,
                })
            }
            len => Err(NodeKeyError::InvalidKeyLength(len)),
        }
    }

    /// Builds a node key from a standard (padded) base64 string.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = Zeroizing::new(general_purpose::STANDARD.decode(encoded)?);
        Self::from_bytes(&bytes)
    }

    /// Returns the node ID derived from the public key.
    pub fn node_id(&self) -> NodeId {
        NodeId::from_public_key(&self.verifying_key)
    }

    pub fn public_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    /// Returns the private key bytes in the requested layout.
    pub fn private_key_bytes(&self, encoding: KeyEncoding) -> Zeroizing<Vec<u8>> {
        match encoding {
            KeyEncoding::Seed => Zeroizing::new(self.signing_key.to_bytes().to_vec()),
            KeyEncoding::Expanded => Zeroizing::new(self.signing_key.to_keypair_bytes().to_vec()),
        }
    }

    /// Returns the private key as standard base64 (with padding).
    pub fn private_key_base64(&self, encoding: KeyEncoding) -> String {
        general_purpose::STANDARD.encode(self.private_key_bytes(encoding).as_slice())
    }
}

impl fmt::Debug for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeKey")
            .field("node_id", &self.node_id().to_string())
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
