//! Node Key Generator
//!
//! Produces a fresh node key together with its three exported representations:
//! the node ID, the base64 private key and the `node_key.json` envelope.
//! Generation either yields all three values or fails without producing any.

use std::fmt;

use tracing::info;
use zeroize::Zeroize;

use crate::config::Config;
use crate::crypto::{KeyEncoding, NodeId, NodeKey};
use crate::envelope::NodeKeyJson;
use crate::error::Result;

// ============================================================================
// GENERATED OUTPUT
// ============================================================================

/// Output of a single generation.
///
/// `node_key` and `node_key_json` are secrets; both are zeroized on drop and
/// redacted from `Debug` output.
#[derive(Clone)]
pub struct GeneratedNodeKey {
    /// Node ID (lowercase hex, 40 characters)
    pub node_id: String,
    /// Private key, standard base64 with padding
    pub node_key: String,
    /// Private key wrapped in the `node_key.json` envelope
    pub node_key_json: String,
}

impl fmt::Debug for GeneratedNodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedNodeKey")
            .field("node_id", &self.node_id)
            .field("node_key", &"[REDACTED]")
            .field("node_key_json", &"[REDACTED]")
            .finish()
    }
}

impl Drop for GeneratedNodeKey {
    fn drop(&mut self) {
        self.node_key.zeroize();
        self.node_key_json.zeroize();
    }
}

// ============================================================================
// GENERATOR
// ============================================================================

/// Generates node keys in a fixed private key encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeKeyGenerator {
    encoding: KeyEncoding,
}

impl NodeKeyGenerator {
    /// Creates a generator that exports the 32-byte seed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(encoding: KeyEncoding) -> Self {
        Self { encoding }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_encoding(config.node_key.encoding)
    }

    pub fn encoding(&self) -> KeyEncoding {
        self.encoding
    }

    /// Generates a fresh node key from the OS random source.
    ///
    /// # Returns
    ///
    /// * `Ok(GeneratedNodeKey)` - Node ID, base64 key and JSON envelope
    /// * `Err(NodeKeyError::Encoding)` - The envelope could not be serialized
    pub fn generate(&self) -> Result<GeneratedNodeKey> {
        self.generate_from(&NodeKey::generate())
    }

    /// Derives the exported representations of an existing node key.
    pub fn generate_from(&self, node_key: &NodeKey) -> Result<GeneratedNodeKey> {
        let node_id: NodeId = node_key.node_id();
        let private_key_b64 = node_key.private_key_base64(self.encoding);
        let node_key_json = NodeKeyJson::new(private_key_b64.as_str()).to_json()?;

        info!(
            "Generated node key for node {} ({:?} encoding)",
            node_id, self.encoding
        );

        Ok(GeneratedNodeKey {
            node_id: node_id.to_string(),
            node_key: private_key_b64,
            node_key_json,
        })
    }
}
