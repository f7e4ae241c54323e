//! Node Key JSON Envelope
//!
//! Wire format of the `node_key.json` file a Tendermint node loads at startup:
//!
//! ```json
//! {"priv_key":{"type":"tendermint/PrivKeyEd25519","value":"<base64>"}}
//! ```
//!
//! Field names and order are fixed; node configuration loaders depend on them.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{KeyEncoding, NodeKey};
use crate::error::{NodeKeyError, Result};

/// Type discriminator for ed25519 private keys.
pub const PRIV_KEY_ED25519_TYPE: &str = "tendermint/PrivKeyEd25519";

/// Tagged private key: type discriminator plus base64 key bytes.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct PrivKeyJson {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

/// Top-level `node_key.json` document.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeKeyJson {
    pub priv_key: PrivKeyJson,
}

impl NodeKeyJson {
    /// Wraps a base64 encoded ed25519 private key.
    pub fn new(private_key_base64: impl Into<String>) -> Self {
        Self {
            priv_key: PrivKeyJson {
                key_type: PRIV_KEY_ED25519_TYPE.to_string(),
                value: private_key_base64.into(),
            },
        }
    }

    /// Builds the envelope for a node key in the given encoding.
    pub fn from_node_key(node_key: &NodeKey, encoding: KeyEncoding) -> Self {
        Self::new(node_key.private_key_base64(encoding))
    }

    /// Serializes the envelope to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses an envelope and checks its type discriminator.
    pub fn from_json(json: &str) -> Result<Self> {
        let envelope: NodeKeyJson = serde_json::from_str(json)?;
        if envelope.priv_key.key_type != PRIV_KEY_ED25519_TYPE {
            return Err(NodeKeyError::UnsupportedKeyType(
                envelope.priv_key.key_type.clone(),
            ));
        }
        Ok(envelope)
    }

    /// Decodes the wrapped private key.
    pub fn to_node_key(&self) -> Result<NodeKey> {
        NodeKey::from_base64(&self.priv_key.value)
    }
}

/// Writes a serialized envelope to `path`, readable by the owner only.
///
/// Existing files are truncated and their mode is reset to 0600, matching the
/// permissions a Tendermint node gives its own `node_key.json`.
pub fn write_node_key_file(path: impl AsRef<Path>, node_key_json: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path.as_ref())?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(node_key_json.as_bytes())?;
    file.sync_all()?;

    Ok(())
}

impl std::fmt::Debug for NodeKeyJson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeKeyJson")
            .field("type", &self.priv_key.key_type)
            .field("value", &"[REDACTED]")
            .finish()
    }
}
