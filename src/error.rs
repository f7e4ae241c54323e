//! Error types

use thiserror::Error;

/// Errors produced while generating, encoding or decoding a node key.
#[derive(Error, Debug)]
pub enum NodeKeyError {
    /// The `node_key.json` envelope could not be serialized or parsed.
    #[error("Node key JSON encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Unsupported private key type '{0}'")]
    UnsupportedKeyType(String),

    #[error("Invalid base64 private key: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Invalid private key length: expected 32 or 64 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("Invalid node ID '{0}': expected 40 hex characters")]
    InvalidNodeId(String),

    #[error("Node key file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The public half of a 64-byte key does not belong to its seed.
    #[error("Public key mismatch: expanded key does not match its seed")]
    KeyPairMismatch,
}

pub type Result<T> = std::result::Result<T, NodeKeyError>;
