//! Node Key Resource Lifecycle
//!
//! Models the node key as an infrastructure resource owned by a host that keeps
//! its own state. The resource is create-only: create generates the key and
//! stores all attributes, read never reconciles anything (the key exists nowhere
//! but in the host's state), and delete only clears the identifier. There is no
//! update; any change to the resource means destroying and recreating it.

use std::collections::BTreeMap;

use tracing::info;

use crate::error::Result;
use crate::generator::NodeKeyGenerator;

// ============================================================================
// SCHEMA
// ============================================================================

pub const ATTR_NODE_ID: &str = "node_id";
pub const ATTR_NODE_KEY: &str = "node_key";
pub const ATTR_NODE_KEY_JSON: &str = "node_key_json";

/// Description of one resource attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub description: &'static str,
    /// Set by the resource, never by the user
    pub computed: bool,
    /// Must be redacted by the host in plans and logs
    pub sensitive: bool,
}

/// Attribute layout of the node key resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    pub attributes: &'static [AttributeSchema],
}

const NODE_KEY_ATTRIBUTES: &[AttributeSchema] = &[
    AttributeSchema {
        name: ATTR_NODE_ID,
        description: "Tendermint node ID.",
        computed: true,
        sensitive: false,
    },
    AttributeSchema {
        name: ATTR_NODE_KEY,
        description: "Tendermint node key.",
        computed: true,
        sensitive: true,
    },
    AttributeSchema {
        name: ATTR_NODE_KEY_JSON,
        description: "Tendermint node key in the JSON format expected by a node.",
        computed: true,
        sensitive: true,
    },
];

impl ResourceSchema {
    pub fn node_key() -> Self {
        Self {
            attributes: NODE_KEY_ATTRIBUTES,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Node keys are immutable; every change forces replacement.
    pub fn supports_update(&self) -> bool {
        false
    }
}

// ============================================================================
// STATE
// ============================================================================

/// Host-side bookkeeping for one resource instance.
///
/// An empty `id` means the resource does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceState {
    pub id: String,
    pub attributes: BTreeMap<String, String>,
}

impl ResourceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Result of reading the resource back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    NoDrift,
}

// ============================================================================
// LIFECYCLE
// ============================================================================

/// Create/read/delete hooks for the node key resource.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeKeyResource {
    generator: NodeKeyGenerator,
}

impl NodeKeyResource {
    pub fn new(generator: NodeKeyGenerator) -> Self {
        Self { generator }
    }

    pub fn schema(&self) -> ResourceSchema {
        ResourceSchema::node_key()
    }

    /// Generates a node key and records it in `state`.
    ///
    /// On error `state` is left untouched.
    pub fn create(&self, state: &mut ResourceState) -> Result<()> {
        let generated = self.generator.generate()?;

        state
            .attributes
            .insert(ATTR_NODE_ID.to_string(), generated.node_id.clone());
        state
            .attributes
            .insert(ATTR_NODE_KEY.to_string(), generated.node_key.clone());
        state
            .attributes
            .insert(ATTR_NODE_KEY_JSON.to_string(), generated.node_key_json.clone());
        state.id = generated.node_id.clone();

        info!("Created node key resource {}", state.id);
        Ok(())
    }

    /// No external system holds the key, so there is never drift.
    pub fn read(&self, _state: &ResourceState) -> Result<ReadOutcome> {
        Ok(ReadOutcome::NoDrift)
    }

    pub fn delete(&self, state: &mut ResourceState) {
        info!("Deleting node key resource {}", state.id);
        state.id.clear();
    }
}
