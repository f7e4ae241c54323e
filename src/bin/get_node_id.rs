//! Get Node ID from node_key.json
//!
//! Reads an existing `node_key.json` envelope and prints the node ID derived
//! from its key. Useful for building persistent peer lists from keys that were
//! generated earlier.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin get_node_id -- config/node_key.json
//! ```

use anyhow::Result;
use tendermint_nodekey::envelope::NodeKeyJson;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Usage: get_node_id <path/to/node_key.json>"))?;

    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", path, e))?;
    let node_key = NodeKeyJson::from_json(&content)?.to_node_key()?;

    println!("{}", node_key.node_id());

    Ok(())
}
