//! Tendermint Node Key Generator
//!
//! Generates a fresh ed25519 node key and prints the node ID, the base64
//! private key and the `node_key.json` envelope.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin nodekey
//! cargo run --bin nodekey -- --expanded --output config/node_key.json
//! ```
//!
//! ## Security Requirements
//!
//! **CRITICAL**: The printed `NODE_KEY` and `NODE_KEY_JSON` values are secrets.
//! Do not paste them into logs or shared terminals.

use anyhow::Result;
use tracing::info;

use tendermint_nodekey::cli::CliArgs;
use tendermint_nodekey::config::{Config, CONFIG_PATH_ENV};
use tendermint_nodekey::envelope::write_node_key_file;
use tendermint_nodekey::generator::NodeKeyGenerator;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

/// Main entry point.
///
/// This function:
/// 1. Initializes logging and tracing
/// 2. Loads configuration (`--config`, `NODEKEY_CONFIG_PATH` or defaults)
/// 3. Applies command line overrides (missing flag values are errors)
/// 4. Generates the node key and prints it
/// 5. Optionally writes `node_key.json`
fn main() -> Result<()> {
    // Initialize structured logging (goes to stderr, stdout carries the key)
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().collect();
    let cli = CliArgs::parse(&args)?;

    if cli.help {
        println!("Tendermint Node Key Generator");
        println!();
        println!("Usage: nodekey [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --config <path>   Use custom config file path");
        println!("  --expanded, -e    Export the 64-byte seed || public key layout");
        println!("  --output <path>   Write node_key.json to <path> (mode 0600)");
        println!("  --help, -h        Show this help message");
        println!();
        println!("Environment variables:");
        println!("  {}    Path to config file (default: config/nodekey.toml)", CONFIG_PATH_ENV);
        return Ok(());
    }

    let mut config = match &cli.config_path {
        Some(path) => {
            info!("Using custom config: {}", path);
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let generator = NodeKeyGenerator::from_config(&config);
    let generated = generator.generate()?;

    println!("NODE_ID={}", generated.node_id);
    println!("NODE_KEY={}", generated.node_key);
    println!("NODE_KEY_JSON={}", generated.node_key_json);

    if let Some(path) = &config.node_key.output_path {
        write_node_key_file(path, &generated.node_key_json)
            .map_err(|e| anyhow::anyhow!("Failed to write node key to '{}': {}", path, e))?;
        info!("Wrote node key for node {} to {}", generated.node_id, path);
    }

    Ok(())
}
