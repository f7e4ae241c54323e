//! Command line arguments for the `nodekey` binary.

use crate::config::Config;
use crate::crypto::KeyEncoding;

/// Parsed `nodekey` command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub help: bool,
    pub expanded: bool,
    pub config_path: Option<String>,
    pub output_path: Option<String>,
}

impl CliArgs {
    /// Parses `args`, where `args[0]` is the program name.
    ///
    /// `--config` and `--output` require a value; a missing value is an error
    /// rather than being ignored, so a key is never written somewhere unexpected.
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut cli = CliArgs::default();

        let mut i = 1; // Skip program name
        while i < args.len() {
            match args[i].as_str() {
                "--help" | "-h" => cli.help = true,
                "--expanded" | "-e" => cli.expanded = true,
                flag @ ("--config" | "--output") => {
                    let value = args
                        .get(i + 1)
                        .filter(|value| !value.starts_with('-'))
                        .ok_or_else(|| anyhow::anyhow!("Missing value for {}", flag))?
                        .clone();
                    if flag == "--config" {
                        cli.config_path = Some(value);
                    } else {
                        cli.output_path = Some(value);
                    }
                    i += 1;
                }
                other => return Err(anyhow::anyhow!("Unknown argument '{}'", other)),
            }
            i += 1;
        }

        Ok(cli)
    }

    /// Applies command line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if self.expanded {
            config.node_key.encoding = KeyEncoding::Expanded;
        }
        if let Some(output_path) = &self.output_path {
            config.node_key.output_path = Some(output_path.clone());
        }
    }
}
