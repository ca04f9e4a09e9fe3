use anyhow::{Context, Result};
use clap::Parser;
use lynx_chainparams::{chain_name_from_flags, Network, VersionBitsOverride};
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "lynx";
pub const CONFIG_NAME: &str = "node-config";

/// Lynx Node
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Chain to use (main, test, regtest)
    #[arg(long)]
    pub chain: Option<String>,

    /// Use the test chain
    #[arg(long, conflicts_with = "chain")]
    pub testnet: bool,

    /// Use the regression test chain
    #[arg(long, conflicts_with = "chain")]
    pub regtest: bool,

    /// Override a deployment window as deployment:start:end (regtest only)
    #[arg(long = "vbparams", value_name = "DEPLOYMENT:START:END")]
    pub vbparams: Vec<String>,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Path to the log file (optional). If not provided, logs will only go to stdout.
    #[arg(long)]
    pub log_file: Option<String>,

    /// Print the selected chain parameters as JSON
    #[arg(long)]
    pub print_params: bool,

    /// Write the effective configuration back to the config file
    #[arg(long)]
    pub save_config: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub chain: String,
    pub vbparams: Vec<String>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            chain: Network::Main.id().to_string(),
            vbparams: Vec::new(),
        }
    }
}

impl NodeConfig {
    /// Applies command line overrides on top of the loaded file.
    pub fn merge_args(mut self, args: &Args) -> Result<Self> {
        if args.testnet || args.regtest {
            self.chain = chain_name_from_flags(args.testnet, args.regtest)?.to_string();
        } else if let Some(chain) = &args.chain {
            self.chain = chain.clone();
        }
        if !args.vbparams.is_empty() {
            self.vbparams = args.vbparams.clone();
        }
        Ok(self)
    }

    pub fn version_bits_overrides(&self) -> Result<Vec<VersionBitsOverride>> {
        self.vbparams
            .iter()
            .map(|raw| {
                raw.parse::<VersionBitsOverride>()
                    .with_context(|| format!("Invalid -vbparams value {:?}", raw))
            })
            .collect()
    }
}
