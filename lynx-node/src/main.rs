use anyhow::{Context, Result};
use clap::Parser;
use confy::{load, store};
use lynx_chainparams::{global_registry, select_params, ChainParams};
use lynx_shared_types::hash_to_hex;
use tracing::{error, info};

mod config;
mod logging;

use config::{Args, NodeConfig, APP_NAME, CONFIG_NAME};

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init(&args.log_level, args.log_file.as_deref())?;

    let path = confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)?;
    info!("Configuration file path: {:?}", path);

    let file_cfg: NodeConfig = match load(APP_NAME, CONFIG_NAME) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {:?}. Using default.", e);
            NodeConfig::default()
        }
    };
    let cfg = file_cfg.merge_args(&args)?;
    info!("Loaded configuration: {:?}", cfg);

    let overrides = cfg.version_bits_overrides()?;
    select_params(&cfg.chain)
        .with_context(|| format!("Failed to select chain {:?}", cfg.chain))?;
    for vb_override in &overrides {
        global_registry().apply_override(vb_override)?;
        info!("Applied version bits override {}", vb_override);
    }

    let params = lynx_chainparams::params();
    log_profile(&params);

    if args.print_params {
        println!("{}", serde_json::to_string_pretty(&*params)?);
    }

    if args.save_config {
        match store(APP_NAME, CONFIG_NAME, &cfg) {
            Ok(_) => info!("Configuration updated and stored."),
            Err(e) => error!("Failed to store configuration: {:?}", e),
        };
    }

    Ok(())
}

fn log_profile(params: &ChainParams) {
    let consensus = &params.consensus;
    info!(
        "Starting {} network on port {}",
        params.network, params.default_port
    );
    info!(
        "Genesis {} (merkle root {})",
        hash_to_hex(&consensus.hash_genesis_block),
        hash_to_hex(&consensus.hash_genesis_merkle_root)
    );
    info!(
        "Message start {} (legacy {})",
        hex::encode(params.message_start.current),
        hex::encode(params.message_start.legacy)
    );
    info!(
        "Hard forks at {} / {} / {}, block spacing {}s / {}s / {}s",
        consensus.hard_fork_height,
        consensus.hard_fork2_height,
        consensus.hard_fork3_height,
        consensus.pow_target_spacing_v1,
        consensus.pow_target_spacing_v2,
        consensus.pow_target_spacing_v3
    );
    if let Some((height, hash)) = params.checkpoints().last_checkpoint() {
        info!(
            "{} checkpoints, last at {} ({})",
            params.checkpoints().len(),
            height,
            hash_to_hex(hash)
        );
    }
    for (pos, deployment) in consensus.deployments.iter() {
        info!(
            "Deployment {}: bit {}, start {}, timeout {}",
            pos, deployment.bit, deployment.start_time, deployment.timeout
        );
    }
    if !consensus.restricted_addresses.is_empty() {
        info!(
            "{} restricted addresses, privileged address {}",
            consensus.restricted_addresses.entries().len(),
            consensus.privileged_address
        );
    }
}
