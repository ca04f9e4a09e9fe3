pub mod checkpoints;
pub mod deployment;
pub mod error;
pub mod genesis;
pub mod height_rules;
pub mod params;
pub mod pow;
pub mod restrictions;

pub use checkpoints::{ChainTxData, CheckpointData};
pub use deployment::{
    Bip9Deployment, DeploymentPos, Deployments, MAX_VERSION_BITS_DEPLOYMENTS, VERSIONBITS_NUM_BITS,
};
pub use error::ConsensusError;
pub use genesis::{create_genesis_block, create_lynx_genesis_block, GenesisParams};
pub use height_rules::{HardForkRule, HeightRule, HeightRuleTable};
pub use params::ConsensusParams;
pub use pow::{compact_to_target, target_within_limit};
pub use restrictions::{RestrictedAddress, RestrictedAddressList};
