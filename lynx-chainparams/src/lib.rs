//! Chain parameters for the Lynx networks.
//!
//! Each network (main, test, regtest) is one [`ChainParams`] value built by
//! its constructor. A process picks one of them at startup through
//! [`select_params`]; everything afterwards reads it back with [`params`].

pub mod base58;
pub mod chainparams;
pub mod checkpoints;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod vbparams;

pub use base58::{Base58Prefixes, Base58Type};
pub use chainparams::{chain_name_from_flags, create_chain_params, ChainParams};
pub use error::{ChainParamsError, ChainParamsResult, NetworkError, NetworkResult};
pub use protocol::message::MessageHeader;
pub use protocol::{MessageStart, Network, MAGIC_SWITCH_PROTOCOL_VERSION};
pub use registry::{
    global_registry, params, select_params, update_version_bits_parameters, ParamsRegistry,
};
pub use vbparams::VersionBitsOverride;
