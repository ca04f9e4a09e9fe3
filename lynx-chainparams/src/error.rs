//! Error types for chain parameter selection and message framing.

use lynx_consensus::ConsensusError;
use thiserror::Error;

/// Errors raised while choosing or adjusting the active chain parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainParamsError {
    /// Requested network name is not one of main, test or regtest
    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    /// The process-wide parameters were already chosen
    #[error("Chain parameters already selected for {0}")]
    AlreadySelected(String),

    /// Malformed `name:start:timeout` override
    #[error("Invalid version bits parameters: {0}")]
    InvalidVbParams(String),

    /// Deployment overrides are refused outside regtest
    #[error("Version bits parameters may only be overridden on regtest, not {0}")]
    VbParamsNotAllowed(String),

    /// Mutually exclusive network flags
    #[error("Invalid combination of -regtest and -testnet")]
    InvalidChainFlags,

    #[error(transparent)]
    Consensus(#[from] ConsensusError),
}

/// Errors raised while framing or parsing a message header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Invalid network magic value
    #[error("Invalid network magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Message too large
    #[error("Message too large: {size} bytes (max: {max} bytes)")]
    MessageTooLarge { size: usize, max: usize },

    /// Invalid message format
    #[error("Invalid message format: {0}")]
    InvalidMessage(String),
}

/// A specialized `Result` type for chain parameter operations
pub type ChainParamsResult<T> = std::result::Result<T, ChainParamsError>;

/// A specialized `Result` type for message framing
pub type NetworkResult<T> = std::result::Result<T, NetworkError>;
