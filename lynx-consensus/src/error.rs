use lynx_shared_types::Height;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsensusError {
    #[error("Unknown deployment: {0}")]
    UnknownDeployment(String),

    #[error("Version bit {0} is outside the usable range")]
    InvalidVersionBit(u8),

    #[error("Deployment timeout {timeout} precedes start time {start_time}")]
    InvalidDeploymentWindow { start_time: i64, timeout: i64 },

    #[error("Rule table breakpoint {height} is not above the previous breakpoint {previous}")]
    UnsortedRuleTable { previous: Height, height: Height },

    #[error("Restricted address listed twice: {0}")]
    DuplicateRestrictedAddress(String),

    #[error("Checkpoint height {height} is not above the previous checkpoint {previous}")]
    UnsortedCheckpoints { previous: Height, height: Height },
}
