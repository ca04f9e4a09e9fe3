//! Soft-fork deployment windows signalled through block version bits.
//!
//! Only the window boundaries live here. Counting signals and walking the
//! DEFINED/STARTED/LOCKED_IN/ACTIVE/FAILED states is done by the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConsensusError;

/// Number of version bits available for signalling.
pub const VERSIONBITS_NUM_BITS: u8 = 29;

/// Closed set of deployments, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeploymentPos {
    TestDummy,
    /// BIP68, BIP112 and BIP113.
    Csv,
    /// BIP141, BIP143 and BIP147.
    Segwit,
}

pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 3;

impl DeploymentPos {
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] =
        [DeploymentPos::TestDummy, DeploymentPos::Csv, DeploymentPos::Segwit];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Name used in overrides and status reports.
    pub fn name(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Csv => "csv",
            DeploymentPos::Segwit => "segwit",
        }
    }
}

impl fmt::Display for DeploymentPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeploymentPos {
    type Err = ConsensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeploymentPos::ALL
            .into_iter()
            .find(|pos| pos.name() == s)
            .ok_or_else(|| ConsensusError::UnknownDeployment(s.to_string()))
    }
}

/// One BIP9 deployment window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDeployment")]
pub struct Bip9Deployment {
    /// Bit position in the block version.
    pub bit: u8,
    /// Median time past at which signalling may start.
    pub start_time: i64,
    /// Median time past after which the attempt fails.
    pub timeout: i64,
}

impl Bip9Deployment {
    /// `start_time` value meaning the deployment is active from genesis.
    pub const ALWAYS_ACTIVE: i64 = -1;
    /// `timeout` value meaning the window never expires.
    pub const NO_TIMEOUT: i64 = i64::MAX;

    pub fn new(bit: u8, start_time: i64, timeout: i64) -> Result<Self, ConsensusError> {
        if bit >= VERSIONBITS_NUM_BITS {
            return Err(ConsensusError::InvalidVersionBit(bit));
        }
        if start_time != Self::ALWAYS_ACTIVE && timeout < start_time {
            return Err(ConsensusError::InvalidDeploymentWindow {
                start_time,
                timeout,
            });
        }
        Ok(Bip9Deployment {
            bit,
            start_time,
            timeout,
        })
    }

    pub fn is_always_active(&self) -> bool {
        self.start_time == Self::ALWAYS_ACTIVE
    }

    pub fn never_times_out(&self) -> bool {
        self.timeout == Self::NO_TIMEOUT
    }

    /// The version mask a block sets to signal this deployment.
    pub fn mask(&self) -> u32 {
        1u32 << self.bit
    }
}

#[derive(Deserialize)]
struct RawDeployment {
    bit: u8,
    start_time: i64,
    timeout: i64,
}

impl TryFrom<RawDeployment> for Bip9Deployment {
    type Error = ConsensusError;

    fn try_from(raw: RawDeployment) -> Result<Self, Self::Error> {
        Bip9Deployment::new(raw.bit, raw.start_time, raw.timeout)
    }
}

/// Deployment table indexed by [`DeploymentPos`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployments([Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS]);

impl Deployments {
    pub fn new(
        test_dummy: Bip9Deployment,
        csv: Bip9Deployment,
        segwit: Bip9Deployment,
    ) -> Self {
        Deployments([test_dummy, csv, segwit])
    }

    pub fn get(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.0[pos.index()]
    }

    /// Replaces the window of one deployment, keeping its bit.
    pub fn set_window(&mut self, pos: DeploymentPos, start_time: i64, timeout: i64) {
        let deployment = &mut self.0[pos.index()];
        deployment.start_time = start_time;
        deployment.timeout = timeout;
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeploymentPos, &Bip9Deployment)> {
        DeploymentPos::ALL.into_iter().zip(self.0.iter())
    }
}
