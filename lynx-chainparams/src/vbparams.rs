//! `deployment:start:timeout` overrides of version-bits windows.

use std::fmt;
use std::str::FromStr;

use lynx_consensus::DeploymentPos;
use serde::{Deserialize, Serialize};

use crate::error::ChainParamsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionBitsOverride {
    pub deployment: DeploymentPos,
    pub start_time: i64,
    pub timeout: i64,
}

impl FromStr for VersionBitsOverride {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        let [name, start, timeout] = fields.as_slice() else {
            return Err(ChainParamsError::InvalidVbParams(format!(
                "expected deployment:start:end, got {:?}",
                s
            )));
        };

        let deployment = name.parse::<DeploymentPos>().map_err(|_| {
            ChainParamsError::InvalidVbParams(format!("unknown deployment {:?}", name))
        })?;
        let start_time = start.parse::<i64>().map_err(|_| {
            ChainParamsError::InvalidVbParams(format!("invalid start time {:?}", start))
        })?;
        let timeout = timeout.parse::<i64>().map_err(|_| {
            ChainParamsError::InvalidVbParams(format!("invalid timeout {:?}", timeout))
        })?;

        Ok(VersionBitsOverride {
            deployment,
            start_time,
            timeout,
        })
    }
}

impl fmt::Display for VersionBitsOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.deployment, self.start_time, self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        let parsed: VersionBitsOverride = "segwit:0:999999999999".parse().unwrap();
        assert_eq!(
            parsed,
            VersionBitsOverride {
                deployment: DeploymentPos::Segwit,
                start_time: 0,
                timeout: 999_999_999_999,
            }
        );
        assert_eq!(parsed.to_string(), "segwit:0:999999999999");

        let always: VersionBitsOverride = "csv:-1:9223372036854775807".parse().unwrap();
        assert_eq!(always.start_time, -1);
        assert_eq!(always.timeout, i64::MAX);
    }

    #[test]
    fn test_reject_malformed_override() {
        for input in ["segwit:0", "segwit:0:1:2", "taproot:0:1", "csv:soon:1", "csv:0:later", ""] {
            assert!(
                matches!(
                    input.parse::<VersionBitsOverride>(),
                    Err(ChainParamsError::InvalidVbParams(_))
                ),
                "{input} should be rejected"
            );
        }
    }
}
