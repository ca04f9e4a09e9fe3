//! Network identity: chain names, magic bytes and default ports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChainParamsError;

pub mod message;

/// Protocol version from which peers frame messages with the current magic.
/// Older peers still use the legacy magic.
pub const MAGIC_SWITCH_PROTOCOL_VERSION: i32 = 70015;

/// Network type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Main,
    Test,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    /// Chain id as used on the command line and in data directories.
    pub fn id(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Get the default port for this network
    pub fn default_port(&self) -> u16 {
        match self {
            Network::Main => 22566,
            Network::Test => 44566,
            Network::Regtest => 19444,
        }
    }

    /// Get the magic bytes for this network
    pub fn message_start(&self) -> MessageStart {
        match self {
            Network::Main => MessageStart {
                current: [0xfa, 0xcf, 0xb3, 0xdc],
                legacy: [0xc0, 0xc0, 0xc0, 0xc0],
            },
            Network::Test => MessageStart::single([0xcf, 0xcf, 0xcf, 0xcf]),
            Network::Regtest => MessageStart::single([0xfa, 0xbf, 0xb5, 0xda]),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Network {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|network| network.id() == s)
            .ok_or_else(|| ChainParamsError::UnknownChain(s.to_string()))
    }
}

/// The pair of 4-byte prefixes framing every P2P message.
///
/// The current magic replaced an older one during the chain's life; both
/// stay recognized so old peers can still be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStart {
    pub current: [u8; 4],
    pub legacy: [u8; 4],
}

impl MessageStart {
    /// A network that never changed its magic.
    pub const fn single(magic: [u8; 4]) -> Self {
        MessageStart {
            current: magic,
            legacy: magic,
        }
    }

    /// Magic to frame messages with for a peer speaking `protocol_version`.
    /// Version 0 means the peer's version is not known yet.
    pub fn magic_for(&self, protocol_version: i32) -> [u8; 4] {
        if protocol_version == 0 || protocol_version >= MAGIC_SWITCH_PROTOCOL_VERSION {
            self.current
        } else {
            self.legacy
        }
    }

    pub fn is_recognized(&self, candidate: &[u8; 4]) -> bool {
        *candidate == self.current || *candidate == self.legacy
    }
}
