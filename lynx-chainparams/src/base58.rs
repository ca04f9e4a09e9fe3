//! Address and key version prefixes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    /// Newer script address prefix, accepted alongside `ScriptAddress`.
    ScriptAddress2,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::ScriptAddress2,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Version bytes prepended to base58check payloads on one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub script_address2: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
}

impl Base58Prefixes {
    pub fn prefix(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => std::slice::from_ref(&self.pubkey_address),
            Base58Type::ScriptAddress => std::slice::from_ref(&self.script_address),
            Base58Type::ScriptAddress2 => std::slice::from_ref(&self.script_address2),
            Base58Type::SecretKey => std::slice::from_ref(&self.secret_key),
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_widths() {
        let prefixes = Base58Prefixes {
            pubkey_address: 45,
            script_address: 22,
            script_address2: 50,
            secret_key: 173,
            ext_public_key: [0x04, 0x88, 0xb2, 0x1e],
            ext_secret_key: [0x04, 0x88, 0xad, 0xe4],
        };
        assert_eq!(prefixes.prefix(Base58Type::PubkeyAddress), &[45]);
        assert_eq!(prefixes.prefix(Base58Type::SecretKey), &[173]);
        assert_eq!(
            prefixes.prefix(Base58Type::ExtPublicKey),
            &[0x04, 0x88, 0xb2, 0x1e]
        );
        for kind in Base58Type::ALL {
            assert!(!prefixes.prefix(kind).is_empty());
        }
    }
}
