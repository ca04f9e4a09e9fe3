//! Message header framing.

use lynx_crypto::calculate_sha256d;
use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, NetworkResult};
use crate::protocol::MessageStart;

/// Maximum size of a message payload in bytes (32MB)
pub const MAX_MESSAGE_SIZE: usize = 32 * 1024 * 1024;

/// Size of an encoded header.
pub const MESSAGE_HEADER_SIZE: usize = 24;

/// Length of the null-padded command field.
pub const COMMAND_SIZE: usize = 12;

/// Network message header (24 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHeader {
    /// Network magic value
    pub magic: [u8; 4],
    /// Command name (null-padded)
    pub command: [u8; COMMAND_SIZE],
    /// Payload length (little-endian)
    pub length: u32,
    /// Checksum (first 4 bytes of sha256(sha256(payload)))
    pub checksum: [u8; 4],
}

impl MessageHeader {
    /// Create a header for a peer speaking `protocol_version`.
    pub fn new(
        message_start: &MessageStart,
        protocol_version: i32,
        command: &str,
        payload: &[u8],
    ) -> NetworkResult<Self> {
        if command.len() > COMMAND_SIZE || !command.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(NetworkError::InvalidMessage(format!(
                "Invalid command: {:?}",
                command
            )));
        }
        if payload.len() > MAX_MESSAGE_SIZE {
            return Err(NetworkError::MessageTooLarge {
                size: payload.len(),
                max: MAX_MESSAGE_SIZE,
            });
        }

        let mut command_bytes = [0u8; COMMAND_SIZE];
        command_bytes[..command.len()].copy_from_slice(command.as_bytes());

        Ok(Self {
            magic: message_start.magic_for(protocol_version),
            command: command_bytes,
            length: payload.len() as u32,
            checksum: Self::checksum(payload),
        })
    }

    /// Calculate the checksum of a payload
    pub fn checksum(payload: &[u8]) -> [u8; 4] {
        let hash = calculate_sha256d(payload);
        let mut checksum = [0u8; 4];
        checksum.copy_from_slice(&hash[..4]);
        checksum
    }

    pub fn encode(&self) -> [u8; MESSAGE_HEADER_SIZE] {
        let mut out = [0u8; MESSAGE_HEADER_SIZE];
        out[..4].copy_from_slice(&self.magic);
        out[4..16].copy_from_slice(&self.command);
        out[16..20].copy_from_slice(&self.length.to_le_bytes());
        out[20..].copy_from_slice(&self.checksum);
        out
    }

    /// Parse a header, accepting either magic of `message_start`.
    pub fn decode(message_start: &MessageStart, bytes: &[u8]) -> NetworkResult<Self> {
        if bytes.len() < MESSAGE_HEADER_SIZE {
            return Err(NetworkError::InvalidMessage(format!(
                "Header needs {} bytes, got {}",
                MESSAGE_HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[..4]);
        if !message_start.is_recognized(&magic) {
            return Err(NetworkError::InvalidMagic {
                expected: message_start.current,
                actual: magic,
            });
        }

        let mut command = [0u8; COMMAND_SIZE];
        command.copy_from_slice(&bytes[4..16]);
        let mut length = [0u8; 4];
        length.copy_from_slice(&bytes[16..20]);
        let mut checksum = [0u8; 4];
        checksum.copy_from_slice(&bytes[20..24]);

        let header = Self {
            magic,
            command,
            length: u32::from_le_bytes(length),
            checksum,
        };
        if header.length as usize > MAX_MESSAGE_SIZE {
            return Err(NetworkError::MessageTooLarge {
                size: header.length as usize,
                max: MAX_MESSAGE_SIZE,
            });
        }
        header.validate_command()?;
        Ok(header)
    }

    /// Get the command as a string
    pub fn command_str(&self) -> NetworkResult<&str> {
        let end = self
            .command
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.command.len());
        std::str::from_utf8(&self.command[..end])
            .map_err(|e| NetworkError::InvalidMessage(format!("Invalid command: {}", e)))
    }

    /// Verify the checksum of a payload
    pub fn verify_checksum(&self, payload: &[u8]) -> bool {
        self.length as usize == payload.len() && self.checksum == Self::checksum(payload)
    }

    // Printable ASCII, then only padding.
    fn validate_command(&self) -> NetworkResult<()> {
        let end = self
            .command
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(COMMAND_SIZE);
        let printable = self.command[..end].iter().all(|b| b.is_ascii_graphic());
        let padded = self.command[end..].iter().all(|&b| b == 0);
        if printable && padded {
            Ok(())
        } else {
            Err(NetworkError::InvalidMessage(format!(
                "Invalid command bytes: {:?}",
                self.command
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Network;

    #[test]
    fn test_header_layout() {
        let start = Network::Main.message_start();
        let header = MessageHeader::new(&start, 70015, "verack", &[]).unwrap();
        let bytes = header.encode();
        assert_eq!(&bytes[..4], &[0xfa, 0xcf, 0xb3, 0xdc]);
        assert_eq!(&bytes[4..10], b"verack");
        assert_eq!(&bytes[10..16], &[0u8; 6]);
        assert_eq!(&bytes[16..20], &[0u8; 4]);
        // sha256d of the empty payload
        assert_eq!(&bytes[20..], &[0x5d, 0xf6, 0xe0, 0xe2]);

        let decoded = MessageHeader::decode(&start, &bytes).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(decoded.command_str().unwrap(), "verack");
        assert!(decoded.verify_checksum(&[]));
        assert!(!decoded.verify_checksum(b"x"));
    }

    #[test]
    fn test_legacy_peer_gets_legacy_magic() {
        let start = Network::Main.message_start();
        let header = MessageHeader::new(&start, 70002, "ping", &[1, 2, 3]).unwrap();
        assert_eq!(header.magic, [0xc0; 4]);
        assert_eq!(header.length, 3);
        assert!(MessageHeader::decode(&start, &header.encode()).is_ok());
    }

    #[test]
    fn test_decode_rejects_foreign_magic() {
        let regtest = Network::Regtest.message_start();
        let bytes = MessageHeader::new(&regtest, 0, "ping", &[])
            .unwrap()
            .encode();
        let main = Network::Main.message_start();
        assert_eq!(
            MessageHeader::decode(&main, &bytes),
            Err(NetworkError::InvalidMagic {
                expected: main.current,
                actual: regtest.current,
            })
        );
    }

    #[test]
    fn test_decode_rejects_oversized_payload() {
        let start = Network::Test.message_start();
        let mut bytes = MessageHeader::new(&start, 0, "block", &[]).unwrap().encode();
        bytes[16..20].copy_from_slice(&(MAX_MESSAGE_SIZE as u32 + 1).to_le_bytes());
        assert!(matches!(
            MessageHeader::decode(&start, &bytes),
            Err(NetworkError::MessageTooLarge { .. })
        ));
    }

    #[test]
    fn test_bad_commands() {
        let start = Network::Test.message_start();
        assert!(MessageHeader::new(&start, 0, "thirteenchars", &[]).is_err());
        assert!(MessageHeader::new(&start, 0, "has space", &[]).is_err());

        let mut bytes = MessageHeader::new(&start, 0, "inv", &[]).unwrap().encode();
        bytes[8] = b'x';
        assert!(matches!(
            MessageHeader::decode(&start, &bytes),
            Err(NetworkError::InvalidMessage(_))
        ));
        assert!(MessageHeader::decode(&start, &bytes[..10]).is_err());
    }
}
