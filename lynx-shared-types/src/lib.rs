//! Types shared by the Lynx crates: hashes, amounts, heights, and the
//! block and transaction structures the chain parameters are built from.

use serde::{Deserialize, Serialize};
use std::hash::Hash as StdHash;

pub mod encode;
pub mod script;

use encode::{write_var_bytes, Encodable};
pub use script::{Opcode, Script};

/// A 256-bit hash in internal (little-endian) byte order.
pub type Hash = [u8; 32];
/// Block height. Negative values are used as "active from genesis" sentinels.
pub type Height = i32;
/// Amount in the smallest currency unit.
pub type Amount = i64;

/// Number of base units in one coin.
pub const COIN: Amount = 100_000_000;

/// The all-zero hash, used as the predecessor of the genesis block.
pub const NULL_HASH: Hash = [0u8; 32];

/// Converts a hash written in display order (as block explorers print it)
/// into internal byte order.
pub const fn hash_from_display_bytes(display: [u8; 32]) -> Hash {
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        out[i] = display[31 - i];
        i += 1;
    }
    out
}

/// Formats a hash in display order.
pub fn hash_to_hex(hash: &Hash) -> String {
    hex::encode(hash_from_display_bytes(*hash))
}

/// Represents a reference to a specific transaction output.
#[derive(Debug, Clone, PartialEq, Eq, StdHash, Serialize, Deserialize)]
pub struct OutPoint {
    /// The transaction ID (hash) of the transaction containing the output.
    pub txid: Hash,
    /// The index of the output within that transaction.
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint spent by a coinbase input.
    pub fn null() -> Self {
        OutPoint {
            txid: NULL_HASH,
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid == NULL_HASH && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.txid);
        out.extend_from_slice(&self.vout.to_le_bytes());
    }
}

/// Represents a transaction input, referencing a previous transaction's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// The `OutPoint` referencing the output being spent.
    pub previous_output: OutPoint,
    /// The script signature; arbitrary data for a coinbase input.
    pub script_sig: Script,
    pub sequence: u32,
}

impl Encodable for TxInput {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.previous_output.consensus_encode(out);
        write_var_bytes(out, self.script_sig.as_bytes());
        out.extend_from_slice(&self.sequence.to_le_bytes());
    }
}

/// Represents a transaction output, specifying a value and a locking script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub value: Amount,
    /// The locking script (scriptPubKey) that defines the conditions for spending this output.
    pub script_pubkey: Script,
}

impl TxOutput {
    pub fn new(value: Amount, script_pubkey: Script) -> Self {
        TxOutput {
            value,
            script_pubkey,
        }
    }
}

impl Encodable for TxOutput {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.value.to_le_bytes());
        write_var_bytes(out, self.script_pubkey.as_bytes());
    }
}

/// A transaction without witness data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// Calculates the transaction ID, the double SHA-256 of its encoding.
    pub fn txid(&self) -> Hash {
        lynx_crypto::calculate_sha256d(&self.to_bytes())
    }

    /// A coinbase has exactly one input, spending the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        self.inputs.consensus_encode(out);
        self.outputs.consensus_encode(out);
        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }
}

/// Serialized size of a block header.
pub const BLOCK_HEADER_SIZE: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub previous_block_hash: Hash,
    pub merkle_root: Hash,
    pub time: u32,
    /// Compact encoding of the proof-of-work target.
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Calculates the hash of the block header.
    pub fn hash(&self) -> Hash {
        lynx_crypto::calculate_sha256d(&self.to_bytes())
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&self.previous_block_hash);
        out.extend_from_slice(&self.merkle_root);
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
    }
}

/// Represents a block in the blockchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Calculates the hash of the block.
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Merkle root over the ids of the block's transactions.
    pub fn compute_merkle_root(&self) -> Hash {
        let txids: Vec<Hash> = self.transactions.iter().map(Transaction::txid).collect();
        lynx_crypto::calculate_merkle_root(&txids).unwrap_or(NULL_HASH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_hash_hex_is_display_order() {
        let hash = hash_from_display_bytes(hex!(
            "984b30fc9bb5e5ff424ad7f4ec1930538a7b14a2d93e58ad7976c23154ea4a76"
        ));
        assert_eq!(hash[0], 0x76);
        assert_eq!(hash[31], 0x98);
        assert_eq!(
            hash_to_hex(&hash),
            "984b30fc9bb5e5ff424ad7f4ec1930538a7b14a2d93e58ad7976c23154ea4a76"
        );
    }

    #[test]
    fn test_header_is_eighty_bytes() {
        let header = BlockHeader {
            version: 1,
            previous_block_hash: NULL_HASH,
            merkle_root: [1u8; 32],
            time: 1,
            bits: 0x207fffff,
            nonce: 0,
        };
        assert_eq!(header.to_bytes().len(), BLOCK_HEADER_SIZE);
    }

    #[test]
    fn test_coinbase_detection() {
        let coinbase = Transaction {
            version: 1,
            inputs: vec![TxInput {
                previous_output: OutPoint::null(),
                script_sig: Script::new().push_int(1),
                sequence: u32::MAX,
            }],
            outputs: vec![TxOutput::new(50 * COIN, Script::new())],
            lock_time: 0,
        };
        assert!(coinbase.is_coinbase());

        let mut spend = coinbase.clone();
        spend.inputs[0].previous_output = OutPoint {
            txid: coinbase.txid(),
            vout: 0,
        };
        assert!(!spend.is_coinbase());
    }
}
