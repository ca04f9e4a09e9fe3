//! Genesis block construction.
//!
//! The genesis block holds a single coinbase whose output can never be
//! spent, since it was never added to the coin database.

use lynx_shared_types::{
    Amount, Block, BlockHeader, Opcode, OutPoint, Script, Transaction, TxInput, TxOutput,
    NULL_HASH,
};

/// Headline committed to by every Lynx genesis coinbase.
pub const GENESIS_TIMESTAMP: &str = "ICanHazKitteh at epoch 1387779684. Meow. Now pet me.";

/// Public key paid by the genesis coinbase (uncompressed, 65 bytes).
pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = [
    0x04, 0x01, 0x84, 0x71, 0x0f, 0xa6, 0x89, 0xad, 0x50, 0x23, 0x69, 0x0c, 0x80, 0xf3, 0xa4,
    0x9c, 0x8f, 0x13, 0xf8, 0xd4, 0x5b, 0x8c, 0x85, 0x7f, 0xbc, 0xbc, 0x8b, 0xc4, 0xa8, 0xe4,
    0xd3, 0xeb, 0x4b, 0x10, 0xf4, 0xd4, 0x60, 0x4f, 0xa0, 0x8d, 0xce, 0x60, 0x1a, 0xaf, 0x0f,
    0x47, 0x02, 0x16, 0xfe, 0x1b, 0x51, 0x85, 0x0b, 0x4a, 0xcf, 0x21, 0xb1, 0x79, 0xc4, 0x50,
    0x70, 0xac, 0x7b, 0x03, 0xa9,
];

/// The compact target pushed at the start of the coinbase script.
const GENESIS_SCRIPT_SIG_BITS: i64 = 486_604_799;

/// Header fields and reward that differ between networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisParams {
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: Amount,
}

/// Builds a genesis block whose coinbase carries `timestamp` and pays
/// `reward` to `output_script`.
pub fn create_genesis_block(
    timestamp: &str,
    output_script: Script,
    params: GenesisParams,
) -> Block {
    let script_sig = Script::new()
        .push_int(GENESIS_SCRIPT_SIG_BITS)
        .push_num(4)
        .push_slice(timestamp.as_bytes());

    let coinbase = Transaction {
        version: 1,
        inputs: vec![TxInput {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }],
        outputs: vec![TxOutput::new(params.reward, output_script)],
        lock_time: 0,
    };

    let mut genesis = Block {
        header: BlockHeader {
            version: params.version,
            previous_block_hash: NULL_HASH,
            merkle_root: NULL_HASH,
            time: params.time,
            bits: params.bits,
            nonce: params.nonce,
        },
        transactions: vec![coinbase],
    };
    genesis.header.merkle_root = genesis.compute_merkle_root();
    genesis
}

/// Pay-to-pubkey script of the genesis output.
pub fn genesis_output_script() -> Script {
    Script::new()
        .push_slice(&GENESIS_OUTPUT_PUBKEY)
        .push_opcode(Opcode::OpChecksig)
}

/// Builds the Lynx genesis block for the given header fields.
pub fn create_lynx_genesis_block(params: GenesisParams) -> Block {
    create_genesis_block(GENESIS_TIMESTAMP, genesis_output_script(), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lynx_shared_types::encode::Encodable;
    use lynx_shared_types::{hash_to_hex, COIN};

    fn mainnet() -> GenesisParams {
        GenesisParams {
            time: 1_387_779_684,
            nonce: 2_714_385,
            bits: 0x1e0f_fff0,
            version: 1,
            reward: 88 * COIN,
        }
    }

    #[test]
    fn test_genesis_shape() {
        let genesis = create_lynx_genesis_block(mainnet());
        assert_eq!(genesis.header.previous_block_hash, NULL_HASH);
        assert_eq!(genesis.transactions.len(), 1);

        let coinbase = &genesis.transactions[0];
        assert!(coinbase.is_coinbase());
        assert_eq!(coinbase.outputs[0].value, 88 * COIN);
        assert_eq!(coinbase.to_bytes().len(), 187);

        let script_sig = coinbase.inputs[0].script_sig.as_bytes();
        assert_eq!(&script_sig[..7], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04]);
        assert_eq!(script_sig[7] as usize, GENESIS_TIMESTAMP.len());
    }

    #[test]
    fn test_genesis_merkle_root_is_coinbase_txid() {
        let genesis = create_lynx_genesis_block(mainnet());
        assert_eq!(genesis.header.merkle_root, genesis.transactions[0].txid());
        assert_eq!(
            hash_to_hex(&genesis.header.merkle_root),
            "c2adb964220f170f6c4fe9002f0db19a6f9c9608f6f765ba0629ac3897028de5"
        );
    }

    #[test]
    fn test_reward_changes_merkle_root_but_not_shape() {
        let mut regtest = mainnet();
        regtest.reward = 50 * COIN;
        let genesis = create_lynx_genesis_block(regtest);
        assert_eq!(
            hash_to_hex(&genesis.header.merkle_root),
            "e17e4369f534691fade36848437428efdd6c51141b504aca65568ae564f171bf"
        );
    }
}
