//! The three network profiles.

use std::net::SocketAddr;

use hex_literal::hex;
use log::debug;
use lynx_consensus::genesis::{create_lynx_genesis_block, GenesisParams};
use lynx_consensus::params::{
    COINBASE_MATURITY, COINBASE_MATURITY2, REGTEST_COINBASE_MATURITY, TESTNET_COINBASE_MATURITY,
};
use lynx_consensus::{
    target_within_limit, Bip9Deployment, ChainTxData, CheckpointData, ConsensusError,
    ConsensusParams, DeploymentPos, Deployments, HeightRuleTable, RestrictedAddress,
    RestrictedAddressList,
};
use lynx_shared_types::{
    hash_from_display_bytes, hash_to_hex, Amount, Block, Hash, Height, COIN, NULL_HASH,
};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::base58::{Base58Prefixes, Base58Type};
use crate::checkpoints::{MAIN_CHECKPOINTS, REGTEST_CHECKPOINTS, TESTNET_CHECKPOINTS};
use crate::error::{ChainParamsError, ChainParamsResult};
use crate::protocol::{MessageStart, Network};

/// Everything that differs between main, test and regtest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainParams {
    pub network: Network,
    pub consensus: ConsensusParams,
    pub message_start: MessageStart,
    pub default_port: u16,
    /// Blocks below this height are never pruned.
    pub prune_after_height: u64,
    pub genesis: Block,
    pub dns_seeds: Vec<String>,
    pub fixed_seeds: Vec<SocketAddr>,
    pub base58_prefixes: Base58Prefixes,
    pub bech32_hrp: String,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
}

/// Builds the parameters for a chain id ("main", "test" or "regtest").
pub fn create_chain_params(chain: &str) -> ChainParamsResult<ChainParams> {
    let network: Network = chain.parse()?;
    Ok(ChainParams::for_network(network))
}

/// Resolves the `-testnet` / `-regtest` flags to a chain id.
pub fn chain_name_from_flags(testnet: bool, regtest: bool) -> ChainParamsResult<&'static str> {
    match (testnet, regtest) {
        (true, true) => Err(ChainParamsError::InvalidChainFlags),
        (false, true) => Ok(Network::Regtest.id()),
        (true, false) => Ok(Network::Test.id()),
        (false, false) => Ok(Network::Main.id()),
    }
}

impl ChainParams {
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Main => Self::main(),
            Network::Test => Self::testnet(),
            Network::Regtest => Self::regtest(),
        }
    }

    pub fn main() -> Self {
        let genesis = checked_genesis(
            Network::Main,
            GenesisParams {
                time: 1_387_779_684,
                nonce: 2_714_385,
                bits: 0x1e0f_fff0,
                version: 1,
                reward: 88 * COIN,
            },
            hash_from_display_bytes(hex!(
                "984b30fc9bb5e5ff424ad7f4ec1930538a7b14a2d93e58ad7976c23154ea4a76"
            )),
            hash_from_display_bytes(hex!(
                "c2adb964220f170f6c4fe9002f0db19a6f9c9608f6f765ba0629ac3897028de5"
            )),
        );

        let consensus = ConsensusParams {
            hash_genesis_block: genesis.hash(),
            hash_genesis_merkle_root: genesis.header.merkle_root,
            subsidy_halving_interval: 840_000,
            bip34_height: 710_000,
            bip34_hash: hash_from_display_bytes(hex!(
                "fa09d204a83a768ed5a7c8d441fa62f2043abf420cff1226c7b4329aeb9d51cf"
            )),
            bip65_height: 918_684,
            bip66_height: 811_879,
            hard_fork_height: 126_250,
            hard_fork2_height: 1_711_675,
            hard_fork3_height: 1_838_000,
            hard_fork_rule1_params: HeightRuleTable::from_literals(&[
                (2_630_000, 10),
                (2_730_000, 20),
                (2_780_000, 30),
                (2_800_000, 40),
                (2_820_000, 50),
            ]),
            hard_fork_rule2_params: HeightRuleTable::from_literals(&[
                (2_680_000, 2),
                (2_850_000, 3),
                (3_000_000, 4),
            ]),
            hard_fork_rule3_params: HeightRuleTable::from_literals(&[
                (2_760_000, 1),
                (2_940_000, 2),
                (3_500_000, 3),
            ]),
            hard_fork_rule2_difficulty_prev_block_count: 10,
            hard_fork_rule2_lower_limit_min_balance: 1000 * COIN,
            hard_fork_rule2_upper_limit_min_balance: 100_000_000 * COIN,
            restricted_addresses: restricted(
                &[
                    (2_820_000, "KJ2MGS3jq4DPkVmE1ephMCbT7ojDcDSJRG"),
                    (2_820_000, "KSho9zUYrFdTPPxfF6ye9sLurgKygeUEzL"),
                ],
                1_000_000_000 * COIN,
                1_000_000 * COIN,
            ),
            privileged_address: "KQoKm4bzQvDAwiiFsPz3AE4UJHkHBvX6Bz".to_string(),
            // 75% of 8064
            rule_change_activation_threshold: 6048,
            miner_confirmation_window: 8064,
            deployments: Deployments::new(
                // 2008-01-01 to 2008-12-31
                deployment(28, 1_199_145_601, 1_230_767_999),
                deployment(0, 1_485_561_600, 1_517_356_801),
                deployment(1, 0, 999_999_999_999),
            ),
            pow_limit: U256::from_big_endian(&hex!(
                "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            )),
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            pow_target_spacing_v1: 30,
            pow_target_spacing_v2: 60,
            pow_target_spacing_v3: 30,
            // retarget every hour
            pow_target_timespan: 60 * 60,
            coinbase_maturity: COINBASE_MATURITY,
            coinbase_maturity2: COINBASE_MATURITY2,
            minimum_chain_work: U256::from(0x2025_852f_c35a_72u64),
            // block 1259849
            default_assume_valid: hash_from_display_bytes(hex!(
                "29c8c00e1a5f446a6364a29633d3f1ee16428d87c8d3851a1c570be8170b04c2"
            )),
            checkpoints: checkpoints(MAIN_CHECKPOINTS),
            chain_tx_data: ChainTxData {
                time: 1_387_905_669,
                tx_count: 1717,
                tx_rate: 3.0,
            },
        };

        Self::finish(ChainParams {
            network: Network::Main,
            consensus,
            message_start: Network::Main.message_start(),
            default_port: Network::Main.default_port(),
            prune_after_height: 100_000,
            genesis,
            dns_seeds: (1..=5).map(|n| format!("node{:02}.getlynx.io", n)).collect(),
            fixed_seeds: Vec::new(),
            base58_prefixes: Base58Prefixes {
                pubkey_address: 45,
                script_address: 22,
                script_address2: 50,
                secret_key: 173,
                ext_public_key: [0x04, 0x88, 0xb2, 0x1e],
                ext_secret_key: [0x04, 0x88, 0xad, 0xe4],
            },
            bech32_hrp: "ltc".to_string(),
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
        })
    }

    pub fn testnet() -> Self {
        let genesis = checked_genesis(
            Network::Test,
            GenesisParams {
                time: 1_387_779_622,
                nonce: 8069,
                bits: 0x1e0f_fff0,
                version: 1,
                reward: 88 * COIN,
            },
            hash_from_display_bytes(hex!(
                "16a9688c3fc8b4f0fcb0ea7453dbf0de698bc4e45f7bf111cf4cf149505d77ee"
            )),
            hash_from_display_bytes(hex!(
                "c2adb964220f170f6c4fe9002f0db19a6f9c9608f6f765ba0629ac3897028de5"
            )),
        );

        let bip_activation_hash = hash_from_display_bytes(hex!(
            "8075c771ed8b495ffd943980a95f702ab34fce3c8c54e379548bda33cc8c0573"
        ));

        let consensus = ConsensusParams {
            hash_genesis_block: genesis.hash(),
            hash_genesis_merkle_root: genesis.header.merkle_root,
            subsidy_halving_interval: 840_000,
            bip34_height: 76,
            bip34_hash: bip_activation_hash,
            bip65_height: 76,
            bip66_height: 76,
            hard_fork_height: 1,
            hard_fork2_height: 2,
            hard_fork3_height: 3,
            hard_fork_rule1_params: HeightRuleTable::from_literals(&[
                (250, 10),
                (260, 20),
                (270, 30),
                (280, 40),
                (290, 50),
                (200_000, 60),
            ]),
            hard_fork_rule2_params: HeightRuleTable::from_literals(&[(255, 2), (310, 3), (360, 4)]),
            hard_fork_rule3_params: HeightRuleTable::from_literals(&[(265, 1)]),
            hard_fork_rule2_difficulty_prev_block_count: 10,
            hard_fork_rule2_lower_limit_min_balance: COIN / 1000,
            hard_fork_rule2_upper_limit_min_balance: 100_000_000 * COIN,
            restricted_addresses: restricted(
                &[
                    (60, "mgk3Z3R2S7RhrTU7P1z4J7vJwVwcQSpmzi"),
                    (60, "mnzkVQKfQ6TjvLev7y9QfJAhrzM4pLDfiK"),
                ],
                5 * COIN,
                COIN,
            ),
            privileged_address: "mtzbBN6s3VN1AZoyXuaACzR4mWG1qwWdgq".to_string(),
            rule_change_activation_threshold: 1512,
            // pow_target_timespan / pow_target_spacing_v2
            miner_confirmation_window: 60,
            deployments: Deployments::new(
                deployment(28, 1_199_145_601, 1_230_767_999),
                deployment(0, 1_483_228_800, 1_517_356_801),
                deployment(1, 0, 999_999_999_999),
            ),
            pow_limit: U256::from_big_endian(&hex!(
                "000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            )),
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: false,
            pow_target_spacing_v1: 30,
            pow_target_spacing_v2: 60,
            pow_target_spacing_v3: 30,
            pow_target_timespan: 60 * 60,
            coinbase_maturity: TESTNET_COINBASE_MATURITY,
            coinbase_maturity2: TESTNET_COINBASE_MATURITY,
            minimum_chain_work: U256::from(0x10000u64),
            // block 8711
            default_assume_valid: hash_from_display_bytes(hex!(
                "43a16a626ef2ffdbe928f2bc26dcd5475c6a1a04f9542dfc6a0a88e5fcf9bd4c"
            )),
            checkpoints: checkpoints(TESTNET_CHECKPOINTS),
            chain_tx_data: ChainTxData {
                time: 1_369_685_559,
                tx_count: 37_581,
                tx_rate: 300.0,
            },
        };

        Self::finish(ChainParams {
            network: Network::Test,
            consensus,
            message_start: Network::Test.message_start(),
            default_port: Network::Test.default_port(),
            prune_after_height: 1000,
            genesis,
            dns_seeds: Vec::new(),
            fixed_seeds: Vec::new(),
            base58_prefixes: TEST_BASE58_PREFIXES,
            bech32_hrp: "tltc".to_string(),
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
        })
    }

    pub fn regtest() -> Self {
        let genesis = checked_genesis(
            Network::Regtest,
            GenesisParams {
                time: 1_296_688_608,
                nonce: 0,
                bits: 0x207f_ffff,
                version: 1,
                reward: 50 * COIN,
            },
            hash_from_display_bytes(hex!(
                "7b1821f586316703643a5ffbf7a6694c8ffa891390888559f854ca5b23e3d05c"
            )),
            hash_from_display_bytes(hex!(
                "e17e4369f534691fade36848437428efdd6c51141b504aca65568ae564f171bf"
            )),
        );

        let consensus = ConsensusParams {
            hash_genesis_block: genesis.hash(),
            hash_genesis_merkle_root: genesis.header.merkle_root,
            subsidy_halving_interval: 150,
            // far in the future so version 1 blocks are not rejected
            bip34_height: 100_000_000,
            bip34_hash: NULL_HASH,
            bip65_height: 1351,
            bip66_height: 1251,
            hard_fork_height: -1,
            hard_fork2_height: -1,
            hard_fork3_height: -1,
            hard_fork_rule1_params: HeightRuleTable::from_literals(&[(35, 2)]),
            hard_fork_rule2_params: HeightRuleTable::from_literals(&[(40, 1)]),
            hard_fork_rule3_params: HeightRuleTable::from_literals(&[(45, 1)]),
            hard_fork_rule2_difficulty_prev_block_count: 10,
            hard_fork_rule2_lower_limit_min_balance: COIN,
            hard_fork_rule2_upper_limit_min_balance: 100_000_000 * COIN,
            restricted_addresses: RestrictedAddressList::default(),
            privileged_address: String::new(),
            rule_change_activation_threshold: 108,
            miner_confirmation_window: 144,
            deployments: Deployments::new(
                deployment(28, 0, Bip9Deployment::NO_TIMEOUT),
                deployment(0, 0, Bip9Deployment::NO_TIMEOUT),
                deployment(1, Bip9Deployment::ALWAYS_ACTIVE, Bip9Deployment::NO_TIMEOUT),
            ),
            pow_limit: U256::from_big_endian(&hex!(
                "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            )),
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,
            pow_target_spacing_v1: 60,
            pow_target_spacing_v2: 60,
            pow_target_spacing_v3: 60,
            // 3.5 days
            pow_target_timespan: 302_400,
            coinbase_maturity: REGTEST_COINBASE_MATURITY,
            coinbase_maturity2: REGTEST_COINBASE_MATURITY,
            minimum_chain_work: U256::zero(),
            default_assume_valid: NULL_HASH,
            checkpoints: checkpoints(REGTEST_CHECKPOINTS),
            chain_tx_data: ChainTxData::default(),
        };

        Self::finish(ChainParams {
            network: Network::Regtest,
            consensus,
            message_start: Network::Regtest.message_start(),
            default_port: Network::Regtest.default_port(),
            prune_after_height: 1000,
            genesis,
            dns_seeds: Vec::new(),
            fixed_seeds: Vec::new(),
            base58_prefixes: TEST_BASE58_PREFIXES,
            bech32_hrp: "rltc".to_string(),
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
        })
    }

    pub fn network_id(&self) -> &'static str {
        self.network.id()
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.prefix(kind)
    }

    pub fn checkpoints(&self) -> &CheckpointData {
        &self.consensus.checkpoints
    }

    pub fn chain_tx_data(&self) -> &ChainTxData {
        &self.consensus.chain_tx_data
    }

    /// Magic to frame messages with for a peer speaking `protocol_version`.
    pub fn magic_for(&self, protocol_version: i32) -> [u8; 4] {
        self.message_start.magic_for(protocol_version)
    }

    pub fn is_recognized_magic(&self, candidate: &[u8; 4]) -> bool {
        self.message_start.is_recognized(candidate)
    }

    pub fn update_version_bits_parameters(
        &mut self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) {
        self.consensus
            .update_version_bits_parameters(pos, start_time, timeout);
    }

    fn finish(params: ChainParams) -> ChainParams {
        assert!(
            target_within_limit(params.genesis.header.bits, &params.consensus.pow_limit),
            "{} genesis bits {:#010x} exceed the proof-of-work limit",
            params.network,
            params.genesis.header.bits
        );
        debug!(
            "Built {} chain parameters: genesis {}, {} checkpoints",
            params.network,
            hash_to_hex(&params.consensus.hash_genesis_block),
            params.consensus.checkpoints.len()
        );
        params
    }
}

/// Testnet and regtest share their address prefixes.
const TEST_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: 111,
    script_address: 196,
    script_address2: 58,
    secret_key: 239,
    ext_public_key: [0x04, 0x35, 0x87, 0xcf],
    ext_secret_key: [0x04, 0x35, 0x83, 0x94],
};

fn checked_genesis(
    network: Network,
    params: GenesisParams,
    expected_hash: Hash,
    expected_merkle_root: Hash,
) -> Block {
    let genesis = create_lynx_genesis_block(params);
    assert!(
        genesis.header.merkle_root == expected_merkle_root,
        "{} genesis merkle root mismatch: got {}",
        network,
        hash_to_hex(&genesis.header.merkle_root)
    );
    assert!(
        genesis.hash() == expected_hash,
        "{} genesis hash mismatch: got {}",
        network,
        hash_to_hex(&genesis.hash())
    );
    genesis
}

fn deployment(bit: u8, start_time: i64, timeout: i64) -> Bip9Deployment {
    compiled_in("deployment", Bip9Deployment::new(bit, start_time, timeout))
}

fn checkpoints(entries: &[(Height, Hash)]) -> CheckpointData {
    compiled_in("checkpoints", CheckpointData::new(entries))
}

// Every listed address shares the same caps and fee limit on a network.
fn restricted(
    entries: &[(Height, &str)],
    max_to_privileged: Amount,
    max_to_other: Amount,
) -> RestrictedAddressList {
    let entries = entries
        .iter()
        .map(|&(activation_height, address)| RestrictedAddress {
            activation_height,
            address: address.to_string(),
            max_transfer_to_privileged_address: max_to_privileged,
            max_transfer_to_other_address: max_to_other,
            max_fee: COIN / 10,
        })
        .collect();
    compiled_in("restricted addresses", RestrictedAddressList::new(entries))
}

fn compiled_in<T>(what: &str, result: Result<T, ConsensusError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("invalid compiled-in {}: {}", what, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_by_name() {
        assert_eq!(create_chain_params("main").unwrap().network, Network::Main);
        assert_eq!(create_chain_params("test").unwrap().network, Network::Test);
        assert_eq!(
            create_chain_params("regtest").unwrap().network_id(),
            "regtest"
        );
        assert_eq!(
            create_chain_params("bogus"),
            Err(ChainParamsError::UnknownChain("bogus".to_string()))
        );
    }

    #[test]
    fn test_chain_name_from_flags() {
        assert_eq!(chain_name_from_flags(false, false), Ok("main"));
        assert_eq!(chain_name_from_flags(true, false), Ok("test"));
        assert_eq!(chain_name_from_flags(false, true), Ok("regtest"));
        assert_eq!(
            chain_name_from_flags(true, true),
            Err(ChainParamsError::InvalidChainFlags)
        );
    }

    #[test]
    fn test_main_profile() {
        let params = ChainParams::main();
        assert_eq!(params.default_port, 22566);
        assert_eq!(params.prune_after_height, 100_000);
        assert_eq!(params.dns_seeds.len(), 5);
        assert_eq!(params.dns_seeds[0], "node01.getlynx.io");
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[45]);
        assert_eq!(params.bech32_hrp, "ltc");
        assert!(params.require_standard);
        assert_eq!(params.checkpoints().len(), 308);
        assert_eq!(params.consensus.minimum_chain_work, U256::from(9_048_453_216_950_898u64));
        assert_eq!(params.consensus.restricted_addresses.entries().len(), 2);
    }

    #[test]
    fn test_testnet_profile() {
        let params = ChainParams::testnet();
        assert_eq!(params.consensus.hard_fork_rule2_lower_limit_min_balance, 100_000);
        assert_eq!(
            hash_to_hex(&params.consensus.bip34_hash),
            "8075c771ed8b495ffd943980a95f702ab34fce3c8c54e379548bda33cc8c0573"
        );
        assert_eq!(params.checkpoints().len(), 7);
        assert_eq!(params.chain_tx_data().tx_count, 37_581);
        assert!(params.dns_seeds.is_empty());
        assert_eq!(params.base58_prefix(Base58Type::SecretKey), &[239]);
    }

    #[test]
    fn test_regtest_profile() {
        let params = ChainParams::regtest();
        assert!(params.mine_blocks_on_demand);
        assert!(params.default_consistency_checks);
        assert!(params.consensus.pow_no_retargeting);
        assert!(params.consensus.restricted_addresses.is_empty());
        assert!(params
            .consensus
            .deployment_is_always_active(DeploymentPos::Segwit));
        assert_eq!(params.consensus.difficulty_adjustment_interval(0), 5040);
    }
}
