//! Integration tests for the three network profiles.

use hex_literal::hex;
use lynx_chainparams::{create_chain_params, ChainParams, MessageHeader, Network};
use lynx_consensus::{DeploymentPos, HardForkRule};
use lynx_shared_types::{hash_from_display_bytes, hash_to_hex, COIN};
use proptest::prelude::*;

#[test]
fn test_genesis_matches_consensus_hashes() {
    for network in Network::ALL {
        let params = ChainParams::for_network(network);
        assert_eq!(params.genesis.hash(), params.consensus.hash_genesis_block);
        assert_eq!(
            params.genesis.header.merkle_root,
            params.consensus.hash_genesis_merkle_root
        );
        println!(
            "✅ {} genesis {}",
            network,
            hash_to_hex(&params.consensus.hash_genesis_block)
        );
    }
}

#[test]
fn test_main_spacing_changes_only_at_hard_forks() {
    let main = ChainParams::main();
    let consensus = &main.consensus;
    assert_eq!(consensus.pow_target_spacing(126_250), 30);
    assert_eq!(consensus.pow_target_spacing(126_251), 60);
    assert_eq!(consensus.pow_target_spacing(1_711_675), 60);
    assert_eq!(consensus.pow_target_spacing(1_711_676), 30);
    assert_eq!(consensus.pow_target_spacing(1_838_000), 30);
    assert_eq!(consensus.pow_target_spacing(1_838_001), 30);

    assert_eq!(consensus.difficulty_adjustment_interval(0), 120);
    assert_eq!(consensus.difficulty_adjustment_interval(1_000_000), 60);
}

#[test]
fn test_main_rule_tables() {
    let consensus = ChainParams::main().consensus;
    assert_eq!(consensus.rule_value(HardForkRule::Rule1, 2_629_999), None);
    assert_eq!(consensus.rule_value(HardForkRule::Rule1, 2_630_000), Some(10));
    assert_eq!(consensus.rule_value(HardForkRule::Rule1, 2_729_999), Some(10));
    assert_eq!(consensus.rule_value(HardForkRule::Rule1, 2_730_000), Some(20));
    assert_eq!(consensus.rule_value(HardForkRule::Rule2, 3_000_000), Some(4));
    assert_eq!(consensus.rule_value(HardForkRule::Rule3, 2_939_999), Some(1));
}

#[test]
fn test_main_restrictions() {
    let consensus = ChainParams::main().consensus;
    let restricted = "KJ2MGS3jq4DPkVmE1ephMCbT7ojDcDSJRG";
    assert!(consensus.restriction_for(restricted, 2_819_999).is_none());

    let entry = consensus.restriction_for(restricted, 2_820_000).unwrap();
    assert_eq!(entry.max_transfer_to_privileged_address, 1_000_000_000 * COIN);
    assert_eq!(entry.max_transfer_to_other_address, 1_000_000 * COIN);
    assert_eq!(entry.max_fee, COIN / 10);

    assert!(consensus.is_restricted_transfer_allowed(
        restricted,
        &consensus.privileged_address,
        2_900_000,
        500_000_000 * COIN,
        COIN / 10,
    ));
    assert!(!consensus.is_restricted_transfer_allowed(
        restricted,
        "KSho9zUYrFdTPPxfF6ye9sLurgKygeUEzL",
        2_900_000,
        500_000_000 * COIN,
        COIN / 10,
    ));
    assert!(consensus
        .restriction_for(&consensus.privileged_address, 3_000_000)
        .is_none());
}

#[test]
fn test_checkpoints() {
    let main = ChainParams::main();
    assert_eq!(
        main.consensus.checkpoint_at(100_000),
        Some(&hash_from_display_bytes(hex!(
            "85e878aa560cfc91a0cd15770377231d9a6617c718658ec64fdfaf50055ca72d"
        )))
    );
    assert_eq!(main.consensus.checkpoint_at(100_001), None);
    assert_eq!(main.checkpoints().last_checkpoint().map(|(h, _)| h), Some(2_842_300));

    let testnet = ChainParams::testnet();
    assert_eq!(
        testnet.consensus.checkpoint_at(255_000),
        Some(&hash_from_display_bytes(hex!(
            "4ed47783a897387a418e03cb5f85c8accdcbe3431ddbac316be48769064c7151"
        )))
    );

    let regtest = ChainParams::regtest();
    let heights: Vec<_> = regtest.checkpoints().iter().map(|(h, _)| h).collect();
    assert_eq!(heights, vec![0]);
    println!("✅ Regtest has exactly the height-0 checkpoint");
}

#[test]
fn test_deployments_per_network() {
    let main = ChainParams::main();
    let csv = main.consensus.deployment(DeploymentPos::Csv);
    assert_eq!((csv.bit, csv.start_time, csv.timeout), (0, 1_485_561_600, 1_517_356_801));

    let testnet = ChainParams::testnet();
    assert_eq!(
        testnet.consensus.deployment(DeploymentPos::Csv).start_time,
        1_483_228_800
    );

    let regtest = ChainParams::regtest();
    assert!(regtest
        .consensus
        .deployment_is_always_active(DeploymentPos::Segwit));
    assert!(!regtest
        .consensus
        .deployment_is_always_active(DeploymentPos::Csv));
    assert!(regtest
        .consensus
        .deployment(DeploymentPos::TestDummy)
        .never_times_out());
}

#[test]
fn test_message_framing_with_profile_magic() {
    let main = create_chain_params("main").unwrap();
    let header = MessageHeader::new(&main.message_start, 70002, "version", b"payload").unwrap();
    assert_eq!(header.magic, [0xc0, 0xc0, 0xc0, 0xc0]);
    assert!(main.is_recognized_magic(&header.magic));

    let decoded = MessageHeader::decode(&main.message_start, &header.encode()).unwrap();
    assert!(decoded.verify_checksum(b"payload"));

    let regtest = create_chain_params("regtest").unwrap();
    assert!(MessageHeader::decode(&regtest.message_start, &header.encode()).is_err());
    println!("✅ Legacy magic accepted on main, rejected on regtest");
}

#[test]
fn test_profiles_serialize() {
    let regtest = ChainParams::regtest();
    let json = serde_json::to_value(&regtest).unwrap();
    assert_eq!(json["network"], "regtest");
    assert_eq!(json["default_port"], 19444);
    assert_eq!(json["bech32_hrp"], "rltc");
}

#[test]
fn test_deserialized_profile_keeps_table_checks() {
    let main = ChainParams::main();
    let json = serde_json::to_value(&main).unwrap();
    let restored: ChainParams = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(restored, main);

    let mut bad_bit = json.clone();
    bad_bit["consensus"]["deployments"][0]["bit"] = 200.into();
    assert!(serde_json::from_value::<ChainParams>(bad_bit).is_err());

    let mut duplicated = json.clone();
    let first = duplicated["consensus"]["restricted_addresses"][0].clone();
    duplicated["consensus"]["restricted_addresses"]
        .as_array_mut()
        .unwrap()
        .push(first);
    assert!(serde_json::from_value::<ChainParams>(duplicated).is_err());

    let mut unsorted = json;
    unsorted["consensus"]["hard_fork_rule1_params"]
        .as_array_mut()
        .unwrap()
        .reverse();
    assert!(serde_json::from_value::<ChainParams>(unsorted).is_err());
}

proptest! {
    #[test]
    fn test_spacing_only_takes_configured_values(height in -1i32..4_000_000) {
        let main = ChainParams::main();
        let spacing = main.consensus.pow_target_spacing(height);
        let expected = if height <= 126_250 {
            30
        } else if height <= 1_711_675 {
            60
        } else {
            30
        };
        prop_assert_eq!(spacing, expected);
        prop_assert_eq!(
            main.consensus.difficulty_adjustment_interval(height),
            3600 / expected
        );
    }

    #[test]
    fn test_maturity_switches_at_second_fork(height in 0i32..4_000_000) {
        let main = ChainParams::main();
        let expected = if height <= 1_711_675 {
            main.consensus.coinbase_maturity
        } else {
            main.consensus.coinbase_maturity2
        };
        prop_assert_eq!(main.consensus.coinbase_maturity_at(height), expected);
    }
}
