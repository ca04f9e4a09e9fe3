use lynx_shared_types::{Amount, Hash, Height};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::checkpoints::{ChainTxData, CheckpointData};
use crate::deployment::{Bip9Deployment, DeploymentPos, Deployments};
use crate::height_rules::{HardForkRule, HeightRuleTable};
use crate::restrictions::{RestrictedAddress, RestrictedAddressList};

/// Coinbase maturity on main before the second hard fork.
pub const COINBASE_MATURITY: Height = 30;
/// Coinbase maturity on main after the second hard fork.
pub const COINBASE_MATURITY2: Height = 100;
pub const TESTNET_COINBASE_MATURITY: Height = 100;
pub const REGTEST_COINBASE_MATURITY: Height = 100;

/// Consensus rules of one network.
///
/// Heights use `-1` for "active from genesis" and a height beyond the
/// chain for "never".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash,
    pub hash_genesis_merkle_root: Hash,
    pub subsidy_halving_interval: Height,

    /// Block height and hash at which BIP34 becomes active
    pub bip34_height: Height,
    pub bip34_hash: Hash,
    /// Block height at which BIP65 becomes active
    pub bip65_height: Height,
    /// Block height at which BIP66 becomes active
    pub bip66_height: Height,

    pub hard_fork_height: Height,
    pub hard_fork2_height: Height,
    pub hard_fork3_height: Height,

    pub hard_fork_rule1_params: HeightRuleTable,
    pub hard_fork_rule2_params: HeightRuleTable,
    pub hard_fork_rule3_params: HeightRuleTable,
    /// Number of previous blocks averaged for the rule 2 difficulty.
    pub hard_fork_rule2_difficulty_prev_block_count: i32,
    pub hard_fork_rule2_lower_limit_min_balance: Amount,
    pub hard_fork_rule2_upper_limit_min_balance: Amount,

    pub restricted_addresses: RestrictedAddressList,
    /// The only destination a restricted address may move large amounts to.
    pub privileged_address: String,

    /// Minimum blocks including a miner confirmation of the total of
    /// `miner_confirmation_window` blocks in a retargeting period, required
    /// to change a rule.
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: Deployments,

    pub pow_limit: U256,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    pub pow_target_spacing_v1: i64,
    pub pow_target_spacing_v2: i64,
    pub pow_target_spacing_v3: i64,
    pub pow_target_timespan: i64,

    pub coinbase_maturity: Height,
    pub coinbase_maturity2: Height,

    pub minimum_chain_work: U256,
    pub default_assume_valid: Hash,

    pub checkpoints: CheckpointData,
    pub chain_tx_data: ChainTxData,
}

impl ConsensusParams {
    /// Target seconds between blocks at `height`.
    pub fn pow_target_spacing(&self, height: Height) -> i64 {
        if height <= self.hard_fork_height {
            self.pow_target_spacing_v1
        } else if height <= self.hard_fork2_height {
            self.pow_target_spacing_v2
        } else {
            self.pow_target_spacing_v3
        }
    }

    /// Confirmations a coinbase created at `height` needs before it can be spent.
    pub fn coinbase_maturity_at(&self, height: Height) -> Height {
        if height <= self.hard_fork2_height {
            self.coinbase_maturity
        } else {
            self.coinbase_maturity2
        }
    }

    /// Blocks per retargeting period at `height`.
    pub fn difficulty_adjustment_interval(&self, height: Height) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing(height)
    }

    pub fn rule_table(&self, rule: HardForkRule) -> &HeightRuleTable {
        match rule {
            HardForkRule::Rule1 => &self.hard_fork_rule1_params,
            HardForkRule::Rule2 => &self.hard_fork_rule2_params,
            HardForkRule::Rule3 => &self.hard_fork_rule3_params,
        }
    }

    /// Value of `rule` at `height`, `None` before its first breakpoint.
    pub fn rule_value(&self, rule: HardForkRule, height: Height) -> Option<i32> {
        self.rule_table(rule).value_at(height)
    }

    pub fn restriction_for(&self, address: &str, height: Height) -> Option<&RestrictedAddress> {
        self.restricted_addresses.restriction_for(address, height)
    }

    /// Whether a spend from `from` at `height` respects its restriction.
    /// Unrestricted addresses are always allowed.
    pub fn is_restricted_transfer_allowed(
        &self,
        from: &str,
        destination: &str,
        height: Height,
        amount: Amount,
        fee: Amount,
    ) -> bool {
        match self.restriction_for(from, height) {
            Some(restriction) => {
                restriction.permits_transfer(destination, &self.privileged_address, amount, fee)
            }
            None => true,
        }
    }

    pub fn checkpoint_at(&self, height: Height) -> Option<&Hash> {
        self.checkpoints.checkpoint_at(height)
    }

    pub fn deployment(&self, pos: DeploymentPos) -> &Bip9Deployment {
        self.deployments.get(pos)
    }

    pub fn deployment_is_always_active(&self, pos: DeploymentPos) -> bool {
        self.deployment(pos).is_always_active()
    }

    /// Replaces the signalling window of `pos`.
    pub fn update_version_bits_parameters(
        &mut self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) {
        log::warn!(
            "Overriding deployment {} window: start={} timeout={}",
            pos,
            start_time,
            timeout
        );
        self.deployments.set_window(pos, start_time, timeout);
    }
}
