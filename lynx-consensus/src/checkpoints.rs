//! Hard-coded checkpoints and chain transaction statistics.

use std::collections::BTreeMap;

use lynx_shared_types::{Hash, Height};
use serde::{Deserialize, Serialize};

use crate::error::ConsensusError;

/// Serialized as ascending `(height, hash)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Height, Hash)>", into = "Vec<(Height, Hash)>")]
pub struct CheckpointData {
    checkpoints: BTreeMap<Height, Hash>,
}

impl CheckpointData {
    /// Builds the checkpoint map from `(height, hash)` pairs in ascending height order.
    pub fn new(entries: &[(Height, Hash)]) -> Result<Self, ConsensusError> {
        for pair in entries.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(ConsensusError::UnsortedCheckpoints {
                    previous: pair[0].0,
                    height: pair[1].0,
                });
            }
        }
        Ok(CheckpointData {
            checkpoints: entries.iter().copied().collect(),
        })
    }

    /// Expected block hash at `height`, if that height is checkpointed.
    pub fn checkpoint_at(&self, height: Height) -> Option<&Hash> {
        self.checkpoints.get(&height)
    }

    /// Whether a block at `height` with `hash` agrees with the checkpoints.
    /// Heights without a checkpoint always agree.
    pub fn check_block(&self, height: Height, hash: &Hash) -> bool {
        self.checkpoint_at(height)
            .map_or(true, |expected| expected == hash)
    }

    /// The highest checkpoint.
    pub fn last_checkpoint(&self) -> Option<(Height, &Hash)> {
        self.checkpoints
            .iter()
            .next_back()
            .map(|(height, hash)| (*height, hash))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Height, &Hash)> {
        self.checkpoints.iter().map(|(height, hash)| (*height, hash))
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

impl TryFrom<Vec<(Height, Hash)>> for CheckpointData {
    type Error = ConsensusError;

    fn try_from(entries: Vec<(Height, Hash)>) -> Result<Self, Self::Error> {
        CheckpointData::new(&entries)
    }
}

impl From<CheckpointData> for Vec<(Height, Hash)> {
    fn from(data: CheckpointData) -> Self {
        data.checkpoints.into_iter().collect()
    }
}

/// Transaction statistics at a known point of the chain, used to estimate
/// sync progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainTxData {
    /// UNIX timestamp of the last known transaction count.
    pub time: i64,
    /// Total number of transactions between genesis and `time`.
    pub tx_count: i64,
    /// Estimated transactions per second after `time`.
    pub tx_rate: f64,
}

impl ChainTxData {
    /// Estimated total transaction count at `now`.
    pub fn estimated_tx_count(&self, now: i64) -> f64 {
        let elapsed = now.saturating_sub(self.time).max(0) as f64;
        self.tx_count as f64 + elapsed * self.tx_rate
    }

    /// Fraction of the estimated chain covered by `processed_tx_count`
    /// transactions, capped at 1.
    pub fn verification_progress(&self, processed_tx_count: i64, now: i64) -> f64 {
        let estimated = self.estimated_tx_count(now);
        if estimated <= 0.0 {
            return 1.0;
        }
        (processed_tx_count as f64 / estimated).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_lookup() {
        let data = CheckpointData::new(&[(1000, [1u8; 32]), (10_000, [2u8; 32])]).unwrap();
        assert_eq!(data.checkpoint_at(1000), Some(&[1u8; 32]));
        assert_eq!(data.checkpoint_at(1001), None);
        assert_eq!(data.last_checkpoint(), Some((10_000, &[2u8; 32])));
        assert!(data.check_block(1000, &[1u8; 32]));
        assert!(!data.check_block(1000, &[9u8; 32]));
        assert!(data.check_block(5000, &[9u8; 32]));
    }

    #[test]
    fn test_checkpoints_must_ascend() {
        assert_eq!(
            CheckpointData::new(&[(10, [0u8; 32]), (5, [0u8; 32])]),
            Err(ConsensusError::UnsortedCheckpoints {
                previous: 10,
                height: 5
            })
        );
    }

    #[test]
    fn test_deserialize_checks_order() {
        let data = CheckpointData::new(&[(0, [1u8; 32]), (10, [2u8; 32])]).unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(serde_json::from_value::<CheckpointData>(json).unwrap(), data);

        let unsorted = serde_json::to_value(vec![(10, [0u8; 32]), (5, [0u8; 32])]).unwrap();
        assert!(serde_json::from_value::<CheckpointData>(unsorted).is_err());
        let repeated = serde_json::to_value(vec![(5, [0u8; 32]), (5, [1u8; 32])]).unwrap();
        assert!(serde_json::from_value::<CheckpointData>(repeated).is_err());
    }

    #[test]
    fn test_tx_count_estimate() {
        let data = ChainTxData {
            time: 1_369_685_559,
            tx_count: 37_581,
            tx_rate: 300.0,
        };
        assert_eq!(data.estimated_tx_count(1_369_685_559), 37_581.0);
        assert_eq!(data.estimated_tx_count(1_369_685_569), 40_581.0);
        assert_eq!(data.estimated_tx_count(0), 37_581.0);
        assert_eq!(data.verification_progress(37_581, 1_369_685_559), 1.0);
        assert_eq!(ChainTxData::default().verification_progress(0, 0), 1.0);
        assert_eq!(data.estimated_tx_count(i64::MIN), 37_581.0);
        assert!(data.estimated_tx_count(i64::MAX) > 37_581.0);
    }
}
