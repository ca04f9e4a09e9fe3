//! Height-gated rule tables.
//!
//! A table is a list of `(height, value)` breakpoints with strictly
//! increasing heights. The value in force at a height is the one attached
//! to the last breakpoint at or below it; before the first breakpoint the
//! rule is inactive and lookups return `None`.

use std::fmt;

use lynx_shared_types::Height;
use serde::{Deserialize, Serialize};

use crate::error::ConsensusError;

/// The three height-gated staking rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HardForkRule {
    /// How many previous blocks an address must not have won.
    Rule1,
    /// Exponent of the minimum-balance computation.
    Rule2,
    /// Number of characters compared between address and block hash.
    Rule3,
}

impl fmt::Display for HardForkRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardForkRule::Rule1 => f.write_str("rule1"),
            HardForkRule::Rule2 => f.write_str("rule2"),
            HardForkRule::Rule3 => f.write_str("rule3"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightRule {
    pub height: Height,
    pub value: i32,
}

/// Serialized as its breakpoint list; deserializing goes through [`HeightRuleTable::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HeightRule>", into = "Vec<HeightRule>")]
pub struct HeightRuleTable {
    rules: Vec<HeightRule>,
}

impl HeightRuleTable {
    /// Builds a table, rejecting breakpoints that are not strictly increasing.
    pub fn new(rules: Vec<HeightRule>) -> Result<Self, ConsensusError> {
        for pair in rules.windows(2) {
            if pair[1].height <= pair[0].height {
                return Err(ConsensusError::UnsortedRuleTable {
                    previous: pair[0].height,
                    height: pair[1].height,
                });
            }
        }
        Ok(HeightRuleTable { rules })
    }

    /// Builds a table from compiled-in `(height, value)` literals.
    ///
    /// # Panics
    ///
    /// Panics if the heights are not strictly increasing; the literals are
    /// part of the binary and cannot be corrected at runtime.
    pub fn from_literals(breakpoints: &[(Height, i32)]) -> Self {
        let rules = breakpoints
            .iter()
            .map(|&(height, value)| HeightRule { height, value })
            .collect();
        match Self::new(rules) {
            Ok(table) => table,
            Err(err) => panic!("invalid compiled-in rule table: {err}"),
        }
    }

    /// Value of the last breakpoint at or below `height`.
    pub fn value_at(&self, height: Height) -> Option<i32> {
        let idx = self.rules.partition_point(|rule| rule.height <= height);
        idx.checked_sub(1).map(|i| self.rules[i].value)
    }

    /// Height of the first breakpoint, where the rule starts applying.
    pub fn activation_height(&self) -> Option<Height> {
        self.rules.first().map(|rule| rule.height)
    }

    pub fn rules(&self) -> &[HeightRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<Vec<HeightRule>> for HeightRuleTable {
    type Error = ConsensusError;

    fn try_from(rules: Vec<HeightRule>) -> Result<Self, Self::Error> {
        HeightRuleTable::new(rules)
    }
}

impl From<HeightRuleTable> for Vec<HeightRule> {
    fn from(table: HeightRuleTable) -> Self {
        table.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mainnet_rule1() -> HeightRuleTable {
        HeightRuleTable::from_literals(&[
            (2_630_000, 10),
            (2_730_000, 20),
            (2_780_000, 30),
            (2_800_000, 40),
            (2_820_000, 50),
        ])
    }

    #[test]
    fn test_value_at_breakpoints() {
        let table = mainnet_rule1();
        assert_eq!(table.value_at(2_629_999), None);
        assert_eq!(table.value_at(2_630_000), Some(10));
        assert_eq!(table.value_at(2_729_999), Some(10));
        assert_eq!(table.value_at(2_730_000), Some(20));
        assert_eq!(table.value_at(i32::MAX), Some(50));
        assert_eq!(table.value_at(-1), None);
    }

    #[test]
    fn test_empty_table_is_never_active() {
        let table = HeightRuleTable::default();
        assert!(table.is_empty());
        assert_eq!(table.value_at(0), None);
        assert_eq!(table.activation_height(), None);
    }

    #[test]
    fn test_rejects_unsorted_breakpoints() {
        let result = HeightRuleTable::new(vec![
            HeightRule { height: 10, value: 1 },
            HeightRule { height: 10, value: 2 },
        ]);
        assert_eq!(
            result,
            Err(ConsensusError::UnsortedRuleTable {
                previous: 10,
                height: 10
            })
        );
    }

    #[test]
    #[should_panic(expected = "invalid compiled-in rule table")]
    fn test_literals_must_be_sorted() {
        HeightRuleTable::from_literals(&[(20, 1), (10, 2)]);
    }

    #[test]
    fn test_deserialize_checks_order() {
        let table: HeightRuleTable =
            serde_json::from_str(r#"[{"height":10,"value":1},{"height":20,"value":2}]"#).unwrap();
        assert_eq!(table.value_at(15), Some(1));
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            serde_json::json!([{"height": 10, "value": 1}, {"height": 20, "value": 2}])
        );

        let unsorted =
            serde_json::from_str::<HeightRuleTable>(r#"[{"height":20,"value":1},{"height":10,"value":2}]"#);
        assert!(unsorted.is_err());
    }

    proptest! {
        #[test]
        fn test_value_at_matches_linear_scan(height in -10i32..3_000_000) {
            let table = mainnet_rule1();
            let expected = table
                .rules()
                .iter()
                .rev()
                .find(|rule| rule.height <= height)
                .map(|rule| rule.value);
            prop_assert_eq!(table.value_at(height), expected);
        }

        #[test]
        fn test_value_is_monotonic_for_increasing_table(a in 0i32..3_000_000, b in 0i32..3_000_000) {
            let table = mainnet_rule1();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(table.value_at(lo) <= table.value_at(hi));
        }
    }
}
