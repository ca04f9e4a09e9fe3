//! Transfer restrictions on listed addresses.
//!
//! From its activation height a restricted address may only send up to
//! fixed caps: a large cap towards the privileged address and a small one
//! towards anything else. Enforcement belongs to transaction validation;
//! this module only answers the lookup.

use std::collections::HashSet;

use lynx_shared_types::{Amount, Height};
use serde::{Deserialize, Serialize};

use crate::error::ConsensusError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictedAddress {
    pub activation_height: Height,
    pub address: String,
    pub max_transfer_to_privileged_address: Amount,
    /// Kept non-zero so the address can still pay ordinary fees and change.
    pub max_transfer_to_other_address: Amount,
    pub max_fee: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RestrictedAddress>", into = "Vec<RestrictedAddress>")]
pub struct RestrictedAddressList {
    entries: Vec<RestrictedAddress>,
}

impl RestrictedAddressList {
    /// Builds the list, rejecting an address listed more than once.
    pub fn new(entries: Vec<RestrictedAddress>) -> Result<Self, ConsensusError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.address.as_str()) {
                return Err(ConsensusError::DuplicateRestrictedAddress(
                    entry.address.clone(),
                ));
            }
        }
        Ok(RestrictedAddressList { entries })
    }

    /// The restriction in force for `address` at `height`, if any.
    pub fn restriction_for(&self, address: &str, height: Height) -> Option<&RestrictedAddress> {
        self.entries
            .iter()
            .find(|entry| entry.address == address)
            .filter(|entry| height >= entry.activation_height)
    }

    pub fn entries(&self) -> &[RestrictedAddress] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<RestrictedAddress>> for RestrictedAddressList {
    type Error = ConsensusError;

    fn try_from(entries: Vec<RestrictedAddress>) -> Result<Self, Self::Error> {
        RestrictedAddressList::new(entries)
    }
}

impl From<RestrictedAddressList> for Vec<RestrictedAddress> {
    fn from(list: RestrictedAddressList) -> Self {
        list.entries
    }
}

impl RestrictedAddress {
    /// Checks a spend from this address against its caps.
    ///
    /// `amount` is the value sent to `destination`, `fee` the transaction fee.
    pub fn permits_transfer(
        &self,
        destination: &str,
        privileged_address: &str,
        amount: Amount,
        fee: Amount,
    ) -> bool {
        let cap = if destination == privileged_address {
            self.max_transfer_to_privileged_address
        } else {
            self.max_transfer_to_other_address
        };
        amount <= cap && fee <= self.max_fee
    }
}
