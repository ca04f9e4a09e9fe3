//! Selection of the active chain parameters.
//!
//! A [`ParamsRegistry`] holds at most one selected profile. Readers get an
//! `Arc` snapshot and never hold the lock while using it. A deployment
//! override clones the profile if snapshots are still alive, so earlier
//! readers keep the values they started with.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::info;
use lynx_consensus::{Bip9Deployment, DeploymentPos};

use crate::chainparams::{create_chain_params, ChainParams};
use crate::error::{ChainParamsError, ChainParamsResult};
use crate::protocol::Network;
use crate::vbparams::VersionBitsOverride;

#[derive(Debug, Default)]
pub struct ParamsRegistry {
    selected: RwLock<Option<Arc<ChainParams>>>,
}

impl ParamsRegistry {
    pub const fn new() -> Self {
        ParamsRegistry {
            selected: RwLock::new(None),
        }
    }

    /// Builds the profile for `chain` and installs it.
    pub fn select(&self, chain: &str) -> ChainParamsResult<Arc<ChainParams>> {
        let params = create_chain_params(chain)?;
        self.install(params)
    }

    /// Installs an already built profile. Selection happens once.
    pub fn install(&self, params: ChainParams) -> ChainParamsResult<Arc<ChainParams>> {
        let mut selected = self.write();
        if let Some(existing) = selected.as_ref() {
            return Err(ChainParamsError::AlreadySelected(
                existing.network_id().to_string(),
            ));
        }
        let params = Arc::new(params);
        *selected = Some(Arc::clone(&params));
        info!("Selected {} chain parameters", params.network);
        Ok(params)
    }

    pub fn is_selected(&self) -> bool {
        self.read().is_some()
    }

    pub fn try_current(&self) -> Option<Arc<ChainParams>> {
        self.read().clone()
    }

    /// The selected profile.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been selected yet.
    pub fn current(&self) -> Arc<ChainParams> {
        match self.try_current() {
            Some(params) => params,
            None => panic!("chain parameters read before a network was selected"),
        }
    }

    /// Replaces one deployment window of the selected profile.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been selected yet.
    pub fn update_version_bits_parameters(
        &self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) {
        let mut selected = self.write();
        match selected.as_mut() {
            Some(params) => {
                Arc::make_mut(params).update_version_bits_parameters(pos, start_time, timeout)
            }
            None => panic!("version bits parameters updated before a network was selected"),
        }
    }

    /// Applies a parsed `-vbparams` override. Only regtest accepts them, and
    /// the new window must end after it starts unless it is always active.
    pub fn apply_override(&self, vb_override: &VersionBitsOverride) -> ChainParamsResult<()> {
        let current = self.current();
        if current.network != Network::Regtest {
            return Err(ChainParamsError::VbParamsNotAllowed(
                current.network.id().to_string(),
            ));
        }
        let bit = current.consensus.deployment(vb_override.deployment).bit;
        Bip9Deployment::new(bit, vb_override.start_time, vb_override.timeout)?;
        drop(current);
        self.update_version_bits_parameters(
            vb_override.deployment,
            vb_override.start_time,
            vb_override.timeout,
        );
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<ChainParams>>> {
        self.selected.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<ChainParams>>> {
        self.selected.write().unwrap_or_else(PoisonError::into_inner)
    }
}

static GLOBAL_PARAMS: ParamsRegistry = ParamsRegistry::new();

/// The process-wide registry.
pub fn global_registry() -> &'static ParamsRegistry {
    &GLOBAL_PARAMS
}

/// Selects the process-wide chain parameters. Fails on unknown names and
/// on a second call.
pub fn select_params(chain: &str) -> ChainParamsResult<Arc<ChainParams>> {
    GLOBAL_PARAMS.select(chain)
}

/// The process-wide chain parameters.
///
/// # Panics
///
/// Panics if [`select_params`] has not succeeded yet.
pub fn params() -> Arc<ChainParams> {
    GLOBAL_PARAMS.current()
}

pub fn update_version_bits_parameters(pos: DeploymentPos, start_time: i64, timeout: i64) {
    GLOBAL_PARAMS.update_version_bits_parameters(pos, start_time, timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lynx_consensus::ConsensusError;
    use std::thread;

    #[test]
    fn test_select_once() {
        let registry = ParamsRegistry::new();
        assert!(!registry.is_selected());
        assert_eq!(
            registry.select("bogus"),
            Err(ChainParamsError::UnknownChain("bogus".to_string()))
        );
        assert!(!registry.is_selected());

        let params = registry.select("regtest").unwrap();
        assert_eq!(params.network, Network::Regtest);
        assert_eq!(
            registry.select("main"),
            Err(ChainParamsError::AlreadySelected("regtest".to_string()))
        );
        assert_eq!(registry.current().network, Network::Regtest);
    }

    #[test]
    #[should_panic(expected = "read before a network was selected")]
    fn test_read_before_select_panics() {
        ParamsRegistry::new().current();
    }

    #[test]
    fn test_override_is_copy_on_write() {
        let registry = ParamsRegistry::new();
        let before = registry.select("regtest").unwrap();

        registry.update_version_bits_parameters(DeploymentPos::Csv, 100, 200);

        let after = registry.current();
        let csv = after.consensus.deployment(DeploymentPos::Csv);
        assert_eq!((csv.bit, csv.start_time, csv.timeout), (0, 100, 200));
        assert_eq!(before.consensus.deployment(DeploymentPos::Csv).start_time, 0);
    }

    #[test]
    fn test_override_only_on_regtest() {
        let registry = ParamsRegistry::new();
        registry.select("test").unwrap();
        let vb_override: VersionBitsOverride = "segwit:-1:9223372036854775807".parse().unwrap();
        assert_eq!(
            registry.apply_override(&vb_override),
            Err(ChainParamsError::VbParamsNotAllowed("test".to_string()))
        );

        let regtest = ParamsRegistry::new();
        regtest.select("regtest").unwrap();
        let vb_override: VersionBitsOverride = "testdummy:-1:9223372036854775807".parse().unwrap();
        regtest.apply_override(&vb_override).unwrap();
        let dummy = *regtest.current().consensus.deployment(DeploymentPos::TestDummy);
        assert_eq!(dummy.start_time, Bip9Deployment::ALWAYS_ACTIVE);
    }

    #[test]
    fn test_override_window_must_be_ordered() {
        let registry = ParamsRegistry::new();
        registry.select("regtest").unwrap();
        let vb_override: VersionBitsOverride = "csv:10:5".parse().unwrap();
        assert_eq!(
            registry.apply_override(&vb_override),
            Err(ChainParamsError::Consensus(
                ConsensusError::InvalidDeploymentWindow {
                    start_time: 10,
                    timeout: 5
                }
            ))
        );
        assert_eq!(
            registry
                .current()
                .consensus
                .deployment(DeploymentPos::Csv)
                .start_time,
            0
        );
    }

    #[test]
    fn test_snapshots_shared_across_threads() {
        let registry = Arc::new(ParamsRegistry::new());
        registry.select("main").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.current().consensus.pow_target_spacing(200_000))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 60);
        }
    }
}
