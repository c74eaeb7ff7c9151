//! Transport-agnostic application state.
//!
//! `CoreState` is the single shared state behind the REST layer: the
//! immutable reference catalogs plus the HPI drafting service. Everything
//! here is read-only after startup, so the state is shared through a plain
//! `Arc` with no locking.

use std::path::Path;

use crate::hpi::HpiService;
use crate::reference::{ReferenceError, ReferenceStore};

/// Shared application state.
///
/// Wrapped in `Arc` at startup; request handlers only read from it.
pub struct CoreState {
    /// Medication and provider catalogs, loaded once.
    pub reference: ReferenceStore,
    /// HPI drafting service (backend-backed or local drafts).
    pub hpi: HpiService,
}

impl CoreState {
    /// Build state for production: load catalogs from `data_dir`,
    /// configure generation from the environment.
    pub fn load(data_dir: &Path) -> Result<Self, ReferenceError> {
        Ok(Self {
            reference: ReferenceStore::load(data_dir)?,
            hpi: HpiService::from_env(),
        })
    }

    /// State with fixture catalogs and local-draft generation (tests).
    pub fn for_tests() -> Self {
        Self {
            reference: ReferenceStore::load_test(),
            hpi: HpiService::local_only(),
        }
    }
}
