//! Shared store context handle
//!
//! One `StoreContext` is shared by every service built over it. Reads take
//! the lock shared, mutations take it exclusively. A lock poisoned by a
//! panicking writer is reported as a `Concurrency` error.

use personnel_core::{ExError, PersonnelError, StoreContext};
use personnel_store::errors::Result;
use personnel_store::seed::{load_seed_file, LoadedSeed};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type SharedContext = Arc<RwLock<StoreContext>>;

/// Wrap a context for sharing between services
pub fn shared_context(ctx: StoreContext) -> SharedContext {
    Arc::new(RwLock::new(ctx))
}

/// Load a seed file into a fresh shared context
///
/// Returns the loaded seed metadata alongside the handle; the seed's own
/// context is moved into the handle.
pub fn load_shared_context(path: &Path) -> Result<(LoadedSeed, SharedContext)> {
    let mut loaded = load_seed_file(path)?;
    let ctx = std::mem::take(&mut loaded.context);
    Ok((loaded, shared_context(ctx)))
}

pub(crate) fn read(ctx: &SharedContext) -> Result<RwLockReadGuard<'_, StoreContext>> {
    ctx.read().map_err(|e| {
        ExError::from(PersonnelError::ContextUnavailable {
            message: e.to_string(),
        })
    })
}

pub(crate) fn write(ctx: &SharedContext) -> Result<RwLockWriteGuard<'_, StoreContext>> {
    ctx.write().map_err(|e| {
        ExError::from(PersonnelError::ContextUnavailable {
            message: e.to_string(),
        })
    })
}
