//! Process-wide module registry.
//!
//! Modules self-register here (typically from their crate's init path) and
//! are picked up by [`Catalog::global()`](crate::Catalog::global) on its
//! first access. Explicit [`Catalog::build`](crate::Catalog::build) calls
//! can consume a [`snapshot`] of the registry, or any other module list,
//! which keeps catalog construction testable without process-global state.

use std::sync::LazyLock;

use parking_lot::RwLock;
use tracing::debug;

use typecatalog_types::Module;

static MODULES: LazyLock<RwLock<Vec<Module>>> = LazyLock::new(|| RwLock::new(Vec::new()));

/// Register a module for inclusion in catalog builds.
///
/// Modules registered after the shared catalog has been built are still
/// recorded and visible to [`snapshot`] and explicit builds, but
/// `Catalog::global()` will not reflect them.
pub fn register_module(module: Module) {
    if crate::catalog::global_is_built() {
        debug!(
            module = %module.name(),
            "module registered after shared catalog build; not visible through Catalog::global()"
        );
    }
    MODULES.write().push(module);
}

/// Snapshot of all registered modules, in registration order.
pub fn snapshot() -> Vec<Module> {
    MODULES.read().clone()
}

/// Number of modules registered so far.
pub fn module_count() -> usize {
    MODULES.read().len()
}

/// Whether the shared catalog has already been built.
pub fn is_global_built() -> bool {
    crate::catalog::global_is_built()
}
