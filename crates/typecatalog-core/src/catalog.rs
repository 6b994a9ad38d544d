//! # Catalog Construction
//!
//! ## Purpose
//! Builds the implementation catalog: the set of concrete, instantiable
//! class records declared by a list of modules. Module scans are fault
//! tolerant; a module whose provider fails is recorded as a failure and the
//! build carries on with the remaining modules, so one broken module never
//! hides every other module's types.
//!
//! ## Key Components
//! | Component | Description |
//! |-----------|-------------|
//! | `Catalog::build` | Scan a module list into a catalog, absorbing per-module failures |
//! | `Catalog::global` | Shared catalog over the process registry, built once on first access |
//! | `Catalog::get` / `get_by_name` | Lookup of implementation records |
//! | `Catalog::failed_modules` | Scan failures captured during the build |
//!
//! ## Usage
//! ```ignore
//! let catalog = Catalog::build(registry::snapshot());
//! for record in catalog.implementation_types() {
//!     println!("{}", record.ident().name());
//! }
//! for failure in catalog.failed_modules() {
//!     eprintln!("skipped {failure}");
//! }
//! ```

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use tracing::debug;

use typecatalog_types::{Module, ScanFailure, TypeDescriptor};

use crate::registry;

static GLOBAL_CATALOG: OnceLock<Catalog> = OnceLock::new();

pub(crate) fn global_is_built() -> bool {
    GLOBAL_CATALOG.get().is_some()
}

/// Immutable catalog of concrete class records.
///
/// Built once from a module list and never mutated afterwards; lookups by
/// `TypeId` and by display name are index-backed.
#[derive(Debug)]
pub struct Catalog {
    types: Vec<TypeDescriptor>,
    by_id: HashMap<TypeId, usize>,
    by_name: HashMap<String, usize>,
    failures: Vec<ScanFailure>,
    built_at: DateTime<Utc>,
}

impl Catalog {
    /// Build a catalog by scanning the given modules.
    ///
    /// Each module's provider runs exactly once. Providers that fail are
    /// captured in [`Catalog::failed_modules`] and do not affect the
    /// records contributed by other modules. Only concrete class records
    /// survive the scan; abstract classes, interfaces, and value records
    /// are filtered out. When two modules declare the same Rust type, the
    /// first registration wins.
    pub fn build(modules: impl IntoIterator<Item = Module>) -> Self {
        let mut types: Vec<TypeDescriptor> = Vec::new();
        let mut by_id: HashMap<TypeId, usize> = HashMap::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut failures: Vec<ScanFailure> = Vec::new();
        let mut scanned = 0usize;

        for module in modules {
            scanned += 1;
            let declared = match module.declared_types() {
                Ok(declared) => {
                    debug!(
                        module = %module.name(),
                        declared = declared.len(),
                        "module scanned"
                    );
                    declared
                }
                Err(e) => {
                    debug!(module = %module.name(), error = %e, "module scan failed");
                    failures.push(ScanFailure::new(module.name(), e));
                    continue;
                }
            };

            for record in declared {
                if !record.is_concrete_class() {
                    continue;
                }
                let id = record.ident().id();
                if by_id.contains_key(&id) {
                    debug!(
                        type_name = %record.ident().name(),
                        module = %module.name(),
                        "duplicate type registration ignored"
                    );
                    continue;
                }
                let index = types.len();
                by_id.insert(id, index);
                // First registration also wins on display-name collisions
                by_name
                    .entry(record.ident().name().to_string())
                    .or_insert(index);
                types.push(record);
            }
        }

        debug!(
            modules = scanned,
            implementations = types.len(),
            failed = failures.len(),
            "catalog built"
        );

        Self {
            types,
            by_id,
            by_name,
            failures,
            built_at: Utc::now(),
        }
    }

    /// Shared catalog over the process-wide registry.
    ///
    /// Built lazily on first access and never rebuilt; every later call
    /// returns the same instance. Modules must be registered through
    /// [`registry::register_module`] before the first access to be
    /// included.
    pub fn global() -> &'static Catalog {
        GLOBAL_CATALOG.get_or_init(|| {
            debug!(
                modules = registry::module_count(),
                "building shared catalog from registered modules"
            );
            Catalog::build(registry::snapshot())
        })
    }

    /// Concrete class records, in scan order.
    ///
    /// The order is deterministic for a given module list but callers
    /// should treat the set as unordered.
    pub fn implementation_types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    /// Number of implementation records in the catalog.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Record for the concrete type `T`, if cataloged.
    pub fn get<T: 'static>(&self) -> Option<&TypeDescriptor> {
        self.get_by_id(TypeId::of::<T>())
    }

    pub fn get_by_id(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.by_id.get(&id).map(|&index| &self.types[index])
    }

    /// Record whose display name matches exactly, if cataloged.
    pub fn get_by_name(&self, name: &str) -> Option<&TypeDescriptor> {
        self.by_name.get(name).map(|&index| &self.types[index])
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.by_id.contains_key(&TypeId::of::<T>())
    }

    /// Modules whose scan failed during this build, in scan order.
    pub fn failed_modules(&self) -> &[ScanFailure] {
        &self.failures
    }

    /// When this catalog was built.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}
