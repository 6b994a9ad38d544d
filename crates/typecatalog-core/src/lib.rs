//! Catalog construction, module registry, and factory synthesis.
//!
//! This crate holds the moving parts of the typecatalog workspace:
//!
//! - [`registry`] - process-wide module registration
//! - [`catalog`] - fault-tolerant catalog builds and the shared catalog
//! - [`factory`] - one-time-validated factories over cataloged constructors
//! - [`report`] - serializable build summaries with content fingerprints
//!
//! The shared type vocabulary from `typecatalog-types` is re-exported at
//! the crate root, so most callers need only this crate.

pub mod catalog;
pub mod errors;
pub mod factory;
mod macros;
pub mod registry;
pub mod report;

pub use catalog::Catalog;
pub use errors::FactoryError;
pub use factory::{AnyFactory, Factory};
pub use report::{CatalogReport, FailedModuleEntry, TypeEntry};

// Re-export the shared type vocabulary so downstream crates need a single import
pub use typecatalog_types::{
    AnyCtorFn, Binding, ClassBuilder, ConstructorBuilder, ConstructorDescriptor, CtorFn, Module,
    ParamSet, ScanFailure, TypeDescriptor, TypeIdent, TypeKind,
};
