//! Shared types for the typecatalog workspace.
//!
//! This crate provides the foundational vocabulary used across the
//! workspace: type identities, declared type records, constructor
//! descriptors, and module records with their scan failures.
//!
//! ## Declaring Types
//!
//! The [`descriptor`] module contains the record types modules declare:
//! - [`TypeDescriptor`](descriptor::TypeDescriptor) - A declared type: ident, kind, constructors
//! - [`ConstructorBuilder`](descriptor::ConstructorBuilder) - Typed constructor capture with view coercions
//! - [`Binding`](descriptor::Binding) - One result type a constructor produces
//!
//! The [`module`] module wraps a fallible provider closure into a named
//! [`Module`](module::Module) and captures failed scans as
//! [`ScanFailure`](module::ScanFailure) records.

pub mod descriptor;
pub mod ident;
pub mod kind;
pub mod module;
pub mod param;

// Re-export the full vocabulary at crate root
pub use descriptor::{
    AnyCtorFn, Binding, ClassBuilder, ConstructorBuilder, ConstructorDescriptor, CtorFn,
    TypeDescriptor,
};
pub use ident::TypeIdent;
pub use kind::TypeKind;
pub use module::{Module, ScanFailure};
pub use param::ParamSet;
