//! Catalog build reports.
//!
//! A [`CatalogReport`] is a serializable summary of one catalog build:
//! which implementations were found, which modules failed to scan, and a
//! content fingerprint for cheap change detection between builds.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::catalog::Catalog;

/// One implementation type in a [`CatalogReport`].
#[derive(Debug, Clone, Serialize)]
pub struct TypeEntry {
    /// Display name of the implementation type
    pub name: String,
    /// Rendered constructor signatures, e.g. `"(String, u32)"`
    pub constructors: Vec<String>,
}

/// One failed module in a [`CatalogReport`].
#[derive(Debug, Clone, Serialize)]
pub struct FailedModuleEntry {
    /// Name of the module that failed to scan
    pub module: String,
    /// Outermost error message
    pub message: String,
    /// Full error chain
    pub detail: String,
}

/// Serializable summary of a catalog build.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    /// When the catalog was built
    pub built_at: DateTime<Utc>,
    /// Number of implementation types found
    pub implementation_count: usize,
    /// Implementation entries, sorted by name
    pub implementations: Vec<TypeEntry>,
    /// Modules that failed to scan, in scan order
    pub failed_modules: Vec<FailedModuleEntry>,
    /// SHA-256 hex digest over the sorted implementation names
    pub fingerprint: String,
}

impl CatalogReport {
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).context("serializing catalog report")
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing catalog report")
    }
}

impl Catalog {
    /// Summarize this catalog for logs, dumps, and change detection.
    ///
    /// Entries are sorted by name, so two catalogs with the same
    /// implementation set produce the same fingerprint regardless of the
    /// order their modules were scanned in.
    pub fn report(&self) -> CatalogReport {
        let mut implementations: Vec<TypeEntry> = self
            .implementation_types()
            .map(|record| TypeEntry {
                name: record.ident().name().to_string(),
                constructors: record
                    .constructors()
                    .iter()
                    .map(|ctor| ctor.signature())
                    .collect(),
            })
            .collect();
        implementations.sort_by(|a, b| a.name.cmp(&b.name));

        let fingerprint = fingerprint(implementations.iter().map(|entry| entry.name.as_str()));

        let failed_modules = self
            .failed_modules()
            .iter()
            .map(|failure| FailedModuleEntry {
                module: failure.module().to_string(),
                message: failure.message().to_string(),
                detail: failure.detail().to_string(),
            })
            .collect();

        let implementation_count = implementations.len();
        CatalogReport {
            built_at: self.built_at(),
            implementation_count,
            implementations,
            failed_modules,
            fingerprint,
        }
    }
}

fn fingerprint<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let mut hasher = Sha256::new();
    for name in names {
        hasher.update(name.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}
