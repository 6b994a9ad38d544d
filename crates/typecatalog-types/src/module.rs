//! Module records and scan failure capture.
//!
//! A [`Module`] is a named unit of type declarations backed by a fallible
//! provider closure. Providers run during catalog builds; a provider that
//! fails does not abort the build, it is captured as a [`ScanFailure`]
//! alongside the results from the modules that succeeded.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use crate::descriptor::TypeDescriptor;

type ProviderFn = dyn Fn() -> Result<Vec<TypeDescriptor>> + Send + Sync;

/// A registered unit of type declarations.
///
/// Cloning is cheap; the provider closure is shared behind an `Arc`.
#[derive(Clone)]
pub struct Module {
    name: String,
    provider: Arc<ProviderFn>,
}

impl Module {
    /// Module with the given name and type provider.
    ///
    /// The provider is invoked on every catalog build. It should enumerate
    /// the module's declared types, or return an error describing why the
    /// module cannot be scanned (missing resources, version conflicts, ...).
    pub fn new(
        name: impl Into<String>,
        provider: impl Fn() -> Result<Vec<TypeDescriptor>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            provider: Arc::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the provider and collect this module's declared types.
    pub fn declared_types(&self) -> Result<Vec<TypeDescriptor>> {
        (self.provider)()
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Module({})", self.name)
    }
}

/// A module whose type enumeration failed during a catalog build.
///
/// Keeps both a concise message (the outermost error) and the full context
/// chain, plus the original error for callers that want to downcast.
#[derive(Debug)]
pub struct ScanFailure {
    module: String,
    message: String,
    detail: String,
    source: anyhow::Error,
}

impl ScanFailure {
    pub fn new(module: impl Into<String>, source: anyhow::Error) -> Self {
        let message = source.to_string();
        let detail = format!("{source:#}");
        Self {
            module: module.into(),
            message,
            detail,
            source,
        }
    }

    /// Name of the module that failed to scan.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Outermost error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Full error chain, outermost first.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// The captured error, for downcasting.
    pub fn source(&self) -> &anyhow::Error {
        &self.source
    }
}

impl fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.module, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn test_module_provider_runs_per_call() {
        let module = Module::new("counters", || Ok(Vec::new()));
        assert_eq!(module.name(), "counters");
        assert!(module.declared_types().unwrap().is_empty());
        assert!(module.declared_types().unwrap().is_empty());
    }

    #[test]
    fn test_module_provider_error_propagates() {
        let module = Module::new("locked", || Err(anyhow!("access denied")));
        let err = module.declared_types().unwrap_err();
        assert_eq!(err.to_string(), "access denied");
    }

    #[test]
    fn test_scan_failure_captures_context_chain() {
        let source = Err::<(), _>(anyhow!("file not found"))
            .context("loading manifest")
            .unwrap_err();
        let failure = ScanFailure::new("plugins", source);
        assert_eq!(failure.module(), "plugins");
        assert_eq!(failure.message(), "loading manifest");
        assert_eq!(failure.detail(), "loading manifest: file not found");
        assert_eq!(
            failure.to_string(),
            "plugins: loading manifest: file not found"
        );
    }

    #[test]
    fn test_scan_failure_source_downcast() {
        let failure = ScanFailure::new("plugins", anyhow!("access denied"));
        assert!(failure.source().downcast_ref::<std::io::Error>().is_none());
        assert_eq!(format!("{}", failure.source()), "access denied");
    }
}
