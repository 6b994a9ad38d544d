//! # Factory Synthesis
//!
//! ## Purpose
//! Turns a cataloged constructor into a cheap invocable factory. The
//! expensive part (lookup, result-type compatibility, signature checks)
//! happens exactly once, at bind time; each invocation afterwards is a
//! single shared-closure call.
//!
//! ## Key Components
//! | Component | Description |
//! |-----------|-------------|
//! | `Factory<T, A>` | Typed factory producing `T` from the argument tuple `A` |
//! | `AnyFactory` | Erased zero-argument factory producing boxed instances |
//!
//! ## Usage
//! ```ignore
//! let record = catalog.get::<Widget>();
//! let factory = Factory::<Widget>::bind(
//!     record.and_then(|r| r.parameterless_constructor()),
//! )?;
//! let first = factory.create();
//! let second = factory.create(); // distinct instance
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use typecatalog_types::{AnyCtorFn, ConstructorDescriptor, CtorFn, ParamSet, TypeIdent};

use crate::errors::FactoryError;

// "<ShortName>__<uuid>", unique per synthesized factory
fn factory_label(declaring: &TypeIdent) -> String {
    format!("{}__{}", declaring.short_name(), Uuid::new_v4().simple())
}

/// Invocable factory for `T`, bound to one constructor at synthesis time.
///
/// `A` is the argument tuple passed through to the constructor; the default
/// `()` gives a zero-argument factory with [`Factory::create`]. Binding
/// validates everything up front, so invocation cannot fail.
pub struct Factory<T: 'static, A: ParamSet = ()> {
    call: CtorFn<A, T>,
    declaring: TypeIdent,
    label: String,
}

impl<T: 'static, A: ParamSet> Factory<T, A> {
    /// Bind a factory to a constructor.
    ///
    /// Fails when no constructor is supplied, when the constructor cannot
    /// produce `T` (neither as its declaring type nor as a declared view),
    /// or when its parameter list does not match `A`. Passing a catalog
    /// lookup straight in is the intended style:
    ///
    /// ```ignore
    /// Factory::<Widget>::bind(record.parameterless_constructor())
    /// ```
    pub fn bind(constructor: Option<&ConstructorDescriptor>) -> Result<Self, FactoryError> {
        let ctor = constructor.ok_or(FactoryError::MissingConstructor)?;
        let requested = TypeIdent::of::<T>();

        let binding =
            ctor.binding_for(requested.id())
                .ok_or_else(|| FactoryError::IncompatibleResultType {
                    requested: requested.clone(),
                    declaring: ctor.declaring().clone(),
                    available: ctor.produces().cloned().collect(),
                })?;

        let call = binding
            .downcast::<A, T>()
            .ok_or_else(|| FactoryError::SignatureMismatch {
                expected: ctor.params().to_vec(),
                got: A::idents(),
            })?;

        let label = factory_label(ctor.declaring());
        debug!(
            factory = %label,
            result_type = %requested.name(),
            "factory bound"
        );

        Ok(Self {
            call,
            declaring: ctor.declaring().clone(),
            label,
        })
    }

    /// Construct an instance, passing the argument tuple to the constructor.
    ///
    /// Every call runs the constructor and yields a fresh instance.
    pub fn create_with(&self, args: A) -> T {
        (self.call)(args)
    }

    /// The class whose constructor this factory invokes.
    pub fn declaring(&self) -> &TypeIdent {
        &self.declaring
    }

    /// Unique label for this synthesized factory, for logs and diagnostics.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T: 'static> Factory<T, ()> {
    /// Construct an instance from a zero-argument factory.
    pub fn create(&self) -> T {
        (self.call)(())
    }
}

// Manual impl: cloning shares the bound closure and keeps the label, and
// must not require T: Clone.
impl<T: 'static, A: ParamSet> Clone for Factory<T, A> {
    fn clone(&self) -> Self {
        Self {
            call: Arc::clone(&self.call),
            declaring: self.declaring.clone(),
            label: self.label.clone(),
        }
    }
}

impl<T: 'static, A: ParamSet> fmt::Debug for Factory<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("label", &self.label)
            .field("declaring", &self.declaring.name())
            .finish()
    }
}

/// Type-erased zero-argument factory producing boxed instances.
///
/// Used when the concrete type is known only at runtime, e.g. a record
/// picked out of the catalog by display name. Binds only parameterless
/// constructors and always produces the constructor's declaring type; the
/// caller downcasts the box.
#[derive(Clone)]
pub struct AnyFactory {
    call: AnyCtorFn,
    declaring: TypeIdent,
    label: String,
}

impl AnyFactory {
    /// Bind an erased factory to a parameterless constructor.
    pub fn bind(constructor: Option<&ConstructorDescriptor>) -> Result<Self, FactoryError> {
        let ctor = constructor.ok_or(FactoryError::MissingConstructor)?;
        let call = ctor
            .erased_parameterless()
            .ok_or_else(|| FactoryError::SignatureMismatch {
                expected: ctor.params().to_vec(),
                got: Vec::new(),
            })?;

        let label = factory_label(ctor.declaring());
        debug!(
            factory = %label,
            result_type = %ctor.declaring().name(),
            "erased factory bound"
        );

        Ok(Self {
            call,
            declaring: ctor.declaring().clone(),
            label,
        })
    }

    /// Construct a boxed instance of the declaring type.
    pub fn create(&self) -> Box<dyn Any> {
        (self.call)()
    }

    /// The class whose constructor this factory invokes.
    pub fn declaring(&self) -> &TypeIdent {
        &self.declaring
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for AnyFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyFactory")
            .field("label", &self.label)
            .field("declaring", &self.declaring.name())
            .finish()
    }
}
