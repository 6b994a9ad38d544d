//! Typecatalog
//!
//! A process-wide catalog of instantiable types with factory synthesis:
//!
//! - **Module registry**: Modules self-register the types they declare
//! - **Catalog builds**: Fault-tolerant scans; one broken module never hides the rest
//! - **Factory synthesis**: Constructors become invocable factories, validated once at bind
//! - **Reports**: Serializable build summaries with content fingerprints
//!
//! This crate is a facade over [`typecatalog_core`] and
//! [`typecatalog_types`]; everything is re-exported here.
//!
//! ## Example
//!
//! ```
//! use typecatalog::{Catalog, ConstructorBuilder, Factory, Module, TypeDescriptor};
//!
//! #[derive(Default)]
//! struct Widget {
//!     size: u32,
//! }
//!
//! let module = Module::new("widgets", || {
//!     Ok(vec![TypeDescriptor::class::<Widget>()
//!         .constructor(ConstructorBuilder::parameterless(Widget::default))
//!         .build()])
//! });
//!
//! let catalog = Catalog::build([module]);
//! let record = catalog.get::<Widget>().unwrap();
//! let factory = Factory::<Widget>::bind(record.parameterless_constructor()).unwrap();
//! assert_eq!(factory.create().size, 0);
//! ```

pub use typecatalog_core::{
    declare_module, registry, AnyCtorFn, AnyFactory, Binding, Catalog, CatalogReport,
    ClassBuilder, ConstructorBuilder, ConstructorDescriptor, CtorFn, Factory, FactoryError,
    FailedModuleEntry, Module, ParamSet, ScanFailure, TypeDescriptor, TypeEntry, TypeIdent,
    TypeKind,
};

/// Convenience imports for the common catalog-and-factory flow.
pub mod prelude {
    pub use crate::declare_module;
    pub use crate::registry::register_module;
    pub use crate::{
        AnyFactory, Catalog, ConstructorBuilder, Factory, FactoryError, Module, TypeDescriptor,
        TypeIdent, TypeKind,
    };
}
