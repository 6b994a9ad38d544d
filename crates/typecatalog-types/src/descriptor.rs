//! # Type Records and Constructor Descriptors
//!
//! ## Purpose
//! Describes the types a module declares: what kind of type each one is,
//! which constructors it offers, and which result types those constructors
//! can be invoked as. Constructors are captured as erased closures at
//! declaration time so catalog consumers can synthesize invocable factories
//! without knowing the concrete types involved.
//!
//! ## Key Components
//! | Component | Description |
//! |-----------|-------------|
//! | `TypeDescriptor` | A declared type record: ident, kind, constructors |
//! | `ClassBuilder` | Typed builder for concrete class records |
//! | `ConstructorDescriptor` | One constructor: parameter list plus result bindings |
//! | `ConstructorBuilder` | Typed builder that composes view coercions before erasure |
//! | `Binding` | One result type a constructor can produce, with its erased closure |
//!
//! ## Usage
//! ```ignore
//! let record = TypeDescriptor::class::<Widget>()
//!     .constructor(ConstructorBuilder::parameterless(Widget::default))
//!     .constructor(
//!         ConstructorBuilder::of(|(label, size): (String, u32)| Widget::new(label, size))
//!             .with_view::<Box<dyn Render>>(|w| Box::new(w)),
//!     )
//!     .build();
//! ```

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::ident::TypeIdent;
use crate::kind::TypeKind;
use crate::param::ParamSet;

/// Invocable constructor closure taking the argument tuple `A` and producing `T`.
pub type CtorFn<A, T> = Arc<dyn Fn(A) -> T + Send + Sync>;

/// Type-erased parameterless constructor closure producing a boxed value.
pub type AnyCtorFn = Arc<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// One result type a constructor can be invoked as.
///
/// Holds the typed closure behind an `Any` so the descriptor itself stays
/// object-safe; [`Binding::downcast`] recovers the closure exactly once at
/// factory synthesis.
#[derive(Clone)]
pub struct Binding {
    result: TypeIdent,
    call: Arc<dyn Any + Send + Sync>,
}

impl Binding {
    fn new<A: ParamSet, T: 'static>(result: TypeIdent, call: CtorFn<A, T>) -> Self {
        Self {
            result,
            call: Arc::new(call),
        }
    }

    /// Result type this binding produces.
    pub fn result(&self) -> &TypeIdent {
        &self.result
    }

    /// Recover the typed constructor closure.
    ///
    /// Returns `None` unless `A` and `T` are exactly the argument tuple and
    /// result type the binding was declared with.
    pub fn downcast<A: ParamSet, T: 'static>(&self) -> Option<CtorFn<A, T>> {
        (*self.call).downcast_ref::<CtorFn<A, T>>().cloned()
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Binding({})", self.result.name())
    }
}

/// Typed builder for a [`ConstructorDescriptor`].
///
/// Keeps the argument tuple `A` and concrete result `T` as generic
/// parameters so view coercions compose against the real closure types;
/// everything is erased when the owning class record is built.
pub struct ConstructorBuilder<A: ParamSet, T: 'static> {
    base: CtorFn<A, T>,
    views: Vec<Binding>,
    erased: Option<AnyCtorFn>,
}

// Present exactly when `A` is the unit tuple.
fn parameterless_thunk<A: ParamSet, T: 'static>(base: &CtorFn<A, T>) -> Option<AnyCtorFn> {
    let any: &dyn Any = base;
    let call = any.downcast_ref::<CtorFn<(), T>>()?.clone();
    Some(Arc::new(move || Box::new(call(())) as Box<dyn Any>))
}

impl<T: 'static> ConstructorBuilder<(), T> {
    /// Describe a parameterless constructor.
    pub fn parameterless(ctor: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self::of(move |()| ctor())
    }
}

impl<A: ParamSet, T: 'static> ConstructorBuilder<A, T> {
    /// Describe a constructor taking the argument tuple `A`.
    ///
    /// Constructors over the unit tuple additionally carry a type-erased
    /// thunk so they can back factories in contexts where `T` is not
    /// statically known; [`ConstructorBuilder::parameterless`] is the same
    /// declaration spelled without the tuple.
    pub fn of(ctor: impl Fn(A) -> T + Send + Sync + 'static) -> Self {
        let base: CtorFn<A, T> = Arc::new(ctor);
        let erased = parameterless_thunk(&base);
        Self {
            base,
            views: Vec::new(),
            erased,
        }
    }

    /// Also expose the constructor under result type `V`.
    ///
    /// `coerce` converts the freshly constructed `T` into `V`; the usual
    /// case is boxing a concrete class into a trait object, e.g.
    /// `.with_view::<Box<dyn Render>>(|w| Box::new(w))`.
    pub fn with_view<V: 'static>(
        mut self,
        coerce: impl Fn(T) -> V + Send + Sync + 'static,
    ) -> Self {
        let base = Arc::clone(&self.base);
        let call: CtorFn<A, V> = Arc::new(move |args| coerce(base(args)));
        self.views.push(Binding::new(TypeIdent::of::<V>(), call));
        self
    }

    fn finish(self, declaring: TypeIdent) -> ConstructorDescriptor {
        let mut bindings = Vec::with_capacity(self.views.len() + 1);
        bindings.push(Binding::new(declaring.clone(), Arc::clone(&self.base)));
        bindings.extend(self.views);
        ConstructorDescriptor {
            declaring,
            params: A::idents(),
            bindings,
            erased: self.erased,
        }
    }
}

/// A registered constructor for a declared class.
///
/// The declaring type is always the first binding; additional bindings come
/// from view coercions declared on the builder.
#[derive(Clone)]
pub struct ConstructorDescriptor {
    declaring: TypeIdent,
    params: Vec<TypeIdent>,
    bindings: Vec<Binding>,
    erased: Option<AnyCtorFn>,
}

impl ConstructorDescriptor {
    /// The class this constructor belongs to.
    pub fn declaring(&self) -> &TypeIdent {
        &self.declaring
    }

    /// Parameter types, in declaration order.
    pub fn params(&self) -> &[TypeIdent] {
        &self.params
    }

    pub fn is_parameterless(&self) -> bool {
        self.params.is_empty()
    }

    /// Result types this constructor can be invoked as.
    pub fn produces(&self) -> impl Iterator<Item = &TypeIdent> {
        self.bindings.iter().map(Binding::result)
    }

    pub fn can_produce(&self, id: TypeId) -> bool {
        self.bindings.iter().any(|b| b.result.id() == id)
    }

    /// Binding whose result type has the given id, if declared.
    pub fn binding_for(&self, id: TypeId) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.result.id() == id)
    }

    /// Type-erased thunk, present only on parameterless constructors.
    ///
    /// The thunk always boxes the declaring concrete type, never a view.
    pub fn erased_parameterless(&self) -> Option<AnyCtorFn> {
        self.erased.clone()
    }

    /// Parameter list rendered for reports and logs, e.g. `(String, u32)`.
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.params.iter().map(TypeIdent::short_name).collect();
        format!("({})", params.join(", "))
    }
}

impl fmt::Debug for ConstructorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorDescriptor")
            .field("declaring", &self.declaring.name())
            .field("signature", &self.signature())
            .finish()
    }
}

/// A type record declared by a module.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    ident: TypeIdent,
    kind: TypeKind,
    constructors: Vec<ConstructorDescriptor>,
    assignable: Vec<TypeIdent>,
}

impl TypeDescriptor {
    /// Record with no constructors, for any kind.
    ///
    /// Concrete classes normally go through [`TypeDescriptor::class`] so
    /// constructors can be attached with compile-time checked result types.
    pub fn new(ident: TypeIdent, kind: TypeKind) -> Self {
        let assignable = vec![ident.clone()];
        Self {
            ident,
            kind,
            constructors: Vec::new(),
            assignable,
        }
    }

    /// Builder for a concrete class record of type `T`.
    pub fn class<T: 'static>() -> ClassBuilder<T> {
        ClassBuilder::new(TypeIdent::of::<T>())
    }

    /// Builder for a concrete class record with a custom display name.
    pub fn class_named<T: 'static>(name: impl Into<Cow<'static, str>>) -> ClassBuilder<T> {
        ClassBuilder::new(TypeIdent::named::<T>(name))
    }

    /// Record for a type that exists only to be specialized.
    pub fn abstract_class<T: ?Sized + 'static>() -> Self {
        Self::new(TypeIdent::of::<T>(), TypeKind::AbstractClass)
    }

    /// Record for a trait-like contract.
    pub fn interface<I: ?Sized + 'static>() -> Self {
        Self::new(TypeIdent::of::<I>(), TypeKind::Interface)
    }

    /// Record for a plain value type.
    pub fn value<T: 'static>() -> Self {
        Self::new(TypeIdent::of::<T>(), TypeKind::Value)
    }

    pub fn ident(&self) -> &TypeIdent {
        &self.ident
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Whether this record belongs in the implementation set.
    pub fn is_concrete_class(&self) -> bool {
        self.kind.is_concrete_class()
    }

    /// Registered constructors, in declaration order.
    pub fn constructors(&self) -> &[ConstructorDescriptor] {
        &self.constructors
    }

    /// First constructor taking no arguments, if any.
    pub fn parameterless_constructor(&self) -> Option<&ConstructorDescriptor> {
        self.constructors.iter().find(|c| c.is_parameterless())
    }

    /// First constructor with the given number of parameters, if any.
    pub fn constructor_with_arity(&self, arity: usize) -> Option<&ConstructorDescriptor> {
        self.constructors.iter().find(|c| c.params().len() == arity)
    }

    /// All result types instances of this record can be produced as.
    ///
    /// Contains the record's own ident plus every view declared on its
    /// constructors, deduplicated.
    pub fn assignable_idents(&self) -> &[TypeIdent] {
        &self.assignable
    }

    pub fn is_assignable_to(&self, target: &TypeIdent) -> bool {
        self.assignable.iter().any(|ident| ident == target)
    }
}

/// Typed builder for concrete class records.
pub struct ClassBuilder<T: 'static> {
    ident: TypeIdent,
    constructors: Vec<ConstructorDescriptor>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> ClassBuilder<T> {
    fn new(ident: TypeIdent) -> Self {
        Self {
            ident,
            constructors: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Attach a constructor. The builder's result type must be `T`, so a
    /// constructor can never be attached to a class it does not produce.
    pub fn constructor<A: ParamSet>(mut self, ctor: ConstructorBuilder<A, T>) -> Self {
        self.constructors.push(ctor.finish(self.ident.clone()));
        self
    }

    /// Finalize the record, computing its assignable result types.
    pub fn build(self) -> TypeDescriptor {
        let mut assignable = vec![self.ident.clone()];
        for ctor in &self.constructors {
            for result in ctor.produces() {
                if !assignable.contains(result) {
                    assignable.push(result.clone());
                }
            }
        }
        TypeDescriptor {
            ident: self.ident,
            kind: TypeKind::Class,
            constructors: self.constructors,
            assignable,
        }
    }
}
