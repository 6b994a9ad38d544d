use std::fmt;

/// Classification of a declared type record.
///
/// Only [`TypeKind::Class`] records survive catalog filtering; the other
/// kinds may be declared for documentation and discovery but are never
/// treated as instantiable implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A concrete, instantiable class.
    Class,
    /// A class that exists only to be specialized; never instantiated directly.
    AbstractClass,
    /// A trait-like contract with no constructors of its own.
    Interface,
    /// A plain value type (numbers, strings, plain data).
    Value,
}

impl TypeKind {
    /// Whether records of this kind belong in the implementation set.
    pub fn is_concrete_class(self) -> bool {
        matches!(self, TypeKind::Class)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::AbstractClass => "abstract class",
            TypeKind::Interface => "interface",
            TypeKind::Value => "value",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
