//! Stable identity for Rust types participating in the catalog.

use std::any::{type_name, TypeId};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a type: a display name paired with its [`TypeId`].
///
/// Equality and hashing use only the `TypeId`, so two idents for the same
/// Rust type compare equal even when one carries a custom display name.
#[derive(Clone)]
pub struct TypeIdent {
    name: Cow<'static, str>,
    id: TypeId,
}

impl TypeIdent {
    /// Ident for `T` using the compiler-supplied type name.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: Cow::Borrowed(type_name::<T>()),
            id: TypeId::of::<T>(),
        }
    }

    /// Ident for `T` with a custom display name.
    ///
    /// Useful when the compiler-supplied path (which includes crate and
    /// module segments) is too noisy for reports and logs.
    pub fn named<T: ?Sized + 'static>(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            id: TypeId::of::<T>(),
        }
    }

    /// Full display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name with leading path segments stripped.
    ///
    /// Path separators inside generic arguments are left intact, so
    /// `alloc::boxed::Box<dyn demo::Render>` shortens to
    /// `Box<dyn demo::Render>`.
    pub fn short_name(&self) -> &str {
        let name = self.name.as_ref();
        let bytes = name.as_bytes();
        let mut depth = 0usize;
        let mut start = 0usize;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'<' | b'(' | b'[' => depth += 1,
                b'>' if i > 0 && bytes[i - 1] == b'-' => {} // `->` in fn types
                b'>' | b')' | b']' => depth = depth.saturating_sub(1),
                b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                    start = i + 2;
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }
        &name[start..]
    }

    /// The underlying [`TypeId`].
    pub fn id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for TypeIdent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdent {}

impl Hash for TypeIdent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for TypeIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeIdent({})", self.name)
    }
}
