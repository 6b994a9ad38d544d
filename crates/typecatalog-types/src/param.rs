//! Argument tuples accepted by constructor closures.

use crate::ident::TypeIdent;

/// A tuple of constructor arguments, described as a list of type idents.
///
/// Implemented for `()` and for tuples of up to four `'static` elements.
/// The unit tuple describes a parameterless constructor.
pub trait ParamSet: 'static {
    /// Idents of the tuple elements, in declaration order.
    fn idents() -> Vec<TypeIdent>;

    /// Number of arguments in the tuple.
    fn arity() -> usize {
        Self::idents().len()
    }
}

impl ParamSet for () {
    fn idents() -> Vec<TypeIdent> {
        Vec::new()
    }

    fn arity() -> usize {
        0
    }
}

macro_rules! impl_param_set {
    ($($param:ident),+) => {
        impl<$($param: 'static),+> ParamSet for ($($param,)+) {
            fn idents() -> Vec<TypeIdent> {
                vec![$(TypeIdent::of::<$param>()),+]
            }
        }
    };
}

impl_param_set!(P1);
impl_param_set!(P1, P2);
impl_param_set!(P1, P2, P3);
impl_param_set!(P1, P2, P3, P4);
