//! Factory synthesis error types.
//!
//! All validation happens once, at synthesis time; a factory that binds
//! successfully can be invoked without further checks.

use typecatalog_types::TypeIdent;

/// Structured errors produced while binding a factory to a constructor.
#[derive(Debug, Clone)]
pub enum FactoryError {
    /// No constructor descriptor was supplied.
    ///
    /// Typically the result of a failed catalog lookup being passed
    /// straight into factory synthesis.
    MissingConstructor,

    /// The requested result type is not among the constructor's bindings.
    IncompatibleResultType {
        /// Result type the factory was asked to produce
        requested: TypeIdent,
        /// The class declaring the constructor
        declaring: TypeIdent,
        /// Result types the constructor can actually produce
        available: Vec<TypeIdent>,
    },

    /// The factory's argument tuple does not match the constructor's parameters.
    SignatureMismatch {
        /// Parameters declared by the constructor
        expected: Vec<TypeIdent>,
        /// Argument tuple the factory was asked to accept
        got: Vec<TypeIdent>,
    },
}

fn render_list(idents: &[TypeIdent]) -> String {
    let names: Vec<&str> = idents.iter().map(TypeIdent::short_name).collect();
    names.join(", ")
}

impl std::fmt::Display for FactoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactoryError::MissingConstructor => {
                write!(f, "factory synthesis requires a constructor descriptor")
            }
            FactoryError::IncompatibleResultType {
                requested,
                declaring,
                available,
            } => {
                write!(
                    f,
                    "requested result type {} is not compatible with the constructor declared on {}",
                    requested.short_name(),
                    declaring.short_name()
                )?;
                if !available.is_empty() {
                    write!(f, " (can produce: {})", render_list(available))?;
                }
                Ok(())
            }
            FactoryError::SignatureMismatch { expected, got } => {
                write!(
                    f,
                    "constructor signature mismatch: expected ({}), got ({})",
                    render_list(expected),
                    render_list(got)
                )
            }
        }
    }
}

impl std::error::Error for FactoryError {}
