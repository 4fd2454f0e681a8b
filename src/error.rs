//! Error types for primitive definition and parameter binding.

use arcstr::ArcStr;
use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// An enumeration of primitive-definition and binding errors.
///
/// All failures occur synchronously at construction time and propagate
/// directly to the caller; none are retried or recovered internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The parameter-schema type attached to a primitive is not a
    /// recognized schema type.
    #[error("unrecognized parameter type {param_type} on primitive {primitive}")]
    Configuration {
        param_type: &'static str,
        primitive: ArcStr,
    },

    /// A primitive port is unnamed, shadowed, or lacks PORT visibility.
    #[error("invalid port {port:?} on primitive {primitive}: {reason}")]
    PortDefinition {
        port: ArcStr,
        primitive: ArcStr,
        reason: &'static str,
    },

    /// A call's parameters are not an instance of the expected schema.
    #[error("invalid parameters {actual}; expected an instance of {expected}")]
    ParameterType {
        actual: String,
        expected: &'static str,
    },

    /// A parameter value is outside its valid domain.
    #[error("invalid parameter value: {0}")]
    ParameterValue(String),

    /// A capability marking was applied to a type lacking the required
    /// structural capability.
    #[error("type {0} is not connectable")]
    Capability(&'static str),

    /// A primitive builder was missing a required field.
    #[error("builder error: {0}")]
    Builder(String),
}

impl From<UninitializedFieldError> for Error {
    fn from(value: UninitializedFieldError) -> Self {
        Self::Builder(value.to_string())
    }
}

/// A result type for primitive definition and binding.
pub type Result<T> = std::result::Result<T, Error>;
