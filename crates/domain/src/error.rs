//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors; [`PumpkitError`] composes them
//! via `#[from]` so binaries can hold one error type without flattening
//! the sources into strings.

use crate::id::EndpointId;

/// Top-level error composed from the layer-specific kinds.
#[derive(Debug, thiserror::Error)]
pub enum PumpkitError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// An attribute write to the protocol layer failed.
    #[error("attribute write error")]
    Attribute(#[from] AttributeWriteError),

    /// The process cannot come up in its current environment.
    #[error("startup error")]
    Startup(#[from] StartupError),
}

/// Violation of a domain invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A raw operation-mode value outside the cluster encoding.
    #[error("operation mode value {value} is outside the encoding (0..=3)")]
    InvalidOperationMode {
        /// The rejected raw value.
        value: u8,
    },

    /// A rating equals its null sentinel or lies outside its documented
    /// range.
    #[error("rating {field} is outside its documented range")]
    RatingOutOfRange {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A minimum rating exceeds its maximum counterpart.
    #[error("rating pair {field} has min greater than max")]
    RatingOrder {
        /// Name of the offending setpoint range.
        field: &'static str,
    },
}

/// Failure to reflect a value into an externally visible attribute.
#[derive(Debug, thiserror::Error)]
pub enum AttributeWriteError {
    /// The target endpoint is not provisioned on this node.
    #[error("endpoint {0} is not provisioned")]
    UnknownEndpoint(EndpointId),

    /// The attribute backend rejected or lost the write.
    #[error("attribute backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Fatal condition detected while bringing the system up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// A controller was constructed outside a tokio runtime. Without a
    /// runtime its movement timer can never fire, so the actuator would
    /// stay in a transition state forever.
    #[error("no tokio runtime available for the movement timer")]
    NoRuntime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_validation_errors_with_context() {
        let err = ValidationError::InvalidOperationMode { value: 9 };
        assert_eq!(
            err.to_string(),
            "operation mode value 9 is outside the encoding (0..=3)"
        );
    }

    #[test]
    fn should_render_unknown_endpoint_with_its_number() {
        let err = AttributeWriteError::UnknownEndpoint(EndpointId::new(13));
        assert_eq!(err.to_string(), "endpoint 13 is not provisioned");
    }

    #[test]
    fn should_convert_layer_errors_into_the_top_level_kind() {
        let err: PumpkitError = StartupError::NoRuntime.into();
        assert!(matches!(err, PumpkitError::Startup(StartupError::NoRuntime)));

        let err: PumpkitError = ValidationError::RatingOrder { field: "const_flow" }.into();
        assert!(matches!(err, PumpkitError::Validation(_)));
    }

    #[test]
    fn should_preserve_backend_sources() {
        let err = AttributeWriteError::Backend(Box::new(std::io::Error::other("store offline")));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "store offline");
    }
}
