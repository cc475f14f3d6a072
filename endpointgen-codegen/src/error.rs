//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Model decoding error.
    #[error("model decode error: {0}")]
    Decode(#[from] endpointgen_model::DecodeError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Variant value with bits outside the defined flags.
    #[error("unknown endpoint variant {bits:#04b}")]
    UnknownVariant {
        /// Raw variant bits.
        bits: u8,
    },

    /// Two declarations synthesize the same identifier.
    #[error("symbol '{symbol}' declared for both '{first}' and '{second}'")]
    SymbolCollision {
        /// Colliding identifier.
        symbol: String,
        /// Origin of the first declaration.
        first: String,
        /// Origin of the second declaration.
        second: String,
    },

    /// A synthesized identifier is not a valid Rust identifier.
    #[error("'{origin}' synthesizes invalid identifier '{symbol}'")]
    InvalidSymbol {
        /// Synthesized identifier.
        symbol: String,
        /// Raw identifier it was built from.
        origin: String,
    },

    /// Error raised while rendering a model node.
    #[error("{context}: {source}")]
    Render {
        /// Model location being rendered.
        context: String,
        /// Underlying error.
        #[source]
        source: Box<CodegenError>,
    },

    /// Error raised by one template layer of the module.
    #[error("failed to execute template '{layer}': {source}")]
    Template {
        /// Layer name.
        layer: String,
        /// Underlying error.
        #[source]
        source: Box<CodegenError>,
    },
}

impl CodegenError {
    /// Wraps the error with the model location it was raised at.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Render {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Wraps the error with the template layer it was raised in.
    #[must_use]
    pub fn in_layer(self, layer: &str) -> Self {
        Self::Template {
            layer: layer.to_string(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, past any layer or location wrapping.
    #[must_use]
    pub fn root(&self) -> &CodegenError {
        match self {
            Self::Render { source, .. } | Self::Template { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_display() {
        let err = CodegenError::UnknownVariant { bits: 4 };
        assert_eq!(err.to_string(), "unknown endpoint variant 0b100");
    }

    #[test]
    fn test_in_layer() {
        let err = CodegenError::InvalidSymbol {
            symbol: "1abcPartitionID".to_string(),
            origin: "partition '1abc'".to_string(),
        }
        .in_layer("partition consts");
        assert_eq!(
            err.to_string(),
            "failed to execute template 'partition consts': 'partition '1abc'' synthesizes invalid identifier '1abcPartitionID'"
        );
    }

    #[test]
    fn test_nested_context() {
        let err = CodegenError::UnknownVariant { bits: 8 }
            .context("endpoint 'us-east-1'")
            .context("service 's3'")
            .context("partition 'aws'")
            .in_layer("endpoint resolvers");
        assert_eq!(
            err.to_string(),
            "failed to execute template 'endpoint resolvers': partition 'aws': service 's3': endpoint 'us-east-1': unknown endpoint variant 0b1000"
        );
        assert!(matches!(err.root(), CodegenError::UnknownVariant { bits: 8 }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_root_of_unwrapped_error() {
        let err = CodegenError::UnknownVariant { bits: 4 };
        assert!(matches!(err.root(), CodegenError::UnknownVariant { bits: 4 }));
    }
}
