//! Error types for model decoding.

use thiserror::Error;

/// Error type for endpoint model decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The model declares a version this decoder does not understand.
    #[error("endpoints version {version}, not supported")]
    UnsupportedVersion {
        /// Declared model version.
        version: u64,
    },

    /// A partition's region pattern does not compile.
    #[error("invalid region regex for partition '{partition}': {source}")]
    InvalidRegionRegex {
        /// Partition identifier.
        partition: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A variant carries a tag outside the known flag set.
    #[error("unsupported endpoint variant tag '{tag}' in {context}")]
    UnknownVariantTag {
        /// Offending tag.
        tag: String,
        /// Where the variant was declared.
        context: String,
    },

    /// A variant declares no tags at all.
    #[error("endpoint variant without tags in {context}")]
    EmptyVariantTags {
        /// Where the variant was declared.
        context: String,
    },
}

impl DecodeError {
    /// Creates an unknown variant tag error.
    pub fn unknown_tag(tag: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownVariantTag {
            tag: tag.into(),
            context: context.into(),
        }
    }

    /// Creates an empty variant tags error.
    pub fn empty_tags(context: impl Into<String>) -> Self {
        Self::EmptyVariantTags {
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_display() {
        let err = DecodeError::unknown_tag("ipv9", "service 's3' endpoint 'us-east-1'");
        let msg = err.to_string();
        assert!(msg.contains("ipv9"));
        assert!(msg.contains("us-east-1"));
    }

    #[test]
    fn test_unsupported_version_display() {
        let err = DecodeError::UnsupportedVersion { version: 2 };
        assert_eq!(err.to_string(), "endpoints version 2, not supported");
    }
}
