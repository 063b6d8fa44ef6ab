//! Error types for component-vdom.
//!
//! Almost every failure in this crate resolves by substitution (literal key
//! text, default styles). The only hard failures are the Editor Preview's
//! unsupported-feature errors and invalid patterns handed to the platform.

use thiserror::Error;

use crate::constructor::ConstructorFeature;

/// Errors that can occur while realizing a component tree.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// The active deployment profile cannot represent this feature
    #[error("feature `{feature}` is not supported by the {profile} profile")]
    Unsupported {
        /// Feature that was requested
        feature: ConstructorFeature,
        /// Name of the rejecting profile
        profile: &'static str,
    },

    /// A regular expression could not be compiled
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// Pattern as received from the interpreter
        pattern: String,
        /// Compiler diagnostic
        message: String,
    },
}

/// Result type alias for constructor operations.
pub type ComponentResult<T> = Result<T, ComponentError>;

impl ComponentError {
    /// Create an unsupported-feature error for the given profile.
    pub fn unsupported(feature: ConstructorFeature, profile: &'static str) -> Self {
        Self::Unsupported { feature, profile }
    }

    /// Create a pattern error from any error type.
    pub fn invalid_pattern(pattern: impl Into<String>, err: impl std::error::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: err.to_string(),
        }
    }

    /// Feature that caused an unsupported-feature error, if any.
    pub fn feature(&self) -> Option<ConstructorFeature> {
        match self {
            Self::Unsupported { feature, .. } => Some(*feature),
            _ => None,
        }
    }
}
