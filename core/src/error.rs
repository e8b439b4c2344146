//! Common error types for Tenure.

use thiserror::Error;

/// Errors raised while building or decoding core values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string does not have the `urn:li:<type>:<key>` shape.
    #[error("Invalid URN: {raw}")]
    InvalidUrn { raw: String },

    /// A stored aspect payload could not be decoded.
    #[error("Failed to decode aspect {aspect}: {message}")]
    AspectDecode { aspect: String, message: String },

    /// An aspect value could not be encoded into a payload.
    #[error("Failed to encode aspect {aspect}: {message}")]
    AspectEncode { aspect: String, message: String },
}

impl CoreError {
    pub fn invalid_urn(raw: impl Into<String>) -> Self {
        Self::InvalidUrn { raw: raw.into() }
    }

    pub fn aspect_decode(aspect: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AspectDecode {
            aspect: aspect.into(),
            message: message.into(),
        }
    }

    pub fn aspect_encode(aspect: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AspectEncode {
            aspect: aspect.into(),
            message: message.into(),
        }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
