//! # Extrinsic Errors
//!
//! Error types for compact encoding and extrinsic assembly.

use thiserror::Error;

/// Errors raised by the SCALE compact codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Value needs more bytes than the big-integer header can describe.
    #[error("Value too large for compact encoding: {bytes} bytes (max {max})")]
    ValueTooLarge { bytes: usize, max: usize },

    /// Input ended before the encoded value was complete.
    #[error("Unexpected end of input: needed {needed} bytes, got {available}")]
    UnexpectedEnd { needed: usize, available: usize },
}

/// Errors raised while building a descriptor or assembling an extrinsic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtrinsicError {
    /// A compact-encoded field could not be written.
    #[error("Compact encoding failed: {0}")]
    Codec(#[from] CodecError),

    /// Signature bytes do not match the length of the configured scheme.
    #[error("Signature length mismatch for {scheme}: expected {expected}, got {actual}")]
    SignatureLength {
        scheme: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The signer produces signatures for a different scheme than the chain expects.
    #[error("Signature scheme mismatch: chain expects {expected}, signer uses {actual}")]
    SchemeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A required descriptor field was never set.
    #[error("Missing descriptor field: {0}")]
    MissingField(&'static str),

    /// The payload signer failed.
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

/// Errors raised by configuration validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Payloads of every length would be hashed before signing.
    #[error("Payload hash threshold must be greater than zero")]
    ZeroHashThreshold,

    /// An override value could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
