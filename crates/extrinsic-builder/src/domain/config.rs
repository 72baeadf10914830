//! Chain-specific encoding configuration
//!
//! The byte layout of an extrinsic is fixed, but a few of the constants
//! written into it vary per chain and runtime: the call index of
//! `balances.transfer`, the address kind tag and the signature scheme.
//!
//! # Example
//!
//! ```ignore
//! use extrinsic_builder::domain::{CallIndex, ChainConfigBuilder, SignatureScheme};
//!
//! let config = ChainConfigBuilder::new()
//!     .transfer_call_index(CallIndex::new(0x05, 0x00))
//!     .signature_scheme(SignatureScheme::Sr25519)
//!     .build()?;
//! ```

use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Call index of `balances.transfer` on the reference runtime.
pub const DEFAULT_TRANSFER_CALL_INDEX: CallIndex = CallIndex::new(0x04, 0x00);

/// Address kind tag selecting a raw 32-byte account id.
pub const DEFAULT_ADDRESS_TAG: u8 = 0xFF;

/// Payloads longer than this are hashed with blake2b-256 before signing.
pub const DEFAULT_PAYLOAD_HASH_THRESHOLD: usize = 256;

/// Two-byte call index: pallet index, then method index within the pallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallIndex {
    /// Pallet (module) index in the runtime.
    pub pallet: u8,
    /// Call (method) index within the pallet.
    pub method: u8,
}

impl CallIndex {
    /// Create a call index.
    pub const fn new(pallet: u8, method: u8) -> Self {
        Self { pallet, method }
    }

    /// Wire form of the index.
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.pallet, self.method]
    }
}

/// Parses the four-hex-digit wire form, e.g. `"0400"` or `"0x0400"`.
impl FromStr for CallIndex {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidValue {
            key: "call_index",
            value: s.to_string(),
        };
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|_| invalid())?;
        match bytes.as_slice() {
            [pallet, method] => Ok(Self::new(*pallet, *method)),
            _ => Err(invalid()),
        }
    }
}

/// Signature algorithm, tagged by its index in the runtime's `MultiSignature`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureScheme {
    /// Ed25519, 64-byte signatures.
    Ed25519,
    /// Schnorrkel over Ristretto25519, 64-byte signatures.
    Sr25519,
    /// ECDSA over secp256k1 with recovery byte, 65-byte signatures.
    Ecdsa,
}

impl SignatureScheme {
    /// Tag byte written before the signature.
    pub const fn tag(self) -> u8 {
        match self {
            SignatureScheme::Ed25519 => 0x00,
            SignatureScheme::Sr25519 => 0x01,
            SignatureScheme::Ecdsa => 0x02,
        }
    }

    /// Expected signature length in bytes.
    pub const fn signature_len(self) -> usize {
        match self {
            SignatureScheme::Ed25519 | SignatureScheme::Sr25519 => 64,
            SignatureScheme::Ecdsa => 65,
        }
    }

    /// Lowercase scheme name.
    pub const fn name(self) -> &'static str {
        match self {
            SignatureScheme::Ed25519 => "ed25519",
            SignatureScheme::Sr25519 => "sr25519",
            SignatureScheme::Ecdsa => "ecdsa",
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ed25519" => Ok(SignatureScheme::Ed25519),
            "sr25519" => Ok(SignatureScheme::Sr25519),
            "ecdsa" => Ok(SignatureScheme::Ecdsa),
            _ => Err(ConfigError::InvalidValue {
                key: "signature_scheme",
                value: s.to_string(),
            }),
        }
    }
}

/// Chain encoding configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Call index of `balances.transfer`.
    pub transfer_call_index: CallIndex,
    /// Address kind tag prepended to account ids.
    pub address_tag: u8,
    /// Scheme of the signatures this chain accepts from us.
    pub signature_scheme: SignatureScheme,
    /// Payload length above which signers sign the blake2b-256 digest instead.
    pub payload_hash_threshold: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            transfer_call_index: DEFAULT_TRANSFER_CALL_INDEX,
            address_tag: DEFAULT_ADDRESS_TAG,
            signature_scheme: SignatureScheme::Ed25519,
            payload_hash_threshold: DEFAULT_PAYLOAD_HASH_THRESHOLD,
        }
    }
}

impl ChainConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.payload_hash_threshold == 0 {
            return Err(ConfigError::ZeroHashThreshold);
        }
        Ok(())
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::InvalidValue {
            key: "config",
            value: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set the transfer call index
    pub fn with_transfer_call_index(mut self, index: CallIndex) -> Self {
        self.transfer_call_index = index;
        self
    }

    /// Builder-style method to set the signature scheme
    pub fn with_signature_scheme(mut self, scheme: SignatureScheme) -> Self {
        self.signature_scheme = scheme;
        self
    }
}

/// Builder for [`ChainConfig`] with validation.
#[derive(Default)]
pub struct ChainConfigBuilder {
    transfer_call_index: Option<CallIndex>,
    address_tag: Option<u8>,
    signature_scheme: Option<SignatureScheme>,
    payload_hash_threshold: Option<usize>,
}

impl ChainConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the call index of `balances.transfer`
    pub fn transfer_call_index(mut self, index: CallIndex) -> Self {
        self.transfer_call_index = Some(index);
        self
    }

    /// Set the address kind tag
    pub fn address_tag(mut self, tag: u8) -> Self {
        self.address_tag = Some(tag);
        self
    }

    /// Set the signature scheme
    pub fn signature_scheme(mut self, scheme: SignatureScheme) -> Self {
        self.signature_scheme = Some(scheme);
        self
    }

    /// Set the payload hashing threshold (must be non-zero)
    pub fn payload_hash_threshold(mut self, bytes: usize) -> Self {
        self.payload_hash_threshold = Some(bytes);
        self
    }

    /// Build the configuration, validating all parameters
    pub fn build(self) -> Result<ChainConfig, ConfigError> {
        let defaults = ChainConfig::default();

        let config = ChainConfig {
            transfer_call_index: self
                .transfer_call_index
                .unwrap_or(defaults.transfer_call_index),
            address_tag: self.address_tag.unwrap_or(defaults.address_tag),
            signature_scheme: self.signature_scheme.unwrap_or(defaults.signature_scheme),
            payload_hash_threshold: self
                .payload_hash_threshold
                .unwrap_or(defaults.payload_hash_threshold),
        };

        config.validate()?;
        Ok(config)
    }
}
