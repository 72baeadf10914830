//! # Signing Input
//!
//! JSON input adapter. Validates hex fields, hash lengths and amounts, then
//! builds a [`TransactionDescriptor`].
//!
//! ```json
//! {
//!   "genesis_hash": "0x91b1...",
//!   "block_hash": "0x91b1...",
//!   "nonce": 0,
//!   "spec_version": 1031,
//!   "extrinsic_version": 4,
//!   "tip": "0",
//!   "call": { "balance_transfer": { "to": "0x8eaf...", "value": "12345" } }
//! }
//! ```

use crate::domain::entities::{Call, Era, TransactionDescriptor};
use crate::domain::errors::ExtrinsicError;
use num_bigint::BigUint;
use num_traits::Num;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading signing input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document is not valid input JSON (includes unknown call types).
    #[error("Invalid input JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A hex field could not be decoded.
    #[error("Invalid hex in {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },

    /// A fixed-size field has the wrong length.
    #[error("Invalid length for {field}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An amount is not a non-negative integer.
    #[error("Invalid amount for {field}: {value}")]
    InvalidAmount { field: &'static str, value: String },

    /// The descriptor could not be built.
    #[error(transparent)]
    Descriptor(#[from] ExtrinsicError),
}

/// Non-negative amount given either as a JSON number or as a string.
///
/// Strings are decimal, or hex with a `0x` prefix, and may exceed `u64`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Plain JSON number.
    Number(u64),
    /// Decimal or `0x` hex string.
    Text(String),
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Number(0)
    }
}

impl Amount {
    fn to_biguint(&self, field: &'static str) -> Result<BigUint, InputError> {
        let text = match self {
            Amount::Number(value) => return Ok(BigUint::from(*value)),
            Amount::Text(text) => text.trim(),
        };
        let invalid = || InputError::InvalidAmount {
            field,
            value: text.to_string(),
        };
        // Digits only: no sign, no `_` separators
        let (digits, radix) = match text.strip_prefix("0x") {
            Some(digits) if is_digits(digits, |c| c.is_ascii_hexdigit()) => (digits, 16),
            None if is_digits(text, |c| c.is_ascii_digit()) => (text, 10),
            _ => return Err(invalid()),
        };
        BigUint::from_str_radix(digits, radix).map_err(|_| invalid())
    }
}

/// Requested validity window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraInput {
    /// Window start.
    pub phase: u64,
    /// Window length.
    pub period: u64,
}

/// Call parameters, externally tagged by call name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallInput {
    /// `balances.transfer`.
    BalanceTransfer {
        /// Destination account id, 32 bytes hex.
        to: String,
        /// Amount to transfer.
        value: Amount,
    },
}

/// Raw signing parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningInput {
    /// Genesis hash, 32 bytes hex.
    pub genesis_hash: String,
    /// Reference block hash, 32 bytes hex.
    pub block_hash: String,
    /// Account nonce.
    #[serde(default)]
    pub nonce: u64,
    /// Runtime spec version.
    pub spec_version: u32,
    /// Extrinsic format version.
    #[serde(default)]
    pub extrinsic_version: u8,
    /// Tip for the block author.
    #[serde(default)]
    pub tip: Amount,
    /// Optional mortal era.
    #[serde(default)]
    pub era: Option<EraInput>,
    /// The call to execute.
    pub call: CallInput,
}

impl SigningInput {
    /// Parse input from JSON.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the input and build the descriptor.
    pub fn to_descriptor(&self) -> Result<TransactionDescriptor, InputError> {
        let era = match self.era {
            Some(EraInput { phase, period }) => Era::Mortal { phase, period },
            None => Era::Immortal,
        };

        let call = match &self.call {
            CallInput::BalanceTransfer { to, value } => Call::BalanceTransfer {
                destination: decode_fixed::<32>("call.to", to)?,
                value: value.to_biguint("call.value")?,
            },
        };

        Ok(TransactionDescriptor::builder()
            .genesis_hash(decode_fixed::<32>("genesis_hash", &self.genesis_hash)?)
            .block_hash(decode_fixed::<32>("block_hash", &self.block_hash)?)
            .nonce(self.nonce)
            .spec_version(self.spec_version)
            .extrinsic_version(self.extrinsic_version)
            .tip(self.tip.to_biguint("tip")?)
            .era(era)
            .call(call)
            .build()?)
    }
}

fn is_digits(text: &str, is_digit: impl Fn(char) -> bool) -> bool {
    !text.is_empty() && text.chars().all(is_digit)
}

fn decode_fixed<const N: usize>(field: &'static str, value: &str) -> Result<[u8; N], InputError> {
    let digits = value.trim().strip_prefix("0x").unwrap_or(value.trim());
    let bytes = hex::decode(digits).map_err(|e| InputError::InvalidHex {
        field,
        reason: e.to_string(),
    })?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| InputError::InvalidLength {
            field,
            expected: N,
            actual: bytes.len(),
        })
}
