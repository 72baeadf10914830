//! # Inbound Ports (Driving Ports / API)
//!
//! Public API for building signing payloads and signed extrinsics.

use crate::domain::entities::{PublicKey, TransactionDescriptor};
use crate::domain::errors::ExtrinsicError;
use crate::ports::outbound::PayloadSigner;

/// A wire-ready signed extrinsic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedExtrinsic {
    /// Length-prefixed extrinsic bytes.
    pub encoded: Vec<u8>,
}

impl SignedExtrinsic {
    /// `0x`-prefixed lowercase hex, the form accepted by `author_submitExtrinsic`.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.encoded))
    }
}

/// Primary extrinsic building API.
///
/// Implementations must be thread-safe (`Send + Sync`). The payload must be
/// produced and signed before the signed extrinsic is assembled for the same
/// descriptor.
pub trait ExtrinsicApi: Send + Sync {
    /// Bytes the signer must sign.
    fn signing_payload(&self, descriptor: &TransactionDescriptor)
        -> Result<Vec<u8>, ExtrinsicError>;

    /// Assemble a signed extrinsic from an externally produced signature.
    ///
    /// # Errors
    /// * `ExtrinsicError::SignatureLength` - `signature` does not fit the
    ///   configured scheme
    fn assemble_signed(
        &self,
        descriptor: &TransactionDescriptor,
        signer: &PublicKey,
        signature: &[u8],
    ) -> Result<SignedExtrinsic, ExtrinsicError>;

    /// Build the payload, sign it with `signer` and assemble the result.
    ///
    /// # Errors
    /// * `ExtrinsicError::SchemeMismatch` - the signer's scheme is not the
    ///   one configured for the chain
    /// * `ExtrinsicError::SigningFailed` - the signer returned an error
    fn sign<S: PayloadSigner + ?Sized>(
        &self,
        descriptor: &TransactionDescriptor,
        signer: &S,
    ) -> Result<SignedExtrinsic, ExtrinsicError>;
}
