//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators the assemblers consume but do not implement themselves.

use crate::domain::config::SignatureScheme;
use crate::domain::entities::{AccountId, PublicKey};
use thiserror::Error;

/// Error from a payload signer.
#[derive(Debug, Error)]
pub enum SignerError {
    /// The key material could not be used.
    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    /// The backend refused or failed to sign.
    #[error("Signing backend error: {0}")]
    Backend(String),
}

/// Converts an account identifier into its on-chain address bytes.
///
/// The output has a fixed, chain-defined width: a kind tag followed by the
/// account id.
pub trait AccountEncoder: Send + Sync {
    /// Encode `account` as address bytes.
    fn encode_account(&self, account: &AccountId) -> Vec<u8>;
}

/// Produces signatures over signing payloads.
///
/// The assemblers treat the output as opaque bytes; its length must match
/// [`PayloadSigner::scheme`].
pub trait PayloadSigner: Send + Sync {
    /// Scheme of the produced signatures.
    fn scheme(&self) -> SignatureScheme;

    /// Public key of the signing account.
    fn public_key(&self) -> PublicKey;

    /// Sign the raw payload bytes.
    ///
    /// Whether large payloads are hashed first is the signer's decision.
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SignerError>;
}
