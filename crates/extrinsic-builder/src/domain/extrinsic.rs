//! # Signed Extrinsic
//!
//! ```text
//! compact(len) ++ (version | 0x80) ++ address(signer) ++ scheme_tag
//!              ++ signature ++ era ++ compact(nonce) ++ compact(tip) ++ call
//! ```
//!
//! The signature is not verified here. A signature over anything other than
//! the payload of the same descriptor is only caught by the chain.

use super::call::encode_call_to;
use super::config::ChainConfig;
use super::entities::{PublicKey, TransactionDescriptor};
use super::errors::ExtrinsicError;
use super::length_prefix::encode_length_prefix;
use super::payload::encode_era_nonce_tip_to;
use crate::ports::outbound::AccountEncoder;

/// Bit 7 of the version byte marks a signed extrinsic.
pub const SIGNED_FLAG: u8 = 0b1000_0000;

/// Bits of the version byte that carry the format version.
pub const VERSION_MASK: u8 = 0b0111_1111;

/// Version byte of a signed extrinsic.
pub fn signed_version_byte(extrinsic_version: u8) -> u8 {
    (extrinsic_version & VERSION_MASK) | SIGNED_FLAG
}

/// Assemble the signed body without the outer length prefix.
pub fn encode_signed_body<A: AccountEncoder + ?Sized>(
    descriptor: &TransactionDescriptor,
    signer: &PublicKey,
    signature: &[u8],
    config: &ChainConfig,
    accounts: &A,
) -> Result<Vec<u8>, ExtrinsicError> {
    let scheme = config.signature_scheme;
    if signature.len() != scheme.signature_len() {
        return Err(ExtrinsicError::SignatureLength {
            scheme: scheme.name(),
            expected: scheme.signature_len(),
            actual: signature.len(),
        });
    }

    let mut out = Vec::new();
    out.push(signed_version_byte(descriptor.extrinsic_version()));
    out.extend_from_slice(&accounts.encode_account(signer));
    out.push(scheme.tag());
    out.extend_from_slice(signature);
    encode_era_nonce_tip_to(descriptor, &mut out)?;
    encode_call_to(descriptor.call(), config, accounts, &mut out)?;
    Ok(out)
}

/// Assemble the wire-ready signed extrinsic.
///
/// # Errors
/// * `ExtrinsicError::SignatureLength` - signature length differs from the
///   configured scheme
/// * `ExtrinsicError::Codec` - tip or value is too large to compact-encode
pub fn encode_signed_extrinsic<A: AccountEncoder + ?Sized>(
    descriptor: &TransactionDescriptor,
    signer: &PublicKey,
    signature: &[u8],
    config: &ChainConfig,
    accounts: &A,
) -> Result<Vec<u8>, ExtrinsicError> {
    let body = encode_signed_body(descriptor, signer, signature, config, accounts)?;
    Ok(encode_length_prefix(&body))
}
