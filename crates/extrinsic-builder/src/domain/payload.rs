//! # Signing Payload
//!
//! The exact bytes a signer signs:
//!
//! ```text
//! call ++ era ++ compact(nonce) ++ compact(tip) ++ spec_version (LE u32)
//!      ++ genesis_hash ++ block_hash
//! ```
//!
//! No length prefix is applied.

use super::call::encode_call_to;
use super::compact::{encode_compact_to, encode_compact_u64_to};
use super::config::ChainConfig;
use super::entities::{Era, TransactionDescriptor};
use super::errors::CodecError;
use crate::ports::outbound::AccountEncoder;

/// Compact value written in place of the era for immortal transactions.
pub const IMMORTAL_ERA: u64 = 0;

/// Append the era. Only the immortal sentinel is implemented; a mortal era
/// is written as immortal.
pub fn encode_era_to(era: &Era, out: &mut Vec<u8>) {
    match era {
        Era::Immortal | Era::Mortal { .. } => encode_compact_u64_to(IMMORTAL_ERA, out),
    }
}

/// Append the `era ++ nonce ++ tip` block shared by payload and extrinsic.
pub fn encode_era_nonce_tip_to(
    descriptor: &TransactionDescriptor,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    encode_era_to(descriptor.era(), out);
    encode_compact_u64_to(descriptor.nonce(), out);
    encode_compact_to(descriptor.tip(), out)
}

/// Encode the era/nonce/tip block.
pub fn encode_era_nonce_tip(descriptor: &TransactionDescriptor) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    encode_era_nonce_tip_to(descriptor, &mut out)?;
    Ok(out)
}

/// Encode the signing payload of `descriptor`.
pub fn encode_payload<A: AccountEncoder + ?Sized>(
    descriptor: &TransactionDescriptor,
    config: &ChainConfig,
    accounts: &A,
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    encode_call_to(descriptor.call(), config, accounts, &mut out)?;
    encode_era_nonce_tip_to(descriptor, &mut out)?;
    out.extend_from_slice(&descriptor.spec_version().to_le_bytes());
    out.extend_from_slice(descriptor.genesis_hash());
    out.extend_from_slice(descriptor.block_hash());
    Ok(out)
}
