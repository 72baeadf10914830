//! # Call Encoding
//!
//! `call_index ++ arguments`. Each [`Call`] variant carries its own fixed
//! index and argument layout; the match below is exhaustive, so a new
//! variant does not compile until it has an encoding.

use super::compact::encode_compact_to;
use super::config::ChainConfig;
use super::entities::Call;
use super::errors::CodecError;
use crate::ports::outbound::AccountEncoder;

/// Append the encoded call to `out`.
pub fn encode_call_to<A: AccountEncoder + ?Sized>(
    call: &Call,
    config: &ChainConfig,
    accounts: &A,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match call {
        Call::BalanceTransfer { destination, value } => {
            out.extend_from_slice(&config.transfer_call_index.to_bytes());
            out.extend_from_slice(&accounts.encode_account(destination));
            encode_compact_to(value, out)
        }
    }
}

/// Encode a call.
pub fn encode_call<A: AccountEncoder + ?Sized>(
    call: &Call,
    config: &ChainConfig,
    accounts: &A,
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    encode_call_to(call, config, accounts, &mut out)?;
    Ok(out)
}
