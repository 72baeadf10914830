//! # SCALE Compact Integers
//!
//! Variable-width encoding of non-negative integers. The two low bits of the
//! first byte select the mode:
//!
//! | Mode | Range                        | Width              |
//! |------|------------------------------|--------------------|
//! | `00` | `0 ..= 63`                   | 1 byte             |
//! | `01` | `64 ..= 16_383`              | 2 bytes LE         |
//! | `10` | `16_384 ..= 1_073_741_823`   | 4 bytes LE         |
//! | `11` | `1_073_741_824 ..`           | 1 header + n bytes |
//!
//! In big-integer mode the upper six bits of the header hold `n - 4`, where
//! `n` is the minimal little-endian byte length of the value (at least 4).

use super::errors::CodecError;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Largest value encoded in a single byte.
pub const SINGLE_BYTE_MAX: u64 = 0x3F;

/// Largest value encoded in two bytes.
pub const TWO_BYTE_MAX: u64 = 0x3FFF;

/// Largest value encoded in four bytes.
pub const FOUR_BYTE_MAX: u64 = 0x3FFF_FFFF;

/// Longest big-integer body the six-bit length header can describe.
pub const BIG_INTEGER_MAX_BYTES: usize = 0x3F + 4;

const MODE_SINGLE_BYTE: u8 = 0b00;
const MODE_TWO_BYTE: u8 = 0b01;
const MODE_FOUR_BYTE: u8 = 0b10;
const MODE_BIG_INTEGER: u8 = 0b11;
const MODE_MASK: u8 = 0b11;

// =============================================================================
// ENCODING
// =============================================================================

/// Append the compact encoding of a `u64` to `out`.
///
/// Every `u64` fits the big-integer header, so this never fails.
pub fn encode_compact_u64_to(value: u64, out: &mut Vec<u8>) {
    if value <= SINGLE_BYTE_MAX {
        out.push(((value as u8) << 2) | MODE_SINGLE_BYTE);
    } else if value <= TWO_BYTE_MAX {
        let word = ((value as u16) << 2) | u16::from(MODE_TWO_BYTE);
        out.extend_from_slice(&word.to_le_bytes());
    } else if value <= FOUR_BYTE_MAX {
        let word = ((value as u32) << 2) | u32::from(MODE_FOUR_BYTE);
        out.extend_from_slice(&word.to_le_bytes());
    } else {
        let bytes = value.to_le_bytes();
        let len = significant_len(&bytes).max(4);
        push_big_integer(&bytes[..len], out);
    }
}

/// Compact-encode a `u64`.
pub fn encode_compact_u64(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(9);
    encode_compact_u64_to(value, &mut out);
    out
}

/// Append the compact encoding of an arbitrary-precision integer to `out`.
///
/// # Errors
/// * `CodecError::ValueTooLarge` - the value needs more than
///   [`BIG_INTEGER_MAX_BYTES`] bytes
pub fn encode_compact_to(value: &BigUint, out: &mut Vec<u8>) -> Result<(), CodecError> {
    if let Some(small) = value.to_u64() {
        encode_compact_u64_to(small, out);
        return Ok(());
    }

    // Anything past u64 already needs at least nine bytes.
    let bytes = value.to_bytes_le();
    if bytes.len() > BIG_INTEGER_MAX_BYTES {
        return Err(CodecError::ValueTooLarge {
            bytes: bytes.len(),
            max: BIG_INTEGER_MAX_BYTES,
        });
    }
    push_big_integer(&bytes, out);
    Ok(())
}

/// Compact-encode an arbitrary-precision integer.
pub fn encode_compact(value: &BigUint) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    encode_compact_to(value, &mut out)?;
    Ok(out)
}

fn push_big_integer(le_bytes: &[u8], out: &mut Vec<u8>) {
    debug_assert!((4..=BIG_INTEGER_MAX_BYTES).contains(&le_bytes.len()));
    out.push((((le_bytes.len() - 4) as u8) << 2) | MODE_BIG_INTEGER);
    out.extend_from_slice(le_bytes);
}

fn significant_len(le_bytes: &[u8]) -> usize {
    le_bytes
        .iter()
        .rposition(|byte| *byte != 0)
        .map_or(0, |index| index + 1)
}

// =============================================================================
// DECODING
// =============================================================================

/// Decode one compact integer from the front of `input`, advancing it.
///
/// Non-canonical encodings (a small value in a wide mode) are accepted.
pub fn decode_compact(input: &mut &[u8]) -> Result<BigUint, CodecError> {
    let first = *input.first().ok_or(CodecError::UnexpectedEnd {
        needed: 1,
        available: 0,
    })?;

    match first & MODE_MASK {
        MODE_SINGLE_BYTE => {
            take(input, 1)?;
            Ok(BigUint::from(first >> 2))
        }
        MODE_TWO_BYTE => {
            let bytes = take(input, 2)?;
            let word = u16::from_le_bytes([bytes[0], bytes[1]]);
            Ok(BigUint::from(word >> 2))
        }
        MODE_FOUR_BYTE => {
            let bytes = take(input, 4)?;
            let word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            Ok(BigUint::from(word >> 2))
        }
        _ => {
            let len = usize::from(first >> 2) + 4;
            let bytes = take(input, 1 + len)?;
            Ok(BigUint::from_bytes_le(&bytes[1..]))
        }
    }
}

fn take<'a>(input: &mut &'a [u8], n: usize) -> Result<&'a [u8], CodecError> {
    if input.len() < n {
        return Err(CodecError::UnexpectedEnd {
            needed: n,
            available: input.len(),
        });
    }
    let (head, tail) = input.split_at(n);
    *input = tail;
    Ok(head)
}
