//! # Length Prefix
//!
//! Wraps an already-serialized buffer with its compact-encoded byte count.
//! Apply once, as the outermost step: anything appended afterwards is not
//! covered by the reported length.

use super::compact::encode_compact_u64_to;

/// Prepend `compact(len(buffer))` to `buffer`.
pub fn encode_length_prefix(buffer: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buffer.len() + 5);
    encode_compact_u64_to(buffer.len() as u64, &mut out);
    out.extend_from_slice(buffer);
    out
}
