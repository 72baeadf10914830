//! # Tagged Account Encoder
//!
//! Writes an address as `tag ++ account_id`, the fixed-width lookup-source
//! form used by the reference runtime (tag `0xFF` selects a raw account id).

use crate::domain::config::ChainConfig;
use crate::domain::entities::AccountId;
use crate::ports::outbound::AccountEncoder;

/// Encoded address width: tag byte plus 32-byte account id.
pub const TAGGED_ADDRESS_LEN: usize = 33;

/// [`AccountEncoder`] that prefixes the account id with a kind tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaggedAccountEncoder {
    tag: u8,
}

impl TaggedAccountEncoder {
    /// Create an encoder writing `tag` before each account id.
    pub fn new(tag: u8) -> Self {
        Self { tag }
    }

    /// Create an encoder using the configured address tag.
    pub fn from_config(config: &ChainConfig) -> Self {
        Self::new(config.address_tag)
    }
}

impl AccountEncoder for TaggedAccountEncoder {
    fn encode_account(&self, account: &AccountId) -> Vec<u8> {
        let mut out = Vec::with_capacity(TAGGED_ADDRESS_LEN);
        out.push(self.tag);
        out.extend_from_slice(account);
        out
    }
}
