//! # Domain Entities
//!
//! The transaction descriptor and the closed sets it is built from.
//!
//! ## Lifecycle
//!
//! A [`TransactionDescriptor`] is built once, encoded into a signing payload,
//! and later encoded again together with the produced signature. It exposes
//! no mutators, so both encodings always see the same fields.

use super::errors::ExtrinsicError;
use num_bigint::BigUint;

/// A 32-byte block or genesis hash.
pub type Hash = [u8; 32];

/// A 32-byte account identifier (an Ed25519/Sr25519 public key).
pub type AccountId = [u8; 32];

/// A 32-byte public key of the signing account.
pub type PublicKey = [u8; 32];

/// Validity window of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Era {
    /// Valid forever.
    #[default]
    Immortal,
    /// Valid for `period` blocks starting at `phase`.
    Mortal {
        /// First block of the window (relative to the period).
        phase: u64,
        /// Window length in blocks.
        period: u64,
    },
}

impl Era {
    /// Whether this is the immortal era.
    pub fn is_immortal(&self) -> bool {
        matches!(self, Era::Immortal)
    }
}

/// The instruction a transaction executes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// `balances.transfer(dest, value)`.
    BalanceTransfer {
        /// Receiving account.
        destination: AccountId,
        /// Amount in the chain's smallest unit.
        value: BigUint,
    },
}

/// Immutable description of a transaction to sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionDescriptor {
    genesis_hash: Hash,
    block_hash: Hash,
    nonce: u64,
    spec_version: u32,
    extrinsic_version: u8,
    tip: BigUint,
    era: Era,
    call: Call,
}

impl TransactionDescriptor {
    /// Start building a descriptor.
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    /// Hash of the chain's genesis block.
    pub fn genesis_hash(&self) -> &Hash {
        &self.genesis_hash
    }

    /// Hash of the block the era is checked against.
    pub fn block_hash(&self) -> &Hash {
        &self.block_hash
    }

    /// Account nonce.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Runtime spec version.
    pub fn spec_version(&self) -> u32 {
        self.spec_version
    }

    /// Extrinsic format version (only the low 7 bits are encoded).
    pub fn extrinsic_version(&self) -> u8 {
        self.extrinsic_version
    }

    /// Tip paid to the block author.
    pub fn tip(&self) -> &BigUint {
        &self.tip
    }

    /// Requested validity window.
    pub fn era(&self) -> &Era {
        &self.era
    }

    /// The call to execute.
    pub fn call(&self) -> &Call {
        &self.call
    }
}

/// Builder for [`TransactionDescriptor`].
///
/// Hashes and the call are required; everything else defaults to zero and
/// the immortal era.
#[derive(Default)]
pub struct DescriptorBuilder {
    genesis_hash: Option<Hash>,
    block_hash: Option<Hash>,
    nonce: u64,
    spec_version: u32,
    extrinsic_version: u8,
    tip: BigUint,
    era: Era,
    call: Option<Call>,
}

impl DescriptorBuilder {
    /// Set the genesis hash
    pub fn genesis_hash(mut self, hash: Hash) -> Self {
        self.genesis_hash = Some(hash);
        self
    }

    /// Set the reference block hash
    pub fn block_hash(mut self, hash: Hash) -> Self {
        self.block_hash = Some(hash);
        self
    }

    /// Set the account nonce
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Set the runtime spec version
    pub fn spec_version(mut self, version: u32) -> Self {
        self.spec_version = version;
        self
    }

    /// Set the extrinsic format version
    pub fn extrinsic_version(mut self, version: u8) -> Self {
        self.extrinsic_version = version;
        self
    }

    /// Set the tip
    pub fn tip(mut self, tip: BigUint) -> Self {
        self.tip = tip;
        self
    }

    /// Set the era
    pub fn era(mut self, era: Era) -> Self {
        self.era = era;
        self
    }

    /// Set the call
    pub fn call(mut self, call: Call) -> Self {
        self.call = Some(call);
        self
    }

    /// Build the descriptor.
    ///
    /// # Errors
    /// * `ExtrinsicError::MissingField` - a hash or the call was not set
    pub fn build(self) -> Result<TransactionDescriptor, ExtrinsicError> {
        Ok(TransactionDescriptor {
            genesis_hash: self
                .genesis_hash
                .ok_or(ExtrinsicError::MissingField("genesis_hash"))?,
            block_hash: self
                .block_hash
                .ok_or(ExtrinsicError::MissingField("block_hash"))?,
            nonce: self.nonce,
            spec_version: self.spec_version,
            extrinsic_version: self.extrinsic_version,
            tip: self.tip,
            era: self.era,
            call: self.call.ok_or(ExtrinsicError::MissingField("call"))?,
        })
    }
}
