//! # Domain Layer
//!
//! Pure encoding logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.
//!
//! RULES:
//! - No I/O operations
//! - No logging
//! - Every encoder is a pure function of its inputs

pub mod call;
pub mod compact;
pub mod config;
pub mod entities;
pub mod errors;
pub mod extrinsic;
pub mod length_prefix;
pub mod payload;

pub use call::encode_call;
pub use compact::{decode_compact, encode_compact, encode_compact_u64};
pub use config::{CallIndex, ChainConfig, ChainConfigBuilder, SignatureScheme};
pub use entities::{AccountId, Call, DescriptorBuilder, Era, Hash, PublicKey, TransactionDescriptor};
pub use errors::{CodecError, ConfigError, ExtrinsicError};
pub use extrinsic::{encode_signed_extrinsic, SIGNED_FLAG};
pub use length_prefix::encode_length_prefix;
pub use payload::{encode_era_nonce_tip, encode_payload};
