//! # Extrinsic Builder
//!
//! Deterministic construction of signing payloads and signed extrinsics for
//! Substrate-style chains.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): SCALE compact codec, call, payload and
//!   extrinsic layouts; pure functions, no I/O
//! - **Ports Layer** (`ports/`): `ExtrinsicApi` (inbound), `AccountEncoder`
//!   and `PayloadSigner` (outbound)
//! - **Adapters Layer** (`adapters/`): tagged address encoding, Ed25519
//!   signer, JSON signing input
//! - **Service Layer** (`service.rs`): wires domain logic to ports
//!
//! ## Flow
//!
//! ```text
//! SigningInput ─→ TransactionDescriptor ─→ signing payload ─→ PayloadSigner
//!                         │                                        │
//!                         └──────────→ signed extrinsic ←── signature
//! ```
//!
//! ## Usage Example
//!
//! ```ignore
//! use extrinsic_builder::{ChainConfig, Ed25519Signer, ExtrinsicApi, ExtrinsicService, SigningInput};
//!
//! let descriptor = SigningInput::from_json(json)?.to_descriptor()?;
//! let service = ExtrinsicService::from_config(ChainConfig::default())?;
//! let signer = Ed25519Signer::from_seed(seed);
//! let extrinsic = service.sign(&descriptor, &signer)?;
//! println!("{}", extrinsic.to_hex());
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{Ed25519Signer, InputError, SigningInput, TaggedAccountEncoder};
pub use domain::compact::{decode_compact, encode_compact, encode_compact_u64};
pub use domain::config::{CallIndex, ChainConfig, ChainConfigBuilder, SignatureScheme};
pub use domain::entities::{AccountId, Call, Era, Hash, PublicKey, TransactionDescriptor};
pub use domain::errors::{CodecError, ConfigError, ExtrinsicError};
pub use domain::length_prefix::encode_length_prefix;
pub use ports::inbound::{ExtrinsicApi, SignedExtrinsic};
pub use ports::outbound::{AccountEncoder, PayloadSigner, SignerError};
pub use service::ExtrinsicService;
