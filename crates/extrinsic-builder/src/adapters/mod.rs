//! # Adapters
//!
//! Concrete implementations of the outbound ports, plus the JSON input
//! adapter that produces transaction descriptors.

pub mod address;
pub mod ed25519;
pub mod input;

pub use address::TaggedAccountEncoder;
pub use ed25519::{blake2_256, Ed25519Signer};
pub use input::{Amount, CallInput, EraInput, InputError, SigningInput};
