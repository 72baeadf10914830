//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that callers use to build extrinsics
//! - **Outbound (Driven)**: Address encoding and signing collaborators

pub mod inbound;
pub mod outbound;
