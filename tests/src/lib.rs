//! # Extrinsic Builder Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Codec and signing throughput (criterion)
//! └── src/
//!     └── integration/  # JSON input → payload → signature → wire bytes
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p extrinsic-tests
//! cargo test -p extrinsic-tests integration::
//!
//! # Benchmarks
//! cargo bench -p extrinsic-tests
//! ```
