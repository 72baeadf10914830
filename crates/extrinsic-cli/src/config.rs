//! # CLI Configuration
//!
//! Chain configuration comes from an optional JSON file, then environment
//! overrides:
//!
//! | Variable                           | Example   |
//! |------------------------------------|-----------|
//! | `EXTRINSIC_CALL_INDEX`             | `0400`    |
//! | `EXTRINSIC_ADDRESS_TAG`            | `ff`      |
//! | `EXTRINSIC_SIGNATURE_SCHEME`       | `ed25519` |
//! | `EXTRINSIC_PAYLOAD_HASH_THRESHOLD` | `256`     |

use std::path::Path;

use anyhow::{Context, Result};
use extrinsic_builder::{CallIndex, ChainConfig, ConfigError, SignatureScheme};
use tracing::info;

pub const ENV_CALL_INDEX: &str = "EXTRINSIC_CALL_INDEX";
pub const ENV_ADDRESS_TAG: &str = "EXTRINSIC_ADDRESS_TAG";
pub const ENV_SIGNATURE_SCHEME: &str = "EXTRINSIC_SIGNATURE_SCHEME";
pub const ENV_PAYLOAD_HASH_THRESHOLD: &str = "EXTRINSIC_PAYLOAD_HASH_THRESHOLD";

/// Load configuration from `path` (if any) and the process environment.
pub fn load_config(path: Option<&Path>) -> Result<ChainConfig> {
    let config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config = ChainConfig::from_json(&json)
                .with_context(|| format!("Invalid config file {}", path.display()))?;
            info!(path = %path.display(), "Loaded chain config");
            config
        }
        None => ChainConfig::default(),
    };

    // Validated when the service is built
    Ok(apply_overrides(config, |key| std::env::var(key).ok())?)
}

/// Apply overrides looked up by variable name.
pub fn apply_overrides<F>(mut config: ChainConfig, lookup: F) -> Result<ChainConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(ENV_CALL_INDEX) {
        config.transfer_call_index = value.parse::<CallIndex>()?;
        info!(call_index = %value, "Transfer call index overridden from environment");
    }

    if let Some(value) = lookup(ENV_ADDRESS_TAG) {
        let digits = value.trim_start_matches("0x");
        config.address_tag =
            u8::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidValue {
                key: ENV_ADDRESS_TAG,
                value: value.clone(),
            })?;
    }

    if let Some(value) = lookup(ENV_SIGNATURE_SCHEME) {
        config.signature_scheme = value.parse::<SignatureScheme>()?;
    }

    if let Some(value) = lookup(ENV_PAYLOAD_HASH_THRESHOLD) {
        config.payload_hash_threshold =
            value.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_PAYLOAD_HASH_THRESHOLD,
                value: value.clone(),
            })?;
    }

    Ok(config)
}
