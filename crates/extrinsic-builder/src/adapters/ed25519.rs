//! # Ed25519 Payload Signer
//!
//! Signs extrinsic payloads with ed25519-dalek. Payloads longer than the
//! configured threshold are replaced by their blake2b-256 digest first, the
//! same rule the runtime applies when checking the signature.

use crate::domain::config::{ChainConfig, SignatureScheme, DEFAULT_PAYLOAD_HASH_THRESHOLD};
use crate::domain::entities::PublicKey;
use crate::ports::outbound::{PayloadSigner, SignerError};
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ed25519_dalek::{Signer, SigningKey};
use zeroize::Zeroize;

type Blake2b256 = Blake2b<U32>;

/// blake2b with a 32-byte output.
pub fn blake2_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let digest = hasher.finalize();

    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Ed25519 implementation of [`PayloadSigner`].
pub struct Ed25519Signer {
    signing_key: SigningKey,
    hash_threshold: usize,
}

impl Ed25519Signer {
    /// Create from a 32-byte secret seed.
    ///
    /// The caller's copy of the seed is zeroized once the key is derived.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        seed.zeroize();
        Self {
            signing_key,
            hash_threshold: DEFAULT_PAYLOAD_HASH_THRESHOLD,
        }
    }

    /// Create from a hex seed (`0x` prefix optional).
    ///
    /// # Errors
    /// * `SignerError::InvalidKey` - not hex, or not 32 bytes
    pub fn from_seed_hex(seed_hex: &str) -> Result<Self, SignerError> {
        let trimmed = seed_hex.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let mut bytes =
            hex::decode(digits).map_err(|e| SignerError::InvalidKey(e.to_string()))?;

        if bytes.len() != 32 {
            let len = bytes.len();
            bytes.zeroize();
            return Err(SignerError::InvalidKey(format!(
                "seed must be 32 bytes, got {}",
                len
            )));
        }

        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes);
        bytes.zeroize();

        let signer = Self::from_seed(seed);
        seed.zeroize();
        Ok(signer)
    }

    /// Use the hashing threshold of `config`.
    pub fn with_config(mut self, config: &ChainConfig) -> Self {
        self.hash_threshold = config.payload_hash_threshold;
        self
    }

    /// Bytes actually signed for `payload`.
    pub fn message_for(&self, payload: &[u8]) -> Vec<u8> {
        if payload.len() > self.hash_threshold {
            blake2_256(payload).to_vec()
        } else {
            payload.to_vec()
        }
    }
}

impl PayloadSigner for Ed25519Signer {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    fn public_key(&self) -> PublicKey {
        self.signing_key.verifying_key().to_bytes()
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SignerError> {
        let message = self.message_for(payload);
        Ok(self.signing_key.sign(&message).to_bytes().to_vec())
    }
}
