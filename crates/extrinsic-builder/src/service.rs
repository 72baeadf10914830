//! # Extrinsic Service
//!
//! Application service layer that implements the `ExtrinsicApi` trait.
//!
//! ## Architecture
//!
//! - Implements the inbound port (`ExtrinsicApi`)
//! - Uses the outbound ports (`AccountEncoder`, `PayloadSigner`)
//! - Delegates all byte layout to the domain layer

use crate::adapters::address::TaggedAccountEncoder;
use crate::domain::config::ChainConfig;
use crate::domain::entities::{Era, PublicKey, TransactionDescriptor};
use crate::domain::errors::{ConfigError, ExtrinsicError};
use crate::domain::{extrinsic, payload};
use crate::ports::inbound::{ExtrinsicApi, SignedExtrinsic};
use crate::ports::outbound::{AccountEncoder, PayloadSigner};
use tracing::{debug, warn};

/// Extrinsic building service.
pub struct ExtrinsicService<A: AccountEncoder> {
    config: ChainConfig,
    accounts: A,
}

impl<A: AccountEncoder> ExtrinsicService<A> {
    /// Create a service with an explicit account encoder.
    ///
    /// # Errors
    /// * `ConfigError` - the configuration does not validate
    pub fn new(config: ChainConfig, accounts: A) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, accounts })
    }

    /// Active chain configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    fn note_era(descriptor: &TransactionDescriptor) {
        if let Era::Mortal { phase, period } = descriptor.era() {
            warn!(
                phase = *phase,
                period = *period,
                "Mortal era requested but only immortal is supported; encoding as immortal"
            );
        }
    }
}

impl ExtrinsicService<TaggedAccountEncoder> {
    /// Create a service using the tagged address encoding from `config`.
    pub fn from_config(config: ChainConfig) -> Result<Self, ConfigError> {
        let accounts = TaggedAccountEncoder::from_config(&config);
        Self::new(config, accounts)
    }
}

impl<A: AccountEncoder> ExtrinsicApi for ExtrinsicService<A> {
    fn signing_payload(
        &self,
        descriptor: &TransactionDescriptor,
    ) -> Result<Vec<u8>, ExtrinsicError> {
        Self::note_era(descriptor);
        let bytes = payload::encode_payload(descriptor, &self.config, &self.accounts)?;
        debug!(len = bytes.len(), nonce = descriptor.nonce(), "Encoded signing payload");
        Ok(bytes)
    }

    fn assemble_signed(
        &self,
        descriptor: &TransactionDescriptor,
        signer: &PublicKey,
        signature: &[u8],
    ) -> Result<SignedExtrinsic, ExtrinsicError> {
        Self::note_era(descriptor);
        let encoded = extrinsic::encode_signed_extrinsic(
            descriptor,
            signer,
            signature,
            &self.config,
            &self.accounts,
        )?;
        debug!(
            len = encoded.len(),
            scheme = %self.config.signature_scheme,
            "Assembled signed extrinsic"
        );
        Ok(SignedExtrinsic { encoded })
    }

    fn sign<S: PayloadSigner + ?Sized>(
        &self,
        descriptor: &TransactionDescriptor,
        signer: &S,
    ) -> Result<SignedExtrinsic, ExtrinsicError> {
        let expected = self.config.signature_scheme;
        if signer.scheme() != expected {
            return Err(ExtrinsicError::SchemeMismatch {
                expected: expected.name(),
                actual: signer.scheme().name(),
            });
        }

        // 1. Payload over the same descriptor that is assembled below
        let payload = self.signing_payload(descriptor)?;

        // 2. External signature
        let signature = signer
            .sign(&payload)
            .map_err(|e| ExtrinsicError::SigningFailed(e.to_string()))?;

        // 3. Wire form
        self.assemble_signed(descriptor, &signer.public_key(), &signature)
    }
}
