//! # Integration Test Flows
//!
//! Signing input JSON through to wire-ready bytes:
//!
//! 1. **Input → Descriptor**: `SigningInput` validates and builds the descriptor
//! 2. **Descriptor → Payload**: the service encodes the signing payload
//! 3. **Payload → Signature**: `Ed25519Signer` signs (hashing long payloads)
//! 4. **Signature → Extrinsic**: the service assembles the length-prefixed form
//!
//! Signatures are checked with ed25519-dalek directly, independent of the
//! signer adapter.

#[cfg(test)]
mod tests {
    use ed25519_dalek::{Signature, Verifier, VerifyingKey};
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use extrinsic_builder::adapters::blake2_256;
    use extrinsic_builder::domain::call::encode_call;
    use extrinsic_builder::{
        decode_compact, AccountEncoder, AccountId, Call, ChainConfig, ChainConfigBuilder,
        Ed25519Signer, Era, ExtrinsicApi, ExtrinsicError, ExtrinsicService, PayloadSigner,
        SignatureScheme, SigningInput, TaggedAccountEncoder, TransactionDescriptor,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const GENESIS: &str = "0x91b171bb158e2d3848fa23a9f1c25182fb8e20313b2c1eb49219da7a70ce90c3";
    const BLOCK: &str = "0x5c0d1176a568c1f92944340dbfed9e9c530ebca703c85910e7164cb7d1c9e47b";
    const DEST: &str = "0x8eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a48";
    const SEED: &str = "0x9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    /// Transfer of 12345 at spec version 1031, extrinsic version 4.
    fn signing_input(extra: &str) -> SigningInput {
        let json = format!(
            r#"{{
                "genesis_hash": "{GENESIS}",
                "block_hash": "{BLOCK}",
                "spec_version": 1031,
                "extrinsic_version": 4,
                "call": {{ "balance_transfer": {{ "to": "{DEST}", "value": "12345" }} }}
                {extra}
            }}"#
        );
        SigningInput::from_json(&json).unwrap()
    }

    fn descriptor(extra: &str) -> TransactionDescriptor {
        signing_input(extra).to_descriptor().unwrap()
    }

    fn service() -> ExtrinsicService<TaggedAccountEncoder> {
        ExtrinsicService::from_config(ChainConfig::default()).unwrap()
    }

    fn signer() -> Ed25519Signer {
        Ed25519Signer::from_seed_hex(SEED).unwrap()
    }

    fn hex32(value: &str) -> [u8; 32] {
        hex::decode(value.trim_start_matches("0x"))
            .unwrap()
            .try_into()
            .unwrap()
    }

    fn expected_call() -> Vec<u8> {
        let mut call = vec![0x04, 0x00, 0xFF];
        call.extend_from_slice(&hex32(DEST));
        call.extend_from_slice(&[0xE5, 0xC0]);
        call
    }

    fn verify(public: &[u8; 32], message: &[u8], signature: &[u8]) -> bool {
        let key = VerifyingKey::from_bytes(public).unwrap();
        let signature = Signature::from_slice(signature).unwrap();
        key.verify(message, &signature).is_ok()
    }

    /// Strip the length prefix, checking it matches the remaining bytes.
    fn unprefix(encoded: &[u8]) -> &[u8] {
        let mut rest = encoded;
        let len = decode_compact(&mut rest).unwrap();
        assert_eq!(len, BigUint::from(rest.len()));
        rest
    }

    /// Plain 32-byte addresses, for chains without a multi-address wrapper.
    struct RawAccountEncoder;

    impl AccountEncoder for RawAccountEncoder {
        fn encode_account(&self, account: &AccountId) -> Vec<u8> {
            account.to_vec()
        }
    }

    // =============================================================================
    // SIGNING PAYLOAD
    // =============================================================================

    #[test]
    fn test_payload_layout_from_json() {
        let payload = service().signing_payload(&descriptor("")).unwrap();

        let mut expected = expected_call();
        expected.extend_from_slice(&[0x00, 0x00, 0x00]);
        expected.extend_from_slice(&1031u32.to_le_bytes());
        expected.extend_from_slice(&hex32(GENESIS));
        expected.extend_from_slice(&hex32(BLOCK));

        assert_eq!(payload, expected);
        assert_eq!(payload.len(), 108);
    }

    #[test]
    fn test_nonce_64_shifts_later_segments_by_one() {
        let svc = service();
        let at_zero = svc.signing_payload(&descriptor("")).unwrap();
        let at_64 = svc.signing_payload(&descriptor(r#", "nonce": 64"#)).unwrap();

        assert_eq!(at_64.len(), at_zero.len() + 1);
        assert_eq!(at_64[..37], at_zero[..37]);
        assert_eq!(at_64[37..41], [0x00, 0x01, 0x01, 0x00]);
        assert_eq!(at_64[41..], at_zero[40..]);
    }

    #[test]
    fn test_tip_beyond_u64_uses_big_integer_mode() {
        // 2^64
        let payload = service()
            .signing_payload(&descriptor(r#", "tip": "18446744073709551616""#))
            .unwrap();

        let mut era_nonce_tip = vec![0x00, 0x00, 0x17];
        era_nonce_tip.extend_from_slice(&[0x00; 8]);
        era_nonce_tip.push(0x01);

        assert_eq!(payload[37..49], era_nonce_tip[..]);
        assert_eq!(payload[49..53], 1031u32.to_le_bytes());
    }

    #[test]
    fn test_custom_account_encoder() {
        let svc = ExtrinsicService::new(ChainConfig::default(), RawAccountEncoder).unwrap();
        let payload = svc.signing_payload(&descriptor("")).unwrap();

        assert_eq!(payload.len(), 107);
        assert_eq!(payload[..2], [0x04, 0x00]);
        assert_eq!(payload[2..34], hex32(DEST));
    }

    // =============================================================================
    // SIGNED EXTRINSIC
    // =============================================================================

    #[test]
    fn test_end_to_end_sign_and_verify() {
        let svc = service();
        let signer = signer();
        let d = descriptor("");

        let payload = svc.signing_payload(&d).unwrap();
        let signed = svc.sign(&d, &signer).unwrap();

        // 2-byte prefix for a 139-byte body
        assert_eq!(signed.encoded.len(), 141);
        assert_eq!(signed.encoded[..2], [0x2D, 0x02]);

        let body = unprefix(&signed.encoded);
        assert_eq!(body[0], 0x84);
        assert_eq!(body[1], 0xFF);
        assert_eq!(body[2..34], signer.public_key());
        assert_eq!(body[34], SignatureScheme::Ed25519.tag());
        assert_eq!(body[99..102], [0x00, 0x00, 0x00]);
        assert_eq!(body[102..], expected_call()[..]);

        assert!(verify(&signer.public_key(), &payload, &body[35..99]));
    }

    #[test]
    fn test_nonce_64_signed_prefix() {
        let signed = service()
            .sign(&descriptor(r#", "nonce": 64"#), &signer())
            .unwrap();

        assert_eq!(signed.encoded.len(), 142);
        assert_eq!(signed.encoded[..2], [0x31, 0x02]);
        assert_eq!(unprefix(&signed.encoded)[99..103], [0x00, 0x01, 0x01, 0x00]);
    }

    #[test]
    fn test_hex_output() {
        let signed = service().sign(&descriptor(""), &signer()).unwrap();
        let hex = signed.to_hex();

        assert!(hex.starts_with("0x2d02"));
        assert_eq!(hex.len(), 2 + 2 * 141);
    }

    #[test]
    fn test_long_payload_signed_as_digest() {
        let config = ChainConfigBuilder::new()
            .payload_hash_threshold(64)
            .build()
            .unwrap();
        let svc = ExtrinsicService::from_config(config.clone()).unwrap();
        let signer = signer().with_config(&config);
        let d = descriptor("");

        let payload = svc.signing_payload(&d).unwrap();
        let signed = svc.sign(&d, &signer).unwrap();
        let signature = &unprefix(&signed.encoded)[35..99];

        assert!(verify(&signer.public_key(), &blake2_256(&payload), signature));
        assert!(!verify(&signer.public_key(), &payload, signature));
    }

    #[test]
    fn test_external_ecdsa_signature() {
        let config = ChainConfig::default().with_signature_scheme(SignatureScheme::Ecdsa);
        let svc = ExtrinsicService::from_config(config).unwrap();
        let d = descriptor("");

        let signed = svc.assemble_signed(&d, &[0x11; 32], &[0x22; 65]).unwrap();
        let body = unprefix(&signed.encoded);

        assert_eq!(body[34], 0x02);
        assert_eq!(body[35..100], [0x22; 65]);
        assert_eq!(body[100..103], [0x00, 0x00, 0x00]);

        assert!(matches!(
            svc.assemble_signed(&d, &[0x11; 32], &[0x22; 64]),
            Err(ExtrinsicError::SignatureLength {
                expected: 65,
                actual: 64,
                ..
            })
        ));
    }

    #[test]
    fn test_mortal_era_encodes_as_immortal() {
        let svc = service();
        let signer = signer();
        let immortal = descriptor("");
        let mortal = descriptor(r#", "era": {"phase": 10, "period": 64}"#);
        assert_eq!(mortal.era(), &Era::Mortal { phase: 10, period: 64 });

        assert_eq!(
            svc.signing_payload(&mortal).unwrap(),
            svc.signing_payload(&immortal).unwrap()
        );
        assert_eq!(
            svc.sign(&mortal, &signer).unwrap(),
            svc.sign(&immortal, &signer).unwrap()
        );
    }

    #[test]
    fn test_repeat_builds_are_identical() {
        let svc = service();
        let d = descriptor(r#", "nonce": 9, "tip": 1000"#);

        assert_eq!(
            svc.sign(&d, &signer()).unwrap(),
            svc.sign(&d, &signer()).unwrap()
        );
    }

    #[test]
    fn test_missing_call_rejected_by_builder() {
        let result = TransactionDescriptor::builder()
            .genesis_hash(hex32(GENESIS))
            .block_hash(hex32(BLOCK))
            .build();

        assert_eq!(result, Err(ExtrinsicError::MissingField("call")));
    }

    proptest! {
        #[test]
        fn prop_prefix_matches_body(nonce in any::<u64>(), tip in any::<u128>(), value in any::<u128>()) {
            let d = TransactionDescriptor::builder()
                .genesis_hash(hex32(GENESIS))
                .block_hash(hex32(BLOCK))
                .nonce(nonce)
                .spec_version(1031)
                .extrinsic_version(4)
                .tip(BigUint::from(tip))
                .call(Call::BalanceTransfer {
                    destination: hex32(DEST),
                    value: BigUint::from(value),
                })
                .build()
                .unwrap();

            let signer = signer();
            let svc = service();
            let payload = svc.signing_payload(&d).unwrap();
            let signed = svc.sign(&d, &signer).unwrap();
            let body = unprefix(&signed.encoded);

            let call = encode_call(d.call(), svc.config(), &TaggedAccountEncoder::new(0xFF)).unwrap();

            prop_assert_eq!(body[0], 0x84);
            prop_assert!(payload.starts_with(&call));
            prop_assert!(body.ends_with(&call));
            // era/nonce/tip ++ call appear in both; payload adds spec version and two hashes
            prop_assert_eq!(body.len() - 99, payload.len() - 68);
            prop_assert!(verify(&signer.public_key(), &signer.message_for(&payload), &body[35..99]));
        }
    }
}
