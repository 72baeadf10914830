//! # Extrinsic Builder Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | compact | Compact encoding per mode |
//! | payload | Signing payload for random transfers |
//! | sign | Full payload → Ed25519 → wire form |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_bigint::BigUint;
use rand::Rng;
use std::time::Duration;

use extrinsic_builder::{
    encode_compact, encode_compact_u64, Call, ChainConfig, Ed25519Signer, ExtrinsicApi,
    ExtrinsicService, TransactionDescriptor,
};

fn random_descriptors(count: usize) -> Vec<TransactionDescriptor> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let mut genesis = [0u8; 32];
            let mut block = [0u8; 32];
            let mut destination = [0u8; 32];
            rng.fill(&mut genesis);
            rng.fill(&mut block);
            rng.fill(&mut destination);

            TransactionDescriptor::builder()
                .genesis_hash(genesis)
                .block_hash(block)
                .nonce(rng.gen_range(0..1_000_000))
                .spec_version(1031)
                .extrinsic_version(4)
                .tip(BigUint::from(rng.gen::<u64>()))
                .call(Call::BalanceTransfer {
                    destination,
                    value: BigUint::from(rng.gen::<u128>()),
                })
                .build()
                .unwrap()
        })
        .collect()
}

// ============================================================================
// Compact encoding, one value per mode
// ============================================================================

fn bench_compact(c: &mut Criterion) {
    let mut group = c.benchmark_group("compact");

    for (mode, value) in [
        ("single", 42u64),
        ("two", 16_383),
        ("four", 1 << 29),
        ("big", u64::MAX),
    ] {
        group.bench_with_input(BenchmarkId::new("u64", mode), &value, |b, &v| {
            b.iter(|| black_box(encode_compact_u64(black_box(v))))
        });
    }

    let big = BigUint::from(u128::MAX);
    group.bench_function("biguint_u128_max", |b| {
        b.iter(|| black_box(encode_compact(black_box(&big))))
    });

    group.finish();
}

// ============================================================================
// Payload and signing
// ============================================================================

fn bench_payload_and_sign(c: &mut Criterion) {
    let service = ExtrinsicService::from_config(ChainConfig::default()).unwrap();
    let signer = Ed25519Signer::from_seed([0x42; 32]);

    let mut group = c.benchmark_group("extrinsic");
    group.measurement_time(Duration::from_secs(5));

    for size in [10usize, 100] {
        let descriptors = random_descriptors(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("payload", size), &descriptors, |b, ds| {
            b.iter(|| {
                for d in ds {
                    black_box(service.signing_payload(d).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("sign", size), &descriptors, |b, ds| {
            b.iter(|| {
                for d in ds {
                    black_box(service.sign(d, &signer).unwrap());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compact, bench_payload_and_sign);

criterion_main!(benches);
