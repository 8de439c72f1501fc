//! Signing Benchmarks — Per-request Auth Overhead
//!
//! Every exchange call signs its payload and parses nothing else on the
//! hot path, so these cover the whole client-side cost of a request.
//!
//! Run with: cargo bench --bench signer_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use okx_savings_sweep::adapters::api::auth::{sign, timestamp};
use okx_savings_sweep::domain::{ResponseEnvelope, is_positive};

/// Benchmark HMAC-SHA256 + base64 over a transfer body.
fn bench_sign_post(c: &mut Criterion) {
    let body = r#"{"ccy":"USDT","amt":"3","from":"18","to":"6"}"#;

    c.bench_function("sign_transfer_post", |b| {
        b.iter(|| {
            let _sig = sign(
                black_box("22582BD0CFF14C41EDBF1AB98506286D"),
                black_box("2020-12-08T09:08:57.715Z"),
                black_box("POST"),
                black_box("/api/v5/asset/transfer"),
                black_box(body),
            );
        });
    });
}

/// Benchmark timestamp generation.
fn bench_timestamp(c: &mut Criterion) {
    c.bench_function("iso_millis_timestamp", |b| {
        b.iter(|| {
            let _ts = timestamp();
        });
    });
}

/// Benchmark balance extraction and the sweep decision.
fn bench_balance_decision(c: &mut Criterion) {
    let envelope: ResponseEnvelope = serde_json::from_str(
        r#"{"code":"0","msg":"","data":[{"details":[
            {"ccy":"USDT","cashBal":"120.5"},
            {"ccy":"ETH","cashBal":"0"},
            {"ccy":"BTC","cashBal":"0.00000001"}
        ]}]}"#,
    )
    .unwrap();

    c.bench_function("cash_balance_and_decision", |b| {
        b.iter(|| {
            let bal = envelope.cash_balance(black_box("BTC"));
            let _sweep = is_positive(&bal);
        });
    });
}

criterion_group!(benches, bench_sign_post, bench_timestamp, bench_balance_decision);
criterion_main!(benches);
