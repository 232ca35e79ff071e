//! Benchmarks for the LuxeCut persisted store
//!
//! Run with: cargo bench

use luxecut::booking::time_slots;
use luxecut::catalog::{default_services, format_price, Booking, Language};
use luxecut::storage::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tempfile::tempdir;

fn create_test_bookings(count: usize) -> Vec<Booking> {
    (0..count)
        .map(|i| Booking {
            id: (1_700_000_000_000u64 + i as u64).to_string(),
            service_id: ((i % 6) + 1).to_string(),
            barber_id: format!("b{}", (i % 3) + 1),
            date: "2026-10-20".to_string(),
            time: "10:30".to_string(),
            customer_name: format!("Customer {}", i),
            customer_phone: "0901234567".to_string(),
            total_price: 250_000,
        })
        .collect()
}

/// Memory backend already holding `count` bookings
fn backend_with_bookings(count: usize) -> MemoryBackend {
    let json = serde_json::to_string(&create_test_bookings(count)).unwrap();
    MemoryBackend::new().with_item(BOOKINGS_KEY, json)
}

fn bench_hydration(c: &mut Criterion) {
    let mut group = c.benchmark_group("hydration");

    group.bench_function("open_empty", |b| {
        b.iter(|| PersistedStore::open(black_box(MemoryBackend::new())))
    });

    for size in [100, 1000, 10000] {
        let backend = backend_with_bookings(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("open_{}_bookings", size), |b| {
            b.iter(|| PersistedStore::open(black_box(backend.clone())))
        });
    }

    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_booking");

    group.bench_function("memory", |b| {
        let mut store = PersistedStore::open(backend_with_bookings(1000));
        let booking = create_test_bookings(1).remove(0);

        b.iter(|| store.append_booking(black_box(booking.clone())).unwrap())
    });

    group.finish();
}

fn bench_file_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_backend");

    group.bench_function("set_services", |b| {
        let dir = tempdir().unwrap();
        let mut store = PersistedStore::open(FileBackend::open(dir.path()).unwrap());
        let services = default_services();

        b.iter(|| store.set_services(black_box(services.clone())).unwrap())
    });

    group.bench_function("reopen", |b| {
        let dir = tempdir().unwrap();
        let mut store = PersistedStore::open(FileBackend::open(dir.path()).unwrap());
        for booking in create_test_bookings(500) {
            store.append_booking(booking).unwrap();
        }

        b.iter(|| PersistedStore::open(FileBackend::open(dir.path()).unwrap()))
    });

    group.finish();
}

fn bench_presentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("presentation");

    group.bench_function("time_slots", |b| b.iter(time_slots));

    group.bench_function("format_price_en", |b| {
        b.iter(|| format_price(black_box(1_234_500), Language::En))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hydration,
    bench_append,
    bench_file_writes,
    bench_presentation
);
criterion_main!(benches);
