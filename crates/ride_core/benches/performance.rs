use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use ride_core::system::RideSystem;

fn ledger_with_drivers(driver_count: usize) -> (RideSystem, u64) {
    let mut system = RideSystem::new();
    let rider_id = system
        .register_rider("Alice", "1234567890", "City A", 1_000_000.0)
        .expect("rider");
    for i in 0..driver_count {
        let phone = format!("{i:010}");
        system
            .register_driver("Bob", &phone, "CAR", "City B")
            .expect("driver");
    }
    (system, rider_id)
}

fn bench_request_and_complete(c: &mut Criterion) {
    c.bench_function("request_and_complete_100_drivers", |b| {
        b.iter_batched(
            || ledger_with_drivers(100),
            |(mut system, rider_id)| {
                let trip_id = system
                    .request_ride(rider_id, "X", "Y", 5.0)
                    .expect("trip");
                system.complete_trip(trip_id).expect("completion");
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_first_fit_scan(c: &mut Criterion) {
    c.bench_function("first_fit_scan_1000_drivers", |b| {
        b.iter_batched(
            || ledger_with_drivers(1_000),
            |(mut system, rider_id)| {
                system
                    .request_ride(rider_id, "X", "Y", 1.0)
                    .expect("trip");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_request_and_complete, bench_first_fit_scan);
criterion_main!(benches);
