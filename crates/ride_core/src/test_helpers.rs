//! Test fixtures shared across module tests.
//!
//! Gated behind the `test-helpers` feature (on by default) so downstream
//! test suites can reuse the same fixtures.

use crate::system::RideSystem;

/// Register the standard test rider: Alice, balance 100.0.
///
/// # Panics
///
/// Panics if registration fails (the fixture fields are always valid).
pub fn register_test_rider(system: &mut RideSystem) -> u64 {
    system
        .register_rider("Alice", "1234567890", "City A", 100.0)
        .expect("test rider should register")
}

/// Register the standard test driver: Bob, car CAR1.
///
/// # Panics
///
/// Panics if registration fails (the fixture fields are always valid).
pub fn register_test_driver(system: &mut RideSystem) -> u64 {
    system
        .register_driver("Bob", "0987654321", "CAR1", "City B")
        .expect("test driver should register")
}

/// A fresh ledger with one rider and one driver already registered.
/// Returns the system plus the rider and driver ids.
pub fn system_with_rider_and_driver() -> (RideSystem, u64, u64) {
    let mut system = RideSystem::new();
    let rider_id = register_test_rider(&mut system);
    let driver_id = register_test_driver(&mut system);
    (system, rider_id, driver_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ids_are_sequential() {
        let (_system, rider_id, driver_id) = system_with_rider_and_driver();
        assert_eq!(rider_id, 1);
        assert_eq!(driver_id, 2);
    }
}
