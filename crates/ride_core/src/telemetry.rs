//! Ledger counters and read-only snapshots for display and export.

use std::fmt;

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::ecs::{Driver, Rider, TripState};

/// Aggregated operation counters, kept as a world resource and incremented
/// as operations succeed or get rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Resource, Serialize)]
pub struct LedgerStats {
    pub riders_registered: u64,
    pub drivers_registered: u64,
    pub trips_requested: u64,
    pub trips_completed: u64,
    pub trips_cancelled: u64,
    pub rejected_no_driver: u64,
    pub rejected_insufficient_funds: u64,
}

/// Snapshot of one rider for listing/export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiderSnapshot {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub wallet_balance: f64,
}

impl From<&Rider> for RiderSnapshot {
    fn from(rider: &Rider) -> Self {
        Self {
            id: rider.id,
            name: rider.name.clone(),
            phone: rider.phone.clone(),
            location: rider.location.clone(),
            wallet_balance: rider.wallet_balance,
        }
    }
}

impl fmt::Display for RiderSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Rider] ID: {:>4}, Name: {:<15}, Phone: {}, Location: {:<15}, Balance: ${:.2}",
            self.id, self.name, self.phone, self.location, self.wallet_balance
        )
    }
}

/// Snapshot of one driver for listing/export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverSnapshot {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub car_number: String,
    pub location: String,
    pub rating: f64,
    pub available: bool,
}

impl From<&Driver> for DriverSnapshot {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name.clone(),
            phone: driver.phone.clone(),
            car_number: driver.car_number.clone(),
            location: driver.location.clone(),
            rating: driver.rating,
            available: driver.available,
        }
    }
}

impl fmt::Display for DriverSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Driver] ID: {:>4}, Name: {:<15}, Phone: {}, Car: {:<10}, Location: {:<15}, Rating: {:.1}, Available: {}",
            self.id,
            self.name,
            self.phone,
            self.car_number,
            self.location,
            self.rating,
            if self.available { "Yes" } else { "No" }
        )
    }
}

/// Snapshot of one trip for listing/export, with rider and driver names
/// already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSnapshot {
    pub id: u64,
    pub rider_id: u64,
    pub rider_name: String,
    pub driver_id: u64,
    pub driver_name: String,
    pub source: String,
    pub destination: String,
    pub distance_km: f64,
    pub fare: f64,
    pub state: TripState,
}

impl fmt::Display for TripSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Trip ID: {:>4}] Rider: {:<15}, Driver: {:<15}, From: {:<15}, To: {:<15}, Distance: {:.2} km, Fare: ${:.2}, Status: {}",
            self.id,
            self.rider_name,
            self.driver_name,
            self.source,
            self.destination,
            self.distance_km,
            self.fare,
            self.state
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rider_snapshot_renders_every_field() {
        let snapshot = RiderSnapshot {
            id: 1,
            name: "Alice".into(),
            phone: "1234567890".into(),
            location: "City A".into(),
            wallet_balance: 100.0,
        };
        let line = snapshot.to_string();
        assert!(line.contains("[Rider]"));
        assert!(line.contains("Alice"));
        assert!(line.contains("1234567890"));
        assert!(line.contains("City A"));
        assert!(line.contains("$100.00"));
    }

    #[test]
    fn driver_snapshot_renders_availability_as_yes_no() {
        let mut snapshot = DriverSnapshot {
            id: 2,
            name: "Bob".into(),
            phone: "0987654321".into(),
            car_number: "CAR1".into(),
            location: "City B".into(),
            rating: 4.5,
            available: true,
        };
        assert!(snapshot.to_string().contains("Available: Yes"));
        snapshot.available = false;
        assert!(snapshot.to_string().contains("Available: No"));
    }

    #[test]
    fn snapshots_serialize_to_json() {
        let snapshot = TripSnapshot {
            id: 1,
            rider_id: 1,
            rider_name: "Alice".into(),
            driver_id: 2,
            driver_name: "Bob".into(),
            source: "X".into(),
            destination: "Y".into(),
            distance_km: 5.0,
            fare: 70.0,
            state: TripState::Started,
        };
        let value = serde_json::to_value(&snapshot).expect("snapshot serializes");
        assert_eq!(value["state"], "Started");
        assert_eq!(value["fare"], 70.0);
    }
}
