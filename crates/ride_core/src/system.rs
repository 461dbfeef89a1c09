//! The ride ledger orchestrator.
//!
//! `RideSystem` owns the entity world, the registration-order rosters and
//! both id counters, and exposes every public operation: registration, trip
//! lifecycle, wallet updates and read-only listings. Single-threaded by
//! design; callers needing concurrent access must serialize operations.

use bevy_ecs::prelude::{Entity, Mut, World};

use crate::ecs::{Driver, Rider, Trip, TripState};
use crate::error::RideError;
use crate::matching::{FirstAvailable, MatchingAlgorithm};
use crate::pricing::PricingConfig;
use crate::telemetry::{DriverSnapshot, LedgerStats, RiderSnapshot, TripSnapshot};
use crate::validation::{is_valid_location, is_valid_name, is_valid_phone};

pub struct RideSystem {
    world: World,
    /// Entity rosters in registration/creation order. Query iteration order
    /// is not contractual, so listing and first-fit scans go through these.
    riders: Vec<Entity>,
    drivers: Vec<Entity>,
    trips: Vec<Entity>,
    /// Shared across riders and drivers; ids interleave and are never reused.
    next_user_id: u64,
    next_trip_id: u64,
    matching: Box<dyn MatchingAlgorithm>,
}

impl Default for RideSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RideSystem {
    /// Ledger with default pricing and first-fit matching.
    pub fn new() -> Self {
        Self::with_matching(Box::new(FirstAvailable))
    }

    pub fn with_matching(matching: Box<dyn MatchingAlgorithm>) -> Self {
        let mut world = World::new();
        world.insert_resource(PricingConfig::default());
        world.insert_resource(LedgerStats::default());
        Self {
            world,
            riders: Vec::new(),
            drivers: Vec::new(),
            trips: Vec::new(),
            next_user_id: 0,
            next_trip_id: 0,
            matching,
        }
    }

    pub fn set_pricing(&mut self, pricing: PricingConfig) {
        self.world.insert_resource(pricing);
    }

    pub fn pricing(&self) -> PricingConfig {
        *self.world.resource::<PricingConfig>()
    }

    pub fn stats(&self) -> LedgerStats {
        *self.world.resource::<LedgerStats>()
    }

    /// Register a rider. Fields are validated in order (name, phone,
    /// location, balance) and the first failure aborts the operation.
    /// Returns the assigned user id.
    pub fn register_rider(
        &mut self,
        name: &str,
        phone: &str,
        location: &str,
        balance: f64,
    ) -> Result<u64, RideError> {
        validate_user_fields(name, phone, location)?;
        if balance < 0.0 {
            return Err(RideError::NegativeBalance(balance));
        }

        let id = self.alloc_user_id();
        let entity = self
            .world
            .spawn(Rider {
                id,
                name: name.to_owned(),
                phone: phone.to_owned(),
                location: location.to_owned(),
                wallet_balance: balance,
            })
            .id();
        self.riders.push(entity);
        self.stats_mut().riders_registered += 1;
        Ok(id)
    }

    /// Register a driver. Car number is free text; rating starts at 5.0 and
    /// the driver is immediately available. Returns the assigned user id.
    pub fn register_driver(
        &mut self,
        name: &str,
        phone: &str,
        car_number: &str,
        location: &str,
    ) -> Result<u64, RideError> {
        validate_user_fields(name, phone, location)?;

        let id = self.alloc_user_id();
        let entity = self
            .world
            .spawn(Driver::new(
                id,
                name.to_owned(),
                phone.to_owned(),
                car_number.to_owned(),
                location.to_owned(),
            ))
            .id();
        self.drivers.push(entity);
        self.stats_mut().drivers_registered += 1;
        Ok(id)
    }

    /// Request a ride for a registered rider. On success the matched driver
    /// becomes unavailable and a trip in state `Started` is recorded; the
    /// returned id identifies that trip.
    ///
    /// The fare is computed exactly once and used both for the balance check
    /// and as the trip's stored fare. A rejected request leaves the driver
    /// available and records no trip.
    pub fn request_ride(
        &mut self,
        rider_id: u64,
        source: &str,
        destination: &str,
        distance_km: f64,
    ) -> Result<u64, RideError> {
        if source.is_empty() || destination.is_empty() || distance_km <= 0.0 {
            return Err(RideError::InvalidTripDetails);
        }

        let (rider_entity, balance) = self
            .riders
            .iter()
            .copied()
            .find_map(|entity| {
                let rider = self.world.get::<Rider>(entity)?;
                (rider.id == rider_id).then(|| (entity, rider.wallet_balance))
            })
            .ok_or(RideError::RiderNotFound(rider_id))?;

        let candidates: Vec<(Entity, f64)> = self
            .drivers
            .iter()
            .copied()
            .filter_map(|entity| {
                let driver = self.world.get::<Driver>(entity)?;
                driver.available.then_some((entity, driver.rating))
            })
            .collect();

        let Some(driver_entity) = self.matching.find_match(rider_entity, &candidates) else {
            self.stats_mut().rejected_no_driver += 1;
            return Err(RideError::NoDriverAvailable);
        };

        let fare = self.pricing().fare_for_distance(distance_km);
        if balance < fare {
            self.stats_mut().rejected_insufficient_funds += 1;
            return Err(RideError::InsufficientFunds {
                required: fare,
                available: balance,
            });
        }

        if let Some(mut driver) = self.world.get_mut::<Driver>(driver_entity) {
            driver.set_available(false);
        }
        let trip_id = self.alloc_trip_id();
        let entity = self
            .world
            .spawn(Trip {
                id: trip_id,
                rider: rider_entity,
                driver: driver_entity,
                source: source.to_owned(),
                destination: destination.to_owned(),
                distance_km,
                fare,
                state: TripState::Started,
            })
            .id();
        self.trips.push(entity);
        self.stats_mut().trips_requested += 1;
        Ok(trip_id)
    }

    /// Complete a started trip: frees the driver and deducts the stored fare
    /// from the rider's wallet (the balance may go negative; there is no
    /// re-check at completion). Returns the fare deducted. A second call on
    /// the same id fails because the trip is no longer `Started`.
    pub fn complete_trip(&mut self, trip_id: u64) -> Result<f64, RideError> {
        let (trip_entity, rider_entity, driver_entity, fare) = self
            .trips
            .iter()
            .copied()
            .find_map(|entity| {
                let trip = self.world.get::<Trip>(entity)?;
                (trip.id == trip_id && trip.state == TripState::Started)
                    .then(|| (entity, trip.rider, trip.driver, trip.fare))
            })
            .ok_or(RideError::TripNotFound(trip_id))?;

        if let Some(mut trip) = self.world.get_mut::<Trip>(trip_entity) {
            trip.state = TripState::Completed;
        }
        if let Some(mut driver) = self.world.get_mut::<Driver>(driver_entity) {
            driver.set_available(true);
        }
        if let Some(mut rider) = self.world.get_mut::<Rider>(rider_entity) {
            rider.deduct_fare(fare);
        }
        self.stats_mut().trips_completed += 1;
        Ok(fare)
    }

    /// Cancel the rider's first trip in state `Started`. Frees the driver,
    /// deducts nothing. Returns the cancelled trip's id.
    pub fn cancel_trip(&mut self, rider_id: u64) -> Result<u64, RideError> {
        let (trip_entity, driver_entity, trip_id) = self
            .trips
            .iter()
            .copied()
            .find_map(|entity| {
                let trip = self.world.get::<Trip>(entity)?;
                if trip.state != TripState::Started {
                    return None;
                }
                let rider = self.world.get::<Rider>(trip.rider)?;
                (rider.id == rider_id).then(|| (entity, trip.driver, trip.id))
            })
            .ok_or(RideError::NoActiveTrip(rider_id))?;

        if let Some(mut trip) = self.world.get_mut::<Trip>(trip_entity) {
            trip.state = TripState::Cancelled;
        }
        if let Some(mut driver) = self.world.get_mut::<Driver>(driver_entity) {
            driver.set_available(true);
        }
        self.stats_mut().trips_cancelled += 1;
        Ok(trip_id)
    }

    /// Add funds to a rider's wallet and return the new balance. The amount
    /// is accepted unconditionally, zero and negative included.
    pub fn recharge_wallet(&mut self, rider_id: u64, amount: f64) -> Result<f64, RideError> {
        let entity = self
            .find_rider(rider_id)
            .ok_or(RideError::RiderNotFound(rider_id))?;
        let mut rider = self
            .world
            .get_mut::<Rider>(entity)
            .ok_or(RideError::RiderNotFound(rider_id))?;
        rider.add_funds(amount);
        Ok(rider.wallet_balance)
    }

    /// Rate the driver of a completed trip. The rating must be in
    /// `[1.0, 5.0]` and is folded into the driver's rating as a running
    /// average. Returns the driver's new rating.
    pub fn rate_driver(&mut self, trip_id: u64, rating: f64) -> Result<f64, RideError> {
        let driver_entity = self
            .trips
            .iter()
            .copied()
            .find_map(|entity| {
                let trip = self.world.get::<Trip>(entity)?;
                (trip.id == trip_id && trip.state == TripState::Completed).then_some(trip.driver)
            })
            .ok_or(RideError::TripNotFound(trip_id))?;

        if !(1.0..=5.0).contains(&rating) {
            return Err(RideError::InvalidRating(rating));
        }

        match self.world.get_mut::<Driver>(driver_entity) {
            Some(mut driver) => {
                driver.update_rating(rating);
                Ok(driver.rating)
            }
            None => Err(RideError::TripNotFound(trip_id)),
        }
    }

    /// All riders, then all drivers, in registration order.
    pub fn list_users(&self) -> (Vec<RiderSnapshot>, Vec<DriverSnapshot>) {
        let riders = self
            .riders
            .iter()
            .filter_map(|&entity| self.world.get::<Rider>(entity))
            .map(RiderSnapshot::from)
            .collect();
        let drivers = self
            .drivers
            .iter()
            .filter_map(|&entity| self.world.get::<Driver>(entity))
            .map(DriverSnapshot::from)
            .collect();
        (riders, drivers)
    }

    /// All trips in creation order, with rider and driver names resolved.
    pub fn list_trips(&self) -> Vec<TripSnapshot> {
        self.trips
            .iter()
            .filter_map(|&entity| {
                let trip = self.world.get::<Trip>(entity)?;
                let rider = self.world.get::<Rider>(trip.rider)?;
                let driver = self.world.get::<Driver>(trip.driver)?;
                Some(TripSnapshot {
                    id: trip.id,
                    rider_id: rider.id,
                    rider_name: rider.name.clone(),
                    driver_id: driver.id,
                    driver_name: driver.name.clone(),
                    source: trip.source.clone(),
                    destination: trip.destination.clone(),
                    distance_km: trip.distance_km,
                    fare: trip.fare,
                    state: trip.state,
                })
            })
            .collect()
    }

    fn find_rider(&self, rider_id: u64) -> Option<Entity> {
        self.riders.iter().copied().find(|&entity| {
            self.world
                .get::<Rider>(entity)
                .is_some_and(|rider| rider.id == rider_id)
        })
    }

    fn alloc_user_id(&mut self) -> u64 {
        self.next_user_id += 1;
        self.next_user_id
    }

    fn alloc_trip_id(&mut self) -> u64 {
        self.next_trip_id += 1;
        self.next_trip_id
    }

    fn stats_mut(&mut self) -> Mut<'_, LedgerStats> {
        self.world.resource_mut::<LedgerStats>()
    }
}

fn validate_user_fields(name: &str, phone: &str, location: &str) -> Result<(), RideError> {
    if !is_valid_name(name) {
        return Err(RideError::InvalidName(name.to_owned()));
    }
    if !is_valid_phone(phone) {
        return Err(RideError::InvalidPhone(phone.to_owned()));
    }
    if !is_valid_location(location) {
        return Err(RideError::InvalidLocation(location.to_owned()));
    }
    Ok(())
}
