use std::fmt;

use bevy_ecs::prelude::{Component, Entity};
use serde::Serialize;

/// A registered rider. Balance may go negative after a completed trip;
/// registration is the only place a non-negative balance is enforced.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct Rider {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub wallet_balance: f64,
}

impl Rider {
    pub fn deduct_fare(&mut self, fare: f64) {
        self.wallet_balance -= fare;
    }

    pub fn add_funds(&mut self, amount: f64) {
        self.wallet_balance += amount;
    }
}

/// A registered driver. New drivers start at rating 5.0 and available.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct Driver {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub car_number: String,
    pub location: String,
    pub rating: f64,
    pub available: bool,
}

impl Driver {
    pub fn new(id: u64, name: String, phone: String, car_number: String, location: String) -> Self {
        Self {
            id,
            name,
            phone,
            car_number,
            location,
            rating: 5.0,
            available: true,
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Running average: each new rating replaces the old with the mean of both.
    pub fn update_rating(&mut self, new_rating: f64) {
        self.rating = (self.rating + new_rating) / 2.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TripState {
    Started,
    Completed,
    Cancelled,
}

impl fmt::Display for TripState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripState::Started => "Started",
            TripState::Completed => "Completed",
            TripState::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// One ride. Rider and driver are referenced by entity id; the trip does not
/// own them. The fare is fixed at creation and never recomputed.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct Trip {
    pub id: u64,
    pub rider: Entity,
    pub driver: Entity,
    pub source: String,
    pub destination: String,
    pub distance_km: f64,
    pub fare: f64,
    pub state: TripState,
}
