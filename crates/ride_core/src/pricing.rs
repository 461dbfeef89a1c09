//! Simple pricing for calculating trip fares.

use bevy_ecs::prelude::Resource;

/// Default base fare in currency units.
pub const BASE_FARE: f64 = 20.0;

/// Default per-kilometer rate in currency units.
pub const PER_KM_RATE: f64 = 10.0;

/// Fare parameters, held as a world resource.
///
/// Formula: `fare = base_fare + (distance_km * per_km_rate)`
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct PricingConfig {
    pub base_fare: f64,
    pub per_km_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_fare: BASE_FARE,
            per_km_rate: PER_KM_RATE,
        }
    }
}

impl PricingConfig {
    /// Calculate the fare for a trip of the given length.
    pub fn fare_for_distance(&self, distance_km: f64) -> f64 {
        self.base_fare + (distance_km * self.per_km_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fare_includes_base_and_distance() {
        let pricing = PricingConfig::default();
        let fare = pricing.fare_for_distance(5.0);
        assert!((fare - 70.0).abs() < 0.01, "20 + 10 * 5 should be 70");
    }

    #[test]
    fn custom_rates_are_applied() {
        let pricing = PricingConfig {
            base_fare: 2.50,
            per_km_rate: 1.50,
        };
        let fare = pricing.fare_for_distance(4.0);
        assert!((fare - 8.50).abs() < 0.01);
    }
}
