use bevy_ecs::prelude::Entity;

/// Trait for strategies that assign a driver to a ride request.
pub trait MatchingAlgorithm: Send + Sync {
    /// Pick a driver for the rider.
    ///
    /// `available_drivers` lists every driver currently eligible for
    /// assignment, paired with its rating, in registration order.
    /// Returns `None` when no driver can serve the request.
    fn find_match(&self, rider: Entity, available_drivers: &[(Entity, f64)]) -> Option<Entity>;
}
