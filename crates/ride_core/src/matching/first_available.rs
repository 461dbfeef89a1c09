use bevy_ecs::prelude::Entity;

use super::algorithm::MatchingAlgorithm;

/// First-fit matching: takes the first available driver in registration
/// order, ignoring rating. Deterministic and O(1); this is the ledger's
/// default strategy.
#[derive(Debug, Default)]
pub struct FirstAvailable;

impl MatchingAlgorithm for FirstAvailable {
    fn find_match(&self, _rider: Entity, available_drivers: &[(Entity, f64)]) -> Option<Entity> {
        available_drivers.first().map(|(driver, _rating)| *driver)
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::prelude::World;

    use super::*;

    #[test]
    fn picks_first_candidate_in_order() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();
        let rider = world.spawn_empty().id();

        let matching = FirstAvailable;
        let candidates = [(first, 2.0), (second, 5.0)];
        assert_eq!(matching.find_match(rider, &candidates), Some(first));
    }

    #[test]
    fn no_candidates_means_no_match() {
        let mut world = World::new();
        let rider = world.spawn_empty().id();

        let matching = FirstAvailable;
        assert_eq!(matching.find_match(rider, &[]), None);
    }
}
