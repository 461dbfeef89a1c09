use bevy_ecs::prelude::Entity;

use super::algorithm::MatchingAlgorithm;

/// Rating-based matching: scans all available drivers and picks the one with
/// the highest rating. Ties go to the earlier-registered driver.
#[derive(Debug, Default)]
pub struct HighestRated;

impl MatchingAlgorithm for HighestRated {
    fn find_match(&self, _rider: Entity, available_drivers: &[(Entity, f64)]) -> Option<Entity> {
        let mut best: Option<(Entity, f64)> = None;
        for &(driver, rating) in available_drivers {
            match best {
                Some((_, best_rating)) if rating <= best_rating => {}
                _ => best = Some((driver, rating)),
            }
        }
        best.map(|(driver, _rating)| driver)
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::prelude::World;

    use super::*;

    #[test]
    fn picks_highest_rated_candidate() {
        let mut world = World::new();
        let low = world.spawn_empty().id();
        let high = world.spawn_empty().id();
        let rider = world.spawn_empty().id();

        let matching = HighestRated;
        let candidates = [(low, 3.5), (high, 4.5)];
        assert_eq!(matching.find_match(rider, &candidates), Some(high));
    }

    #[test]
    fn ties_go_to_the_earlier_candidate() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();
        let rider = world.spawn_empty().id();

        let matching = HighestRated;
        let candidates = [(first, 5.0), (second, 5.0)];
        assert_eq!(matching.find_match(rider, &candidates), Some(first));
    }
}
