use crate::world::World;
use std::collections::BTreeMap;

/// Where the aliens are: city id -> ids of the aliens currently inside.
///
/// Entries are dropped as soon as a city has no occupants left, so every key
/// maps to a non-empty list. Occupants are kept in arrival order; the ordered
/// map keeps seeded runs reproducible.
#[derive(Clone, Debug, Default)]
pub struct CityAliens {
    by_city: BTreeMap<u32, Vec<u32>>,
}

impl CityAliens {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop `count` aliens (ids 1..=count) on uniformly random surviving
    /// cities. A destroyed (empty) world gets no aliens at all.
    pub fn invade(world: &World, count: usize, rng: &mut fastrand::Rng) -> Self {
        let mut spots = Self::new();
        let cities = world.surviving_cities();
        if cities.is_empty() {
            return spots;
        }
        for alien_id in 1..=count as u32 {
            let invaded = cities[rng.usize(..cities.len())];
            spots.move_in(invaded, alien_id);
        }
        spots
    }

    /// Place an alien into a city, creating the entry if absent
    pub fn move_in(&mut self, city: u32, alien_id: u32) {
        self.by_city.entry(city).or_default().push(alien_id);
    }

    /// Pull an alien out of a city, dropping the entry if it empties
    pub fn move_out(&mut self, city: u32, alien_id: u32) {
        if let Some(ids) = self.by_city.get_mut(&city) {
            ids.retain(|&id| id != alien_id);
            if ids.is_empty() {
                self.by_city.remove(&city);
            }
        }
    }

    /// Remove a city's entry entirely, returning its occupants
    pub fn remove_city(&mut self, city: u32) -> Vec<u32> {
        self.by_city.remove(&city).unwrap_or_default()
    }

    /// Occupants of a city, empty if none
    pub fn occupants(&self, city: u32) -> &[u32] {
        self.by_city.get(&city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when no alien occupies any city
    pub fn is_empty(&self) -> bool {
        self.by_city.is_empty()
    }

    /// Total number of aliens still placed
    pub fn alien_count(&self) -> usize {
        self.by_city.values().map(Vec::len).sum()
    }

    /// Deep copy of the assignment, taken before a step mutates the live
    /// structure so the step's decisions never see its own mutations
    pub fn snapshot(&self) -> Vec<(u32, Vec<u32>)> {
        self.by_city
            .iter()
            .map(|(&city, ids)| (city, ids.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::parse_world_from_str;

    #[test]
    fn test_move_in_and_out() {
        let mut spots = CityAliens::new();

        spots.move_in(0, 1);
        spots.move_in(0, 2);
        assert_eq!(spots.occupants(0), &[1, 2]);
        assert_eq!(spots.alien_count(), 2);

        spots.move_out(0, 1);
        assert_eq!(spots.occupants(0), &[2]);

        // Last occupant leaving drops the entry
        spots.move_out(0, 2);
        assert!(spots.is_empty());
        assert_eq!(spots.occupants(0), &[] as &[u32]);
    }

    #[test]
    fn test_remove_city_returns_occupants() {
        let mut spots = CityAliens::new();
        spots.move_in(3, 7);
        spots.move_in(3, 8);

        assert_eq!(spots.remove_city(3), vec![7, 8]);
        assert!(spots.is_empty());
        assert_eq!(spots.remove_city(3), Vec::<u32>::new());
    }

    #[test]
    fn test_invade_assigns_sequential_ids() {
        let world = parse_world_from_str("A north=B\nB south=A\nC\n");
        let mut rng = fastrand::Rng::with_seed(123);

        let spots = CityAliens::invade(&world, 5, &mut rng);

        assert_eq!(spots.alien_count(), 5);
        let mut ids: Vec<u32> = spots
            .snapshot()
            .into_iter()
            .flat_map(|(_, ids)| ids)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_invade_empty_world_places_nothing() {
        let world = parse_world_from_str("");
        let mut rng = fastrand::Rng::with_seed(1);

        let spots = CityAliens::invade(&world, 10, &mut rng);

        assert!(spots.is_empty());
    }

    #[test]
    fn test_invade_zero_aliens() {
        let world = parse_world_from_str("A north=B\nB south=A\n");
        let mut rng = fastrand::Rng::with_seed(1);

        let spots = CityAliens::invade(&world, 0, &mut rng);

        assert!(spots.is_empty());
    }
}
