//! Friend-group favorites aggregation.
//!
//! Gathers the favorites of a student's direct friends (never the
//! student's own), friend by friend in ascending id order, each
//! friend's block sorted by the requested comparison order. A
//! restaurant favorited by several friends appears once, at its first
//! occurrence.

use crate::network::Network;
use grubnet_core::{NetworkError, Restaurant, RestaurantId, StudentId};
use std::cmp::Ordering;
use std::collections::HashSet;

impl Network {
    /// Friends' favorites, each friend's block ordered by rating
    /// descending, distance ascending, id ascending.
    pub fn favorites_by_rating(
        &self,
        student: StudentId,
    ) -> Result<Vec<&Restaurant>, NetworkError> {
        self.friend_favorites(student, Restaurant::cmp_by_rating)
    }

    /// Friends' favorites, each friend's block ordered by distance
    /// ascending, rating descending, id ascending.
    pub fn favorites_by_distance(
        &self,
        student: StudentId,
    ) -> Result<Vec<&Restaurant>, NetworkError> {
        self.friend_favorites(student, Restaurant::cmp_by_distance)
    }

    fn friend_favorites(
        &self,
        student: StudentId,
        cmp: fn(&Restaurant, &Restaurant) -> Ordering,
    ) -> Result<Vec<&Restaurant>, NetworkError> {
        let student = self.get_student(student)?;

        let mut seen: HashSet<RestaurantId> = HashSet::new();
        let mut result: Vec<&Restaurant> = Vec::new();
        for friend_id in student.friends() {
            if let Some(friend) = self.students.get(friend_id) {
                let mut block: Vec<&Restaurant> = friend
                    .favorites()
                    .iter()
                    .filter_map(|id| self.restaurants.get(id))
                    .collect();
                block.sort_by(|a, b| cmp(a, b));
                for restaurant in block {
                    if seen.insert(restaurant.id()) {
                        result.push(restaurant);
                    }
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1 is friends with 2 and 3. Restaurants:
    ///   10 (dist 5), 11 (dist 1), 12 (dist 2)
    /// 2 favorites 11 (rated 5) and 10 (rated 3);
    /// 3 favorites 10 (rated 3 by 2, 3 by 3) and 12 (rated 4);
    /// 1 favorites 12 itself, which must never show up for 1.
    fn fixture() -> Network {
        let mut network = Network::new();
        for id in 1..=3 {
            network.register_student(id, format!("student-{id}")).unwrap();
        }
        network.register_restaurant(10, "grill", 5, Vec::new()).unwrap();
        network.register_restaurant(11, "diner", 1, Vec::new()).unwrap();
        network.register_restaurant(12, "truck", 2, Vec::new()).unwrap();
        network.add_connection(1, 2).unwrap();
        network.add_connection(1, 3).unwrap();

        network.rate(2, 11, 5).unwrap();
        network.rate(2, 10, 3).unwrap();
        network.rate(3, 10, 3).unwrap();
        network.rate(3, 12, 4).unwrap();
        network.rate(1, 12, 2).unwrap();

        network.add_favorite(2, 11).unwrap();
        network.add_favorite(2, 10).unwrap();
        network.add_favorite(3, 10).unwrap();
        network.add_favorite(3, 12).unwrap();
        network.add_favorite(1, 12).unwrap();
        network
    }

    #[test]
    fn test_favorites_by_rating_orders_per_friend() {
        let network = fixture();
        // Friend 2 first: 11 (avg 5), 10 (avg 3). Friend 3: 12 (avg 3,
        // dist 2), 10 already seen.
        let ids: Vec<RestaurantId> = network
            .favorites_by_rating(1)
            .unwrap()
            .iter()
            .map(|r| r.id())
            .collect();
        assert_eq!(ids, vec![11, 10, 12]);
    }

    #[test]
    fn test_favorites_by_distance_orders_per_friend() {
        let network = fixture();
        // Friend 2 first: 11 (dist 1), 10 (dist 5). Friend 3: 12 (dist
        // 2), 10 already seen.
        let ids: Vec<RestaurantId> = network
            .favorites_by_distance(1)
            .unwrap()
            .iter()
            .map(|r| r.id())
            .collect();
        assert_eq!(ids, vec![11, 10, 12]);
    }

    #[test]
    fn test_own_favorites_excluded_without_friends() {
        let network = fixture();
        // Student 2's only friend is 1, whose favorite set is {12}.
        let ids: Vec<RestaurantId> = network
            .favorites_by_rating(2)
            .unwrap()
            .iter()
            .map(|r| r.id())
            .collect();
        assert_eq!(ids, vec![12]);
    }

    #[test]
    fn test_duplicate_kept_at_first_occurrence() {
        let network = fixture();
        let restaurants = network.favorites_by_rating(1).unwrap();
        let tens = restaurants.iter().filter(|r| r.id() == 10).count();
        assert_eq!(tens, 1);
    }

    #[test]
    fn test_unregistered_student_fails() {
        let network = Network::new();
        assert_eq!(
            network.favorites_by_rating(9).err(),
            Some(NetworkError::StudentNotFound(9))
        );
        assert_eq!(
            network.favorites_by_distance(9).err(),
            Some(NetworkError::StudentNotFound(9))
        );
    }
}
