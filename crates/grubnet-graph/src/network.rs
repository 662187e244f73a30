//! The authoritative store of students, restaurants, and friendships.
//!
//! The Network owns the single canonical instance of every registered
//! entity and keeps the friendship adjacency in a petgraph undirected
//! graph, with an id index for lookups. Undirected edges make the
//! symmetry invariant atomic: one edge insert covers both directions.

use grubnet_core::{NetworkError, Restaurant, RestaurantId, Student, StudentId};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// The social network connecting hungry students to restaurants.
///
/// Entities are created only through the registration operations and
/// live for the lifetime of the Network; there is no deletion. Every
/// operation validates its preconditions before mutating, so a failed
/// call leaves the store untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct Network {
    /// Authoritative instance per student id.
    pub(crate) students: HashMap<StudentId, Student>,

    /// Authoritative instance per restaurant id.
    pub(crate) restaurants: HashMap<RestaurantId, Restaurant>,

    /// Undirected friendship adjacency; one edge per mutual friendship.
    pub(crate) friendships: UnGraph<StudentId, ()>,

    /// Maps student ids to their node in the friendship graph.
    pub(crate) node_index: HashMap<StudentId, NodeIndex>,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self {
            students: HashMap::new(),
            restaurants: HashMap::new(),
            friendships: UnGraph::new_undirected(),
            node_index: HashMap::new(),
        }
    }

    /// Registers a student with no friends and no favorites.
    pub fn register_student(
        &mut self,
        id: StudentId,
        name: impl Into<String>,
    ) -> Result<&Student, NetworkError> {
        if self.students.contains_key(&id) {
            return Err(NetworkError::StudentAlreadyRegistered(id));
        }
        let node = self.friendships.add_node(id);
        self.node_index.insert(id, node);
        debug!(student = id, "registered student");
        Ok(self
            .students
            .entry(id)
            .or_insert_with(|| Student::new(id, name)))
    }

    /// Registers a restaurant with an empty rating ledger.
    pub fn register_restaurant(
        &mut self,
        id: RestaurantId,
        name: impl Into<String>,
        distance: u32,
        menu: impl IntoIterator<Item = String>,
    ) -> Result<&Restaurant, NetworkError> {
        if self.restaurants.contains_key(&id) {
            return Err(NetworkError::RestaurantAlreadyRegistered(id));
        }
        debug!(restaurant = id, "registered restaurant");
        Ok(self
            .restaurants
            .entry(id)
            .or_insert_with(|| Restaurant::new(id, name, distance, menu)))
    }

    /// Looks up a registered student.
    pub fn get_student(&self, id: StudentId) -> Result<&Student, NetworkError> {
        self.students
            .get(&id)
            .ok_or(NetworkError::StudentNotFound(id))
    }

    /// Looks up a registered restaurant.
    pub fn get_restaurant(&self, id: RestaurantId) -> Result<&Restaurant, NetworkError> {
        self.restaurants
            .get(&id)
            .ok_or(NetworkError::RestaurantNotFound(id))
    }

    /// Creates a mutual friendship between two registered students.
    ///
    /// Both friend sets and the adjacency are updated together; the
    /// existing-edge check looks at both sides.
    pub fn add_connection(&mut self, s1: StudentId, s2: StudentId) -> Result<(), NetworkError> {
        let a = *self
            .node_index
            .get(&s1)
            .ok_or(NetworkError::StudentNotFound(s1))?;
        let b = *self
            .node_index
            .get(&s2)
            .ok_or(NetworkError::StudentNotFound(s2))?;
        if s1 == s2 {
            return Err(NetworkError::SameStudent(s1));
        }
        if self.friendships.contains_edge(a, b) || self.friendships.contains_edge(b, a) {
            return Err(NetworkError::ConnectionAlreadyExists(s1, s2));
        }

        self.students
            .get_mut(&s1)
            .ok_or(NetworkError::StudentNotFound(s1))?
            .add_friend(s2)?;
        self.students
            .get_mut(&s2)
            .ok_or(NetworkError::StudentNotFound(s2))?
            .add_friend(s1)?;
        self.friendships.add_edge(a, b, ());
        debug!(s1, s2, "added friendship");
        Ok(())
    }

    /// Records a registered student's rating of a registered restaurant.
    ///
    /// Membership of both ids is enforced here; the score range check
    /// is the restaurant's.
    pub fn rate(
        &mut self,
        student: StudentId,
        restaurant: RestaurantId,
        score: u8,
    ) -> Result<(), NetworkError> {
        if !self.students.contains_key(&student) {
            return Err(NetworkError::StudentNotFound(student));
        }
        self.restaurants
            .get_mut(&restaurant)
            .ok_or(NetworkError::RestaurantNotFound(restaurant))?
            .rate(student, score)
    }

    /// Marks a restaurant as a student's favorite.
    ///
    /// Fails unless the student has already rated the restaurant.
    pub fn add_favorite(
        &mut self,
        student: StudentId,
        restaurant: RestaurantId,
    ) -> Result<(), NetworkError> {
        let target = self
            .restaurants
            .get(&restaurant)
            .ok_or(NetworkError::RestaurantNotFound(restaurant))?;
        self.students
            .get_mut(&student)
            .ok_or(NetworkError::StudentNotFound(student))?
            .add_favorite(target)
    }

    /// Iterates over all registered students, order unspecified.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Iterates over all registered restaurants, order unspecified.
    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.values()
    }

    /// Returns the number of registered students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Returns the number of registered restaurants.
    pub fn restaurant_count(&self) -> usize {
        self.restaurants.len()
    }

    /// Returns the number of friendship edges.
    pub fn friendship_count(&self) -> usize {
        self.friendships.edge_count()
    }
}

/// Network statistics for diagnostics.
#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkStats {
    pub students: usize,
    pub restaurants: usize,
    pub friendships: usize,
}

impl Network {
    /// Returns network statistics.
    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            students: self.student_count(),
            restaurants: self.restaurant_count(),
            friendships: self.friendship_count(),
        }
    }
}

impl fmt::Display for Network {
    /// Human-readable summary: registered ids sorted ascending, then
    /// each student's sorted friend list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(ids: &[u32]) -> String {
            ids.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }

        let mut student_ids: Vec<StudentId> = self.students.keys().copied().collect();
        student_ids.sort_unstable();
        let mut restaurant_ids: Vec<RestaurantId> = self.restaurants.keys().copied().collect();
        restaurant_ids.sort_unstable();

        writeln!(f, "Registered students: {}.", join(&student_ids))?;
        writeln!(f, "Registered restaurants: {}.", join(&restaurant_ids))?;
        writeln!(f, "Students:")?;
        for id in &student_ids {
            if let Some(student) = self.students.get(id) {
                let friends: Vec<StudentId> = student.friends().iter().copied().collect();
                writeln!(f, "{} -> [{}].", id, join(&friends))?;
            }
        }
        write!(f, "End students.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_with_students(ids: &[StudentId]) -> Network {
        let mut network = Network::new();
        for &id in ids {
            network.register_student(id, format!("student-{id}")).unwrap();
        }
        network
    }

    #[test]
    fn test_register_student_rejects_duplicate_id() {
        let mut network = Network::new();
        network.register_student(1, "alice").unwrap();
        assert_eq!(
            network.register_student(1, "impostor").err(),
            Some(NetworkError::StudentAlreadyRegistered(1))
        );
        assert_eq!(network.student_count(), 1);
    }

    #[test]
    fn test_register_restaurant_rejects_duplicate_id() {
        let mut network = Network::new();
        network
            .register_restaurant(10, "grill", 3, Vec::new())
            .unwrap();
        assert_eq!(
            network
                .register_restaurant(10, "other", 9, Vec::new())
                .err(),
            Some(NetworkError::RestaurantAlreadyRegistered(10))
        );
    }

    #[test]
    fn test_lookup_failures() {
        let network = Network::new();
        assert_eq!(
            network.get_student(1).err(),
            Some(NetworkError::StudentNotFound(1))
        );
        assert_eq!(
            network.get_restaurant(10).err(),
            Some(NetworkError::RestaurantNotFound(10))
        );
    }

    #[test]
    fn test_add_connection_is_symmetric() {
        let mut network = network_with_students(&[1, 2]);
        network.add_connection(1, 2).unwrap();

        assert!(network.get_student(1).unwrap().friends().contains(&2));
        assert!(network.get_student(2).unwrap().friends().contains(&1));
        assert_eq!(network.friendship_count(), 1);
    }

    #[test]
    fn test_add_connection_rejects_self() {
        let mut network = network_with_students(&[1]);
        assert_eq!(
            network.add_connection(1, 1),
            Err(NetworkError::SameStudent(1))
        );
        assert_eq!(network.friendship_count(), 0);
    }

    #[test]
    fn test_add_connection_rejects_duplicate_either_way() {
        let mut network = network_with_students(&[1, 2]);
        network.add_connection(1, 2).unwrap();
        assert_eq!(
            network.add_connection(1, 2),
            Err(NetworkError::ConnectionAlreadyExists(1, 2))
        );
        assert_eq!(
            network.add_connection(2, 1),
            Err(NetworkError::ConnectionAlreadyExists(2, 1))
        );
        assert_eq!(network.friendship_count(), 1);
    }

    #[test]
    fn test_add_connection_requires_registration() {
        let mut network = network_with_students(&[1]);
        assert_eq!(
            network.add_connection(1, 2),
            Err(NetworkError::StudentNotFound(2))
        );
        assert_eq!(
            network.add_connection(3, 1),
            Err(NetworkError::StudentNotFound(3))
        );
        assert!(network.get_student(1).unwrap().friends().is_empty());
    }

    #[test]
    fn test_rate_enforces_membership() {
        let mut network = network_with_students(&[1]);
        network
            .register_restaurant(10, "grill", 3, Vec::new())
            .unwrap();

        assert_eq!(
            network.rate(2, 10, 4),
            Err(NetworkError::StudentNotFound(2))
        );
        assert_eq!(
            network.rate(1, 11, 4),
            Err(NetworkError::RestaurantNotFound(11))
        );

        network.rate(1, 10, 4).unwrap();
        assert_eq!(network.get_restaurant(10).unwrap().average_rating(), 4.0);
    }

    #[test]
    fn test_add_favorite_requires_rating() {
        let mut network = network_with_students(&[1]);
        network
            .register_restaurant(10, "grill", 3, Vec::new())
            .unwrap();

        assert_eq!(
            network.add_favorite(1, 10),
            Err(NetworkError::UnratedFavorite {
                student: 1,
                restaurant: 10
            })
        );

        network.rate(1, 10, 0).unwrap();
        network.add_favorite(1, 10).unwrap();
        assert!(network.get_student(1).unwrap().favorites().contains(&10));
    }

    #[test]
    fn test_stats() {
        let mut network = network_with_students(&[1, 2, 3]);
        network
            .register_restaurant(10, "grill", 3, Vec::new())
            .unwrap();
        network.add_connection(1, 2).unwrap();

        let stats = network.stats();
        assert_eq!(stats.students, 3);
        assert_eq!(stats.restaurants, 1);
        assert_eq!(stats.friendships, 1);
    }

    #[test]
    fn test_display_summary() {
        let mut network = network_with_students(&[3, 1, 2]);
        network
            .register_restaurant(20, "grill", 3, Vec::new())
            .unwrap();
        network
            .register_restaurant(10, "diner", 5, Vec::new())
            .unwrap();
        network.add_connection(1, 2).unwrap();
        network.add_connection(1, 3).unwrap();

        assert_eq!(
            network.to_string(),
            "Registered students: 1, 2, 3.\n\
             Registered restaurants: 10, 20.\n\
             Students:\n\
             1 -> [2, 3].\n\
             2 -> [1].\n\
             3 -> [1].\n\
             End students."
        );
    }

    #[test]
    fn test_display_empty_network() {
        let network = Network::new();
        assert_eq!(
            network.to_string(),
            "Registered students: .\nRegistered restaurants: .\nStudents:\nEnd students."
        );
    }
}
