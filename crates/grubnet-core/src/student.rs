//! Student entity: friendships and favorite restaurants.
//!
//! Students reference other entities by id only; the owning network
//! resolves ids to the authoritative instances. `add_friend` is
//! one-directional by design — the network calls it on both sides to
//! keep friendships symmetric.

use crate::error::NetworkError;
use crate::restaurant::{Restaurant, RestaurantId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identifier for a student. Caller-supplied, never generated.
pub type StudentId = u32;

/// A hungry student with friends and favorite restaurants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
    friends: BTreeSet<StudentId>,
    favorites: BTreeSet<RestaurantId>,
}

impl Student {
    /// Creates a student with no friends and no favorites.
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            friends: BTreeSet::new(),
            favorites: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Friend ids, ascending.
    pub fn friends(&self) -> &BTreeSet<StudentId> {
        &self.friends
    }

    /// Favorite restaurant ids, ascending.
    pub fn favorites(&self) -> &BTreeSet<RestaurantId> {
        &self.favorites
    }

    /// Adds a one-directional friend link on this side only.
    ///
    /// The symmetric link is the caller's responsibility (the network
    /// invokes this on both students inside `add_connection`).
    pub fn add_friend(&mut self, other: StudentId) -> Result<(), NetworkError> {
        if other == self.id {
            return Err(NetworkError::SameStudent(self.id));
        }
        if self.friends.contains(&other) {
            return Err(NetworkError::ConnectionAlreadyExists(self.id, other));
        }
        self.friends.insert(other);
        Ok(())
    }

    /// Marks a restaurant as a favorite.
    ///
    /// Rating precedes favoriting: fails unless this student has a
    /// recorded rating at the restaurant. Re-adding is a no-op.
    pub fn add_favorite(&mut self, restaurant: &Restaurant) -> Result<(), NetworkError> {
        if !restaurant.is_rated_by(self.id) {
            return Err(NetworkError::UnratedFavorite {
                student: self.id,
                restaurant: restaurant.id(),
            });
        }
        self.favorites.insert(restaurant.id());
        Ok(())
    }

    /// Favorites with an average rating of at least `min_rating`,
    /// ordered by rating descending, distance ascending, id ascending.
    ///
    /// Favorite ids missing from `restaurants` are skipped; the network
    /// keeps the two in sync, so none are missing in practice.
    pub fn favorites_by_rating<'a>(
        &self,
        restaurants: &'a HashMap<RestaurantId, Restaurant>,
        min_rating: f64,
    ) -> Vec<&'a Restaurant> {
        let mut picks: Vec<&Restaurant> = self
            .favorites
            .iter()
            .filter_map(|id| restaurants.get(id))
            .filter(|r| r.average_rating() >= min_rating)
            .collect();
        picks.sort_by(|a, b| Restaurant::cmp_by_rating(a, b));
        picks
    }

    /// Favorites within `max_distance`, ordered by distance ascending,
    /// rating descending, id ascending.
    pub fn favorites_by_distance<'a>(
        &self,
        restaurants: &'a HashMap<RestaurantId, Restaurant>,
        max_distance: u32,
    ) -> Vec<&'a Restaurant> {
        let mut picks: Vec<&Restaurant> = self
            .favorites
            .iter()
            .filter_map(|id| restaurants.get(id))
            .filter(|r| r.distance() <= max_distance)
            .collect();
        picks.sort_by(|a, b| Restaurant::cmp_by_distance(a, b));
        picks
    }
}

// Identity is the id alone.
impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Ord for Student {
    /// Natural order is ascending id.
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.favorites.iter().map(u32::to_string).collect();
        write!(
            f,
            "Hungry student: {}.\nId: {}.\nFavorites: {}.",
            self.name,
            self.id,
            ids.join(", ")
        )
    }
}
