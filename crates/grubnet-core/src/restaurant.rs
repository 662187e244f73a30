//! Restaurant entity and its per-student rating ledger.
//!
//! A restaurant's identity is its id alone; name, distance, and menu are
//! fixed at registration. Ratings accumulate over time, one slot per
//! student, with the latest score overwriting the previous one.

use crate::error::NetworkError;
use crate::student::StudentId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identifier for a restaurant. Caller-supplied, never generated.
pub type RestaurantId = u32;

/// Highest score a student may give a restaurant.
pub const MAX_RATING: u8 = 5;

/// A restaurant with static metadata and a rating ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    name: String,
    /// Distance from the fixed reference point, in the caller's unit.
    distance: u32,
    menu: BTreeSet<String>,
    /// One slot per student; rating again overwrites.
    ratings: HashMap<StudentId, u8>,
}

impl Restaurant {
    /// Creates a restaurant with no ratings yet.
    pub fn new(
        id: RestaurantId,
        name: impl Into<String>,
        distance: u32,
        menu: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            distance,
            menu: menu.into_iter().collect(),
            ratings: HashMap::new(),
        }
    }

    pub fn id(&self) -> RestaurantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Menu items, sorted ascending.
    pub fn menu(&self) -> &BTreeSet<String> {
        &self.menu
    }

    /// Records or overwrites `student`'s rating.
    ///
    /// Membership in a network is not checked here; that enforcement
    /// belongs to the store that owns both entities.
    pub fn rate(&mut self, student: StudentId, score: u8) -> Result<(), NetworkError> {
        if score > MAX_RATING {
            return Err(NetworkError::RatingOutOfRange(score));
        }
        self.ratings.insert(student, score);
        Ok(())
    }

    /// Arithmetic mean of the current scores, or 0.0 with no ratings.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let total: u32 = self.ratings.values().map(|&score| u32::from(score)).sum();
        f64::from(total) / self.ratings.len() as f64
    }

    /// Number of distinct students who have rated this restaurant.
    pub fn number_of_rates(&self) -> usize {
        self.ratings.len()
    }

    /// Whether `student` has a recorded rating here.
    pub fn is_rated_by(&self, student: StudentId) -> bool {
        self.ratings.contains_key(&student)
    }

    /// Orders by average rating descending, then distance ascending,
    /// then id ascending.
    ///
    /// The id key makes this a total order; no ties survive it.
    pub fn cmp_by_rating(a: &Restaurant, b: &Restaurant) -> Ordering {
        b.average_rating()
            .partial_cmp(&a.average_rating())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.distance.cmp(&b.distance))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Orders by distance ascending, then average rating descending,
    /// then id ascending.
    pub fn cmp_by_distance(a: &Restaurant, b: &Restaurant) -> Ordering {
        a.distance
            .cmp(&b.distance)
            .then_with(|| {
                b.average_rating()
                    .partial_cmp(&a.average_rating())
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.id.cmp(&b.id))
    }
}

// Identity is the id alone; two instances with the same id are the
// same restaurant regardless of other fields.
impl PartialEq for Restaurant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Restaurant {}

impl Hash for Restaurant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Ord for Restaurant {
    /// Natural order is ascending id.
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Restaurant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<&str> = self.menu.iter().map(String::as_str).collect();
        write!(
            f,
            "Restaurant: {}.\nId: {}.\nDistance: {}.\nMenu: {}.",
            self.name,
            self.id,
            self.distance,
            items.join(", ")
        )
    }
}
