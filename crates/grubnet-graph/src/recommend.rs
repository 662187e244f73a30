//! Bounded-hop recommendation search over the friendship graph.
//!
//! Answers the question: starting from a student, is the restaurant a
//! favorite of some student reachable within a given number of
//! friendship hops? Hop 0 is the starting student itself.

use crate::network::Network;
use grubnet_core::{NetworkError, RestaurantId, StudentId};
use petgraph::graph::NodeIndex;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

impl Network {
    /// Searches level by level from `student`, returning true as soon
    /// as a visited student (the start included) has `restaurant` among
    /// their favorites, false once `max_hops` levels are exhausted.
    ///
    /// A visited set prunes re-expansion only; BFS reaches every node
    /// first at its minimal hop distance, so the bounded existence
    /// answer is the same as with unpruned expansion.
    pub fn get_recommendation(
        &self,
        student: StudentId,
        restaurant: RestaurantId,
        max_hops: i32,
    ) -> Result<bool, NetworkError> {
        let start = *self
            .node_index
            .get(&student)
            .ok_or(NetworkError::StudentNotFound(student))?;
        if !self.restaurants.contains_key(&restaurant) {
            return Err(NetworkError::RestaurantNotFound(restaurant));
        }
        if max_hops < 0 {
            return Err(NetworkError::InvalidHopCount(max_hops));
        }
        let max_hops = max_hops as u32;

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut queue: VecDeque<(NodeIndex, u32)> = VecDeque::new();
        visited.insert(start);
        queue.push_back((start, 0));

        while let Some((node, hops)) = queue.pop_front() {
            let id = self.friendships[node];
            if let Some(current) = self.students.get(&id) {
                if current.favorites().contains(&restaurant) {
                    debug!(student = id, hops, restaurant, "recommendation found");
                    return Ok(true);
                }
            }

            if hops < max_hops {
                for neighbor in self.friendships.neighbors(node) {
                    if visited.insert(neighbor) {
                        queue.push_back((neighbor, hops + 1));
                    }
                }
            }
        }

        Ok(false)
    }
}
