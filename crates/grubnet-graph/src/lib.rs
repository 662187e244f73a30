//! Grubnet Graph - friendship graph and cross-entity queries
//!
//! This crate owns the `Network`: the authoritative registry of
//! students and restaurants plus the friendship adjacency, stored as a
//! petgraph undirected graph with an id index.
//!
//! # Architecture
//!
//! - `network` — registration, lookups, connections, ratings, favorites
//! - `query` — friend-group favorites aggregation with the two
//!   comparison orders
//! - `recommend` — bounded-hop BFS over the friendship graph
//!
//! # Example
//!
//! ```
//! use grubnet_graph::Network;
//!
//! let mut network = Network::new();
//! network.register_student(1, "Alice").unwrap();
//! network.register_student(2, "Bob").unwrap();
//! network.register_restaurant(10, "Grill", 3, Vec::new()).unwrap();
//! network.add_connection(1, 2).unwrap();
//!
//! network.rate(2, 10, 5).unwrap();
//! network.add_favorite(2, 10).unwrap();
//!
//! // Restaurant 10 is a favorite one friendship hop away from Alice.
//! assert!(network.get_recommendation(1, 10, 1).unwrap());
//! ```

mod network;
mod query;
mod recommend;

pub use grubnet_core::{NetworkError, Restaurant, RestaurantId, Student, StudentId, MAX_RATING};
pub use network::{Network, NetworkStats};
