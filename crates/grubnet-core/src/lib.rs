//! Grubnet Core - Student and restaurant entities
//!
//! This crate holds the entity layer of the grubnet social graph: the
//! `Student` and `Restaurant` types, their identity and ordering rules,
//! and the shared error taxonomy. Entities reference each other by
//! integer id; the `grubnet-graph` crate owns the authoritative
//! instances and resolves ids to them.
//!
//! # Example
//!
//! ```
//! use grubnet_core::{Restaurant, Student};
//!
//! let mut grill = Restaurant::new(10, "Grill", 3, vec!["burger".to_string()]);
//! let mut alice = Student::new(1, "Alice");
//!
//! grill.rate(alice.id(), 5).unwrap();
//! alice.add_favorite(&grill).unwrap();
//! assert!(alice.favorites().contains(&grill.id()));
//! ```

mod error;
mod restaurant;
mod student;

pub use error::NetworkError;
pub use restaurant::{Restaurant, RestaurantId, MAX_RATING};
pub use student::{Student, StudentId};
