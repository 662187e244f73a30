//! Error taxonomy for network, student, and restaurant operations.
//!
//! Every operation validates its preconditions up front, so a returned
//! error never leaves partial state behind.

use crate::restaurant::RestaurantId;
use crate::student::StudentId;
use thiserror::Error;

/// The specific failure kinds reported by the grubnet crates.
///
/// All variants are recoverable and reported to the immediate caller;
/// none are fatal to the process.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    #[error("student {0} is already registered")]
    StudentAlreadyRegistered(StudentId),

    #[error("restaurant {0} is already registered")]
    RestaurantAlreadyRegistered(RestaurantId),

    #[error("student {0} is not registered")]
    StudentNotFound(StudentId),

    #[error("restaurant {0} is not registered")]
    RestaurantNotFound(RestaurantId),

    #[error("student {0} cannot befriend themselves")]
    SameStudent(StudentId),

    #[error("students {0} and {1} are already connected")]
    ConnectionAlreadyExists(StudentId, StudentId),

    #[error("student {student} has not rated restaurant {restaurant}")]
    UnratedFavorite {
        student: StudentId,
        restaurant: RestaurantId,
    },

    #[error("rating {0} is outside the allowed range 0..=5")]
    RatingOutOfRange(u8),

    #[error("hop count {0} is negative")]
    InvalidHopCount(i32),
}
