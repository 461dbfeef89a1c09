use std::error::Error;
use std::fmt;

/// Typed failure outcomes for `RideSystem` operations. No domain error ever
/// panics or aborts; every variant carries enough context for a caller to
/// render a human-readable message.
#[derive(Debug, Clone, PartialEq)]
pub enum RideError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidLocation(String),
    NegativeBalance(f64),
    /// Empty source/destination or a non-positive distance in a ride request.
    InvalidTripDetails,
    RiderNotFound(u64),
    NoDriverAvailable,
    InsufficientFunds {
        required: f64,
        available: f64,
    },
    /// Covers both "no such trip id" and "trip not in the required state".
    TripNotFound(u64),
    /// No trip in state `Started` belongs to this rider.
    NoActiveTrip(u64),
    InvalidRating(f64),
}

impl fmt::Display for RideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideError::InvalidName(name) => {
                write!(f, "invalid name {name:?}: names may only contain alphabetic characters")
            }
            RideError::InvalidPhone(phone) => {
                write!(f, "invalid phone number {phone:?}: phone must be exactly 10 digits")
            }
            RideError::InvalidLocation(location) => write!(
                f,
                "invalid location {location:?}: only letters, spaces and commas are allowed"
            ),
            RideError::NegativeBalance(balance) => {
                write!(f, "invalid balance {balance:.2}: balance cannot be negative")
            }
            RideError::InvalidTripDetails => write!(
                f,
                "invalid trip details: source and destination must be non-empty and distance positive"
            ),
            RideError::RiderNotFound(id) => write!(f, "rider {id} not found"),
            RideError::NoDriverAvailable => write!(f, "no available drivers currently"),
            RideError::InsufficientFunds {
                required,
                available,
            } => write!(
                f,
                "insufficient wallet balance: required ${required:.2}, available ${available:.2}"
            ),
            RideError::TripNotFound(id) => {
                write!(f, "trip {id} not found or not in the required state")
            }
            RideError::NoActiveTrip(rider_id) => {
                write!(f, "no active trip found for rider {rider_id}")
            }
            RideError::InvalidRating(rating) => {
                write!(f, "invalid rating {rating}: must be between 1.0 and 5.0")
            }
        }
    }
}

impl Error for RideError {}
