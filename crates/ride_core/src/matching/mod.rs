pub mod algorithm;
pub mod first_available;
pub mod highest_rated;

pub use algorithm::MatchingAlgorithm;
pub use first_available::FirstAvailable;
pub use highest_rated::HighestRated;
