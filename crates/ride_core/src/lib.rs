pub mod ecs;
pub mod error;
pub mod matching;
pub mod pricing;
pub mod system;
pub mod telemetry;
pub mod validation;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
