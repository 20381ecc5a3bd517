//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{AmbientRelaxation, ConstantHeating};
pub use test_helpers::{assert_profiles_close, lenhovda_model, relative_error};
