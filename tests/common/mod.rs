#![allow(unused_imports)]
//! Shared test utilities for integration tests.
//!
//! This module provides common functionality used across test files to avoid
//! code duplication and ensure consistent test patterns.
//!
//! # Modules
//!
//! - `fixtures`: A small device domain (types, records, modules) shared across test files
//! - `assertions`: Custom assertion helpers for better test error messages

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items for convenience
pub use fixtures::{
    actuators_module, locked_module, sensor_record, sensors_module, Actuator, Device, Rig, Sensor,
};

// Re-export assertion helpers for better test error messages
pub use assertions::{assert_err, assert_error_contains, assert_ok};
