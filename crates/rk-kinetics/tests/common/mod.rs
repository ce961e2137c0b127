//! Common utilities for integration tests

#![allow(dead_code)]

pub mod mock_models;

pub use mock_models::{FixedGibbs, nitrogen_mechanism};
