//! Shared test fixtures for JobRisk crates.
//!
//! This crate provides stub models and sample data for testing.
//! It depends only on `jobrisk-core` so every other crate can use it.
//!
//! - [`model`] - Stub risk models (closures, constants, counters, failures)
//! - [`encoders`] - Sample job-title and education-level encoders
//! - [`dataset`] - A small historical dataset in CSV form
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! jobrisk-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use jobrisk_test::model::{formula_model, CountingModel};
//! use jobrisk_test::encoders::sample_encoders;
//! ```

pub mod dataset;
pub mod encoders;
pub mod model;

pub use encoders::sample_encoders;
pub use model::{formula_model, ConstantModel, CountingModel, FailingModel, FnModel};
