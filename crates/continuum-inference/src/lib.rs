//! # continuum-inference
//!
//! Additive scoring over an entity's hypothesis slots.
//!
//! 1. [`base_table`] seeds primary/secondary roles from the dislocation pattern
//! 2. [`characteristics`] adds points from the instrument profile
//! 3. [`news`] keyword rules may override the price-derived primary
//!
//! Roles (growth, competition, valuation, moat) are resolved to slots through
//! the profile's role map.

pub mod base_table;
pub mod characteristics;
pub mod engine;
pub mod news;
pub mod scoreboard;

pub use engine::InferenceEngine;
