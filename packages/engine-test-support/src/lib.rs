//! Engine test support utilities
//!
//! Shared by the engine's unit tests, its integration tests and the
//! simulator's tests: one logging initializer and reproducible seed helpers.

pub mod logging;
pub mod seeds;
