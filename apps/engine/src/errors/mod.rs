//! Error handling for the trick engine.

pub mod domain;
pub mod error_code;

pub use domain::{ConfigKind, DomainError};
pub use error_code::ErrorCode;
