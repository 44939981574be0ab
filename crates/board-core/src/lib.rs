//! # Board Core
//!
//! The domain layer of the message board.
//! This crate contains pure business logic with zero infrastructure dependencies.
//!
//! Note: the board intentionally has no ownership or authorization model.
//! Any client may edit or delete any post; this mirrors the original design
//! and is a documented gap, not an oversight.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
