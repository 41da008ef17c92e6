//! # GoBarber Domain
//!
//! Business domain types and models for the GoBarber provider dashboard.
//!
//! This crate contains:
//! - Domain data types (Appointment, MonthAvailabilityItem, Session, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and locale tables
//!
//! ## Architecture
//! - No dependencies on other GoBarber crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
