//! # GoBarber Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client and the GoBarber API fetchers
//! - In-memory session store and navigation history
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Implements traits defined in `gobarber-core`
//! - Contains all "impure" code (network, environment, files)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod session;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiError, ScheduleApi, SessionTokenProvider};
pub use errors::InfraError;
pub use http::HttpClient;
pub use session::{InMemorySessionStore, MemoryHistory};
