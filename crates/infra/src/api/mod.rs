//! GoBarber API client
//!
//! HTTP-based implementations of the dashboard fetchers.
//!
//! # Architecture
//!
//! - Uses [`HttpClient`](crate::http::HttpClient) (no direct reqwest)
//! - Bearer token from the active session
//! - Status and payload failures classified by [`ApiError`]

pub mod auth;
pub mod client;
pub mod errors;
pub mod schedule;

pub use auth::{AccessTokenProvider, SessionTokenProvider};
pub use client::{ApiClient, ApiClientConfig};
pub use errors::{ApiError, ApiErrorCategory};
pub use schedule::ScheduleApi;
