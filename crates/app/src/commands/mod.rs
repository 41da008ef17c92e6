//! Subcommand handlers

pub mod dashboard;
pub mod logout;

pub use dashboard::run_dashboard;
pub use logout::run_logout;
