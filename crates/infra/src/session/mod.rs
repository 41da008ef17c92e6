//! In-process session and navigation adapters

pub mod history;
pub mod store;

pub use history::MemoryHistory;
pub use store::InMemorySessionStore;
