//! Persistence backends

pub mod memory_user_store;

pub use memory_user_store::MemoryUserStore;
