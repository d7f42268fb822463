//! Application ports
//!
//! Traits the adapters implement so services stay testable.

pub mod completion;
pub mod user_store;

pub use completion::CompletionPort;
pub use user_store::UserStore;
