//! Adapters bridging integration clients to application ports

pub mod completion;

pub use completion::CompletionAdapter;
