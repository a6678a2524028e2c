//! SemNet Store Implementations
//!
//! This crate provides concrete implementations of the `GraphStore` trait.
//!
//! # Available Backends
//!
//! - `MemStore`: In-memory associative memory (for testing and embedding)

pub mod mem;

// Re-export the trait from semnet-core
pub use semnet_core::{GraphStore, StoreError, StoreResult};

// Re-export implementations
pub use mem::{MemStore, MemStoreConfig};
