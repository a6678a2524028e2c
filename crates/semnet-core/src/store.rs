//! Store abstraction layer (SBIO)
//!
//! This module defines the `GraphStore` trait that abstracts the associative
//! memory holding the semantic network. The helpers in [`crate::graph`] use
//! this trait without knowing the underlying engine.
//!
//! # Implementations
//!
//! - `MemStore` (`semnet-storage`): in-memory store for tests and embedding
//! - Any disk-backed or client-server engine can implement the same trait

use crate::types::addr::ElementAddr;
use crate::types::element_type::ElementType;
use crate::types::pattern::{Triple, TriplePattern};
use thiserror::Error;

/// Store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Element not found: {addr}")]
    ElementNotFound { addr: ElementAddr },

    /// An edge-only operation was applied to a node or link
    #[error("Element {addr} is not an edge")]
    NotAnEdge { addr: ElementAddr },

    #[error("Invalid element type {ty}: {reason}")]
    InvalidType { ty: ElementType, reason: &'static str },

    #[error("Store capacity exceeded")]
    CapacityExceeded,

    #[error("System identifier '{identifier}' is already assigned to {owner}")]
    IdentifierInUse {
        identifier: String,
        owner: ElementAddr,
    },

    #[error("I/O error: {message}")]
    Io { message: String },
}

/// Convenience type alias for store results
pub type StoreResult<T> = Result<T, StoreError>;

/// Abstract associative memory interface (SBIO boundary)
///
/// All calls are synchronous. Implementations decide their own locking; a
/// single call must be atomic on its own, but nothing is promised across
/// calls.
///
/// # Element model
///
/// Elements are nodes, value-links and edges. An edge may connect any two
/// elements, including other edges.
///
/// # Iteration order
///
/// The order of triples returned by [`GraphStore::iter3`] is unspecified and
/// may change between calls. Callers must not rely on it.
pub trait GraphStore: Send + Sync {
    /// Whether `addr` currently refers to a live element
    fn is_element(&self, addr: ElementAddr) -> bool;

    /// Type of an element
    fn element_type(&self, addr: ElementAddr) -> StoreResult<ElementType>;

    /// Create a node of the given node type
    fn create_node(&self, ty: ElementType) -> StoreResult<ElementAddr>;

    /// Create a constant value-link
    fn create_link(&self) -> StoreResult<ElementAddr>;

    /// Create an edge of type `ty` from `source` to `target`
    fn create_edge(
        &self,
        ty: ElementType,
        source: ElementAddr,
        target: ElementAddr,
    ) -> StoreResult<ElementAddr>;

    /// Erase an element together with every edge incident to it
    ///
    /// Returns `false` if the element did not exist.
    fn erase_element(&self, addr: ElementAddr) -> StoreResult<bool>;

    /// Source and target of an edge
    fn edge_endpoints(&self, edge: ElementAddr) -> StoreResult<(ElementAddr, ElementAddr)>;

    /// Snapshot of all triples matching `pattern`
    ///
    /// The result is owned, so callers may mutate the store while walking it.
    fn iter3(&self, pattern: TriplePattern) -> StoreResult<Vec<Triple>>;

    /// Whether at least one edge of type `ty` runs from `source` to `target`
    fn check_edge(
        &self,
        source: ElementAddr,
        target: ElementAddr,
        ty: ElementType,
    ) -> StoreResult<bool> {
        Ok(!self
            .iter3(TriplePattern::new(source, ty, target))?
            .is_empty())
    }

    /// System identifier assigned to an element, if any
    fn system_identifier(&self, addr: ElementAddr) -> StoreResult<Option<String>>;

    /// Assign a system identifier, replacing any previous one
    ///
    /// Identifiers are unique across the store.
    fn set_system_identifier(&self, addr: ElementAddr, identifier: &str) -> StoreResult<()>;

    /// Element carrying the given system identifier
    fn find_by_system_identifier(&self, identifier: &str) -> StoreResult<Option<ElementAddr>>;
}
