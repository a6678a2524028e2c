//! SemNet Core - graph-query helpers for semantic-network interpreters
//!
//! This crate implements the helpers an interpreter needs while executing
//! programs stored as semantic networks:
//! - Set membership management over canonical access edges
//! - Ordinal (argument-position) relation resolution
//! - Operator atomic-type resolution
//! - Diagnostic printing of an element and its neighborhood
//!
//! # SBIO Architecture
//!
//! The associative memory store is never owned here. All helpers are generic
//! over the [`GraphStore`] trait, and the catalog of well-known elements is
//! resolved once into a [`Keynodes`] handle that callers pass explicitly.

pub mod error;
pub mod graph;
pub mod keynodes;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{ConfigError, SemNetError, SemNetResult};
pub use graph::{
    add_to_set, log_scp_error, log_unknown_operator_type, order_role_relation, print_info,
    remove_from_set, resolve_operator_type, resolve_order_role_relation, system_identifier,
    write_info, NeighborhoodSummary,
};
pub use keynodes::{KeynodeNames, Keynodes, ORDER_ROLE_COUNT};
pub use store::{GraphStore, StoreError, StoreResult};
pub use types::addr::ElementAddr;
pub use types::element_type::ElementType;
pub use types::pattern::{Slot, Triple, TriplePattern};
