//! Graph-query helpers
//!
//! Stateless operations layered on a [`GraphStore`](crate::store::GraphStore):
//! - `membership`: idempotent set membership over canonical access arcs
//! - `order`: ordinal-role lookup in both directions
//! - `operator`: operator atomic-type resolution
//! - `printer`: identifier rendering and neighborhood dumps
//!
//! # Iteration order
//!
//! Order-role and operator-type resolution return the first qualifying
//! candidate in store iteration order, which is unspecified. They are correct
//! only because a well-formed program attaches at most one qualifying marker.

pub mod membership;
pub mod operator;
pub mod order;
pub mod printer;

pub use membership::{add_to_set, remove_from_set};
pub use operator::resolve_operator_type;
pub use order::{order_role_relation, resolve_order_role_relation};
pub use printer::{
    log_scp_error, log_unknown_operator_type, print_info, system_identifier, write_info,
    NeighborhoodSummary,
};
