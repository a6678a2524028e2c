//! Test infrastructure for SemNet
//!
//! Provides knowledge-base fixtures, store wrappers that inject failures or
//! perturb iteration order, and a tracing subscriber for test output.

pub mod failing_store;
pub mod fixtures;
pub mod reversed_store;

pub use failing_store::FailingStore;
pub use fixtures::{
    attach_order_role, bootstrap_keynodes, init_tracing, make_operator, named_node,
};
pub use reversed_store::ReversedStore;
