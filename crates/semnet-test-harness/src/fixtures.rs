//! Helper functions for building small knowledge bases in tests

use semnet_core::{ElementAddr, ElementType, GraphStore, KeynodeNames, Keynodes};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process
///
/// Honours `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

/// Create a constant node carrying `name` as its system identifier
pub fn named_node<S: GraphStore + ?Sized>(store: &S, name: &str) -> ElementAddr {
    let addr = store
        .create_node(ElementType::NODE_CONST)
        .expect("create node");
    store
        .set_system_identifier(addr, name)
        .expect("assign identifier");
    addr
}

/// Populate the keynode catalog the way the knowledge-base bootstrap does
///
/// Creates every standard keynode, marks the ten ordinal roles as members of
/// `order_role_relation`, and resolves the catalog.
pub fn bootstrap_keynodes<S: GraphStore + ?Sized>(store: &S) -> Keynodes {
    let names = KeynodeNames::standard();

    let relation = named_node(store, &names.order_role_relation);
    named_node(store, &names.operator_atomic_type);
    for role_name in &names.order_roles {
        let role = named_node(store, role_name);
        store
            .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, relation, role)
            .expect("mark order role");
    }

    Keynodes::resolve(store, &names).expect("resolve keynodes")
}

/// Tag `arc` with the ordinal role for position `order`
///
/// Returns the tagging arc.
pub fn attach_order_role<S: GraphStore + ?Sized>(
    store: &S,
    keynodes: &Keynodes,
    arc: ElementAddr,
    order: u8,
) -> ElementAddr {
    let role = keynodes.order_role(order).expect("order in 1..=10");
    store
        .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, role, arc)
        .expect("tag arc with role")
}

/// Create an operator node whose atomic type is a fresh node named `type_name`
///
/// Returns `(operator, atomic_type)`.
pub fn make_operator<S: GraphStore + ?Sized>(
    store: &S,
    keynodes: &Keynodes,
    type_name: &str,
) -> (ElementAddr, ElementAddr) {
    let atomic_type = named_node(store, type_name);
    store
        .create_edge(
            ElementType::ARC_ACCESS_CONST_POS_PERM,
            keynodes.operator_atomic_type(),
            atomic_type,
        )
        .expect("mark atomic type");

    let operator = store
        .create_node(ElementType::NODE_CONST)
        .expect("create operator");
    store
        .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, atomic_type, operator)
        .expect("classify operator");

    (operator, atomic_type)
}
