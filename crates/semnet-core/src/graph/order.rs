//! Ordinal-role relations
//!
//! Operator arguments are ordered by tagging the arc that links the operator
//! to each argument with one of the ten ordinal roles. The tag is an access
//! arc from the role node to the tagged arc; the role node itself is marked as
//! an ordinal role by a membership arc from `order_role_relation`.

use crate::error::SemNetResult;
use crate::keynodes::Keynodes;
use crate::store::GraphStore;
use crate::types::addr::ElementAddr;
use crate::types::element_type::ElementType;
use crate::types::pattern::TriplePattern;

/// Find the ordinal role attached to `edge`
///
/// Candidates are the constant nodes pointing at `edge` through an access
/// arc. The first one marked by `order_role_relation` wins; store iteration
/// order is unspecified, so this is only well defined while at most one
/// ordinal role is attached.
pub fn resolve_order_role_relation<S>(
    store: &S,
    keynodes: &Keynodes,
    edge: ElementAddr,
) -> SemNetResult<Option<ElementAddr>>
where
    S: GraphStore + ?Sized,
{
    let candidates = store.iter3(TriplePattern::new(
        ElementType::NODE_CONST,
        ElementType::ARC_ACCESS,
        edge,
    ))?;

    for triple in candidates {
        if store.check_edge(
            keynodes.order_role_relation(),
            triple.source,
            ElementType::ARC_ACCESS_CONST_POS_PERM,
        )? {
            tracing::trace!(%edge, role = %triple.source, "Resolved order role");
            return Ok(Some(triple.source));
        }
    }

    Ok(None)
}

/// Ordinal role for argument position `order`
///
/// Pure catalog lookup; `None` unless `order` is in `1..=10`.
pub fn order_role_relation(keynodes: &Keynodes, order: u8) -> Option<ElementAddr> {
    keynodes.order_role(order)
}
