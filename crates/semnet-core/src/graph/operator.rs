//! Operator atomic-type resolution

use crate::error::SemNetResult;
use crate::keynodes::Keynodes;
use crate::store::GraphStore;
use crate::types::addr::ElementAddr;
use crate::types::element_type::ElementType;
use crate::types::pattern::TriplePattern;

/// Find the atomic type of `operator`
///
/// The type is a constant node with an access arc to the operator that is
/// itself a member of `scp_operator_atomic_type`. Operators usually belong to
/// several classes; only the one marked as an atomic type is returned. With
/// more than one marked class the result depends on store iteration order.
pub fn resolve_operator_type<S>(
    store: &S,
    keynodes: &Keynodes,
    operator: ElementAddr,
) -> SemNetResult<Option<ElementAddr>>
where
    S: GraphStore + ?Sized,
{
    let classes = store.iter3(TriplePattern::new(
        ElementType::NODE_CONST,
        ElementType::ARC_ACCESS,
        operator,
    ))?;

    for triple in classes {
        if store.check_edge(
            keynodes.operator_atomic_type(),
            triple.source,
            ElementType::ARC_ACCESS_CONST_POS_PERM,
        )? {
            tracing::trace!(%operator, ty = %triple.source, "Resolved operator type");
            return Ok(Some(triple.source));
        }
    }

    Ok(None)
}
