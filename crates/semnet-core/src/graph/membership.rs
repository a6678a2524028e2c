//! Set membership
//!
//! A set is a node whose members are the targets of its outgoing
//! `ARC_ACCESS_CONST_POS_PERM` arcs. There is no container type; membership
//! lives entirely in the edge structure.
//!
//! Both operations are check-then-act and not atomic. Two concurrent
//! `add_to_set` calls on the same pair can both create an arc; callers that
//! need at-most-one arcs under concurrency must serialize externally.

use crate::error::SemNetResult;
use crate::store::GraphStore;
use crate::types::addr::ElementAddr;
use crate::types::element_type::ElementType;
use crate::types::pattern::TriplePattern;

/// Add `element` to `set`
///
/// Returns `true` if a membership arc was created, `false` if one already
/// existed. A store that refuses to create the arc yields an error.
pub fn add_to_set<S>(store: &S, set: ElementAddr, element: ElementAddr) -> SemNetResult<bool>
where
    S: GraphStore + ?Sized,
{
    if store.check_edge(set, element, ElementType::ARC_ACCESS_CONST_POS_PERM)? {
        return Ok(false);
    }

    let arc = store.create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, set, element)?;
    tracing::trace!(%set, %element, %arc, "Added set member");
    Ok(true)
}

/// Remove `element` from `set`
///
/// Erases every membership arc from `set` to `element`. Returns `true` when
/// at least one arc existed and was erased, `false` when `element` was not a
/// member. Removing a non-member is not an error.
pub fn remove_from_set<S>(store: &S, set: ElementAddr, element: ElementAddr) -> SemNetResult<bool>
where
    S: GraphStore + ?Sized,
{
    let arcs = store.iter3(TriplePattern::new(
        set,
        ElementType::ARC_ACCESS_CONST_POS_PERM,
        element,
    ))?;

    let mut removed = false;
    for triple in arcs {
        removed |= store.erase_element(triple.edge)?;
    }

    if removed {
        tracing::trace!(%set, %element, "Removed set member");
    }
    Ok(removed)
}
