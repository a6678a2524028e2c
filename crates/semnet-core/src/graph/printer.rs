//! Diagnostic rendering of elements and their neighborhoods
//!
//! Nodes and links render as their system identifier, or as their address
//! (`seg|offset`) when they have none. Edges render structurally as
//! `(source->target)`, recursing into endpoints that are themselves edges.
//! The store never lets an edge reach itself through its endpoints, so the
//! recursion is finite.
//!
//! The exact text layout is meant for humans and may change.

use crate::error::{SemNetError, SemNetResult};
use crate::store::GraphStore;
use crate::types::addr::ElementAddr;
use crate::types::pattern::TriplePattern;
use std::io::Write;

/// Edge counts reported by [`write_info`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborhoodSummary {
    /// Edges ending at the element
    pub incoming: usize,
    /// Edges starting at the element
    pub outgoing: usize,
}

/// Human-readable identifier of an element
pub fn system_identifier<S>(store: &S, addr: ElementAddr) -> SemNetResult<String>
where
    S: GraphStore + ?Sized,
{
    let mut out = String::new();
    push_identifier(store, addr, &mut out)?;
    Ok(out)
}

fn push_identifier<S>(store: &S, addr: ElementAddr, out: &mut String) -> SemNetResult<()>
where
    S: GraphStore + ?Sized,
{
    let ty = store.element_type(addr)?;

    if ty.is_node() || ty.is_link() {
        match store.system_identifier(addr)? {
            Some(identifier) if !identifier.is_empty() => out.push_str(&identifier),
            _ => out.push_str(&addr.to_string()),
        }
        return Ok(());
    }

    let (source, target) = store.edge_endpoints(addr)?;
    out.push('(');
    push_identifier(store, source, out)?;
    out.push_str("->");
    push_identifier(store, target, out)?;
    out.push(')');
    Ok(())
}

/// Write `addr` and every edge incident to it
///
/// Access arcs are drawn as `<-` / `->`, all other edges as `<=` / `=>`.
/// Fails with [`SemNetError::ElementNotFound`] if `addr` is not a live
/// element.
pub fn write_info<S, W>(
    store: &S,
    addr: ElementAddr,
    out: &mut W,
) -> SemNetResult<NeighborhoodSummary>
where
    S: GraphStore + ?Sized,
    W: Write + ?Sized,
{
    if !store.is_element(addr) {
        return Err(SemNetError::ElementNotFound { addr });
    }

    let mut summary = NeighborhoodSummary::default();
    writeln!(out, "{}", system_identifier(store, addr)?)?;

    writeln!(out, "Input arcs:")?;
    for triple in store.iter3(TriplePattern::incoming(addr))? {
        summary.incoming += 1;
        let glyph = if store.element_type(triple.edge)?.is_access_arc() {
            "<-"
        } else {
            "<="
        };
        writeln!(
            out,
            "\t{} {} {}",
            triple.edge,
            glyph,
            system_identifier(store, triple.source)?
        )?;
    }
    writeln!(out, "Total input arcs: {}", summary.incoming)?;

    writeln!(out, "Output arcs:")?;
    for triple in store.iter3(TriplePattern::outgoing(addr))? {
        summary.outgoing += 1;
        let glyph = if store.element_type(triple.edge)?.is_access_arc() {
            "->"
        } else {
            "=>"
        };
        writeln!(
            out,
            "\t{} {} {}",
            triple.edge,
            glyph,
            system_identifier(store, triple.target)?
        )?;
    }
    writeln!(out, "Total output arcs: {}", summary.outgoing)?;

    Ok(summary)
}

/// [`write_info`] to standard output
pub fn print_info<S>(store: &S, addr: ElementAddr) -> SemNetResult<NeighborhoodSummary>
where
    S: GraphStore + ?Sized,
{
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let summary = write_info(store, addr, &mut lock)?;
    lock.flush()?;
    Ok(summary)
}

/// Identifier for log fields; falls back to the address when rendering fails
fn log_label<S>(store: &S, addr: ElementAddr) -> String
where
    S: GraphStore + ?Sized,
{
    system_identifier(store, addr).unwrap_or_else(|_| addr.to_string())
}

/// Report an operator whose atomic type could not be resolved
pub fn log_unknown_operator_type<S>(store: &S, operator: ElementAddr)
where
    S: GraphStore + ?Sized,
{
    tracing::error!(
        element = %log_label(store, operator),
        "SCP Error: Unknown scp-operator type"
    );
}

/// Report an interpreter error concerning `addr`
pub fn log_scp_error<S>(store: &S, text: &str, addr: ElementAddr)
where
    S: GraphStore + ?Sized,
{
    tracing::error!(element = %log_label(store, addr), "SCP Error: {}", text);
}
