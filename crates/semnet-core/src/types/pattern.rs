//! Triple patterns for store iteration
//!
//! A triple is `(source, edge, target)`. A pattern fixes each endpoint either
//! to a concrete address or to a type filter, and filters the edge by type.

use super::addr::ElementAddr;
use super::element_type::ElementType;

/// One endpoint slot of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The endpoint must be this element
    Addr(ElementAddr),
    /// The endpoint must match this type filter
    Type(ElementType),
}

impl Slot {
    /// Wildcard slot
    pub const ANY: Self = Slot::Type(ElementType::ANY);

    pub fn as_addr(&self) -> Option<ElementAddr> {
        match self {
            Slot::Addr(addr) => Some(*addr),
            Slot::Type(_) => None,
        }
    }

    /// Test an element against this slot
    pub fn accepts(&self, addr: ElementAddr, ty: ElementType) -> bool {
        match self {
            Slot::Addr(fixed) => *fixed == addr,
            Slot::Type(filter) => ty.matches(*filter),
        }
    }
}

impl From<ElementAddr> for Slot {
    fn from(addr: ElementAddr) -> Self {
        Slot::Addr(addr)
    }
}

impl From<ElementType> for Slot {
    fn from(ty: ElementType) -> Self {
        Slot::Type(ty)
    }
}

/// Query pattern over `(source, edge, target)` triples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriplePattern {
    pub source: Slot,
    pub edge_type: ElementType,
    pub target: Slot,
}

impl TriplePattern {
    /// Create a pattern
    ///
    /// ```
    /// use semnet_core::{ElementAddr, ElementType, TriplePattern};
    ///
    /// let edge = ElementAddr::new(0, 7);
    /// // every constant node pointing at `edge` through an access arc
    /// let pattern = TriplePattern::new(ElementType::NODE_CONST, ElementType::ARC_ACCESS, edge);
    /// assert_eq!(pattern.target.as_addr(), Some(edge));
    /// ```
    pub fn new(source: impl Into<Slot>, edge_type: ElementType, target: impl Into<Slot>) -> Self {
        Self {
            source: source.into(),
            edge_type,
            target: target.into(),
        }
    }

    /// All edges ending at `target`
    pub fn incoming(target: ElementAddr) -> Self {
        Self::new(Slot::ANY, ElementType::ANY, target)
    }

    /// All edges starting at `source`
    pub fn outgoing(source: ElementAddr) -> Self {
        Self::new(source, ElementType::ANY, Slot::ANY)
    }
}

/// A matched `(source, edge, target)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triple {
    pub source: ElementAddr,
    pub edge: ElementAddr,
    pub target: ElementAddr,
}
