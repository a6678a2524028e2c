//! Element type bitmask
//!
//! Types are combinations of independent flags: the element kind (node,
//! value-link, one of three edge families) plus semantic qualifiers such as
//! constancy, access polarity and permanence.
//!
//! # Matching
//!
//! Pattern queries take a type as a filter. A concrete type matches a filter
//! when it carries every bit of the filter, so `ElementType::ANY` (no bits)
//! matches everything and `ElementType::ARC_ACCESS` matches every access arc
//! regardless of its qualifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Element type bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementType(u16);

impl ElementType {
    /// Wildcard - matches every element
    pub const ANY: Self = Self(0);

    // Kinds
    pub const NODE: Self = Self(0x0001);
    pub const LINK: Self = Self(0x0002);
    /// Undirected common edge
    pub const EDGE_COMMON: Self = Self(0x0004);
    /// Directed common arc
    pub const ARC_COMMON: Self = Self(0x0008);
    /// Access arc (membership, role and marker relations)
    pub const ARC_ACCESS: Self = Self(0x0010);

    // Constancy
    pub const CONST: Self = Self(0x0020);
    pub const VAR: Self = Self(0x0040);

    // Access polarity
    pub const POS: Self = Self(0x0080);
    pub const NEG: Self = Self(0x0100);
    pub const FUZ: Self = Self(0x0200);

    // Access permanence
    pub const TEMP: Self = Self(0x0400);
    pub const PERM: Self = Self(0x0800);

    pub const NODE_CONST: Self = Self(Self::NODE.0 | Self::CONST.0);
    pub const NODE_VAR: Self = Self(Self::NODE.0 | Self::VAR.0);
    pub const LINK_CONST: Self = Self(Self::LINK.0 | Self::CONST.0);
    pub const ARC_COMMON_CONST: Self = Self(Self::ARC_COMMON.0 | Self::CONST.0);

    /// Canonical membership edge type
    pub const ARC_ACCESS_CONST_POS_PERM: Self =
        Self(Self::ARC_ACCESS.0 | Self::CONST.0 | Self::POS.0 | Self::PERM.0);

    const KIND_MASK: u16 = Self::NODE.0
        | Self::LINK.0
        | Self::EDGE_COMMON.0
        | Self::ARC_COMMON.0
        | Self::ARC_ACCESS.0;
    const EDGE_MASK: u16 = Self::EDGE_COMMON.0 | Self::ARC_COMMON.0 | Self::ARC_ACCESS.0;

    /// Build a type from raw bits
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw bits
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether this is the wildcard
    pub const fn is_any(self) -> bool {
        self.0 == 0
    }

    pub const fn is_node(self) -> bool {
        self.0 & Self::NODE.0 != 0
    }

    pub const fn is_link(self) -> bool {
        self.0 & Self::LINK.0 != 0
    }

    /// Any of the three edge families
    pub const fn is_edge(self) -> bool {
        self.0 & Self::EDGE_MASK != 0
    }

    pub const fn is_access_arc(self) -> bool {
        self.0 & Self::ARC_ACCESS.0 != 0
    }

    /// Whether the kind bits describe exactly one kind
    pub const fn has_single_kind(self) -> bool {
        (self.0 & Self::KIND_MASK).count_ones() == 1
    }

    /// True if every bit of `filter` is present in `self`
    pub const fn matches(self, filter: Self) -> bool {
        self.0 & filter.0 == filter.0
    }
}

impl BitOr for ElementType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ElementType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ElementType {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_matches_everything() {
        assert!(ElementType::NODE_CONST.matches(ElementType::ANY));
        assert!(ElementType::ARC_ACCESS_CONST_POS_PERM.matches(ElementType::ANY));
        assert!(ElementType::ANY.matches(ElementType::ANY));
    }

    #[test]
    fn test_filter_requires_all_bits() {
        let membership = ElementType::ARC_ACCESS_CONST_POS_PERM;
        assert!(membership.matches(ElementType::ARC_ACCESS));
        assert!(membership.matches(ElementType::ARC_ACCESS | ElementType::CONST));
        assert!(!membership.matches(ElementType::ARC_ACCESS | ElementType::NEG));
        assert!(!ElementType::ARC_ACCESS.matches(membership));
    }

    #[test]
    fn test_kind_predicates() {
        assert!(ElementType::NODE_CONST.is_node());
        assert!(!ElementType::NODE_CONST.is_edge());
        assert!(ElementType::LINK_CONST.is_link());
        assert!(ElementType::ARC_COMMON_CONST.is_edge());
        assert!(!ElementType::ARC_COMMON_CONST.is_access_arc());
        assert!(ElementType::ARC_ACCESS_CONST_POS_PERM.is_edge());
        assert!(ElementType::ARC_ACCESS_CONST_POS_PERM.is_access_arc());
        assert!(ElementType::EDGE_COMMON.is_edge());
    }

    #[test]
    fn test_single_kind() {
        assert!(ElementType::NODE_CONST.has_single_kind());
        assert!(!ElementType::CONST.has_single_kind());
        assert!(!(ElementType::NODE | ElementType::ARC_ACCESS).has_single_kind());
    }

    #[test]
    fn test_bit_ops() {
        let mut ty = ElementType::ARC_ACCESS;
        ty |= ElementType::CONST;
        assert_eq!(ty & ElementType::CONST, ElementType::CONST);
        assert_eq!(ElementType::from_bits(ty.bits()), ty);
        assert_eq!(ElementType::NODE.to_string(), "0x0001");
    }
}
