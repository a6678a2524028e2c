//! Element addresses
//!
//! Every element in the associative memory (node, value-link or edge) is
//! identified by an opaque `(segment, offset)` pair assigned by the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of an element inside the store
///
/// Addresses are stable for the lifetime of the element. The `Display`
/// form `seg|offset` is what diagnostics print for elements that carry no
/// system identifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ElementAddr {
    /// Segment number
    pub seg: u16,
    /// Offset within the segment
    pub offset: u16,
}

impl ElementAddr {
    /// Create an address from its segment and offset
    pub const fn new(seg: u16, offset: u16) -> Self {
        Self { seg, offset }
    }

    /// Pack into a single integer (segment in the high half)
    pub const fn to_u32(self) -> u32 {
        ((self.seg as u32) << 16) | self.offset as u32
    }

    /// Inverse of [`ElementAddr::to_u32`]
    pub const fn from_u32(raw: u32) -> Self {
        Self {
            seg: (raw >> 16) as u16,
            offset: raw as u16,
        }
    }
}

impl fmt::Display for ElementAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.seg, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_seg_pipe_offset() {
        assert_eq!(ElementAddr::new(3, 17).to_string(), "3|17");
        assert_eq!(ElementAddr::new(0, 0).to_string(), "0|0");
    }

    #[test]
    fn test_packed_form() {
        let addr = ElementAddr::new(2, 0xBEEF);
        assert_eq!(addr.to_u32(), 0x0002_BEEF);
        assert_eq!(ElementAddr::from_u32(0x0002_BEEF), addr);
    }

    #[test]
    fn test_ordering_is_segment_major() {
        assert!(ElementAddr::new(0, 900) < ElementAddr::new(1, 0));
        assert!(ElementAddr::new(1, 1) < ElementAddr::new(1, 2));
    }
}
