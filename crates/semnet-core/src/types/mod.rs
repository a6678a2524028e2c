//! Core data types for SemNet

pub mod addr;
pub mod element_type;
pub mod pattern;
