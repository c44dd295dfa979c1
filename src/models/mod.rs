//! Models module for the ChordPro song sheet core
//!
//! This module contains the data structures produced by parsing
//! and consumed by the HTML renderer.

pub mod song;

// Re-export commonly used types
pub use song::*;
