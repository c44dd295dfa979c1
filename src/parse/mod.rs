//! Parsing module for the ChordPro song sheet core
//!
//! This module contains all the parsing logic for converting
//! raw ChordPro text into a `Document`.

pub mod directive;
pub mod chord_line;
pub mod grammar;

// Re-export commonly used types
pub use directive::*;
pub use chord_line::*;
pub use grammar::*;
