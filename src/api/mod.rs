//! ChordPro WASM API
//!
//! This module provides the JavaScript-facing API for the song catalog page.
//! The page consumes the core through two calls: parse raw ChordPro text
//! into a Document, and render a Document (or raw text directly) into an
//! HTML fragment.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `core`: The exported API functions

pub mod helpers;
pub mod core;

// Re-export all public functions
pub use core::*;
