//! Error types for the parser.
//!
//! This module defines the diagnostics collected while parsing. It includes:
//!
//! - The error structure carrying the token it was raised at
//! - Specific error variants with their rendered messages
//! - Error names and suggestions for callers printing diagnostics

pub mod errors;
