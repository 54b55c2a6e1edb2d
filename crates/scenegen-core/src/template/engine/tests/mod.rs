//! Tests for template engine
//!
//! Organized into focused submodules, one concern each.

use super::*;

// Test helper functions
mod helpers;

// TokenStream tests
mod tokenstream;
mod tokenstream_performance;


// Error and edge case tests
mod errors;
