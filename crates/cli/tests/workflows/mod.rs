//! Workflow integration tests
//!
//! Tests for complete workflows that exercise multiple commands
//! and validate end-to-end behavior.

pub mod clear_reset;
pub mod import_lifecycle;
pub mod store_views;
