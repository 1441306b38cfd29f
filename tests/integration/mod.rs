//! Integration tests for the Tiergate service
//!
//! These tests drive the real router end to end through `axum-test`.

mod catalog_override;
mod health;
mod selections;
mod tiers;
