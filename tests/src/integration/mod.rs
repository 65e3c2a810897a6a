//! # Integration Tests
//!
//! End-to-end session flows over the in-memory ledger adapters.

pub mod flows;
