//! # Titlechain Test Suite
//!
//! Unified test crate for cross-crate choreography:
//!
//! ```text
//! tests/src/
//! └── integration/      # Session lifecycle and registration flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p titlechain-tests
//!
//! # By category
//! cargo test -p titlechain-tests integration::
//! ```

pub mod integration;
