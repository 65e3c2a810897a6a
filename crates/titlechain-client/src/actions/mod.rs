//! # Action Dispatchers
//!
//! Thin request handlers between the presentation boundary and the
//! synchronization engine: validate backend readiness, translate
//! user-supplied text into backend types, invoke the engine, and report
//! the terminal result. No logic of their own beyond input adaptation.

pub mod dispatcher;
pub mod input;

pub use dispatcher::{ActionDispatcher, DispatchOutcome};
pub use input::parse_nat;
