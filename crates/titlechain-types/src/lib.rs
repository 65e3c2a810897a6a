//! # Titlechain Shared Types
//!
//! This crate contains the domain types shared between the registry
//! client and its backends: principals, wide unsigned integers, user and
//! land records, and the uniform operation result envelope.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a crate
//!   boundary is defined here.
//! - **Decimal at the Boundary**: wide integers ([`Nat`]) parse from and
//!   render to decimal text only; no arithmetic is ever performed on the
//!   text form.
//! - **Uniform Result Envelope**: every mutating backend call returns an
//!   [`OperationResult`], whose payload is present only on success.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entities;
pub mod nat;
pub mod principal;
pub mod result;

pub use entities::{LandRecord, UserRecord};
pub use nat::{Nat, ParseNatError};
pub use principal::Principal;
pub use result::{OperationResult, STATUS_OK};
