//! # Domain Entities
//!
//! Records synchronized between the registry backend and the client.

use crate::nat::Nat;
use crate::principal::Principal;
use serde::{Deserialize, Serialize};

/// A registered user of the land registry.
///
/// Fetched wholesale from the backend; an "empty" record (anonymous
/// principal, zero nik, not registered) means no record exists yet for
/// the calling identity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// National identity number.
    pub nik: Nat,
    /// Principal this record belongs to.
    pub principal: Principal,
    /// Has the registration completed?
    pub registered: bool,
}

impl UserRecord {
    /// Create a record for a registered user.
    pub fn new(nik: Nat, principal: Principal) -> Self {
        Self {
            nik,
            principal,
            registered: true,
        }
    }

    /// The empty record, signifying "no record yet".
    pub fn empty() -> Self {
        Self {
            nik: Nat::zero(),
            principal: Principal::anonymous(),
            registered: false,
        }
    }

    /// Is this the empty record?
    pub fn is_empty(&self) -> bool {
        self.principal.is_anonymous() && !self.registered
    }

    /// Does this record belong to the given identity?
    ///
    /// Compares the record's principal field directly; an anonymous
    /// record references nobody.
    pub fn references(&self, identity: &Principal) -> bool {
        !self.principal.is_anonymous() && self.principal == *identity
    }
}

/// A land-title asset held in the registry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LandRecord {
    /// Certificate identifier, as issued.
    pub certificate_id: String,
    /// Asking price.
    pub price: Nat,
    /// Owning principal.
    pub owner: Principal,
}

impl LandRecord {
    /// Create a new land record.
    pub fn new(certificate_id: impl Into<String>, price: Nat, owner: Principal) -> Self {
        Self {
            certificate_id: certificate_id.into(),
            price,
            owner,
        }
    }
}
