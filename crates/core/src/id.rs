//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Reason reported whenever an account identifier is rejected.
pub const INVALID_ACCOUNT_ID: &str = "AccountId must be a non-negative number";

/// Identifier of the purchasing account.
///
/// Always a whole number `>= 0`. Every constructor rejects anything else with
/// [`DomainError::InvalidPurchase`] carrying [`INVALID_ACCOUNT_ID`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Accept a signed integer, rejecting negatives.
    pub fn from_signed(id: i64) -> DomainResult<Self> {
        u64::try_from(id)
            .map(Self)
            .map_err(|_| DomainError::invalid_purchase(INVALID_ACCOUNT_ID))
    }

    /// Accept a float only when it denotes a non-negative whole number.
    ///
    /// `1234.0` is accepted, `1.5`, `-1.0`, `NaN` and infinities are not.
    pub fn from_f64(id: f64) -> DomainResult<Self> {
        if id.is_finite() && id >= 0.0 && id.fract() == 0.0 && id < u64::MAX as f64 {
            Ok(Self(id as u64))
        } else {
            Err(DomainError::invalid_purchase(INVALID_ACCOUNT_ID))
        }
    }

    /// Accept an untyped JSON value.
    ///
    /// Only numbers qualify: strings (including numeric ones), arrays, objects,
    /// booleans and `null` are rejected outright.
    pub fn from_json(value: &Value) -> DomainResult<Self> {
        match value {
            Value::Number(n) => {
                if let Some(id) = n.as_u64() {
                    Ok(Self(id))
                } else if let Some(id) = n.as_i64() {
                    Self::from_signed(id)
                } else {
                    n.as_f64()
                        .ok_or_else(|| DomainError::invalid_purchase(INVALID_ACCOUNT_ID))
                        .and_then(Self::from_f64)
                }
            }
            _ => Err(DomainError::invalid_purchase(INVALID_ACCOUNT_ID)),
        }
    }
}

impl ValueObject for AccountId {}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for AccountId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<AccountId> for u64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_signed(value)
    }
}
