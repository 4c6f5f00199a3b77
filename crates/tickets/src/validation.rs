//! Purchase rules.
//!
//! Rules run in a fixed order and stop at the first violation:
//! account id, line item shape, adult presence, capacity.

use serde_json::Value;

use cinema_core::{AccountId, DomainError, DomainResult};

use crate::pricing::{tickets_of, total_tickets};
use crate::request::{PurchaseRequest, TicketTypeRequest};
use crate::ticket_type::TicketType;

pub const ADULT_REQUIRED: &str =
    "Child and Infant tickets cannot be purchased without purchasing an Adult ticket";

pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Reason reported when a purchase exceeds `max` tickets.
pub fn too_many_tickets(max: u32) -> String {
    format!("Only a maximum of {max} tickets can be purchased at once")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseValidator {
    max_tickets_per_purchase: u32,
}

impl Default for PurchaseValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TICKETS_PER_PURCHASE)
    }
}

impl PurchaseValidator {
    pub fn new(max_tickets_per_purchase: u32) -> Self {
        Self {
            max_tickets_per_purchase,
        }
    }

    pub fn max_tickets_per_purchase(&self) -> u32 {
        self.max_tickets_per_purchase
    }

    /// Validate a typed purchase. Line items are well-formed by construction,
    /// so the shape rule always holds here.
    pub fn validate(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> DomainResult<AccountId> {
        let account_id = AccountId::from_signed(account_id)?;
        self.validate_ticket_requests(requests)?;
        Ok(account_id)
    }

    /// Validate an untyped purchase document, applying all four rules.
    pub fn validate_json(&self, document: &Value) -> DomainResult<PurchaseRequest> {
        let request = PurchaseRequest::from_json(document)?;
        self.validate_ticket_requests(request.ticket_type_requests())?;
        Ok(request)
    }

    /// Business rules over the aggregate set of line items.
    pub fn validate_ticket_requests(&self, requests: &[TicketTypeRequest]) -> DomainResult<()> {
        if tickets_of(requests, TicketType::Adult) == 0 {
            return Err(DomainError::invalid_purchase(ADULT_REQUIRED));
        }

        if total_tickets(requests) > u64::from(self.max_tickets_per_purchase) {
            return Err(DomainError::invalid_purchase(too_many_tickets(
                self.max_tickets_per_purchase,
            )));
        }

        Ok(())
    }
}
