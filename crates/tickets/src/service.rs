//! Ticket purchase orchestration: validate, price, pay, reserve.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use cinema_core::{AccountId, DomainError, DomainResult};
use cinema_thirdparty::{SeatReservationService, TicketPaymentService};

use crate::config::TicketServiceConfig;
use crate::pricing::{PricingTable, total_seats, total_tickets};
use crate::request::TicketTypeRequest;
use crate::validation::PurchaseValidator;

/// Failure of a purchase.
///
/// Collaborator errors are passed through untouched: `Display` and `source()`
/// are those of the gateway or booking system.
#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    InvalidPurchase(#[from] DomainError),

    #[error(transparent)]
    Payment(anyhow::Error),

    #[error(transparent)]
    Reservation(anyhow::Error),
}

impl PurchaseError {
    /// Rejection reason, if the purchase failed validation.
    pub fn reason(&self) -> Option<&str> {
        match self {
            PurchaseError::InvalidPurchase(err) => Some(err.reason()),
            _ => None,
        }
    }
}

/// Totals for a validated purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseQuote {
    pub account_id: AccountId,
    pub total_tickets: u64,
    pub total_cost: u64,
    pub total_seats: u64,
}

/// Purchase entry point.
///
/// Stateless between calls: every purchase is validated and priced from scratch,
/// then charged through `P` and booked through `R`, in that order.
#[derive(Debug)]
pub struct TicketService<P, R> {
    payment: P,
    reservation: R,
    pricing: PricingTable,
    validator: PurchaseValidator,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    pub fn new(payment: P, reservation: R) -> Self {
        Self::with_config(payment, reservation, TicketServiceConfig::default())
    }

    /// Build with prices and limits read from the process environment.
    pub fn from_env(payment: P, reservation: R) -> Self {
        Self::with_config(payment, reservation, TicketServiceConfig::from_env())
    }

    pub fn with_config(payment: P, reservation: R, config: TicketServiceConfig) -> Self {
        Self {
            payment,
            reservation,
            pricing: config.pricing,
            validator: PurchaseValidator::new(config.max_tickets_per_purchase),
        }
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    pub fn validator(&self) -> &PurchaseValidator {
        &self.validator
    }

    /// Validate and price a purchase without charging or booking anything.
    pub fn quote(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> DomainResult<PurchaseQuote> {
        let account_id = self.validator.validate(account_id, requests)?;
        Ok(self.price(account_id, requests))
    }

    /// Buy tickets for `account_id`.
    ///
    /// On a rule violation nothing is charged or booked. On success the payment
    /// collaborator and then the reservation collaborator are each called once.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError> {
        let span = tracing::info_span!("purchase_tickets", account_id);
        let _enter = span.enter();

        let quote = self.quote(account_id, requests).inspect_err(|err| {
            tracing::warn!(reason = err.reason(), "purchase rejected");
        })?;

        self.settle(&quote)
    }

    /// Buy tickets described by an untyped document
    /// `{"accountId": .., "ticketTypeRequests": [..]}`.
    pub fn purchase_tickets_json(&self, document: &Value) -> Result<(), PurchaseError> {
        let span = tracing::info_span!(
            "purchase_tickets_json",
            account_id = tracing::field::Empty
        );
        let _enter = span.enter();

        let request = self.validator.validate_json(document).inspect_err(|err| {
            tracing::warn!(reason = err.reason(), "purchase rejected");
        })?;
        span.record("account_id", request.account_id().as_u64());

        let quote = self.price(request.account_id(), request.ticket_type_requests());
        self.settle(&quote)
    }

    fn price(&self, account_id: AccountId, requests: &[TicketTypeRequest]) -> PurchaseQuote {
        let quote = PurchaseQuote {
            account_id,
            total_tickets: total_tickets(requests),
            total_cost: self.pricing.total_cost(requests),
            total_seats: total_seats(requests),
        };
        tracing::debug!(
            total_tickets = quote.total_tickets,
            total_cost = quote.total_cost,
            total_seats = quote.total_seats,
            "purchase priced"
        );
        quote
    }

    fn settle(&self, quote: &PurchaseQuote) -> Result<(), PurchaseError> {
        self.payment
            .make_payment(quote.account_id, quote.total_cost)
            .map_err(|err| {
                tracing::warn!(error = %err, "payment failed");
                PurchaseError::Payment(err)
            })?;

        self.reservation
            .reserve_seat(quote.account_id, quote.total_seats)
            .map_err(|err| {
                tracing::warn!(error = %err, "seat reservation failed");
                PurchaseError::Reservation(err)
            })?;

        tracing::info!(
            account_id = %quote.account_id,
            total_cost = quote.total_cost,
            total_seats = quote.total_seats,
            "tickets purchased"
        );
        Ok(())
    }
}
