//! Ticket request model: individual line items and the purchase request that
//! groups them under an account.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use cinema_core::{AccountId, DomainError, DomainResult, ValueObject};

use crate::ticket_type::{INVALID_TICKET_TYPE, TicketType};

pub const INVALID_TICKET_COUNT: &str = "noOfTickets must be a positive integer";
pub const NOT_A_TICKET_REQUEST: &str = "ticket request must be an object with ticketType and noOfTickets";

/// Reason reported when any element of a purchase is not a valid line item.
pub const INVALID_TICKET_REQUESTS: &str = "One or more ticket requests are not valid.";

/// Immutable line item: a ticket category and a positive number of tickets.
///
/// Every constructor validates eagerly, so a value of this type is always
/// well-formed, whether or not it ever reaches a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: i64) -> DomainResult<Self> {
        if no_of_tickets <= 0 {
            return Err(DomainError::invalid_request(INVALID_TICKET_COUNT));
        }
        let no_of_tickets = u32::try_from(no_of_tickets)
            .map_err(|_| DomainError::invalid_request(INVALID_TICKET_COUNT))?;

        Ok(Self {
            ticket_type,
            no_of_tickets,
        })
    }

    /// Build from a category name such as `"ADULT"`.
    pub fn parse(ticket_type: &str, no_of_tickets: i64) -> DomainResult<Self> {
        Self::new(ticket_type.parse()?, no_of_tickets)
    }

    /// Build from a JSON object `{"ticketType": "ADULT", "noOfTickets": 3}`.
    ///
    /// Counts must be whole JSON numbers: `2` and `2.0` are accepted, while
    /// `1.5`, `"2"` and missing counts are rejected.
    pub fn from_json(value: &Value) -> DomainResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| DomainError::invalid_request(NOT_A_TICKET_REQUEST))?;

        let ticket_type = object
            .get("ticketType")
            .and_then(Value::as_str)
            .ok_or_else(|| DomainError::invalid_request(INVALID_TICKET_TYPE))?
            .parse::<TicketType>()?;

        let no_of_tickets = object
            .get("noOfTickets")
            .and_then(whole_number)
            .ok_or_else(|| DomainError::invalid_request(INVALID_TICKET_COUNT))?;

        Self::new(ticket_type, no_of_tickets)
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

impl ValueObject for TicketTypeRequest {}

/// A JSON number with no fractional part, whether encoded as an integer or a float.
fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.is_finite() && n.fract() == 0.0)
            .filter(|n| *n >= i64::MIN as f64 && *n < i64::MAX as f64)
            .map(|n| n as i64)
    })
}

impl TryFrom<Value> for TicketTypeRequest {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

/// An account id plus the line items it wants to buy.
///
/// Line item order only affects iteration, never the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    account_id: AccountId,
    ticket_type_requests: Vec<TicketTypeRequest>,
}

impl PurchaseRequest {
    pub fn new(account_id: AccountId, ticket_type_requests: Vec<TicketTypeRequest>) -> Self {
        Self {
            account_id,
            ticket_type_requests,
        }
    }

    /// Decode `{"accountId": .., "ticketTypeRequests": [..]}`.
    ///
    /// The account id is checked before any line item is looked at. A missing
    /// `ticketTypeRequests` field is an empty purchase; a present one that is
    /// not an array, or that holds anything other than valid line items, fails
    /// with [`INVALID_TICKET_REQUESTS`].
    pub fn from_json(document: &Value) -> DomainResult<Self> {
        let account_id = AccountId::from_json(document.get("accountId").unwrap_or(&Value::Null))?;

        let ticket_type_requests = match document.get("ticketTypeRequests") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(TicketTypeRequest::from_json)
                .collect::<DomainResult<Vec<_>>>()
                .map_err(|err| {
                    tracing::debug!(reason = err.reason(), "malformed ticket request");
                    DomainError::invalid_purchase(INVALID_TICKET_REQUESTS)
                })?,
            Some(_) => return Err(DomainError::invalid_purchase(INVALID_TICKET_REQUESTS)),
        };

        Ok(Self::new(account_id, ticket_type_requests))
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn ticket_type_requests(&self) -> &[TicketTypeRequest] {
        &self.ticket_type_requests
    }
}
