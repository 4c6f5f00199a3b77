//! Cinema ticket purchasing.
//!
//! This crate contains the purchase rules and pricing, implemented as
//! deterministic domain logic. Payment and seat booking are delegated to the
//! collaborators in `cinema-thirdparty`.

pub mod config;
pub mod pricing;
pub mod request;
pub mod service;
pub mod ticket_type;
pub mod validation;

pub use config::TicketServiceConfig;
pub use pricing::{PricingTable, total_seats, total_tickets};
pub use request::{INVALID_TICKET_REQUESTS, PurchaseRequest, TicketTypeRequest};
pub use service::{PurchaseError, PurchaseQuote, TicketService};
pub use ticket_type::TicketType;
pub use validation::{ADULT_REQUIRED, PurchaseValidator, too_many_tickets};
