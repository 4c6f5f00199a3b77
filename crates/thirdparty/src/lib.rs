//! External collaborators consumed by the ticket service.
//!
//! Only the call contracts live here; the real gateway and booking system are
//! provided by the host application. The in-memory implementations record calls
//! for tests and local runs.

pub mod paymentgateway;
pub mod seatbooking;

pub use paymentgateway::{
    GatewayError, InMemoryPaymentGateway, Payment, RejectingPaymentGateway, TicketPaymentService,
};
pub use seatbooking::{
    BookingError, InMemorySeatBooking, RejectingSeatBooking, Reservation, SeatReservationService,
};
