use std::sync::{Arc, RwLock};

use cinema_core::AccountId;
use thiserror::Error;

/// Seat booking capability.
pub trait SeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u64,
    ) -> anyhow::Result<()>;
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u64,
    ) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u64,
    ) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u64,
    ) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

/// A reservation accepted by [`InMemorySeatBooking`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub account_id: AccountId,
    pub seats: u64,
}

/// In-memory seat booking system that records every reservation.
///
/// Intended for tests/dev. Seats are not tracked against a venue capacity.
#[derive(Debug, Default)]
pub struct InMemorySeatBooking {
    reservations: RwLock<Vec<Reservation>>,
}

impl InMemorySeatBooking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations
            .read()
            .map(|reservations| reservations.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.reservations.read().map(|r| r.len()).unwrap_or(0)
    }
}

impl SeatReservationService for InMemorySeatBooking {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u64,
    ) -> anyhow::Result<()> {
        let mut reservations = self
            .reservations
            .write()
            .map_err(|_| anyhow::anyhow!("reservation log lock poisoned"))?;
        reservations.push(Reservation {
            account_id,
            seats: total_seats_to_allocate,
        });
        tracing::debug!(%account_id, total_seats_to_allocate, "seats reserved");
        Ok(())
    }
}

/// Failures raised by [`RejectingSeatBooking`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("no seats available for account {0}")]
    SoldOut(AccountId),
}

/// Booking system that refuses every reservation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectingSeatBooking;

impl SeatReservationService for RejectingSeatBooking {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        _total_seats_to_allocate: u64,
    ) -> anyhow::Result<()> {
        Err(BookingError::SoldOut(account_id).into())
    }
}
