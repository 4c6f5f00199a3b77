use std::sync::{Arc, RwLock};

use cinema_core::AccountId;
use thiserror::Error;

/// Payment gateway capability.
///
/// The gateway's own failure taxonomy is opaque to callers; errors are passed
/// through as [`anyhow::Error`].
pub trait TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) -> anyhow::Result<()>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, amount_to_pay)
    }
}

/// A payment accepted by [`InMemoryPaymentGateway`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Payment {
    pub account_id: AccountId,
    pub amount: u64,
}

/// In-memory payment gateway that records every payment it receives.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryPaymentGateway {
    payments: RwLock<Vec<Payment>>,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all payments taken so far, in call order.
    pub fn payments(&self) -> Vec<Payment> {
        self.payments
            .read()
            .map(|payments| payments.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.payments.read().map(|p| p.len()).unwrap_or(0)
    }
}

impl TicketPaymentService for InMemoryPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) -> anyhow::Result<()> {
        let mut payments = self
            .payments
            .write()
            .map_err(|_| anyhow::anyhow!("payment ledger lock poisoned"))?;
        payments.push(Payment {
            account_id,
            amount: amount_to_pay,
        });
        tracing::debug!(%account_id, amount_to_pay, "payment recorded");
        Ok(())
    }
}

/// Failures raised by [`RejectingPaymentGateway`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("payment declined for account {0}")]
    Declined(AccountId),
}

/// Gateway that declines every payment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectingPaymentGateway;

impl TicketPaymentService for RejectingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, _amount_to_pay: u64) -> anyhow::Result<()> {
        Err(GatewayError::Declined(account_id).into())
    }
}
