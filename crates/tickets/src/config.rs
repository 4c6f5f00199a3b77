//! Ticket service configuration.
//!
//! Defaults match the box office price list; any value can be overridden
//! through environment variables.

use core::str::FromStr;

use crate::pricing::PricingTable;
use crate::validation::DEFAULT_MAX_TICKETS_PER_PURCHASE;

pub const PRICE_INFANT_VAR: &str = "CINEMA_PRICE_INFANT";
pub const PRICE_CHILD_VAR: &str = "CINEMA_PRICE_CHILD";
pub const PRICE_ADULT_VAR: &str = "CINEMA_PRICE_ADULT";
pub const MAX_TICKETS_VAR: &str = "CINEMA_MAX_TICKETS_PER_PURCHASE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketServiceConfig {
    pub pricing: PricingTable,
    pub max_tickets_per_purchase: u32,
}

impl Default for TicketServiceConfig {
    fn default() -> Self {
        Self {
            pricing: PricingTable::default(),
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
        }
    }
}

impl TicketServiceConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`. Unset keys keep their default; values
    /// that do not parse keep their default and are logged.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            pricing: PricingTable {
                infant: read_or(&lookup, PRICE_INFANT_VAR, defaults.pricing.infant),
                child: read_or(&lookup, PRICE_CHILD_VAR, defaults.pricing.child),
                adult: read_or(&lookup, PRICE_ADULT_VAR, defaults.pricing.adult),
            },
            max_tickets_per_purchase: read_or(
                &lookup,
                MAX_TICKETS_VAR,
                defaults.max_tickets_per_purchase,
            ),
        }
    }
}

fn read_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + core::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "ignoring unparsable config value");
            default
        }),
    }
}
