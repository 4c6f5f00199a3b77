//! Ticket pricing and seat allocation.
//!
//! Both totals are pure folds over already-validated line items; neither
//! re-checks purchase rules.

use crate::request::TicketTypeRequest;
use crate::ticket_type::TicketType;

/// Price per ticket category, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTable {
    pub infant: u32,
    pub child: u32,
    pub adult: u32,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            infant: 0,
            child: 10,
            adult: 20,
        }
    }
}

impl PricingTable {
    pub fn price_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Infant => self.infant,
            TicketType::Child => self.child,
            TicketType::Adult => self.adult,
        }
    }

    /// Sum of `count * price` over all line items.
    pub fn total_cost(&self, requests: &[TicketTypeRequest]) -> u64 {
        requests.iter().fold(0u64, |total, request| {
            let line = u64::from(request.no_of_tickets())
                * u64::from(self.price_of(request.ticket_type()));
            total.saturating_add(line)
        })
    }
}

/// Number of bookable seats: every ticket except infants.
pub fn total_seats(requests: &[TicketTypeRequest]) -> u64 {
    requests
        .iter()
        .filter(|request| request.ticket_type().occupies_seat())
        .map(|request| u64::from(request.no_of_tickets()))
        .sum()
}

/// Number of tickets across all categories, infants included.
pub fn total_tickets(requests: &[TicketTypeRequest]) -> u64 {
    requests
        .iter()
        .map(|request| u64::from(request.no_of_tickets()))
        .sum()
}

/// Number of tickets of a single category.
pub fn tickets_of(requests: &[TicketTypeRequest], ticket_type: TicketType) -> u64 {
    requests
        .iter()
        .filter(|request| request.ticket_type() == ticket_type)
        .map(|request| u64::from(request.no_of_tickets()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn req(ticket_type: TicketType, count: i64) -> TicketTypeRequest {
        TicketTypeRequest::new(ticket_type, count).unwrap()
    }

    #[test]
    fn adults_only() {
        let requests = [req(TicketType::Adult, 12)];
        assert_eq!(PricingTable::default().total_cost(&requests), 240);
        assert_eq!(total_seats(&requests), 12);
    }

    #[test]
    fn mixed_family() {
        let requests = [
            req(TicketType::Adult, 12),
            req(TicketType::Child, 4),
            req(TicketType::Infant, 4),
        ];
        assert_eq!(PricingTable::default().total_cost(&requests), 280);
        assert_eq!(total_seats(&requests), 16);
        assert_eq!(total_tickets(&requests), 20);
    }

    #[test]
    fn infants_are_free_and_seatless() {
        let requests = [req(TicketType::Adult, 10), req(TicketType::Infant, 5)];
        assert_eq!(PricingTable::default().total_cost(&requests), 200);
        assert_eq!(total_seats(&requests), 10);
    }

    #[test]
    fn empty_request_costs_nothing() {
        assert_eq!(PricingTable::default().total_cost(&[]), 0);
        assert_eq!(total_seats(&[]), 0);
    }

    #[test]
    fn custom_table_is_honoured() {
        let table = PricingTable {
            infant: 1,
            child: 5,
            adult: 7,
        };
        let requests = [
            req(TicketType::Adult, 2),
            req(TicketType::Child, 3),
            req(TicketType::Infant, 4),
        ];
        assert_eq!(table.total_cost(&requests), 2 * 7 + 3 * 5 + 4);
    }

    #[test]
    fn repeated_categories_accumulate() {
        let requests = [req(TicketType::Adult, 1), req(TicketType::Adult, 2)];
        assert_eq!(tickets_of(&requests, TicketType::Adult), 3);
        assert_eq!(tickets_of(&requests, TicketType::Child), 0);
    }

    fn arb_ticket_type() -> impl Strategy<Value = TicketType> {
        prop_oneof![
            Just(TicketType::Infant),
            Just(TicketType::Child),
            Just(TicketType::Adult),
        ]
    }

    fn arb_requests() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        prop::collection::vec(
            (arb_ticket_type(), 1i64..50).prop_map(|(t, n)| req(t, n)),
            0..10,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: cost is the per-category count weighted by price.
        #[test]
        fn cost_matches_category_breakdown(requests in arb_requests()) {
            let table = PricingTable::default();
            let expected = tickets_of(&requests, TicketType::Child) * 10
                + tickets_of(&requests, TicketType::Adult) * 20;
            prop_assert_eq!(table.total_cost(&requests), expected);
        }

        /// Property: seats are all tickets minus infants.
        #[test]
        fn seats_exclude_infants(requests in arb_requests()) {
            prop_assert_eq!(
                total_seats(&requests),
                total_tickets(&requests) - tickets_of(&requests, TicketType::Infant)
            );
        }

        /// Property: pricing is pure (same input, same output).
        #[test]
        fn pricing_is_idempotent(requests in arb_requests()) {
            let table = PricingTable::default();
            prop_assert_eq!(table.total_cost(&requests), table.total_cost(&requests));
            prop_assert_eq!(total_seats(&requests), total_seats(&requests));
        }
    }
}
