use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cinema_core::DomainError;

pub const INVALID_TICKET_TYPE: &str = "ticketType must be one of INFANT, CHILD, ADULT";

/// Ticket category. The set is closed: there is no fourth kind of ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Infant,
    Child,
    Adult,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Infant, TicketType::Child, TicketType::Adult];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Infant => "INFANT",
            TicketType::Child => "CHILD",
            TicketType::Adult => "ADULT",
        }
    }

    /// Infants sit on a guardian's lap.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFANT" => Ok(TicketType::Infant),
            "CHILD" => Ok(TicketType::Child),
            "ADULT" => Ok(TicketType::Adult),
            _ => Err(DomainError::invalid_request(INVALID_TICKET_TYPE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for ticket_type in TicketType::ALL {
            assert_eq!(ticket_type.as_str().parse::<TicketType>().unwrap(), ticket_type);
        }
    }

    #[test]
    fn unknown_and_lowercase_names_are_rejected() {
        for name in ["SENIOR", "adult", "", " ADULT"] {
            let err = name.parse::<TicketType>().unwrap_err();
            assert_eq!(err, DomainError::invalid_request(INVALID_TICKET_TYPE));
        }
    }

    #[test]
    fn serde_uses_upper_case_names() {
        assert_eq!(
            serde_json::to_value(TicketType::Child).unwrap(),
            serde_json::json!("CHILD")
        );
        assert!(serde_json::from_value::<TicketType>(serde_json::json!("child")).is_err());
    }

    #[test]
    fn only_infants_skip_a_seat() {
        assert!(!TicketType::Infant.occupies_seat());
        assert!(TicketType::Child.occupies_seat());
        assert!(TicketType::Adult.occupies_seat());
    }
}
