//! Value object trait: equality by value, not identity.
//!
//! Ticket line items and account identifiers have **no identity** of their own;
//! two line items with the same category and count are the same value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Once constructed
/// they are never modified; a different value is a different object.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct TicketTypeRequest {
///     ticket_type: TicketType,
///     no_of_tickets: u32,
/// }
///
/// impl ValueObject for TicketTypeRequest {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
