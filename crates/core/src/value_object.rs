//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two with the
/// same values are the same thing. Identity doesn't matter, only the values.
///
/// Example:
/// - `Funds(15_750)` is a value object
/// - `Profile { id: ProfileId(...), name: "..." }` is an entity
///
/// Validated value objects double as the validation boundary: if a value
/// exists, it is in range. Construct via fallible `new`, never by reaching
/// inside.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
