//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances with
/// the same attributes are interchangeable. To "modify" one, build a new one.
///
/// Constructors of value objects are where input is checked, so a value that
/// exists is always valid (e.g. an item name that is known to be non-empty and
/// alphabetic).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ItemName(String);
///
/// impl ValueObject for ItemName {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
