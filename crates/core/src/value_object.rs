//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two validity
/// windows with the same bounds are the same window, two amounts with the same
/// decimal and currency are the same amount.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct CurrencyCode(String);
///
/// impl ValueObject for CurrencyCode {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
