//! Prioritized price resolution.
//!
//! Given every price record of a product/brand pair and an instant, pick the
//! one that applies. Pure: no IO, no shared state, inputs are only borrowed.

use core::cmp::Ordering;

use chrono::NaiveDateTime;

use pricechecker_core::{DomainError, DomainResult, Entity};

use crate::price::PriceRecord;

/// Records whose validity window contains `at` (both bounds inclusive).
pub fn applicable(
    candidates: &[PriceRecord],
    at: NaiveDateTime,
) -> impl Iterator<Item = &PriceRecord> + '_ {
    candidates.iter().filter(move |r| r.is_applicable_at(at))
}

/// Resolve the price that applies at `at`.
///
/// Among applicable records the highest `priority` wins. Equal priorities
/// are broken by the smallest price list, then by the smallest record id, so
/// the result does not depend on the order in which the store returned rows.
///
/// Returns [`DomainError::NotFound`] when no record applies.
pub fn resolve(candidates: &[PriceRecord], at: NaiveDateTime) -> DomainResult<&PriceRecord> {
    applicable(candidates, at)
        .max_by(|a, b| precedence(a, b))
        .ok_or_else(DomainError::not_found)
}

/// `Greater` means `a` takes precedence over `b`.
fn precedence(a: &PriceRecord, b: &PriceRecord) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| b.price_list.cmp(&a.price_list))
        .then_with(|| b.id().cmp(&a.id()))
}
