//! Pricing domain module.
//!
//! This crate answers "which price applies to a product of a brand at a given
//! instant". Resolution is deterministic domain logic (no IO, no HTTP); storage
//! is reached only through the [`PriceStore`] port.

pub mod price;
pub mod resolver;
pub mod service;
pub mod store;

pub use price::{CurrencyCode, Money, PriceRecord, ValidityWindow};
pub use resolver::{applicable, resolve};
pub use service::{GetPrioritizedPrice, PriceQuery, PriceService, PricingError};
pub use store::{PriceStore, PriceStoreError};
