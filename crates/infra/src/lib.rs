//! Infrastructure layer: price store adapters and seed data.

pub mod price_store;
pub mod seed;

mod integration_tests;

pub use price_store::{InMemoryPriceStore, PostgresPriceStore};
