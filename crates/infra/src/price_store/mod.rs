//! `PriceStore` adapters.
//!
//! - `in_memory`: process-local snapshot for dev/tests
//! - `postgres`: `prices` table via SQLx

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryPriceStore;
pub use postgres::PostgresPriceStore;
