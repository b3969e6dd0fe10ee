//! Reference tariff shipped with the service.
//!
//! Four price lists of product 35455 for brand 1, used to seed the in-memory
//! store in dev and tests (and optionally an empty Postgres table).

use pricechecker_pricing::{PriceRecord, PriceStoreError};

const REFERENCE_TARIFF_JSON: &str = include_str!("../seed/reference_tariff.json");

/// Parse the bundled reference tariff.
pub fn reference_tariff() -> Result<Vec<PriceRecord>, PriceStoreError> {
    parse_records(REFERENCE_TARIFF_JSON)
}

/// Parse a JSON array of price records.
pub fn parse_records(json: &str) -> Result<Vec<PriceRecord>, PriceStoreError> {
    serde_json::from_str(json).map_err(|e| PriceStoreError::Corrupt(format!("seed data: {e}")))
}
