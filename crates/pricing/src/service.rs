//! Use case: get the prioritized price of a product for a brand at an instant.

use chrono::NaiveDateTime;
use thiserror::Error;

use pricechecker_core::{BrandId, ProductId};

use crate::price::PriceRecord;
use crate::resolver;
use crate::store::{PriceStore, PriceStoreError};

/// Already-validated lookup parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PriceQuery {
    pub application_date: NaiveDateTime,
    pub product_id: ProductId,
    pub brand_id: BrandId,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("no applicable price for product {product_id}, brand {brand_id} at {at}")]
    NotFound {
        product_id: ProductId,
        brand_id: BrandId,
        at: NaiveDateTime,
    },

    #[error(transparent)]
    Store(#[from] PriceStoreError),
}

/// Input port consumed by the HTTP boundary.
#[async_trait::async_trait]
pub trait GetPrioritizedPrice: Send + Sync {
    async fn get_prioritized_price(&self, query: PriceQuery) -> Result<PriceRecord, PricingError>;
}

/// Resolves prices against a [`PriceStore`], one store round-trip per query.
#[derive(Debug, Clone)]
pub struct PriceService<S> {
    store: S,
}

impl<S> PriceService<S>
where
    S: PriceStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait::async_trait]
impl<S> GetPrioritizedPrice for PriceService<S>
where
    S: PriceStore,
{
    async fn get_prioritized_price(&self, query: PriceQuery) -> Result<PriceRecord, PricingError> {
        let candidates = self
            .store
            .find_by_product_and_brand(query.product_id, query.brand_id)
            .await?;

        tracing::debug!(
            product_id = %query.product_id,
            brand_id = %query.brand_id,
            candidates = candidates.len(),
            "loaded price candidates"
        );

        match resolver::resolve(&candidates, query.application_date) {
            Ok(winner) => {
                tracing::debug!(
                    price_list = %winner.price_list,
                    priority = winner.priority,
                    "resolved prioritized price"
                );
                Ok(winner.clone())
            }
            Err(_) => {
                tracing::info!(
                    product_id = %query.product_id,
                    brand_id = %query.brand_id,
                    at = %query.application_date,
                    "no applicable price"
                );
                Err(PricingError::NotFound {
                    product_id: query.product_id,
                    brand_id: query.brand_id,
                    at: query.application_date,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::{CurrencyCode, Money, ValidityWindow};
    use chrono::NaiveDate;
    use pricechecker_core::{PriceId, PriceListId};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// Store stub returning fixed rows and recording the lookups it served.
    struct StubStore {
        rows: Result<Vec<PriceRecord>, PriceStoreError>,
        calls: Mutex<Vec<(ProductId, BrandId)>>,
    }

    impl StubStore {
        fn returning(rows: Vec<PriceRecord>) -> Self {
            Self {
                rows: Ok(rows),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: PriceStoreError) -> Self {
            Self {
                rows: Err(err),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl PriceStore for StubStore {
        async fn find_by_product_and_brand(
            &self,
            product_id: ProductId,
            brand_id: BrandId,
        ) -> Result<Vec<PriceRecord>, PriceStoreError> {
            self.calls.lock().unwrap().push((product_id, brand_id));
            self.rows.clone()
        }
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn record(
        price_list: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
        priority: i32,
        amount: Decimal,
    ) -> PriceRecord {
        PriceRecord {
            id: PriceId::new(price_list as i64).unwrap(),
            brand_id: BrandId::new(1).unwrap(),
            product_id: ProductId::new(35455).unwrap(),
            price_list: PriceListId::new(price_list).unwrap(),
            validity: ValidityWindow::new(start, end),
            priority,
            price: Money::new(amount, CurrencyCode::new("EUR").unwrap()),
        }
    }

    fn query(at: NaiveDateTime) -> PriceQuery {
        PriceQuery {
            application_date: at,
            product_id: ProductId::new(35455).unwrap(),
            brand_id: BrandId::new(1).unwrap(),
        }
    }

    #[tokio::test]
    async fn single_match_is_returned() {
        let store = StubStore::returning(vec![record(
            1,
            dt(2020, 6, 14, 0, 0),
            dt(2020, 12, 31, 23, 59),
            0,
            dec!(35.50),
        )]);
        let service = PriceService::new(store);

        let price = service
            .get_prioritized_price(query(dt(2020, 6, 14, 10, 0)))
            .await
            .unwrap();

        assert_eq!(price.price_list.get(), 1);
        assert_eq!(price.price.amount, dec!(35.50));
        assert_eq!(
            service.store().calls.lock().unwrap().as_slice(),
            &[(ProductId::new(35455).unwrap(), BrandId::new(1).unwrap())]
        );
    }

    #[tokio::test]
    async fn multiple_matches_return_highest_priority() {
        let store = StubStore::returning(vec![
            record(1, dt(2020, 6, 14, 0, 0), dt(2020, 12, 31, 23, 59), 0, dec!(35.50)),
            record(2, dt(2020, 6, 14, 15, 0), dt(2020, 6, 14, 18, 30), 1, dec!(25.45)),
        ]);
        let service = PriceService::new(store);

        let price = service
            .get_prioritized_price(query(dt(2020, 6, 14, 16, 0)))
            .await
            .unwrap();

        assert_eq!(price.price_list.get(), 2);
        assert_eq!(price.price.amount, dec!(25.45));
    }

    #[tokio::test]
    async fn no_match_is_not_found() {
        let store = StubStore::returning(vec![record(
            1,
            dt(2020, 6, 14, 0, 0),
            dt(2020, 12, 31, 23, 59),
            0,
            dec!(35.50),
        )]);
        let service = PriceService::new(store);
        let at = dt(2020, 5, 14, 10, 0);

        let err = service.get_prioritized_price(query(at)).await.unwrap_err();
        match err {
            PricingError::NotFound { product_id, brand_id, at: when } => {
                assert_eq!(product_id.get(), 35455);
                assert_eq!(brand_id.get(), 1);
                assert_eq!(when, at);
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let store = StubStore::failing(PriceStoreError::Unavailable("connection refused".into()));
        let service = PriceService::new(store);

        let err = service
            .get_prioritized_price(query(dt(2020, 6, 14, 10, 0)))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::Store(PriceStoreError::Unavailable("connection refused".into()))
        );
    }
}
