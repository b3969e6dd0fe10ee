//! Integration tests for the lookup pipeline.
//!
//! Tests: PriceService → PriceStore (in-memory, reference tariff) → resolver

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use pricechecker_core::{BrandId, ProductId};
    use pricechecker_pricing::{GetPrioritizedPrice, PriceQuery, PriceService, PricingError};

    use crate::price_store::InMemoryPriceStore;

    fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn setup() -> PriceService<Arc<InMemoryPriceStore>> {
        PriceService::new(Arc::new(InMemoryPriceStore::reference_tariff().unwrap()))
    }

    async fn lookup(at: NaiveDateTime) -> Result<(i32, Decimal), PricingError> {
        let price = setup()
            .get_prioritized_price(PriceQuery {
                application_date: at,
                product_id: ProductId::new(35455).unwrap(),
                brand_id: BrandId::new(1).unwrap(),
            })
            .await?;
        Ok((price.price_list.get(), price.price.amount))
    }

    #[tokio::test]
    async fn reference_scenarios_resolve_expected_price_lists() {
        assert_eq!(lookup(dt(2020, 6, 14, 10, 0)).await.unwrap(), (1, dec!(35.50)));
        assert_eq!(lookup(dt(2020, 6, 14, 16, 0)).await.unwrap(), (2, dec!(25.45)));
        assert_eq!(lookup(dt(2020, 6, 14, 21, 0)).await.unwrap(), (1, dec!(35.50)));
        assert_eq!(lookup(dt(2020, 6, 15, 10, 0)).await.unwrap(), (3, dec!(30.50)));
        assert_eq!(lookup(dt(2020, 6, 16, 22, 0)).await.unwrap(), (4, dec!(38.95)));
    }

    #[tokio::test]
    async fn instant_before_every_window_is_not_found() {
        let err = lookup(dt(2020, 1, 1, 0, 0)).await.unwrap_err();
        assert!(matches!(err, PricingError::NotFound { .. }));
    }

    #[tokio::test]
    async fn unknown_brand_is_not_found() {
        let err = setup()
            .get_prioritized_price(PriceQuery {
                application_date: dt(2020, 6, 14, 10, 0),
                product_id: ProductId::new(35455).unwrap(),
                brand_id: BrandId::new(2).unwrap(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PricingError::NotFound { .. }));
    }
}
