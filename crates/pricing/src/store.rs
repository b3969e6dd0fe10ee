//! Price store port.

use std::sync::Arc;

use thiserror::Error;

use pricechecker_core::{BrandId, ProductId};

use crate::price::PriceRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceStoreError {
    /// The backing storage could not be reached or the query failed.
    #[error("price store unavailable: {0}")]
    Unavailable(String),

    /// A stored row could not be mapped into a price record.
    #[error("corrupt price record: {0}")]
    Corrupt(String),
}

/// Read access to the externally maintained set of price records.
///
/// Implementations must return **every** record of the product/brand pair,
/// including records whose window does not cover the instant being resolved.
/// Date filtering belongs to the resolver.
#[async_trait::async_trait]
pub trait PriceStore: Send + Sync {
    async fn find_by_product_and_brand(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> Result<Vec<PriceRecord>, PriceStoreError>;
}

#[async_trait::async_trait]
impl<S> PriceStore for Arc<S>
where
    S: PriceStore + ?Sized,
{
    async fn find_by_product_and_brand(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> Result<Vec<PriceRecord>, PriceStoreError> {
        (**self).find_by_product_and_brand(product_id, brand_id).await
    }
}
