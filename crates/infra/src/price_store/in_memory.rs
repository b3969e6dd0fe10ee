use std::sync::RwLock;

use pricechecker_core::{BrandId, ProductId};
use pricechecker_pricing::{PriceRecord, PriceStore, PriceStoreError};

use crate::seed;

/// In-memory price store.
///
/// Intended for tests/dev. Lookups scan the whole snapshot.
#[derive(Debug, Default)]
pub struct InMemoryPriceStore {
    records: RwLock<Vec<PriceRecord>>,
}

impl InMemoryPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<PriceRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Store pre-loaded with the bundled reference tariff.
    pub fn reference_tariff() -> Result<Self, PriceStoreError> {
        Ok(Self::with_records(seed::reference_tariff()?))
    }

    pub fn insert(&self, record: PriceRecord) -> Result<(), PriceStoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| PriceStoreError::Unavailable("in-memory store lock poisoned".into()))?;
        records.push(record);
        Ok(())
    }

    /// Number of stored records. Writers only push, so a poisoned lock is read through.
    pub fn len(&self) -> usize {
        match self.records.read() {
            Ok(records) => records.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl PriceStore for InMemoryPriceStore {
    async fn find_by_product_and_brand(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> Result<Vec<PriceRecord>, PriceStoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| PriceStoreError::Unavailable("in-memory store lock poisoned".into()))?;

        Ok(records
            .iter()
            .filter(|r| r.product_id == product_id && r.brand_id == brand_id)
            .cloned()
            .collect())
    }
}
