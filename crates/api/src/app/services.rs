use std::sync::Arc;

use anyhow::Context;

use pricechecker_infra::{seed, InMemoryPriceStore, PostgresPriceStore};
use pricechecker_pricing::{GetPrioritizedPrice, PriceService, PriceStore};

use crate::config::AppConfig;

/// Use cases shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    pub prices: Arc<dyn GetPrioritizedPrice>,
}

impl AppServices {
    pub fn with_store<S>(store: S) -> Self
    where
        S: PriceStore + 'static,
    {
        Self {
            prices: Arc::new(PriceService::new(store)),
        }
    }

    /// In-memory store holding the reference tariff (dev/tests).
    pub fn in_memory() -> anyhow::Result<Self> {
        let store = InMemoryPriceStore::reference_tariff().context("failed to load reference tariff")?;
        Ok(Self::with_store(store))
    }
}

/// Pick the price store from configuration: Postgres when `DATABASE_URL` is
/// set, otherwise the in-memory reference tariff.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set; serving the in-memory reference tariff");
        return AppServices::in_memory();
    };

    let store = PostgresPriceStore::connect(database_url, config.database_max_connections)
        .await
        .context("failed to connect to Postgres")?;
    store.migrate().await.context("failed to prepare prices table")?;

    if config.seed_reference_tariff {
        let records = seed::reference_tariff().context("failed to load reference tariff")?;
        store.seed(&records).await.context("failed to seed prices table")?;
    }

    tracing::info!("using Postgres price store");
    Ok(AppServices::with_store(store))
}
