//! Postgres-backed price store.
//!
//! Reads the `prices` table (one row per price record). Rows are mapped into
//! domain records with identifier validation; a row that fails validation is
//! reported as `PriceStoreError::Corrupt` rather than silently skipped.
//!
//! ## Error Mapping
//!
//! | SQLx Error | PriceStoreError |
//! |------------|-----------------|
//! | Database | `Unavailable` |
//! | PoolTimedOut / PoolClosed / Io | `Unavailable` |
//! | ColumnDecode / ColumnNotFound | `Corrupt` |
//! | Other | `Unavailable` |

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::instrument;

use pricechecker_core::{BrandId, DomainError, PriceId, PriceListId, ProductId};
use pricechecker_pricing::{
    CurrencyCode, Money, PriceRecord, PriceStore, PriceStoreError, ValidityWindow,
};

const CREATE_PRICES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS prices (
    id              BIGINT PRIMARY KEY,
    brand_id        INTEGER NOT NULL,
    start_date      TIMESTAMP NOT NULL,
    end_date        TIMESTAMP NOT NULL,
    price_list      INTEGER NOT NULL,
    product_id      INTEGER NOT NULL,
    priority        INTEGER NOT NULL,
    price           NUMERIC(10, 2) NOT NULL,
    currency        VARCHAR(3) NOT NULL,
    last_update     TIMESTAMP NULL,
    last_update_by  VARCHAR(255) NULL
)
"#;

const CREATE_LOOKUP_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS prices_product_brand_idx ON prices (product_id, brand_id)";

/// Postgres-backed price store.
///
/// `Send + Sync`; the SQLx pool handles connection management.
#[derive(Debug, Clone)]
pub struct PostgresPriceStore {
    pool: Arc<PgPool>,
}

impl PostgresPriceStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect a pool with a bounded acquire timeout.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, PriceStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }

    /// Create the `prices` table and lookup index if missing.
    pub async fn migrate(&self) -> Result<(), PriceStoreError> {
        sqlx::query(CREATE_PRICES_TABLE)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("migrate", e))?;
        sqlx::query(CREATE_LOOKUP_INDEX)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("migrate", e))?;
        Ok(())
    }

    /// Insert records, skipping ids that already exist. Returns rows inserted.
    #[instrument(skip_all, fields(records = records.len()))]
    pub async fn seed(&self, records: &[PriceRecord]) -> Result<u64, PriceStoreError> {
        let mut inserted = 0;
        for r in records {
            let result = sqlx::query(
                r#"
                INSERT INTO prices
                    (id, brand_id, start_date, end_date, price_list, product_id, priority, price, currency, last_update, last_update_by)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), 'seed')
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(r.id.get())
            .bind(r.brand_id.get())
            .bind(r.validity.start())
            .bind(r.validity.end())
            .bind(r.price_list.get())
            .bind(r.product_id.get())
            .bind(r.priority)
            .bind(r.price.amount)
            .bind(r.price.currency.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("seed", e))?;
            inserted += result.rows_affected();
        }
        tracing::info!(inserted, "seeded prices table");
        Ok(inserted)
    }
}

#[async_trait::async_trait]
impl PriceStore for PostgresPriceStore {
    #[instrument(skip_all, fields(product_id = %product_id, brand_id = %brand_id))]
    async fn find_by_product_and_brand(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> Result<Vec<PriceRecord>, PriceStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, brand_id, start_date, end_date, price_list, product_id, priority, price, currency
            FROM prices
            WHERE product_id = $1 AND brand_id = $2
            "#,
        )
        .bind(product_id.get())
        .bind(brand_id.get())
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_product_and_brand", e))?;

        rows.iter().map(row_to_record).collect()
    }
}

/// Columns of one `prices` row, decoded but not yet validated.
#[derive(Debug, Clone)]
struct PriceRow {
    id: i64,
    brand_id: i32,
    product_id: i32,
    price_list: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
    priority: i32,
    amount: Decimal,
    currency: String,
}

impl PriceRow {
    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            brand_id: row.try_get("brand_id")?,
            product_id: row.try_get("product_id")?,
            price_list: row.try_get("price_list")?,
            start: row.try_get("start_date")?,
            end: row.try_get("end_date")?,
            priority: row.try_get("priority")?,
            amount: row.try_get("price")?,
            currency: row.try_get("currency")?,
        })
    }

    /// Validate identifiers and currency. Any failure marks the row `Corrupt`.
    fn into_record(self) -> Result<PriceRecord, PriceStoreError> {
        let id = self.id;
        let corrupt = |e: DomainError| PriceStoreError::Corrupt(format!("row {id}: {e}"));

        Ok(PriceRecord {
            id: PriceId::new(self.id).map_err(corrupt)?,
            brand_id: BrandId::new(self.brand_id).map_err(corrupt)?,
            product_id: ProductId::new(self.product_id).map_err(corrupt)?,
            price_list: PriceListId::new(self.price_list).map_err(corrupt)?,
            validity: ValidityWindow::new(self.start, self.end),
            priority: self.priority,
            price: Money::new(self.amount, CurrencyCode::new(self.currency).map_err(corrupt)?),
        })
    }
}

fn row_to_record(row: &PgRow) -> Result<PriceRecord, PriceStoreError> {
    PriceRow::decode(row)
        .map_err(|e| map_sqlx_error("decode", e))?
        .into_record()
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> PriceStoreError {
    match err {
        sqlx::Error::Database(db_err) => PriceStoreError::Unavailable(format!(
            "database error in {}: {}",
            operation,
            db_err.message()
        )),
        sqlx::Error::ColumnDecode { index, source } => {
            PriceStoreError::Corrupt(format!("cannot decode column {index} in {operation}: {source}"))
        }
        sqlx::Error::ColumnNotFound(column) => {
            PriceStoreError::Corrupt(format!("missing column {column} in {operation}"))
        }
        sqlx::Error::PoolTimedOut => {
            PriceStoreError::Unavailable(format!("timed out acquiring connection in {operation}"))
        }
        sqlx::Error::PoolClosed => {
            PriceStoreError::Unavailable(format!("connection pool closed in {operation}"))
        }
        other => PriceStoreError::Unavailable(format!("{operation}: {other}")),
    }
}
