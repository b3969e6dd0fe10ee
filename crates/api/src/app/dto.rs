use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use pricechecker_core::{BrandId, DomainError, DomainResult, ProductId};
use pricechecker_pricing::{PriceQuery, PriceRecord};

/// Field name (as sent on the wire) -> validation message.
pub type FieldErrors = BTreeMap<&'static str, String>;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /prices/prioritized`.
///
/// Every field is optional at the JSON level so that a missing field is
/// reported as a validation failure alongside the others, not as a parse error.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    /// ISO local date-time, seconds optional.
    #[serde(default, deserialize_with = "local_date_time::deserialize_option")]
    #[schema(value_type = String, example = "2020-06-14T10:00:00")]
    pub application_date: Option<NaiveDateTime>,
    #[schema(example = 35455)]
    pub product_id: Option<i32>,
    #[schema(example = 1)]
    pub brand_id: Option<i32>,
}

impl PriceRequest {
    /// Check every field, collecting all failures.
    pub fn validate(&self) -> Result<PriceQuery, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.application_date.is_none() {
            errors.insert("applicationDate", "Application date is required".to_string());
        }
        let product_id =
            typed_id(&mut errors, "productId", "Product ID", self.product_id, ProductId::new);
        let brand_id = typed_id(&mut errors, "brandId", "Brand ID", self.brand_id, BrandId::new);

        match (self.application_date, product_id, brand_id) {
            (Some(application_date), Some(product_id), Some(brand_id)) if errors.is_empty() => {
                Ok(PriceQuery {
                    application_date,
                    product_id,
                    brand_id,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Build a typed id, recording the field message when it is absent or rejected.
fn typed_id<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: Option<i32>,
    new: impl FnOnce(i32) -> DomainResult<T>,
) -> Option<T> {
    let Some(raw) = value else {
        errors.insert(field, format!("{label} is required"));
        return None;
    };
    match new(raw) {
        Ok(id) => Some(id),
        Err(DomainError::InvalidId(_)) => {
            errors.insert(field, format!("{label} must be positive"));
            None
        }
        Err(other) => {
            errors.insert(field, other.to_string());
            None
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// Projection of the resolved price record. `price` travels as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizedPriceResponse {
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[serde(with = "rust_decimal::serde::str")]
    #[schema(value_type = String, example = "35.50")]
    pub price: Decimal,
    pub currency: String,
}

impl From<PriceRecord> for PrioritizedPriceResponse {
    fn from(record: PriceRecord) -> Self {
        Self {
            product_id: record.product_id.get(),
            brand_id: record.brand_id.get(),
            price_list: record.price_list.get(),
            start_date: record.validity.start(),
            end_date: record.validity.end(),
            price: record.price.amount,
            currency: record.price.currency.into(),
        }
    }
}

/// ISO local date-time, seconds optional (`2020-06-14T10:00` or `2020-06-14T10:00:00`).
mod local_date_time {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer};

    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse(&raw).map(Some).ok_or_else(|| {
                D::Error::custom(format!(
                    "applicationDate: {raw:?} is not an ISO local date-time (yyyy-MM-ddTHH:mm[:ss])"
                ))
            }),
        }
    }
}
