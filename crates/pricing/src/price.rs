use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pricechecker_core::{
    BrandId, DomainError, DomainResult, Entity, PriceId, PriceListId, ProductId, ValueObject,
};

/// ISO-style currency code (e.g. "EUR"). Opaque to resolution; passed through.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("currency code cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

impl ValueObject for CurrencyCode {}

/// Exact monetary amount. Never represented as binary floating point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: CurrencyCode,
}

impl Money {
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }
}

impl ValueObject for Money {}

/// Inclusive validity window `[start, end]`.
///
/// `start <= end` is expected but not enforced here; a window whose start is
/// after its end contains no instant at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidityWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ValidityWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Both bounds count as inside the window.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }

    /// True when the bounds are inverted (bad upstream data).
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl ValueObject for ValidityWindow {}

/// A price of a product for a brand, valid during a window, under a price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub id: PriceId,
    pub brand_id: BrandId,
    pub product_id: ProductId,
    pub price_list: PriceListId,
    pub validity: ValidityWindow,
    /// Higher wins among records applicable at the same instant.
    pub priority: i32,
    pub price: Money,
}

impl PriceRecord {
    pub fn is_applicable_at(&self, at: NaiveDateTime) -> bool {
        self.validity.contains(at)
    }
}

impl Entity for PriceRecord {
    type Id = PriceId;

    fn id(&self) -> PriceId {
        self.id
    }
}
