//! Strongly-typed identifiers used across the domain.
//!
//! All identifiers are positive integers. Construction rejects zero and
//! negative values, so a value of one of these types is always valid.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ProductId(i32);

/// Identifier of a brand (the commercial chain owning the product).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct BrandId(i32);

/// Identifier of a price list (tariff).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PriceListId(i32);

/// Storage identifier of a price record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PriceId(i64);

macro_rules! impl_positive_id_newtype {
    ($t:ident, $raw:ty, $name:literal) => {
        impl $t {
            /// Create an identifier, rejecting zero and negative values.
            pub fn new(value: $raw) -> Result<Self, DomainError> {
                if value <= 0 {
                    return Err(DomainError::invalid_id(format!(
                        "{}: must be positive, got {}",
                        $name, value
                    )));
                }
                Ok(Self(value))
            }

            pub fn get(&self) -> $raw {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<$raw> for $t {
            type Error = DomainError;

            fn try_from(value: $raw) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for $raw {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_positive_id_newtype!(ProductId, i32, "ProductId");
impl_positive_id_newtype!(BrandId, i32, "BrandId");
impl_positive_id_newtype!(PriceListId, i32, "PriceListId");
impl_positive_id_newtype!(PriceId, i64, "PriceId");
