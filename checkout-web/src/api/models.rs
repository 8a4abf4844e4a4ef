use checkout_core::{Line, Money, TaxedMoney};
use serde::{Deserialize, Serialize};

use super::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub subtotal_price: Option<TaxedMoney>,
    #[serde(default)]
    pub shipping_price: Option<TaxedMoney>,
    #[serde(default)]
    pub total_price: Option<TaxedMoney>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub number: String,
    /// ISO 8601 timestamp of order creation.
    pub created: String,
    pub status: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub subtotal: Option<TaxedMoney>,
    #[serde(default)]
    pub shipping_price: Option<TaxedMoney>,
    #[serde(default)]
    pub total: Option<TaxedMoney>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckoutData {
    pub checkout: Option<Checkout>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderData {
    pub order: Option<Order>,
}

/// Price rows shown under the line list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Totals {
    pub subtotal: Option<Money>,
    pub shipping: Option<Money>,
    pub total: Option<Money>,
}

fn gross(price: Option<&TaxedMoney>) -> Option<Money> {
    price.map(|p| p.gross.clone())
}

impl Checkout {
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals {
            subtotal: gross(self.subtotal_price.as_ref()),
            shipping: gross(self.shipping_price.as_ref()),
            total: gross(self.total_price.as_ref()),
        }
    }
}

impl Order {
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals {
            subtotal: gross(self.subtotal.as_ref()),
            shipping: gross(self.shipping_price.as_ref()),
            total: gross(self.total.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// # Errors
    ///
    /// Returns [`ApiError::GraphQl`] when the server reported errors, or
    /// [`ApiError::Decode`] when the envelope carries no data.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            return Err(ApiError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response carried no data".to_string()))
    }
}
