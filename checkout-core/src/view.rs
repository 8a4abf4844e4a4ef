//! Top-level view selection driven by the query string.

use crate::query::QueryParams;

/// The two mutually exclusive screens the storefront can mount.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RootView {
    OrderConfirmation { order_id: String },
    Checkout,
}

impl RootView {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OrderConfirmation { .. } => "order-confirmation",
            Self::Checkout => "checkout",
        }
    }

    #[must_use]
    pub fn order_id(&self) -> Option<&str> {
        match self {
            Self::OrderConfirmation { order_id } => Some(order_id),
            Self::Checkout => None,
        }
    }
}

/// An `orderId` parameter selects the confirmation view; anything else is checkout.
#[must_use]
pub fn select_view(query: &QueryParams) -> RootView {
    query
        .order_id()
        .map_or(RootView::Checkout, |order_id| RootView::OrderConfirmation {
            order_id: order_id.to_string(),
        })
}
