pub mod http;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use contracts::domain::a001_order::{
    OrderId, OrderItem, OrderItemId, PricebookEntry, PricebookEntryId,
};
use thiserror::Error;

pub use http::HttpOrderService;

/// Failure of a single remote operation.
///
/// `Backend` carries the backend-supplied message verbatim; widgets embed it
/// after their fixed toast prefixes, so its `Display` adds nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Backend(String),

    #[error("network error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Remote business-logic operations of the order backend, one method per
/// generated stub. Every failure is terminal for that attempt; no retries.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Pricebook entries orderable for the given order.
    async fn get_orderable_products(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<PricebookEntry>, ServiceError>;

    /// Current line items of the order.
    async fn get_order_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, ServiceError>;

    /// Whether the order has been activated (mutation disallowed afterwards).
    async fn is_order_activated(&self, order_id: OrderId) -> Result<bool, ServiceError>;

    /// Add a pricebook entry to the order.
    async fn add_to_order(
        &self,
        order_id: OrderId,
        entry_id: PricebookEntryId,
    ) -> Result<(), ServiceError>;

    async fn increase_quantity(&self, item_id: OrderItemId) -> Result<(), ServiceError>;

    async fn decrease_quantity(&self, item_id: OrderItemId) -> Result<(), ServiceError>;

    /// Confirm (activate) the order.
    async fn confirm_order(&self, order_id: OrderId) -> Result<(), ServiceError>;
}
