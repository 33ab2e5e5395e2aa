use async_trait::async_trait;
use contracts::domain::a001_order::{
    AddToOrderRequest, OrderId, OrderItem, OrderItemId, PricebookEntry, PricebookEntryId,
};
use serde::de::DeserializeOwned;

use super::{OrderService, ServiceError};

/// Conventional backend port of the stack; override with `ORDER_API_BASE_URL`.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const BASE_URL_ENV: &str = "ORDER_API_BASE_URL";

/// JSON-over-HTTP binding of [`OrderService`] against the backend's
/// `/api/order` routes. A non-success status carries the backend's error
/// message in the response body.
#[derive(Clone)]
pub struct HttpOrderService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL from `ORDER_API_BASE_URL`, falling back to the stack default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        };
        Err(ServiceError::Backend(message))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        log::debug!("GET {path}");
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }

    async fn post_empty(&self, path: &str) -> Result<(), ServiceError> {
        log::debug!("POST {path}");
        let response = self
            .client
            .post(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        Self::check(response).await.map(|_| ())
    }
}

fn transport(error: reqwest::Error) -> ServiceError {
    ServiceError::Transport(error.to_string())
}

#[async_trait]
impl OrderService for HttpOrderService {
    async fn get_orderable_products(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<PricebookEntry>, ServiceError> {
        self.get_json(&format!("/api/order/{order_id}/orderable-products"))
            .await
    }

    async fn get_order_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, ServiceError> {
        self.get_json(&format!("/api/order/{order_id}/items")).await
    }

    async fn is_order_activated(&self, order_id: OrderId) -> Result<bool, ServiceError> {
        self.get_json(&format!("/api/order/{order_id}/activated"))
            .await
    }

    async fn add_to_order(
        &self,
        order_id: OrderId,
        entry_id: PricebookEntryId,
    ) -> Result<(), ServiceError> {
        let path = format!("/api/order/{order_id}/items");
        log::debug!("POST {path}");
        let request = AddToOrderRequest {
            pricebook_entry_id: entry_id,
        };
        let response = self
            .client
            .post(self.url(&path))
            .json(&request)
            .send()
            .await
            .map_err(transport)?;
        Self::check(response).await.map(|_| ())
    }

    async fn increase_quantity(&self, item_id: OrderItemId) -> Result<(), ServiceError> {
        self.post_empty(&format!("/api/order/items/{item_id}/increase"))
            .await
    }

    async fn decrease_quantity(&self, item_id: OrderItemId) -> Result<(), ServiceError> {
        self.post_empty(&format!("/api/order/items/{item_id}/decrease"))
            .await
    }

    async fn confirm_order(&self, order_id: OrderId) -> Result<(), ServiceError> {
        self.post_empty(&format!("/api/order/{order_id}/confirm"))
            .await
    }
}
