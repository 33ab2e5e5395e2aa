use std::sync::Mutex;

use async_trait::async_trait;
use contracts::domain::a001_order::{
    OrderId, OrderItem, OrderItemId, PricebookEntry, PricebookEntryId,
};

use super::{OrderService, ServiceError};

/// Programmable in-memory backend double with an ordered call log.
///
/// Every operation returns a clone of its configured result; tests flip the
/// results between calls to model backend-side changes.
pub struct MockOrderService {
    pub products: Mutex<Result<Vec<PricebookEntry>, ServiceError>>,
    pub items: Mutex<Result<Vec<OrderItem>, ServiceError>>,
    pub activated: Mutex<Result<bool, ServiceError>>,
    pub add_result: Mutex<Result<(), ServiceError>>,
    pub increase_result: Mutex<Result<(), ServiceError>>,
    pub decrease_result: Mutex<Result<(), ServiceError>>,
    pub confirm_result: Mutex<Result<(), ServiceError>>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockOrderService {
    pub fn new() -> Self {
        Self {
            products: Mutex::new(Ok(Vec::new())),
            items: Mutex::new(Ok(Vec::new())),
            activated: Mutex::new(Ok(false)),
            add_result: Mutex::new(Ok(())),
            increase_result: Mutex::new(Ok(())),
            decrease_result: Mutex::new(Ok(())),
            confirm_result: Mutex::new(Ok(())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl OrderService for MockOrderService {
    async fn get_orderable_products(
        &self,
        _order_id: OrderId,
    ) -> Result<Vec<PricebookEntry>, ServiceError> {
        self.record("get_orderable_products");
        self.products.lock().unwrap().clone()
    }

    async fn get_order_items(&self, _order_id: OrderId) -> Result<Vec<OrderItem>, ServiceError> {
        self.record("get_order_items");
        self.items.lock().unwrap().clone()
    }

    async fn is_order_activated(&self, _order_id: OrderId) -> Result<bool, ServiceError> {
        self.record("is_order_activated");
        self.activated.lock().unwrap().clone()
    }

    async fn add_to_order(
        &self,
        _order_id: OrderId,
        _entry_id: PricebookEntryId,
    ) -> Result<(), ServiceError> {
        self.record("add_to_order");
        self.add_result.lock().unwrap().clone()
    }

    async fn increase_quantity(&self, _item_id: OrderItemId) -> Result<(), ServiceError> {
        self.record("increase_quantity");
        self.increase_result.lock().unwrap().clone()
    }

    async fn decrease_quantity(&self, _item_id: OrderItemId) -> Result<(), ServiceError> {
        self.record("decrease_quantity");
        self.decrease_result.lock().unwrap().clone()
    }

    async fn confirm_order(&self, _order_id: OrderId) -> Result<(), ServiceError> {
        self.record("confirm_order");
        self.confirm_result.lock().unwrap().clone()
    }
}
