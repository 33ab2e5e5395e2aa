use std::sync::{Arc, Mutex};

use contracts::domain::a001_order::{OrderId, PricebookEntry, PricebookEntryId};

use super::state::{create_state, ProductListState, ProductRow};
use crate::service::{OrderService, ServiceError};
use crate::shared::fetch::QueryHandle;
use crate::shared::message_bus::{MessageBus, ITEM_ADDED};
use crate::shared::notifications::{NotificationSink, Toast};
use crate::shared::state::StateCell;

type ProductsQuery = QueryHandle<Result<Vec<PricebookEntry>, ServiceError>>;

/// Catalog widget: lists the pricebook entries orderable for the current
/// order, paginates them client-side and adds an entry to the order on the
/// row-level "Add" action, announcing the change on the message bus.
pub struct ProductListWidget {
    service: Arc<dyn OrderService>,
    bus: MessageBus,
    notify: NotificationSink,
    state: StateCell<ProductListState>,
    record_id: Mutex<Option<OrderId>>,
    query: Mutex<Option<ProductsQuery>>,
}

impl ProductListWidget {
    pub fn new(service: Arc<dyn OrderService>, bus: MessageBus, notify: NotificationSink) -> Self {
        Self {
            service,
            bus,
            notify,
            state: create_state(),
            record_id: Mutex::new(None),
            query: Mutex::new(None),
        }
    }

    /// Snapshot of the current widget state.
    pub fn state(&self) -> ProductListState {
        self.state.get()
    }

    /// Register a render callback fired after every state change.
    pub fn observe(&self, observer: impl Fn(&ProductListState) + Send + Sync + 'static) {
        self.state.observe(observer);
    }

    /// Host contract: called on mount and again whenever the record-context
    /// id changes. Stores a replayable orderable-products query and runs it.
    pub async fn set_record_id(&self, order_id: OrderId) {
        *self.record_id.lock().unwrap() = Some(order_id);

        let service = Arc::clone(&self.service);
        let query = QueryHandle::new(move || {
            let service = Arc::clone(&service);
            Box::pin(async move { service.get_orderable_products(order_id).await })
        });
        *self.query.lock().unwrap() = Some(query);

        self.refresh().await;
    }

    /// Replay the stored orderable-products query.
    pub async fn refresh(&self) {
        let query = self.query.lock().unwrap().clone();
        let Some(query) = query else {
            // Виджет ещё не привязан к записи
            return;
        };

        self.state.update(|s| s.loading = true);

        match query.refresh().await {
            Ok(entries) => self.apply_products(entries),
            Err(err) => {
                log::error!("orderable products fetch failed: {err}");
                self.state.update(|s| {
                    s.products.clear();
                    s.pager.reapply(&s.products);
                    s.loading = false;
                });
                (self.notify)(Toast::error(
                    "Error",
                    format!("Failed to retrieve available products: {err}"),
                ));
            }
        }
    }

    fn apply_products(&self, entries: Vec<PricebookEntry>) {
        let rows: Vec<ProductRow> = entries.into_iter().map(ProductRow::from).collect();
        let empty = rows.is_empty();

        self.state.update(|s| {
            s.products = rows;
            // Row count may have changed; navigate to the current page again
            s.pager.reapply(&s.products);
            s.loading = false;
        });

        if empty {
            log::warn!("no orderable products for the current order");
            (self.notify)(Toast::warning(
                "Orderable products not found",
                "Make sure that pricebook is assigned to this order.",
            ));
        }
    }

    /// Row-level datatable action. Only "Add" is defined: it adds the entry
    /// to the order and publishes the invalidation message. The catalog list
    /// itself is not re-fetched.
    pub async fn handle_row_action(&self, action_name: &str, entry_id: PricebookEntryId) {
        if action_name != "Add" {
            log::debug!("product list: ignoring row action '{action_name}'");
            return;
        }
        let order_id = *self.record_id.lock().unwrap();
        let Some(order_id) = order_id else {
            log::warn!("product list: add requested before a record id was set");
            return;
        };

        match self.service.add_to_order(order_id, entry_id).await {
            Ok(()) => {
                // Состав заказа изменился — сигналим второму виджету
                self.bus.publish(ITEM_ADDED).await;
            }
            Err(err) => {
                log::error!("add to order failed: {err}");
                (self.notify)(Toast::error(
                    "Error",
                    format!("Error while adding item to order: {err}"),
                ));
            }
        }
    }

    pub fn goto_page(&self, page_number: usize) {
        self.state
            .update(|s| s.pager.goto_page(&s.products, page_number));
    }

    pub fn next_page(&self) {
        self.state.update(|s| s.pager.next_page(&s.products));
    }

    pub fn previous_page(&self) {
        self.state.update(|s| s.pager.previous_page(&s.products));
    }
}
