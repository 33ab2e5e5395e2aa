use std::sync::{Arc, Mutex};

use contracts::domain::a001_order::{OrderId, OrderItem, OrderItemId};
use thiserror::Error;

use super::state::{create_state, MyOrderState, OrderItemRow};
use crate::service::{OrderService, ServiceError};
use crate::shared::fetch::QueryHandle;
use crate::shared::message_bus::{MessageBus, Subscription, ITEM_ADDED};
use crate::shared::notifications::{NotificationSink, Toast};
use crate::shared::state::StateCell;

type ItemsQuery = QueryHandle<Result<Vec<OrderItem>, ServiceError>>;
type StatusQuery = QueryHandle<Result<bool, ServiceError>>;

/// Fatal client-side fault: without the activation flag the widget cannot
/// decide whether mutation is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Order status not defined")]
pub struct OrderStatusUndefined;

/// Order widget: shows the order's current line items, adjusts quantities,
/// confirms the order, and re-reads its rows whenever the catalog widget
/// announces a change on the message bus.
pub struct MyOrderWidget {
    service: Arc<dyn OrderService>,
    bus: MessageBus,
    notify: NotificationSink,
    state: StateCell<MyOrderState>,
    record_id: Mutex<Option<OrderId>>,
    items_query: Mutex<Option<ItemsQuery>>,
    status_query: Mutex<Option<StatusQuery>>,
    subscription: Mutex<Option<Subscription>>,
}

impl MyOrderWidget {
    pub fn new(service: Arc<dyn OrderService>, bus: MessageBus, notify: NotificationSink) -> Self {
        Self {
            service,
            bus,
            notify,
            state: create_state(),
            record_id: Mutex::new(None),
            items_query: Mutex::new(None),
            status_query: Mutex::new(None),
            subscription: Mutex::new(None),
        }
    }

    /// Snapshot of the current widget state.
    pub fn state(&self) -> MyOrderState {
        self.state.get()
    }

    /// Register a render callback fired after every state change.
    pub fn observe(&self, observer: impl Fn(&MyOrderState) + Send + Sync + 'static) {
        self.state.observe(observer);
    }

    /// Subscribe to the invalidation channel. Idempotent: a repeated mount
    /// keeps the original registration.
    pub fn connect(self: &Arc<Self>) {
        let mut subscription = self.subscription.lock().unwrap();
        if subscription.is_some() {
            return;
        }
        let widget = Arc::downgrade(self);
        *subscription = Some(self.bus.subscribe(ITEM_ADDED, move || {
            let widget = widget.clone();
            Box::pin(async move {
                // Сообщение без payload — просто перечитываем строки заказа
                if let Some(widget) = widget.upgrade() {
                    widget.refresh_items().await;
                }
            })
        }));
    }

    /// Host contract: called on mount and again whenever the record-context
    /// id changes. Stores both replayable queries and runs both fetches.
    pub async fn set_record_id(&self, order_id: OrderId) -> Result<(), OrderStatusUndefined> {
        *self.record_id.lock().unwrap() = Some(order_id);

        let service = Arc::clone(&self.service);
        let items = QueryHandle::new(move || {
            let service = Arc::clone(&service);
            Box::pin(async move { service.get_order_items(order_id).await })
        });
        *self.items_query.lock().unwrap() = Some(items);

        let service = Arc::clone(&self.service);
        let status = QueryHandle::new(move || {
            let service = Arc::clone(&service);
            Box::pin(async move { service.is_order_activated(order_id).await })
        });
        *self.status_query.lock().unwrap() = Some(status);

        // Items first, so the enablement computed on the status continuation
        // already sees the row count
        self.refresh_items().await;
        self.refresh_status().await
    }

    /// Replay the stored line-items query.
    pub async fn refresh_items(&self) {
        let query = self.items_query.lock().unwrap().clone();
        let Some(query) = query else {
            return;
        };

        self.state.update(|s| s.loading = true);

        match query.refresh().await {
            Ok(items) => {
                let rows: Vec<OrderItemRow> = items.into_iter().map(OrderItemRow::from).collect();
                self.state.update(|s| {
                    s.rows = rows;
                    s.recompute_buttons();
                    s.loading = false;
                });
            }
            Err(err) => {
                log::error!("order items fetch failed: {err}");
                self.state.update(|s| {
                    s.rows.clear();
                    s.recompute_buttons();
                    s.loading = false;
                });
                (self.notify)(Toast::error(
                    "Error",
                    format!("Failed to retrieve order items: {err}"),
                ));
            }
        }
    }

    /// Replay the stored activation-status query.
    ///
    /// Failure leaves the widget unable to decide enablement: the controls
    /// are force-disabled and the typed fault is returned, not just toasted.
    pub async fn refresh_status(&self) -> Result<(), OrderStatusUndefined> {
        let query = self.status_query.lock().unwrap().clone();
        let Some(query) = query else {
            return Ok(());
        };

        match query.refresh().await {
            Ok(activated) => {
                self.state.update(|s| {
                    s.activated = Some(activated);
                    s.recompute_buttons();
                });
                Ok(())
            }
            Err(err) => {
                log::error!("activation status fetch failed: {err}");
                self.state.update(|s| {
                    s.activated = None;
                    s.recompute_buttons();
                });
                Err(OrderStatusUndefined)
            }
        }
    }

    /// Row-level datatable action: "Add" increases the line quantity,
    /// "Remove" decreases it. The line-items fetch is reissued strictly after
    /// the mutation resolves.
    pub async fn handle_row_action(&self, action_name: &str, item_id: OrderItemId) {
        match action_name {
            "Add" => match self.service.increase_quantity(item_id).await {
                Ok(()) => self.refresh_items().await,
                Err(err) => {
                    log::error!("increase quantity failed: {err}");
                    (self.notify)(Toast::error(
                        "Error",
                        format!("Failed to increase quantity: {err}"),
                    ));
                }
            },
            "Remove" => match self.service.decrease_quantity(item_id).await {
                Ok(()) => self.refresh_items().await,
                Err(err) => {
                    log::error!("decrease quantity failed: {err}");
                    (self.notify)(Toast::error(
                        "Error",
                        format!("Failed to decrease quantity: {err}"),
                    ));
                }
            },
            other => log::debug!("my order: ignoring row action '{other}'"),
        }
    }

    /// Confirm (activate) the order, then re-read the activation flag so the
    /// mutation controls disable once the backend reports the new state.
    pub async fn handle_confirm(&self) -> Result<(), OrderStatusUndefined> {
        let order_id = *self.record_id.lock().unwrap();
        let Some(order_id) = order_id else {
            log::warn!("my order: confirm requested before a record id was set");
            return Ok(());
        };

        match self.service.confirm_order(order_id).await {
            Ok(()) => {
                (self.notify)(Toast::success("Success!", "Order confirmed and activated"));
                self.refresh_status().await
            }
            Err(err) => {
                log::error!("confirm order failed: {err}");
                (self.notify)(Toast::error(
                    "Error",
                    format!("Failed to confirm order: {err}"),
                ));
                Ok(())
            }
        }
    }
}
