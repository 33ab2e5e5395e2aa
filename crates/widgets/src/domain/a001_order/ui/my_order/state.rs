use contracts::domain::a001_order::{OrderItem, OrderItemId};
use serde::Serialize;

use crate::shared::state::StateCell;

/// Flat table row for the order-items datatable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemRow {
    pub id: OrderItemId,
    pub name: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub quantity: f64,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
}

impl From<OrderItem> for OrderItemRow {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            name: item.product.name,
            unit_price: item.unit_price,
            quantity: item.quantity,
            total_price: item.total_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MyOrderState {
    pub rows: Vec<OrderItemRow>,

    /// None until the activation fetch succeeds, and again after it fails
    pub activated: Option<bool>,

    /// Disabled state of the quantity and confirm controls
    pub buttons_disabled: bool,

    /// True while the line-items fetch is in flight
    pub loading: bool,
}

impl Default for MyOrderState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            activated: None,
            buttons_disabled: true,
            loading: false,
        }
    }
}

impl MyOrderState {
    /// Кнопки доступны только если заказ не активирован и в нём есть строки
    pub fn recompute_buttons(&mut self) {
        self.buttons_disabled = self.activated != Some(false) || self.rows.is_empty();
    }
}

pub fn create_state() -> StateCell<MyOrderState> {
    StateCell::new(MyOrderState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> OrderItemRow {
        OrderItemRow {
            id: OrderItemId::new_v4(),
            name: "Product".to_string(),
            unit_price: 10.0,
            quantity: 1.0,
            total_price: 10.0,
        }
    }

    #[test]
    fn test_buttons_enabled_only_for_open_order_with_rows() {
        let mut state = MyOrderState {
            rows: vec![row(), row(), row()],
            activated: Some(false),
            buttons_disabled: true,
            loading: false,
        };
        state.recompute_buttons();
        assert!(!state.buttons_disabled);
    }

    #[test]
    fn test_buttons_disabled_for_activated_order() {
        let mut state = MyOrderState {
            rows: vec![row(), row(), row(), row(), row()],
            activated: Some(true),
            buttons_disabled: false,
            loading: false,
        };
        state.recompute_buttons();
        assert!(state.buttons_disabled);
    }

    #[test]
    fn test_buttons_disabled_for_empty_order() {
        let mut state = MyOrderState {
            rows: Vec::new(),
            activated: Some(false),
            buttons_disabled: false,
            loading: false,
        };
        state.recompute_buttons();
        assert!(state.buttons_disabled);
    }

    #[test]
    fn test_buttons_disabled_while_activation_unknown() {
        let mut state = MyOrderState {
            rows: vec![row()],
            activated: None,
            buttons_disabled: false,
            loading: false,
        };
        state.recompute_buttons();
        assert!(state.buttons_disabled);
    }
}
