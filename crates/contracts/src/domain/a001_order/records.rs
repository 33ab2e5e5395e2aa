use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Идентификатор заказа (record id, который передаёт хост-страница)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(OrderId::new)
    }
}

/// Идентификатор строки заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(pub Uuid);

impl OrderItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for OrderItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for OrderItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(OrderItemId::new)
    }
}

/// Идентификатор позиции прайс-листа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricebookEntryId(pub Uuid);

impl PricebookEntryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PricebookEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PricebookEntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(PricebookEntryId::new)
    }
}

// ============================================================================
// Wire Records
// ============================================================================

/// Вложенная ссылка на товар (несёт отображаемое имя)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRef {
    pub name: String,
}

/// Позиция прайс-листа, доступная для добавления в заказ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricebookEntry {
    pub id: PricebookEntryId,

    /// Ссылка на товар; имя разворачивается в плоскую строку на стороне виджета
    pub product: ProductRef,

    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

/// Строка текущего заказа
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: OrderItemId,

    pub product: ProductRef,

    #[serde(rename = "unitPrice")]
    pub unit_price: f64,

    pub quantity: f64,

    #[serde(rename = "totalPrice")]
    pub total_price: f64,
}

// ============================================================================
// Requests
// ============================================================================

/// Тело запроса «добавить позицию прайс-листа в заказ»
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddToOrderRequest {
    #[serde(rename = "pricebookEntryId")]
    pub pricebook_entry_id: PricebookEntryId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_id_from_string() {
        let raw = "b3e1c9a0-4f2d-4c5e-9a7b-1d2e3f405162";
        let id: OrderId = raw.parse().unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn test_order_id_rejects_garbage() {
        assert!("not-a-record-id".parse::<OrderId>().is_err());
    }

    #[test]
    fn test_pricebook_entry_wire_shape() {
        let entry: PricebookEntry = serde_json::from_value(json!({
            "id": "2f1b8a9c-0d3e-4f5a-8b7c-6d5e4f3a2b1c",
            "product": { "name": "Ceramic Sink 60" },
            "unitPrice": 129.5
        }))
        .unwrap();

        assert_eq!(entry.product.name, "Ceramic Sink 60");
        assert_eq!(entry.unit_price, 129.5);
    }

    #[test]
    fn test_add_to_order_request_field_name() {
        let request = AddToOrderRequest {
            pricebook_entry_id: "2f1b8a9c-0d3e-4f5a-8b7c-6d5e4f3a2b1c".parse().unwrap(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("pricebookEntryId").is_some());
    }

    #[test]
    fn test_order_item_wire_shape() {
        let item: OrderItem = serde_json::from_value(json!({
            "id": "9a8b7c6d-5e4f-4a3b-2c1d-0e9f8a7b6c5d",
            "product": { "name": "Ceramic Sink 60" },
            "unitPrice": 129.5,
            "quantity": 2.0,
            "totalPrice": 259.0
        }))
        .unwrap();

        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.total_price, 259.0);

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["unitPrice"], 129.5);
        assert_eq!(back["totalPrice"], 259.0);
    }
}
