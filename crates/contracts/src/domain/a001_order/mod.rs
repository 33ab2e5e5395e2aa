pub mod records;

pub use records::{
    AddToOrderRequest, OrderId, OrderItem, OrderItemId, PricebookEntry, PricebookEntryId,
    ProductRef,
};
