pub mod state;
pub mod widget;

pub use state::{MyOrderState, OrderItemRow};
pub use widget::{MyOrderWidget, OrderStatusUndefined};
