pub mod fetch;
pub mod message_bus;
pub mod notifications;
pub mod pagination;
pub mod state;
