use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use futures::future::BoxFuture;
use once_cell::sync::Lazy;

/// Topic published by the catalog widget after a successful add-to-order.
pub const ITEM_ADDED: &str = "item_added";

type Handler = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    topics: HashMap<String, Vec<(u64, Handler)>>,
}

/// In-process publish/subscribe registry for payload-less invalidation
/// messages: topic string mapped to an ordered set of async callbacks.
///
/// Cloning yields another handle onto the same registry.
#[derive(Clone, Default)]
pub struct MessageBus {
    inner: Arc<Mutex<Registry>>,
}

static GLOBAL: Lazy<MessageBus> = Lazy::new(MessageBus::new);

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide default instance, the analog of a host-provided message
    /// context.
    pub fn global() -> MessageBus {
        GLOBAL.clone()
    }

    /// Register a callback for a topic. The registration lives until the
    /// returned [`Subscription`] is dropped.
    pub fn subscribe(
        &self,
        topic: &str,
        handler: impl Fn() -> BoxFuture<'static, ()> + Send + Sync + 'static,
    ) -> Subscription {
        let mut registry = self.inner.lock().unwrap();
        registry.next_id += 1;
        let id = registry.next_id;
        registry
            .topics
            .entry(topic.to_string())
            .or_default()
            .push((id, Arc::new(handler)));
        log::debug!("bus: subscriber #{id} registered on '{topic}'");

        Subscription {
            registry: Arc::downgrade(&self.inner),
            topic: topic.to_string(),
            id,
        }
    }

    /// Deliver the invalidation signal to every current subscriber of the
    /// topic, sequentially in subscription order. Delivery is at-least-once;
    /// nothing is guaranteed about ordering relative to the publisher's own
    /// subsequent state changes.
    pub async fn publish(&self, topic: &str) {
        let handlers: Vec<Handler> = {
            let registry = self.inner.lock().unwrap();
            registry
                .topics
                .get(topic)
                .map(|subscribers| subscribers.iter().map(|(_, h)| Arc::clone(h)).collect())
                .unwrap_or_default()
        };
        log::debug!("bus: '{topic}' -> {} subscriber(s)", handlers.len());
        for handler in handlers {
            handler().await;
        }
    }
}

/// Registration guard; dropping it removes the callback from the registry.
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    topic: String,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.lock() {
                if let Some(subscribers) = registry.topics.get_mut(&self.topic) {
                    subscribers.retain(|(id, _)| *id != self.id);
                }
            }
        }
    }
}
