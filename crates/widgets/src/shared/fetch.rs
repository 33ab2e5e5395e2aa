use std::sync::Arc;

use futures::future::BoxFuture;

/// A stored query descriptor: the remote operation together with its captured
/// parameters, replayable any number of times.
///
/// Widgets build one when the record context changes and keep it so later
/// continuations (a bus message, a mutation's success path) can reissue the
/// fetch without re-specifying parameters.
pub struct QueryHandle<O> {
    run: Arc<dyn Fn() -> BoxFuture<'static, O> + Send + Sync>,
}

impl<O> Clone for QueryHandle<O> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<O> QueryHandle<O> {
    pub fn new(run: impl Fn() -> BoxFuture<'static, O> + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(run) }
    }

    /// Replay the stored query and return its fresh output.
    pub async fn refresh(&self) -> O {
        (self.run)().await
    }
}
