use std::sync::{Arc, Mutex};

type Observer<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Reactive state container backing one widget: interior state plus an
/// ordered list of render callbacks invoked with a fresh snapshot after
/// every mutation.
///
/// The lock is never held across an await point and observers run outside
/// the registry lock, so a callback may register further observers.
pub struct StateCell<S> {
    state: Mutex<S>,
    observers: Mutex<Vec<Observer<S>>>,
}

impl<S: Clone> StateCell<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: Mutex::new(initial),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> S {
        self.state.lock().unwrap().clone()
    }

    /// Borrow the state for a read-only projection.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.lock().unwrap())
    }

    /// Mutate the state, then notify every observer with the new snapshot.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        let snapshot = {
            let mut state = self.state.lock().unwrap();
            f(&mut state);
            state.clone()
        };
        let observers: Vec<Observer<S>> = self.observers.lock().unwrap().clone();
        for observer in observers {
            observer(&snapshot);
        }
    }

    /// Register a render callback. Observers live as long as the cell.
    pub fn observe(&self, observer: impl Fn(&S) + Send + Sync + 'static) {
        self.observers.lock().unwrap().push(Arc::new(observer));
    }
}
