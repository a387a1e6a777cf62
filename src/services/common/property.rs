use std::fmt::Debug;

use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A reactive value that consumers can read or watch for changes.
///
/// Writers are crate-internal; consumers observe through [`get`](Self::get)
/// or [`watch`](Self::watch). Watchers that have been dropped are simply no
/// longer notified, so a publisher never needs to know whether anyone is
/// still listening.
pub struct Property<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Create a property holding an initial value.
    pub fn new(initial: T) -> Self {
        Self {
            tx: watch::Sender::new(initial),
        }
    }

    /// Replace the value and notify watchers.
    ///
    /// Values equal to the current one are dropped without notification,
    /// so watchers only ever see real transitions.
    pub(crate) fn set(&self, new_value: T)
    where
        T: PartialEq,
    {
        self.tx.send_if_modified(|current| {
            if *current == new_value {
                false
            } else {
                *current = new_value;
                true
            }
        });
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Stream of values: the current one immediately, then every transition.
    pub fn watch(&self) -> impl Stream<Item = T> + Send + 'static {
        WatchStream::new(self.tx.subscribe())
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property").field("value", &self.get()).finish()
    }
}
