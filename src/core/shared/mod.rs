use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::core::element::Element;
use crate::core::error::QueueError;
use crate::core::log::{LogEntry, Logger, Op, SafeLogger, State};
use crate::core::queue::{Queue, SafeQueue};

/// One registry slot per item type. The OnceLock plus the mutex-guarded
/// check-and-set gives exactly-once construction even when many threads
/// race on first access; no partially-built instance is ever visible
/// because the slot is filled while the registry lock is held.
static REGISTRY: OnceLock<Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>> = OnceLock::new();

/// Handle to the process-wide shared FIFO queue for item type T.
///
/// Every call to `instance()` and every clone of a handle refers to the
/// same underlying container; the handle is cheap to clone, so callers
/// can also pass it down explicitly instead of re-fetching it.
pub struct SharedQueue<T> {
    queue: SafeQueue<T>,
    logger: SafeLogger<T>,
}

impl<T> Clone for SharedQueue<T> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<T: Element + Clone> SharedQueue<T> {
    /// Only `instance` constructs; callers can never hold a second copy
    fn new() -> Self {
        Self {
            queue: Arc::new(Mutex::new(Queue::new())),
            logger: Arc::new(Mutex::new(Logger::new())),
        }
    }

    /// Get the one shared queue for T, creating it on first access
    pub fn instance() -> SharedQueue<T> {
        let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
        let mut slots = registry.lock().unwrap();
        slots
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(SharedQueue::<T>::new()))
            .downcast_ref::<SharedQueue<T>>()
            .expect("registry slot is keyed by its own item type")
            .clone()
    }

    /// Enqueue an item at the tail, with logging
    ///
    /// Rejects a value that represents an absent item; the rejection is
    /// logged as Failed and the container is untouched.
    pub fn enqueue(&self, item: T) -> Result<(), QueueError> {
        if item.is_absent() {
            let mut logger = self.logger.lock().unwrap();
            logger.log(Op::Enqueue, None, State::Failed);
            return Err(QueueError::InvalidArgument);
        }

        let mut queue = self.queue.lock().unwrap();
        queue.enqueue(item.clone());
        drop(queue);

        let mut logger = self.logger.lock().unwrap();
        logger.log(Op::Enqueue, Some(item), State::Committed);
        Ok(())
    }

    /// Dequeue the item at the head, if any
    ///
    /// An empty queue is a normal outcome, not an error; the attempt is
    /// still logged as Delivered with no item.
    pub fn try_dequeue(&self) -> Option<T> {
        let mut queue = self.queue.lock().unwrap();
        let item = queue.dequeue();
        drop(queue);

        let mut logger = self.logger.lock().unwrap();
        logger.log(Op::Dequeue, item.clone(), State::Delivered);
        item
    }

    /// Point-in-time snapshot; may be stale under concurrent mutation
    pub fn is_empty(&self) -> bool {
        let queue = self.queue.lock().unwrap();
        queue.is_empty()
    }

    /// Point-in-time snapshot; same caveat as is_empty
    pub fn count(&self) -> usize {
        let queue = self.queue.lock().unwrap();
        queue.len()
    }

    /// Whether two handles refer to the same underlying container
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.queue, &other.queue)
    }

    /// Expose logs
    pub fn logs(&self) -> Vec<LogEntry<T>> {
        let logger = self.logger.lock().unwrap();
        logger.entries.clone()
    }
}
