use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::data_structures::arena::NodeRef;
use crate::Error;

/// Total order used by a priority queue
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator. Closures may read
/// external state (such as a distance table behind `Cell`s), which is what lets
/// `decrease_key` work without copying keys into the queue.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    fn greater(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Comparator using `T`'s own `Ord` implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

static NEXT_QUEUE_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a single queue instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueId(u64);

impl QueueId {
    pub(crate) fn next() -> Self {
        QueueId(NEXT_QUEUE_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Handle to an element inside a priority queue
///
/// Returned by [`PriorityQueue::insert`] and passed back to
/// [`PriorityQueue::decrease_key`]. A handle is bound to the queue that issued
/// it and becomes stale once its element is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    queue: QueueId,
    node: NodeRef,
}

impl NodeHandle {
    pub(crate) fn new(queue: QueueId, node: NodeRef) -> Self {
        NodeHandle { queue, node }
    }

    pub fn queue(&self) -> QueueId {
        self.queue
    }

    pub(crate) fn node(&self) -> NodeRef {
        self.node
    }
}

/// Min-priority queue with handle-based decrease-key
pub trait PriorityQueue<T> {
    /// Returns the minimum element without removing it
    fn min(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    fn extract_min(&mut self) -> Option<T>;

    /// Inserts an element, returning a handle for later `decrease_key` calls
    fn insert(&mut self, value: T) -> NodeHandle;

    /// Restores heap order after the element behind `handle` decreased
    ///
    /// The element must not have increased under the comparator; if it did the
    /// resulting order is unspecified.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was issued by another queue or its element has already
    /// been extracted.
    fn decrease_key(&mut self, handle: &NodeHandle);

    /// Reads the element behind `handle`, `None` if the handle is foreign or stale
    fn get(&self, handle: &NodeHandle) -> Option<&T>;

    /// Returns true if `handle` still addresses an element of this queue
    fn contains(&self, handle: &NodeHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Number of elements in the queue
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the queue implementation
    fn name(&self) -> &'static str;
}

/// The available priority queue implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueueKind {
    /// Array-backed binary heap
    #[default]
    Binary,
    /// Fibonacci heap
    Fibonacci,
}

impl QueueKind {
    pub const ALL: [QueueKind; 2] = [QueueKind::Binary, QueueKind::Fibonacci];

    pub fn name(&self) -> &'static str {
        match self {
            QueueKind::Binary => "binary heap",
            QueueKind::Fibonacci => "fibonacci heap",
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QueueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(QueueKind::Binary),
            "fibonacci" | "fib" => Ok(QueueKind::Fibonacci),
            other => Err(Error::InvalidConfig(format!("unknown queue kind: {}", other))),
        }
    }
}
