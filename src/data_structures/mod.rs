pub mod arena;
pub mod binary_heap;
pub mod dlinked_list;
pub mod fibonacci_heap;
pub mod priority_queue;

pub use arena::{Arena, NodeRef};
pub use binary_heap::BinaryHeap;
pub use dlinked_list::{DLinkedList, Link, Linked, ListNode};
pub use fibonacci_heap::FibonacciHeap;
pub use priority_queue::{Comparator, NaturalOrder, NodeHandle, PriorityQueue, QueueId, QueueKind};
