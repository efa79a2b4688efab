//! Fibonacci heap
//!
//! A Fibonacci heap is a forest of heap-ordered trees whose roots form a
//! circular doubly linked list. It gives:
//! - O(1) amortized insert and decrease_key
//! - O(log n) amortized extract_min
//!
//! Insertion only splices a single-node tree into the root list. All the
//! restructuring is deferred to `extract_min`, which consolidates the roots so
//! that no two share a degree. `decrease_key` cuts a node that violates heap
//! order away from its parent; a parent that loses a second child is cut as
//! well (cascading cut), which keeps every degree within ⌊log_φ(n)⌋.
//!
//! Nodes live in an [`Arena`]; parent, child and sibling links are arena
//! references, and both the root list and every children list are
//! [`DLinkedList`] rings over that same arena.

use std::mem;

use log::trace;

use crate::data_structures::arena::{Arena, NodeRef};
use crate::data_structures::dlinked_list::{DLinkedList, Link, Linked};
use crate::data_structures::priority_queue::{
    Comparator, NaturalOrder, NodeHandle, PriorityQueue, QueueId,
};

/// The golden ratio
const PHI: f64 = 1.618_033_988_749_895;

/// Upper bound on the degree of any node in a Fibonacci heap of `n` nodes,
/// ⌊log_φ(n)⌋
pub fn degree_bound(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    ((n as f64).ln() / PHI.ln()).floor() as usize
}

/// Size of the degree table used while consolidating `n` nodes
fn degree_table_size(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    ((n as f64).ln() / PHI.ln()).ceil() as usize + 1
}

#[derive(Debug)]
struct FibNode<T> {
    value: T,
    /// Siblings: the root list for roots, the parent's children otherwise
    link: Link,
    parent: Option<NodeRef>,
    children: DLinkedList,
    /// Lost a child since it last became a child itself
    marked: bool,
}

impl<T> FibNode<T> {
    fn new(value: T) -> Self {
        FibNode {
            value,
            link: Link::new(),
            parent: None,
            children: DLinkedList::new(),
            marked: false,
        }
    }

    fn degree(&self) -> usize {
        self.children.len()
    }
}

impl<T> Linked for FibNode<T> {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}

/// Fibonacci heap ordered by a [`Comparator`]
///
/// # Example
///
/// ```rust
/// use heap_sssp::data_structures::{FibonacciHeap, PriorityQueue};
///
/// let mut heap = FibonacciHeap::default();
/// heap.insert(5);
/// heap.insert(1);
/// heap.insert(3);
/// assert_eq!(heap.extract_min(), Some(1));
/// assert_eq!(heap.min(), Some(&3));
/// ```
#[derive(Debug)]
pub struct FibonacciHeap<T, C> {
    id: QueueId,
    nodes: Arena<FibNode<T>>,
    roots: DLinkedList,
    min: Option<NodeRef>,
    cmp: C,
}

impl<T, C: Comparator<T>> FibonacciHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn new(cmp: C) -> Self {
        FibonacciHeap {
            id: QueueId::next(),
            nodes: Arena::with_key(),
            roots: DLinkedList::new(),
            min: None,
            cmp,
        }
    }

    /// Creates an empty heap with arena room for `capacity` elements
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        FibonacciHeap {
            nodes: Arena::with_capacity_and_key(capacity),
            ..Self::new(cmp)
        }
    }

    fn less(&self, a: NodeRef, b: NodeRef) -> bool {
        self.cmp.less(&self.nodes[a].value, &self.nodes[b].value)
    }

    /// Number of trees in the forest
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Makes `child` (an unlinked root) a child of `parent`
    fn link(&mut self, child: NodeRef, parent: NodeRef) {
        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.marked = false;

        let mut children = mem::take(&mut self.nodes[parent].children);
        children.link_back(&mut self.nodes, child);
        self.nodes[parent].children = children;
    }

    /// Merges roots of equal degree until all root degrees are distinct
    fn consolidate(&mut self) {
        let mut table: Vec<Option<NodeRef>> = vec![None; degree_table_size(self.nodes.len())];
        let roots = self.roots.drain(&mut self.nodes);
        let linked_before = roots.len();

        for root in roots {
            let mut x = root;
            let mut degree = self.nodes[x].degree();

            while let Some(y) = table.get_mut(degree).and_then(Option::take) {
                // y was processed first, so on a tie x becomes the child
                let (parent, child) = if self.less(x, y) { (x, y) } else { (y, x) };
                self.link(child, parent);
                x = parent;
                degree += 1;
            }
            if degree >= table.len() {
                table.resize(degree + 1, None);
            }
            table[degree] = Some(x);
        }

        self.min = None;
        for node in table.into_iter().flatten() {
            self.roots.link_back(&mut self.nodes, node);
            match self.min {
                Some(min) if !self.less(node, min) => {}
                _ => self.min = Some(node),
            }
        }
        trace!(
            "consolidated {} roots into {} ({} nodes)",
            linked_before,
            self.roots.len(),
            self.nodes.len()
        );
    }

    /// Moves `x` from the children of `parent` to the root list
    fn cut(&mut self, x: NodeRef, parent: NodeRef) {
        let mut children = mem::take(&mut self.nodes[parent].children);
        children.unlink(&mut self.nodes, x);
        self.nodes[parent].children = children;

        self.roots.link_back(&mut self.nodes, x);
        let node = &mut self.nodes[x];
        node.parent = None;
        node.marked = false;
    }

    /// Walks up from `y`, cutting marked ancestors and marking the first
    /// unmarked non-root one
    fn cascading_cut(&mut self, mut y: NodeRef) {
        while let Some(parent) = self.nodes[y].parent {
            if self.nodes[y].marked {
                self.cut(y, parent);
                y = parent;
            } else {
                self.nodes[y].marked = true;
                break;
            }
        }
    }

    /// Largest degree of any node in the forest
    pub fn max_degree(&self) -> usize {
        let mut max = 0;
        let mut stack = self.roots.refs(&self.nodes);
        while let Some(node) = stack.pop() {
            let entry = &self.nodes[node];
            max = max.max(entry.degree());
            stack.extend(entry.children.iter(&self.nodes).map(|(child, _)| child));
        }
        max
    }

    /// Checks the structural invariants of the forest: heap order, parent
    /// links, unparented roots, the minimum pointer and the node count
    pub fn is_valid(&self) -> bool {
        let mut seen = 0;
        for (root, entry) in self.roots.iter(&self.nodes) {
            if entry.parent.is_some() {
                return false;
            }
            if let Some(min) = self.min {
                if self.less(root, min) {
                    return false;
                }
            }
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                seen += 1;
                for (child, child_entry) in self.nodes[node].children.iter(&self.nodes) {
                    if child_entry.parent != Some(node) || self.less(child, node) {
                        return false;
                    }
                    stack.push(child);
                }
            }
        }
        let min_is_root = match self.min {
            Some(min) => self.nodes.get(min).map_or(false, |n| n.parent.is_none()),
            None => self.roots.is_empty(),
        };
        min_is_root && seen == self.nodes.len()
    }
}

impl<T: Ord> Default for FibonacciHeap<T, NaturalOrder> {
    fn default() -> Self {
        FibonacciHeap::new(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T> for FibonacciHeap<T, C> {
    fn min(&self) -> Option<&T> {
        self.min.map(|min| &self.nodes[min].value)
    }

    fn extract_min(&mut self) -> Option<T> {
        let min = self.min?;

        let mut children = mem::take(&mut self.nodes[min].children);
        for child in children.refs(&self.nodes) {
            self.nodes[child].parent = None;
        }
        self.roots.append(&mut self.nodes, &mut children);

        let removed = self.roots.remove(&mut self.nodes, min);
        if self.roots.is_empty() {
            self.min = None;
        } else {
            self.min = self.roots.head();
            self.consolidate();
        }
        removed.map(|node| node.value)
    }

    fn insert(&mut self, value: T) -> NodeHandle {
        let node = self.nodes.insert(FibNode::new(value));
        self.roots.link_back(&mut self.nodes, node);
        match self.min {
            Some(min) if !self.less(node, min) => {}
            _ => self.min = Some(node),
        }
        NodeHandle::new(self.id, node)
    }

    fn decrease_key(&mut self, handle: &NodeHandle) {
        assert_eq!(
            handle.queue(),
            self.id,
            "decrease_key called with a handle from another queue"
        );
        let x = handle.node();
        let parent = match self.nodes.get(x) {
            Some(node) => node.parent,
            None => panic!("decrease_key called with a stale handle {:?}", handle),
        };

        if let Some(parent) = parent {
            if self.less(x, parent) {
                self.cut(x, parent);
                self.cascading_cut(parent);
            }
        }
        if let Some(min) = self.min {
            if self.less(x, min) {
                self.min = Some(x);
            }
        }
    }

    fn get(&self, handle: &NodeHandle) -> Option<&T> {
        if handle.queue() != self.id {
            return None;
        }
        self.nodes.get(handle.node()).map(|node| &node.value)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn name(&self) -> &'static str {
        "fibonacci heap"
    }
}
