use log::debug;

use crate::data_structures::arena::{Arena, NodeRef};
use crate::data_structures::priority_queue::{
    Comparator, NaturalOrder, NodeHandle, PriorityQueue, QueueId,
};

const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug)]
struct BinaryNode<T> {
    value: T,
    /// Current position in `data`
    pos: usize,
}

/// Array-backed binary min-heap with decrease-key support
///
/// Positions are 1-indexed (`data[0]` is unused) so the parent of `k` is
/// `k / 2` and its children are `2k` and `2k + 1`. Every element keeps its
/// current position, so `decrease_key` can sift up without searching.
///
/// | operation      | cost     |
/// |----------------|----------|
/// | `min`          | O(1)     |
/// | `insert`       | O(log n) |
/// | `extract_min`  | O(log n) |
/// | `decrease_key` | O(log n) |
#[derive(Debug)]
pub struct BinaryHeap<T, C> {
    id: QueueId,
    nodes: Arena<BinaryNode<T>>,
    data: Vec<Option<NodeRef>>,
    size: usize,
    cmp: C,
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn new(cmp: C) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, cmp)
    }

    /// Creates an empty heap with room for `capacity` elements before growing
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        BinaryHeap {
            id: QueueId::next(),
            nodes: Arena::with_capacity_and_key(capacity),
            data: vec![None; capacity + 1],
            size: 0,
            cmp,
        }
    }

    /// Number of elements the heap holds before it has to grow
    pub fn capacity(&self) -> usize {
        self.data.len() - 1
    }

    fn resize(&mut self, to: usize) {
        debug!(
            "growing binary heap storage from {} to {} slots",
            self.data.len(),
            to
        );
        self.data.resize(to, None);
    }

    fn at(&self, pos: usize) -> NodeRef {
        match self.data[pos] {
            Some(node) => node,
            None => panic!("binary heap position {} is empty (size {})", pos, self.size),
        }
    }

    fn more(&self, i: usize, j: usize) -> bool {
        self.cmp
            .greater(&self.nodes[self.at(i)].value, &self.nodes[self.at(j)].value)
    }

    fn exch(&mut self, i: usize, j: usize) {
        let at_i = self.at(i);
        let at_j = self.at(j);
        self.nodes[at_i].pos = j;
        self.nodes[at_j].pos = i;
        self.data.swap(i, j);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.more(k / 2, k) {
            self.exch(k / 2, k);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.size {
            let mut j = 2 * k;
            // ties go to the left child
            if j < self.size && self.more(j, j + 1) {
                j += 1;
            }
            if !self.more(k, j) {
                break;
            }
            self.exch(k, j);
            k = j;
        }
    }

    /// Checks that every parent compares less than or equal to its children
    /// and that every element's cached position is correct
    pub fn is_valid(&self) -> bool {
        (1..=self.size).all(|k| {
            let node = self.at(k);
            let pos_ok = self.nodes[node].pos == k;
            let order_ok = k == 1 || !self.more(k / 2, k);
            pos_ok && order_ok
        })
    }
}

impl<T: Ord> Default for BinaryHeap<T, NaturalOrder> {
    fn default() -> Self {
        BinaryHeap::new(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T> for BinaryHeap<T, C> {
    fn min(&self) -> Option<&T> {
        if self.size == 0 {
            return None;
        }
        self.data[1].map(|node| &self.nodes[node].value)
    }

    fn extract_min(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        let min = self.at(1);
        self.exch(1, self.size);
        self.data[self.size] = None;
        self.size -= 1;
        self.sink(1);

        self.nodes.remove(min).map(|node| node.value)
    }

    fn insert(&mut self, value: T) -> NodeHandle {
        if self.size == self.data.len() - 1 {
            self.resize(2 * self.data.len());
        }
        self.size += 1;
        let node = self.nodes.insert(BinaryNode {
            value,
            pos: self.size,
        });
        self.data[self.size] = Some(node);
        self.swim(self.size);

        NodeHandle::new(self.id, node)
    }

    fn decrease_key(&mut self, handle: &NodeHandle) {
        assert_eq!(
            handle.queue(),
            self.id,
            "decrease_key called with a handle from another queue"
        );
        let pos = match self.nodes.get(handle.node()) {
            Some(node) => node.pos,
            None => panic!("decrease_key called with a stale handle {:?}", handle),
        };
        self.swim(pos);
    }

    fn get(&self, handle: &NodeHandle) -> Option<&T> {
        if handle.queue() != self.id {
            return None;
        }
        self.nodes.get(handle.node()).map(|node| &node.value)
    }

    fn len(&self) -> usize {
        self.size
    }

    fn name(&self) -> &'static str {
        "binary heap"
    }
}
