//! Circular doubly linked list over arena-allocated nodes
//!
//! The list itself is only a header (`head`, `len`). Nodes live in an [`Arena`]
//! and carry an intrusive [`Link`], so a node can be moved from one list to
//! another sharing the same arena without reallocating, and two lists can be
//! spliced together in constant time.
//!
//! | operation                   | cost |
//! |-----------------------------|------|
//! | `push_back` / `push_front`  | O(1) |
//! | `delete` / `unlink`         | O(1) |
//! | `append`                    | O(1) |
//! | `iter`                      | O(n) |

use std::mem;

use crate::data_structures::arena::{Arena, NodeRef};

/// Intrusive ring link
///
/// Both neighbours are `None` while the node is not part of any list. A node
/// that is the only element of its list points to itself in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Link {
    prev: Option<NodeRef>,
    next: Option<NodeRef>,
}

impl Link {
    pub const fn new() -> Self {
        Link {
            prev: None,
            next: None,
        }
    }

    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }

    pub fn next(&self) -> Option<NodeRef> {
        self.next
    }
}

/// Arena nodes that embed a [`Link`]
pub trait Linked {
    fn link(&self) -> &Link;
    fn link_mut(&mut self) -> &mut Link;
}

/// Plain list element wrapping a value
#[derive(Debug)]
pub struct ListNode<T> {
    link: Link,
    value: T,
}

impl<T> ListNode<T> {
    pub fn new(value: T) -> Self {
        ListNode {
            link: Link::new(),
            value,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Linked for ListNode<T> {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}

/// Header of a circular doubly linked list
///
/// All methods take the arena holding the nodes. Handing a list an arena other
/// than the one its nodes were allocated in, or deleting a live node through a
/// list it does not belong to, corrupts both lists; neither is checked.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DLinkedList {
    head: Option<NodeRef>,
    len: usize,
}

fn neighbours<N: Linked>(arena: &Arena<N>, node: NodeRef) -> (NodeRef, NodeRef) {
    let link = arena[node].link();
    match (link.prev, link.next) {
        (Some(prev), Some(next)) => (prev, next),
        _ => panic!("node {:?} is not linked into a list", node),
    }
}

impl DLinkedList {
    /// Creates an empty list
    pub fn new() -> Self {
        DLinkedList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// First element of the list
    pub fn head(&self) -> Option<NodeRef> {
        self.head
    }

    /// Last element of the list
    pub fn tail<N: Linked>(&self, arena: &Arena<N>) -> Option<NodeRef> {
        self.head.map(|head| neighbours(arena, head).0)
    }

    /// Links an already allocated, currently unlinked node at the end
    pub fn link_back<N: Linked>(&mut self, arena: &mut Arena<N>, node: NodeRef) {
        debug_assert!(!arena[node].link().is_linked(), "node is already in a list");
        match self.head {
            None => {
                *arena[node].link_mut() = Link {
                    prev: Some(node),
                    next: Some(node),
                };
                self.head = Some(node);
            }
            Some(head) => {
                let (tail, _) = neighbours(arena, head);
                *arena[node].link_mut() = Link {
                    prev: Some(tail),
                    next: Some(head),
                };
                arena[tail].link_mut().next = Some(node);
                arena[head].link_mut().prev = Some(node);
            }
        }
        self.len += 1;
    }

    /// Links an already allocated, currently unlinked node at the front
    pub fn link_front<N: Linked>(&mut self, arena: &mut Arena<N>, node: NodeRef) {
        self.link_back(arena, node);
        self.head = Some(node);
    }

    /// Detaches `node` from the list without freeing it
    ///
    /// `node` must currently be a member of this list.
    pub fn unlink<N: Linked>(&mut self, arena: &mut Arena<N>, node: NodeRef) {
        let (prev, next) = neighbours(arena, node);
        if next == node {
            self.head = None;
        } else {
            arena[prev].link_mut().next = Some(next);
            arena[next].link_mut().prev = Some(prev);
            if self.head == Some(node) {
                self.head = Some(next);
            }
        }
        *arena[node].link_mut() = Link::new();
        self.len -= 1;
    }

    /// Unlinks and frees `node`, returning it
    ///
    /// Returns `None` for a reference whose node was already freed.
    pub fn remove<N: Linked>(&mut self, arena: &mut Arena<N>, node: NodeRef) -> Option<N> {
        if !arena.contains_key(node) {
            return None;
        }
        self.unlink(arena, node);
        arena.remove(node)
    }

    /// Allocates `value` and links it at the end
    pub fn push_back<T>(&mut self, arena: &mut Arena<ListNode<T>>, value: T) -> NodeRef {
        let node = arena.insert(ListNode::new(value));
        self.link_back(arena, node);
        node
    }

    /// Allocates `value` and links it at the front
    pub fn push_front<T>(&mut self, arena: &mut Arena<ListNode<T>>, value: T) -> NodeRef {
        let node = arena.insert(ListNode::new(value));
        self.link_front(arena, node);
        node
    }

    /// Removes the element behind `node` and returns its value
    pub fn delete<T>(&mut self, arena: &mut Arena<ListNode<T>>, node: NodeRef) -> Option<T> {
        self.remove(arena, node).map(ListNode::into_value)
    }

    /// Splices all of `other` onto the end of this list
    ///
    /// `other` is left empty. Both lists must share `arena`.
    pub fn append<N: Linked>(&mut self, arena: &mut Arena<N>, other: &mut DLinkedList) {
        let Some(other_head) = other.head.take() else {
            return;
        };
        let other_len = mem::take(&mut other.len);

        match self.head {
            None => {
                self.head = Some(other_head);
                self.len = other_len;
            }
            Some(head) => {
                let (last, _) = neighbours(arena, head);
                let (other_last, _) = neighbours(arena, other_head);

                arena[last].link_mut().next = Some(other_head);
                arena[other_head].link_mut().prev = Some(last);
                arena[other_last].link_mut().next = Some(head);
                arena[head].link_mut().prev = Some(other_last);
                self.len += other_len;
            }
        }
    }

    /// Detaches every node, leaving them allocated, and returns them in list order
    pub fn drain<N: Linked>(&mut self, arena: &mut Arena<N>) -> Vec<NodeRef> {
        let nodes = self.refs(arena);
        for &node in &nodes {
            *arena[node].link_mut() = Link::new();
        }
        self.head = None;
        self.len = 0;
        nodes
    }

    /// Iterates from head to tail, yielding each node reference and node
    pub fn iter<'a, N: Linked>(&self, arena: &'a Arena<N>) -> Iter<'a, N> {
        Iter {
            arena,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Iterates over the values of a list of [`ListNode`]s
    pub fn values<'a, T>(&self, arena: &'a Arena<ListNode<T>>) -> impl Iterator<Item = &'a T> + 'a {
        self.iter(arena).map(|(_, node)| node.value())
    }

    /// Collects the node references in list order
    pub fn refs<N: Linked>(&self, arena: &Arena<N>) -> Vec<NodeRef> {
        self.iter(arena).map(|(node, _)| node).collect()
    }
}

/// Iterator over a [`DLinkedList`]
pub struct Iter<'a, N> {
    arena: &'a Arena<N>,
    current: Option<NodeRef>,
    remaining: usize,
}

impl<'a, N: Linked> Iterator for Iter<'a, N> {
    type Item = (NodeRef, &'a N);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.current?;
        let entry = &self.arena[node];
        self.remaining -= 1;
        self.current = entry.link().next();
        Some((node, entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, N: Linked> ExactSizeIterator for Iter<'a, N> {}
