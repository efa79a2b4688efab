//! Node storage shared by the linked structures
//!
//! Nodes of the doubly linked ring, the Fibonacci forest and the binary heap
//! live in a [`SlotMap`] and refer to each other through [`NodeRef`] keys.
//! Keys are generational, so a reference to a removed node is detected
//! instead of aliasing whatever reuses its slot.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generation-checked reference to a node stored in an [`Arena`]
    pub struct NodeRef;
}

/// Slab of nodes addressed by [`NodeRef`]
pub type Arena<N> = SlotMap<NodeRef, N>;
