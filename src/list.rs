//! Linked list over slab-backed nodes with a cached positional cursor.
//!
//! The list owns a `slab::Slab` of nodes and coordinates `usize` keys;
//! `next`/`prev` are keys, never owning pointers, so the circular topology
//! cannot form ownership cycles and `clear` returns every slot to the
//! slab's free pool.
//!
//! # Position Cache
//!
//! [`LinkedList::get_node`] memoizes its last result as a `(key, index)`
//! cursor and picks the cheapest of three anchors on the next lookup:
//! head (forward), the cached node (forward, or backward when doubly
//! linked), or tail (backward, doubly linked only). Repeated or nearby
//! lookups cost O(distance) instead of O(len).
//!
//! The cursor lives in a [`Cell`] so lookups take `&self`. That makes the
//! list `Send` but not `Sync`: concurrent readers would race on the
//! cursor, and the type system rules them out.
//!
//! # Example
//!
//! ```
//! use mathkit_list::{LinkedList, Topology};
//!
//! let mut list: LinkedList<u64> = LinkedList::new();
//! list.add("a", 1);
//! list.add("b", 2);
//! list.add("c", 3);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get_node(1).map(|n| n.id()), Some("b"));
//!
//! list.set_topology(Topology::Double);
//! assert_eq!(list.remove(2), Some(3));
//! assert_eq!(list.tail().map(|n| n.id()), Some("b"));
//! ```

use std::cell::Cell;
use std::fmt;

use slab::Slab;

use crate::node::{Node, NIL};

/// Link structure mode of a [`LinkedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    /// Forward-only chain; `tail.next` is unlinked.
    #[default]
    Single,
    /// Forward and backward chain; every non-head node's `prev` is its
    /// logical predecessor.
    Double,
    /// Forward chain wrapping tail → head.
    Circular,
}

/// Error returned when [`LinkedList::insert`] is given a position past
/// the end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The rejected insertion index.
    pub index: usize,
    /// List size at the time of the call.
    pub size: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insert index {} out of range for list of size {}",
            self.index, self.size
        )
    }
}

impl std::error::Error for OutOfRange {}

/// Cached lookup position: the last node returned by a positional lookup
/// and its index. `key == NIL` means no cached position.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    key: usize,
    index: usize,
}

impl Cursor {
    const NONE: Self = Self {
        key: NIL,
        index: 0,
    };
}

/// A linked list with selectable topology and cached positional lookup.
///
/// Nodes are created only by [`add`](Self::add)/[`insert`](Self::insert)
/// and destroyed only by [`remove`](Self::remove)/[`clear`](Self::clear);
/// callers get `&Node<T>` for inspection and may rewrite a node's id and
/// payload through [`get_node_mut`](Self::get_node_mut), but never touch
/// links.
///
/// # Topology Transitions
///
/// Assigning a topology with [`set_topology`](Self::set_topology) repairs
/// link invariants in one O(len) forward pass:
///
/// | To | Repair |
/// |---|---|
/// | `Single` | `tail.next` unlinked |
/// | `Double` | `tail.next` unlinked, every `prev` recomputed |
/// | `Circular` | `tail.next = head` |
///
/// Switching *away* from `Double` leaves `prev` links stale rather than
/// clearing them; they are unmaintained and must not be relied on until
/// the list is switched back to `Double`.
#[derive(Debug)]
pub struct LinkedList<T> {
    arena: Slab<Node<T>>,
    head: usize,
    tail: usize,
    len: usize,
    topology: Topology,
    cursor: Cell<Cursor>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty singly-linked list.
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Slab::new(),
            head: NIL,
            tail: NIL,
            len: 0,
            topology: Topology::Single,
            cursor: Cell::new(Cursor::NONE),
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// slab reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Slab::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current topology.
    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns a reference to the first node, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.arena.get(self.head)
    }

    /// Returns a reference to the last node, or `None` if empty.
    #[inline]
    pub fn tail(&self) -> Option<&Node<T>> {
        self.arena.get(self.tail)
    }

    /// Switches the list to a new topology, repairing link invariants in
    /// one forward pass. No-op work-wise when the list is empty.
    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;

        if self.head != NIL {
            match topology {
                Topology::Single => {
                    self.arena[self.tail].next = NIL;
                }
                Topology::Circular => {
                    self.arena[self.tail].next = self.head;
                }
                Topology::Double => {
                    // Unlink the wrap first so the walk below terminates
                    // when coming from Circular.
                    self.arena[self.tail].next = NIL;

                    let mut prev = NIL;
                    let mut key = self.head;
                    while key != NIL {
                        self.arena[key].prev = prev;
                        prev = key;
                        key = self.arena[key].next;
                    }
                }
            }
        }

        self.invalidate();
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Appends a node after the current tail.
    ///
    /// Returns `false` without appending when the current tail is a
    /// sentinel — a sentinel tail freezes the list against further
    /// appends. This is intentional, not an error.
    #[inline]
    pub fn add(&mut self, id: &str, data: T) -> bool {
        self.push_node(id, data, false)
    }

    /// Appends a sentinel node after the current tail.
    ///
    /// Once the sentinel is the tail, subsequent [`add`](Self::add) calls
    /// are refused. Returns `false` if the tail is already a sentinel.
    #[inline]
    pub fn add_sentinel(&mut self, id: &str, data: T) -> bool {
        self.push_node(id, data, true)
    }

    fn push_node(&mut self, id: &str, data: T, sentinel: bool) -> bool {
        if self.tail != NIL && self.arena[self.tail].is_sentinel() {
            return false;
        }

        let key = self.arena.insert(Node::new(id, data, sentinel));

        if self.head == NIL {
            self.head = key;
        } else {
            self.arena[self.tail].next = key;
            if self.topology == Topology::Double {
                self.arena[key].prev = self.tail;
            }
        }
        self.tail = key;

        if self.topology == Topology::Circular {
            self.arena[key].next = self.head;
        }

        self.len += 1;
        self.invalidate();
        true
    }

    /// Inserts a new node so it becomes the element at `index`, shifting
    /// subsequent elements back by one.
    ///
    /// `index == 0` on an empty list makes the node the sole head/tail.
    /// On a non-empty list the position must name an existing element.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index` is past the end; a silent
    /// clamp would corrupt the caller's view of the structure.
    pub fn insert(&mut self, index: usize, id: &str, data: T) -> Result<(), OutOfRange> {
        if self.len == 0 {
            if index > 0 {
                return Err(OutOfRange { index, size: 0 });
            }
            self.push_node(id, data, false);
            return Ok(());
        }

        if index >= self.len {
            return Err(OutOfRange {
                index,
                size: self.len,
            });
        }

        let key = self.arena.insert(Node::new(id, data, false));

        if index == 0 {
            let old_head = self.head;
            self.arena[key].next = old_head;
            if self.topology == Topology::Double {
                self.arena[old_head].prev = key;
            }
            self.head = key;
            if self.topology == Topology::Circular {
                self.arena[self.tail].next = key;
            }
        } else {
            // Splice before the current occupant of `index`. Its
            // predecessor is never the tail (index < len), so `next` is a
            // real node even in circular mode.
            let pred = self.key_at(index - 1);
            let curr = self.arena[pred].next;

            self.arena[key].next = curr;
            self.arena[pred].next = key;
            if self.topology == Topology::Double {
                self.arena[key].prev = pred;
                self.arena[curr].prev = key;
            }
        }

        self.len += 1;
        self.invalidate();
        Ok(())
    }

    /// Removes the node at `index`, returning its payload.
    ///
    /// Out-of-range positions are a silent no-op returning `None`,
    /// mirroring [`get_node`](Self::get_node)'s null-for-bad-index
    /// contract.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let key;
        if index == 0 {
            key = self.head;
            if self.len == 1 {
                self.head = NIL;
                self.tail = NIL;
            } else {
                let next = self.arena[key].next;
                self.head = next;
                if self.topology == Topology::Double {
                    self.arena[next].prev = NIL;
                }
                if self.topology == Topology::Circular {
                    self.arena[self.tail].next = next;
                }
            }
        } else {
            let pred = self.key_at(index - 1);
            key = self.arena[pred].next;

            if key == self.tail {
                self.tail = pred;
                self.arena[pred].next = match self.topology {
                    Topology::Circular => self.head,
                    _ => NIL,
                };
            } else {
                let next = self.arena[key].next;
                self.arena[pred].next = next;
                if self.topology == Topology::Double {
                    self.arena[next].prev = pred;
                }
            }
        }

        self.len -= 1;
        self.invalidate();
        Some(self.arena.remove(key).into_data())
    }

    /// Removes all nodes, returning every slot to the slab's free pool.
    /// The topology setting is retained.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
        self.invalidate();
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Returns a reference to the node at `index`, or `None` when out of
    /// range.
    ///
    /// Amortized O(1) under access locality: the lookup walks from
    /// whichever anchor — head, tail, or the previously returned node —
    /// is the fewest link hops away, and re-seeds the cache with the
    /// result. Backward walks (from tail, or from the cached node toward
    /// the front) are only available when the topology is
    /// [`Double`](Topology::Double).
    #[inline]
    pub fn get_node(&self, index: usize) -> Option<&Node<T>> {
        if index >= self.len {
            return None;
        }
        Some(&self.arena[self.key_at(index)])
    }

    /// Returns a mutable reference to the node at `index`, or `None`
    /// when out of range.
    ///
    /// Uses the same cached traversal as [`get_node`](Self::get_node).
    /// Only the node's id and payload are exposed for mutation.
    #[inline]
    pub fn get_node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        if index >= self.len {
            return None;
        }
        let key = self.key_at(index);
        Some(&mut self.arena[key])
    }

    /// Returns the first node whose id equals `id`, scanning forward
    /// from head, or `None` if there is no match.
    ///
    /// O(len); does not consult or update the position cache, which is
    /// position-indexed, not id-indexed.
    pub fn get_node_by_id(&self, id: &str) -> Option<&Node<T>> {
        let mut key = self.head;
        for _ in 0..self.len {
            let node = &self.arena[key];
            if node.id() == id {
                return Some(node);
            }
            key = node.next;
        }
        None
    }

    /// Returns an iterator over nodes in forward logical order.
    ///
    /// The iterator counts down from `len`, so it terminates on circular
    /// lists.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            key: self.head,
            remaining: self.len,
        }
    }

    /// Collects references to all nodes in forward logical order.
    ///
    /// Pure snapshot for inspection and debugging; not a hot-path
    /// operation.
    #[inline]
    pub fn to_vec(&self) -> Vec<&Node<T>> {
        self.iter().collect()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Drops the cached position. Every structural mutation funnels
    /// through here; a stale cursor after a size change would resolve
    /// positions to the wrong node.
    #[inline]
    fn invalidate(&self) {
        self.cursor.set(Cursor::NONE);
    }

    /// Resolves a position to a slab key via the cheapest anchor, then
    /// re-seeds the cursor with the result.
    ///
    /// Caller guarantees `index < self.len`.
    fn key_at(&self, index: usize) -> usize {
        let cached = self.cursor.get();
        if cached.key != NIL && cached.index == index {
            return cached.key;
        }

        // Walk forward from head unless another anchor is closer.
        let mut key = self.head;
        let mut backward = false;
        let mut hops = index;

        if cached.key != NIL && cached.index <= index && index - cached.index < hops {
            key = cached.key;
            hops = index - cached.index;
        }

        if self.topology == Topology::Double {
            if cached.key != NIL && cached.index > index && cached.index - index < hops {
                key = cached.key;
                backward = true;
                hops = cached.index - index;
            }
            let from_tail = self.len - 1 - index;
            if from_tail < hops {
                key = self.tail;
                backward = true;
                hops = from_tail;
            }
        }

        for _ in 0..hops {
            let node = &self.arena[key];
            key = if backward { node.prev } else { node.next };
        }

        self.cursor.set(Cursor { key, index });
        key
    }
}

/// Iterator over list nodes in forward logical order.
///
/// Returned by [`LinkedList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    key: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.arena[self.key];
        self.key = node.next;
        self.remaining -= 1;
        Some(node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a Node<T>;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
