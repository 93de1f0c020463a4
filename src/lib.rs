//! General-purpose linked list with selectable topology and cached
//! positional lookup.
//!
//! This crate provides an ordered container for embedding in larger
//! toolkits: a list of id-tagged, opaque payloads that can be linked
//! singly, doubly, or circularly, switchable at runtime.
//!
//! # Design
//!
//! Nodes live in a `slab::Slab` owned by the list; `next`/`prev` are
//! slab keys, not owning pointers:
//!
//! ```text
//! Slab<Node<T>>   - owns node data, recycles slots on removal
//! LinkedList<T>   - coordinates keys: head, tail, topology, cursor
//! ```
//!
//! Benefits:
//! - **No ownership cycles**: circular topology is just a key wrap,
//!   so `clear` and `Drop` free everything
//! - **Slot reuse**: removed nodes return to the slab's free pool
//! - **Cheap repeated lookup**: positional access is memoized by a
//!   `(node, index)` cursor and walks from the nearest anchor
//!
//! # Quick Start
//!
//! ```
//! use mathkit_list::{LinkedList, Topology};
//!
//! let mut list: LinkedList<f64> = LinkedList::new();
//! list.add("a", 1.0);
//! list.add("b", 2.0);
//! list.add("c", 3.0);
//!
//! // Positional lookup, O(1) amortized under locality
//! assert_eq!(list.get_node(1).map(|n| n.id()), Some("b"));
//!
//! // Lookup by (non-unique) id, first match wins
//! assert_eq!(list.get_node_by_id("c").map(|n| *n.data()), Some(3.0));
//!
//! // Switch topology at runtime; links are repaired in one pass
//! list.set_topology(Topology::Double);
//! list.set_topology(Topology::Circular);
//!
//! assert_eq!(list.iter().count(), 3);
//! ```
//!
//! # Topologies
//!
//! | Topology | Links | Backward traversal |
//! |----------|-------|--------------------|
//! | [`Topology::Single`] | forward chain | no |
//! | [`Topology::Double`] | forward + backward | yes (tail and cache anchors) |
//! | [`Topology::Circular`] | forward chain, tail wraps to head | no |
//!
//! # Sentinel Nodes
//!
//! A node appended with [`LinkedList::add_sentinel`] freezes the list
//! once it becomes the tail: further [`LinkedList::add`] calls are
//! refused (returning `false`, not an error). Positional insertion and
//! removal are unaffected.
//!
//! # Concurrency
//!
//! Single-threaded by design. Lookups update the internal position
//! cursor through a `Cell`, so `LinkedList<T>` is `Send` but not
//! `Sync`; wrap the whole list in a mutex if it must be shared.

#![warn(missing_docs)]

pub mod list;
pub mod node;

pub use list::{Iter, LinkedList, OutOfRange, Topology};
pub use node::Node;
