//! List node: an identifier, an opaque payload, and link slots.
//!
//! Nodes live in the list's slab and never own each other. `next`/`prev`
//! are slab keys with [`NIL`] standing in for "no link", so circular
//! topologies cannot form ownership cycles.

/// Sentinel key representing "no link" / "no slot".
///
/// Slab keys are array indices, so `usize::MAX` can never collide with a
/// real node.
pub(crate) const NIL: usize = usize::MAX;

/// A single list element.
///
/// Pure data holder: the list manages all links. Callers may read and
/// rewrite the identifier and payload; link fields are crate-internal.
/// Two nodes with the same id are still distinct entities — identity is
/// by reference, not by value.
///
/// # Example
///
/// ```
/// use mathkit_list::LinkedList;
///
/// let mut list: LinkedList<u64> = LinkedList::new();
/// list.add("alpha", 42);
///
/// let node = list.get_node(0).unwrap();
/// assert_eq!(node.id(), "alpha");
/// assert_eq!(*node.data(), 42);
/// assert!(!node.is_sentinel());
/// ```
#[derive(Debug)]
pub struct Node<T> {
    id: String,
    data: T,
    pub(crate) next: usize,
    pub(crate) prev: usize,
    sentinel: bool,
}

impl<T> Node<T> {
    /// Creates a new unlinked node.
    #[inline]
    pub(crate) fn new(id: &str, data: T, sentinel: bool) -> Self {
        Self {
            id: id.to_owned(),
            data,
            next: NIL,
            prev: NIL,
            sentinel,
        }
    }

    /// Returns the node's identifier.
    ///
    /// Identifiers are assigned by the caller and are not required to be
    /// unique within a list.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replaces the node's identifier.
    #[inline]
    pub fn set_id(&mut self, id: &str) {
        self.id = id.to_owned();
    }

    /// Returns a reference to the payload.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the payload.
    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns `true` if this node is a sentinel.
    ///
    /// A sentinel node, once it becomes the tail, blocks further appends
    /// via [`add`](crate::LinkedList::add).
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.sentinel
    }

    /// Consumes the node, returning its payload.
    #[inline]
    pub(crate) fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_unlinked() {
        let node = Node::new("a", 1u64, false);
        assert_eq!(node.next, NIL);
        assert_eq!(node.prev, NIL);
        assert!(!node.is_sentinel());
    }

    #[test]
    fn id_and_data_are_mutable() {
        let mut node = Node::new("a", 1u64, false);

        node.set_id("b");
        *node.data_mut() = 2;

        assert_eq!(node.id(), "b");
        assert_eq!(*node.data(), 2);
        assert_eq!(node.into_data(), 2);
    }

    #[test]
    fn sentinel_flag() {
        let node = Node::new("end", (), true);
        assert!(node.is_sentinel());
    }
}
