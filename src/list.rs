use alloc::fmt;
use alloc::vec::Vec;

/// Index of a node inside a [`List`].
///
/// Handles stay valid from the moment a value is added until it is removed,
/// regardless of how often the node is moved. A handle is recycled for a later
/// node once its node has been removed.
pub type NodeId = usize;

/// A node in the doubly linked list.
///
/// Contains a value and the indices of the previous and next entries.
/// This structure is not meant to be used directly by users of the `List`.
pub struct Entry<T> {
    /// The value stored in this entry.
    val: T,
    /// Index of the previous (more recent) entry, `None` at the front.
    prev: Option<NodeId>,
    /// Index of the next (less recent) entry, `None` at the back.
    next: Option<NodeId>,
}

impl<T> Entry<T> {
    /// Creates a new detached entry with the given value.
    fn new(val: T) -> Self {
        Entry {
            val,
            prev: None,
            next: None,
        }
    }
}

/// A doubly linked list stored in an arena of slots.
///
/// Nodes live in a `Vec` and link to each other by index instead of by pointer,
/// so the list needs no `unsafe` and no sentinel allocations. Vacated slots are
/// kept on a free list and reused by the next `add`.
///
/// The front of the list is the most recently added (or moved) node; the back is
/// the oldest.
///
/// # Examples
///
/// ```ignore
/// use sized_lru::list::List;
///
/// let mut list = List::new();
///
/// let node1 = list.add(10);
/// list.add(20);
///
/// list.move_to_front(node1);
/// assert_eq!(list.remove_last(), Some(20));
/// assert_eq!(list.get_value(node1), Some(&10));
/// ```
pub struct List<T> {
    /// Slot storage; `None` marks a vacant slot.
    slots: Vec<Option<Entry<T>>>,
    /// Vacant slot indices available for reuse.
    free: Vec<NodeId>,
    /// Current number of items in the list.
    len: usize,
    /// Index of the first (most recent) node.
    head: Option<NodeId>,
    /// Index of the last (least recent) node.
    tail: Option<NodeId>,
}

impl<T> List<T> {
    /// Creates a new, empty list.
    pub fn new() -> List<T> {
        List {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            head: None,
            tail: None,
        }
    }

    /// Returns the current number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    fn entry(&self, node: NodeId) -> Option<&Entry<T>> {
        self.slots.get(node).and_then(Option::as_ref)
    }

    fn entry_mut(&mut self, node: NodeId) -> Option<&mut Entry<T>> {
        self.slots.get_mut(node).and_then(Option::as_mut)
    }

    /// Unlinks a node from its neighbours without vacating its slot.
    ///
    /// The node must be occupied and linked into this list.
    fn detach(&mut self, node: NodeId) {
        let (prev, next) = match self.entry(node) {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(e) = self.entry_mut(p) {
                    e.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(e) = self.entry_mut(n) {
                    e.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(e) = self.entry_mut(node) {
            e.prev = None;
            e.next = None;
        }
    }

    /// Links a detached, occupied node in at the front of the list.
    fn attach(&mut self, node: NodeId) {
        let old_head = self.head;
        if let Some(e) = self.entry_mut(node) {
            e.prev = None;
            e.next = old_head;
        } else {
            return;
        }
        match old_head {
            Some(h) => {
                if let Some(e) = self.entry_mut(h) {
                    e.prev = Some(node);
                }
            }
            None => self.tail = Some(node),
        }
        self.head = Some(node);
    }

    /// Adds a value to the front of the list and returns its handle.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use sized_lru::list::List;
    ///
    /// let mut list = List::new();
    /// let node1 = list.add(10);
    /// let node2 = list.add(20);
    /// assert_ne!(node1, node2);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn add(&mut self, v: T) -> NodeId {
        let node = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(Entry::new(v));
                slot
            }
            None => {
                self.slots.push(Some(Entry::new(v)));
                self.slots.len() - 1
            }
        };
        self.attach(node);
        self.len += 1;
        node
    }

    /// Moves a node to the front of the list.
    ///
    /// The node keeps its handle; only its links change. Unknown or vacant handles
    /// are ignored.
    pub fn move_to_front(&mut self, node: NodeId) {
        if self.entry(node).is_none() || self.head == Some(node) {
            return;
        }
        self.detach(node);
        self.attach(node);
    }

    /// Removes a node from the list and returns its value.
    ///
    /// Returns `None` if the handle does not refer to an occupied slot.
    pub fn remove(&mut self, node: NodeId) -> Option<T> {
        self.entry(node)?;
        self.detach(node);
        let entry = self.slots.get_mut(node)?.take()?;
        self.free.push(node);
        self.len -= 1;
        Some(entry.val)
    }

    /// Removes the last (least recently added or moved) item from the list.
    pub fn remove_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(tail)
    }

    /// Gets an immutable reference to the value stored in the node.
    pub fn get_value(&self, node: NodeId) -> Option<&T> {
        self.entry(node).map(|e| &e.val)
    }

    /// Gets a mutable reference to the value stored in the node.
    pub fn get_value_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.entry_mut(node).map(|e| &mut e.val)
    }

    /// Clears the list, dropping all values and releasing the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
        self.head = None;
        self.tail = None;
    }

    /// Iterates values from the front (most recent) to the back (least recent).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("length", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}

/// Front-to-back iterator over the values of a [`List`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let entry = self.list.entry(self.next?)?;
        self.next = entry.next;
        self.remaining -= 1;
        Some(&entry.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    fn collect<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_construct_empty() {
        let mut list = List::<u32>::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.remove_last(), None);
    }

    #[test]
    fn test_add_items() {
        let mut list = List::<u32>::new();
        let node1 = list.add(10);
        let node2 = list.add(20);
        assert_eq!(list.len(), 2);
        assert_ne!(node1, node2);
        assert_eq!(collect(&list), vec![20, 10]);

        list.add(30);
        assert_eq!(list.len(), 3);
        assert_eq!(collect(&list), vec![30, 20, 10]);
    }

    #[test]
    fn test_get_value() {
        let mut list = List::<String>::new();
        let node = list.add(String::from("test"));

        assert_eq!(list.get_value(node).unwrap(), "test");

        list.get_value_mut(node).unwrap().push_str("_modified");
        assert_eq!(list.get_value(node).unwrap(), "test_modified");

        *list.get_value_mut(node).unwrap() = String::from("new_value");
        assert_eq!(list.get_value(node).unwrap(), "new_value");

        // Unknown handles are rejected rather than aliased
        assert!(list.get_value(node + 1).is_none());
    }

    #[test]
    fn test_remove_last() {
        let mut list = List::<u32>::new();
        assert!(list.remove_last().is_none());

        list.add(10);
        list.add(20);
        list.add(30);
        assert_eq!(list.len(), 3);

        // Back is the oldest addition
        assert_eq!(list.remove_last(), Some(10));
        assert_eq!(list.remove_last(), Some(20));
        assert_eq!(list.remove_last(), Some(30));
        assert_eq!(list.len(), 0);
        assert_eq!(list.remove_last(), None);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn test_move_to_front() {
        let mut list = List::<u32>::new();
        let node1 = list.add(10);
        let node2 = list.add(20);
        let node3 = list.add(30);
        assert_eq!(collect(&list), vec![30, 20, 10]);

        list.move_to_front(node1);
        assert_eq!(collect(&list), vec![10, 30, 20]);

        // Moving the head is a no-op
        list.move_to_front(node1);
        assert_eq!(collect(&list), vec![10, 30, 20]);

        list.move_to_front(node2);
        assert_eq!(collect(&list), vec![20, 10, 30]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get_value(node3), Some(&30));

        // Handles survive relocation
        assert_eq!(list.get_value(node1), Some(&10));
        assert_eq!(list.get_value(node2), Some(&20));
    }

    #[test]
    fn test_remove_middle_relinks_neighbours() {
        let mut list = List::<u32>::new();
        let _a = list.add(1);
        let b = list.add(2);
        let _c = list.add(3);

        assert_eq!(list.remove(b), Some(2));
        assert_eq!(collect(&list), vec![3, 1]);
        // Second removal of the same handle does nothing
        assert_eq!(list.remove(b), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_vacated_slots_are_reused() {
        let mut list = List::<u32>::new();
        let a = list.add(1);
        let _b = list.add(2);
        list.remove(a);

        let c = list.add(3);
        assert_eq!(c, a);
        assert_eq!(list.slots.len(), 2);
        assert_eq!(collect(&list), vec![3, 2]);
    }

    #[test]
    fn test_clear() {
        let mut list = List::<u32>::new();
        list.add(10);
        list.add(20);
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().count(), 0);

        let node = list.add(30);
        assert_eq!(collect(&list), vec![30]);
        assert_eq!(list.remove_last(), Some(30));
        assert_eq!(list.get_value(node), None);
    }

    #[test]
    fn test_length_consistency_after_complex_operations() {
        let mut list = List::<u32>::new();
        let mut nodes = Vec::new();
        for i in 0..8 {
            nodes.push(list.add(i));
        }

        list.move_to_front(nodes[0]);
        list.move_to_front(nodes[4]);
        list.remove(nodes[2]);
        list.remove_last();
        list.move_to_front(nodes[7]);

        assert_eq!(list.len(), 6);
        assert_eq!(list.iter().len(), 6);
        assert_eq!(collect(&list), vec![7, 4, 0, 6, 5, 3]);
    }

    #[test]
    fn test_list_complex_values() {
        #[derive(Debug, Clone, PartialEq)]
        struct ComplexValue {
            id: u32,
            name: String,
        }

        let mut list = List::new();
        let node = list.add(ComplexValue {
            id: 1,
            name: String::from("first"),
        });
        list.add(ComplexValue {
            id: 2,
            name: String::from("second"),
        });

        list.get_value_mut(node).unwrap().name.push('!');
        let last = list.remove_last().unwrap();
        assert_eq!(last.id, 1);
        assert_eq!(last.name, "first!");
    }
}
