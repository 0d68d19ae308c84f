use std::fmt;

use log::{info, warn};
use thiserror::Error;

/// element values are plain signed integers
pub type Value = i64;

/// sentinel index marking the end of a chain (both the element chain and the free chain)
const NONE: usize = usize::MAX;

/// returned by [`LinkedList::insert_at`] and the internal position lookup when an index
/// argument violates the valid range. This is a contract error on the caller's side: the
/// list never touches its elements when rejecting an index, so state stays intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for list of length {len}")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// one slot of the arena: the stored value and the arena index of the next element.
///
/// A vacant slot reuses `next` to chain into the free list; its `value` is stale garbage
/// until the slot is handed out again.
#[derive(Debug, Clone)]
struct Element {
    value: Value,
    next: usize,
}

/// A singly linked list of [`Value`]s with arena-backed elements.
///
/// Elements live in a `Vec` and link to each other by index instead of by pointer, so
/// there is no per-node ownership juggling: dropping the list drops the arena in one
/// iterative sweep, never a recursive destructor chain. Slots freed by deletions are
/// kept on an internal free chain and reused by later insertions.
///
/// Front insertion is O(1), indexed and back operations are O(n) traversals from the
/// head, matching a classic pointer-linked list.
///
/// ```
/// use linklist::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_back(10);
/// list.push_back(20);
/// list.push_front(5);
/// assert_eq!(list.to_string(), "[5 -> 10 -> 20] (size=3)");
/// ```
///
/// There is no implicit copy: duplicating a list is an explicit `clone()`, which deep
/// copies every element.
///
/// Two tiers of failure signaling, on purpose:
/// - invalid indices passed to [`insert_at`](LinkedList::insert_at) are contract
///   violations and come back as [`OutOfRange`] errors for the caller to propagate
/// - deleting from an empty list or deleting an absent value is normal control flow and
///   comes back as a `false` return, with a diagnostic on the [`log`] side channel
#[derive(Debug, Clone)]
pub struct LinkedList {
    slots: Vec<Element>,
    head: usize,
    free: usize,
    len: usize,
}

impl LinkedList {
    /// creates an empty list, allocating nothing
    pub fn new() -> LinkedList {
        LinkedList {
            slots: Vec::new(),
            head: NONE,
            free: NONE,
            len: 0,
        }
    }

    /// number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// takes a slot off the free chain, or grows the arena if none is vacant
    fn alloc(&mut self, value: Value, next: usize) -> usize {
        if self.free != NONE {
            let slot = self.free;
            self.free = self.slots[slot].next;
            self.slots[slot] = Element { value, next };
            slot
        } else {
            self.slots.push(Element { value, next });
            self.slots.len() - 1
        }
    }

    /// returns a slot to the free chain for reuse
    fn release(&mut self, slot: usize) {
        self.slots[slot].next = self.free;
        self.free = slot;
    }

    /// arena index of the element at `index`, walking the chain from the head.
    ///
    /// Guards its own bounds even though the public entry points validate first; it is
    /// shared between the insertion and deletion paths and must stay safe to call with
    /// anything.
    fn node_at(&self, index: usize) -> Result<usize, OutOfRange> {
        if index >= self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        let mut curr = self.head;
        for _ in 0..index {
            curr = self.slots[curr].next;
        }
        Ok(curr)
    }

    /// value at `index`, or `None` if the index is past the end
    pub fn get(&self, index: usize) -> Option<Value> {
        self.node_at(index).ok().map(|slot| self.slots[slot].value)
    }

    /// prepends `value`. O(1), never fails.
    pub fn push_front(&mut self, value: Value) {
        self.head = self.alloc(value, self.head);
        self.len += 1;
    }

    /// appends `value` after the current tail, found by traversal. O(n), never fails.
    pub fn push_back(&mut self, value: Value) {
        let slot = self.alloc(value, NONE);
        if self.head == NONE {
            self.head = slot;
        } else {
            let mut tail = self.head;
            while self.slots[tail].next != NONE {
                tail = self.slots[tail].next;
            }
            self.slots[tail].next = slot;
        }
        self.len += 1;
    }

    /// inserts `value` so that it ends up at position `index` in the resulting list.
    ///
    /// `index` may be anything from 0 (same as [`push_front`](LinkedList::push_front))
    /// up to and including the current length (same as
    /// [`push_back`](LinkedList::push_back)). Anything larger is rejected with
    /// [`OutOfRange`] and the list is left untouched.
    pub fn insert_at(&mut self, index: usize, value: Value) -> Result<(), OutOfRange> {
        if index > self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        let prev = self.node_at(index - 1)?;
        let slot = self.alloc(value, self.slots[prev].next);
        self.slots[prev].next = slot;
        self.len += 1;
        Ok(())
    }

    /// removes the element at `index`.
    ///
    /// Returns `false` when the list is empty or `index` is past the end; both are
    /// expected runtime conditions (think draining until empty), reported on the log
    /// side channel rather than raised as errors.
    pub fn delete_at(&mut self, index: usize) -> bool {
        if self.is_empty() {
            warn!("delete_at({index}) on empty list");
            return false;
        }
        if index >= self.len {
            warn!("delete_at({index}) out of range, len is {}", self.len);
            return false;
        }
        if index == 0 {
            let old = self.head;
            self.head = self.slots[old].next;
            self.release(old);
            self.len -= 1;
            return true;
        }
        // bounds were checked above, but the shared lookup still guards on its own
        let prev = match self.node_at(index - 1) {
            Ok(slot) => slot,
            Err(err) => {
                warn!("delete_at: {err}");
                return false;
            }
        };
        let target = self.slots[prev].next;
        self.slots[prev].next = self.slots[target].next;
        self.release(target);
        self.len -= 1;
        true
    }

    /// removes the first element equal to `value`, scanning from the head.
    ///
    /// Returns `false` when the list is empty or no element matches; absence is a
    /// normal outcome, not an error.
    pub fn delete_value(&mut self, value: Value) -> bool {
        if self.is_empty() {
            warn!("delete_value({value}) on empty list");
            return false;
        }
        if self.slots[self.head].value == value {
            let old = self.head;
            self.head = self.slots[old].next;
            self.release(old);
            self.len -= 1;
            return true;
        }
        let mut prev = self.head;
        let mut curr = self.slots[prev].next;
        while curr != NONE {
            if self.slots[curr].value == value {
                self.slots[prev].next = self.slots[curr].next;
                self.release(curr);
                self.len -= 1;
                return true;
            }
            prev = curr;
            curr = self.slots[curr].next;
        }
        info!("delete_value({value}): not found");
        false
    }

    /// iterates over the values in list order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
        }
    }
}

impl Default for LinkedList {
    fn default() -> LinkedList {
        LinkedList::new()
    }
}

/// renders the list as `[5 -> 10 -> 20] (size=3)`, an empty list as `[] (size=0)`
impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut curr = self.head;
        while curr != NONE {
            let element = &self.slots[curr];
            write!(f, "{}", element.value)?;
            if element.next != NONE {
                write!(f, " -> ")?;
            }
            curr = element.next;
        }
        write!(f, "] (size={})", self.len)
    }
}

pub struct Iter<'l> {
    list: &'l LinkedList,
    current: usize,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        if self.current == NONE {
            return None;
        }
        let element = &self.list.slots[self.current];
        self.current = element.next;
        Some(element.value)
    }
}

impl<'l> IntoIterator for &'l LinkedList {
    type Item = Value;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list_of(values: &[Value]) -> LinkedList {
        let mut list = LinkedList::new();
        for &v in values {
            list.push_back(v);
        }
        list
    }

    fn contents(list: &LinkedList) -> Vec<Value> {
        list.iter().collect()
    }

    /// walks the chain by hand and checks it reaches NONE after exactly len() hops
    fn assert_chain_intact(list: &LinkedList) {
        let mut curr = list.head;
        for _ in 0..list.len() {
            assert_ne!(curr, NONE, "chain ended before len() elements");
            curr = list.slots[curr].next;
        }
        assert_eq!(curr, NONE, "chain continues past len() elements");
    }

    #[test]
    fn new_list_is_empty() {
        let list = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.get(0), None);
        assert_chain_intact(&list);
    }

    #[test]
    fn push_front_and_back_keep_order() {
        let mut list = LinkedList::new();
        list.push_back(10);
        list.push_back(20);
        list.push_front(5);
        assert_eq!(contents(&list), vec![5, 10, 20]);
        assert_eq!(list.len(), 3);
        assert_chain_intact(&list);
    }

    #[test]
    fn delete_at_middle() {
        let mut list = list_of(&[5, 10, 20]);
        assert!(list.delete_at(1));
        assert_eq!(contents(&list), vec![5, 20]);
        assert_eq!(list.len(), 2);
        assert_chain_intact(&list);
    }

    #[test]
    fn delete_at_head_and_tail() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.delete_at(0));
        assert_eq!(contents(&list), vec![2, 3]);
        assert!(list.delete_at(1));
        assert_eq!(contents(&list), vec![2]);
        assert_chain_intact(&list);
    }

    #[test]
    fn insert_at_round_trip() {
        let mut list = list_of(&[1, 3]);
        list.insert_at(1, 2).unwrap();
        assert_eq!(list.get(1), Some(2));
        assert_eq!(list.len(), 3);
        assert_eq!(contents(&list), vec![1, 2, 3]);
        assert_chain_intact(&list);
    }

    #[test]
    fn insert_at_boundaries() {
        let mut list = list_of(&[1, 2]);
        // index == len appends, same as push_back
        list.insert_at(2, 3).unwrap();
        assert_eq!(contents(&list), vec![1, 2, 3]);
        // index == len + 1 is a contract violation
        let err = list.insert_at(5, 99).unwrap_err();
        assert_eq!(err, OutOfRange { index: 5, len: 3 });
        assert_eq!(contents(&list), vec![1, 2, 3]);
        assert_chain_intact(&list);
    }

    #[test]
    fn insert_at_zero_on_empty() {
        let mut list = LinkedList::new();
        assert_eq!(list.insert_at(1, 99), Err(OutOfRange { index: 1, len: 0 }));
        list.insert_at(0, 99).unwrap();
        assert_eq!(contents(&list), vec![99]);
    }

    #[test]
    fn delete_value_present_and_absent() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.delete_value(2));
        assert_eq!(contents(&list), vec![1, 3]);
        // absent value: size and sequence stay untouched
        assert!(!list.delete_value(42));
        assert_eq!(contents(&list), vec![1, 3]);
        assert_eq!(list.len(), 2);
        assert_chain_intact(&list);
    }

    #[test]
    fn delete_value_at_head() {
        let mut list = list_of(&[7, 8]);
        assert!(list.delete_value(7));
        assert_eq!(contents(&list), vec![8]);
    }

    #[test]
    fn delete_on_empty_returns_false_without_panicking() {
        let mut list = LinkedList::new();
        assert!(!list.delete_at(0));
        assert!(!list.delete_value(1));
        assert!(list.is_empty());
    }

    #[test]
    fn delete_at_out_of_range_on_nonempty() {
        let mut list = list_of(&[99]);
        assert!(!list.delete_at(5));
        assert_eq!(contents(&list), vec![99]);
    }

    #[test]
    fn drain_until_empty() {
        let mut list = list_of(&[1, 2, 3, 4]);
        while list.delete_at(0) {}
        assert!(list.is_empty());
        assert_eq!(list.head, NONE);
        assert_chain_intact(&list);
    }

    #[test]
    fn display_format() {
        let mut list = LinkedList::new();
        assert_eq!(list.to_string(), "[] (size=0)");
        list.push_back(5);
        list.push_back(20);
        assert_eq!(list.to_string(), "[5 -> 20] (size=2)");
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.delete_at(1));
        list.push_back(4);
        // the vacated slot got recycled instead of growing the arena
        assert_eq!(list.slots.len(), 3);
        assert_eq!(contents(&list), vec![1, 3, 4]);
        assert_chain_intact(&list);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut original = list_of(&[1, 2, 3]);
        let copy = original.clone();
        original.delete_at(0);
        original.push_back(9);
        assert_eq!(contents(&copy), vec![1, 2, 3]);
        assert_eq!(contents(&original), vec![2, 3, 9]);
    }

    #[test]
    fn node_at_guards_its_own_bounds() {
        let list = list_of(&[1]);
        assert_eq!(list.node_at(1), Err(OutOfRange { index: 1, len: 1 }));
        assert!(list.node_at(0).is_ok());
    }

    #[test]
    fn long_list_drops_without_recursion() {
        let mut list = LinkedList::new();
        for v in 0..100_000 {
            list.push_front(v);
        }
        assert_eq!(list.len(), 100_000);
        drop(list); // teardown is just dropping the arena
    }
}
