//! A singly linked list of integers with arena-backed storage.
//!
//! [`LinkedList`] keeps its elements in an index-linked arena instead of a chain of
//! heap pointers. The public surface is the classic linked list operation set:
//! `push_front` / `push_back`, bounds-checked `insert_at`, `delete_at` and
//! `delete_value`, plus iteration and a `Display` rendering of the whole list.
//!
//! ```
//! use linklist::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(1);
//! list.push_back(3);
//! list.insert_at(1, 2).unwrap();
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

pub mod data_structures;

pub use data_structures::linked_list::{Iter, LinkedList, OutOfRange, Value};
