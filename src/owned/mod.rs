//! Convenience wrapper that owns its storage.
//!
//! [`OwnedSortedQueue`] combines a [`SortedQueue`](crate::SortedQueue) with
//! a growable [`VecStorage`](crate::VecStorage), providing a simpler API for
//! the common case of a single queue that does not share storage with
//! anything else.
//!
//! # When to use the owned variant
//!
//! - You have one queue, not several structures sharing a storage pool
//! - You want `push`/`pop` without passing `&mut storage` to every call
//! - You want the std container conveniences (`Clone`, `FromIterator`,
//!   `IntoIterator`, `Debug`)
//!
//! # When to use the raw variant
//!
//! Use [`SortedQueue`](crate::SortedQueue) with external storage when
//! multiple structures share one slot pool or you need to pick the storage
//! backend (fixed capacity, `slab::Slab`).
//!
//! # Example
//!
//! ```
//! use ordq::OwnedSortedQueue;
//!
//! let mut queue: OwnedSortedQueue<i32> = OwnedSortedQueue::new();
//! queue.push(8);
//! queue.push(4);
//! queue.push(3);
//!
//! assert_eq!(queue.pop(), Some(3)); // min first
//! assert_eq!(queue.to_vec(), vec![4, 8]);
//! ```

mod queue;

pub use queue::{DrainWhile, IntoIter, OwnedSortedQueue};
