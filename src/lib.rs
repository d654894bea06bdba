//! Sorted singly-linked queue with external storage.
//!
//! This crate provides a priority queue that keeps its elements fully sorted
//! at all times: insertion places each value at its ordered position in a
//! singly-linked chain, and removal always takes the current minimum from
//! the head. The key insight, shared with slab-style designs: separate
//! storage from structure.
//!
//! # Design Philosophy
//!
//! A classic owned-pointer chain couples the two:
//!
//! ```text
//! Box<Node> -> Box<Node> -> Box<Node>   - one allocation per node,
//!                                         recursive teardown, no stable
//!                                         handles to queued elements
//! ```
//!
//! This crate inverts the model:
//!
//! ```text
//! Storage (slot arena)  - owns the nodes, provides stable keys
//! SortedQueue           - coordinates keys, doesn't own data
//! ```
//!
//! Benefits:
//! - **Stable keys**: every `push` returns a key for O(1) read access
//! - **Iterative teardown**: clearing walks keys; no recursion however long
//!   the chain grows
//! - **Pluggable backends**: growable, fixed-capacity, or `slab::Slab`
//! - **O(1) moves**: transferring a queue moves the arena, not the elements
//!
//! # Quick Start
//!
//! ```
//! use ordq::OwnedSortedQueue;
//!
//! let mut queue: OwnedSortedQueue<i32> = OwnedSortedQueue::new();
//!
//! queue.push(8);
//! queue.push(4);
//! queue.push(3);
//!
//! // Always sorted ascending
//! assert_eq!(queue.to_vec(), vec![3, 4, 8]);
//!
//! // Pop takes the minimum
//! assert_eq!(queue.pop(), Some(3));
//! assert_eq!(queue.pop(), Some(4));
//! assert_eq!(queue.pop(), Some(8));
//! assert_eq!(queue.pop(), None);
//! ```
//!
//! # Ordering Contract
//!
//! Elements only need `T: Ord`. Equal elements keep their insertion order
//! among themselves: a new value is inserted *after* every queued value
//! less than or equal to it, so draining is a stable ascending sort of
//! everything pushed.
//!
//! # Shared Storage
//!
//! [`SortedQueue`] takes its storage as an explicit parameter, so several
//! queues can coordinate keys into one slot pool:
//!
//! ```
//! use ordq::{SortedQueue, VecQueueStorage};
//!
//! let mut storage: VecQueueStorage<u64> = VecQueueStorage::new();
//! let mut high: SortedQueue<u64, VecQueueStorage<u64>> = SortedQueue::new();
//! let mut low: SortedQueue<u64, VecQueueStorage<u64>> = SortedQueue::new();
//!
//! high.push(&mut storage, 3);
//! low.push(&mut storage, 9);
//!
//! assert_eq!(high.peek(&storage), Some(&3));
//! assert_eq!(low.peek(&storage), Some(&9));
//! ```
//!
//! All operations on a queue must use the same storage instance it was built
//! against; this is the caller's responsibility (same discipline as the
//! `slab` crate).
//!
//! # Storage Options
//!
//! | Storage | Capacity | Insertion | Use Case |
//! |---------|----------|-----------|----------|
//! | [`VecStorage`] | Growable | `push`, infallible | Default choice |
//! | [`FixedStorage`] | Fixed (runtime) | `try_push` -> `Result` | Bounded working set |
//! | `slab::Slab` | Growable | `push`, infallible | Existing slab pools (feature `slab`) |
//!
//! # Complexity
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `push` | O(n) worst | O(1) when the value is a new minimum or `>=` the maximum |
//! | `pop` | O(1) | Always the minimum |
//! | `peek` / `back` | O(1) | Head / maintained tail |
//! | `clear` | O(n) | Iterative release |
//! | `to_vec` / `iter` | O(n) | Ascending |
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod key;
pub mod owned;
pub mod queue;
pub mod storage;

pub use key::Key;
pub use owned::{DrainWhile, IntoIter, OwnedSortedQueue};
pub use queue::{FixedQueueStorage, Iter, QueueNode, SortedQueue, VecQueueStorage};
pub use storage::{
    BoundedStorage, FixedStorage, Full, Storage, UnboundedStorage, VecStorage,
};

#[cfg(feature = "slab")]
pub use queue::SlabQueueStorage;
