//! Slab-like storage with stable keys.
//!
//! Storage provides insert/remove/get operations where keys remain valid
//! until explicitly removed. Node-based structures use keys instead of
//! pointers, which keeps teardown iterative: releasing storage never walks
//! a recursive ownership chain.
//!
//! Insertion is split across two traits so the structure on top can expose
//! the right API for the backend:
//!
//! ```text
//! Storage<T>           - base: get, get_mut, remove, len
//!     ├── UnboundedStorage<T> - growable, insert -> Key (infallible)
//!     └── BoundedStorage<T>   - fixed capacity, try_insert -> Result
//! ```

use core::mem;

use crate::Key;

/// Slab-like storage with stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// # Implementations
///
/// - [`VecStorage<T>`] - growable, heap allocated (in this crate)
/// - [`FixedStorage<T>`] - fixed capacity, single boxed slice (in this crate)
/// - `slab::Slab<T>` - growable (feature `slab`)
pub trait Storage<T> {
    /// Key type for this storage.
    type Key: Key;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;
}

/// Growable storage whose insertion cannot fail.
pub trait UnboundedStorage<T>: Storage<T> {
    /// Inserts a value, returning its stable key.
    fn insert(&mut self, value: T) -> Self::Key;
}

/// Fixed-capacity storage whose insertion can report exhaustion.
pub trait BoundedStorage<T>: Storage<T> {
    /// Returns the total number of slots.
    fn capacity(&self) -> usize;

    /// Inserts a value, returning its stable key.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if all slots are occupied.
    fn try_insert(&mut self, value: T) -> Result<Self::Key, Full<T>>;
}

/// Error returned when fixed-capacity storage is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "storage is full")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}

/// A storage slot: either a live value or a link in the free list.
#[derive(Debug, Clone)]
enum Slot<T, K> {
    Occupied(T),
    Vacant(K),
}

// =============================================================================
// VecStorage - growable slot arena with an intrusive free list
// =============================================================================

/// Growable storage backed by a `Vec` of slots.
///
/// Removed slots are chained into a free list and reused LIFO by later
/// inserts, so keys stay dense and insertion is O(1) amortized. This is the
/// default backend: insertion never fails (short of allocator exhaustion).
///
/// # Example
///
/// ```
/// use ordq::{Storage, UnboundedStorage, VecStorage};
///
/// let mut storage: VecStorage<u64> = VecStorage::new();
///
/// let key = storage.insert(42);
/// assert_eq!(storage.get(key), Some(&42));
///
/// assert_eq!(storage.remove(key), Some(42));
/// assert_eq!(storage.get(key), None);
/// ```
#[derive(Debug, Clone)]
pub struct VecStorage<T, K: Key = u32> {
    slots: Vec<Slot<T, K>>,
    free_head: K,
    len: usize,
}

impl<T, K: Key> VecStorage<T, K> {
    /// Creates empty storage without allocating.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: K::NONE,
            len: 0,
        }
    }

    /// Creates empty storage with room for `capacity` values before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of values the storage can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all values and resets the free list.
    ///
    /// # Warning
    ///
    /// Any data structure still holding keys into this storage is left with
    /// dangling keys. Clear the structure first, or use an owned wrapper
    /// which does so automatically.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = K::NONE;
        self.len = 0;
    }
}

impl<T, K: Key> Default for VecStorage<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> Storage<T> for VecStorage<T, K> {
    type Key = K;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn remove(&mut self, key: K) -> Option<T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(slot @ Slot::Occupied(_)) => {
                let Slot::Occupied(value) = mem::replace(slot, Slot::Vacant(self.free_head))
                else {
                    return None;
                };
                self.free_head = key;
                self.len -= 1;
                Some(value)
            }
            _ => None,
        }
    }
}

impl<T, K: Key> UnboundedStorage<T> for VecStorage<T, K> {
    #[inline]
    fn insert(&mut self, value: T) -> K {
        self.len += 1;

        if self.free_head.is_some() {
            let key = self.free_head;
            let slot = &mut self.slots[key.as_usize()];
            let Slot::Vacant(next) = mem::replace(slot, Slot::Occupied(value)) else {
                panic!("free list points at occupied slot");
            };
            self.free_head = next;
            return key;
        }

        // MAX is the sentinel; the slot array must stay below it.
        assert!(
            self.slots.len() < K::NONE.as_usize(),
            "key space exhausted"
        );
        let key = K::from_usize(self.slots.len());
        self.slots.push(Slot::Occupied(value));
        key
    }
}

// =============================================================================
// FixedStorage - fixed-capacity slot arena
// =============================================================================

/// Fixed-capacity storage backed by a single boxed slice of slots.
///
/// All slots are allocated up front; insertion reports [`Full`] once every
/// slot is occupied. Use this when the working set is bounded and the one
/// allocation should happen at startup.
///
/// # Example
///
/// ```
/// use ordq::{BoundedStorage, FixedStorage, Storage};
///
/// let mut storage: FixedStorage<u64> = FixedStorage::with_capacity(2);
///
/// storage.try_insert(1).unwrap();
/// storage.try_insert(2).unwrap();
///
/// let err = storage.try_insert(3).unwrap_err();
/// assert_eq!(err.into_inner(), 3);
/// ```
#[derive(Debug)]
pub struct FixedStorage<T, K: Key = u32> {
    slots: Box<[Slot<T, K>]>,
    free_head: K,
    len: usize,
}

impl<T, K: Key> FixedStorage<T, K> {
    /// Creates storage with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` reaches the key type's sentinel value.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity < K::NONE.as_usize(),
            "capacity exceeds key type maximum"
        );

        let mut slots = Vec::with_capacity(capacity);
        for i in 0..capacity {
            slots.push(Slot::Vacant(free_link::<K>(i, capacity)));
        }

        Self {
            slots: slots.into_boxed_slice(),
            free_head: if capacity == 0 {
                K::NONE
            } else {
                K::from_usize(0)
            },
            len: 0,
        }
    }

    /// Returns the total number of slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if all slots are occupied.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Removes all values and rebuilds the free list.
    ///
    /// # Warning
    ///
    /// Any data structure still holding keys into this storage is left with
    /// dangling keys. Clear the structure first, or use an owned wrapper
    /// which does so automatically.
    pub fn clear(&mut self) {
        let capacity = self.slots.len();
        for i in 0..capacity {
            self.slots[i] = Slot::Vacant(free_link::<K>(i, capacity));
        }
        self.free_head = if capacity == 0 {
            K::NONE
        } else {
            K::from_usize(0)
        };
        self.len = 0;
    }
}

/// Initial free-list link for slot `i`: the next slot, or the sentinel at
/// the end.
#[inline]
fn free_link<K: Key>(i: usize, capacity: usize) -> K {
    if i + 1 == capacity {
        K::NONE
    } else {
        K::from_usize(i + 1)
    }
}

impl<T, K: Key> Storage<T> for FixedStorage<T, K> {
    type Key = K;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn remove(&mut self, key: K) -> Option<T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(slot @ Slot::Occupied(_)) => {
                let Slot::Occupied(value) = mem::replace(slot, Slot::Vacant(self.free_head))
                else {
                    return None;
                };
                self.free_head = key;
                self.len -= 1;
                Some(value)
            }
            _ => None,
        }
    }
}

impl<T, K: Key> BoundedStorage<T> for FixedStorage<T, K> {
    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<K, Full<T>> {
        if self.free_head.is_none() {
            return Err(Full(value));
        }

        let key = self.free_head;
        let slot = &mut self.slots[key.as_usize()];
        let Slot::Vacant(next) = mem::replace(slot, Slot::Occupied(value)) else {
            panic!("free list points at occupied slot");
        };
        self.free_head = next;
        self.len += 1;
        Ok(key)
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        self.get(key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.get_mut(key)
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }
}

#[cfg(feature = "slab")]
impl<T> UnboundedStorage<T> for slab::Slab<T> {
    #[inline]
    fn insert(&mut self, value: T) -> usize {
        self.insert(value)
    }
}
