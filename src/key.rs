//! Sentinel-based key trait for storage indices.
//!
//! Links between nodes are plain copyable keys with a reserved sentinel
//! value (e.g. `u32::MAX`) instead of `Option<K>`. This keeps nodes small
//! and makes "no successor" a cheap equality check.

/// A copyable storage key with a sentinel "none" value.
///
/// Implemented for the unsigned integer types; `NONE` is `MAX`, which the
/// storage implementations reserve (capacity never reaches it).
///
/// # Example
///
/// ```
/// use ordq::Key;
///
/// let key: u32 = 5;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// ```
pub trait Key: Copy + Eq {
    /// Sentinel value representing "no key" / null link.
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the key as a `usize`, for slot indexing.
    fn as_usize(self) -> usize;

    /// Creates a key from a slot index.
    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_key_sentinel {
        ($($ty:ty => $name:ident),*) => {
            $(
                #[test]
                fn $name() {
                    assert!(<$ty>::NONE.is_none());
                    assert!(!<$ty>::NONE.is_some());
                    assert!((0 as $ty).is_some());
                    assert!((<$ty>::MAX - 1).is_some());
                }
            )*
        };
    }

    test_key_sentinel!(
        u8 => u8_sentinel,
        u16 => u16_sentinel,
        u32 => u32_sentinel,
        u64 => u64_sentinel,
        usize => usize_sentinel
    );

    #[test]
    fn from_usize_roundtrip() {
        for i in [0usize, 1, 100, 1000, u16::MAX as usize] {
            let key = u32::from_usize(i);
            assert_eq!(key.as_usize(), i);
        }
    }
}
