/// The Spritz permutation state and its primitives.
pub mod spritz;

pub use spritz::SpritzState;

use core::fmt::Debug;
use zeroize::Zeroize;

/// Canonical size of the Spritz permutation.
pub const N: usize = 256;

/// Entries of the permutation array.
///
/// A unit must be wide enough to hold every index `0..n` of the state it lives in,
/// independently of the byte-oriented input and output of the wrappers.
pub trait Unit: Copy + Default + Ord + Debug + Zeroize {
    /// The largest state size whose indices fit in this unit.
    const MAX_STATE: usize;

    /// Widens the unit to an array index.
    fn to_index(self) -> usize;

    /// Narrows an index, which must be smaller than [`Unit::MAX_STATE`].
    fn from_index(index: usize) -> Self;
}

impl Unit for u8 {
    const MAX_STATE: usize = 1 << 8;

    #[inline(always)]
    fn to_index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::MAX_STATE);
        index as u8
    }
}

impl Unit for u16 {
    const MAX_STATE: usize = 1 << 16;

    #[inline(always)]
    fn to_index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::MAX_STATE);
        index as u16
    }
}
