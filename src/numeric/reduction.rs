// ============================================================================
// Digit Reduction
// Theosophical reduction with optional master-number stops
// ============================================================================

use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Master numbers preserved by [`ReductionPolicy::Master`].
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Intermediate values that mark a karmic debt.
pub const KARMIC_DEBTS: [u32; 4] = [13, 14, 16, 19];

/// The canonical vibration table, grouped by root digit.
pub const VIBRATIONS: [u8; 14] = [1, 2, 11, 20, 3, 4, 13, 22, 5, 6, 33, 7, 8, 9];

/// A `u32` collapses to a single digit in at most four digit sums.
const MAX_CHAIN: usize = 8;

/// How far a number is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReductionPolicy {
    /// Reduce all the way down to 0..=9
    #[default]
    Plain,
    /// Stop early on 11, 22 or 33
    Master,
}

/// Full chain of a reduction, starting value first and final value last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    chain: ArrayVec<u32, MAX_CHAIN>,
}

impl Reduction {
    /// The reduced value.
    #[inline]
    pub fn value(&self) -> u32 {
        // The chain always holds at least the starting value.
        self.chain.last().copied().unwrap_or_default()
    }

    /// The unreduced starting value.
    #[inline]
    pub fn start(&self) -> u32 {
        self.chain.first().copied().unwrap_or_default()
    }

    /// Every value visited, in order.
    pub fn chain(&self) -> &[u32] {
        &self.chain
    }

    /// Karmic debt numbers met along the way.
    pub fn karmic_debts(&self) -> impl Iterator<Item = u32> + '_ {
        self.chain.iter().copied().filter(|v| is_karmic_debt(*v))
    }
}

/// Sum of the decimal digits of `n`.
#[inline]
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

#[inline]
pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

#[inline]
pub fn is_karmic_debt(n: u32) -> bool {
    KARMIC_DEBTS.contains(&n)
}

/// Reduce `n` and keep every intermediate value.
pub fn reduce_trace(n: u32, policy: ReductionPolicy) -> Reduction {
    let mut chain = ArrayVec::new();
    let mut current = n;
    chain.push(current);

    while current > 9 && !(policy == ReductionPolicy::Master && is_master(current)) {
        current = digit_sum(current);
        chain.push(current);
    }

    Reduction { chain }
}

/// Reduce `n` to a single digit, or to a master number when allowed.
#[inline]
pub fn reduce(n: u32, policy: ReductionPolicy) -> u32 {
    reduce_trace(n, policy).value()
}

/// Single-digit root; master numbers collapse too (11 -> 2).
#[inline]
pub fn root(n: u32) -> u32 {
    reduce(n, ReductionPolicy::Plain)
}

/// Root digit a vibration belongs to (20 -> 2, 13 -> 4, 33 -> 6).
#[inline]
pub fn vibration_root(vibration: u8) -> u8 {
    root(u32::from(vibration)) as u8
}
