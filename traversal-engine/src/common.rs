use float_ord::FloatOrd;
use std::fmt::Debug;
use std::hash::Hash;

/// A vertex identifies a location in a graph. It has no identity beyond equality and is never
/// mutated by the engine.
pub trait Vertex: Clone + Eq + Debug {}

impl<T: Clone + Eq + Debug> Vertex for T {}

/// Numeric quantity used for edge weights, accumulated costs and heuristic estimates.
/// A rank must be totally ordered, have a zero and support an addition which reports overflow.
pub trait Rank: Copy + Ord + Hash + Debug {
    /// The neutral element of the addition
    fn zero() -> Self;

    /// Adds `rhs` to `self`, returning `None` if the result is not representable
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Returns true if the rank is at least zero
    fn is_non_negative(self) -> bool {
        self >= Self::zero()
    }
}

macro_rules! impl_integer_rank {
    ( $( $t:ty ),* ) => {
        $(
            impl Rank for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_integer_rank!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_rank {
    ( $( $t:ty ),* ) => {
        $(
            impl Rank for FloatOrd<$t> {
                #[inline]
                fn zero() -> Self {
                    FloatOrd(0.0)
                }

                /// A non-finite sum of finite operands counts as an overflow.
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let sum = self.0 + rhs.0;
                    if sum.is_finite() || !(self.0.is_finite() && rhs.0.is_finite()) {
                        Some(FloatOrd(sum))
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_float_rank!(f32, f64);

/// Adds `increase` to `base`. Both operands must be non-negative and their sum must be
/// representable by the rank type, otherwise this panics.
pub fn accumulate<R: Rank>(base: R, increase: R) -> R {
    assert!(base.is_non_negative(), "base must be non-negative.");
    assert!(increase.is_non_negative(), "increase must be non-negative.");
    match base.checked_add(increase) {
        Some(sum) => sum,
        None => panic!("Rank is about to overflow: {:?} + {:?}", base, increase),
    }
}
