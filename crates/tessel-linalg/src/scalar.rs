//! Scalar traits and the per-element comparison predicates.
//!
//! Every element-wise comparison in this crate eventually boils down to one of the predicates
//! defined here, applied to a single pair of scalars.

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0: f32, f64);

/// An exact relation between two scalars.
///
/// Evaluating a relation uses the native [`PartialOrd`]/[`PartialEq`] implementation of the
/// scalar type: integers compare exactly, and floating-point values follow IEEE 754, so no
/// tolerance is ever applied. Every relation involving a NaN is `false`, except for
/// [`Relation::Ne`], which is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `x < y`
    Lt,
    /// `x <= y`
    Le,
    /// `x > y`
    Gt,
    /// `x >= y`
    Ge,
    /// `x == y`
    Eq,
    /// `x != y`
    Ne,
}

impl Relation {
    /// All relations, in declaration order.
    pub const ALL: [Relation; 6] = [
        Relation::Lt,
        Relation::Le,
        Relation::Gt,
        Relation::Ge,
        Relation::Eq,
        Relation::Ne,
    ];

    /// Evaluates the relation for `x` and `y`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessel_linalg::scalar::Relation;
    /// assert!(Relation::Lt.eval(1, 2));
    /// assert!(!Relation::Ge.eval(1.0, f32::NAN));
    /// assert!(Relation::Ne.eval(f32::NAN, f32::NAN));
    /// ```
    #[inline]
    pub fn eval<T: PartialOrd>(self, x: T, y: T) -> bool {
        match self {
            Relation::Lt => x < y,
            Relation::Le => x <= y,
            Relation::Gt => x > y,
            Relation::Ge => x >= y,
            Relation::Eq => x == y,
            Relation::Ne => x != y,
        }
    }

    /// Returns the relation that is `true` exactly when `self` is `false` (for non-NaN operands).
    ///
    /// ```
    /// # use tessel_linalg::scalar::Relation;
    /// assert_eq!(Relation::Lt.complement(), Relation::Ge);
    /// assert_eq!(Relation::Eq.complement(), Relation::Ne);
    /// ```
    pub fn complement(self) -> Self {
        match self {
            Relation::Lt => Relation::Ge,
            Relation::Le => Relation::Gt,
            Relation::Gt => Relation::Le,
            Relation::Ge => Relation::Lt,
            Relation::Eq => Relation::Ne,
            Relation::Ne => Relation::Eq,
        }
    }
}

/// Scalars that can be compared for equality within an absolute tolerance.
///
/// Values that compare equal with `==` are always epsilon-equal, for any tolerance. Beyond that,
/// the meaning of the tolerance depends on the kind of scalar:
///
/// - Floating-point values are epsilon-equal if `|x - y| <= epsilon`. The interval is closed, so
///   `x.epsilon_eq(y, |x - y|)` holds for all finite values. NaN is never epsilon-equal to
///   anything, and equal infinities are epsilon-equal.
/// - Integers are epsilon-equal if `|x - y| < epsilon`, so a tolerance of 1 only accepts equal
///   values and a tolerance of 2 accepts neighbors. The absolute difference is computed in integer
///   arithmetic with [`abs_diff`][u32::abs_diff], which cannot overflow or wrap around.
///
/// The tolerance must not be negative. Negative tolerances are not checked for, and the result
/// of comparing with one is unspecified (but it never panics).
///
/// # Examples
///
/// ```
/// # use tessel_linalg::EpsilonEq;
/// assert!(0.5f32.epsilon_eq(1.0, 0.5));
/// assert!(5u8.epsilon_eq(5, 0));
/// assert!(!5u8.epsilon_eq(6, 1));
/// assert!(5u8.epsilon_eq(6, 2));
/// ```
pub trait EpsilonEq: Copy {
    /// Returns whether `self` and `other` are equal within `epsilon`.
    fn epsilon_eq(self, other: Self, epsilon: Self) -> bool;

    /// Returns whether `self` and `other` are not equal within `epsilon`.
    ///
    /// This is always the negation of [`EpsilonEq::epsilon_eq`].
    #[inline]
    fn epsilon_ne(self, other: Self, epsilon: Self) -> bool {
        !self.epsilon_eq(other, epsilon)
    }
}

macro_rules! unsigned_epsilon_eq {
    ($($types:ty),+) => {
        $(
            impl EpsilonEq for $types {
                #[inline]
                fn epsilon_eq(self, other: Self, epsilon: Self) -> bool {
                    self == other || self.abs_diff(other) < epsilon
                }
            }
        )+
    };
}
unsigned_epsilon_eq!(u8, u16, u32, u64, u128, usize);

macro_rules! signed_epsilon_eq {
    ($($types:ty => $unsigned:ty),+) => {
        $(
            impl EpsilonEq for $types {
                #[inline]
                fn epsilon_eq(self, other: Self, epsilon: Self) -> bool {
                    // `abs_diff` of two signed values always fits the unsigned type.
                    self == other || self.abs_diff(other) < epsilon as $unsigned
                }
            }
        )+
    };
}
signed_epsilon_eq!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize
);

macro_rules! float_epsilon_eq {
    ($($types:ty),+) => {
        $(
            impl EpsilonEq for $types {
                #[inline]
                fn epsilon_eq(self, other: Self, epsilon: Self) -> bool {
                    self == other || (self - other).abs() <= epsilon
                }
            }
        )+
    };
}
float_epsilon_eq!(f32, f64);

/// Floating-point types that can be compared by counting the representable values between them.
///
/// Two values are considered equal if at most `max_ulps` [*units in the last place*] separate
/// them. `NaN` is never considered equal to anything. `-0.0` and `+0.0` are always considered
/// equal, other values with differing signs are never considered equal.
///
/// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
pub trait UlpsEq: Copy {
    /// Returns whether at most `max_ulps` ULPs separate `self` and `other`.
    fn ulps_eq(self, other: Self, max_ulps: u32) -> bool;
}

impl UlpsEq for f32 {
    fn ulps_eq(self, other: Self, max_ulps: u32) -> bool {
        if self.is_sign_negative() != other.is_sign_negative() {
            return self == other; // `-0.0` == `+0.0`
        }

        if self.is_nan() || other.is_nan() {
            return false;
        }

        self.to_bits().abs_diff(other.to_bits()) <= max_ulps
    }
}

impl UlpsEq for f64 {
    fn ulps_eq(self, other: Self, max_ulps: u32) -> bool {
        if self.is_sign_negative() != other.is_sign_negative() {
            return self == other;
        }

        if self.is_nan() || other.is_nan() {
            return false;
        }

        self.to_bits().abs_diff(other.to_bits()) <= u64::from(max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relations() {
        assert!(Relation::Lt.eval(1, 2));
        assert!(!Relation::Lt.eval(2, 2));
        assert!(Relation::Le.eval(2, 2));
        assert!(Relation::Gt.eval(3u8, 2));
        assert!(Relation::Ge.eval(-1.5, -1.5));
        assert!(Relation::Eq.eval(0.0, -0.0));
        assert!(Relation::Ne.eval(1, 2));
    }

    #[test]
    fn nan_relations() {
        for relation in Relation::ALL {
            assert_eq!(
                relation.eval(f32::NAN, 1.0),
                relation == Relation::Ne,
                "{relation:?}"
            );
            assert_eq!(
                relation.eval(f64::NAN, f64::NAN),
                relation == Relation::Ne,
                "{relation:?}"
            );
        }
    }

    #[test]
    fn complement() {
        for relation in Relation::ALL {
            assert_eq!(relation.complement().complement(), relation);
            for (x, y) in [(1, 2), (2, 2), (3, 2)] {
                assert_ne!(relation.eval(x, y), relation.complement().eval(x, y));
            }
        }
    }

    #[test]
    fn epsilon_unsigned() {
        assert!(5u32.epsilon_eq(6, 2));
        assert!(6u32.epsilon_eq(5, 2));
        assert!(!5u32.epsilon_eq(6, 1));
        assert!(!5u32.epsilon_eq(7, 2));
        assert!(!7u32.epsilon_eq(5, 2));
        assert!(0u8.epsilon_eq(254, 255));
        assert!(!0u8.epsilon_eq(255, 255));
        assert!(!u128::MAX.epsilon_eq(0, u128::MAX));
        assert!(7usize.epsilon_eq(7, 0));
        assert!(u64::MAX.epsilon_eq(u64::MAX, 0));
    }

    #[test]
    fn epsilon_signed() {
        assert!(5i32.epsilon_eq(6, 2));
        assert!(!5i32.epsilon_eq(6, 1));
        assert!(!5i32.epsilon_eq(7, 2));
        assert!((-3i32).epsilon_eq(3, 7));
        assert!(!(-3i32).epsilon_eq(3, 6));
        assert!(!i8::MIN.epsilon_eq(i8::MAX, i8::MAX));
        assert!(i64::MIN.epsilon_eq(i64::MIN, 0));
        assert!(i64::MAX.epsilon_eq(i64::MAX - 1, 2));
    }

    #[test]
    fn epsilon_float() {
        assert!(0.0f32.epsilon_eq(1e-7, 2e-7));
        assert!(!0.0f32.epsilon_eq(1e-7, 0.0));
        assert!(1.0f64.epsilon_eq(1.5, 0.5));
        assert!(!1.0f64.epsilon_eq(1.5, 0.4999));
        assert!(0.0f32.epsilon_eq(-0.0, 0.0));
    }

    #[test]
    fn epsilon_float_special() {
        assert!(!f32::NAN.epsilon_eq(f32::NAN, f32::INFINITY));
        assert!(f32::NAN.epsilon_ne(0.0, 1.0));
        assert!(f32::INFINITY.epsilon_eq(f32::INFINITY, 0.0));
        assert!(!f32::INFINITY.epsilon_eq(f32::NEG_INFINITY, f32::MAX));
        assert!(!f64::INFINITY.epsilon_eq(f64::MAX, 1e300));
    }

    #[test]
    fn epsilon_ne_negates() {
        for (x, y, e) in [(0.0, 1.0, 0.5), (0.0, 1.0, 1.0), (2.0, 2.0, 0.0), (f64::NAN, 0.0, 9.0)] {
            assert_ne!(x.epsilon_eq(y, e), x.epsilon_ne(y, e));
        }
    }

    #[test]
    fn ulps() {
        assert!(1.0f32.ulps_eq(1.0 + f32::EPSILON, 1));
        assert!(!1.0f32.ulps_eq(1.0 + f32::EPSILON, 0));
        assert!(0.0f32.ulps_eq(-0.0, 0));
        assert!(!f32::MIN_POSITIVE.ulps_eq(-f32::MIN_POSITIVE, 100));
        assert!(!f32::NAN.ulps_eq(f32::NAN, u32::MAX));
        assert!(f64::MAX.ulps_eq(f64::INFINITY, 1));
        assert!(!f64::MAX.ulps_eq(f64::INFINITY, 0));
    }
}
