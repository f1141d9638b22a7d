//! Approximate assertions on whole values.
//!
//! [`assert_approx_eq!`][crate::assert_approx_eq] and
//! [`assert_approx_ne!`][crate::assert_approx_ne] reduce the element-wise comparisons of the
//! [`relational`][crate::relational] module to a single verdict: two values match under a
//! [`Criterion`] if *every* component matches.
//!
//! ```
//! # use tessel_linalg::*;
//! let a = vec2(0.1f32 + 0.2, 1.0);
//! let b = vec2(0.3f32, 1.0);
//! assert_approx_eq!(a, b);
//! assert_approx_eq!(a, b, abs = 1e-6);
//! assert_approx_eq!(a, b, ulps = 1);
//! assert_approx_ne!(a, vec2(0.3, 1.001));
//! ```
//!
//! Without an explicit criterion, the values match if either [`Criterion::DEFAULTS`] entry
//! accepts them.

use std::fmt;

use crate::{
    all, epsilon_equal, equal_ulps,
    relational::{Components, Tolerance},
    scalar::{EpsilonEq, UlpsEq},
};

/// Floating-point element types usable with the approximate assertions.
pub trait ApproxElem: EpsilonEq + UlpsEq + fmt::Debug {
    /// Absolute tolerance tried when no criterion is given.
    const DEFAULT_EPSILON: Self;

    /// ULPs tolerance tried when no criterion is given.
    const DEFAULT_ULPS: u32 = 4;
}

impl ApproxElem for f32 {
    const DEFAULT_EPSILON: Self = f32::EPSILON;
}

impl ApproxElem for f64 {
    const DEFAULT_EPSILON: Self = f64::EPSILON;
}

/// A way of deciding whether two values are approximately equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criterion<T> {
    /// Every component pair is [`epsilon_equal`] with this tolerance.
    Abs(T),
    /// Every component pair is [`equal_ulps`] with this many ULPs.
    Ulps(u32),
}

impl<T: ApproxElem> Criterion<T> {
    /// The criteria an assertion tries when none is given.
    pub const DEFAULTS: [Self; 2] = [Self::Abs(T::DEFAULT_EPSILON), Self::Ulps(T::DEFAULT_ULPS)];

    /// Returns whether all components of `left` and `right` match under this criterion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessel_linalg::{*, approx::Criterion};
    /// let q = Quat::<f64>::from_components(0.0, 0.0, 0.6, 0.8);
    /// let r = Quat::<f64>::from_components(0.0, 0.0, 0.6, 0.8 + 1e-12);
    /// assert!(Criterion::Abs(1e-9).holds(&q, &r));
    /// assert!(!Criterion::Ulps(4).holds(&q, &r));
    /// ```
    pub fn holds<C>(self, left: &C, right: &C) -> bool
    where
        C: Components<Elem = T>,
        C::Shaped<bool>: Components<Elem = bool>,
        T: Tolerance<C>,
    {
        match self {
            Criterion::Abs(epsilon) => all(&epsilon_equal(left, right, epsilon)),
            Criterion::Ulps(max_ulps) => all(&equal_ulps(left, right, max_ulps)),
        }
    }
}

/// The outcome an assertion expects.
#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Equal,
    NotEqual,
}

/// Implementation of the assertion macros.
#[doc(hidden)]
#[track_caller]
pub fn check<C>(
    left: &C,
    right: &C,
    criteria: &[Criterion<C::Elem>],
    expect: Expect,
    exprs: [&str; 2],
) where
    C: Components + fmt::Debug,
    C::Elem: ApproxElem + Tolerance<C>,
    C::Shaped<bool>: Components<Elem = bool>,
{
    let matched = criteria.iter().find(|c| c.holds(left, right));
    let failed = match (expect, matched) {
        (Expect::Equal, None) => true,
        (Expect::NotEqual, Some(criterion)) => {
            log::debug!("values matched under {criterion:?}");
            true
        }
        _ => false,
    };
    if !failed {
        return;
    }

    log::debug!("tried criteria: {criteria:?}");
    let op = match expect {
        Expect::Equal => "≈",
        Expect::NotEqual => "≉",
    };
    panic!(
        "assertion failed: `{} {op} {}`\n  left: {left:?}\n right: {right:?}",
        exprs[0], exprs[1],
    );
}

/// Asserts that two values are approximately equal in every component.
///
/// Accepts an optional criterion: `abs = <tolerance>` or `ulps = <count>`. Without one, the
/// [`Criterion::DEFAULTS`][crate::approx::Criterion::DEFAULTS] are tried.
///
/// # Panics
///
/// Panics if no criterion accepts the values.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::approx::check(
            &$left,
            &$right,
            &$crate::approx::Criterion::DEFAULTS,
            $crate::approx::Expect::Equal,
            [stringify!($left), stringify!($right)],
        )
    };
    ($left:expr, $right:expr, abs = $abs:expr $(,)?) => {
        $crate::approx::check(
            &$left,
            &$right,
            &[$crate::approx::Criterion::Abs($abs)],
            $crate::approx::Expect::Equal,
            [stringify!($left), stringify!($right)],
        )
    };
    ($left:expr, $right:expr, ulps = $ulps:expr $(,)?) => {
        $crate::approx::check(
            &$left,
            &$right,
            &[$crate::approx::Criterion::Ulps($ulps)],
            $crate::approx::Expect::Equal,
            [stringify!($left), stringify!($right)],
        )
    };
}

/// Asserts that two values differ in at least one component.
///
/// Takes the same optional criterion as [`assert_approx_eq!`].
///
/// # Panics
///
/// Panics if any tried criterion accepts the values as equal.
#[macro_export]
macro_rules! assert_approx_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::approx::check(
            &$left,
            &$right,
            &$crate::approx::Criterion::DEFAULTS,
            $crate::approx::Expect::NotEqual,
            [stringify!($left), stringify!($right)],
        )
    };
    ($left:expr, $right:expr, abs = $abs:expr $(,)?) => {
        $crate::approx::check(
            &$left,
            &$right,
            &[$crate::approx::Criterion::Abs($abs)],
            $crate::approx::Expect::NotEqual,
            [stringify!($left), stringify!($right)],
        )
    };
    ($left:expr, $right:expr, ulps = $ulps:expr $(,)?) => {
        $crate::approx::check(
            &$left,
            &$right,
            &[$crate::approx::Criterion::Ulps($ulps)],
            $crate::approx::Expect::NotEqual,
            [stringify!($left), stringify!($right)],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Mat2, Quat};

    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn defaults() {
        init();
        assert_approx_eq!(1.0f32, 1.0 + f32::EPSILON);
        assert_approx_eq!(1e6f64, 1e6 + 2e-10);
        assert_approx_eq!(0.0f32, -0.0);
        assert_approx_ne!(1.0f32, 1.001);
        assert_approx_ne!(f64::NAN, f64::NAN);
    }

    #[test]
    fn explicit_criteria() {
        init();
        let a = vec3(1.0f32, 2.0, 3.0);
        let b = vec3(1.01f32, 2.0, 2.99);
        assert_approx_eq!(a, b, abs = 0.02);
        assert_approx_ne!(a, b, abs = 0.001);
        assert_approx_ne!(a, b, ulps = 100);

        let m = Mat2::<f64>::IDENTITY;
        let mut n = m;
        n[(0, 1)] = 1e-300;
        assert_approx_eq!(m, n);
        assert_approx_ne!(m, n, ulps = 4);
    }

    #[test]
    fn criteria_on_quaternions() {
        init();
        let q = Quat::<f32>::from_components(0.0, 0.0, 0.7071068, 0.7071068);
        let r = Quat::<f32>::from_components(0.0, 0.0, 0.70710677, 0.70710677);
        assert!(Criterion::Ulps(1).holds(&q, &r));
        assert!(!Criterion::Abs(0.5).holds(&q, &Quat::IDENTITY));
    }

    #[test]
    #[should_panic(expected = "assertion failed: `a ≈ b`")]
    fn eq_failure() {
        init();
        let a = vec3(0.0f32, 0.0, 0.0);
        let b = vec3(0.0f32, 0.5, 0.0);
        assert_approx_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "assertion failed: `a ≉ b`")]
    fn ne_failure() {
        init();
        let a = 2.0f64;
        let b = 2.0f64 + f64::EPSILON;
        assert_approx_ne!(a, b);
    }
}
