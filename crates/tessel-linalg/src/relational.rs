//! Element-wise comparison of scalars, vectors, matrices and quaternions.
//!
//! Every function in this module compares two values of the same type component by component and
//! returns a container of the same shape holding one `bool` per component. Comparing two scalars
//! returns a single `bool`, comparing two [`Vector`]s returns a `Vector<bool, N, Q>`, comparing two
//! [`Matrix`]es returns a `Matrix<bool, R, C, Q>`, and comparing two [`Quat`]s returns a
//! `Vector<bool, 4, Q>`.
//!
//! Result component `i` only depends on component `i` of the operands (and of the tolerance, for
//! the approximate comparisons), so the functions can be freely combined with the boolean
//! reductions [`all`] and [`any`] and with [`not`].
//!
//! # Exact comparisons
//!
//! [`less_than`], [`less_than_equal`], [`greater_than`], [`greater_than_equal`], [`equal`] and
//! [`not_equal`] use the [`PartialOrd`] implementation of the element type. No tolerance is
//! applied to floating-point values, and all comparisons involving NaN are `false`, except for
//! [`not_equal`]. These functions are not available for quaternions.
//!
//! ```
//! # use tessel_linalg::*;
//! let a = vec3(1.0, 2.0, 3.0);
//! let b = vec3(3.0, 2.0, 1.0);
//! assert_eq!(less_than(&a, &b), vec3(true, false, false));
//! assert_eq!(greater_than_equal(&a, &b), vec3(false, true, true));
//! assert_eq!(not_equal(&a, &b), vec3(true, false, true));
//! ```
//!
//! # Approximate comparisons
//!
//! [`epsilon_equal`] and [`epsilon_not_equal`] check whether the absolute difference of two
//! components is within a tolerance. The tolerance can either be a single scalar, which is used
//! for every component, or a value of the same type as the operands, which supplies one tolerance
//! per component. Quaternions only accept a scalar tolerance.
//!
//! ```
//! # use tessel_linalg::*;
//! let a = vec2(1.0, 2.0);
//! let b = vec2(1.05, 2.5);
//! assert_eq!(epsilon_equal(&a, &b, 0.1), vec2(true, false));
//! assert_eq!(epsilon_equal(&a, &b, vec2(0.0, 1.0)), vec2(false, true));
//! ```
//!
//! See [`EpsilonEq`] for the exact semantics for integer and floating-point elements.
//!
//! # Storage qualifiers
//!
//! Both operands must use the same [`Qualifier`][crate::Qualifier], and the result uses it too.
//! The qualifier never influences the result of a comparison. Values with different qualifiers
//! can be compared after converting one of them with `requalify`.

use crate::{
    qualifier::Qualifier,
    scalar::{EpsilonEq, Relation, UlpsEq},
    Matrix, Quat, Vector,
};

/// Values that consist of a fixed number of scalar components.
///
/// This is the adapter between the comparison functions and the value categories they operate on:
/// it exposes the components of a value by index and builds a value of the same shape, but with a
/// different element type, from a closure.
///
/// Scalars consist of a single component. [`Vector`]s expose their `N` elements, [`Matrix`]es
/// their `R * C` elements in column-major order, and [`Quat`]s their `i`, `j`, `k` and `w` parts.
pub trait Components {
    /// The scalar type of each component.
    type Elem: Copy;

    /// The type with the same shape (and qualifier) as `Self`, holding elements of type `U`.
    type Shaped<U>;

    /// The number of components.
    const COUNT: usize;

    /// Returns component `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`Components::COUNT`].
    fn component(&self, index: usize) -> Self::Elem;

    /// Creates a value of shape `Self` by invoking `f` with every component index, in order.
    fn from_component_fn<U, F>(f: F) -> Self::Shaped<U>
    where
        F: FnMut(usize) -> U;
}

/// Values that support the exact element-wise comparisons.
///
/// This is implemented for scalars, [`Vector`]s and [`Matrix`]es, but not for [`Quat`]s, since
/// there is no meaningful ordering of quaternions.
pub trait Relational: Components {}

/// Sources of per-component tolerances for comparing values of type `C`.
///
/// A scalar of `C`'s element type is a tolerance source for every `C`: it supplies the same
/// tolerance for every component. Vectors and matrices are also tolerance sources for themselves,
/// supplying one tolerance per component.
pub trait Tolerance<C: Components> {
    /// Returns the tolerance to use for component `index`.
    fn tolerance(&self, index: usize) -> C::Elem;
}

impl<'a, C: Components, E: Tolerance<C> + ?Sized> Tolerance<C> for &'a E {
    #[inline]
    fn tolerance(&self, index: usize) -> C::Elem {
        <E as Tolerance<C>>::tolerance(self, index)
    }
}

macro_rules! scalar_components {
    ($($types:ty),+) => {
        $(
            impl Components for $types {
                type Elem = Self;
                type Shaped<U> = U;
                const COUNT: usize = 1;

                #[inline]
                fn component(&self, _index: usize) -> Self {
                    *self
                }

                #[inline]
                fn from_component_fn<U, F>(mut f: F) -> U
                where
                    F: FnMut(usize) -> U,
                {
                    f(0)
                }
            }

            impl Relational for $types {}
        )+
    };
}
scalar_components!(
    bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

macro_rules! scalar_tolerance {
    ($($types:ty),+) => {
        $(
            impl Tolerance<$types> for $types {
                #[inline]
                fn tolerance(&self, _index: usize) -> $types {
                    *self
                }
            }

            impl<const N: usize, Q: Qualifier> Tolerance<Vector<$types, N, Q>> for $types {
                #[inline]
                fn tolerance(&self, _index: usize) -> $types {
                    *self
                }
            }

            impl<const R: usize, const C: usize, Q: Qualifier> Tolerance<Matrix<$types, R, C, Q>>
                for $types
            {
                #[inline]
                fn tolerance(&self, _index: usize) -> $types {
                    *self
                }
            }

            impl<Q: Qualifier> Tolerance<Quat<$types, Q>> for $types {
                #[inline]
                fn tolerance(&self, _index: usize) -> $types {
                    *self
                }
            }
        )+
    };
}
scalar_tolerance!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<T: Copy, const N: usize, Q: Qualifier> Components for Vector<T, N, Q> {
    type Elem = T;
    type Shaped<U> = Vector<U, N, Q>;
    const COUNT: usize = N;

    #[inline]
    fn component(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn from_component_fn<U, F>(f: F) -> Vector<U, N, Q>
    where
        F: FnMut(usize) -> U,
    {
        Vector::from_fn(f)
    }
}

impl<T: Copy, const N: usize, Q: Qualifier> Relational for Vector<T, N, Q> {}

impl<T: Copy, const N: usize, Q: Qualifier> Tolerance<Vector<T, N, Q>> for Vector<T, N, Q> {
    #[inline]
    fn tolerance(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy, const R: usize, const C: usize, Q: Qualifier> Components for Matrix<T, R, C, Q> {
    type Elem = T;
    type Shaped<U> = Matrix<U, R, C, Q>;
    const COUNT: usize = R * C;

    #[inline]
    fn component(&self, index: usize) -> T {
        self[(index % R, index / R)]
    }

    #[inline]
    fn from_component_fn<U, F>(mut f: F) -> Matrix<U, R, C, Q>
    where
        F: FnMut(usize) -> U,
    {
        // `from_fn` visits elements in column-major order, so indices are passed in order.
        Matrix::from_fn(|row, col| f(col * R + row))
    }
}

impl<T: Copy, const R: usize, const C: usize, Q: Qualifier> Relational for Matrix<T, R, C, Q> {}

impl<T: Copy, const R: usize, const C: usize, Q: Qualifier> Tolerance<Matrix<T, R, C, Q>>
    for Matrix<T, R, C, Q>
{
    #[inline]
    fn tolerance(&self, index: usize) -> T {
        self.component(index)
    }
}

impl<T: Copy, Q: Qualifier> Components for Quat<T, Q> {
    type Elem = T;
    type Shaped<U> = Vector<U, 4, Q>;
    const COUNT: usize = 4;

    #[inline]
    fn component(&self, index: usize) -> T {
        self.as_vec()[index]
    }

    #[inline]
    fn from_component_fn<U, F>(f: F) -> Vector<U, 4, Q>
    where
        F: FnMut(usize) -> U,
    {
        Vector::from_fn(f)
    }
}

/// Evaluates `f` on each pair of corresponding components of `x` and `y`.
#[inline]
fn zip_components<C, U, F>(x: &C, y: &C, mut f: F) -> C::Shaped<U>
where
    C: Components,
    F: FnMut(usize, C::Elem, C::Elem) -> U,
{
    C::from_component_fn(|i| f(i, x.component(i), y.component(i)))
}

/// Compares `x` and `y` component-wise using `relation`.
///
/// This is the function the named comparison functions ([`less_than`], [`equal`], ...) are built
/// on, and is useful when the relation is only known at runtime.
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// # use tessel_linalg::scalar::Relation;
/// let a = vec2(1, 5);
/// let b = vec2(2, 5);
/// assert_eq!(compare(Relation::Le, &a, &b), vec2(true, true));
/// assert_eq!(compare(Relation::Gt, &a, &b), less_than(&b, &a));
/// ```
pub fn compare<C>(relation: Relation, x: &C, y: &C) -> C::Shaped<bool>
where
    C: Relational,
    C::Elem: PartialOrd,
{
    zip_components(x, y, |_, a, b| relation.eval(a, b))
}

/// Returns the component-wise result of `x < y`.
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// assert_eq!(less_than(&vec4(1, 2, 3, 4), &vec4(2, 2, 2, 2)), vec4(true, false, false, false));
/// assert!(less_than(&-1.0f32, &0.0));
/// ```
pub fn less_than<C>(x: &C, y: &C) -> C::Shaped<bool>
where
    C: Relational,
    C::Elem: PartialOrd,
{
    compare(Relation::Lt, x, y)
}

/// Returns the component-wise result of `x <= y`.
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// let x = Mat2::<u8>::from_rows([[1, 2], [3, 4]]);
/// let y = Mat2::<u8>::from_rows([[1, 1], [4, 4]]);
/// assert_eq!(less_than_equal(&x, &y), Matrix::from_rows([[true, false], [true, true]]));
/// ```
pub fn less_than_equal<C>(x: &C, y: &C) -> C::Shaped<bool>
where
    C: Relational,
    C::Elem: PartialOrd,
{
    compare(Relation::Le, x, y)
}

/// Returns the component-wise result of `x > y`.
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// assert_eq!(greater_than(&vec2(3.0, f32::NAN), &vec2(2.0, 0.0)), vec2(true, false));
/// ```
pub fn greater_than<C>(x: &C, y: &C) -> C::Shaped<bool>
where
    C: Relational,
    C::Elem: PartialOrd,
{
    compare(Relation::Gt, x, y)
}

/// Returns the component-wise result of `x >= y`.
pub fn greater_than_equal<C>(x: &C, y: &C) -> C::Shaped<bool>
where
    C: Relational,
    C::Elem: PartialOrd,
{
    compare(Relation::Ge, x, y)
}

/// Returns the component-wise result of `x == y`.
///
/// Floating-point components are compared exactly. Use [`epsilon_equal`] or [`equal_ulps`] to
/// allow for rounding errors.
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// assert_eq!(equal(&vec2(0.1 + 0.2, 0.5), &vec2(0.3, 0.5)), vec2(false, true));
/// ```
pub fn equal<C>(x: &C, y: &C) -> C::Shaped<bool>
where
    C: Relational,
    C::Elem: PartialOrd,
{
    compare(Relation::Eq, x, y)
}

/// Returns the component-wise result of `x != y`.
pub fn not_equal<C>(x: &C, y: &C) -> C::Shaped<bool>
where
    C: Relational,
    C::Elem: PartialOrd,
{
    compare(Relation::Ne, x, y)
}

/// Returns, for each component, whether `x` and `y` are equal within `epsilon`.
///
/// Floating-point components are epsilon-equal if `|x - y| <= epsilon`, integer components if they
/// are equal or `|x - y| < epsilon`. `epsilon` is either a scalar that is used for every
/// component, or (for vectors and matrices) a value of the same type as `x` and `y` holding one
/// tolerance per component. The tolerance must not be negative. See [`EpsilonEq`] for details.
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// let a = vec4(1.0, 2.0, 3.0, 4.0);
/// let b = vec4(1.0, 2.1, 3.0, 4.5);
/// assert_eq!(epsilon_equal(&a, &b, 0.2), vec4(true, true, true, false));
///
/// // Integer comparisons are exact, and never overflow.
/// assert_eq!(epsilon_equal(&vec2(0u8, 255), &vec2(255, 0), 254), vec2(false, false));
/// assert!(!epsilon_equal(&i32::MIN, &i32::MAX, i32::MAX));
///
/// // Quaternions are compared component-wise, too.
/// let q = Quat::<f32>::from_components(0.0, 0.0, 0.0, 1.0);
/// assert!(epsilon_equal(&q, &Quat::IDENTITY, 0.0).all());
/// ```
pub fn epsilon_equal<C, E>(x: &C, y: &C, epsilon: E) -> C::Shaped<bool>
where
    C: Components,
    C::Elem: EpsilonEq,
    E: Tolerance<C>,
{
    zip_components(x, y, |i, a, b| a.epsilon_eq(b, epsilon.tolerance(i)))
}

/// Returns, for each component, whether `x` and `y` are *not* epsilon-equal.
///
/// This is the component-wise negation of [`epsilon_equal`].
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// let a = vec3(5, -5, 0);
/// let b = vec3(6, -7, 0);
/// assert_eq!(epsilon_not_equal(&a, &b, 2), vec3(false, true, false));
/// assert_eq!(epsilon_not_equal(&a, &b, vec3(0, 3, 0)), vec3(true, false, false));
/// ```
pub fn epsilon_not_equal<C, E>(x: &C, y: &C, epsilon: E) -> C::Shaped<bool>
where
    C: Components,
    C::Elem: EpsilonEq,
    E: Tolerance<C>,
{
    zip_components(x, y, |i, a, b| a.epsilon_ne(b, epsilon.tolerance(i)))
}

/// Returns, for each component, whether at most `max_ulps` representable floating-point values
/// separate `x` and `y`.
///
/// Like the epsilon comparisons, this is available for quaternions. See [`UlpsEq`] for details.
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// let a = vec2(1.0f32, 1.0);
/// let b = vec2(1.0 + f32::EPSILON, 1.0 + 4.0 * f32::EPSILON);
/// assert_eq!(equal_ulps(&a, &b, 1), vec2(true, false));
/// ```
pub fn equal_ulps<C>(x: &C, y: &C, max_ulps: u32) -> C::Shaped<bool>
where
    C: Components,
    C::Elem: UlpsEq,
{
    zip_components(x, y, |_, a, b| a.ulps_eq(b, max_ulps))
}

/// Returns, for each component, whether more than `max_ulps` representable floating-point values
/// separate `x` and `y`.
///
/// This is the component-wise negation of [`equal_ulps`].
pub fn not_equal_ulps<C>(x: &C, y: &C, max_ulps: u32) -> C::Shaped<bool>
where
    C: Components,
    C::Elem: UlpsEq,
{
    zip_components(x, y, |_, a, b| !a.ulps_eq(b, max_ulps))
}

/// Returns `true` if every component of `b` is `true`.
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// assert!(all(&equal(&vec3(1, 2, 3), &vec3(1, 2, 3))));
/// assert!(!all(&vec2(true, false)));
/// ```
pub fn all<C: Components<Elem = bool>>(b: &C) -> bool {
    (0..C::COUNT).all(|i| b.component(i))
}

/// Returns `true` if at least one component of `b` is `true`.
pub fn any<C: Components<Elem = bool>>(b: &C) -> bool {
    (0..C::COUNT).any(|i| b.component(i))
}

/// Returns the component-wise logical negation of `b`.
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// let a = vec2(1, 2);
/// let b = vec2(1, 3);
/// assert_eq!(not(&equal(&a, &b)), not_equal(&a, &b));
/// ```
pub fn not<C: Components<Elem = bool>>(b: &C) -> C::Shaped<bool> {
    C::from_component_fn(|i| !b.component(i))
}

#[cfg(test)]
mod tests {
    use crate::{
        vec1, vec2, vec3, vec4, Aligned, BVec, Mat2, Mat2x3, Mat3, Mat4, Mat4x2, Packed, Vec3,
    };

    use super::*;

    #[test]
    fn scalars() {
        assert!(less_than(&1i32, &2));
        assert!(!less_than(&2u64, &2));
        assert!(less_than_equal(&2u64, &2));
        assert!(greater_than(&0.5f32, &-0.5));
        assert!(greater_than_equal(&i8::MIN, &i8::MIN));
        assert!(equal(&true, &true));
        assert!(not_equal(&f64::NAN, &f64::NAN));
        assert!(epsilon_equal(&1.0f64, &1.25, 0.25));
        assert!(epsilon_not_equal(&1.0f64, &1.25, 0.125));
    }

    #[test]
    fn vectors_of_every_size() {
        assert_eq!(less_than(&vec1(1.0), &vec1(2.0)), vec1(true));
        assert_eq!(less_than(&vec2(1, 3), &vec2(2, 2)), vec2(true, false));
        assert_eq!(
            greater_than(&vec3(1u16, 3, 2), &vec3(2, 2, 2)),
            vec3(false, true, false)
        );
        assert_eq!(
            not_equal(&vec4(1i64, 2, 3, 4), &vec4(1, 0, 3, 0)),
            vec4(false, true, false, true)
        );
    }

    #[test]
    fn matrix_component_order() {
        let m = Mat2x3::<i32>::from_rows([[0, 1, 2], [3, 4, 5]]);
        let seen: Vec<i32> = (0..Mat2x3::<i32>::COUNT).map(|i| m.component(i)).collect();
        assert_eq!(seen, [0, 3, 1, 4, 2, 5]);

        let rebuilt = Mat2x3::<i32>::from_component_fn(|i| m.component(i));
        assert_eq!(rebuilt, m);
    }

    #[test]
    fn matrix_comparisons() {
        let a = Mat4x2::<f32>::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]);
        let mut b = a;
        b[(2, 1)] = 6.5;

        let eq = equal(&a, &b);
        assert!(!eq.all());
        assert!(!eq[(2, 1)]);
        assert_eq!(eq.iter().filter(|&&e| e).count(), 7);

        let lt = less_than(&a, &b);
        assert!(lt[(2, 1)]);
        assert_eq!(lt.iter().filter(|&&e| e).count(), 1);

        assert!(epsilon_equal(&a, &b, 0.5).all());
        assert!(epsilon_not_equal(&a, &b, 0.25).any());
    }

    #[test]
    fn square_matrices() {
        assert!(equal(&Mat2::<u8>::IDENTITY, &Mat2::IDENTITY).all());
        assert!(equal(&Mat3::<i16>::IDENTITY, &Mat3::IDENTITY).all());
        assert_eq!(
            not_equal(&Mat4::<f64>::IDENTITY, &Mat4::ZERO),
            Mat4::<f64>::IDENTITY.map(|e| e != 0.0)
        );
    }

    #[test]
    fn per_component_tolerance() {
        let a = vec3(0.0, 0.0, 0.0);
        let b = vec3(0.1, 0.2, 0.3);
        let eps = vec3(0.1, 0.1, 0.5);
        assert_eq!(epsilon_equal(&a, &b, eps), vec3(true, false, true));
        assert_eq!(epsilon_equal(&a, &b, &eps), vec3(true, false, true));
        assert_eq!(epsilon_not_equal(&a, &b, eps), vec3(false, true, false));

        let m = Mat2::<i32>::from_rows([[0, 0], [0, 0]]);
        let n = Mat2::<i32>::from_rows([[1, 2], [3, 4]]);
        let tol = Mat2::<i32>::from_rows([[2, 1], [4, 3]]);
        assert_eq!(
            epsilon_equal(&m, &n, tol),
            Matrix::from_rows([[true, false], [true, false]])
        );
    }

    #[test]
    fn quaternions() {
        let a = Quat::<f32>::from_components(0.0, 0.0, 0.7071, 0.7071);
        let b = Quat::<f32>::from_components(0.0, 0.0, 0.7072, 0.7070);
        assert_eq!(epsilon_equal(&a, &b, 0.001), vec4(true, true, true, true));
        assert_eq!(
            epsilon_not_equal(&a, &b, 0.00001),
            vec4(false, false, true, true)
        );

        let q = Quat::<i32, Aligned>::from_components(1, 2, 3, 4);
        let r = Quat::<i32, Aligned>::from_components(1, 2, 5, 4);
        let result: BVec<4, Aligned> = epsilon_equal(&q, &r, 1);
        assert_eq!(result.requalify::<Packed>(), vec4(true, true, false, true));
    }

    #[test]
    fn compare_matches_named() {
        let a = vec4(1, 2, 3, 4);
        let b = vec4(4, 2, 3, 1);
        assert_eq!(compare(Relation::Lt, &a, &b), less_than(&a, &b));
        assert_eq!(compare(Relation::Le, &a, &b), less_than_equal(&a, &b));
        assert_eq!(compare(Relation::Gt, &a, &b), greater_than(&a, &b));
        assert_eq!(compare(Relation::Ge, &a, &b), greater_than_equal(&a, &b));
        assert_eq!(compare(Relation::Eq, &a, &b), equal(&a, &b));
        assert_eq!(compare(Relation::Ne, &a, &b), not_equal(&a, &b));
    }

    #[test]
    fn ulps() {
        let one = vec2(1.0f64, -1.0);
        let next = vec2(f64::from_bits(1.0f64.to_bits() + 1), -1.0);
        assert_eq!(equal_ulps(&one, &next, 0), vec2(false, true));
        assert_eq!(equal_ulps(&one, &next, 1), vec2(true, true));
        assert_eq!(not_equal_ulps(&one, &next, 0), vec2(true, false));
        assert!(equal_ulps(&0.0f32, &-0.0, 0));
    }

    #[test]
    fn reductions() {
        assert!(all(&true));
        assert!(!any(&false));
        assert!(!not(&true));
        assert!(all(&vec4(true, true, true, true)));
        assert!(!all(&vec4(true, true, false, true)));
        assert!(any(&vec2(false, true)));
        assert_eq!(not(&vec3(true, false, true)), vec3(false, true, false));

        let m = Mat2::<bool>::from_rows([[true, false], [false, false]]);
        assert!(any(&m));
        assert!(!all(&m));
        assert_eq!(not(&m), !m);
    }

    #[test]
    fn qualifier_does_not_matter() {
        let a = vec3(1.0f32, 2.0, 3.0);
        let b = vec3(1.5f32, 2.0, 2.5);
        let aa = a.requalify::<Aligned>();
        let ba = b.requalify::<Aligned>();

        assert_eq!(less_than(&aa, &ba).requalify::<Packed>(), less_than(&a, &b));
        assert_eq!(equal(&aa, &ba).requalify::<Packed>(), equal(&a, &b));
        assert_eq!(
            epsilon_equal(&aa, &ba, 0.5).requalify::<Packed>(),
            epsilon_equal(&a, &b, 0.5)
        );

        let eps: Vec3<f32, Aligned> = Vector::splat(0.25);
        assert_eq!(
            epsilon_equal(&aa, &ba, eps).requalify::<Packed>(),
            vec3(false, true, false)
        );
    }
}
