use std::{array, fmt};

use crate::{
    error::DimensionMismatch,
    qualifier::{Packed, Qualifier},
    One, Zero,
};

mod ops;
mod view;

pub type Vec1<T, Q = Packed> = Vector<T, 1, Q>;
pub type Vec2<T, Q = Packed> = Vector<T, 2, Q>;
pub type Vec3<T, Q = Packed> = Vector<T, 3, Q>;
pub type Vec4<T, Q = Packed> = Vector<T, 4, Q>;
pub type Vec1f = Vec1<f32>;
pub type Vec2f = Vec2<f32>;
pub type Vec3f = Vec3<f32>;
pub type Vec4f = Vec4<f32>;

/// A boolean vector, the result type of comparing two [`Vector`]s.
pub type BVec<const N: usize, Q = Packed> = Vector<bool, N, Q>;

/// A column vector of `N` elements of type `T`.
///
/// The [`Qualifier`] `Q` selects the memory layout. It defaults to [`Packed`], which makes the
/// vector exactly as large as `[T; N]`.
///
/// Vectors are created with [`vec1`] through [`vec4`], from arrays via [`Vector::from_array`] or
/// [`From`], from slices via [`TryFrom`], or with [`Vector::splat`] and [`Vector::from_fn`].
///
/// Elements are accessed by index (`v[0]`) or, for up to 4 elements, by name: `x y z w`, the
/// color aliases `r g b a`, and `w h` for 2-element vectors.
///
/// [`PartialEq`] compares whole vectors. The functions in [`relational`][crate::relational]
/// compare them component by component and return a [`BVec`].
///
/// ```
/// # use tessel_linalg::*;
/// let mut v = vec3(1, 2, 3);
/// v.z = 30;
/// assert_eq!(v[2], 30);
/// assert_eq!(v.b, 30);
/// assert_eq!(less_than(&v, &vec3(2, 2, 2)), vec3(true, false, false));
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(C)]
pub struct Vector<T, const N: usize, Q: Qualifier = Packed> {
    elems: [T; N],
    _align: Q::Align,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize, Q: Qualifier> bytemuck::Zeroable
    for Vector<T, N, Q>
{
}
// `Aligned` vectors can contain trailing padding.
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N, Packed> {}

impl<T: Zero + Copy, const N: usize, Q: Qualifier> Vector<T, N, Q> {
    /// The all-zero vector.
    pub const ZERO: Self = Self::from_array([T::ZERO; N]);
}

macro_rules! unit_vectors {
    ($n:literal: $($name:ident = [$($e:ident),+]),+) => {
        impl<T: Zero + One, Q: Qualifier> Vector<T, $n, Q> {
            $(
                #[doc = concat!("The unit vector along the ", stringify!($name), " axis.")]
                pub const $name: Self = Self::from_array([$(T::$e),+]);
            )+
        }
    };
}
unit_vectors!(1: X = [ONE]);
unit_vectors!(2: X = [ONE, ZERO], Y = [ZERO, ONE]);
unit_vectors!(3: X = [ONE, ZERO, ZERO], Y = [ZERO, ONE, ZERO], Z = [ZERO, ZERO, ONE]);
unit_vectors!(4:
    X = [ONE, ZERO, ZERO, ZERO],
    Y = [ZERO, ONE, ZERO, ZERO],
    Z = [ZERO, ZERO, ONE, ZERO],
    W = [ZERO, ZERO, ZERO, ONE]
);

impl<T, const N: usize, Q: Qualifier> Vector<T, N, Q> {
    /// Wraps an array. Usable in `const` contexts.
    ///
    /// ```
    /// # use tessel_linalg::*;
    /// const V: Vector<u8, 2, Aligned> = Vector::from_array([1, 2]);
    /// assert_eq!(V.requalify::<Packed>(), vec2(1, 2));
    /// ```
    #[inline]
    pub const fn from_array(elems: [T; N]) -> Self {
        Self {
            elems,
            _align: Q::ALIGN,
        }
    }

    /// Creates a vector with every element set to `elem`.
    ///
    /// ```
    /// # use tessel_linalg::*;
    /// let v: Vec3<i32> = Vector::splat(2);
    /// assert_eq!(v, [2, 2, 2]);
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self::from_array([elem; N])
    }

    /// Creates a vector by calling `f` with each element index, in ascending order.
    ///
    /// ```
    /// # use tessel_linalg::*;
    /// let v: Vec4<usize> = Vector::from_fn(|i| i * i);
    /// assert_eq!(v, [0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::from_array(array::from_fn(f))
    }

    /// Returns a vector with `f` applied to every element. The qualifier is kept.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N, Q> {
        Vector::from_array(self.elems.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// ```
    /// # use tessel_linalg::*;
    /// let v = vec2(1, 2).zip(vec2('a', 'b'));
    /// assert_eq!(v, [(1, 'a'), (2, 'b')]);
    /// ```
    pub fn zip<U>(self, other: Vector<U, N, Q>) -> Vector<(T, U), N, Q> {
        let mut pairs = self.elems.into_iter().zip(other.elems);
        // Both sides yield exactly `N` items.
        Vector::from_fn(|_| pairs.next().unwrap())
    }

    /// Moves the elements into a vector with the storage qualifier `Q2`.
    ///
    /// Comparison functions require both operands to share a qualifier; this is how values with
    /// different layouts are brought together.
    ///
    /// ```
    /// # use tessel_linalg::*;
    /// let packed = vec3(1.0, 2.0, 3.0);
    /// let aligned: Vec3<f64, Aligned> = packed.requalify();
    /// assert_eq!(equal(&aligned, &Vector::splat(2.0)).requalify(), vec3(false, true, false));
    /// ```
    #[inline]
    pub fn requalify<Q2: Qualifier>(self) -> Vector<T, N, Q2> {
        Vector::from_array(self.elems)
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.elems
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.elems
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.elems
    }

    /// Checked element access.
    ///
    /// ```
    /// # use tessel_linalg::*;
    /// assert_eq!(vec2(7, 8).get(1), Some(&8));
    /// assert_eq!(vec2(7, 8).get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elems.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elems.get_mut(index)
    }
}

impl<const N: usize, Q: Qualifier> Vector<bool, N, Q> {
    /// Same as [`all`][crate::all].
    pub fn all(&self) -> bool {
        crate::all(self)
    }

    /// Same as [`any`][crate::any].
    pub fn any(&self) -> bool {
        crate::any(self)
    }
}

impl<T: Default, const N: usize, Q: Qualifier> Default for Vector<T, N, Q> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize, Q: Qualifier> From<[T; N]> for Vector<T, N, Q> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self::from_array(elems)
    }
}

impl<T, const N: usize, Q: Qualifier> From<Vector<T, N, Q>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N, Q>) -> Self {
        v.elems
    }
}

/// Fails unless the slice holds exactly `N` elements.
///
/// ```
/// # use tessel_linalg::*;
/// assert_eq!(Vec3::<i32>::try_from(&[1, 2, 3][..]), Ok(vec3(1, 2, 3)));
///
/// let err = Vec3::<i32>::try_from(&[1, 2][..]).unwrap_err();
/// assert_eq!(err.to_string(), "expected 3 elements, got 2");
/// ```
impl<T: Copy, const N: usize, Q: Qualifier> TryFrom<&[T]> for Vector<T, N, Q> {
    type Error = DimensionMismatch;

    fn try_from(slice: &[T]) -> Result<Self, DimensionMismatch> {
        match <[T; N]>::try_from(slice) {
            Ok(elems) => Ok(Self::from_array(elems)),
            Err(_) => Err(DimensionMismatch {
                expected: N,
                actual: slice.len(),
            }),
        }
    }
}

/// Formats as a tuple: `(1, 2, 3)`.
impl<T: fmt::Debug, const N: usize, Q: Qualifier> fmt::Debug for Vector<T, N, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.elems
            .iter()
            .fold(&mut f.debug_tuple(""), |tup, elem| tup.field(elem))
            .finish()
    }
}

#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector::from_array([x])
}

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector::from_array([x, y])
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector::from_array([x, y, z])
}

#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector::from_array([x, y, z, w])
}
