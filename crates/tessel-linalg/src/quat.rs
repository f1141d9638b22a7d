mod view;

use std::fmt;

use crate::{
    qualifier::{Packed, Qualifier},
    One, Vector, Zero,
};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Quaternions are stored like a 4-dimensional [`Vector`] with the same [`Qualifier`], holding the
/// `i`, `j` and `k` imaginary parts followed by the real part `w`. The components are accessible
/// by those names as fields.
///
/// Element-wise comparisons of quaternions return a `Vector<bool, 4, Q>`. Only the approximate
/// comparisons with a single scalar tolerance are available for quaternions, see
/// [`epsilon_equal`][crate::epsilon_equal].
///
/// # Examples
///
/// ```
/// # use tessel_linalg::*;
/// let mut q = Quat::<i32>::from_components(1, 2, 3, 4);
/// assert_eq!(q.i, 1);
/// assert_eq!(q.w, 4);
/// q.k = 30;
/// assert_eq!(q.into_vec(), vec4(1, 2, 30, 4));
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Quat<T, Q: Qualifier = Packed> {
    vec: Vector<T, 4, Q>,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, Q: Qualifier> bytemuck::Zeroable for Quat<T, Q> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T, Packed> {}

impl<T: Zero + One, Q: Qualifier> Quat<T, Q> {
    /// The multiplicative identity.
    pub const IDENTITY: Self = Self {
        vec: Vector::from_array([T::ZERO, T::ZERO, T::ZERO, T::ONE]),
    };
}

impl<T, Q: Qualifier> Quat<T, Q> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    #[inline]
    pub const fn from_vec(vec: Vector<T, 4, Q>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its imaginary parts `i`, `j`, `k` and its real part `w`.
    #[inline]
    pub const fn from_components(i: T, j: T, k: T, w: T) -> Self {
        Self::from_vec(Vector::from_array([i, j, k, w]))
    }

    /// Returns the `[i, j, k, w]` components of this quaternion as a [`Vector`].
    #[inline]
    pub fn into_vec(self) -> Vector<T, 4, Q> {
        self.vec
    }

    /// Returns a reference to the underlying [`Vector`].
    #[inline]
    pub fn as_vec(&self) -> &Vector<T, 4, Q> {
        &self.vec
    }

    /// Converts this quaternion to one with a different storage [`Qualifier`].
    #[inline]
    pub fn requalify<Q2: Qualifier>(self) -> Quat<T, Q2> {
        Quat::from_vec(self.vec.requalify())
    }
}

impl<T: fmt::Debug, Q: Qualifier> fmt::Debug for Quat<T, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [i, j, k, w] = self.vec.as_array();
        f.debug_struct("Quat")
            .field("i", i)
            .field("j", j)
            .field("k", k)
            .field("w", w)
            .finish()
    }
}

impl<T: Zero + One, Q: Qualifier> Default for Quat<T, Q> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T, Q: Qualifier> From<Vector<T, 4, Q>> for Quat<T, Q> {
    #[inline]
    fn from(vec: Vector<T, 4, Q>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T, Q: Qualifier> From<Quat<T, Q>> for Vector<T, 4, Q> {
    #[inline]
    fn from(quat: Quat<T, Q>) -> Self {
        quat.vec
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec4, Aligned};

    use super::*;

    #[test]
    fn components() {
        let q = Quat::from_vec(vec4(0.5, -0.5, 0.25, 1.0));
        assert_eq!(q.i, 0.5);
        assert_eq!(q.j, -0.5);
        assert_eq!(q.k, 0.25);
        assert_eq!(q.w, 1.0);

        let q = Quat::<f32>::IDENTITY;
        assert_eq!(q.into_vec(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Quat::<f32>::default(), q);
    }

    #[test]
    fn aligned() {
        let q = Quat::<f64, Aligned>::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(std::mem::align_of_val(&q), 16);
        assert_eq!(q.k, 3.0);
        assert_eq!(q.requalify::<Packed>().into_vec(), vec4(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn approx() {
        let q = Quat::from_vec(vec4(0.0f32, 0.0, 0.7071068, 0.7071068));
        let r = Quat::from_vec(vec4(0.0f32, 0.0, 0.70710677, 0.70710677));
        crate::assert_approx_eq!(q, r);
        crate::assert_approx_ne!(q, Quat::IDENTITY);
        crate::assert_approx_eq!(q.requalify::<Aligned>(), r.requalify(), abs = 1e-7);
    }

    #[test]
    fn fmt() {
        assert_eq!(
            format!("{:?}", Quat::from_vec(vec4(1, 2, 3, 4))),
            "Quat { i: 1, j: 2, k: 3, w: 4 }"
        );
    }
}
