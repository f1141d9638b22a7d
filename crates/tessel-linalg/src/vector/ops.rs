//! Indexing, equality and the logical operators used to combine comparison masks.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Index, IndexMut, Not};

use crate::qualifier::Qualifier;

use super::Vector;

impl<T, const N: usize, Q: Qualifier> Index<usize> for Vector<T, N, Q> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.elems[index]
    }
}

impl<T, const N: usize, Q: Qualifier> IndexMut<usize> for Vector<T, N, Q> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elems[index]
    }
}

// Whole-vector equality. Both sides must use the same qualifier.
impl<T, U, const N: usize, Q: Qualifier> PartialEq<Vector<U, N, Q>> for Vector<T, N, Q>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N, Q>) -> bool {
        self.elems == other.elems
    }
}

impl<T: Eq, const N: usize, Q: Qualifier> Eq for Vector<T, N, Q> {}

impl<T, U, const N: usize, Q: Qualifier> PartialEq<[U; N]> for Vector<T, N, Q>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.elems == *other
    }
}

impl<T, U, const N: usize, Q: Qualifier> PartialEq<[U]> for Vector<T, N, Q>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.elems[..] == *other
    }
}

/// Element-wise logical negation, eg. to invert a comparison mask.
impl<T: Not, const N: usize, Q: Qualifier> Not for Vector<T, N, Q> {
    type Output = Vector<T::Output, N, Q>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

macro_rules! mask_ops {
    ($($op:ident :: $method:ident, $assign:ident :: $assign_method:ident;)+) => {
        $(
            impl<T: $op, const N: usize, Q: Qualifier> $op for Vector<T, N, Q> {
                type Output = Vector<T::Output, N, Q>;

                fn $method(self, rhs: Self) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| $op::$method(l, r))
                }
            }

            impl<T: $assign, const N: usize, Q: Qualifier> $assign for Vector<T, N, Q> {
                fn $assign_method(&mut self, rhs: Self) {
                    for (l, r) in self.elems.iter_mut().zip(rhs.elems) {
                        $assign::$assign_method(l, r);
                    }
                }
            }
        )+
    };
}
mask_ops! {
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
}

/// Element-wise exclusive or. On comparison masks, this marks the components where they differ.
impl<T: BitXor, const N: usize, Q: Qualifier> BitXor for Vector<T, N, Q> {
    type Output = Vector<T::Output, N, Q>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l ^ r)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, vec4};

    #[test]
    fn indexing() {
        let mut v = vec4(1, 2, 3, 4);
        v[3] = 40;
        assert_eq!(v[0], 1);
        assert_eq!(v, [1, 2, 3, 40]);
        assert_eq!(v, [1, 2, 3, 40][..]);
        assert_ne!(v, [1, 2][..]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = vec3(0u8, 1, 2);
        let _ = v[3];
    }

    #[test]
    fn masks() {
        let a = vec3(true, true, false);
        let b = vec3(true, false, false);
        assert_eq!(a & b, vec3(true, false, false));
        assert_eq!(a | b, vec3(true, true, false));
        assert_eq!(a ^ b, vec3(false, true, false));
        assert_eq!(!a, vec3(false, false, true));

        let mut c = a;
        c &= b;
        c |= vec3(false, false, true);
        assert_eq!(c, vec3(true, false, true));
    }
}
