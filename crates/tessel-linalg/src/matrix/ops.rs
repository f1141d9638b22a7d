use std::ops::{BitAnd, BitOr, BitXor, Index, IndexMut, Not};

use crate::{qualifier::Qualifier, Matrix};

/// Indexes by `(row, col)`.
impl<T, const R: usize, const C: usize, Q: Qualifier> Index<(usize, usize)>
    for Matrix<T, R, C, Q>
{
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.columns[col][row]
    }
}

impl<T, const R: usize, const C: usize, Q: Qualifier> IndexMut<(usize, usize)>
    for Matrix<T, R, C, Q>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.columns[col][row]
    }
}

impl<T, U, const R: usize, const C: usize, Q: Qualifier> PartialEq<Matrix<U, R, C, Q>>
    for Matrix<T, R, C, Q>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C, Q>) -> bool {
        self.columns == other.columns
    }
}

impl<T: Eq, const R: usize, const C: usize, Q: Qualifier> Eq for Matrix<T, R, C, Q> {}

/// Element-wise logical negation.
impl<T: Not, const R: usize, const C: usize, Q: Qualifier> Not for Matrix<T, R, C, Q> {
    type Output = Matrix<T::Output, R, C, Q>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

macro_rules! mask_ops {
    ($($op:ident :: $method:ident),+) => {
        $(
            impl<T: $op, const R: usize, const C: usize, Q: Qualifier> $op for Matrix<T, R, C, Q> {
                type Output = Matrix<T::Output, R, C, Q>;

                fn $method(self, rhs: Self) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| $op::$method(l, r))
                }
            }
        )+
    };
}
mask_ops!(BitAnd::bitand, BitOr::bitor, BitXor::bitxor);
