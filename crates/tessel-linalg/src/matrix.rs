use std::{array, fmt};

use crate::{
    error::DimensionMismatch,
    qualifier::{Packed, Qualifier},
    One, Vector, Zero,
};

mod ops;

pub type Mat1<T, Q = Packed> = Matrix<T, 1, 1, Q>;
pub type Mat2<T, Q = Packed> = Matrix<T, 2, 2, Q>;
pub type Mat3<T, Q = Packed> = Matrix<T, 3, 3, Q>;
pub type Mat4<T, Q = Packed> = Matrix<T, 4, 4, Q>;
pub type Mat2x3<T, Q = Packed> = Matrix<T, 2, 3, Q>;
pub type Mat2x4<T, Q = Packed> = Matrix<T, 2, 4, Q>;
pub type Mat3x2<T, Q = Packed> = Matrix<T, 3, 2, Q>;
pub type Mat3x4<T, Q = Packed> = Matrix<T, 3, 4, Q>;
pub type Mat4x2<T, Q = Packed> = Matrix<T, 4, 2, Q>;
pub type Mat4x3<T, Q = Packed> = Matrix<T, 4, 3, Q>;
pub type Mat2f = Mat2<f32>;
pub type Mat3f = Mat3<f32>;
pub type Mat4f = Mat4<f32>;

/// An `R`-row, `C`-column matrix of `T`, stored column by column.
///
/// Elements are indexed with `(row, col)` tuples, both 0-based. Out-of-range indices panic;
/// [`Matrix::get`] is the checked alternative.
///
/// ```
/// # use tessel_linalg::*;
/// let mut m = Mat2x3::<i32>::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// m[(1, 2)] = 60;
/// assert_eq!(m.column(2), vec2(3, 60));
/// assert_eq!(m.get(2, 0), None);
/// ```
///
/// # Component order
///
/// Element-wise comparisons return a `Matrix<bool, R, C, Q>`. Where a matrix is treated as a flat
/// list of components, as in [`Components`][crate::relational::Components], the order is
/// column-major: component `i` is the element at row `i % R`, column `i / R`.
#[derive(Clone, Copy, Hash)]
#[repr(C)]
pub struct Matrix<T, const R: usize, const C: usize, Q: Qualifier = Packed> {
    columns: [[T; R]; C],
    _align: Q::Align,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize, Q: Qualifier>
    bytemuck::Zeroable for Matrix<T, R, C, Q>
{
}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod
    for Matrix<T, R, C, Packed>
{
}

impl<T: Zero + Copy, const R: usize, const C: usize, Q: Qualifier> Matrix<T, R, C, Q> {
    pub const ZERO: Self = Self::from_column_arrays([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize, Q: Qualifier> Matrix<T, R, C, Q> {
    /// Ones on the main diagonal, zeroes elsewhere. Also defined for non-square shapes.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; R]; C];
        let mut i = 0;
        while i < R && i < C {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self::from_column_arrays(columns)
    };
}

impl<T, const R: usize, const C: usize, Q: Qualifier> Matrix<T, R, C, Q> {
    #[inline]
    pub const fn from_column_arrays(columns: [[T; R]; C]) -> Self {
        Self {
            columns,
            _align: Q::ALIGN,
        }
    }

    /// Builds a matrix from its rows, written in reading order.
    ///
    /// ```
    /// # use tessel_linalg::*;
    /// let by_rows = Mat2::<i32>::from_rows([[0, 1], [2, 3]]);
    /// let by_columns = Mat2::<i32>::from_columns([[0, 2], [1, 3]]);
    /// assert_eq!(by_rows, by_columns);
    /// ```
    pub fn from_rows<V: Into<Vector<T, C, Q>>>(rows: [V; R]) -> Self {
        let mut rows = rows.map(|row| row.into().into_array().into_iter());
        // Each column takes the next element of every row. Rows yield exactly `C` elements.
        Self::from_column_arrays(array::from_fn(|_| {
            array::from_fn(|r| rows[r].next().unwrap())
        }))
    }

    pub fn from_columns<V: Into<Vector<T, R, Q>>>(columns: [V; C]) -> Self {
        Self::from_column_arrays(columns.map(|col| col.into().into_array()))
    }

    /// Builds a matrix by calling `f(row, col)` for each element, in column-major order.
    ///
    /// ```
    /// # use tessel_linalg::*;
    /// let m: Mat2x3<usize> = Matrix::from_fn(|row, col| 10 * row + col);
    /// assert_eq!(m.row(1), [10, 11, 12]);
    /// ```
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self::from_column_arrays(array::from_fn(|col| array::from_fn(|row| f(row, col))))
    }

    /// Returns a matrix with `f` applied to every element. The qualifier is kept.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, R, C, Q> {
        Matrix::from_column_arrays(self.columns.map(|col| col.map(&mut f)))
    }

    /// Pairs up the elements of `self` and `other` at equal positions.
    pub fn zip<U>(self, other: Matrix<U, R, C, Q>) -> Matrix<(T, U), R, C, Q> {
        let mut cols = self.columns.into_iter().zip(other.columns);
        Matrix::from_column_arrays(array::from_fn(|_| {
            let (a, b) = cols.next().unwrap();
            let mut pairs = a.into_iter().zip(b);
            array::from_fn(|_| pairs.next().unwrap())
        }))
    }

    /// Moves the elements into a matrix with the storage qualifier `Q2`.
    #[inline]
    pub fn requalify<Q2: Qualifier>(self) -> Matrix<T, R, C, Q2> {
        Matrix::from_column_arrays(self.columns)
    }

    /// # Panics
    ///
    /// Panics if `col >= C`.
    pub fn column(&self, col: usize) -> Vector<T, R, Q>
    where
        T: Copy,
    {
        Vector::from_array(self.columns[col])
    }

    /// # Panics
    ///
    /// Panics if `row >= R`.
    pub fn row(&self, row: usize) -> Vector<T, C, Q>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.columns.get(col)?.get(row)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.columns.get_mut(col)?.get_mut(row)
    }

    /// Iterates over the elements in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.columns.iter().flatten()
    }
}

impl<T, const N: usize, Q: Qualifier> Matrix<T, N, N, Q> {
    /// Builds a square matrix with `diag` on its main diagonal and zeroes elsewhere.
    ///
    /// ```
    /// # use tessel_linalg::*;
    /// let m = Mat3::<i32>::from_diagonal([1, 2, 3]);
    /// assert_eq!(m.row(1), [0, 2, 0]);
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N, Q>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }
}

impl<const R: usize, const C: usize, Q: Qualifier> Matrix<bool, R, C, Q> {
    /// Same as [`all`][crate::all].
    pub fn all(&self) -> bool {
        crate::all(self)
    }

    /// Same as [`any`][crate::any].
    pub fn any(&self) -> bool {
        crate::any(self)
    }
}

/// Formats row by row: `[[1, 2], [3, 4]]`.
impl<T: fmt::Debug, const R: usize, const C: usize, Q: Qualifier> fmt::Debug
    for Matrix<T, R, C, Q>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keeps `{:#?}` from putting every element on its own line.
        struct Row<'a, T, const N: usize>([&'a T; N]);

        impl<T: fmt::Debug, const N: usize> fmt::Debug for Row<'_, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    elem.fmt(f)?;
                }
                f.write_str("]")
            }
        }

        f.debug_list()
            .entries((0..R).map(|row| Row(array::from_fn::<_, C, _>(|col| &self[(row, col)]))))
            .finish()
    }
}

impl<T: Default, const R: usize, const C: usize, Q: Qualifier> Default for Matrix<T, R, C, Q> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize, Q: Qualifier> From<[[T; R]; C]> for Matrix<T, R, C, Q> {
    #[inline]
    fn from(columns: [[T; R]; C]) -> Self {
        Self::from_column_arrays(columns)
    }
}

/// Reads `R * C` elements in column-major order. Fails on any other slice length.
///
/// ```
/// # use tessel_linalg::*;
/// let m = Mat2::<i32>::try_from(&[1, 2, 3, 4][..]).unwrap();
/// assert_eq!(m.column(1), vec2(3, 4));
/// assert!(Mat2::<i32>::try_from(&[1, 2, 3][..]).is_err());
/// ```
impl<T: Copy, const R: usize, const C: usize, Q: Qualifier> TryFrom<&[T]> for Matrix<T, R, C, Q> {
    type Error = DimensionMismatch;

    fn try_from(slice: &[T]) -> Result<Self, DimensionMismatch> {
        if slice.len() != R * C {
            return Err(DimensionMismatch {
                expected: R * C,
                actual: slice.len(),
            });
        }
        Ok(Self::from_fn(|row, col| slice[col * R + row]))
    }
}
