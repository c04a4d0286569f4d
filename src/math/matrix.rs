//! Square matrices stored in column-major order.
//!
//! Element `(c, r)` is `matrix[c][r]`: indexing a matrix yields a column
//! vector, indexing that yields the entry in row `r`. Every constructor and
//! conversion taking nested arrays uses the same `[column][row]` layout.

use nalgebra as na;
use num_traits::{Num, Signed};
use std::array;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::assert::gla_assert;
use crate::error::GlaError;
use crate::math::{Vector2, Vector3, Vector4};

/// A 2x2 matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix2<T> {
    values: [Vector2<T>; 2],
}

/// A 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix3<T> {
    values: [Vector3<T>; 3],
}

/// A 4x4 matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix4<T> {
    values: [Vector4<T>; 4],
}

macro_rules! impl_matrix {
    ($name:ident, $column:ident, $n:literal) => {
        impl<T> $name<T> {
            /// Number of columns
            #[inline]
            pub const fn columns() -> usize {
                $n
            }

            /// Number of rows
            #[inline]
            pub const fn rows() -> usize {
                $n
            }
        }

        impl<T: Copy> $name<T> {
            /// Creates a matrix with every entry set to `scalar`.
            ///
            /// This is not a diagonal matrix; see [`Self::identity`].
            #[inline]
            pub fn splat(scalar: T) -> Self {
                Self { values: [$column::splat(scalar); $n] }
            }

            /// Overwrites every entry from a `[column][row]` array
            pub fn insert(&mut self, values: &[[T; $n]; $n]) {
                for c in 0..$n {
                    for r in 0..$n {
                        self.values[c][r] = values[c][r];
                    }
                }
            }

            /// Returns column `index`
            #[inline]
            #[track_caller]
            pub fn column(&self, index: usize) -> $column<T> {
                self[index]
            }

            /// Gathers row `index` across all columns
            #[track_caller]
            pub fn row(&self, index: usize) -> $column<T> {
                gla_assert!(
                    index < $n,
                    GlaError::IndexOutOfRange { kind: concat!(stringify!($name), " row"), index, len: $n }
                );
                $column::from(array::from_fn::<T, $n, _>(|c| self.values[c][index]))
            }

            /// Swaps the role of row and column indices
            pub fn transpose(&self) -> Self {
                let mut result = *self;
                for c in 0..$n {
                    for r in 0..$n {
                        result.values[c][r] = self.values[r][c];
                    }
                }
                result
            }
        }

        impl<T: Num + Copy> $name<T> {
            /// Creates a matrix with every entry zero
            #[inline]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            /// Ones on the diagonal, zero elsewhere
            pub fn identity() -> Self {
                let mut identity = Self::zero();
                for i in 0..$n {
                    identity.values[i][i] = T::one();
                }
                identity
            }

            /// Sum of the diagonal entries
            pub fn trace(&self) -> T {
                (0..$n).fold(T::zero(), |sum, i| sum + self.values[i][i])
            }
        }

        impl<T: Signed + Copy> $name<T> {
            /// Transpose of the cofactor matrix
            #[inline]
            pub fn adjugate(&self) -> Self {
                self.cofactor().transpose()
            }

            /// Returns the inverse of the matrix.
            ///
            /// A singular matrix has no inverse; asking for one is a fatal
            /// assertion.
            #[track_caller]
            pub fn inverse(&self) -> Self {
                let determinant = self.determinant();
                gla_assert!(
                    determinant != T::zero(),
                    GlaError::SingularMatrix { kind: stringify!($name) }
                );
                self.adjugate() * (T::one() / determinant)
            }
        }

        impl<T: na::Scalar + Copy> $name<T> {
            /// Convert to the nalgebra matrix of the same dimension
            pub fn to_nalgebra(&self) -> na::$name<T> {
                na::$name::from_fn(|r, c| self.values[c][r])
            }

            /// Convert from the nalgebra matrix of the same dimension
            pub fn from_nalgebra(m: &na::$name<T>) -> Self {
                let values: [[T; $n]; $n] = array::from_fn(|c| array::from_fn(|r| m[(r, c)]));
                Self::from(values)
            }
        }

        impl<T> From<[[T; $n]; $n]> for $name<T> {
            #[inline]
            fn from(values: [[T; $n]; $n]) -> Self {
                Self { values: values.map($column::from) }
            }
        }

        impl<T> From<$name<T>> for [[T; $n]; $n] {
            #[inline]
            fn from(matrix: $name<T>) -> Self {
                matrix.values.map(<[T; $n]>::from)
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                for r in 0..$n {
                    write!(f, "| ")?;
                    for c in 0..$n {
                        if c > 0 {
                            write!(f, " ")?;
                        }
                        write!(f, "{}", self.values[c][r])?;
                    }
                    write!(f, " |")?;
                    if r + 1 < $n {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = $column<T>;

            #[inline]
            #[track_caller]
            fn index(&self, index: usize) -> &$column<T> {
                gla_assert!(
                    index < $n,
                    GlaError::IndexOutOfRange { kind: stringify!($name), index, len: $n }
                );
                &self.values[index]
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            #[inline]
            #[track_caller]
            fn index_mut(&mut self, index: usize) -> &mut $column<T> {
                gla_assert!(
                    index < $n,
                    GlaError::IndexOutOfRange { kind: stringify!($name), index, len: $n }
                );
                &mut self.values[index]
            }
        }

        // Operator implementations
        impl<T: Num + Copy> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { values: array::from_fn(|c| self.values[c] + rhs.values[c]) }
            }
        }

        impl<T: Num + Copy> Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { values: array::from_fn(|c| self.values[c] - rhs.values[c]) }
            }
        }

        impl<T: Num + Copy> Mul for $name<T> {
            type Output = Self;

            fn mul(self, m: Self) -> Self::Output {
                let mut result = Self::zero();
                for c in 0..$n {
                    for r in 0..$n {
                        let mut sum = T::zero();
                        for v in 0..$n {
                            sum = sum + self.values[v][r] * m.values[c][v];
                        }
                        result.values[c][r] = sum;
                    }
                }
                result
            }
        }

        impl<T: Num + Copy> Mul<$column<T>> for $name<T> {
            type Output = $column<T>;

            fn mul(self, v: $column<T>) -> Self::Output {
                let mut result = $column::zero();
                for c in 0..$n {
                    result += self.values[c] * v[c];
                }
                result
            }
        }

        impl<T: Num + Copy> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: T) -> Self::Output {
                Self { values: self.values.map(|column| column * scalar) }
            }
        }

        impl<T: Num + Copy> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                for c in 0..$n {
                    self.values[c] += rhs.values[c];
                }
            }
        }

        impl<T: Num + Copy> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                for c in 0..$n {
                    self.values[c] -= rhs.values[c];
                }
            }
        }

        impl<T: Num + Copy> MulAssign for $name<T> {
            /// True matrix multiplication, not component-wise
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: Num + Copy> MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, scalar: T) {
                for c in 0..$n {
                    self.values[c] *= scalar;
                }
            }
        }

        impl<T: AbsDiffEq> AbsDiffEq for $name<T>
        where
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.values
                    .iter()
                    .zip(other.values.iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T: RelativeEq> RelativeEq for $name<T>
        where
            T::Epsilon: Copy,
        {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
                self.values
                    .iter()
                    .zip(other.values.iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<T: UlpsEq> UlpsEq for $name<T>
        where
            T::Epsilon: Copy,
        {
            #[inline]
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.values
                    .iter()
                    .zip(other.values.iter())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

/// `scalar * matrix` for the built-in numeric types
macro_rules! impl_scalar_lhs_mul {
    ($name:ident; $($prim:ty),+) => {
        $(
            impl Mul<$name<$prim>> for $prim {
                type Output = $name<$prim>;
                #[inline]
                fn mul(self, rhs: $name<$prim>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

/// Deletes one column and one row, keeping the remaining entries in order
macro_rules! impl_submatrix {
    ($name:ident => $minor:ident, $n:literal) => {
        impl<T: Num + Copy> $name<T> {
            #[track_caller]
            pub fn submatrix(&self, remove_column: usize, remove_row: usize) -> $minor<T> {
                gla_assert!(
                    remove_column < $n && remove_row < $n,
                    GlaError::SubmatrixOutOfRange {
                        kind: stringify!($name),
                        column: remove_column,
                        row: remove_row,
                        dim: $n,
                    }
                );

                let mut result = $minor::zero();
                let columns = (0..$n).filter(|&c| c != remove_column);
                for (result_column, c) in columns.enumerate() {
                    let rows = (0..$n).filter(|&r| r != remove_row);
                    for (result_row, r) in rows.enumerate() {
                        result.values[result_column][result_row] = self.values[c][r];
                    }
                }
                result
            }
        }
    };
}

impl_matrix!(Matrix2, Vector2, 2);
impl_matrix!(Matrix3, Vector3, 3);
impl_matrix!(Matrix4, Vector4, 4);

impl_scalar_lhs_mul!(Matrix2; f32, f64, i32, i64, u32, u64);
impl_scalar_lhs_mul!(Matrix3; f32, f64, i32, i64, u32, u64);
impl_scalar_lhs_mul!(Matrix4; f32, f64, i32, i64, u32, u64);

impl_submatrix!(Matrix3 => Matrix2, 3);
impl_submatrix!(Matrix4 => Matrix3, 4);

// === Matrix2 Implementation ===

impl<T> Matrix2<T> {
    /// Creates a matrix from its columns
    #[inline]
    pub const fn from_columns(c0: Vector2<T>, c1: Vector2<T>) -> Self {
        Self { values: [c0, c1] }
    }

    /// Creates a matrix from its entries, one column after another
    #[inline]
    pub const fn new(x0: T, x1: T, y0: T, y1: T) -> Self {
        Self::from_columns(Vector2::new(x0, x1), Vector2::new(y0, y1))
    }
}

impl<T: Num + Copy> Matrix2<T> {
    pub fn determinant(&self) -> T {
        let m = &self.values;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }
}

impl<T: Signed + Copy> Matrix2<T> {
    pub fn cofactor(&self) -> Self {
        let m = &self.values;
        Self::new(m[1][1], -m[1][0], -m[0][1], m[0][0])
    }
}

// === Matrix3 Implementation ===

impl<T> Matrix3<T> {
    /// Creates a matrix from its columns
    #[inline]
    pub const fn from_columns(c0: Vector3<T>, c1: Vector3<T>, c2: Vector3<T>) -> Self {
        Self { values: [c0, c1, c2] }
    }

    /// Creates a matrix from its entries, one column after another
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(x0: T, x1: T, x2: T, y0: T, y1: T, y2: T, z0: T, z1: T, z2: T) -> Self {
        Self::from_columns(
            Vector3::new(x0, x1, x2),
            Vector3::new(y0, y1, y2),
            Vector3::new(z0, z1, z2),
        )
    }
}

impl<T: Num + Copy> Matrix3<T> {
    pub fn determinant(&self) -> T {
        let m = &self.values;
        m[0][0] * m[1][1] * m[2][2] + m[1][0] * m[2][1] * m[0][2] + m[2][0] * m[0][1] * m[1][2]
            - m[0][2] * m[1][1] * m[2][0]
            - m[1][2] * m[2][1] * m[0][0]
            - m[2][2] * m[0][1] * m[1][0]
    }
}

impl<T: Signed + Copy> Matrix3<T> {
    pub fn cofactor(&self) -> Self {
        let m = &self.values;
        Self::new(
            m[1][1] * m[2][2] - m[1][2] * m[2][1],
            -(m[1][0] * m[2][2] - m[1][2] * m[2][0]),
            m[1][0] * m[2][1] - m[1][1] * m[2][0],
            -(m[0][1] * m[2][2] - m[0][2] * m[2][1]),
            m[0][0] * m[2][2] - m[0][2] * m[2][0],
            -(m[0][0] * m[2][1] - m[0][1] * m[2][0]),
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
            -(m[0][0] * m[1][2] - m[0][2] * m[1][0]),
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
        )
    }
}

// === Matrix4 Implementation ===

impl<T> Matrix4<T> {
    /// Creates a matrix from its columns
    #[inline]
    pub const fn from_columns(c0: Vector4<T>, c1: Vector4<T>, c2: Vector4<T>, c3: Vector4<T>) -> Self {
        Self { values: [c0, c1, c2, c3] }
    }

    /// Creates a matrix from its entries, one column after another
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        x0: T, x1: T, x2: T, x3: T,
        y0: T, y1: T, y2: T, y3: T,
        z0: T, z1: T, z2: T, z3: T,
        w0: T, w1: T, w2: T, w3: T,
    ) -> Self {
        Self::from_columns(
            Vector4::new(x0, x1, x2, x3),
            Vector4::new(y0, y1, y2, y3),
            Vector4::new(z0, z1, z2, z3),
            Vector4::new(w0, w1, w2, w3),
        )
    }
}

impl<T: Num + Copy> Matrix4<T> {
    /// Cofactor expansion along the first column
    pub fn determinant(&self) -> T {
        let mut determinant = T::zero();
        for r in 0..4 {
            let term = self.values[0][r] * self.submatrix(0, r).determinant();
            determinant = if r % 2 == 0 { determinant + term } else { determinant - term };
        }
        determinant
    }
}

impl<T: Signed + Copy> Matrix4<T> {
    pub fn cofactor(&self) -> Self {
        let mut result = Self::zero();
        for c in 0..4 {
            for r in 0..4 {
                let minor = self.submatrix(c, r).determinant();
                // a zero minor stays positive zero
                result.values[c][r] = if (c + r) % 2 == 0 || minor.is_zero() { minor } else { -minor };
            }
        }
        result
    }
}
