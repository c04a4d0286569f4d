use nalgebra as na;
use num_traits::{Float, Num};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::assert::fail;
use crate::error::GlaError;

/// A 2D vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// A 3D vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 4D vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Everything the three vector types share. Components are listed with the
/// index they answer to.
macro_rules! impl_vector {
    ($name:ident, $n:literal, { $($field:ident : $idx:literal),+ }) => {
        impl<T> $name<T> {
            /// Creates a new vector from its components
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Number of components
            #[inline]
            pub const fn size() -> usize {
                $n
            }
        }

        impl<T: Copy> $name<T> {
            /// Creates a vector with every component set to `scalar`
            #[inline]
            pub fn splat(scalar: T) -> Self {
                Self { $($field: scalar),+ }
            }
        }

        impl<T: Num + Copy> $name<T> {
            /// The additive identity
            #[inline]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            /// Computes the dot product of two vectors
            #[inline]
            pub fn dot(self, other: Self) -> T {
                T::zero() $(+ self.$field * other.$field)+
            }

            /// Reflects `self` (the incident direction) about `normal`
            #[inline]
            pub fn reflection(self, normal: Self) -> Self {
                let two = T::one() + T::one();
                self - normal * (two * normal.dot(self))
            }
        }

        impl<T: PartialOrd + Copy> $name<T> {
            /// Component-wise minimum
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $($field: if other.$field < self.$field { other.$field } else { self.$field }),+ }
            }

            /// Component-wise maximum
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $($field: if other.$field > self.$field { other.$field } else { self.$field }),+ }
            }
        }

        impl<T: Neg<Output = T>> $name<T> {
            /// Component-wise negation
            #[inline]
            pub fn opposite(self) -> Self {
                -self
            }
        }

        impl<T: Float> $name<T> {
            /// Returns the squared length of the vector
            #[inline]
            pub fn squared_length(self) -> T {
                self.dot(self)
            }

            /// Returns the length of the vector
            #[inline]
            pub fn length(self) -> T {
                self.squared_length().sqrt()
            }

            /// Returns the vector scaled to unit length.
            ///
            /// The zero vector has no direction and is returned unchanged.
            #[inline]
            pub fn normalized(self) -> Self {
                if self == Self::zero() {
                    self
                } else {
                    self / self.length()
                }
            }

            /// Distance between two vectors
            #[inline]
            pub fn distance(self, other: Self) -> T {
                (self - other).length()
            }
        }

        impl<T: na::Scalar + Copy> $name<T> {
            /// Convert to the nalgebra vector of the same dimension
            #[inline]
            pub fn to_nalgebra(&self) -> na::$name<T> {
                na::$name::new($(self.$field),+)
            }

            /// Convert from the nalgebra vector of the same dimension
            #[inline]
            pub fn from_nalgebra(v: &na::$name<T>) -> Self {
                Self::new($(v[$idx]),+)
            }
        }

        impl<T> From<[T; $n]> for $name<T> {
            #[inline]
            fn from(array: [T; $n]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }
        }

        impl<T> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(vector: $name<T>) -> Self {
                [$(vector.$field),+]
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let components = [$(&self.$field),+];
                write!(f, "[ ")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", component)?;
                }
                write!(f, " ]")
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            #[track_caller]
            fn index(&self, index: usize) -> &T {
                match index {
                    $($idx => &self.$field,)+
                    _ => fail(GlaError::IndexOutOfRange { kind: stringify!($name), index, len: $n }),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            #[inline]
            #[track_caller]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => fail(GlaError::IndexOutOfRange { kind: stringify!($name), index, len: $n }),
                }
            }
        }

        // Operator implementations
        impl<T: Num + Copy> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Num + Copy> Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Num + Copy> Mul for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl<T: Num + Copy> Div for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl<T: Num + Copy> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Num + Copy> Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Neg<Output = T>> Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Num + Copy> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field + rhs.$field;)+
            }
        }

        impl<T: Num + Copy> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field - rhs.$field;)+
            }
        }

        impl<T: Num + Copy> MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field * rhs.$field;)+
            }
        }

        impl<T: Num + Copy> DivAssign for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field / rhs.$field;)+
            }
        }

        impl<T: Num + Copy> MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field = self.$field * rhs;)+
            }
        }

        impl<T: Num + Copy> DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                $(self.$field = self.$field / rhs;)+
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

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                true $(&& self.$field.abs_diff_eq(&other.$field, epsilon))+
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

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
                true $(&& self.$field.relative_eq(&other.$field, epsilon, max_relative))+
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

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                true $(&& self.$field.ulps_eq(&other.$field, epsilon, max_ulps))+
            }
        }
    };
}

/// `scalar * vector` for the built-in numeric types; scaling commutes.
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

impl_vector!(Vector2, 2, { x: 0, y: 1 });
impl_vector!(Vector3, 3, { x: 0, y: 1, z: 2 });
impl_vector!(Vector4, 4, { x: 0, y: 1, z: 2, w: 3 });

impl_scalar_lhs_mul!(Vector2; f32, f64, i32, i64, u32, u64);
impl_scalar_lhs_mul!(Vector3; f32, f64, i32, i64, u32, u64);
impl_scalar_lhs_mul!(Vector4; f32, f64, i32, i64, u32, u64);

// === Vector3 specifics ===

impl<T: Num + Copy> Vector3<T> {
    /// Computes the cross product of two vectors (right-handed)
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl<T: Copy> Vector3<T> {
    /// Creates a new Vector3 from a Vector2 and a z component
    #[inline]
    pub fn from_vector2(v: Vector2<T>, z: T) -> Self {
        Self::new(v.x, v.y, z)
    }

    /// Returns the x, y components as a Vector2
    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

// === Vector4 specifics ===

impl<T: Num + Copy> Vector4<T> {
    /// Cross product of the xyz parts; `w` of the result is zero
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::from_vector3(self.xyz().cross(other.xyz()), T::zero())
    }
}

impl<T: Copy> Vector4<T> {
    /// Creates a new Vector4 from a Vector3 and a w component
    #[inline]
    pub fn from_vector3(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Returns the x, y, z components as a Vector3
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}
