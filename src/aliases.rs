//! Short names binding dimension and element type.

use crate::math::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};

// generic

pub type TVec2<T> = Vector2<T>;
pub type TVec3<T> = Vector3<T>;
pub type TVec4<T> = Vector4<T>;

pub type TMat2x2<T> = Matrix2<T>;
pub type TMat3x3<T> = Matrix3<T>;
pub type TMat4x4<T> = Matrix4<T>;

// vectors

pub type BVec2 = Vector2<bool>;
pub type BVec3 = Vector3<bool>;
pub type BVec4 = Vector4<bool>;

pub type IVec2 = Vector2<i32>;
pub type IVec3 = Vector3<i32>;
pub type IVec4 = Vector4<i32>;

pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;
pub type Vec4 = Vector4<f32>;

pub type DVec2 = Vector2<f64>;
pub type DVec3 = Vector3<f64>;
pub type DVec4 = Vector4<f64>;

pub type LVec2 = Vector2<i64>;
pub type LVec3 = Vector3<i64>;
pub type LVec4 = Vector4<i64>;

pub type UIVec2 = Vector2<u32>;
pub type UIVec3 = Vector3<u32>;
pub type UIVec4 = Vector4<u32>;

pub type ULVec2 = Vector2<u64>;
pub type ULVec3 = Vector3<u64>;
pub type ULVec4 = Vector4<u64>;

// matrices

pub type BMat2x2 = Matrix2<bool>;
pub type BMat3x3 = Matrix3<bool>;
pub type BMat4x4 = Matrix4<bool>;

pub type IMat2x2 = Matrix2<i32>;
pub type IMat3x3 = Matrix3<i32>;
pub type IMat4x4 = Matrix4<i32>;

pub type Mat2x2 = Matrix2<f32>;
pub type Mat3x3 = Matrix3<f32>;
pub type Mat4x4 = Matrix4<f32>;

pub type DMat2x2 = Matrix2<f64>;
pub type DMat3x3 = Matrix3<f64>;
pub type DMat4x4 = Matrix4<f64>;

pub type LMat2x2 = Matrix2<i64>;
pub type LMat3x3 = Matrix3<i64>;
pub type LMat4x4 = Matrix4<i64>;

pub type UIMat2x2 = Matrix2<u32>;
pub type UIMat3x3 = Matrix3<u32>;
pub type UIMat4x4 = Matrix4<u32>;

pub type ULMat2x2 = Matrix2<u64>;
pub type ULMat3x3 = Matrix3<u64>;
pub type ULMat4x4 = Matrix4<u64>;
