//! Model, view and projection matrix builders.
//!
//! All matrices use a right-handed coordinate system:
//!
//! ```text
//!           +y
//!            |
//!            |______ +x
//!           /
//!       +z /
//! ```
//!
//! The intended order of application is
//! `scale * rotate_z * rotate_y * rotate_x * translate`.

use num_traits::Float;

use crate::math::{Matrix4, Vector3, Vector4};

/// Adds `offset` to the translation column of `input`
pub fn translate<T: Float>(input: &Matrix4<T>, offset: Vector3<T>) -> Matrix4<T> {
    let mut result = *input;
    result[3][0] = input[3][0] + offset.x;
    result[3][1] = input[3][1] + offset.y;
    result[3][2] = input[3][2] + offset.z;
    result
}

/// Composes `input` with a rotation of `angle` radians about the x axis
pub fn rotate_x<T: Float>(input: &Matrix4<T>, angle: T) -> Matrix4<T> {
    let (sin, cos) = angle.sin_cos();
    let mut rotation = Matrix4::<T>::identity();
    rotation[1][1] = cos;
    rotation[1][2] = sin;
    rotation[2][1] = -sin;
    rotation[2][2] = cos;
    *input * rotation
}

/// Composes `input` with a rotation of `angle` radians about the y axis
pub fn rotate_y<T: Float>(input: &Matrix4<T>, angle: T) -> Matrix4<T> {
    let (sin, cos) = angle.sin_cos();
    let mut rotation = Matrix4::<T>::identity();
    rotation[0][0] = cos;
    rotation[0][2] = -sin;
    rotation[2][0] = sin;
    rotation[2][2] = cos;
    *input * rotation
}

/// Composes `input` with a rotation of `angle` radians about the z axis
pub fn rotate_z<T: Float>(input: &Matrix4<T>, angle: T) -> Matrix4<T> {
    let (sin, cos) = angle.sin_cos();
    let mut rotation = Matrix4::<T>::identity();
    rotation[0][0] = cos;
    rotation[0][1] = sin;
    rotation[1][0] = -sin;
    rotation[1][1] = cos;
    *input * rotation
}

/// Multiplies the first three diagonal entries of `input` by `factor`
pub fn scale<T: Float>(input: &Matrix4<T>, factor: Vector3<T>) -> Matrix4<T> {
    let mut result = *input;
    result[0][0] = input[0][0] * factor.x;
    result[1][1] = input[1][1] * factor.y;
    result[2][2] = input[2][2] * factor.z;
    result
}

/// Look-at view matrix for a camera at `eye` facing `at`.
///
/// The rotation part holds the camera basis as rows; the camera looks down
/// its own -z axis.
pub fn view<T: Float>(eye: Vector3<T>, at: Vector3<T>, up: Vector3<T>) -> Matrix4<T> {
    let front = (at - eye).normalized();
    let side = front.cross(up).normalized();
    let above = side.cross(front);

    let mut view = Matrix4::<T>::identity();
    for i in 0..3 {
        view[i][0] = side[i];
        view[i][1] = above[i];
        view[i][2] = -front[i];
    }
    view[3] = Vector4::new(-side.dot(eye), -above.dot(eye), front.dot(eye), T::one());
    view
}

/// Perspective projection.
///
/// `fov_degrees` is the vertical field of view; depth between `near` and
/// `far` maps to the canonical `[-1, 1]` clip range.
pub fn perspective<T: Float>(fov_degrees: T, aspect_ratio: T, near: T, far: T) -> Matrix4<T> {
    let two = T::one() + T::one();
    let tan_half_fov = (fov_degrees.to_radians() / two).tan();

    let mut projection = Matrix4::<T>::zero();
    projection[0][0] = (aspect_ratio * tan_half_fov).recip();
    projection[1][1] = tan_half_fov.recip();
    projection[2][2] = -(far + near) / (far - near);
    projection[2][3] = -T::one();
    projection[3][2] = -(two * far * near) / (far - near);
    projection
}

/// Orthographic projection of the box `[left, right] x [bottom, top] x [near, far]`
pub fn orthographic<T: Float>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix4<T> {
    let two = T::one() + T::one();

    let mut projection = Matrix4::<T>::identity();
    projection[0][0] = two / (right - left);
    projection[1][1] = two / (top - bottom);
    projection[2][2] = -two / (far - near);
    projection[3][0] = -(right + left) / (right - left);
    projection[3][1] = -(top + bottom) / (top - bottom);
    projection[3][2] = -(far + near) / (far - near);
    projection
}
