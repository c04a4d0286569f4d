use gla::math::{self, Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};
use gla::{DMat3x3, DMat4x4, IMat3x3, Mat2x2, Mat4x4};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random entries in [-1, 1] plus a dominant diagonal, so the matrix is invertible
fn random_invertible(rng: &mut StdRng) -> DMat4x4 {
    let mut m = DMat4x4::zero();
    for c in 0..4 {
        for r in 0..4 {
            m[c][r] = math::random_with(rng, -1.0, 1.0);
        }
    }
    m + DMat4x4::identity() * 5.0
}

fn counting_matrix4() -> Matrix4<i64> {
    Matrix4::new(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16)
}

#[test]
fn test_matrix_construction() {
    let m = Matrix3::new(1, 2, 3, 4, 5, 6, 7, 8, 9);
    assert_eq!(m[0], Vector3::new(1, 2, 3));
    assert_eq!(m[2], Vector3::new(7, 8, 9));
    assert_eq!(
        m,
        Matrix3::from_columns(Vector3::new(1, 2, 3), Vector3::new(4, 5, 6), Vector3::new(7, 8, 9))
    );
    assert_eq!(Matrix3::<i32>::columns(), 3);
    assert_eq!(Matrix3::<i32>::rows(), 3);
    assert_eq!(Matrix4::<i32>::default(), Matrix4::zero());

    // a uniform scalar fills every entry, not just the diagonal
    let filled = Matrix2::splat(3);
    assert_eq!(filled, Matrix2::new(3, 3, 3, 3));
    assert_ne!(filled, Matrix2::<i32>::identity() * 3);
}

#[test]
fn test_matrix_arithmetic() {
    let a = Matrix2::new(1.0f32, 2.0, 3.0, 4.0);
    let b = Matrix2::new(5.0f32, 6.0, 7.0, 8.0);

    assert_eq!(a + b, Matrix2::new(6.0, 8.0, 10.0, 12.0));
    assert_eq!(b - a, Matrix2::splat(4.0));
    assert_eq!(a * 2.0, Matrix2::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(2.0 * a, a * 2.0);

    // rows of a are (1, 3) and (2, 4); columns of b are (5, 6) and (7, 8)
    assert_eq!(a * b, Matrix2::new(23.0, 34.0, 31.0, 46.0));

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
    c -= b;
    assert_eq!(c, a);
    c *= b;
    assert_eq!(c, a * b);
    c *= 0.5;
    assert_eq!(c, (a * b) * 0.5);
}

#[test]
fn test_matrix_vector_product() {
    let m = Matrix3::new(1, 2, 3, 4, 5, 6, 7, 8, 9);
    let v = Vector3::new(1, 0, -1);
    // column 0 minus column 2
    assert_eq!(m * v, Vector3::new(-6, -6, -6));
    assert_eq!(Matrix3::<i32>::identity() * v, v);
}

#[test]
fn test_identity_is_neutral() {
    let m = counting_matrix4();
    assert_eq!(m * Matrix4::<i64>::identity(), m);
    assert_eq!(Matrix4::<i64>::identity() * m, m);

    let mut rng = StdRng::seed_from_u64(21);
    let r = random_invertible(&mut rng);
    assert_eq!(r * DMat4x4::identity(), r);
    assert_eq!(DMat4x4::identity() * r, r);
}

#[test]
fn test_transpose_round_trip() {
    let m = counting_matrix4();
    let t = m.transpose();
    assert_eq!(t[0], Vector4::new(1, 5, 9, 13));
    assert_eq!(t.row(0), m[0]);
    assert_eq!(t.transpose(), m);
}

#[test]
fn test_identity_properties() {
    let identity = Mat4x4::identity();
    assert_eq!(identity.determinant(), 1.0);
    assert_eq!(identity.trace(), 4.0);
    assert_eq!(identity.inverse(), identity);
    assert_eq!(Mat2x2::identity().trace(), 2.0);
}

#[test]
fn test_determinants() {
    assert_eq!(Matrix2::new(4, 2, 7, 6).determinant(), 10);
    assert_eq!(IMat3x3::new(2, 0, 0, 0, 3, 0, 0, 0, 4).determinant(), 24);
    assert_eq!(counting_matrix4().determinant(), 0);

    let triangular = Matrix4::new(1, 0, 0, 0, 5, 2, 0, 0, 6, 7, 3, 0, 8, 9, 1, 4);
    assert_eq!(triangular.determinant(), 24);
    assert_eq!(triangular.transpose().determinant(), 24);
}

#[test]
fn test_determinant_matches_nalgebra() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let m = random_invertible(&mut rng);
        assert_relative_eq!(m.determinant(), m.to_nalgebra().determinant(), epsilon = 1e-9);
    }
}

#[test]
fn test_inverse_2x2() {
    let m = Matrix2::new(4.0f64, 2.0, 7.0, 6.0);
    let expected = Matrix2::new(0.6, -0.2, -0.7, 0.4);
    assert_relative_eq!(m.inverse(), expected, epsilon = 1e-12);
    assert_relative_eq!(m * m.inverse(), Matrix2::<f64>::identity(), epsilon = 1e-12);
}

#[test]
fn test_inverse_3x3() {
    let m = DMat3x3::new(2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 4.0);
    let product = m * m.inverse();
    assert_relative_eq!(product, DMat3x3::identity(), epsilon = 1e-12);
    assert_relative_eq!(m.inverse() * m, DMat3x3::identity(), epsilon = 1e-12);
}

#[test]
fn test_inverse_4x4_matches_nalgebra() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..50 {
        let m = random_invertible(&mut rng);
        let inverse = m.inverse();
        assert_relative_eq!(m * inverse, DMat4x4::identity(), epsilon = 1e-9);

        let expected = m.to_nalgebra().try_inverse().map(|na| DMat4x4::from_nalgebra(&na));
        assert_relative_eq!(inverse, expected.unwrap(), epsilon = 1e-9);
    }
}

#[test]
fn test_adjugate_is_scaled_inverse() {
    let mut rng = StdRng::seed_from_u64(17);
    let m = random_invertible(&mut rng);
    assert_relative_eq!(m.adjugate(), m.inverse() * m.determinant(), epsilon = 1e-9);
    assert_eq!(m.adjugate(), m.cofactor().transpose());
}

#[test]
fn test_cofactor() {
    let m = Matrix2::new(1, 2, 3, 4);
    assert_eq!(m.cofactor(), Matrix2::new(4, -3, -2, 1));

    let m = Matrix3::new(1, 2, 3, 0, 1, 4, 5, 6, 0);
    // rows of m: (1, 0, 5), (2, 1, 6), (3, 4, 0)
    assert_eq!(m.cofactor()[0], Vector3::new(-24, 20, -5));
    assert_eq!(m.determinant(), 1);
    assert_eq!(m.adjugate(), m.inverse());

    let m4 = Matrix4::new(1, 0, 2, 0, 0, 1, 0, 0, 3, 0, 1, 0, 0, 0, 0, 1);
    for c in 0..4 {
        for r in 0..4 {
            let sign = if (c + r) % 2 == 0 { 1 } else { -1 };
            assert_eq!(m4.cofactor()[c][r], sign * m4.submatrix(c, r).determinant());
        }
    }
}

#[test]
fn test_submatrix() {
    let m = Matrix3::new(1, 2, 3, 4, 5, 6, 7, 8, 9);
    assert_eq!(m.submatrix(1, 0), Matrix2::new(2, 3, 8, 9));
    assert_eq!(m.submatrix(2, 2), Matrix2::new(1, 2, 4, 5));

    let sub = counting_matrix4().submatrix(0, 3);
    assert_eq!(sub, Matrix3::new(5, 6, 7, 9, 10, 11, 13, 14, 15));
}

#[test]
fn test_index_access() {
    let mut m = Matrix2::<f32>::identity();
    m[1][0] = 5.0;
    assert_eq!(m[1], Vector2::new(5.0, 1.0));
    assert_eq!(m.column(1), m[1]);
    assert_eq!(m.row(0), Vector2::new(1.0, 5.0));
    m[0] = Vector2::new(2.0, 3.0);
    assert_eq!(m[0][1], 3.0);
}

#[test]
fn test_nalgebra_interop() {
    let m = Matrix3::new(1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let na_m = m.to_nalgebra();
    assert_eq!(na_m[(0, 1)], 4.0);
    assert_eq!(na_m[(2, 0)], 3.0);
    assert_eq!(Matrix3::from_nalgebra(&na_m), m);

    let v = Vector3::new(1.0f32, 2.0, 3.0);
    assert_eq!((m * v).to_nalgebra(), na_m * v.to_nalgebra());
}

#[test]
#[should_panic(expected = "singular")]
fn test_singular_inverse_panics() {
    let m = Matrix2::new(1.0f32, 2.0, 2.0, 4.0);
    let _inverse = m.inverse();
}

#[test]
#[should_panic(expected = "Matrix4 is singular")]
fn test_singular_4x4_inverse_panics() {
    let _inverse = counting_matrix4().inverse();
}

#[test]
#[should_panic(expected = "Matrix4 index 4")]
fn test_matrix_index_out_of_range() {
    let m = Mat4x4::identity();
    let _column = m[4];
}

#[test]
#[should_panic(expected = "Matrix3 row index 3")]
fn test_matrix_row_out_of_range() {
    let _row = Matrix3::<i32>::identity().row(3);
}

#[test]
#[should_panic(expected = "non-existent Matrix4 index")]
fn test_submatrix_out_of_range() {
    let _minor = counting_matrix4().submatrix(1, 4);
}
