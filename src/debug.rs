//! Printing helpers for inspecting values while debugging.
//!
//! Vectors print as `[ x, y, z ]`, matrices as one `| a b c |` line per row.

use std::fmt::Display;

use crate::math::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// Types the debug printers accept
pub trait Printable: Display {
    /// Short type name used as a log prefix
    const KIND: &'static str;
}

macro_rules! impl_printable {
    ($($name:ident),+) => {
        $(
            impl<T: Display> Printable for $name<T> {
                const KIND: &'static str = stringify!($name);
            }
        )+
    };
}

impl_printable!(Vector2, Vector3, Vector4, Matrix2, Matrix3, Matrix4);

/// Prints a vector to stdout
pub fn print_vec<V: Printable>(input: &V) {
    println!("{input}");
}

/// Prints a matrix to stdout, one row per line
pub fn print_mat<M: Printable>(input: &M) {
    println!("{input}");
}

/// Emits `input` at debug level, tagged with `label`
pub fn log_value<P: Printable>(label: &str, input: &P) {
    log::debug!("{} ({}):\n{}", label, P::KIND, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_the_type() {
        assert_eq!(<Vector3<f32> as Printable>::KIND, "Vector3");
        assert_eq!(<Matrix4<i32> as Printable>::KIND, "Matrix4");
    }

    #[test]
    fn printers_accept_every_type() {
        print_vec(&Vector2::new(1, 2));
        print_vec(&Vector4::new(1.0f64, 2.0, 3.0, 4.0));
        print_mat(&Matrix2::<f32>::identity());
        print_mat(&Matrix3::new(1, 2, 3, 4, 5, 6, 7, 8, 9));
        log_value("identity", &Matrix4::<f64>::identity());
    }
}
