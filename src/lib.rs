pub mod assert;
pub mod math;
pub mod debug;
pub mod aliases;

/// Re-export common types for easier usage
pub use crate::math::{Vector2, Vector3, Vector4, Matrix2, Matrix3, Matrix4};
pub use crate::aliases::*;

/// Descriptions of the conditions the library treats as fatal
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum GlaError {
        #[error("trying to access or write to a non-existent {kind} index {index} (valid range 0..{len})")]
        IndexOutOfRange {
            kind: &'static str,
            index: usize,
            len: usize,
        },

        #[error("trying to remove a non-existent {kind} index (column {column}, row {row}, valid range 0..{dim})")]
        SubmatrixOutOfRange {
            kind: &'static str,
            column: usize,
            row: usize,
            dim: usize,
        },

        #[error("the given {kind} is singular, therefore it does not have an inverse")]
        SingularMatrix { kind: &'static str },
    }
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
