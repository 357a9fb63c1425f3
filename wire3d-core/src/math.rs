/// Homogeneous vector and matrix algebra
use std::fmt;

use thiserror::Error;

/// Failure modes of the math and transform layers. All of these are
/// fail-fast caller contract violations; none are retried.
#[derive(Debug, Error, PartialEq)]
pub enum MathError {
    #[error("matrix requires exactly 16 elements, got {len}")]
    InvalidDimension { len: usize },
    #[error("rotation or scale axis has zero length")]
    DegenerateAxis,
    #[error("scale factor must stay non-zero")]
    ZeroScaleFactor,
}

/// A homogeneous 4-component vector. w stays 1 for points so translation
/// matrices act on them; callers divide x,y by w after a projective
/// transform leaves w != 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vec4 {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// A point with the default homogeneous coordinate w = 1.
    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// 3D dot product; w is ignored.
    pub fn dot(self, other: Vec4) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length of the 3D part.
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// A 4x4 homogeneous transform, row-major: element (row, col) sits at
/// index row * 4 + col.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    elems: [f64; 16],
}

impl Mat4 {
    pub fn new(elems: [f64; 16]) -> Self {
        Self { elems }
    }

    /// Build a matrix from a runtime slice. Anything other than exactly
    /// 16 values is a programming error.
    pub fn try_from_slice(values: &[f64]) -> Result<Self, MathError> {
        if values.len() != 16 {
            return Err(MathError::InvalidDimension { len: values.len() });
        }
        let mut elems = [0.0; 16];
        elems.copy_from_slice(values);
        Ok(Self { elems })
    }

    pub fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.elems[row * 4 + col]
    }

    /// Row-by-column multiply with a column vector. No perspective divide
    /// happens here; the caller dehomogenizes when the resulting w != 1.
    pub fn mul_vec(&self, v: Vec4) -> Vec4 {
        let m = &self.elems;
        Vec4::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w,
            m[4] * v.x + m[5] * v.y + m[6] * v.z + m[7] * v.w,
            m[8] * v.x + m[9] * v.y + m[10] * v.z + m[11] * v.w,
            m[12] * v.x + m[13] * v.y + m[14] * v.z + m[15] * v.w,
        )
    }

    /// Standard 4x4 product. `a.mul_mat(b)` acting on a column vector
    /// applies `b` first.
    pub fn mul_mat(&self, other: &Mat4) -> Mat4 {
        let mut elems = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * other.at(k, col);
                }
                elems[row * 4 + col] = sum;
            }
        }
        Mat4::new(elems)
    }

    /// Extract column `col` (0-based) as a vector.
    pub fn col(&self, col: usize) -> Vec4 {
        Vec4::new(
            self.elems[col],
            self.elems[col + 4],
            self.elems[col + 8],
            self.elems[col + 12],
        )
    }

    /// Exact comparison against the identity. Diagnostic predicate only;
    /// never used for control flow.
    pub fn is_identity(&self) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                if self.at(row, col) != expected {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "[{:8.2} {:8.2} {:8.2} {:8.2}]",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2),
                self.at(row, 3)
            )?;
        }
        Ok(())
    }
}
