use super::*;
use super::matrix::{Matrix, MatrixError, Shape};

impl<S: Scalar> Matrix<S> {
    /// Matrix inverse. 2x2 inputs take the closed-form path and report a
    /// zero determinant as `Singular`. Larger inputs run Gauss-Jordan
    /// elimination on the augmented `[A | I]` workspace; when no nonzero
    /// pivot can be swapped into a column, elimination stops and whatever
    /// the right-hand block holds is returned as a partial inverse instead
    /// of an error.
    pub fn inverse(&self) -> Result<Matrix<S>, MatrixError> {
        let n = self.shape.rows;
        if !self.shape.is_square() {
            return Err(MatrixError::NotSquare { shape: self.shape });
        }

        if n == 2 {
            let (a, b, c, d) = (self.values[0], self.values[1], self.values[2], self.values[3]);
            let det = a * d - b * c;
            if det == S::zero() {
                return Err(MatrixError::Singular { shape: self.shape });
            }
            let adjugate = Matrix {
                shape: self.shape,
                values: vec![d, -b, -c, a],
            };
            return Ok(adjugate.scale(det.recip()));
        }

        // [A | I], flat with stride 2n.
        let stride = 2 * n;
        let mut aug = vec![S::zero(); n * stride];
        for r in 0..n {
            aug[r * stride..r * stride + n].copy_from_slice(&self.values[r * n..(r + 1) * n]);
            aug[r * stride + n + r] = S::one();
        }

        for p in 0..n {
            if aug[p * stride + p] == S::zero() {
                // Zero-avoidance only: first nonzero entry strictly below
                // the diagonal, no magnitude comparison.
                match (p + 1..n).find(|&r| aug[r * stride + p] != S::zero()) {
                    Some(r) => swap_rows(&mut aug, stride, p, r),
                    None => return Ok(right_block(&aug, n, stride)),
                }
            }

            let pivot = aug[p * stride + p];
            for c in 0..stride {
                aug[p * stride + c] /= pivot;
            }

            for r in 0..n {
                if r == p {
                    continue;
                }
                let z = aug[r * stride + p];
                if z == S::zero() {
                    continue;
                }
                for c in 0..stride {
                    let v = aug[p * stride + c];
                    aug[r * stride + c] -= z * v;
                }
            }
        }

        Ok(right_block(&aug, n, stride))
    }

    /// Determinant by cofactor expansion along row 0. Exponential in the
    /// matrix size; fine for the small inputs this crate targets.
    pub fn determinant(&self) -> Result<S, MatrixError> {
        if !self.shape.is_square() {
            return Err(MatrixError::NotSquare { shape: self.shape });
        }
        Ok(det_expand(&self.values, self.shape.rows))
    }
}

fn det_expand<S: Scalar>(values: &[S], n: usize) -> S {
    if n == 1 {
        return values[0];
    }
    if n == 2 {
        return values[0] * values[3] - values[1] * values[2];
    }

    let mut det = S::zero();
    let mut minor = Vec::with_capacity((n - 1) * (n - 1));
    for skip in 0..n {
        minor.clear();
        for r in 1..n {
            for c in 0..n {
                if c != skip {
                    minor.push(values[r * n + c]);
                }
            }
        }

        let term = values[skip] * det_expand(&minor, n - 1);
        if skip % 2 == 0 {
            det += term;
        } else {
            det -= term;
        }
    }
    det
}

fn swap_rows<S: Scalar>(aug: &mut [S], stride: usize, a: usize, b: usize) {
    let (lo, hi) = (a.min(b), a.max(b));
    let (top, bottom) = aug.split_at_mut(hi * stride);
    top[lo * stride..lo * stride + stride].swap_with_slice(&mut bottom[..stride]);
}

fn right_block<S: Scalar>(aug: &[S], n: usize, stride: usize) -> Matrix<S> {
    let mut values = Vec::with_capacity(n * n);
    for r in 0..n {
        values.extend_from_slice(&aug[r * stride + n..(r + 1) * stride]);
    }
    Matrix { shape: Shape { rows: n, cols: n }, values }
}
