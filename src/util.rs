use super::*;
use super::matrix::Matrix;

/// Renders a matrix as a `"{rows}x{cols}:"` header followed by one bracketed
/// line per row. Values are rounded to `precision` decimal digits for
/// display; an integral rounded value prints without a fractional part.
pub fn format_matrix<S: Scalar>(matrix: &Matrix<S>, precision: i32) -> String {
    let mut out = format!("{}:\n", matrix.shape());
    for row in matrix.values().chunks(matrix.cols()) {
        out.push('[');
        for (idx, value) in row.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out += &format!("{}", value.round_to(precision));
        }
        out.push_str("]\n");
    }
    out
}
