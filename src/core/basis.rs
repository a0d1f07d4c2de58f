use ndarray::Array1;

/// Evaluates the B-spline basis function B_i,k(x) using the Cox-de Boor
/// recursion formula.
///
/// # Arguments
/// * `i` - Index of the B-spline basis function (0-indexed).
/// * `degree` - Degree of the piecewise polynomial (k). Order is `k + 1`.
/// * `x` - Evaluation point.
/// * `knots` - Knot vector T = {t_0, t_1, ..., t_{n + k}}, sorted
///   non-decreasing, with `n = knots.len() - degree - 1` basis functions.
///
/// # Returns
/// The value of the B-spline basis function B_i,k(x).
///
/// The base case uses the half-open convention: B_i,0(x) is 1 on
/// `[t_i, t_{i+1})` and 0 elsewhere, so `x == t_i` belongs to the interval
/// starting at `t_i`, never to the one ending there.
///
/// Degenerate (zero-width) spans are detected by *exact* floating-point
/// equality and contribute exactly 0.0; near-equal knots are treated as
/// distinct spans. Knot vectors are typically built from exact integer or
/// rational values, so no tolerance is applied.
///
/// This is the straightforward recursive definition with no memoization:
/// both recursive branches are re-derived on every call, so the cost grows
/// exponentially in `degree`. Use [`crate::core::spline::BSpline`] when
/// efficiency matters; this function exists as a reference oracle.
///
/// The caller must keep all knot accesses in range, i.e.
/// `i + degree + 1 < knots.len()`; violating that panics on indexing.
pub fn b_spline_basis(i: usize, degree: usize, x: f64, knots: &Array1<f64>) -> f64 {
    if degree == 0 {
        return if knots[i] <= x && x < knots[i + 1] {
            1.0
        } else {
            0.0
        };
    }

    // Left term: (x - t_i) / (t_{i+k} - t_i) * B_i,k-1(x)
    let c1 = if knots[i + degree] == knots[i] {
        0.0
    } else {
        (x - knots[i]) / (knots[i + degree] - knots[i]) * b_spline_basis(i, degree - 1, x, knots)
    };

    // Right term: (t_{i+k+1} - x) / (t_{i+k+1} - t_{i+1}) * B_{i+1},k-1(x)
    let c2 = if knots[i + degree + 1] == knots[i + 1] {
        0.0
    } else {
        (knots[i + degree + 1] - x) / (knots[i + degree + 1] - knots[i + 1])
            * b_spline_basis(i + 1, degree - 1, x, knots)
    };

    c1 + c2
}

/// Evaluates the spline `sum_i c_i * B_i,k(x)` over all `n` basis functions,
/// where `n = knots.len() - degree - 1`.
///
/// # Arguments
/// * `x` - Evaluation point.
/// * `degree` - Degree of the B-spline (k).
/// * `knots` - Knot vector T, sorted non-decreasing.
/// * `coefficients` - B-spline coefficients c_i, at least `n` of them.
///
/// # Returns
/// The spline value at `x`.
///
/// Outside the base interval `[t_k, t_n]` the result is whatever the raw
/// recurrence produces (the active basis functions decay to zero), unlike
/// [`crate::core::spline::BSpline::eval`] which extrapolates the boundary
/// polynomial pieces.
///
/// # Panics
/// Insufficient knots (`n < degree + 1`) or coefficients
/// (`coefficients.len() < n`) are caller-contract violations and panic;
/// they are not recoverable runtime states.
pub fn evaluate_spline(
    x: f64,
    degree: usize,
    knots: &Array1<f64>,
    coefficients: &Array1<f64>,
) -> f64 {
    assert!(
        knots.len() >= 2 * (degree + 1),
        "Too few knots ({}) for degree {}: need at least {} so that n >= degree + 1.",
        knots.len(),
        degree,
        2 * (degree + 1)
    );
    let n = knots.len() - degree - 1;
    assert!(
        coefficients.len() >= n,
        "Too few coefficients ({}) for {} basis functions.",
        coefficients.len(),
        n
    );

    (0..n)
        .map(|i| coefficients[i] * b_spline_basis(i, degree, x, knots))
        .sum()
}
