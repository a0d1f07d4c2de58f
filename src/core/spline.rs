use ndarray::Array1;

use crate::core::knots::validate_knots;

/// A validated one-dimensional B-spline `s(x) = sum_i c_i * B_i,k(x)`.
///
/// Construction rejects malformed `(knots, coefficients, degree)`
/// combinations up front, so evaluation never has to recover from a bad
/// knot vector deep inside the recurrence. Evaluation uses the iterative
/// de Boor algorithm (the Cox-de Boor triangular table computed bottom-up),
/// which costs `O(degree^2)` per point instead of the `O(2^degree)` of the
/// naive recursion in [`crate::core::basis`].
///
/// For `x` outside the base interval `[t_k, t_n]` the first or last
/// polynomial piece active on the base interval is extrapolated. This
/// differs from the naive evaluator, which lets the recurrence decay to
/// zero outside the basis functions' support.
#[derive(Debug, Clone)]
pub struct BSpline {
    knots: Array1<f64>,
    coefficients: Array1<f64>,
    degree: usize,
}

impl BSpline {
    /// Creates a B-spline from a knot vector, coefficients and degree.
    ///
    /// Requires `knots.len() == coefficients.len() + degree + 1`, a
    /// non-decreasing knot vector, nonzero support for every basis
    /// function and a nonempty base interval; see
    /// [`validate_knots`] for the individual checks.
    ///
    /// # Returns
    /// The spline, or an error string describing the first violated
    /// requirement.
    pub fn new(
        knots: Array1<f64>,
        coefficients: Array1<f64>,
        degree: usize,
    ) -> Result<BSpline, String> {
        validate_knots(&knots, degree, coefficients.len())?;
        Ok(BSpline {
            knots,
            coefficients,
            degree,
        })
    }

    /// Returns the knot vector.
    pub fn knots(&self) -> &Array1<f64> {
        &self.knots
    }

    /// Returns the coefficients.
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// Returns the degree (k) of the piecewise polynomial.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the base interval `(t_k, t_n)` over which the spline is
    /// fully defined by all active basis functions.
    pub fn base_interval(&self) -> (f64, f64) {
        (
            self.knots[self.degree],
            self.knots[self.coefficients.len()],
        )
    }

    /// Evaluates the spline at `x` with the iterative de Boor algorithm.
    ///
    /// Knot-span membership follows the half-open convention: `x == t_i`
    /// selects the span starting at `t_i`. Points outside the base
    /// interval are extrapolated from the boundary polynomial pieces.
    pub fn eval(&self, x: f64) -> f64 {
        let span = self.knot_span(x);
        self.de_boor(x, span)
    }

    /// Evaluates the spline at every point of `xs`.
    pub fn eval_many(&self, xs: &Array1<f64>) -> Array1<f64> {
        xs.mapv(|x| self.eval(x))
    }

    /// Finds the index `s` of the knot span used for evaluating at `x`,
    /// such that `t_s <= x < t_{s+1}` with nonzero width and
    /// `degree <= s <= n - 1`.
    ///
    /// For `x` outside the base interval the span is clamped to the first
    /// or last nonzero-width span of the base interval, which is what makes
    /// `eval` extrapolate the boundary pieces. Validation guarantees the
    /// base interval is nonempty, so the clamping loops terminate on a
    /// usable span.
    fn knot_span(&self, x: f64) -> usize {
        let k = self.degree;
        let n = self.coefficients.len();

        // First index whose knot exceeds x; repeated knots equal to x are
        // skipped, so an in-range result always bounds a nonzero-width span.
        // Linear scan: knot vectors are short, no point binary-searching.
        let upper = self
            .knots
            .iter()
            .position(|&knot| knot > x)
            .unwrap_or(self.knots.len());

        if upper <= k {
            // x < t_k: extrapolate the leftmost piece.
            let mut span = k;
            while span < n - 1 && self.knots[span] == self.knots[span + 1] {
                span += 1;
            }
            span
        } else if upper > n {
            // x >= t_n: extrapolate the rightmost piece.
            let mut span = n - 1;
            while span > k && self.knots[span] == self.knots[span + 1] {
                span -= 1;
            }
            span
        } else {
            upper - 1
        }
    }

    /// Computes de Boor's triangular table bottom-up for the span `s`.
    ///
    /// Level r is written over the slots of level r-1 that are no longer
    /// needed; after `degree` levels the answer sits in the last slot.
    fn de_boor(&self, x: f64, span: usize) -> f64 {
        let k = self.degree;

        let mut d: Vec<f64> = (0..=k)
            .map(|j| self.coefficients[j + span - k])
            .collect();

        for r in 1..=k {
            for j in (r..=k).rev() {
                let left = self.knots[j + span - k];
                let right = self.knots[j + 1 + span - r];
                // right index > span >= left index, and t_span < t_{span+1},
                // so the width is never zero here.
                let alpha = (x - left) / (right - left);
                d[j] = (1.0 - alpha) * d[j - 1] + alpha * d[j];
            }
        }

        d[k]
    }
}
