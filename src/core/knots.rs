use ndarray::Array1;

/// Generates a clamped knot vector with uniformly spaced internal knots.
///
/// The boundary values are repeated `degree + 1` times each, so a spline
/// built on this vector interpolates its first and last coefficients at
/// `x_min` and `x_max`.
///
/// # Arguments
/// * `x_min` - Minimum value of the range.
/// * `x_max` - Maximum value of the range.
/// * `num_internal_knots` - Number of knots to place strictly between the boundaries.
/// * `degree` - Degree of the B-spline (k).
///
/// # Returns
/// A `Result` containing the generated knot vector or an error string.
pub fn generate_uniform_knots(
    x_min: f64,
    x_max: f64,
    num_internal_knots: usize,
    degree: usize,
) -> Result<Array1<f64>, String> {
    if x_min > x_max {
        return Err("x_min cannot be greater than x_max.".to_string());
    }
    if x_min == x_max {
        return Err(format!(
            "Cannot build a knot vector on the empty range [{}, {}].",
            x_min, x_max
        ));
    }

    let mut knots_vec = Vec::with_capacity(2 * (degree + 1) + num_internal_knots);

    // degree + 1 repetitions of x_min
    for _ in 0..=degree {
        knots_vec.push(x_min);
    }

    if num_internal_knots > 0 {
        let step = (x_max - x_min) / (num_internal_knots + 1) as f64;
        for i in 1..=num_internal_knots {
            knots_vec.push(x_min + i as f64 * step);
        }
    }

    // degree + 1 repetitions of x_max
    for _ in 0..=degree {
        knots_vec.push(x_max);
    }

    Ok(Array1::from(knots_vec))
}

/// Validates a knot vector against a coefficient count and degree.
///
/// Checks, in order:
/// 1. `knots.len() == num_coefficients + degree + 1`;
/// 2. the knots are non-decreasing;
/// 3. every basis function B_j,k has nonzero support, i.e.
///    `t_{j+k+1} > t_j` for all `j < num_coefficients` (required to avoid
///    an all-degenerate recurrence);
/// 4. the base interval `[t_k, t_n]` is nonempty.
///
/// # Arguments
/// * `knots` - The knot vector to validate.
/// * `degree` - Degree of the B-spline (k).
/// * `num_coefficients` - Expected number of basis functions (n).
///
/// # Returns
/// `Ok(())` if the knot vector is valid, or an error string.
pub fn validate_knots(
    knots: &Array1<f64>,
    degree: usize,
    num_coefficients: usize,
) -> Result<(), String> {
    if num_coefficients < degree + 1 {
        return Err(format!(
            "Need at least degree + 1 = {} coefficients, got {}.",
            degree + 1,
            num_coefficients
        ));
    }
    if knots.len() != num_coefficients + degree + 1 {
        return Err(format!(
            "Invalid knot vector length. Expected {}, got {}. (num_coefficients={}, degree={})",
            num_coefficients + degree + 1,
            knots.len(),
            num_coefficients,
            degree
        ));
    }

    for i in 0..(knots.len() - 1) {
        if knots[i] > knots[i + 1] {
            return Err(format!(
                "Knot vector is not non-decreasing: t_{}={} > t_{}={}",
                i,
                knots[i],
                i + 1,
                knots[i + 1]
            ));
        }
    }

    // Support of B_j,k is [t_j, t_{j+k+1}]; a zero-width support makes the
    // basis function identically zero and its coefficient unreachable.
    for j in 0..num_coefficients {
        if knots[j + degree + 1] <= knots[j] {
            return Err(format!(
                "Basis function {} has empty support: t_{}={} <= t_{}={}.",
                j,
                j + degree + 1,
                knots[j + degree + 1],
                j,
                knots[j]
            ));
        }
    }

    if knots[num_coefficients] <= knots[degree] {
        return Err(format!(
            "Empty base interval: t_{}={} <= t_{}={}.",
            num_coefficients, knots[num_coefficients], degree, knots[degree]
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    const TOL: f64 = 1e-9;

    // Helper for float array comparison
    fn assert_arr_eq(a: &Array1<f64>, b: &Array1<f64>) {
        assert_eq!(a.len(), b.len(), "Array lengths differ.");
        for (i, (val_a, val_b)) in a.iter().zip(b.iter()).enumerate() {
            assert!(
                (val_a - val_b).abs() < TOL,
                "Mismatch at index {}: {} vs {}",
                i,
                val_a,
                val_b
            );
        }
    }

    #[test]
    fn test_generate_uniform_knots_no_internal() {
        let knots = generate_uniform_knots(1.0, 5.0, 0, 2).unwrap();
        assert_arr_eq(&knots, &arr1(&[1.0, 1.0, 1.0, 5.0, 5.0, 5.0]));
    }

    #[test]
    fn test_generate_uniform_knots_few_internal() {
        let knots = generate_uniform_knots(0.0, 4.0, 3, 1).unwrap();
        // step = (4-0)/(3+1) = 1.0; internal knots 1, 2, 3
        assert_arr_eq(&knots, &arr1(&[0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0]));
    }

    #[test]
    fn test_generate_uniform_knots_validates() {
        // The generated vector must pass its own validation:
        // n = len - degree - 1 = 11 - 4 = 7 for degree 3 with 3 internal knots.
        let knots = generate_uniform_knots(0.0, 4.0, 3, 3).unwrap();
        assert_eq!(knots.len(), 11);
        assert!(validate_knots(&knots, 3, 7).is_ok());
    }

    #[test]
    fn test_generate_uniform_knots_empty_range_err() {
        assert!(generate_uniform_knots(5.0, 5.0, 0, 2).is_err());
        assert!(generate_uniform_knots(5.0, 1.0, 1, 2).is_err());
    }

    #[test]
    fn test_validate_knots_valid() {
        // n = 6, k = 2, len = 9.
        let knots = arr1(&[0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0, 4.0]);
        assert!(validate_knots(&knots, 2, 6).is_ok());

        // Uniform, unclamped: n = 4, k = 2, len = 7.
        let uniform = arr1(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(validate_knots(&uniform, 2, 4).is_ok());
    }

    #[test]
    fn test_validate_knots_invalid_length() {
        let knots = arr1(&[0.0, 0.0, 1.0, 2.0, 2.0]);
        // n = 3, k = 2 expects length 6, got 5.
        assert!(validate_knots(&knots, 2, 3).is_err());
    }

    #[test]
    fn test_validate_knots_too_few_coefficients() {
        // n must be at least k + 1 for the spline to be defined anywhere.
        let knots = arr1(&[0.0, 1.0, 2.0, 3.0]);
        assert!(validate_knots(&knots, 2, 1).is_err());
    }

    #[test]
    fn test_validate_knots_not_sorted() {
        let knots = arr1(&[0.0, 0.0, 0.0, 2.0, 1.0, 3.0, 4.0, 4.0, 4.0]);
        assert!(validate_knots(&knots, 2, 6).is_err());
    }

    #[test]
    fn test_validate_knots_empty_support() {
        // n = 3, k = 2, len = 6. B_0,2 has support [t_0, t_3] = [0, 0].
        let knots = arr1(&[0.0, 0.0, 0.0, 0.0, 1.0, 1.0]);
        let err = validate_knots(&knots, 2, 3).unwrap_err();
        assert!(err.contains("empty support"));

        // Clamped [0,0,0,1,1,1] is the valid counterpart: every support
        // spans [0,1].
        let clamped = arr1(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert!(validate_knots(&clamped, 2, 3).is_ok());
    }

    #[test]
    fn test_validate_knots_empty_base_interval() {
        // n = 3, k = 2, len = 6; every support is nonzero-width but
        // [t_2, t_3] = [1, 1] leaves nowhere to evaluate.
        let knots = arr1(&[0.0, 1.0, 1.0, 1.0, 2.0, 3.0]);
        let err = validate_knots(&knots, 2, 3).unwrap_err();
        assert!(err.contains("base interval"));
    }
}
