/// Weighted sum `Σ a[i] * b[i]`, accumulated left to right.
///
/// Callers are responsible for passing equal-length slices; `Dataset` checks
/// this once up front so the hot loop does not have to.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "dot product of unequal-length vectors");
    a.iter().zip(b.iter()).fold(0.0, |acc, (x, y)| acc + x * y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_orthogonal_vectors_is_zero() {
        assert_eq!(dot(&[1.0, 0.0, 0.0], &[0.0, 3.0, -2.0]), 0.0);
    }

    #[test]
    fn dot_matches_hand_computation() {
        // 0.2*0.1 + (-0.6)*(-0.1) + 0.25*(-1.0)
        let z = dot(&[0.2, -0.6, 0.25], &[0.1, -0.1, -1.0]);
        assert!((z - (-0.17)).abs() < 1e-12);
    }

    #[test]
    fn dot_of_empty_slices_is_zero() {
        assert_eq!(dot(&[], &[]), 0.0);
    }
}
