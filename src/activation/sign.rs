/// Sign activation of a perceptron.
///
/// Returns `1.0` for `z >= 0.0` and `-1.0` otherwise. A weighted sum of exactly
/// zero counts as positive; this is not a three-way signum.
pub fn sign(z: f64) -> f64 {
    if z < 0.0 { -1.0 } else { 1.0 }
}
