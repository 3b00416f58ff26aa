use std::io::Write;

/// Renders a weight vector as `w0 =  0.20 , w1 = -0.60 , w2 =  0.25`.
///
/// Each value is printed with two decimals, right-aligned in a five-character
/// field. Vectors longer than three keep the same `, wN = ` pattern.
pub fn format_weights(weights: &[f64]) -> String {
    weights
        .iter()
        .enumerate()
        .map(|(i, w)| format!("w{i} = {w:5.2}"))
        .collect::<Vec<_>>()
        .join(" , ")
}

/// Writes one progress line for `weights` to `out`.
pub fn show_learning<W: Write>(out: &mut W, weights: &[f64]) -> std::io::Result<()> {
    writeln!(out, "{}", format_weights(weights))
}
