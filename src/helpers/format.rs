/// Renders `coeffs` as a linear expression over `x1..xn`, e.g. `3 x1 - x3`.
/// Zero terms are skipped; an all-zero expression renders as `0`.
pub fn linear_expr(coeffs: &[f64]) -> String {
    let mut out = String::new();
    for (idx, &coeff) in coeffs.iter().enumerate() {
        if coeff == 0.0 {
            continue;
        }

        let magnitude = coeff.abs();
        if out.is_empty() {
            if coeff < 0.0 {
                out.push('-');
            }
        } else if coeff < 0.0 {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }

        if magnitude != 1.0 {
            out.push_str(&format!("{} ", magnitude));
        }
        out.push_str(&format!("x{}", idx + 1));
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}
