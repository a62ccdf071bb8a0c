//! Kaiser window and its shape parameter

/// Kaiser shape parameter for a stopband attenuation of `ripple_db`.
///
/// Kaiser's empirical fit:
/// - `A > 50`:       `0.1102 (A - 8.7)`
/// - `21 < A <= 50`: `0.5842 (A - 21)^0.4 + 0.07886 (A - 21)`
/// - otherwise:      `0`
pub fn kaiser_beta(ripple_db: f64) -> f64 {
    if ripple_db > 50.0 {
        0.1102 * (ripple_db - 8.7)
    } else if ripple_db > 21.0 {
        0.5842 * (ripple_db - 21.0).powf(0.4) + 0.07886 * (ripple_db - 21.0)
    } else {
        0.0
    }
}

/// Zeroth-order modified Bessel function of the first kind.
///
/// Power series `sum_k ((x/2)^k / k!)^2`, summed until the next term no
/// longer changes the result.
pub fn bessel_i0(x: f64) -> f64 {
    let half_x_sq = 0.25 * x * x;
    let mut sum = 1.0;
    let mut term = 1.0;

    for k in 1..=MAX_SERIES_TERMS {
        let k = k as f64;
        term *= half_x_sq / (k * k);
        sum += term;
        if term <= f64::EPSILON * 1e-2 * sum {
            break;
        }
    }

    sum
}

// Enough for |x| up to several hundred, far beyond any useful beta.
const MAX_SERIES_TERMS: usize = 500;

/// Symmetric Kaiser window of length `len`
///
/// `w[n] = I0(beta * sqrt(1 - ((n - a) / a)^2)) / I0(beta)` with `a = (len - 1) / 2`.
pub fn kaiser_window(len: usize, beta: f64) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let alpha = (len as f64 - 1.0) * 0.5;
            let denom = bessel_i0(beta);
            (0..len)
                .map(|n| {
                    let ratio = (n as f64 - alpha) / alpha;
                    let arg = beta * (1.0 - ratio * ratio).max(0.0).sqrt();
                    bessel_i0(arg) / denom
                })
                .collect()
        }
    }
}
