//! Kaiser-window FIR design
//!
//! Order estimation follows Kaiser's design equations and tap synthesis is the
//! windowed-sinc method. Lengths use the `7.95` constant with no parity
//! adjustment, and taps are scaled to unit gain at one reference frequency.

use std::f64::consts::PI;

use crate::error::{FirError, Result};
use crate::types::{DesignResult, FilterBand, FilterSpec};
use crate::window::{kaiser_beta, kaiser_window};

/// Below this attenuation the Kaiser length formula is not valid
pub const MIN_RIPPLE_DB: f64 = 8.0;

/// Longest filter the design routines will build
pub const MAX_TAPS: usize = 1 << 24;

/// Filter length and Kaiser shape parameter for a target attenuation.
///
/// # Arguments
/// * `ripple_db` - Stopband attenuation target in dB (> 0)
/// * `transition_width` - Transition width relative to the Nyquist rate, in (0, 1)
///
/// # Returns
/// `(num_taps, beta)` where `num_taps = ceil((A - 7.95) / (2.285 * pi * width) + 1)`.
/// No parity adjustment is made, so `num_taps` may be even.
pub fn compute_order_and_beta(ripple_db: f64, transition_width: f64) -> Result<(usize, f64)> {
    if !ripple_db.is_finite() || ripple_db <= 0.0 {
        return Err(FirError::InvalidSpec(format!(
            "ripple must be a positive number of dB, got {}",
            ripple_db
        )));
    }
    if !(transition_width > 0.0 && transition_width < 1.0) {
        return Err(FirError::InvalidSpec(format!(
            "normalized transition width must lie strictly between 0 and 1, got {}",
            transition_width
        )));
    }
    if ripple_db < MIN_RIPPLE_DB {
        return Err(FirError::NumericDegeneracy(format!(
            "ripple of {} dB is too small for the Kaiser formula (minimum {} dB)",
            ripple_db, MIN_RIPPLE_DB
        )));
    }

    let beta = kaiser_beta(ripple_db);
    let length = ((ripple_db - 7.95) / 2.285 / (PI * transition_width) + 1.0).ceil();
    if !length.is_finite() || length < 1.0 {
        return Err(FirError::NumericDegeneracy(format!(
            "computed filter length {} is not positive",
            length
        )));
    }
    if length > MAX_TAPS as f64 {
        return Err(FirError::NumericDegeneracy(format!(
            "computed filter length {} exceeds the maximum of {} taps",
            length, MAX_TAPS
        )));
    }

    Ok((length as usize, beta))
}

/// Windowed-sinc taps for the band selected by `lowcut` / `highcut`.
///
/// `lowcut` alone designs a lowpass, `highcut` alone a highpass and both a
/// bandpass over `[lowcut, highcut]`. Cutoffs are in Hz.
pub fn design_taps(
    num_taps: usize,
    beta: f64,
    fs: f64,
    lowcut: Option<f64>,
    highcut: Option<f64>,
) -> Result<Vec<f64>> {
    let band = FilterBand::from_cutoffs(fs, lowcut, highcut)?;
    taps_for_band(num_taps, beta, &band)
}

/// Windowed-sinc taps for an already resolved band.
///
/// The ideal response is built from the pass band edges, multiplied by a
/// Kaiser window and scaled to unit gain at the band's reference frequency
/// (DC for lowpass, Nyquist for highpass, band center for bandpass).
pub fn taps_for_band(num_taps: usize, beta: f64, band: &FilterBand) -> Result<Vec<f64>> {
    if num_taps == 0 {
        return Err(FirError::NumericDegeneracy(
            "filter must have at least one tap".to_string(),
        ));
    }
    if num_taps > MAX_TAPS {
        return Err(FirError::NumericDegeneracy(format!(
            "{} taps exceeds the maximum of {}",
            num_taps, MAX_TAPS
        )));
    }
    band.validate()?;
    if band.passes_nyquist() && num_taps % 2 == 0 {
        return Err(FirError::InvalidSpec(format!(
            "a {} filter needs an odd number of taps, got {}",
            band.name(),
            num_taps
        )));
    }

    let alpha = 0.5 * (num_taps as f64 - 1.0);
    let offsets: Vec<f64> = (0..num_taps).map(|n| n as f64 - alpha).collect();

    let mut taps = vec![0.0; num_taps];
    for (left, right) in band.pass_bands() {
        for (h, &m) in taps.iter_mut().zip(offsets.iter()) {
            *h += right * sinc(right * m) - left * sinc(left * m);
        }
    }

    let window = kaiser_window(num_taps, beta);
    for (h, w) in taps.iter_mut().zip(window.iter()) {
        *h *= w;
    }

    let scale_frequency = band.scale_frequency();
    let gain: f64 = taps
        .iter()
        .zip(offsets.iter())
        .map(|(h, m)| h * (PI * m * scale_frequency).cos())
        .sum();
    if gain == 0.0 || !gain.is_finite() {
        return Err(FirError::NumericDegeneracy(format!(
            "{} design has no gain at its reference frequency",
            band.name()
        )));
    }
    for h in taps.iter_mut() {
        *h /= gain;
    }

    Ok(taps)
}

/// Full design from a filter specification
pub fn design(spec: &FilterSpec) -> Result<DesignResult> {
    let band = spec.band()?;
    let (num_taps, beta) = compute_order_and_beta(spec.ripple_db, spec.normalized_transition_width())?;

    log::debug!(
        "Kaiser design: {} with {} taps, beta={:.5} (ripple={} dB, width={} Hz, fs={} Hz)",
        band.name(),
        num_taps,
        beta,
        spec.ripple_db,
        spec.transition_width_hz,
        spec.fs
    );

    let taps = taps_for_band(num_taps, beta, &band)?;

    Ok(DesignResult {
        num_taps,
        beta,
        band,
        taps,
    })
}

/// Normalized sinc, `sin(pi x) / (pi x)`
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let y = PI * x;
        y.sin() / y
    }
}
