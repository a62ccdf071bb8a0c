use rayon::prelude::*;
use std::f64::consts::PI;

use crate::design::design;
use crate::error::{FirError, Result};
use crate::types::FilterSpec;

/// Causal direct-form FIR filter with zero initial state.
///
/// `y[n] = sum_k taps[k] * signal[n - k]`, samples before the start of the
/// signal count as zero. The output has the same length as `signal`.
pub fn apply_filter(signal: &[f64], taps: &[f64]) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(FirError::InvalidSpec("input signal is empty".to_string()));
    }
    if taps.is_empty() {
        return Err(FirError::NumericDegeneracy(
            "filter has no tap coefficients".to_string(),
        ));
    }

    let filtered: Vec<f64> = (0..signal.len())
        .map(|n| {
            let history = n.min(taps.len() - 1);
            (0..=history).map(|k| taps[k] * signal[n - k]).sum::<f64>()
        })
        .collect();

    Ok(filtered)
}

/// Design a Kaiser-window FIR filter from `spec` and run `signal` through it
pub fn kaiser_filter(signal: &[f64], spec: &FilterSpec) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(FirError::InvalidSpec("input signal is empty".to_string()));
    }

    let design = design(spec)?;
    log::info!(
        "Filtering {} samples with {}-tap {} filter",
        signal.len(),
        design.num_taps,
        design.band.name()
    );

    apply_filter(signal, &design.taps)
}

/// Filter several independent signals with one shared design.
///
/// The taps are designed once and the signals are filtered in parallel.
/// Results keep the input order. Any empty signal fails the whole batch
/// before filtering starts.
pub fn kaiser_filter_batch<S>(signals: &[S], spec: &FilterSpec) -> Result<Vec<Vec<f64>>>
where
    S: AsRef<[f64]> + Sync,
{
    if let Some(index) = signals.iter().position(|s| s.as_ref().is_empty()) {
        return Err(FirError::InvalidSpec(format!(
            "input signal {} is empty",
            index
        )));
    }

    let design = design(spec)?;
    log::info!(
        "Filtering {} signals with {}-tap {} filter",
        signals.len(),
        design.num_taps,
        design.band.name()
    );

    signals
        .par_iter()
        .map(|signal| apply_filter(signal.as_ref(), &design.taps))
        .collect()
}

/// Magnitude of the frequency response of `taps` at `freq_hz`
pub fn magnitude_response(taps: &[f64], freq_hz: f64, fs: f64) -> f64 {
    let omega = 2.0 * PI * freq_hz / fs;
    let (re, im) = taps
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(re, im), (k, &h)| {
            let phase = omega * k as f64;
            (re + h * phase.cos(), im - h * phase.sin())
        });
    re.hypot(im)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_filter_impulse_response() {
        let taps = [0.5, 0.25, 0.125];
        let mut impulse = vec![0.0; 6];
        impulse[0] = 1.0;
        let out = apply_filter(&impulse, &taps).unwrap();
        assert_eq!(out, vec![0.5, 0.25, 0.125, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_apply_filter_zero_initial_state() {
        let out = apply_filter(&[1.0, 1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(out, vec![1.0, 3.0, 6.0, 6.0]);
    }

    #[test]
    fn test_apply_filter_taps_longer_than_signal() {
        let out = apply_filter(&[2.0, 4.0], &[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(out, vec![2.0, 6.0]);
    }

    #[test]
    fn test_apply_filter_rejects_empty_input() {
        assert!(apply_filter(&[], &[1.0]).unwrap_err().is_invalid_spec());
        assert!(apply_filter(&[1.0], &[]).unwrap_err().is_numeric_degeneracy());
    }

    #[test]
    fn test_kaiser_filter_rejects_empty_signal_before_design() {
        // Spec is also invalid; the signal check comes first.
        let err = kaiser_filter(&[], &FilterSpec::new(100.0)).unwrap_err();
        assert_eq!(err, FirError::InvalidSpec("input signal is empty".to_string()));
    }

    #[test]
    fn test_batch_matches_single() {
        let spec = FilterSpec::lowpass(100.0, 10.0);
        let a: Vec<f64> = (0..300).map(|n| (n as f64 * 0.37).sin()).collect();
        let b: Vec<f64> = (0..120).map(|n| (n % 7) as f64).collect();

        let batch = kaiser_filter_batch(&[a.clone(), b.clone()], &spec).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], kaiser_filter(&a, &spec).unwrap());
        assert_eq!(batch[1], kaiser_filter(&b, &spec).unwrap());
    }

    #[test]
    fn test_batch_rejects_any_empty_signal() {
        let spec = FilterSpec::lowpass(100.0, 10.0);
        let signals: Vec<Vec<f64>> = vec![vec![1.0; 10], vec![]];
        let err = kaiser_filter_batch(&signals, &spec).unwrap_err();
        assert!(err.is_invalid_spec());
    }

    #[test]
    fn test_magnitude_response_of_moving_average() {
        let taps = [0.5, 0.5];
        assert!((magnitude_response(&taps, 0.0, 100.0) - 1.0).abs() < 1e-15);
        assert!(magnitude_response(&taps, 50.0, 100.0) < 1e-15);
        let quarter = magnitude_response(&taps, 25.0, 100.0);
        assert!((quarter - 0.5f64.sqrt()).abs() < 1e-12);
    }
}
