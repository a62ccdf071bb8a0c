use serde::{Deserialize, Serialize};

use crate::error::{FirError, Result};

/// Default stopband attenuation target in dB
pub const DEFAULT_RIPPLE_DB: f64 = 60.0;

/// Default width of the transition band in Hz
pub const DEFAULT_TRANSITION_WIDTH_HZ: f64 = 5.0;

fn default_ripple_db() -> f64 {
    DEFAULT_RIPPLE_DB
}

fn default_transition_width_hz() -> f64 {
    DEFAULT_TRANSITION_WIDTH_HZ
}

/// Filter configuration supplied by the caller
///
/// Only `lowcut` gives a lowpass, only `highcut` gives a highpass,
/// both give a bandpass over `[lowcut, highcut]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Sampling rate in Hz
    pub fs: f64,
    pub lowcut: Option<f64>,
    pub highcut: Option<f64>,
    /// Stopband attenuation target in dB
    #[serde(default = "default_ripple_db")]
    pub ripple_db: f64,
    /// Width of the transition band in Hz
    #[serde(default = "default_transition_width_hz")]
    pub transition_width_hz: f64,
}

impl FilterSpec {
    pub fn new(fs: f64) -> Self {
        Self {
            fs,
            lowcut: None,
            highcut: None,
            ripple_db: DEFAULT_RIPPLE_DB,
            transition_width_hz: DEFAULT_TRANSITION_WIDTH_HZ,
        }
    }

    pub fn lowpass(fs: f64, cutoff: f64) -> Self {
        Self::new(fs).with_lowcut(cutoff)
    }

    pub fn highpass(fs: f64, cutoff: f64) -> Self {
        Self::new(fs).with_highcut(cutoff)
    }

    pub fn bandpass(fs: f64, lowcut: f64, highcut: f64) -> Self {
        Self::new(fs).with_lowcut(lowcut).with_highcut(highcut)
    }

    pub fn with_lowcut(mut self, lowcut: f64) -> Self {
        self.lowcut = Some(lowcut);
        self
    }

    pub fn with_highcut(mut self, highcut: f64) -> Self {
        self.highcut = Some(highcut);
        self
    }

    pub fn with_ripple_db(mut self, ripple_db: f64) -> Self {
        self.ripple_db = ripple_db;
        self
    }

    pub fn with_transition_width_hz(mut self, transition_width_hz: f64) -> Self {
        self.transition_width_hz = transition_width_hz;
        self
    }

    /// Half the sampling rate
    pub fn nyquist(&self) -> f64 {
        self.fs * 0.5
    }

    /// Transition width relative to the Nyquist rate
    pub fn normalized_transition_width(&self) -> f64 {
        self.transition_width_hz / self.nyquist()
    }

    /// Resolve the response mode and normalized band edges
    pub fn band(&self) -> Result<FilterBand> {
        FilterBand::from_cutoffs(self.fs, self.lowcut, self.highcut)
    }
}

/// Response mode with band edges normalized to the Nyquist rate (0..1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterBand {
    Lowpass { cutoff: f64 },
    Highpass { cutoff: f64 },
    Bandpass { low: f64, high: f64 },
}

impl FilterBand {
    /// Build a band from cutoffs in Hz.
    ///
    /// Fails with `InvalidSpec` when `fs` is not a positive finite number,
    /// both cutoffs are missing, a normalized edge falls outside (0, 1)
    /// or the bandpass edges are not strictly increasing.
    pub fn from_cutoffs(fs: f64, lowcut: Option<f64>, highcut: Option<f64>) -> Result<Self> {
        if !fs.is_finite() || fs <= 0.0 {
            return Err(FirError::InvalidSpec(format!(
                "sample rate must be a positive number, got {}",
                fs
            )));
        }
        let nyquist = fs * 0.5;

        let band = match (lowcut, highcut) {
            (None, None) => {
                return Err(FirError::InvalidSpec(
                    "at least one of lowcut or highcut is required".to_string(),
                ))
            }
            (None, Some(highcut)) => FilterBand::Highpass {
                cutoff: highcut / nyquist,
            },
            (Some(lowcut), None) => FilterBand::Lowpass {
                cutoff: lowcut / nyquist,
            },
            (Some(lowcut), Some(highcut)) => {
                if !(lowcut < highcut) {
                    return Err(FirError::InvalidSpec(format!(
                        "bandpass edges must satisfy lowcut < highcut, got {} >= {}",
                        lowcut, highcut
                    )));
                }
                FilterBand::Bandpass {
                    low: lowcut / nyquist,
                    high: highcut / nyquist,
                }
            }
        };

        band.validate()?;
        Ok(band)
    }

    /// Check every edge lies strictly between 0 and the Nyquist rate
    pub fn validate(&self) -> Result<()> {
        for edge in self.edges() {
            if !(edge > 0.0 && edge < 1.0) {
                return Err(FirError::InvalidSpec(format!(
                    "normalized cutoff {} must lie strictly between 0 and 1 (Nyquist)",
                    edge
                )));
            }
        }
        if let FilterBand::Bandpass { low, high } = *self {
            if !(low < high) {
                return Err(FirError::InvalidSpec(format!(
                    "bandpass edges must be strictly increasing, got [{}, {}]",
                    low, high
                )));
            }
        }
        Ok(())
    }

    /// Cutoff edges as given, without the implied 0 / 1 endpoints
    pub fn edges(&self) -> Vec<f64> {
        match *self {
            FilterBand::Lowpass { cutoff } | FilterBand::Highpass { cutoff } => vec![cutoff],
            FilterBand::Bandpass { low, high } => vec![low, high],
        }
    }

    /// Whether the pass band includes DC
    pub fn passes_dc(&self) -> bool {
        matches!(self, FilterBand::Lowpass { .. })
    }

    /// Whether the pass band includes the Nyquist frequency
    pub fn passes_nyquist(&self) -> bool {
        matches!(self, FilterBand::Highpass { .. })
    }

    /// Pass bands as `(left, right)` pairs, normalized to Nyquist
    pub fn pass_bands(&self) -> Vec<(f64, f64)> {
        match *self {
            FilterBand::Lowpass { cutoff } => vec![(0.0, cutoff)],
            FilterBand::Highpass { cutoff } => vec![(cutoff, 1.0)],
            FilterBand::Bandpass { low, high } => vec![(low, high)],
        }
    }

    /// Normalized frequency at which the design is scaled to unit gain
    pub fn scale_frequency(&self) -> f64 {
        if self.passes_dc() {
            return 0.0;
        }
        if self.passes_nyquist() {
            return 1.0;
        }
        let edges = self.edges();
        0.5 * (edges[0] + edges[edges.len() - 1])
    }

    pub fn name(&self) -> &'static str {
        match self {
            FilterBand::Lowpass { .. } => "lowpass",
            FilterBand::Highpass { .. } => "highpass",
            FilterBand::Bandpass { .. } => "bandpass",
        }
    }
}

/// Derived filter design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    pub num_taps: usize,
    /// Kaiser window shape parameter
    pub beta: f64,
    pub band: FilterBand,
    pub taps: Vec<f64>,
}

impl DesignResult {
    /// Group delay of the linear-phase design, in samples
    pub fn group_delay(&self) -> f64 {
        (self.num_taps as f64 - 1.0) * 0.5
    }
}

/// Name a host gives the filtered copy of a column
pub fn filtered_column_name(name: &str) -> String {
    format!("filtered_{}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_defaults() {
        let spec = FilterSpec::new(100.0);
        assert_eq!(spec.ripple_db, 60.0);
        assert_eq!(spec.transition_width_hz, 5.0);
        assert_eq!(spec.nyquist(), 50.0);
        assert!((spec.normalized_transition_width() - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_band_resolution() {
        assert_eq!(
            FilterSpec::lowpass(100.0, 10.0).band().unwrap(),
            FilterBand::Lowpass { cutoff: 0.2 }
        );
        assert_eq!(
            FilterSpec::highpass(100.0, 10.0).band().unwrap(),
            FilterBand::Highpass { cutoff: 0.2 }
        );
        assert_eq!(
            FilterSpec::bandpass(100.0, 3.0, 10.0).band().unwrap(),
            FilterBand::Bandpass { low: 0.06, high: 0.2 }
        );
    }

    #[test]
    fn test_band_requires_a_cutoff() {
        let err = FilterSpec::new(100.0).band().unwrap_err();
        assert!(err.is_invalid_spec());
    }

    #[test]
    fn test_band_rejects_unordered_edges() {
        assert!(FilterSpec::bandpass(100.0, 10.0, 3.0).band().unwrap_err().is_invalid_spec());
        assert!(FilterSpec::bandpass(100.0, 5.0, 5.0).band().unwrap_err().is_invalid_spec());
    }

    #[test]
    fn test_band_rejects_out_of_range_edges() {
        assert!(FilterSpec::lowpass(100.0, 50.0).band().is_err());
        assert!(FilterSpec::lowpass(100.0, 0.0).band().is_err());
        assert!(FilterSpec::highpass(100.0, -1.0).band().is_err());
        assert!(FilterSpec::bandpass(100.0, 3.0, 60.0).band().is_err());
        assert!(FilterSpec::lowpass(100.0, f64::NAN).band().is_err());
    }

    #[test]
    fn test_band_rejects_bad_sample_rate() {
        assert!(FilterSpec::lowpass(0.0, 1.0).band().unwrap_err().is_invalid_spec());
        assert!(FilterSpec::lowpass(-10.0, 1.0).band().is_err());
        assert!(FilterSpec::lowpass(f64::INFINITY, 1.0).band().is_err());
    }

    #[test]
    fn test_scale_frequency() {
        assert_eq!(FilterBand::Lowpass { cutoff: 0.3 }.scale_frequency(), 0.0);
        assert_eq!(FilterBand::Highpass { cutoff: 0.3 }.scale_frequency(), 1.0);
        let center = FilterBand::Bandpass { low: 0.2, high: 0.4 }.scale_frequency();
        assert!((center - 0.3).abs() < 1e-15);
    }

    #[test]
    fn test_band_passes_dc_and_nyquist() {
        let lowpass = FilterBand::Lowpass { cutoff: 0.3 };
        let highpass = FilterBand::Highpass { cutoff: 0.3 };
        let bandpass = FilterBand::Bandpass { low: 0.2, high: 0.4 };
        assert!(lowpass.passes_dc() && !lowpass.passes_nyquist());
        assert!(!highpass.passes_dc() && highpass.passes_nyquist());
        assert!(!bandpass.passes_dc() && !bandpass.passes_nyquist());
    }

    #[test]
    fn test_spec_deserialize_applies_defaults() {
        let spec: FilterSpec = serde_json::from_str(r#"{"fs": 250.0, "lowcut": 1.0, "highcut": null}"#).unwrap();
        assert_eq!(spec.ripple_db, DEFAULT_RIPPLE_DB);
        assert_eq!(spec.transition_width_hz, DEFAULT_TRANSITION_WIDTH_HZ);
        assert_eq!(spec.lowcut, Some(1.0));
    }

    #[test]
    fn test_filtered_column_name() {
        assert_eq!(filtered_column_name("eeg"), "filtered_eeg");
    }
}
