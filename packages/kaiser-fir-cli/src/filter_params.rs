use crate::cli::DesignParams;
use kaiser_fir::FilterSpec;
use std::path::Path;

/// Validate that the input file exists and is a regular file.
pub fn validate_file(file: &str) -> Result<(), String> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(format!("File not found: {}", file));
    }
    if !path.is_file() {
        return Err(format!("Not a file: {}", file));
    }
    Ok(())
}

/// Check the argument combination before any data is read.
///
/// Range checks that depend on the sampling rate are left to the design
/// itself, which reports them as design errors.
pub fn validate_params(params: &DesignParams) -> Result<(), String> {
    if params.lowcut.is_none() && params.highcut.is_none() {
        return Err("At least one of --lowcut or --highcut is required".to_string());
    }
    if !params.fs.is_finite() || params.fs <= 0.0 {
        return Err(format!("--fs must be a positive number, got {}", params.fs));
    }
    if let (Some(low), Some(high)) = (params.lowcut, params.highcut) {
        if low >= high {
            return Err(format!(
                "--lowcut ({}) must be below --highcut ({}) for a bandpass",
                low, high
            ));
        }
    }
    Ok(())
}

/// Build the filter specification from CLI parameters.
pub fn build_spec(params: &DesignParams) -> Result<FilterSpec, String> {
    validate_params(params)?;

    let mut spec = FilterSpec::new(params.fs)
        .with_ripple_db(params.ripple_db)
        .with_transition_width_hz(params.transition_width);
    spec.lowcut = params.lowcut;
    spec.highcut = params.highcut;

    log::debug!("Filter spec: {:?}", spec);
    Ok(spec)
}
