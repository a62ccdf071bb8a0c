use crate::cli::ResponseArgs;
use crate::exit_codes;
use crate::filter_params;
use crate::output;
use serde::Serialize;

/// Gain in dB, floored so an exact null stays a finite number in JSON
fn to_db(magnitude: f64) -> f64 {
    20.0 * magnitude.max(f64::MIN_POSITIVE).log10()
}

#[derive(Serialize)]
struct ResponsePoint {
    freq_hz: f64,
    magnitude: f64,
    magnitude_db: f64,
}

pub fn execute(args: ResponseArgs) -> i32 {
    let spec = match filter_params::build_spec(&args.params) {
        Ok(spec) => spec,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    if let Some(freq) = args.freq.iter().find(|f| !(**f >= 0.0 && **f <= spec.nyquist())) {
        eprintln!(
            "Error: frequency {} Hz is outside [0, {}] Hz",
            freq,
            spec.nyquist()
        );
        return exit_codes::INPUT_ERROR;
    }

    let design = match kaiser_fir::design(&spec) {
        Ok(design) => design,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::DESIGN_ERROR;
        }
    };

    let points: Vec<ResponsePoint> = args
        .freq
        .iter()
        .map(|&freq_hz| {
            let magnitude = kaiser_fir::magnitude_response(&design.taps, freq_hz, spec.fs);
            ResponsePoint {
                freq_hz,
                magnitude,
                magnitude_db: to_db(magnitude),
            }
        })
        .collect();

    match output::to_json(&points, args.compact).and_then(|json| output::write_output(&json, None)) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_codes::EXECUTION_ERROR
        }
    }
}
