use crate::cli::DesignArgs;
use crate::exit_codes;
use crate::filter_params;
use crate::output;

pub fn execute(args: DesignArgs) -> i32 {
    let spec = match filter_params::build_spec(&args.params) {
        Ok(spec) => spec,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    let design = match kaiser_fir::design(&spec) {
        Ok(design) => design,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::DESIGN_ERROR;
        }
    };

    match output::to_json(&design, args.compact).and_then(|json| output::write_output(&json, None)) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_codes::EXECUTION_ERROR
        }
    }
}
