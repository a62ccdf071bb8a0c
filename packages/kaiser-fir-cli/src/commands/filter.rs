use crate::cli::FilterArgs;
use crate::exit_codes;
use crate::filter_params;
use crate::output;
use crate::table::Table;
use kaiser_fir::filtered_column_name;

pub fn execute(args: FilterArgs) -> i32 {
    if let Err(msg) = filter_params::validate_file(&args.file) {
        eprintln!("Error: {}", msg);
        return exit_codes::INPUT_ERROR;
    }

    let spec = match filter_params::build_spec(&args.params) {
        Ok(spec) => spec,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    let mut table = match Table::from_path(&args.file) {
        Ok(table) => table,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    let signals = match extract_signals(&table, &args.signal) {
        Ok(signals) => signals,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    if !args.quiet {
        eprintln!("Filtering {} ({} rows)...", args.file, table.rows.len());
        eprintln!("  Columns: {}", args.signal.join(", "));
        eprintln!(
            "  Cutoffs: lowcut={:?}, highcut={:?} at fs={} Hz",
            spec.lowcut, spec.highcut, spec.fs
        );
    }

    let filtered = match kaiser_fir::kaiser_filter_batch(&signals, &spec) {
        Ok(filtered) => filtered,
        Err(e) => {
            eprintln!("Filtering failed: {}", e);
            return exit_codes::DESIGN_ERROR;
        }
    };

    for (name, values) in args.signal.iter().zip(filtered.iter()) {
        if let Err(msg) = table.set_column(&filtered_column_name(name), values) {
            eprintln!("Error: {}", msg);
            return exit_codes::EXECUTION_ERROR;
        }
    }

    let written = table
        .to_csv_string()
        .and_then(|csv| output::write_output(&csv, args.output.as_deref()));
    if let Err(e) = written {
        eprintln!("Error: {}", e);
        return exit_codes::EXECUTION_ERROR;
    }

    if !args.quiet {
        if let Some(ref path) = args.output {
            eprintln!("Results written to {}", path);
        }
    }
    exit_codes::SUCCESS
}

/// Pull each requested column out of the table as numbers.
fn extract_signals(table: &Table, columns: &[String]) -> Result<Vec<Vec<f64>>, String> {
    if table.rows.is_empty() {
        return Err("Input table has no data rows".to_string());
    }
    columns
        .iter()
        .map(|name| table.numeric_column(name))
        .collect()
}
