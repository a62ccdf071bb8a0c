use clap::{Args, Parser, Subcommand};
use kaiser_fir::{DEFAULT_RIPPLE_DB, DEFAULT_TRANSITION_WIDTH_HZ};

#[derive(Parser)]
#[command(
    name = "firfilter",
    version,
    about = "Kaiser-window FIR filtering for tabular signal data",
    long_about = "Design Kaiser-window FIR filters and apply them to columns of a CSV table.\n\
                  Only --lowcut gives a lowpass, only --highcut a highpass, both a bandpass.\n\
                  Each filtered column is appended as filtered_<name>."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter one or more columns of a CSV file
    Filter(FilterArgs),
    /// Print the designed filter (length, beta, taps) as JSON
    Design(DesignArgs),
    /// Print the magnitude response of the designed filter at given frequencies
    Response(ResponseArgs),
}

/// Parameters shared by every subcommand that designs a filter
#[derive(Args, Clone, Debug)]
pub struct DesignParams {
    /// Sampling rate in Hz
    #[arg(long)]
    pub fs: f64,

    /// Lower cutoff in Hz (lowpass edge when given alone)
    #[arg(long)]
    pub lowcut: Option<f64>,

    /// Upper cutoff in Hz (highpass edge when given alone)
    #[arg(long)]
    pub highcut: Option<f64>,

    /// Stopband attenuation in dB
    #[arg(long, env = "FIRFILTER_RIPPLE_DB", default_value_t = DEFAULT_RIPPLE_DB)]
    pub ripple_db: f64,

    /// Transition band width in Hz
    #[arg(long, env = "FIRFILTER_TRANSITION_WIDTH", default_value_t = DEFAULT_TRANSITION_WIDTH_HZ)]
    pub transition_width: f64,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Input CSV file with a header row
    #[arg(long)]
    pub file: String,

    /// Column(s) holding the signal to filter
    #[arg(long, required = true, num_args = 1..)]
    pub signal: Vec<String>,

    #[command(flatten)]
    pub params: DesignParams,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct DesignArgs {
    #[command(flatten)]
    pub params: DesignParams,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}

#[derive(Args)]
pub struct ResponseArgs {
    #[command(flatten)]
    pub params: DesignParams,

    /// Frequencies in Hz to evaluate
    #[arg(long, required = true, num_args = 1..)]
    pub freq: Vec<f64>,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_defaults() {
        let cli = Cli::try_parse_from([
            "firfilter", "filter", "--file", "in.csv", "--signal", "eeg", "--fs", "100", "--lowcut", "3",
        ])
        .unwrap();
        match cli.command {
            Command::Filter(args) => {
                assert_eq!(args.signal, vec!["eeg".to_string()]);
                assert_eq!(args.params.fs, 100.0);
                assert_eq!(args.params.lowcut, Some(3.0));
                assert_eq!(args.params.highcut, None);
                assert_eq!(args.params.ripple_db, DEFAULT_RIPPLE_DB);
                assert_eq!(args.params.transition_width, DEFAULT_TRANSITION_WIDTH_HZ);
            }
            _ => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_parse_multiple_signals() {
        let cli = Cli::try_parse_from([
            "firfilter", "filter", "--file", "in.csv", "--signal", "a", "b", "--fs", "250", "--highcut",
            "30",
        ])
        .unwrap();
        match cli.command {
            Command::Filter(args) => assert_eq!(args.signal, vec!["a", "b"]),
            _ => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_fs_is_required() {
        assert!(Cli::try_parse_from(["firfilter", "design", "--lowcut", "3"]).is_err());
    }
}
