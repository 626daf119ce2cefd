use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "batchsim",
    version,
    about = "Runs arithmetic jobs from a file in batches of four with simulated execution time"
)]
pub struct Cli {
    /// Input file with one `id,owner,operation,operand1,operand2,estimatedDuration` record per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "batchsim=debug"
        } else {
            "batchsim=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_is_required() {
        let err = Cli::try_parse_from(["batchsim"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn parses_file_and_verbose() {
        let cli = Cli::try_parse_from(["batchsim", "-v", "jobs.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("jobs.txt"));
        assert_eq!(cli.default_log_filter(), "batchsim=debug");

        let cli = Cli::try_parse_from(["batchsim", "jobs.txt"]).unwrap();
        assert_eq!(cli.default_log_filter(), "batchsim=info");
    }
}
