use clap::{Parser, Subcommand};

/// Command-line arguments for exitpolicy
#[derive(Parser, Debug, Clone)]
#[command(name = "exitpolicy")]
#[command(about = "Map errors and child processes to meaningful exit codes")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every named exit code
    Codes {
        /// Output format: table or json
        #[arg(
            long,
            value_name = "FORMAT",
            default_value = "table",
            env = "EXITPOLICY_FORMAT"
        )]
        format: String,
    },

    /// Describe an exit code given as a number or a name
    Explain {
        /// Exit code number or name (e.g. 74, IOERR, EX_IOERR)
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Run a program and exit with the code its outcome maps to
    Run {
        /// Exit with this code on any failure instead
        #[arg(long, value_name = "CODE", allow_negative_numbers = true)]
        code: Option<i32>,

        /// Program and arguments to run
        #[arg(
            value_name = "COMMAND",
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        command: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_run() {
        let args = Args::try_parse_from(["exitpolicy", "run", "--code", "9", "--", "sh", "-c", "exit 3"])
            .unwrap();

        match args.command {
            Commands::Run { code, command } => {
                assert_eq!(code, Some(9));
                assert_eq!(command, ["sh", "-c", "exit 3"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_help_is_display_help() {
        let err = Args::try_parse_from(["exitpolicy", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_run_requires_command() {
        let err = Args::try_parse_from(["exitpolicy", "run"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
