use clap::{Parser, Subcommand, ValueEnum};

/// Prenatal checkpoint calendar.
#[derive(Parser)]
#[command(
    name = "prenatal",
    version,
    about = "Prenatal checkpoint calendar on Spanish working days",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format.
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Date of the last menstrual period (FUR), as YYYY-MM-DD.
    pub fur: Option<String>,

    /// Subcommand to run instead of computing a schedule.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List the Spanish national holidays of a year.
    Holidays(HolidaysArgs),
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Calendar year (1900-2199).
    pub year: u16,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned table for people.
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_fur() {
        let cli = Cli::try_parse_from(["prenatal", "2024-01-01"]).unwrap();
        assert_eq!(cli.fur.as_deref(), Some("2024-01-01"));
        assert_eq!(cli.format, Format::Text);
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn fur_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["prenatal"]).unwrap();
        assert!(cli.fur.is_none());
    }

    #[test]
    fn json_and_verbosity() {
        let cli = Cli::try_parse_from(["prenatal", "-vv", "--format", "json", "2024-03-01"]).unwrap();
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn holidays_subcommand() {
        let cli = Cli::try_parse_from(["prenatal", "holidays", "2025", "-f", "json"]).unwrap();
        let Some(Command::Holidays(args)) = cli.command else {
            panic!("expected holidays subcommand");
        };
        assert_eq!(args.year, 2025);
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["prenatal", "--format", "xml", "2024-01-01"]).is_err());
    }
}
