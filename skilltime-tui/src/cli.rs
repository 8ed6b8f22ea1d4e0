use clap::{Parser, Subcommand};
use skilltime::DateRange;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "skilltime")]
#[command(about = "Terminal time tracker for freelance projects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the tracker on the configured data directory (default)
    Run,
    /// Open the tracker on seeded in-memory data; nothing is saved
    Dev,
    /// Write the selected entries to a CSV file
    Export {
        /// today, week, month or all
        #[arg(long, default_value = "all", value_parser = parse_range)]
        range: DateRange,
        /// Only entries for this project id
        #[arg(long)]
        project: Option<String>,
        /// Output directory (defaults to the configured export_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print hours and earnings for today, this week, this month and all time
    Summary,
    /// Print config path and create default file if missing
    ConfigPath,
}

fn parse_range(s: &str) -> Result<DateRange, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["skilltime"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn export_parses_range_and_project() {
        let cli = Cli::try_parse_from([
            "skilltime", "export", "--range", "week", "--project", "171",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Export { range, project, out }) => {
                assert_eq!(range, DateRange::Week);
                assert_eq!(project.as_deref(), Some("171"));
                assert!(out.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_range_is_rejected() {
        assert!(Cli::try_parse_from(["skilltime", "export", "--range", "decade"]).is_err());
    }
}
