use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `shinsa` binary.
#[derive(Debug, Parser)]
#[command(name = "shinsa", version, about = "shinsa - abstract review desk")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Storage directory (overrides `storage.dir`)
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            storage: self.storage.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::subcommands::ReviewerCommands;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "shinsa",
            "--format",
            "table",
            "--verbose",
            "--storage",
            "/tmp/state",
            "stats",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert_eq!(cli.global_flags().storage, Some(PathBuf::from("/tmp/state")));
        assert!(matches!(cli.command, Commands::Stats(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["shinsa", "presets", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Presets));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["shinsa", "--format", "xml", "stats"]).is_err());
    }

    #[test]
    fn save_requires_paper_and_score() {
        assert!(Cli::try_parse_from(["shinsa", "save", "--paper", "P1"]).is_err());

        let cli = Cli::try_parse_from([
            "shinsa", "save", "--paper", "P1", "--score", "4", "--comment", "ok",
        ])
        .expect("cli should parse");
        let Commands::Save(args) = cli.command else {
            panic!("expected save");
        };
        assert_eq!(args.target.paper, "P1");
        assert_eq!(args.score, 4);
        assert_eq!(args.comment.as_deref(), Some("ok"));
        assert_eq!(args.target.reviewer, None);
    }

    #[test]
    fn reviewer_set_takes_name() {
        let cli = Cli::try_parse_from(["shinsa", "reviewer", "set", "Ann Lee"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Reviewer {
                action: ReviewerCommands::Set { ref name }
            } if name == "Ann Lee"
        ));
    }

    #[test]
    fn reset_and_schema_parse() {
        let cli = Cli::try_parse_from(["shinsa", "reset", "--yes"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Reset(ref args) if args.yes));

        let cli = Cli::try_parse_from(["shinsa", "schema", "reviews_blob"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Schema(_)));
        assert!(Cli::try_parse_from(["shinsa", "schema", "nope"]).is_err());
    }
}
