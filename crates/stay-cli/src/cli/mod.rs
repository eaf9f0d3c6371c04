use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `stay` binary.
#[derive(Debug, Parser)]
#[command(name = "stay", version, about = "stay - browse accommodation and send stay enquiries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Backend base URL (overrides api.base_url)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            api_url: self.api_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["stay", "--format", "json", "--verbose", "listings"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Listings(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["stay", "show", "42", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.id, "42");
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["stay", "--format", "xml", "listings"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn enquire_collects_all_fields() {
        let cli = Cli::try_parse_from([
            "stay",
            "enquire",
            "42",
            "--full-name",
            "Alice Smith",
            "--email",
            "alice@example.com",
            "--check-in",
            "2024-06-01",
            "--check-out",
            "2024-06-05",
        ])
        .expect("cli should parse");

        let Commands::Enquire(args) = cli.command else {
            panic!("expected enquire");
        };
        assert_eq!(args.id, "42");
        assert_eq!(args.full_name.as_deref(), Some("Alice Smith"));
        assert_eq!(args.email_address.as_deref(), Some("alice@example.com"));
        assert_eq!(args.check_in.as_deref(), Some("2024-06-01"));
        assert_eq!(args.check_out.as_deref(), Some("2024-06-05"));
    }

    #[test]
    fn enquire_fields_are_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["stay", "enquire", "42"]).expect("cli should parse");
        let Commands::Enquire(args) = cli.command else {
            panic!("expected enquire");
        };
        assert!(args.full_name.is_none());
        assert!(args.check_out.is_none());
    }

    #[test]
    fn confirmation_clear_flag() {
        let cli = Cli::try_parse_from(["stay", "confirmation", "--clear"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Confirmation(args) if args.clear));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from([
            "stay",
            "--api-url",
            "http://127.0.0.1:9000/api",
            "--color",
            "never",
            "schema",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.api_url.as_deref(), Some("http://127.0.0.1:9000/api"));
        assert_eq!(flags.color, ColorMode::Never);
        assert_eq!(flags.format, OutputFormat::Table);
    }
}
