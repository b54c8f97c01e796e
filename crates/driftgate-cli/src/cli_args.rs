use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "driftgate",
    version,
    about = "Structural drift verification for LLM-documented code"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print progress details to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Verify a documented file against its original
    Verify {
        /// Path to the original (trusted) .py file
        before: String,
        /// Path to the documented (untrusted) .py file
        after: String,
    },

    /// Generate documentation for a file, verify it, and write it out
    Document {
        /// Path to the .py file to document
        file: String,
        /// Ask the generator for inline comments as well
        #[arg(long)]
        inline: bool,
        /// Output path (default: `doc_<name>.py` next to the input)
        #[arg(long)]
        out: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("failed to parse CLI args")
    }

    fn parse_err(args: &[&str]) -> clap::error::Error {
        Cli::try_parse_from(args).expect_err("expected parse failure")
    }

    #[test]
    fn parse_verify() {
        let cli = parse(&["driftgate", "verify", "app.py", "doc_app.py"]);
        match cli.command {
            Commands::Verify { before, after } => {
                assert_eq!(before, "app.py");
                assert_eq!(after, "doc_app.py");
            }
            _ => panic!("expected Verify"),
        }
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_verify_requires_both_paths() {
        parse_err(&["driftgate", "verify", "app.py"]);
    }

    #[test]
    fn parse_document_defaults() {
        let cli = parse(&["driftgate", "document", "app.py"]);
        match cli.command {
            Commands::Document { file, inline, out } => {
                assert_eq!(file, "app.py");
                assert!(!inline);
                assert!(out.is_none());
            }
            _ => panic!("expected Document"),
        }
    }

    #[test]
    fn parse_document_all_flags() {
        let cli = parse(&[
            "driftgate",
            "document",
            "app.py",
            "--inline",
            "--out",
            "annotated.py",
        ]);
        match cli.command {
            Commands::Document { file, inline, out } => {
                assert_eq!(file, "app.py");
                assert!(inline);
                assert_eq!(out.as_deref(), Some("annotated.py"));
            }
            _ => panic!("expected Document"),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = parse(&["driftgate", "verify", "a.py", "b.py", "--json", "--verbose"]);
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_no_subcommand_fails() {
        parse_err(&["driftgate"]);
    }
}
