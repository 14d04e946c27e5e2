//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod summarize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize text files
    Summarize(summarize::SummarizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate an external language resource file
    Validate(validate::ValidateArgs),

    /// Generate a language resource template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List built-in language resources and stemming algorithms
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Summarize(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    fn parse(argv: &[&str]) -> Commands {
        TestCli::parse_from(std::iter::once("precis").chain(argv.iter().copied())).command
    }

    #[test]
    fn test_summarize_command() {
        let command = parse(&["summarize", "-i", "test.txt"]);

        let debug_str = format!("{:?}", command);
        assert!(debug_str.contains("Summarize"));
        assert!(debug_str.contains("test.txt"));
    }

    #[test]
    fn test_list_subcommands() {
        assert!(matches!(
            parse(&["list", "languages"]),
            Commands::List {
                subcommand: ListCommands::Languages
            }
        ));
        assert!(matches!(
            parse(&["list", "formats"]),
            Commands::List {
                subcommand: ListCommands::Formats
            }
        ));
    }

    #[test]
    fn test_kebab_case_command_names() {
        assert!(matches!(
            parse(&["generate-config", "-o", "out.toml"]),
            Commands::GenerateConfig(_)
        ));
        assert!(matches!(
            parse(&["validate", "-r", "res.toml"]),
            Commands::Validate(_)
        ));
    }

    #[test]
    fn test_summarize_requires_input() {
        let result = TestCli::try_parse_from(["precis", "summarize"]);
        assert!(result.is_err());
    }
}
