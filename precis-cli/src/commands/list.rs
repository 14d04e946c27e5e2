//! List command implementation

use super::ListCommands;
use crate::output::OutputFormat;
use anyhow::Result;
use precis_core::{StemmerAlgorithm, BUILTIN_LANGUAGES};
use std::io::{self, Write};

/// Print the requested listing to stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(subcommand, &mut out)?;
    out.flush()?;
    Ok(())
}

fn render<W: Write>(subcommand: ListCommands, out: &mut W) -> Result<()> {
    match subcommand {
        ListCommands::Formats => {
            writeln!(out, "Available output formats:")?;
            for (format, description) in OutputFormat::ALL {
                writeln!(out, "  {:<10} {}", format.name(), description)?;
            }
        }
        ListCommands::Languages => {
            writeln!(out, "Built-in language resources:")?;
            for (code, name) in BUILTIN_LANGUAGES {
                writeln!(out, "  {:<10} {}", code, name)?;
            }
            writeln!(out)?;
            writeln!(out, "Stemming algorithms for external resources:")?;
            writeln!(out, "  {}", StemmerAlgorithm::NAMES.join(", "))?;
        }
    }
    Ok(())
}
