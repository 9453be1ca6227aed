pub mod build;
pub mod format;
pub mod lex;
pub mod minify;
pub mod parse;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ngx-conf")]
#[command(author, version, about = "Convert nginx configs to and from JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a configuration and write its JSON payload
    Parse(parse::Args),
    /// Rebuild configuration files from a JSON payload read on stdin
    Build(build::Args),
    /// Dump the raw token stream of a single file
    Lex(lex::Args),
    /// Reformat a single file with uniform indentation
    Format(format::Args),
    /// Emit a single file with all insignificant whitespace removed
    Minify(minify::Args),
}

/// Prints an error line to stderr in the house style.
pub(crate) fn report_error(message: &str) {
    use colored::Colorize;
    eprintln!("{} {}", "error:".red().bold(), message);
}
