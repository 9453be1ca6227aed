//! Bidirectional translator between nginx configuration text and a
//! structured tree.
//!
//! Parsing produces a [`Payload`]: one entry per source file (the root plus
//! everything `include` pulled in), each holding an ordered tree of
//! [`Directive`]s. Building renders a tree back to configuration text, either
//! pretty-printed or minified. Every statement is validated against a
//! catalog of known directives, their legal contexts and argument shapes.
//!
//! # Quick start
//!
//! ```
//! use ngx_conf_parser::{parse_string, ParseOptions};
//!
//! let payload = parse_string("events {}\nhttp { server { listen 80; } }", &ParseOptions::default());
//! assert_eq!(payload.config[0].parsed[1].directive, "http");
//! ```
//!
//! To parse a file on disk, expanding includes:
//!
//! ```no_run
//! use ngx_conf_parser::{parse_file, ParseOptions};
//!
//! let payload = parse_file("/etc/nginx/nginx.conf", &ParseOptions::default()).unwrap();
//! for config in &payload.config {
//!     println!("{}: {} directives", config.file.display(), config.parsed.len());
//! }
//! ```
//!
//! And back to text:
//!
//! ```
//! use ngx_conf_parser::{build, parse_string, BuildOptions, ParseOptions};
//!
//! let payload = parse_string("http{server{listen 80;}}", &ParseOptions::default());
//! let text = build(&payload.config[0].parsed, &BuildOptions::default());
//! assert_eq!(text, "http {\n    server {\n        listen 80;\n    }\n}\n");
//! ```
//!
//! # Modules
//!
//! - [`lexer`] — tokenizer, also exposed through [`lex_file`] / [`lex_string`]
//! - [`catalog`] — the directive table and its bitmask constants
//! - [`analyzer`] — per-statement legality checking
//! - [`parser`] — multi-file parsing with include expansion
//! - [`builder`] — rendering trees back to text
//! - [`special`] — registry of directives needing dedicated lexing

pub mod analyzer;
pub mod builder;
pub mod catalog;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod payload;
pub mod special;

pub use analyzer::{analyze, enter_block_ctx, Context};
pub use builder::{build, build_files, BuildOptions};
pub use catalog::Catalog;
pub use error::{DirectiveError, LexerError, ParseError, ParseResult};
pub use lexer::{Lexer, Token};
pub use parser::{parse_file, parse_string, FileOpener, FsOpener, ParseOptions, Parser};
pub use payload::{Directive, FileConfig, Payload, PayloadError, Status};
pub use special::{Registry, SpecialForm};

use std::path::Path;

/// Reads a file and returns its raw token stream. This is the diagnostic
/// entry point behind the CLI's `lex` subcommand.
pub fn lex_file(path: impl AsRef<Path>) -> ParseResult<Vec<Token>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(lex_string(&content)?)
}

/// Tokenizes configuration text.
pub fn lex_string(source: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_string() {
        let tokens = lex_string("events { worker_connections 1024; }").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["events", "{", "worker_connections", "1024", ";", "}"]
        );
    }

    #[test]
    fn test_lex_file_missing() {
        let err = lex_file("/definitely/not/here.conf").unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
