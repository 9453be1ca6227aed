//! Error types for the nginx configuration translator.
//!
//! Errors are split by the stage that produces them:
//!
//! - [`LexerError`] — failures during tokenization (unterminated strings,
//!   unterminated Lua blocks).
//! - [`DirectiveError`] — failures reported by the analyzer (unknown
//!   directive, wrong context, wrong argument shape).
//! - [`ParseError`] — the umbrella type: structural errors plus forwarded
//!   lexer and directive errors.
//!
//! Message texts follow the conventions nginx itself uses when it rejects a
//! configuration, so output stays familiar to anyone reading `nginx -t`.

use std::path::PathBuf;
use thiserror::Error;

/// An error that occurs during tokenization.
#[derive(Debug, Clone, Error)]
pub enum LexerError {
    /// A quoted string was opened but never closed before end-of-file.
    #[error("unexpected end of string, expecting \"{quote}\"")]
    UnterminatedString { quote: char, line: usize },

    /// A `*_by_lua_block` body was opened but its `{` was never balanced.
    #[error("unexpected end of file, expecting \"}}\"")]
    UnterminatedLuaBlock { line: usize },
}

impl LexerError {
    /// Returns the source line where this error occurred.
    pub fn line(&self) -> usize {
        match self {
            LexerError::UnterminatedString { line, .. } => *line,
            LexerError::UnterminatedLuaBlock { line } => *line,
        }
    }
}

/// An error reported by the directive analyzer.
#[derive(Debug, Clone, Error)]
pub enum DirectiveError {
    /// The directive name is not in the catalog (strict mode only).
    #[error("unknown directive \"{name}\"")]
    Unknown { name: String, line: usize },

    /// No catalog variant admits the directive in the current context.
    #[error("\"{name}\" directive is not allowed here")]
    NotAllowedHere { name: String, line: usize },

    /// No matching variant accepts this number of arguments.
    #[error("invalid number of arguments in \"{name}\" directive")]
    InvalidArguments { name: String, line: usize },

    /// A flag directive received something other than `on`/`off`.
    #[error("invalid value \"{value}\" in \"{name}\" directive, it must be \"on\" or \"off\"")]
    InvalidFlagValue {
        name: String,
        value: String,
        line: usize,
    },

    /// A block directive was terminated by `;` instead of opening a block.
    #[error("directive \"{name}\" has no opening \"{{\"")]
    MissingOpeningBrace { name: String, line: usize },

    /// A non-block directive was followed by `{`.
    #[error("directive \"{name}\" is not terminated by \";\"")]
    NotTerminatedBySemicolon { name: String, line: usize },
}

impl DirectiveError {
    /// Returns the source line of the offending directive.
    pub fn line(&self) -> usize {
        match self {
            DirectiveError::Unknown { line, .. }
            | DirectiveError::NotAllowedHere { line, .. }
            | DirectiveError::InvalidArguments { line, .. }
            | DirectiveError::InvalidFlagValue { line, .. }
            | DirectiveError::MissingOpeningBrace { line, .. }
            | DirectiveError::NotTerminatedBySemicolon { line, .. } => *line,
        }
    }
}

/// An error that occurs while parsing a configuration.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A tokenization error propagated from the lexer.
    #[error("{0}")]
    Lexer(#[from] LexerError),

    /// An analyzer error propagated unchanged.
    #[error("{0}")]
    Directive(#[from] DirectiveError),

    /// A `;`, `{` or `}` appeared where it is not valid.
    #[error("unexpected \"{token}\"")]
    UnexpectedToken { token: String, line: usize },

    /// The input ended while the parser still expected more tokens.
    #[error("unexpected end of file, expecting {expecting}")]
    UnexpectedEof { expecting: String, line: usize },

    /// Block nesting exceeded [`ParseOptions::max_depth`](crate::ParseOptions::max_depth).
    #[error("reached maximum number of nested blocks")]
    DepthExceeded { line: usize },

    /// Include expansion exceeded [`ParseOptions::max_files`](crate::ParseOptions::max_files).
    #[error("include cycle limit exceeded")]
    IncludeLimitExceeded { line: usize },

    /// A file could not be read from disk.
    #[error("{message}")]
    Io { path: PathBuf, message: String },
}

impl ParseError {
    /// Returns the source line where this error occurred, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Lexer(e) => Some(e.line()),
            ParseError::Directive(e) => Some(e.line()),
            ParseError::UnexpectedToken { line, .. }
            | ParseError::UnexpectedEof { line, .. }
            | ParseError::DepthExceeded { line }
            | ParseError::IncludeLimitExceeded { line } => Some(*line),
            ParseError::Io { .. } => None,
        }
    }
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_messages() {
        let e = DirectiveError::Unknown {
            name: "flibberty_widget".into(),
            line: 1,
        };
        assert_eq!(e.to_string(), "unknown directive \"flibberty_widget\"");

        let e = DirectiveError::NotAllowedHere {
            name: "listen".into(),
            line: 4,
        };
        assert_eq!(e.to_string(), "\"listen\" directive is not allowed here");

        let e = DirectiveError::MissingOpeningBrace {
            name: "http".into(),
            line: 1,
        };
        assert_eq!(e.to_string(), "directive \"http\" has no opening \"{\"");

        let e = DirectiveError::NotTerminatedBySemicolon {
            name: "listen".into(),
            line: 2,
        };
        assert_eq!(e.to_string(), "directive \"listen\" is not terminated by \";\"");
    }

    #[test]
    fn test_flag_message() {
        let e = DirectiveError::InvalidFlagValue {
            name: "accept_mutex".into(),
            value: "1".into(),
            line: 2,
        };
        assert!(e.to_string().ends_with("it must be \"on\" or \"off\""));
    }

    #[test]
    fn test_parse_error_lines() {
        let e = ParseError::UnexpectedToken {
            token: "}".into(),
            line: 7,
        };
        assert_eq!(e.line(), Some(7));
        assert_eq!(e.to_string(), "unexpected \"}\"");

        let e = ParseError::Io {
            path: PathBuf::from("/missing.conf"),
            message: "No such file or directory (os error 2)".into(),
        };
        assert_eq!(e.line(), None);
    }

    #[test]
    fn test_eof_message() {
        let e = ParseError::UnexpectedEof {
            expecting: "\"}\"".into(),
            line: 3,
        };
        assert_eq!(e.to_string(), "unexpected end of file, expecting \"}\"");
    }
}
