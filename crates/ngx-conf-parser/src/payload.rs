//! Output tree types.
//!
//! [`Payload`] is the stable public format: its field names and ordering are
//! a compatibility surface, so the structs below serialize exactly in the
//! order declared and optional fields are skipped when absent.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Whether a parse (or a single file of it) completed without errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Failed,
}

/// Top-level result of a parse session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub status: Status,
    pub errors: Vec<PayloadError>,
    pub config: Vec<FileConfig>,
}

impl Payload {
    /// The root file's configuration, if any file was parsed at all.
    pub fn root(&self) -> Option<&FileConfig> {
        self.config.first()
    }
}

/// One source file's parse result. The root file comes first in
/// [`Payload::config`]; included files follow in the order their `include`
/// directives were visited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub file: PathBuf,
    pub status: Status,
    pub errors: Vec<PayloadError>,
    pub parsed: Vec<Directive>,
}

/// A recorded parse error. `line` is absent for I/O failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadError {
    pub file: PathBuf,
    pub line: Option<usize>,
    pub error: String,
    /// Extra string attached by the CLI's `--tb-onerror` option.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub callback: Option<String>,
}

impl PayloadError {
    pub fn new(file: PathBuf, line: Option<usize>, error: String) -> Self {
        Self {
            file,
            line,
            error,
            callback: None,
        }
    }
}

/// A single directive in the tree. Comment nodes use the sentinel name `#`
/// with the comment text (sans `#`) in `comment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub directive: String,
    pub line: usize,
    pub args: Vec<String>,
    /// Present iff the directive opened a block.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub block: Option<Vec<Directive>>,
    /// Present iff `directive == "#"`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
    /// Source file, filled in by combined mode.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file: Option<PathBuf>,
    /// Indices into [`Payload::config`] for each file this `include`
    /// expanded to.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub includes: Option<Vec<usize>>,
    /// Per-argument quoted flags from the lexer. Not part of the JSON
    /// surface; used by the builder as a re-quoting tie-breaker and empty
    /// after a deserialization round trip.
    #[serde(skip, default)]
    pub quoted: Vec<bool>,
}

impl Directive {
    /// Creates a plain directive with no arguments yet.
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            directive: name.into(),
            line,
            args: Vec::new(),
            block: None,
            comment: None,
            file: None,
            includes: None,
            quoted: Vec::new(),
        }
    }

    /// Creates a comment node from the text after the `#`.
    pub fn comment(line: usize, text: impl Into<String>) -> Self {
        let mut d = Directive::new("#", line);
        d.comment = Some(text.into());
        d
    }

    /// True for comment nodes.
    pub fn is_comment(&self) -> bool {
        self.directive == "#"
    }

    /// True if this directive opened a block.
    pub fn is_block(&self) -> bool {
        self.block.is_some()
    }

    /// First argument, if any.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(|a| a.as_str())
    }

    /// Whether argument `i` was quoted in the source. Defaults to false when
    /// the side-channel is absent (e.g. after JSON deserialization).
    pub fn arg_was_quoted(&self, i: usize) -> bool {
        self.quoted.get(i).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_json_shape() {
        let mut d = Directive::new("listen", 3);
        d.args.push("80".to_string());
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"directive":"listen","line":3,"args":["80"]}"#);
    }

    #[test]
    fn test_comment_json_shape() {
        let d = Directive::comment(1, " hello");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(
            json,
            r##"{"directive":"#","line":1,"args":[],"comment":" hello"}"##
        );
    }

    #[test]
    fn test_include_json_shape() {
        let mut d = Directive::new("include", 2);
        d.args.push("conf.d/*.conf".to_string());
        d.includes = Some(vec![1, 2]);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(
            json,
            r#"{"directive":"include","line":2,"args":["conf.d/*.conf"],"includes":[1,2]}"#
        );
    }

    #[test]
    fn test_status_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Ok).unwrap(), "\"ok\"");
        assert_eq!(serde_json::to_string(&Status::Failed).unwrap(), "\"failed\"");
    }

    #[test]
    fn test_quoted_flags_not_serialized() {
        let mut d = Directive::new("server_name", 1);
        d.args.push("a b".to_string());
        d.quoted.push(true);
        let json = serde_json::to_string(&d).unwrap();
        assert!(!json.contains("quoted"));
        let back: Directive = serde_json::from_str(&json).unwrap();
        assert!(back.quoted.is_empty());
        assert!(!back.arg_was_quoted(0));
    }

    #[test]
    fn test_payload_roundtrip() {
        let payload = Payload {
            status: Status::Ok,
            errors: vec![],
            config: vec![FileConfig {
                file: PathBuf::from("nginx.conf"),
                status: Status::Ok,
                errors: vec![],
                parsed: vec![Directive::new("events", 1)],
            }],
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: Payload = serde_json::from_str(&json).unwrap();
        assert_eq!(back.config.len(), 1);
        assert_eq!(back.config[0].parsed[0].directive, "events");
    }
}
