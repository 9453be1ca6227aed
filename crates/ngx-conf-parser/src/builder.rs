//! Emits a directive tree back to configuration text.
//!
//! The builder is the inverse of the parser: a parse → build round trip of a
//! canonically formatted file reproduces it, and `build(parse(f))` always
//! re-parses to a structurally equal tree. Output always uses LF line
//! endings.

use crate::payload::{Directive, Payload};
use crate::special::is_lua_block;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Formatting options for [`build`].
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Indent with one tab per level instead of spaces.
    pub tabs: bool,
    /// Text emitted verbatim before the first directive.
    pub header: String,
    /// Emit everything on a single line with no indentation.
    pub minify: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            tabs: false,
            header: String::new(),
            minify: false,
        }
    }
}

impl BuildOptions {
    /// Options for `minify`-style output.
    pub fn minified() -> Self {
        Self {
            indent: 0,
            tabs: false,
            header: String::new(),
            minify: true,
        }
    }
}

/// Renders a directive tree to text.
pub fn build(directives: &[Directive], options: &BuildOptions) -> String {
    let mut out = String::new();
    if !options.header.is_empty() {
        out.push_str(&options.header);
    }
    write_items(&mut out, directives, 0, options);
    out
}

/// Writes one output file per [`FileConfig`](crate::payload::FileConfig)
/// into `dir`, creating parent
/// directories as needed. Absolute source paths are rebased under `dir`.
/// Returns the paths written.
pub fn build_files(
    payload: &Payload,
    dir: &Path,
    options: &BuildOptions,
) -> std::io::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(payload.config.len());
    for config in &payload.config {
        let relative: PathBuf = config
            .file
            .components()
            .filter(|c| matches!(c, std::path::Component::Normal(_)))
            .collect();
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(&path)?;
        file.write_all(build(&config.parsed, options).as_bytes())?;
        written.push(path);
    }
    Ok(written)
}

fn write_items(out: &mut String, items: &[Directive], depth: usize, options: &BuildOptions) {
    for directive in items {
        write_directive(out, directive, depth, options);
    }
}

fn write_directive(out: &mut String, d: &Directive, depth: usize, options: &BuildOptions) {
    if !options.minify {
        push_indent(out, depth, options);
    }

    if d.is_comment() {
        // minified output still needs the newline to terminate the comment
        out.push('#');
        out.push_str(d.comment.as_deref().unwrap_or(""));
        out.push('\n');
        return;
    }

    out.push_str(&enquote(&d.directive, false));
    for (i, arg) in d.args.iter().enumerate() {
        if d.directive == "if" {
            // the parenthesized condition is one logical token; re-quoting
            // it would change what nginx lexes
            out.push(' ');
            out.push_str(arg);
            continue;
        }
        if is_lua_block(&d.directive) && i == d.args.len() - 1 {
            // the opaque Lua body is the final argument, emitted verbatim
            out.push_str(" {");
            if options.minify {
                out.push_str(arg);
            } else {
                out.push(' ');
                out.push_str(arg);
                out.push(' ');
            }
            out.push('}');
            finish_line(out, options);
            return;
        }
        out.push(' ');
        out.push_str(&enquote(arg, d.arg_was_quoted(i)));
    }

    if let Some(block) = &d.block {
        if options.minify {
            out.push('{');
            write_items(out, block, depth + 1, options);
            out.push('}');
        } else {
            out.push_str(" {\n");
            write_items(out, block, depth + 1, options);
            push_indent(out, depth, options);
            out.push_str("}\n");
        }
    } else {
        out.push(';');
        finish_line(out, options);
    }
}

fn finish_line(out: &mut String, options: &BuildOptions) {
    if !options.minify {
        out.push('\n');
    }
}

fn push_indent(out: &mut String, depth: usize, options: &BuildOptions) {
    if options.tabs {
        for _ in 0..depth {
            out.push('\t');
        }
    } else {
        for _ in 0..depth * options.indent {
            out.push(' ');
        }
    }
}

/// Re-quotes an argument for output.
///
/// Bare output is only legal when the value contains none of the characters
/// the lexer treats specially. Quoting prefers single quotes, falls back to
/// double quotes when the value itself contains a single quote, and escapes
/// with backslashes only when both quote characters appear. `was_quoted`
/// breaks the tie when both a bare and a quoted form would re-lex correctly,
/// so quoted source stays quoted across a rebuild.
fn enquote(arg: &str, was_quoted: bool) -> String {
    if arg.is_empty() {
        return "\"\"".to_string();
    }
    let needs_quotes = arg.contains(|c: char| c.is_whitespace())
        || arg.contains(['{', '}', ';', '#', '\'', '"'])
        || was_quoted;
    if !needs_quotes {
        return arg.to_string();
    }

    if !arg.contains('\'') {
        let mut quoted = String::with_capacity(arg.len() + 2);
        quoted.push('\'');
        for c in arg.chars() {
            if c == '\\' {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('\'');
        quoted
    } else {
        let mut quoted = String::with_capacity(arg.len() + 2);
        quoted.push('"');
        for c in arg.chars() {
            if c == '\\' || c == '"' {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        quoted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_string, ParseOptions};

    fn roundtrip(source: &str) -> String {
        let payload = parse_string(source, &ParseOptions::default());
        assert!(
            payload.errors.is_empty(),
            "parse errors: {:?}",
            payload.errors
        );
        build(&payload.config[0].parsed, &BuildOptions::default())
    }

    #[test]
    fn test_build_simple() {
        let source = "events {\n}\nhttp {\n    server {\n        listen 80;\n    }\n}\n";
        assert_eq!(roundtrip(source), source);
    }

    #[test]
    fn test_build_args_and_quotes() {
        let source = "http {\n    server {\n        server_name 'a b' example.com;\n    }\n}\n";
        assert_eq!(roundtrip(source), source);
    }

    #[test]
    fn test_quoted_source_stays_quoted() {
        // '80' needs no quotes, but the original was quoted
        let source = "http {\n    server {\n        listen '80';\n    }\n}\n";
        assert_eq!(roundtrip(source), source);
    }

    #[test]
    fn test_enquote_policy() {
        assert_eq!(enquote("", false), "\"\"");
        assert_eq!(enquote("plain", false), "plain");
        assert_eq!(enquote("plain", true), "'plain'");
        assert_eq!(enquote("a b", false), "'a b'");
        assert_eq!(enquote("it's", false), "\"it's\"");
        assert_eq!(enquote("say \"hi\"", false), "'say \"hi\"'");
        assert_eq!(enquote("'\"", false), "\"'\\\"\"");
        assert_eq!(enquote("semi;colon", false), "'semi;colon'");
        assert_eq!(enquote("back\\slash", false), "back\\slash");
        assert_eq!(enquote("a\\'b", false), "\"a\\\\'b\"");
    }

    #[test]
    fn test_build_comments() {
        let mut options = ParseOptions::default();
        options.comments = true;
        let source = "# heading\nevents {\n}\n";
        let payload = parse_string(source, &options);
        let output = build(&payload.config[0].parsed, &BuildOptions::default());
        assert_eq!(output, source);
    }

    #[test]
    fn test_build_tabs() {
        let payload = parse_string("http { server { listen 80; } }", &ParseOptions::default());
        let mut options = BuildOptions::default();
        options.tabs = true;
        let output = build(&payload.config[0].parsed, &options);
        assert_eq!(
            output,
            "http {\n\tserver {\n\t\tlisten 80;\n\t}\n}\n"
        );
    }

    #[test]
    fn test_build_indent_width() {
        let payload = parse_string("http { listen_test on; }", &ParseOptions::default());
        let mut options = BuildOptions::default();
        options.indent = 2;
        let output = build(&payload.config[0].parsed, &options);
        assert_eq!(output, "http {\n  listen_test on;\n}\n");
    }

    #[test]
    fn test_minify() {
        let payload = parse_string(
            "events {}\nhttp {\n    server {\n        listen 80;\n    }\n}\n",
            &ParseOptions::default(),
        );
        let output = build(&payload.config[0].parsed, &BuildOptions::minified());
        assert_eq!(output, "events{}http{server{listen 80;}}");
    }

    #[test]
    fn test_header_emitted() {
        let payload = parse_string("events {}", &ParseOptions::default());
        let mut options = BuildOptions::default();
        options.header = "# generated\n\n".to_string();
        let output = build(&payload.config[0].parsed, &options);
        assert_eq!(output, "# generated\n\nevents {\n}\n");
    }

    #[test]
    fn test_build_lua_block() {
        let source = "http {\n    server {\n        location / {\n            content_by_lua_block { ngx.say(\"x\") }\n        }\n    }\n}\n";
        assert_eq!(roundtrip(source), source);
    }

    #[test]
    fn test_build_if_block() {
        let source = "http {\n    server {\n        if ($request_method = POST) {\n            return 405;\n        }\n    }\n}\n";
        assert_eq!(roundtrip(source), source);
    }

    #[test]
    fn test_structural_roundtrip_after_json() {
        // quoting tie-breakers are lost through JSON, but structure is not
        let source = "http {\n    server {\n        server_name \"a b\";\n        listen 80;\n    }\n}\n";
        let payload = parse_string(source, &ParseOptions::default());
        let json = serde_json::to_string(&payload).unwrap();
        let back: Payload = serde_json::from_str(&json).unwrap();
        let rebuilt = build(&back.config[0].parsed, &BuildOptions::default());
        let reparsed = parse_string(&rebuilt, &ParseOptions::default());
        let strip =
            |p: &Payload| -> Vec<Directive> { p.config[0].parsed.clone() };
        let mut a = strip(&payload);
        let mut b = strip(&reparsed);
        // line numbers and quoted flags are not part of structural equality
        fn scrub(items: &mut [Directive]) {
            for d in items {
                d.line = 0;
                d.quoted.clear();
                if let Some(block) = &mut d.block {
                    scrub(block);
                }
            }
        }
        scrub(&mut a);
        scrub(&mut b);
        assert_eq!(a, b);
    }
}
