//! Multi-file configuration parser.
//!
//! Drives the lexer over a root file and everything its `include` directives
//! pull in, validating each statement through the analyzer and assembling
//! the [`Payload`] tree. Files are visited in first-reference order (the
//! pre-order of the include DAG) and de-duplicated by normalized path, the
//! same discipline nginx applies when loading a configuration.

use crate::analyzer::{analyze, enter_block_ctx, Context};
use crate::catalog::Catalog;
use crate::error::{DirectiveError, ParseError, ParseResult};
use crate::lexer::Lexer;
use crate::payload::{Directive, FileConfig, Payload, PayloadError, Status};
use crate::special::{Registry, SpecialForm};
use glob::glob;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Switches controlling a parse session.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Record errors and keep parsing instead of stopping at the first one.
    pub catch_errors: bool,
    /// Directive names dropped from the output without validation.
    pub ignore: Vec<String>,
    /// Do not expand `include` directives.
    pub single: bool,
    /// Treat unknown directives as errors.
    pub strict: bool,
    /// Splice all files into one synthetic entry after parsing.
    pub combine: bool,
    /// Enforce context legality.
    pub check_ctx: bool,
    /// Enforce argument arity.
    pub check_args: bool,
    /// Emit comments as `#` directives.
    pub comments: bool,
    /// Maximum block nesting; exceeding it is fatal.
    pub max_depth: usize,
    /// Maximum number of files an include graph may reach.
    pub max_files: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            catch_errors: true,
            ignore: Vec::new(),
            single: false,
            strict: false,
            combine: false,
            check_ctx: true,
            check_args: true,
            comments: false,
            max_depth: 256,
            max_files: 1024,
        }
    }
}

/// Source of file contents for the parser. The default implementation reads
/// from disk; tests and tooling can substitute their own. Implementations
/// must be usable from concurrent sessions, hence `&self`.
pub trait FileOpener {
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads files from the local filesystem.
#[derive(Debug, Default)]
pub struct FsOpener;

impl FileOpener for FsOpener {
    fn read(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Parses the file at `path` with the given options and the standard
/// catalog. Returns `Err` only when the root file cannot be read.
pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> ParseResult<Payload> {
    Parser::new(options).parse(path.as_ref())
}

/// Parses configuration text directly. Includes are never expanded (there is
/// no surrounding directory to resolve them against); their arguments are
/// retained verbatim as in single-file mode.
pub fn parse_string(source: &str, options: &ParseOptions) -> Payload {
    let mut single = options.clone();
    single.single = true;
    Parser::new(&single).parse_source(Path::new("<string>"), source)
}

/// A configured parser. Sessions share nothing, so one parser can be reused
/// across files.
pub struct Parser<'a> {
    options: &'a ParseOptions,
    catalog: &'a Catalog,
    specials: Registry,
    opener: &'a dyn FileOpener,
}

/// Per-session bookkeeping shared across the files of one parse.
struct Session {
    root_dir: PathBuf,
    /// Work list of (path, context of the include site). Grows during
    /// iteration; index i corresponds to `Payload::config[i]`.
    files: Vec<(PathBuf, Context)>,
    /// Normalized path -> index in `files`, for de-duplication.
    included: HashMap<PathBuf, usize>,
    errors: Vec<PayloadError>,
    /// End-of-file was already reported for the current file; every open
    /// block unwinds through the same EOF, which must not multiply errors.
    eof_reported: bool,
}

static FS_OPENER: FsOpener = FsOpener;

impl<'a> Parser<'a> {
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            catalog: Catalog::standard(),
            specials: Registry::default(),
            opener: &FS_OPENER,
        }
    }

    /// Replaces the directive catalog (e.g. one with third-party modules
    /// registered).
    pub fn with_catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replaces the special-form registry.
    pub fn with_specials(mut self, specials: Registry) -> Self {
        self.specials = specials;
        self
    }

    /// Replaces the file opener.
    pub fn with_opener(mut self, opener: &'a dyn FileOpener) -> Self {
        self.opener = opener;
        self
    }

    /// Parses `root` and its includes into a [`Payload`].
    pub fn parse(&self, root: &Path) -> ParseResult<Payload> {
        let root_dir = root
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut session = Session {
            root_dir,
            files: vec![(root.to_path_buf(), Context::Main)],
            included: HashMap::new(),
            errors: Vec::new(),
            eof_reported: false,
        };
        session.included.insert(normalize_path(root), 0);

        let mut configs: Vec<FileConfig> = Vec::new();
        let mut aborted = false;
        let mut index = 0;
        while index < session.files.len() && !aborted {
            let (path, ctx) = session.files[index].clone();
            let content = match self.opener.read(&path) {
                Ok(content) => content,
                Err(e) if index == 0 => {
                    return Err(ParseError::Io {
                        path,
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    let err = PayloadError::new(path.clone(), None, e.to_string());
                    session.errors.push(err.clone());
                    configs.push(FileConfig {
                        file: path,
                        status: Status::Failed,
                        errors: vec![err],
                        parsed: Vec::new(),
                    });
                    index += 1;
                    continue;
                }
            };

            let (config, file_aborted) = self.parse_one(&path, &content, ctx, &mut session);
            aborted = file_aborted;
            configs.push(config);
            index += 1;
        }

        let status = if session.errors.is_empty() {
            Status::Ok
        } else {
            Status::Failed
        };
        let mut payload = Payload {
            status,
            errors: session.errors,
            config: configs,
        };
        if self.options.combine {
            payload = combine(payload);
        }
        Ok(payload)
    }

    /// Parses in-memory content as the root file.
    fn parse_source(&self, name: &Path, source: &str) -> Payload {
        let mut session = Session {
            root_dir: PathBuf::from("."),
            files: vec![(name.to_path_buf(), Context::Main)],
            included: HashMap::new(),
            errors: Vec::new(),
            eof_reported: false,
        };
        let (config, _) = self.parse_one(name, source, Context::Main, &mut session);
        let status = if session.errors.is_empty() {
            Status::Ok
        } else {
            Status::Failed
        };
        Payload {
            status,
            errors: session.errors,
            config: vec![config],
        }
    }

    fn parse_one(
        &self,
        path: &Path,
        content: &str,
        ctx: Context,
        session: &mut Session,
    ) -> (FileConfig, bool) {
        let mut lexer = Lexer::new(content);
        let mut file_errors: Vec<PayloadError> = Vec::new();
        session.eof_reported = false;
        let (parsed, aborted) =
            self.parse_block(&mut lexer, ctx, 0, false, path, session, &mut file_errors);
        let status = if file_errors.is_empty() {
            Status::Ok
        } else {
            Status::Failed
        };
        (
            FileConfig {
                file: path.to_path_buf(),
                status,
                errors: file_errors,
                parsed,
            },
            aborted,
        )
    }

    /// Records an error in both the file's and the session's error lists.
    /// Returns true when the session must abort.
    fn record(
        &self,
        err: &ParseError,
        file: &Path,
        session: &mut Session,
        file_errors: &mut Vec<PayloadError>,
    ) -> bool {
        let record = PayloadError::new(file.to_path_buf(), err.line(), err.to_string());
        session.errors.push(record.clone());
        file_errors.push(record);
        !self.options.catch_errors
            || matches!(
                err,
                ParseError::DepthExceeded { .. } | ParseError::IncludeLimitExceeded { .. }
            )
    }

    /// Parses the statements of one block (or the whole file at depth 0).
    ///
    /// In `consume` mode tokens are balanced but nothing is validated or
    /// emitted; this is how the parser skips the body of an erroneous or
    /// ignored block directive. Returns the directives plus an abort flag.
    #[allow(clippy::too_many_arguments)]
    fn parse_block(
        &self,
        lexer: &mut Lexer<'_>,
        ctx: Context,
        depth: usize,
        consume: bool,
        file: &Path,
        session: &mut Session,
        file_errors: &mut Vec<PayloadError>,
    ) -> (Vec<Directive>, bool) {
        let mut parsed: Vec<Directive> = Vec::new();

        loop {
            let token = match lexer.next_token() {
                Err(e) => {
                    session.eof_reported = true;
                    let abort = self.record(&e.into(), file, session, file_errors);
                    return (parsed, abort);
                }
                Ok(None) => {
                    if depth > 0 && !session.eof_reported {
                        session.eof_reported = true;
                        let err = ParseError::UnexpectedEof {
                            expecting: "\"}\"".to_string(),
                            line: lexer.line(),
                        };
                        let abort = self.record(&err, file, session, file_errors);
                        return (parsed, abort);
                    }
                    return (parsed, false);
                }
                Ok(Some(token)) => token,
            };

            if token.is_terminator() {
                match token.text.as_str() {
                    "}" => {
                        if depth == 0 {
                            let err = ParseError::UnexpectedToken {
                                token: "}".to_string(),
                                line: token.line,
                            };
                            if self.record(&err, file, session, file_errors) {
                                return (parsed, true);
                            }
                            continue;
                        }
                        return (parsed, false);
                    }
                    _ => {
                        // a stray ";" or "{" in statement-head position
                        let stray_block = token.text == "{";
                        let err = ParseError::UnexpectedToken {
                            token: token.text.clone(),
                            line: token.line,
                        };
                        if self.record(&err, file, session, file_errors) {
                            return (parsed, true);
                        }
                        if stray_block {
                            // balance the anonymous block so recovery can resume
                            let (_, aborted) = self.parse_block(
                                lexer,
                                Context::Unknown,
                                depth + 1,
                                true,
                                file,
                                session,
                                file_errors,
                            );
                            if aborted {
                                return (parsed, true);
                            }
                        }
                        continue;
                    }
                }
            }

            if token.is_comment() {
                if self.options.comments && !consume {
                    parsed.push(Directive::comment(token.line, token.text[1..].to_string()));
                }
                continue;
            }

            // statement head
            let mut stmt = Directive::new(token.text, token.line);
            let special = self.specials.classify(&stmt.directive);
            let mut trailing_comments: Vec<Directive> = Vec::new();

            // arguments up to the statement terminator
            let terminator = loop {
                match lexer.next_token() {
                    Err(e) => {
                        session.eof_reported = true;
                        let abort = self.record(&e.into(), file, session, file_errors);
                        return (parsed, abort);
                    }
                    Ok(None) => {
                        if session.eof_reported {
                            return (parsed, false);
                        }
                        session.eof_reported = true;
                        let err = ParseError::UnexpectedEof {
                            expecting: "\";\" or \"}\"".to_string(),
                            line: lexer.line(),
                        };
                        let abort = self.record(&err, file, session, file_errors);
                        return (parsed, abort);
                    }
                    Ok(Some(t)) if t.is_terminator() => break t,
                    Ok(Some(t)) if t.is_comment() => {
                        if self.options.comments && !consume {
                            trailing_comments
                                .push(Directive::comment(t.line, t.text[1..].to_string()));
                        }
                    }
                    Ok(Some(t)) => {
                        stmt.args.push(t.text);
                        stmt.quoted.push(t.quoted);
                    }
                }
            };

            if terminator.text == "}" {
                // statement was never terminated before the block closed
                let err = ParseError::UnexpectedToken {
                    token: "}".to_string(),
                    line: terminator.line,
                };
                if self.record(&err, file, session, file_errors) {
                    return (parsed, true);
                }
                parsed.append(&mut trailing_comments);
                if depth > 0 {
                    return (parsed, false);
                }
                continue;
            }
            let is_block = terminator.text == "{";

            match special {
                Some(SpecialForm::IfCondition) => {
                    if !stmt.args.is_empty() {
                        stmt.args = vec![stmt.args.join(" ")];
                        stmt.quoted = vec![false];
                    }
                }
                Some(SpecialForm::VerbatimTail) => {
                    if stmt.args.len() > 2 {
                        let tail_quoted = stmt.quoted[1..].iter().any(|&q| q);
                        let tail = stmt.args[1..].join(" ");
                        stmt.args.truncate(1);
                        stmt.quoted.truncate(1);
                        stmt.args.push(tail);
                        stmt.quoted.push(tail_quoted);
                    }
                }
                _ => {}
            }

            let is_lua = matches!(special, Some(SpecialForm::LuaBlock));

            if !consume {
                // ignored directives are filtered before validation, their
                // blocks consumed without being parsed
                if self.options.ignore.iter().any(|n| *n == stmt.directive) {
                    if is_block
                        && self.consume_block(lexer, is_lua, depth, file, session, file_errors)
                    {
                        return (parsed, true);
                    }
                    continue;
                }
                if let Err(e) = analyze(
                    &stmt.directive,
                    &stmt.args,
                    is_block,
                    stmt.line,
                    ctx,
                    self.catalog,
                    self.options.strict,
                    self.options.check_ctx,
                    self.options.check_args,
                ) {
                    let abort =
                        self.record(&ParseError::Directive(e), file, session, file_errors);
                    if abort {
                        return (parsed, true);
                    }
                    parsed.append(&mut trailing_comments);
                    if is_block
                        && self.consume_block(lexer, is_lua, depth, file, session, file_errors)
                    {
                        return (parsed, true);
                    }
                    continue;
                }
            }

            if is_block {
                if is_lua {
                    match lexer.lua_block_body() {
                        Ok(body) => {
                            stmt.args.push(body);
                            stmt.quoted.push(false);
                        }
                        Err(e) => {
                            session.eof_reported = true;
                            let abort = self.record(&e.into(), file, session, file_errors);
                            return (parsed, abort);
                        }
                    }
                } else {
                    if depth + 1 > self.options.max_depth {
                        let err = ParseError::DepthExceeded { line: stmt.line };
                        self.record(&err, file, session, file_errors);
                        return (parsed, true);
                    }
                    let child_ctx = enter_block_ctx(ctx, &stmt.directive);
                    let (children, aborted) = self.parse_block(
                        lexer,
                        child_ctx,
                        depth + 1,
                        consume,
                        file,
                        session,
                        file_errors,
                    );
                    if !consume {
                        stmt.block = Some(children);
                    }
                    if aborted {
                        if !consume {
                            parsed.push(stmt);
                        }
                        return (parsed, true);
                    }
                }
            }

            if consume {
                continue;
            }

            if stmt.directive == "include" && !self.options.single && !is_block {
                if stmt.args.len() != 1 {
                    // reachable only when argument checking is off
                    let err = ParseError::Directive(DirectiveError::InvalidArguments {
                        name: "include".to_string(),
                        line: stmt.line,
                    });
                    if self.record(&err, file, session, file_errors) {
                        return (parsed, true);
                    }
                } else if self.expand_include(&mut stmt, ctx, file, session, file_errors) {
                    parsed.push(stmt);
                    return (parsed, true);
                }
            }

            parsed.push(stmt);
            parsed.append(&mut trailing_comments);
        }
    }

    /// Balances and discards the block that follows an erroneous or ignored
    /// block directive. Returns true when the session must abort.
    fn consume_block(
        &self,
        lexer: &mut Lexer<'_>,
        is_lua: bool,
        depth: usize,
        file: &Path,
        session: &mut Session,
        file_errors: &mut Vec<PayloadError>,
    ) -> bool {
        if is_lua {
            match lexer.lua_block_body() {
                Ok(_) => false,
                Err(e) => {
                    session.eof_reported = true;
                    self.record(&e.into(), file, session, file_errors)
                }
            }
        } else {
            let (_, aborted) = self.parse_block(
                lexer,
                Context::Unknown,
                depth + 1,
                true,
                file,
                session,
                file_errors,
            );
            aborted
        }
    }

    /// Resolves an `include` argument against the root directory, queues the
    /// matched files and records their indices on the directive. A glob that
    /// matches nothing is not an error. Returns true on abort (file limit).
    fn expand_include(
        &self,
        stmt: &mut Directive,
        ctx: Context,
        file: &Path,
        session: &mut Session,
        file_errors: &mut Vec<PayloadError>,
    ) -> bool {
        let pattern = &stmt.args[0];
        let full = if Path::new(pattern).is_absolute() {
            PathBuf::from(pattern)
        } else {
            session.root_dir.join(pattern)
        };

        let mut targets: Vec<PathBuf> = Vec::new();
        if has_glob_magic(pattern) {
            if let Ok(entries) = glob(&full.to_string_lossy()) {
                for entry in entries.flatten() {
                    if entry.is_file() {
                        targets.push(entry);
                    }
                }
            }
            targets.sort();
        } else {
            targets.push(full);
        }

        let mut indices = Vec::with_capacity(targets.len());
        for target in targets {
            let normalized = normalize_path(&target);
            let index = match session.included.get(&normalized) {
                Some(&index) => index,
                None => {
                    if session.files.len() >= self.options.max_files {
                        let err = ParseError::IncludeLimitExceeded { line: stmt.line };
                        self.record(&err, file, session, file_errors);
                        stmt.includes = Some(indices);
                        return true;
                    }
                    let index = session.files.len();
                    session.included.insert(normalized, index);
                    session.files.push((target, ctx));
                    index
                }
            };
            indices.push(index);
        }
        stmt.includes = Some(indices);
        false
    }
}

/// Lexically normalizes a path for include de-duplication: `.` components
/// drop, `..` pops where possible. Symlinks are not resolved; the file limit
/// bounds pathological graphs built through them.
fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(Component::ParentDir);
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn has_glob_magic(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Post-processes a payload into a single synthetic file: every resolved
/// `include` directive is replaced by the directives of the files it pulled
/// in, recursively, with each directive stamped with its source file.
fn combine(payload: Payload) -> Payload {
    let Some(root) = payload.config.first() else {
        return payload;
    };
    let root_file = root.file.clone();

    let mut active = vec![false; payload.config.len()];
    let parsed = splice_file(&payload.config, 0, &mut active);

    let file_errors: Vec<PayloadError> = payload
        .config
        .iter()
        .flat_map(|c| c.errors.iter().cloned())
        .collect();
    let status = if file_errors.is_empty() {
        Status::Ok
    } else {
        Status::Failed
    };

    Payload {
        status: payload.status,
        errors: payload.errors,
        config: vec![FileConfig {
            file: root_file,
            status,
            errors: file_errors,
            parsed,
        }],
    }
}

fn splice_file(configs: &[FileConfig], index: usize, active: &mut [bool]) -> Vec<Directive> {
    if active[index] {
        // an include cycle that survived de-duplication (symlinks)
        return Vec::new();
    }
    active[index] = true;
    let file = configs[index].file.clone();
    let out = splice_items(configs, &configs[index].parsed, &file, active);
    active[index] = false;
    out
}

fn splice_items(
    configs: &[FileConfig],
    items: &[Directive],
    file: &Path,
    active: &mut [bool],
) -> Vec<Directive> {
    let mut out = Vec::new();
    for directive in items {
        if let Some(indices) = &directive.includes {
            for &index in indices {
                if index < configs.len() {
                    out.extend(splice_file(configs, index, active));
                }
            }
            continue;
        }
        let mut spliced = directive.clone();
        spliced.file = Some(file.to_path_buf());
        if let Some(block) = &directive.block {
            spliced.block = Some(splice_items(configs, block, file, active));
        }
        out.push(spliced);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Payload {
        parse_string(source, &ParseOptions::default())
    }

    fn parse_with(source: &str, options: &ParseOptions) -> Payload {
        parse_string(source, options)
    }

    #[test]
    fn test_minimal_config() {
        let payload = parse("events {}\nhttp { server { listen 80; } }\n");
        assert_eq!(payload.status, Status::Ok);
        assert!(payload.errors.is_empty());

        let parsed = &payload.config[0].parsed;
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].directive, "events");
        assert_eq!(parsed[0].block.as_deref(), Some(&[][..]));
        assert_eq!(parsed[1].directive, "http");

        let server = &parsed[1].block.as_ref().unwrap()[0];
        assert_eq!(server.directive, "server");
        let listen = &server.block.as_ref().unwrap()[0];
        assert_eq!(listen.directive, "listen");
        assert_eq!(listen.args, vec!["80"]);
        assert_eq!(listen.line, 2);
    }

    #[test]
    fn test_quoting() {
        let payload = parse("server_name \"a b\" 'c\"d' unquoted;");
        let d = &payload.config[0].parsed[0];
        assert_eq!(d.args, vec!["a b", "c\"d", "unquoted"]);
        assert_eq!(d.quoted, vec![true, true, false]);
        // unknown-context-free top level: server_name is not allowed in main
        assert_eq!(payload.status, Status::Failed);
    }

    #[test]
    fn test_if_condition_single_arg() {
        let payload = parse(
            "http { server { if ($request_method = POST) { return 405; } } }",
        );
        assert_eq!(payload.status, Status::Ok, "errors: {:?}", payload.errors);
        let http = &payload.config[0].parsed[0];
        let server = &http.block.as_ref().unwrap()[0];
        let if_dir = &server.block.as_ref().unwrap()[0];
        assert_eq!(if_dir.directive, "if");
        assert_eq!(if_dir.args, vec!["($request_method = POST)"]);
        let ret = &if_dir.block.as_ref().unwrap()[0];
        assert_eq!(ret.directive, "return");
        assert_eq!(ret.args, vec!["405"]);
    }

    #[test]
    fn test_set_verbatim_tail() {
        let payload = parse("http { server { location / { set $mobile rewritten to off; } } }");
        let loc = payload.config[0].parsed[0].block.as_ref().unwrap()[0]
            .block
            .as_ref()
            .unwrap()[0]
            .clone();
        let set = &loc.block.as_ref().unwrap()[0];
        assert_eq!(set.directive, "set");
        assert_eq!(set.args, vec!["$mobile", "rewritten to off"]);
    }

    #[test]
    fn test_comments_option() {
        let mut options = ParseOptions::default();
        options.comments = true;
        let payload = parse_with("# head\nevents {} # tail\n", &options);
        let parsed = &payload.config[0].parsed;
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].directive, "#");
        assert_eq!(parsed[0].comment.as_deref(), Some(" head"));
        assert_eq!(parsed[1].directive, "events");
        assert_eq!(parsed[2].comment.as_deref(), Some(" tail"));
    }

    #[test]
    fn test_comments_dropped_by_default() {
        let payload = parse("# head\nevents {}\n");
        assert_eq!(payload.config[0].parsed.len(), 1);
    }

    #[test]
    fn test_error_tolerance_unterminated_block() {
        let payload = parse("foo { bar");
        assert_eq!(payload.status, Status::Failed);
        assert_eq!(payload.errors.len(), 1);
        assert!(payload.errors[0].error.contains("unexpected end of file"));
        let parsed = &payload.config[0].parsed;
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].directive, "foo");
        assert_eq!(parsed[0].block.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_stray_semicolon_recovers() {
        let payload = parse("events {}\n;\nhttp {}\n");
        assert_eq!(payload.status, Status::Failed);
        assert_eq!(payload.errors.len(), 1);
        assert_eq!(payload.errors[0].error, "unexpected \";\"");
        let names: Vec<_> = payload.config[0]
            .parsed
            .iter()
            .map(|d| d.directive.as_str())
            .collect();
        assert_eq!(names, vec!["events", "http"]);
    }

    #[test]
    fn test_stray_close_brace() {
        let payload = parse("events {}\n}\nhttp {}\n");
        assert_eq!(payload.errors.len(), 1);
        assert_eq!(payload.errors[0].error, "unexpected \"}\"");
        assert_eq!(payload.config[0].parsed.len(), 2);
    }

    #[test]
    fn test_no_catch_stops_at_first_error() {
        let mut options = ParseOptions::default();
        options.catch_errors = false;
        let payload = parse_with("events {}\n;\nhttp {}\n", &options);
        assert_eq!(payload.status, Status::Failed);
        assert_eq!(payload.errors.len(), 1);
        // http was never reached
        assert_eq!(payload.config[0].parsed.len(), 1);
    }

    #[test]
    fn test_strict_unknown_directive() {
        let mut options = ParseOptions::default();
        options.strict = true;
        let payload = parse_with("flibberty_widget on;", &options);
        assert_eq!(payload.status, Status::Failed);
        assert_eq!(
            payload.errors[0].error,
            "unknown directive \"flibberty_widget\""
        );

        let payload = parse("flibberty_widget on;");
        assert_eq!(payload.status, Status::Ok);
        assert_eq!(payload.config[0].parsed[0].args, vec!["on"]);
    }

    #[test]
    fn test_context_validation() {
        let payload = parse("http { listen 80; }");
        assert_eq!(payload.status, Status::Failed);
        assert_eq!(
            payload.errors[0].error,
            "\"listen\" directive is not allowed here"
        );
        assert_eq!(payload.errors[0].line, Some(1));
    }

    #[test]
    fn test_check_ctx_disabled() {
        let mut options = ParseOptions::default();
        options.check_ctx = false;
        let payload = parse_with("http { listen 80; }", &options);
        assert_eq!(payload.status, Status::Ok, "errors: {:?}", payload.errors);
    }

    #[test]
    fn test_arity_validation() {
        let payload = parse("events { worker_connections; }");
        assert_eq!(
            payload.errors[0].error,
            "invalid number of arguments in \"worker_connections\" directive"
        );
    }

    #[test]
    fn test_check_args_disabled() {
        let mut options = ParseOptions::default();
        options.check_args = false;
        let payload = parse_with("events { worker_connections; }", &options);
        assert_eq!(payload.status, Status::Ok);
    }

    #[test]
    fn test_flag_value_error() {
        let payload = parse("events { accept_mutex maybe; }");
        assert_eq!(
            payload.errors[0].error,
            "invalid value \"maybe\" in \"accept_mutex\" directive, it must be \"on\" or \"off\""
        );
    }

    #[test]
    fn test_block_error_skips_body() {
        // the erroneous block's body must not leak statements
        let payload = parse("events on { worker_connections 1024; }\nhttp {}\n");
        assert_eq!(payload.status, Status::Failed);
        let names: Vec<_> = payload.config[0]
            .parsed
            .iter()
            .map(|d| d.directive.as_str())
            .collect();
        assert_eq!(names, vec!["http"]);
    }

    #[test]
    fn test_ignore_skips_validation() {
        let mut options = ParseOptions::default();
        // events with an argument would normally be an arity error
        options.ignore = vec!["events".to_string(), "gzip".to_string()];
        let payload = parse_with("events badarg {}\nhttp { gzip sideways; }\n", &options);
        assert_eq!(payload.status, Status::Ok, "errors: {:?}", payload.errors);
        let names: Vec<_> = payload.config[0]
            .parsed
            .iter()
            .map(|d| d.directive.as_str())
            .collect();
        assert_eq!(names, vec!["http"]);
        assert!(payload.config[0].parsed[0]
            .block
            .as_ref()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_map_block_freeform() {
        let payload = parse(
            "http { map $http_upgrade $connection_upgrade { default upgrade; '' close; ~^/news 1; } }",
        );
        assert_eq!(payload.status, Status::Ok, "errors: {:?}", payload.errors);
        let map = &payload.config[0].parsed[0].block.as_ref().unwrap()[0];
        assert_eq!(map.directive, "map");
        let entries = map.block.as_ref().unwrap();
        assert_eq!(entries[0].directive, "default");
        assert_eq!(entries[1].directive, "");
        assert_eq!(entries[1].args, vec!["close"]);
        assert_eq!(entries[2].directive, "~^/news");
    }

    #[test]
    fn test_types_block_freeform() {
        let payload = parse("http { types { text/html html htm; image/png png; } }");
        assert_eq!(payload.status, Status::Ok, "errors: {:?}", payload.errors);
        let types = &payload.config[0].parsed[0].block.as_ref().unwrap()[0];
        assert_eq!(types.block.as_ref().unwrap()[0].directive, "text/html");
    }

    #[test]
    fn test_lua_block_directive() {
        let payload = parse(
            "http { server { location / { content_by_lua_block {\n    ngx.say(\"hi { there }\")\n} } } }",
        );
        assert_eq!(payload.status, Status::Ok, "errors: {:?}", payload.errors);
        let loc = payload.config[0].parsed[0].block.as_ref().unwrap()[0]
            .block
            .as_ref()
            .unwrap()[0]
            .clone();
        let lua = &loc.block.as_ref().unwrap()[0];
        assert_eq!(lua.directive, "content_by_lua_block");
        assert!(lua.block.is_none());
        assert_eq!(lua.args.len(), 1);
        assert_eq!(lua.args[0], "ngx.say(\"hi { there }\")");
    }

    #[test]
    fn test_depth_limit() {
        let mut options = ParseOptions::default();
        options.max_depth = 4;
        let source = "a { b { c { d { e { f 1; } } } } }";
        let payload = parse_with(source, &options);
        assert_eq!(payload.status, Status::Failed);
        assert!(payload.errors[0]
            .error
            .contains("maximum number of nested blocks"));
    }

    #[test]
    fn test_single_mode_keeps_include_verbatim() {
        let payload = parse("include conf.d/*.conf;");
        let d = &payload.config[0].parsed[0];
        assert_eq!(d.directive, "include");
        assert_eq!(d.args, vec!["conf.d/*.conf"]);
        assert!(d.includes.is_none());
        assert_eq!(payload.config.len(), 1);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/etc/nginx/./conf.d/../nginx.conf")),
            PathBuf::from("/etc/nginx/nginx.conf")
        );
        assert_eq!(normalize_path(Path::new("a/./b")), PathBuf::from("a/b"));
    }

    #[test]
    fn test_quoted_terminators_are_arguments() {
        let payload = parse("events { worker_connections ';'; }");
        assert_eq!(payload.status, Status::Ok, "errors: {:?}", payload.errors);
        let events = &payload.config[0].parsed[0];
        assert_eq!(events.block.as_ref().unwrap()[0].args, vec![";"]);
    }
}
