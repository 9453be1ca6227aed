//! Lexer for the nginx configuration language.
//!
//! Converts source text into a lazy stream of [`Token`]s. nginx's lexer has a
//! few quirks that differ from typical shells and are reproduced here:
//!
//! - `{`, `}` and `;` are always standalone tokens, never part of a word.
//! - A quoted fragment directly adjacent to another fragment merges into a
//!   single token (`foo"bar baz"` lexes as one token `foobar baz`).
//! - Inside quotes only `\\` and the active quote character are escapable;
//!   any other backslash passes through literally.
//! - `#` starts a comment only at a token boundary; `foo#bar` is a word.
//!
//! The lexer also knows how to capture the body of an OpenResty
//! `*_by_lua_block` directive verbatim, since Lua code cannot be tokenized
//! with the rules above (see [`Lexer::lua_block_body`]).

use crate::error::LexerError;

/// A single configuration token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text with enclosing quotes stripped. Comment tokens keep their
    /// leading `#`.
    pub text: String,
    /// 1-based source line of the token's first character. For quoted tokens
    /// spanning lines this is the opening-quote line.
    pub line: usize,
    /// Whether any fragment of the token was quoted in the source.
    pub quoted: bool,
}

impl Token {
    fn new(text: impl Into<String>, line: usize, quoted: bool) -> Self {
        Self {
            text: text.into(),
            line,
            quoted,
        }
    }

    /// True for `{`, `}` and `;` tokens (which are never quoted).
    pub fn is_terminator(&self) -> bool {
        !self.quoted && matches!(self.text.as_str(), "{" | "}" | ";")
    }

    /// True for comment tokens.
    pub fn is_comment(&self) -> bool {
        !self.quoted && self.text.starts_with('#')
    }
}

/// Lexer over a single file's contents.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
        }
    }

    /// The line the cursor is currently on.
    pub fn line(&self) -> usize {
        self.line
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
                self.bump();
            } else {
                break;
            }
        }
    }

    /// Produces the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        self.skip_whitespace();

        let Some(ch) = self.peek() else {
            return Ok(None);
        };
        let line = self.line;

        // Comments run to (but do not include) the newline.
        if ch == '#' {
            let mut text = String::new();
            while let Some(c) = self.peek() {
                if c == '\n' {
                    break;
                }
                text.push(c);
                self.bump();
            }
            return Ok(Some(Token::new(text, line, false)));
        }

        if ch == '{' || ch == '}' || ch == ';' {
            self.bump();
            return Ok(Some(Token::new(ch, line, false)));
        }

        // A word is a run of adjacent fragments: unquoted spans and quoted
        // strings. The token is quoted if any fragment was.
        let mut text = String::new();
        let mut quoted = false;
        loop {
            match self.peek() {
                None => break,
                Some(' ' | '\t' | '\r' | '\n' | '{' | '}' | ';') => break,
                Some(q @ ('\'' | '"')) => {
                    let quote_line = self.line;
                    self.bump();
                    self.read_quoted(q, quote_line, &mut text)?;
                    quoted = true;
                }
                Some(_) => {
                    while let Some(c) = self.peek() {
                        match c {
                            ' ' | '\t' | '\r' | '\n' | '{' | '}' | ';' | '\'' | '"' => break,
                            _ => {
                                text.push(c);
                                self.bump();
                            }
                        }
                    }
                }
            }
        }

        Ok(Some(Token::new(text, line, quoted)))
    }

    fn read_quoted(
        &mut self,
        quote: char,
        open_line: usize,
        out: &mut String,
    ) -> Result<(), LexerError> {
        loop {
            match self.bump() {
                None => {
                    return Err(LexerError::UnterminatedString {
                        quote,
                        line: open_line,
                    })
                }
                Some(c) if c == quote => return Ok(()),
                Some('\\') => match self.bump() {
                    None => {
                        return Err(LexerError::UnterminatedString {
                            quote,
                            line: open_line,
                        })
                    }
                    Some('\\') => out.push('\\'),
                    Some(c) if c == quote => out.push(c),
                    Some(c) => {
                        out.push('\\');
                        out.push(c);
                    }
                },
                Some(c) => out.push(c),
            }
        }
    }

    /// Captures the body of a `*_by_lua_block` directive.
    ///
    /// Call this right after the opening `{` token was consumed. Scans until
    /// the matching `}` with minimal Lua awareness: quoted strings with
    /// backslash escapes, `--` line comments, `--[[ ]]` / `[=*[ ]=*]` long
    /// brackets, and brace balance outside all of those. The body is returned
    /// with surrounding whitespace trimmed.
    pub fn lua_block_body(&mut self) -> Result<String, LexerError> {
        let open_line = self.line;
        let mut body = String::new();
        let mut depth = 1usize;

        loop {
            let Some(ch) = self.bump() else {
                return Err(LexerError::UnterminatedLuaBlock { line: open_line });
            };
            match ch {
                '{' => {
                    depth += 1;
                    body.push(ch);
                }
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(body.trim().to_string());
                    }
                    body.push(ch);
                }
                '\'' | '"' => {
                    body.push(ch);
                    self.copy_lua_string(ch, open_line, &mut body)?;
                }
                '[' => {
                    body.push(ch);
                    if let Some(level) = self.peek_long_bracket() {
                        self.copy_long_bracket(level, open_line, &mut body)?;
                    }
                }
                '-' => {
                    body.push(ch);
                    if self.peek() == Some('-') {
                        body.push('-');
                        self.bump();
                        if self.peek() == Some('[') {
                            body.push('[');
                            self.bump();
                            if let Some(level) = self.peek_long_bracket() {
                                self.copy_long_bracket(level, open_line, &mut body)?;
                                continue;
                            }
                        }
                        // plain line comment
                        while let Some(c) = self.peek() {
                            if c == '\n' {
                                break;
                            }
                            body.push(c);
                            self.bump();
                        }
                    }
                }
                _ => body.push(ch),
            }
        }
    }

    /// Copies a Lua string literal (opening quote already consumed).
    fn copy_lua_string(
        &mut self,
        quote: char,
        open_line: usize,
        out: &mut String,
    ) -> Result<(), LexerError> {
        loop {
            match self.bump() {
                None => return Err(LexerError::UnterminatedLuaBlock { line: open_line }),
                Some('\\') => {
                    out.push('\\');
                    if let Some(c) = self.bump() {
                        out.push(c);
                    }
                }
                Some(c) => {
                    out.push(c);
                    if c == quote {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// After an initial `[`, checks for `=*[` and returns the `=` count.
    fn peek_long_bracket(&self) -> Option<usize> {
        let rest = &self.source[self.pos..];
        let level = rest.chars().take_while(|&c| c == '=').count();
        if rest[level..].starts_with('[') {
            Some(level)
        } else {
            None
        }
    }

    /// Copies a long-bracket body up to and including its `]=*]` closer.
    /// The cursor sits just after the initial `[`.
    fn copy_long_bracket(
        &mut self,
        level: usize,
        open_line: usize,
        out: &mut String,
    ) -> Result<(), LexerError> {
        for _ in 0..level {
            out.push('=');
            self.bump();
        }
        out.push('[');
        self.bump();

        let closer: String = std::iter::once(']')
            .chain(std::iter::repeat('=').take(level))
            .chain(std::iter::once(']'))
            .collect();
        loop {
            if self.source[self.pos..].starts_with(&closer) {
                for _ in 0..closer.len() {
                    if let Some(c) = self.bump() {
                        out.push(c);
                    }
                }
                return Ok(());
            }
            match self.bump() {
                None => return Err(LexerError::UnterminatedLuaBlock { line: open_line }),
                Some(c) => out.push(c),
            }
        }
    }

    /// Tokenizes the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().unwrap()
    }

    fn texts(source: &str) -> Vec<String> {
        lex(source).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_simple_directive() {
        assert_eq!(texts("listen 80;"), vec!["listen", "80", ";"]);
    }

    #[test]
    fn test_block() {
        assert_eq!(texts("http { }"), vec!["http", "{", "}"]);
    }

    #[test]
    fn test_braces_split_words() {
        // terminators are standalone even without whitespace
        assert_eq!(texts("events{listen 80;}"), vec!["events", "{", "listen", "80", ";", "}"]);
    }

    #[test]
    fn test_quoting() {
        let tokens = lex(r#"server_name "a b" 'c"d' unquoted;"#);
        assert_eq!(tokens[1].text, "a b");
        assert!(tokens[1].quoted);
        assert_eq!(tokens[2].text, "c\"d");
        assert!(tokens[2].quoted);
        assert_eq!(tokens[3].text, "unquoted");
        assert!(!tokens[3].quoted);
    }

    #[test]
    fn test_escapes_in_quotes() {
        // only \\ and the active quote are unescaped
        let tokens = lex(r#"log_format main "a\"b\\c\nd";"#);
        assert_eq!(tokens[2].text, "a\"b\\c\\nd");
    }

    #[test]
    fn test_adjacent_fragments_merge() {
        let tokens = lex(r#"root foo"bar baz"qux;"#);
        assert_eq!(tokens[1].text, "foobar bazqux");
        assert!(tokens[1].quoted);
    }

    #[test]
    fn test_quoted_token_adjacent_to_semicolon() {
        let tokens = lex(r#"server_name "x";"#);
        assert_eq!(tokens[1].text, "x");
        assert!(tokens[1].quoted);
        assert_eq!(tokens[2].text, ";");
    }

    #[test]
    fn test_comment() {
        let tokens = lex("# a comment\nlisten 80;");
        assert_eq!(tokens[0].text, "# a comment");
        assert!(tokens[0].is_comment());
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].text, "listen");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_hash_inside_word() {
        assert_eq!(texts("location foo#bar {"), vec!["location", "foo#bar", "{"]);
    }

    #[test]
    fn test_line_numbers() {
        let tokens = lex("http {\n    listen 80;\n}");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[2].line, 2);
        assert_eq!(tokens[5].line, 3);
    }

    #[test]
    fn test_newline_in_quoted_string() {
        let tokens = lex("log_format main 'line1\nline2';\nlisten 80;");
        assert_eq!(tokens[2].text, "line1\nline2");
        // the token keeps the opening-quote line
        assert_eq!(tokens[2].line, 1);
        // subsequent tokens account for the embedded newline
        assert_eq!(tokens[4].line, 3);
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("set $a \"oops;").tokenize().unwrap_err();
        match err {
            LexerError::UnterminatedString { quote, line } => {
                assert_eq!(quote, '"');
                assert_eq!(line, 1);
            }
            e => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_empty_quoted_token() {
        let tokens = lex("map $a $b { '' off; }");
        assert_eq!(tokens[4].text, "");
        assert!(tokens[4].quoted);
    }

    #[test]
    fn test_utf8_passthrough() {
        let tokens = lex("# コメント\nreturn 200 \"こんにちは\";");
        assert_eq!(tokens[0].text, "# コメント");
        assert_eq!(tokens[3].text, "こんにちは");
    }

    #[test]
    fn test_glob_pattern_argument() {
        assert_eq!(
            texts("include /etc/nginx/conf.d/*.conf;"),
            vec!["include", "/etc/nginx/conf.d/*.conf", ";"]
        );
    }

    #[test]
    fn test_lua_block_body() {
        let src = "{\n    local t = {1, 2, 3}\n    ngx.say(\"}\")\n}";
        let mut lexer = Lexer::new(src);
        // consume the opening brace token first
        let open = lexer.next_token().unwrap().unwrap();
        assert_eq!(open.text, "{");
        let body = lexer.lua_block_body().unwrap();
        assert!(body.contains("local t = {1, 2, 3}"));
        assert!(body.contains("ngx.say(\"}\")"));
    }

    #[test]
    fn test_lua_block_long_bracket_and_comment() {
        let src = "{ s = [[not a } closer]] --[[ also } here ]]\n-- trailing } comment\n}";
        let mut lexer = Lexer::new(src);
        lexer.next_token().unwrap();
        let body = lexer.lua_block_body().unwrap();
        assert!(body.contains("[[not a } closer]]"));
        assert!(body.contains("--[[ also } here ]]"));
        assert!(body.contains("-- trailing } comment"));
    }

    #[test]
    fn test_lua_block_unterminated() {
        let mut lexer = Lexer::new("{ ngx.say('hi')");
        lexer.next_token().unwrap();
        let err = lexer.lua_block_body().unwrap_err();
        assert!(matches!(err, LexerError::UnterminatedLuaBlock { .. }));
    }
}
