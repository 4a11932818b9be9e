//! Minimal token cursor over a single JavaScript statement line.

use super::error::TraceParseError;

pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str, line: usize) -> Self {
        Self { src, pos: 0, line }
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn unexpected(&self, expected: &'static str) -> TraceParseError {
        let found = match self.rest().chars().next() {
            Some(c) => format!("'{}'", c),
            None => "end of line".to_string(),
        };
        TraceParseError::UnexpectedToken {
            line: self.line,
            expected,
            found,
        }
    }

    /// Consume `ch` after optional whitespace.
    pub(crate) fn eat(&mut self, ch: char, expected: &'static str) -> Result<(), TraceParseError> {
        self.skip_ws();
        if self.rest().starts_with(ch) {
            self.pos += ch.len_utf8();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consume `ch` if present.
    pub(crate) fn eat_opt(&mut self, ch: char) -> bool {
        self.skip_ws();
        if self.rest().starts_with(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    pub(crate) fn ident(&mut self) -> Result<&'a str, TraceParseError> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.unexpected("identifier"));
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    /// A single- or double-quoted string literal, unescaped.
    pub(crate) fn string(&mut self) -> Result<String, TraceParseError> {
        self.skip_ws();
        let rest = self.rest();
        let mut chars = rest.char_indices();
        let quote = match chars.next() {
            Some((_, q @ ('"' | '\''))) => q,
            _ => return Err(self.unexpected("string literal")),
        };
        let line = self.line;
        let mut out = String::new();
        while let Some((i, c)) = chars.next() {
            if c == quote {
                self.pos += i + c.len_utf8();
                return Ok(out);
            }
            if c != '\\' {
                out.push(c);
                continue;
            }
            let (_, esc) = chars
                .next()
                .ok_or(TraceParseError::UnterminatedString { line })?;
            match esc {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                'r' => out.push('\r'),
                '\\' | '"' | '\'' | '/' => out.push(esc),
                'u' => {
                    let hex: String = chars.by_ref().take(4).map(|(_, c)| c).collect();
                    let decoded = (hex.len() == 4)
                        .then(|| u32::from_str_radix(&hex, 16).ok())
                        .flatten()
                        .and_then(char::from_u32)
                        .ok_or(TraceParseError::BadEscape { line, found: 'u' })?;
                    out.push(decoded);
                }
                other => return Err(TraceParseError::BadEscape { line, found: other }),
            }
        }
        Err(TraceParseError::UnterminatedString { line })
    }

    /// Succeed only if nothing but whitespace remains.
    pub(crate) fn finish(&mut self) -> Result<(), TraceParseError> {
        self.skip_ws();
        if self.rest().is_empty() {
            Ok(())
        } else {
            Err(self.unexpected("end of statement"))
        }
    }
}
