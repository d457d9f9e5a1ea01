//! Parser for list and tuple literals such as `['A', "B", 3]`.
//!
//! Only the literal subset that shows up in serialized list cells is
//! accepted: quoted strings (optionally `u`/`r` prefixed), numbers,
//! `True`/`False`/`None`, and nested lists or tuples up to [`MAX_DEPTH`]
//! levels. Everything else is reported as a [`LiteralError`] so the
//! caller can fall back to plain comma splitting.

use std::fmt::{self, Display};

use marquee_core::{format_float, quote_text};

/// A successfully parsed literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<LiteralValue>),
    Tuple(Vec<LiteralValue>),
}

impl LiteralValue {
    /// Elements of a list or tuple literal, `None` for scalars.
    pub fn into_sequence(self) -> Option<Vec<LiteralValue>> {
        match self {
            LiteralValue::List(items) | LiteralValue::Tuple(items) => Some(items),
            _ => None,
        }
    }

    fn repr(&self) -> String {
        match self {
            LiteralValue::Str(text) => quote_text(text),
            other => other.to_string(),
        }
    }
}

fn join_repr(items: &[LiteralValue]) -> String {
    items
        .iter()
        .map(LiteralValue::repr)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::None => f.write_str("None"),
            LiteralValue::Bool(true) => f.write_str("True"),
            LiteralValue::Bool(false) => f.write_str("False"),
            LiteralValue::Int(value) => write!(f, "{value}"),
            LiteralValue::Float(value) => f.write_str(&format_float(*value)),
            LiteralValue::Str(text) => f.write_str(text),
            LiteralValue::List(items) => write!(f, "[{}]", join_repr(items)),
            LiteralValue::Tuple(items) if items.len() == 1 => write!(f, "({},)", items[0].repr()),
            LiteralValue::Tuple(items) => write!(f, "({})", join_repr(items)),
        }
    }
}

/// Why a literal failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralError {
    /// Byte offset where parsing stopped.
    pub offset: usize,
    /// Short description of the failure.
    pub reason: &'static str,
}

impl Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.reason, self.offset)
    }
}

impl std::error::Error for LiteralError {}

/// Deepest list/tuple nesting accepted before parsing gives up.
pub const MAX_DEPTH: usize = 128;

/// Parses the whole input as a single literal.
pub fn parse_literal(text: &str) -> Result<LiteralValue, LiteralError> {
    let mut parser = Parser {
        text,
        pos: 0,
        depth: 0,
    };
    let value = parser.value()?;
    parser.skip_ws();
    if parser.pos != text.len() {
        return Err(parser.error("trailing characters"));
    }
    Ok(value)
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, reason: &'static str) -> LiteralError {
        LiteralError {
            offset: self.pos,
            reason,
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn value(&mut self) -> Result<LiteralValue, LiteralError> {
        self.skip_ws();
        match self.peek() {
            Some('[') => self.list(),
            Some('(') => self.tuple(),
            Some('\'') | Some('"') => self.strings(),
            Some(_) if self.string_prefix().is_some() => self.strings(),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => self.number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.keyword(),
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn list(&mut self) -> Result<LiteralValue, LiteralError> {
        self.bump();
        let (items, _) = self.nested(']')?;
        Ok(LiteralValue::List(items))
    }

    fn tuple(&mut self) -> Result<LiteralValue, LiteralError> {
        self.bump();
        let (mut items, saw_comma) = self.nested(')')?;
        // `(x)` is a parenthesized scalar, not a one-element tuple.
        if items.len() == 1 && !saw_comma {
            return Ok(items.remove(0));
        }
        Ok(LiteralValue::Tuple(items))
    }

    fn nested(&mut self, close: char) -> Result<(Vec<LiteralValue>, bool), LiteralError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let result = self.elements(close);
        self.depth -= 1;
        result
    }

    /// Comma separated values up to `close`; reports whether any comma was seen.
    fn elements(&mut self, close: char) -> Result<(Vec<LiteralValue>, bool), LiteralError> {
        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            if self.eat(close) {
                return Ok((items, saw_comma));
            }
            items.push(self.value()?);
            if self.eat(',') {
                saw_comma = true;
                continue;
            }
            if self.eat(close) {
                return Ok((items, saw_comma));
            }
            return Err(self.error("expected separator"));
        }
    }

    /// A `u`/`U`/`r`/`R` prefix directly followed by a quote; `Some(true)` when raw.
    fn string_prefix(&self) -> Option<bool> {
        let mut chars = self.text[self.pos..].chars();
        let prefix = chars.next()?;
        if !matches!(chars.next(), Some('\'') | Some('"')) {
            return None;
        }
        match prefix {
            'u' | 'U' => Some(false),
            'r' | 'R' => Some(true),
            _ => None,
        }
    }

    /// One or more adjacent string literals, concatenated.
    fn strings(&mut self) -> Result<LiteralValue, LiteralError> {
        let mut out = String::new();
        loop {
            let raw = match self.string_prefix() {
                Some(raw) => {
                    self.bump();
                    raw
                }
                None => false,
            };
            self.string_into(&mut out, raw)?;
            self.skip_ws();
            if !matches!(self.peek(), Some('\'') | Some('"')) && self.string_prefix().is_none() {
                return Ok(LiteralValue::Str(out));
            }
        }
    }

    fn string_into(&mut self, out: &mut String, raw: bool) -> Result<(), LiteralError> {
        let quote = self.bump().ok_or_else(|| self.error("expected quote"))?;
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(()),
                Some('\\') if raw => {
                    // Raw strings keep the backslash and never end on an escaped quote.
                    out.push('\\');
                    if let Some(next) = self.bump() {
                        out.push(next);
                    }
                }
                Some('\\') => self.escape_into(out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn escape_into(&mut self, out: &mut String) -> Result<(), LiteralError> {
        match self.bump() {
            None => Err(self.error("unterminated escape")),
            Some('n') => {
                out.push('\n');
                Ok(())
            }
            Some('t') => {
                out.push('\t');
                Ok(())
            }
            Some('r') => {
                out.push('\r');
                Ok(())
            }
            Some('0') => {
                out.push('\0');
                Ok(())
            }
            Some('\n') => Ok(()),
            Some(c @ ('\\' | '\'' | '"')) => {
                out.push(c);
                Ok(())
            }
            Some('x') => self.hex_escape_into(2, out),
            Some('u') => self.hex_escape_into(4, out),
            Some('U') => self.hex_escape_into(8, out),
            Some(other) => {
                // Unknown escapes keep their backslash.
                out.push('\\');
                out.push(other);
                Ok(())
            }
        }
    }

    fn hex_escape_into(&mut self, digits: usize, out: &mut String) -> Result<(), LiteralError> {
        let end = self.pos + digits;
        let hex = self
            .text
            .get(self.pos..end)
            .ok_or_else(|| self.error("truncated escape"))?;
        let code = u32::from_str_radix(hex, 16).map_err(|_| self.error("invalid escape"))?;
        let ch = char::from_u32(code).ok_or_else(|| self.error("invalid code point"))?;
        self.pos = end;
        out.push(ch);
        Ok(())
    }

    fn number(&mut self) -> Result<LiteralValue, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.bump();
        }
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {}
                '.' => is_float = true,
                'e' | 'E' => {
                    is_float = true;
                    self.bump();
                    if matches!(self.peek(), Some('-') | Some('+')) {
                        self.bump();
                    }
                    continue;
                }
                _ => break,
            }
            self.bump();
        }
        let token = &self.text[start..self.pos];
        if is_float {
            token
                .parse::<f64>()
                .map(LiteralValue::Float)
                .map_err(|_| self.error("invalid float"))
        } else {
            token
                .parse::<i64>()
                .map(LiteralValue::Int)
                .map_err(|_| self.error("invalid integer"))
        }
    }

    fn keyword(&mut self) -> Result<LiteralValue, LiteralError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        match &self.text[start..self.pos] {
            "None" => Ok(LiteralValue::None),
            "True" => Ok(LiteralValue::Bool(true)),
            "False" => Ok(LiteralValue::Bool(false)),
            _ => {
                self.pos = start;
                Err(self.error("bare identifier"))
            }
        }
    }
}
