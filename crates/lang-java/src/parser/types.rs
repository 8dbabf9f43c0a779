use super::TypeName;
use crate::error::NameSyntaxError;
use crate::naming::{TYPE_SEPARATOR, WILDCARD, is_identifier_part, is_identifier_start};
use javadjust_api::WildcardKind;

type ParseResult<T> = Result<T, NameSyntaxError>;

/// Deepest accepted nesting of type arguments and wildcard bounds.
pub(super) const MAX_NESTING: usize = 256;

/// Whitespace-insensitive recursive-descent parser over one signature.
pub(super) struct Parser<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            depth: 0,
        }
    }

    pub(super) fn parse_type_name(&mut self) -> ParseResult<TypeName> {
        let name = self.parse_type()?;
        self.skip_ws();
        if !self.is_eof() {
            return Err(self.error("unexpected trailing text"));
        }
        Ok(name)
    }

    fn parse_type(&mut self) -> ParseResult<TypeName> {
        if self.depth >= MAX_NESTING {
            return Err(self.error("type nesting too deep"));
        }
        self.depth += 1;
        let name = self.parse_nested_type();
        self.depth -= 1;
        name
    }

    fn parse_nested_type(&mut self) -> ParseResult<TypeName> {
        self.skip_ws();
        if self.is_eof() {
            return Err(self.error("expected a type name"));
        }
        if self.consume_char('?') {
            return self.parse_wildcard();
        }
        let mut name = self.parse_qualified_name()?;
        name.array_rank = self.parse_array_suffix()?;
        Ok(name)
    }

    fn parse_wildcard(&mut self) -> ParseResult<TypeName> {
        self.skip_ws();
        let bound = if self.consume_keyword("extends") {
            WildcardKind::Extends
        } else if self.consume_keyword("super") {
            WildcardKind::Super
        } else {
            WildcardKind::Unbounded
        };

        let mut constraints = Vec::new();
        if bound != WildcardKind::Unbounded {
            constraints.push(self.parse_type()?);
            loop {
                self.skip_ws();
                if !self.consume_char('&') {
                    break;
                }
                constraints.push(self.parse_type()?);
            }
        }

        self.skip_ws();
        if self.peek() == Some('[') || self.rest().starts_with("...") {
            return Err(self.error("array suffix on a wildcard"));
        }

        Ok(TypeName {
            dotted_name: WILDCARD.into(),
            bound,
            constraints,
            ..TypeName::default()
        })
    }

    fn parse_qualified_name(&mut self) -> ParseResult<TypeName> {
        let mut dotted = String::new();
        let mut arguments: Option<Vec<TypeName>> = None;
        loop {
            self.skip_ws();
            dotted.push_str(self.parse_identifier()?);
            self.skip_ws();
            if self.consume_char('<') {
                let args = self.parse_type_arguments()?;
                arguments.get_or_insert_with(Vec::new).extend(args);
                self.skip_ws();
            }
            // `...` is a varargs suffix, not a separator.
            if self.rest().starts_with("...") || !self.consume_char(TYPE_SEPARATOR) {
                break;
            }
            dotted.push(TYPE_SEPARATOR);
        }
        Ok(TypeName {
            dotted_name: dotted.into(),
            generic_arguments: arguments,
            ..TypeName::default()
        })
    }

    /// Parses the list after an already consumed `<`, including the closing `>`.
    fn parse_type_arguments(&mut self) -> ParseResult<Vec<TypeName>> {
        self.skip_ws();
        if self.peek() == Some('>') {
            return Err(self.error("empty type argument list"));
        }
        let mut args = Vec::new();
        loop {
            args.push(self.parse_type()?);
            self.skip_ws();
            if self.consume_char(',') {
                continue;
            }
            if self.consume_char('>') {
                return Ok(args);
            }
            return Err(self.error("expected ',' or '>'"));
        }
    }

    fn parse_array_suffix(&mut self) -> ParseResult<u32> {
        let mut rank = 0;
        loop {
            self.skip_ws();
            if self.consume_char('[') {
                self.skip_ws();
                if !self.consume_char(']') {
                    return Err(self.error("expected ']'"));
                }
                rank += 1;
            } else if self.rest().starts_with("...") {
                self.pos += 3;
                return Ok(rank + 1);
            } else {
                return Ok(rank);
            }
        }
    }

    fn parse_identifier(&mut self) -> ParseResult<&'a str> {
        let start = self.pos;
        match self.peek() {
            Some(c) if is_identifier_start(c) => self.pos += c.len_utf8(),
            _ => return Err(self.error("expected an identifier")),
        }
        while let Some(c) = self.peek().filter(|c| is_identifier_part(*c)) {
            self.pos += c.len_utf8();
        }
        Ok(&self.text[start..self.pos])
    }

    /// Consume `keyword` only when it is not the prefix of a longer identifier.
    fn consume_keyword(&mut self, keyword: &str) -> bool {
        let Some(after) = self.rest().strip_prefix(keyword) else {
            return false;
        };
        if after.chars().next().is_some_and(is_identifier_part) {
            return false;
        }
        self.pos += keyword.len();
        true
    }

    fn consume_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn error(&self, reason: &'static str) -> NameSyntaxError {
        NameSyntaxError {
            text: self.text.to_string(),
            offset: self.pos,
            reason,
        }
    }
}
