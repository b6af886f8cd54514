//! Text form of the technologies column: `['Django', 'PostgreSQL']`.
//! Reading accepts only a bracketed list of quoted strings, nothing is ever evaluated.
use std::collections::BTreeSet;

use crate::{Error, Result};

pub fn format_technologies<'a, I>(technologies: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let items = technologies
        .into_iter()
        .map(|technology| quote(technology))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", items)
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

/// Parse `[ 'a', "b", ]`. An empty cell is an empty set.
pub fn parse_technologies(cell: &str) -> Result<BTreeSet<String>> {
    let mut technologies = BTreeSet::new();
    if cell.trim().is_empty() {
        return Ok(technologies);
    }
    let mut cursor = Cursor { input: cell, pos: 0 };
    cursor.skip_whitespace();
    cursor.expect('[')?;
    cursor.skip_whitespace();
    if cursor.peek() == Some(']') {
        cursor.bump();
    } else {
        loop {
            technologies.insert(cursor.string()?);
            cursor.skip_whitespace();
            match cursor.bump() {
                Some(',') => {
                    cursor.skip_whitespace();
                    if cursor.peek() == Some(']') {
                        cursor.bump();
                        break;
                    }
                }
                Some(']') => break,
                _ => return Err(cursor.error("expected ',' or ']'")),
            }
        }
    }
    cursor.skip_whitespace();
    if cursor.pos != cell.len() {
        return Err(cursor.error("unexpected characters after the list"));
    }
    Ok(technologies)
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            _ => Err(self.error("expected '['")),
        }
    }

    fn string(&mut self) -> Result<String> {
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(self.error("expected a quoted string")),
        };
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some('\\') => match self.bump() {
                    Some(c @ ('\\' | '\'' | '"')) => value.push(c),
                    _ => return Err(self.error("unsupported escape sequence")),
                },
                Some(c) if c == quote => return Ok(value),
                Some(c) => value.push(c),
            }
        }
    }

    fn error(&self, reason: &'static str) -> Error {
        Error::MalformedTechnologies {
            position: self.pos,
            reason,
        }
    }
}
