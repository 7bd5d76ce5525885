// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Token sources for reading the text wire format.
//!
//! The wire format is a stream of whitespace-delimited tokens. Line breaks are
//! what the writer emits, but the reader treats any ASCII whitespace as a
//! separator.

use crate::error::{CodecError, CodecResult};
use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

/// A source of whitespace-delimited tokens.
pub trait TokenSource {
    /// Next token, or `None` once the stream is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;

    /// 1-based line number of the most recently returned token.
    fn line(&self) -> usize;
}

impl<'a> dyn TokenSource + 'a {
    /// Read the next token, failing if the stream is exhausted.
    pub fn expect_token(&mut self, field: &'static str) -> CodecResult<String> {
        self.next_token()?
            .ok_or(CodecError::UnexpectedEof { field })
    }

    /// Read the next token and parse it as `T`.
    pub fn parse<T: FromStr>(&mut self, field: &'static str) -> CodecResult<T> {
        let token = self.expect_token(field)?;
        let line = self.line();
        token
            .parse()
            .map_err(|_| CodecError::Parse { field, token, line })
    }
}

/// Tokenizer over any buffered reader.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line_buf: String,
    line: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line_buf: String::new(),
            line: 0,
        }
    }

    /// Unwrap the underlying reader. Tokens already split from the current
    /// line are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> TokenSource for TokenReader<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            self.line_buf.clear();
            if self.reader.read_line(&mut self.line_buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending
                .extend(self.line_buf.split_whitespace().map(str::to_owned));
        }
    }

    fn line(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_across_lines() {
        let mut reader = TokenReader::new("2\n1 Alice\n\n  2\t12\n".as_bytes());
        let mut tokens = Vec::new();
        while let Some(token) = reader.next_token().expect("read") {
            tokens.push((token, reader.line()));
        }

        assert_eq!(
            tokens,
            vec![
                ("2".to_string(), 1),
                ("1".to_string(), 2),
                ("Alice".to_string(), 2),
                ("2".to_string(), 4),
                ("12".to_string(), 4),
            ]
        );
    }

    #[test]
    fn test_empty_stream() {
        let mut reader = TokenReader::new(&b""[..]);
        assert!(reader.next_token().expect("read").is_none());
        assert_eq!(reader.line(), 0);
    }

    #[test]
    fn test_into_inner_keeps_unread_lines() {
        let mut reader = TokenReader::new("1 2\n3\n".as_bytes());
        assert_eq!(reader.next_token().expect("read").as_deref(), Some("1"));

        let rest = reader.into_inner();
        assert_eq!(rest, b"3\n");
    }

    #[test]
    fn test_parse_reports_field_and_line() {
        let mut reader = TokenReader::new("7\nseven\n".as_bytes());
        let source: &mut dyn TokenSource = &mut reader;

        let first: i64 = source.parse("value").expect("first");
        assert_eq!(first, 7);

        match source.parse::<i64>("value") {
            Err(CodecError::Parse { field, token, line }) => {
                assert_eq!(field, "value");
                assert_eq!(token, "seven");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(matches!(
            source.parse::<i64>("value"),
            Err(CodecError::UnexpectedEof { field: "value" })
        ));
    }
}
