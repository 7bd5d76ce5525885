// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the record codec.

use std::io;
use thiserror::Error;

/// Errors produced while writing or reading the record wire format.
///
/// An unknown tag is deliberately absent: it is a protocol violation and
/// aborts through [`Registry::create_by_tag`](crate::registry::Registry::create_by_tag).
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended while a field was still expected.
    #[error("unexpected end of stream while reading {field}")]
    UnexpectedEof { field: &'static str },

    /// A token could not be parsed as the expected field type.
    #[error("invalid {field} '{token}' at line {line}")]
    Parse {
        field: &'static str,
        token: String,
        line: usize,
    },

    /// A field value cannot be represented as a single wire token.
    #[error("cannot encode {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    /// Serialize or render was called on a wrapper that holds no record.
    #[error("wrapper holds no record")]
    EmptyWrapper,

    /// The record count exceeds the configured limit.
    #[error("record count {count} exceeds limit {limit}")]
    CountTooLarge { count: usize, limit: usize },
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_display() {
        let err = CodecError::Parse {
            field: "record count",
            token: "abc".into(),
            line: 1,
        };
        assert_eq!(err.to_string(), "invalid record count 'abc' at line 1");

        let err = CodecError::UnexpectedEof { field: "tag" };
        assert_eq!(err.to_string(), "unexpected end of stream while reading tag");

        let err = CodecError::CountTooLarge {
            count: 10,
            limit: 5,
        };
        assert_eq!(err.to_string(), "record count 10 exceeds limit 5");
    }

    #[test]
    fn test_io_error_converts() {
        let err: CodecError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
