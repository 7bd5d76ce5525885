// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Built-in record types.
//!
//! | Type | Tag | Wire fields |
//! |------|-----|-------------|
//! | [`NamedRecord`] | 1 | `name` (one token, no whitespace) |
//! | [`ValuedRecord`] | 2 | `value` (decimal i64) |

use crate::error::{CodecError, CodecResult};
use crate::record::Record;
use crate::registry::{tag_of, Tag};
use crate::source::TokenSource;
use std::any::Any;
use std::io::{self, Write};

/// A record carrying a single name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedRecord {
    pub name: String,
}

impl NamedRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Record for NamedRecord {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "my name is : {}", self.name)?;
        // Buffer address differs after a round trip; only the value is preserved.
        writeln!(out, "name ptr address : {:p}", self.name.as_ptr())
    }

    fn serialize(&self, sink: &mut dyn Write) -> CodecResult<()> {
        if self.name.is_empty() {
            return Err(CodecError::InvalidField {
                field: "name",
                reason: "empty",
            });
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(CodecError::InvalidField {
                field: "name",
                reason: "contains whitespace",
            });
        }
        writeln!(sink, "{}", self.name)?;
        Ok(())
    }

    fn deserialize(&mut self, source: &mut dyn TokenSource) -> CodecResult<()> {
        self.name = source.expect_token("name")?;
        Ok(())
    }

    fn tag(&self) -> Tag {
        tag_of::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A record carrying a single integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValuedRecord {
    pub value: i64,
}

impl ValuedRecord {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Record for ValuedRecord {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "my age is : {}", self.value)
    }

    fn serialize(&self, sink: &mut dyn Write) -> CodecResult<()> {
        writeln!(sink, "{}", self.value)?;
        Ok(())
    }

    fn deserialize(&mut self, source: &mut dyn TokenSource) -> CodecResult<()> {
        self.value = source.parse("value")?;
        Ok(())
    }

    fn tag(&self) -> Tag {
        tag_of::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TokenReader;

    fn body(record: &dyn Record) -> String {
        let mut buf = Vec::new();
        record.serialize(&mut buf).expect("serialize");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_named_body_is_one_line() {
        assert_eq!(body(&NamedRecord::new("Alice")), "Alice\n");
    }

    #[test]
    fn test_named_rejects_unencodable_names() {
        let mut sink = Vec::new();
        assert!(matches!(
            NamedRecord::new("").serialize(&mut sink),
            Err(CodecError::InvalidField { field: "name", .. })
        ));
        assert!(matches!(
            NamedRecord::new("Alice Smith").serialize(&mut sink),
            Err(CodecError::InvalidField { field: "name", .. })
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_named_deserialize_overwrites() {
        let mut record = NamedRecord::new("Bob");
        let mut reader = TokenReader::new("Alice\n".as_bytes());
        record.deserialize(&mut reader).expect("deserialize");
        assert_eq!(record.name, "Alice");
    }

    #[test]
    fn test_valued_body_and_negative_values() {
        assert_eq!(body(&ValuedRecord::new(12)), "12\n");

        let mut record = ValuedRecord::default();
        let mut reader = TokenReader::new("-40\n".as_bytes());
        record.deserialize(&mut reader).expect("deserialize");
        assert_eq!(record.value, -40);
    }

    #[test]
    fn test_valued_rejects_malformed_number() {
        let mut record = ValuedRecord::new(5);
        let mut reader = TokenReader::new("twelve\n".as_bytes());
        let err = record.deserialize(&mut reader).unwrap_err();
        assert!(matches!(err, CodecError::Parse { field: "value", .. }));
    }

    #[test]
    fn test_render_output() {
        let mut out = Vec::new();
        ValuedRecord::new(12).render(&mut out).expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), "my age is : 12\n");

        let mut out = Vec::new();
        NamedRecord::new("Alice").render(&mut out).expect("render");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("my name is : Alice\nname ptr address : 0x"));
    }

    #[test]
    fn test_type_names_come_from_registry() {
        assert_eq!(NamedRecord::default().type_name(), "NamedRecord");
        assert_eq!(ValuedRecord::default().type_name(), "ValuedRecord");
    }
}
