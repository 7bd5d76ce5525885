// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tag-aware owning envelope around a polymorphic record.
//!
//! # Wire Format
//!
//! ```text
//! <tag>\n
//! <record fields, as written by the record itself>
//! ```
//!
//! Copies of a [`Wrapper`] share the same record through an [`Arc`]; the
//! record is dropped with its last owner.

use crate::error::{CodecError, CodecResult};
use crate::record::Record;
use crate::registry::{Registry, Tag};
use crate::source::TokenSource;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Shared owner of at most one record.
#[derive(Debug, Clone, Default)]
pub struct Wrapper {
    record: Option<Arc<dyn Record>>,
}

impl Wrapper {
    pub fn new<T: Record>(record: T) -> Self {
        let record: Arc<dyn Record> = Arc::new(record);
        Self {
            record: Some(record),
        }
    }

    /// Wrap a record that is already shared.
    pub fn from_shared(record: Arc<dyn Record>) -> Self {
        Self {
            record: Some(record),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_none()
    }

    pub fn record(&self) -> Option<&dyn Record> {
        self.record.as_deref()
    }

    pub fn shared(&self) -> Option<&Arc<dyn Record>> {
        self.record.as_ref()
    }

    /// Borrow the record as its concrete type.
    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        self.record()?.as_any().downcast_ref::<T>()
    }

    pub fn tag(&self) -> Option<Tag> {
        self.record().map(|record| record.tag())
    }

    /// Number of wrappers sharing this record (0 when empty).
    pub fn share_count(&self) -> usize {
        self.record.as_ref().map_or(0, Arc::strong_count)
    }

    /// Whether both wrappers hold the same record instance.
    pub fn ptr_eq(&self, other: &Wrapper) -> bool {
        match (&self.record, &other.record) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn render(&self, out: &mut dyn Write) -> CodecResult<()> {
        let record = self.record().ok_or(CodecError::EmptyWrapper)?;
        record.render(out)?;
        Ok(())
    }

    /// Write the record's tag line followed by its fields.
    pub fn serialize(&self, sink: &mut dyn Write) -> CodecResult<()> {
        let record = self.record().ok_or(CodecError::EmptyWrapper)?;
        let tag = record.tag();
        writeln!(sink, "{}", tag)?;
        record.serialize(sink)?;
        debug!(%tag, kind = record.type_name(), "record written");
        Ok(())
    }

    /// Read a tag and the record it announces, replacing the held record.
    ///
    /// # Panics
    ///
    /// Panics on an integer tag missing from the global registry, negative and
    /// out-of-range values included, before any field of that record is read.
    /// A tag token that is not an integer is a [`CodecError::Parse`].
    pub fn deserialize(&mut self, source: &mut dyn TokenSource) -> CodecResult<()> {
        self.deserialize_with(Registry::global(), source)
    }

    /// [`deserialize`](Wrapper::deserialize) against an explicit registry.
    pub fn deserialize_with(
        &mut self,
        registry: &Registry,
        source: &mut dyn TokenSource,
    ) -> CodecResult<()> {
        let token = source.expect_token("record tag")?;
        let Some(mut record) = registry.create_by_wire_tag(&token) else {
            return Err(CodecError::Parse {
                field: "record tag",
                token,
                line: source.line(),
            });
        };
        record.deserialize(source)?;
        let tag = record.tag();
        let kind = registry.name_of(tag).unwrap_or("<unregistered>");
        debug!(%tag, kind, line = source.line(), "record read");
        self.record = Some(Arc::from(record));
        Ok(())
    }
}

impl<T: Record> From<T> for Wrapper {
    fn from(record: T) -> Self {
        Self::new(record)
    }
}
