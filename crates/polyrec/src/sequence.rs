// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Count-prefixed codec for ordered sequences of wrappers.
//!
//! # Format
//!
//! ```text
//! <count>\n
//! <wrapper 1>      tag line + record fields
//! <wrapper 2>
//! ...
//! ```
//!
//! Display output ([`OutputMode::Display`]) skips the count and tags and
//! renders each record for a human reader instead.

use crate::config::{Config, DEFAULT_MAX_RECORDS};
use crate::error::{CodecError, CodecResult};
use crate::registry::Registry;
use crate::source::TokenSource;
use crate::wrapper::Wrapper;
use std::io::Write;
use tracing::debug;

/// Ordered list of wrapped records.
pub type Sequence = Vec<Wrapper>;

/// How a sequence is written to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Count-prefixed, tag-prefixed wire format for durable sinks.
    #[default]
    Wire,
    /// Human-readable rendering for interactive output.
    Display,
}

/// Sequence reader/writer bound to a registry.
#[derive(Debug, Clone, Copy)]
pub struct SequenceCodec {
    registry: &'static Registry,
    max_records: usize,
}

impl SequenceCodec {
    pub fn new(config: &Config) -> Self {
        Self {
            registry: Registry::global(),
            max_records: config.max_records,
        }
    }

    /// Use a registry other than the global one.
    pub fn with_registry(mut self, registry: &'static Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }

    /// Write `items` in the requested mode.
    pub fn emit(
        &self,
        sink: &mut dyn Write,
        items: &[Wrapper],
        mode: OutputMode,
    ) -> CodecResult<()> {
        match mode {
            OutputMode::Wire => self.write(sink, items),
            OutputMode::Display => self.render(sink, items),
        }
    }

    pub fn write(&self, sink: &mut dyn Write, items: &[Wrapper]) -> CodecResult<()> {
        writeln!(sink, "{}", items.len())?;
        for item in items {
            item.serialize(sink)?;
        }
        debug!(count = items.len(), "sequence written");
        Ok(())
    }

    /// Replace `dest` with the sequence read from `source`.
    ///
    /// `dest` is cleared first. On success it holds exactly the announced
    /// number of records; on error it is left empty.
    pub fn read(&self, source: &mut dyn TokenSource, dest: &mut Sequence) -> CodecResult<()> {
        dest.clear();
        let count: usize = source.parse("record count")?;
        if count > self.max_records {
            return Err(CodecError::CountTooLarge {
                count,
                limit: self.max_records,
            });
        }

        let mut items = Sequence::new();
        items.resize_with(count, Wrapper::default);
        for slot in items.iter_mut() {
            slot.deserialize_with(self.registry, source)?;
        }
        *dest = items;
        debug!(count, "sequence read");
        Ok(())
    }

    pub fn render(&self, out: &mut dyn Write, items: &[Wrapper]) -> CodecResult<()> {
        for item in items {
            item.render(out)?;
        }
        Ok(())
    }
}

impl Default for SequenceCodec {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}

pub fn write_sequence(sink: &mut dyn Write, items: &[Wrapper]) -> CodecResult<()> {
    SequenceCodec::default().write(sink, items)
}

pub fn read_sequence(source: &mut dyn TokenSource, dest: &mut Sequence) -> CodecResult<()> {
    SequenceCodec::default().read(source, dest)
}

pub fn render_sequence(out: &mut dyn Write, items: &[Wrapper]) -> CodecResult<()> {
    SequenceCodec::default().render(out, items)
}
