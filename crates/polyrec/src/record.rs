// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The capability set every storable record implements.

use crate::error::CodecResult;
use crate::registry::{Registry, Tag};
use crate::source::TokenSource;
use std::any::Any;
use std::fmt;
use std::io::{self, Write};

/// A serializable, renderable record.
///
/// Implementations write their own fields as newline-terminated tokens and
/// read them back in the same order. The tag prefix and record framing are
/// handled by [`Wrapper`](crate::wrapper::Wrapper); a record never writes its
/// own tag.
pub trait Record: Any + Send + Sync + fmt::Debug {
    /// Human-readable description for a display sink.
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Write this record's fields, in declaration order.
    fn serialize(&self, sink: &mut dyn Write) -> CodecResult<()>;

    /// Read fields in the order [`serialize`](Record::serialize) wrote them,
    /// overwriting the current state.
    fn deserialize(&mut self, source: &mut dyn TokenSource) -> CodecResult<()>;

    /// Registered tag of this record's concrete type.
    fn tag(&self) -> Tag;

    fn as_any(&self) -> &dyn Any;

    /// Registered type name, for diagnostics.
    fn type_name(&self) -> &'static str {
        Registry::global()
            .name_of(self.tag())
            .unwrap_or("<unregistered>")
    }
}
