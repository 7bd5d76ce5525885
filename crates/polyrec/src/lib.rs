// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! polyrec: polymorphic record persistence
//!
//! Write a heterogeneous list of records to a text stream and read it back
//! with every element restored to its concrete type. Type identity crosses
//! the stream as a small integer tag resolved through a static [`Registry`].
//!
//! # Architecture
//!
//! ```text
//! Sequence (Vec<Wrapper>)
//!     |  SequenceCodec: count line, then each wrapper
//!     v
//! Wrapper (Arc<dyn Record>)
//!     |  tag line via Registry, then record body
//!     v
//! Record (NamedRecord, ValuedRecord, ...)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use polyrec::{
//!     read_sequence, write_sequence, NamedRecord, Sequence, TokenReader, ValuedRecord, Wrapper,
//! };
//!
//! let before = vec![
//!     Wrapper::new(NamedRecord::new("Alice")),
//!     Wrapper::new(ValuedRecord::new(12)),
//! ];
//!
//! let mut bytes = Vec::new();
//! write_sequence(&mut bytes, &before).unwrap();
//! assert_eq!(bytes, b"2\n1\nAlice\n2\n12\n");
//!
//! let mut after = Sequence::new();
//! read_sequence(&mut TokenReader::new(bytes.as_slice()), &mut after).unwrap();
//! assert_eq!(after[1].downcast_ref::<ValuedRecord>(), Some(&ValuedRecord::new(12)));
//! ```
//!
//! # Adding a record type
//!
//! Implement [`Record`] (plus `Default`) and add one line to the
//! `register_records!` list in [`registry`].

pub mod config;
pub mod error;
pub mod record;
pub mod records;
pub mod registry;
pub mod sequence;
pub mod source;
pub mod store;
pub mod wrapper;

pub use config::{Config, ConfigBuilder};
pub use error::{CodecError, CodecResult, ConfigError};
pub use record::Record;
pub use records::{NamedRecord, ValuedRecord};
pub use registry::{tag_of, Registered, Registry, RegistryEntry, Tag};
pub use sequence::{
    read_sequence, render_sequence, write_sequence, OutputMode, Sequence, SequenceCodec,
};
pub use source::{TokenReader, TokenSource};
pub use store::Store;
pub use wrapper::Wrapper;
