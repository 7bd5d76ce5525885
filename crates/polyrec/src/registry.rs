// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Static tag registry for record types.
//!
//! The registry is a bijection between wire tags and concrete [`Record`]
//! types. Both directions come from the single `register_records!` list at
//! the bottom of this module:
//!
//! ```text
//! register_records! { NamedRecord => 1, ValuedRecord => 2 }
//!         |
//!         +-- impl Registered for NamedRecord { TAG = 1 }   (type -> tag, compile time)
//!         +-- impl Registered for ValuedRecord { TAG = 2 }
//!         +-- RECORD_REGISTRY: [(1, NamedRecord::default), (2, ValuedRecord::default)]
//!                                                            (tag -> type, runtime factory)
//! ```
//!
//! Adding a record type takes one line in that list. A type listed twice
//! fails to compile (conflicting `Registered` impls) and so does a tag listed
//! twice (const check in [`Registry::new`]).
//!
//! # Unknown tags
//!
//! A tag that is not in the registry means the stream was written by a
//! different registry build or is corrupt. There is no safe type to guess, so
//! [`Registry::create_by_tag`] treats it as fatal and panics. So does
//! [`Registry::create_by_wire_tag`] for any integer token, including negative
//! and out-of-range ones.

use crate::record::Record;
use crate::records::{NamedRecord, ValuedRecord};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use tracing::error;

/// Wire identifier of a concrete record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(u32);

impl Tag {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Static type -> tag association. Built-in types get it from `register_records!`.
pub trait Registered: Record + Default {
    const TAG: Tag;
    const NAME: &'static str;
}

/// Tag of a registered type. Resolved at compile time.
pub const fn tag_of<T: Registered>() -> Tag {
    T::TAG
}

fn create_default<T: Registered>() -> Box<dyn Record> {
    Box::new(T::default())
}

/// One row of the registry table.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    tag: Tag,
    name: &'static str,
    create: fn() -> Box<dyn Record>,
}

impl RegistryEntry {
    /// Entry for a registered type.
    pub const fn of<T: Registered>() -> Self {
        Self {
            tag: T::TAG,
            name: T::NAME,
            create: create_default::<T>,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Default-constructed instance of this entry's type.
    pub fn create(&self) -> Box<dyn Record> {
        (self.create)()
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .finish()
    }
}

/// Tag -> factory table.
#[derive(Debug)]
pub struct Registry {
    entries: &'static [RegistryEntry],
}

impl Registry {
    /// Build a registry over a static table.
    ///
    /// # Panics
    ///
    /// Panics if two entries share a tag. In a `static` initializer this is a
    /// compile error.
    pub const fn new(entries: &'static [RegistryEntry]) -> Self {
        let mut i = 0;
        while i < entries.len() {
            let mut j = i + 1;
            while j < entries.len() {
                if entries[i].tag.0 == entries[j].tag.0 {
                    panic!("duplicate record tag in registry");
                }
                j += 1;
            }
            i += 1;
        }
        Self { entries }
    }

    /// The process-wide registry of built-in record types.
    pub fn global() -> &'static Registry {
        &RECORD_REGISTRY
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &'static [RegistryEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, tag: Tag) -> Option<&'static RegistryEntry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.lookup(tag).is_some()
    }

    pub fn name_of(&self, tag: Tag) -> Option<&'static str> {
        self.lookup(tag).map(RegistryEntry::name)
    }

    /// Default-constructed instance of the type registered under `tag`.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not registered. See the module docs.
    pub fn create_by_tag(&self, tag: Tag) -> Box<dyn Record> {
        match self.lookup(tag) {
            Some(entry) => entry.create(),
            None => self.unknown_tag(tag),
        }
    }

    /// [`create_by_tag`](Registry::create_by_tag) for a tag token as read
    /// from a stream.
    ///
    /// Returns `None` if `token` is not an integer. Every integer is a tag
    /// claim: one that is negative or wider than a [`Tag`] can never be
    /// registered and takes the same fatal path as any other unknown tag.
    ///
    /// # Panics
    ///
    /// Panics if `token` is an integer that is not a registered tag.
    pub fn create_by_wire_tag(&self, token: &str) -> Option<Box<dyn Record>> {
        let digits = token.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(token);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match token.parse::<Tag>() {
            Ok(tag) => Some(self.create_by_tag(tag)),
            Err(_) => self.unknown_tag(token),
        }
    }

    fn unknown_tag(&self, tag: impl fmt::Display) -> ! {
        error!(%tag, known = self.entries.len(), "unknown record tag, aborting");
        panic!("unknown record tag {}", tag);
    }
}

/// Declares the record types known to the wire format.
///
/// Emits a `Registered` impl per type and the `RECORD_REGISTRY` static.
macro_rules! register_records {
    ($($ty:ident => $tag:expr),+ $(,)?) => {
        $(
            impl Registered for $ty {
                const TAG: Tag = Tag::new($tag);
                const NAME: &'static str = stringify!($ty);
            }
        )+

        const RECORD_ENTRIES: &[RegistryEntry] = &[$(RegistryEntry::of::<$ty>()),+];

        static RECORD_REGISTRY: Registry = Registry::new(RECORD_ENTRIES);
    };
}

register_records! {
    NamedRecord => 1,
    ValuedRecord => 2,
}
