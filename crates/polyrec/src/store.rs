// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! File-backed storage for record sequences.

use crate::config::Config;
use crate::error::CodecResult;
use crate::sequence::{Sequence, SequenceCodec};
use crate::source::TokenReader;
use crate::wrapper::Wrapper;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Saves and loads sequences in the wire format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Store {
    codec: SequenceCodec,
}

impl Store {
    pub fn new(config: &Config) -> Self {
        Self {
            codec: SequenceCodec::new(config),
        }
    }

    pub fn codec(&self) -> &SequenceCodec {
        &self.codec
    }

    /// Create (or truncate) `path` and write `items` to it.
    pub fn save<P: AsRef<Path>>(&self, path: P, items: &[Wrapper]) -> CodecResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.codec.write(&mut writer, items)?;
        writer.flush()?;
        info!(path = %path.display(), count = items.len(), "sequence saved");
        Ok(())
    }

    /// Read the sequence stored at `path`.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> CodecResult<Sequence> {
        let path = path.as_ref();
        let mut reader = TokenReader::new(BufReader::new(File::open(path)?));
        let mut items = Sequence::new();
        self.codec.read(&mut reader, &mut items)?;
        info!(path = %path.display(), count = items.len(), "sequence loaded");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::records::{NamedRecord, ValuedRecord};
    use tempfile::tempdir;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("records.txt");
        let store = Store::default();

        let items = vec![
            Wrapper::new(NamedRecord::new("Alice")),
            Wrapper::new(ValuedRecord::new(12)),
        ];
        store.save(&path, &items).expect("save");

        let text = std::fs::read_to_string(&path).expect("read file");
        assert_eq!(text, "2\n1\nAlice\n2\n12\n");

        let loaded = store.load(&path).expect("load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].downcast_ref::<NamedRecord>(), Some(&NamedRecord::new("Alice")));
        assert_eq!(loaded[1].downcast_ref::<ValuedRecord>(), Some(&ValuedRecord::new(12)));
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("records.txt");
        std::fs::write(&path, "garbage that is much longer than the new content\n").expect("seed");

        Store::default()
            .save(&path, &[Wrapper::new(ValuedRecord::new(1))])
            .expect("save");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "1\n2\n1\n");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().expect("tempdir");
        let err = Store::default().load(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CodecError::Io(_)));
    }

    #[test]
    fn test_load_respects_config_limit() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("records.txt");
        std::fs::write(&path, "5\n").expect("seed");

        let store = Store::new(&Config::builder().max_records(4).build());
        assert_eq!(store.codec().max_records(), 4);
        let err = store.load(&path).unwrap_err();
        assert!(matches!(err, CodecError::CountTooLarge { count: 5, limit: 4 }));
    }
}
