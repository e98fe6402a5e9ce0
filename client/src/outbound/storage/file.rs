//! Key-value store persisted as one file per key.
//!
//! Entries live inside a capability-scoped directory. File names are the
//! hex-encoded key plus `.json`, so any key up to [`MAX_KEY_LEN`] bytes maps
//! to a safe, flat name within the usual 255-byte file name limit.
//! Writes go through a temporary file and rename so a crash never leaves a
//! half-written value behind.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

const ENTRY_SUFFIX: &str = ".json";

/// Longest key, in bytes, whose encoded file name fits in 255 bytes.
pub const MAX_KEY_LEN: usize = 125;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// File-backed key-value store rooted at a directory.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: Dir,
    root: Utf8PathBuf,
}

impl FileKeyValueStore {
    /// Open `root`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Unavailable`] if the directory cannot be
    /// created or opened.
    pub fn open(root: &Utf8Path) -> Result<Self, KeyValueStoreError> {
        Dir::create_ambient_dir_all(root, ambient_authority())
            .map_err(|err| unavailable(root, &err))?;
        let dir =
            Dir::open_ambient_dir(root, ambient_authority()).map_err(|err| unavailable(root, &err))?;
        debug!(root = %root, "opened file key-value store");
        Ok(Self {
            dir,
            root: root.to_path_buf(),
        })
    }

    /// Directory the entries live in.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `file_name` via a temp file and rename.
    fn write_atomic(&self, key: &str, file_name: &str, contents: &str) -> io::Result<()> {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        let tmp_name = format!(".tmp.{}.{suffix}.{counter}", std::process::id());

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let written = self.dir.open_with(&tmp_name, &options).and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        });
        if let Err(err) = written.and_then(|()| self.dir.rename(&tmp_name, &self.dir, file_name)) {
            // Leftover temp files are skipped by `keys`.
            drop(self.dir.remove_file(&tmp_name));
            debug!(%key, error = %err, "atomic write failed");
            return Err(err);
        }

        // Best-effort directory sync.
        drop(self.dir.open(".").and_then(|dir| dir.sync_all()));
        Ok(())
    }
}

fn unavailable(root: &Utf8Path, err: &io::Error) -> KeyValueStoreError {
    KeyValueStoreError::unavailable(format!("{root}: {err}"))
}

fn io_error(key: &str, err: &io::Error) -> KeyValueStoreError {
    KeyValueStoreError::io(key, err.to_string())
}

fn key_too_long(key: &str) -> bool {
    key.len() > MAX_KEY_LEN
}

fn entry_file_name(key: &str) -> String {
    format!("{}{ENTRY_SUFFIX}", hex::encode(key))
}

fn key_from_file_name(file_name: &str) -> Option<String> {
    let encoded = file_name.strip_suffix(ENTRY_SUFFIX)?;
    let bytes = hex::decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        if key_too_long(key) {
            return Ok(None);
        }
        match self.dir.read_to_string(entry_file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(key, &err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        if key_too_long(key) {
            return Err(KeyValueStoreError::io(
                key,
                format!("key is {} bytes; at most {MAX_KEY_LEN} allowed", key.len()),
            ));
        }
        self.write_atomic(key, &entry_file_name(key), value)
            .map_err(|err| io_error(key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        if key_too_long(key) {
            return Ok(());
        }
        match self.dir.remove_file(entry_file_name(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(key, &err)),
        }
    }

    fn keys(&self) -> Result<Vec<String>, KeyValueStoreError> {
        let entries = self
            .dir
            .entries()
            .map_err(|err| unavailable(&self.root, &err))?;
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| unavailable(&self.root, &err))?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            if let Some(key) = key_from_file_name(name) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}
