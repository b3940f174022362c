//! File-backed slot storage
//!
//! One file per slot under a root directory: slot `s` lives at `<root>/s.json`.
//! Writes use the write-fsync-rename pattern for crash safety:
//! 1. Write full contents to `<root>/.s.json.tmp`
//! 2. fsync the temporary file
//! 3. Atomic rename to the final path
//!
//! A crash mid-write leaves either the old contents or the new contents,
//! never a torn file.

use beacon_core::{Error, Result, SlotStore};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-per-slot storage rooted at a directory
#[derive(Debug)]
pub struct FileSlotStore {
    root: PathBuf,
}

impl FileSlotStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        validate_slot_name(slot)?;
        Ok(self.root.join(format!("{}.json", slot)))
    }

    fn tmp_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!(".{}.json.tmp", slot))
    }
}

/// Slot names become file stems, so anything that could escape the root
/// directory is rejected.
fn validate_slot_name(slot: &str) -> Result<()> {
    if slot.is_empty()
        || slot == "."
        || slot == ".."
        || slot.contains('/')
        || slot.contains('\\')
        || slot.contains('\0')
    {
        return Err(Error::InvalidSlot(slot.to_string()));
    }
    Ok(())
}

impl SlotStore for FileSlotStore {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, slot: &str, contents: &str) -> Result<()> {
        let final_path = self.slot_path(slot)?;
        let tmp_path = self.tmp_path(slot);

        let mut tmp = File::create(&tmp_path)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.sync_all()?;
        drop(tmp);

        fs::rename(&tmp_path, &final_path)?;
        debug!(slot, bytes = contents.len(), "slot written");
        Ok(())
    }
}
