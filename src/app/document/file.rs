// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/file.rs
//
// Folder scanning and wrap-around navigation over the discovered images.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::constant::IMAGE_SUFFIXES;

/// Ordered list of image paths found in one directory.
///
/// Paths keep the order in which the filesystem enumerated them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSet {
    directory: Option<PathBuf>,
    entries: Vec<PathBuf>,
    current_index: usize,
}

impl ImageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set with the images found in `directory`.
    ///
    /// The set is cleared before the directory is opened, so a failed open
    /// leaves it empty. Entries that cannot be read are skipped.
    pub fn load_directory(&mut self, directory: &Path) -> anyhow::Result<()> {
        self.entries.clear();
        self.current_index = 0;
        self.directory = Some(directory.to_path_buf());

        let read_dir = std::fs::read_dir(directory)
            .with_context(|| format!("Could not open directory: {}", directory.display()))?;

        let names = read_dir.map(|entry| entry.map(|entry| entry.file_name()));
        self.entries = collect_images(directory, names);
        Ok(())
    }

    /// Path of the image at the current index.
    pub fn current(&self) -> Option<&Path> {
        self.entries.get(self.current_index).map(PathBuf::as_path)
    }

    /// Advance to the next image, wrapping to the first.
    pub fn next(&mut self) -> Option<&Path> {
        if self.entries.is_empty() {
            return None;
        }
        self.current_index = (self.current_index + 1) % self.entries.len();
        self.current()
    }

    /// Step back to the previous image, wrapping to the last.
    pub fn previous(&mut self) -> Option<&Path> {
        if self.entries.is_empty() {
            return None;
        }
        let len = self.entries.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.current()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Directory of the most recent scan, successful or not.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

/// Keep image names in enumeration order, skipping entries that failed to read.
fn collect_images(
    directory: &Path,
    names: impl IntoIterator<Item = std::io::Result<OsString>>,
) -> Vec<PathBuf> {
    let mut entries = Vec::new();
    for name in names {
        match name {
            Ok(name) if is_image_name(&name) => entries.push(directory.join(name)),
            Ok(_) => {}
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", directory.display(), e);
            }
        }
    }
    entries
}

/// Case-sensitive suffix check against the supported image suffixes.
fn is_image_name(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    IMAGE_SUFFIXES
        .iter()
        .any(|suffix| bytes.ends_with(suffix.as_bytes()))
}
