// Copyright 2026 the Mapfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide index of font faces by family name.

use super::scan;
use hashbrown::HashMap;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Registry entry binding a family name to a face within a font file.
///
/// Records are immutable once stored. A font file containing several named
/// faces yields one record per face, all pointing at the same path with
/// different indices.
#[derive(Clone, Debug)]
pub struct FaceRecord {
    family_name: Arc<str>,
    face_index: u32,
    file_path: Arc<Path>,
}

impl FaceRecord {
    /// Creates a record binding `family_name` to face `face_index` of the
    /// file at `file_path`.
    ///
    /// Records are normally produced by registration; constructing one
    /// directly is useful when implementing [`FaceSource`] without a
    /// registry.
    ///
    /// [`FaceSource`]: crate::FaceSource
    pub fn new(
        family_name: impl Into<Arc<str>>,
        face_index: u32,
        file_path: impl Into<Arc<Path>>,
    ) -> Self {
        Self {
            family_name: family_name.into(),
            face_index,
            file_path: file_path.into(),
        }
    }

    /// Returns the family name the face was registered under.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Returns the index of the face within its font file.
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// Returns the path of the font file containing the face.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub(crate) fn file_path_arc(&self) -> Arc<Path> {
        self.file_path.clone()
    }
}

/// Process-wide index of font faces by family name.
///
/// `FontRegistry` is a shared handle: clones refer to the same underlying
/// store, and every operation is safe to call from multiple threads.
/// [`FontRegistry::global`] returns the handle backing process-wide
/// registration; [`FontRegistry::new`] creates an isolated store, which is
/// what tests and embedders with their own lifecycle want.
///
/// The registry only records where faces live. Loading them is the job of a
/// per-context [`FaceCache`].
///
/// [`FaceCache`]: crate::FaceCache
#[derive(Clone, Default)]
pub struct FontRegistry {
    inner: Arc<Mutex<HashMap<Arc<str>, FaceRecord>>>,
}

impl FontRegistry {
    /// Creates an empty registry with its own store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the process-wide registry.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<FontRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::new).clone()
    }

    /// Registers every named face in the font file at `path`.
    ///
    /// Returns `true` if at least one face was registered. A family that is
    /// already registered is remapped to the new file: the last registered
    /// file wins.
    pub fn register_font(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let faces = scan::enumerate_faces(path);
        if faces.is_empty() {
            warn!("failed to register fonts from '{}'", path.display());
            return false;
        }
        let file_path: Arc<Path> = Arc::from(path);
        let mut map = self.inner.lock().unwrap();
        for (face_index, family_name) in faces {
            debug!(
                "registered face {face_index} of '{}' as family '{family_name}'",
                path.display()
            );
            let family_name: Arc<str> = family_name.into();
            let record = FaceRecord {
                family_name: family_name.clone(),
                face_index,
                file_path: file_path.clone(),
            };
            map.insert(family_name, record);
        }
        true
    }

    /// Registers every font file found in the directory at `dir`.
    ///
    /// Non-font files are skipped and unreadable entries are ignored; one
    /// bad file never fails the scan as a whole. When `recurse` is set,
    /// subdirectories are descended as well.
    ///
    /// Returns `true` if any file in the tree registered at least one face.
    pub fn register_fonts(&self, dir: impl AsRef<Path>, recurse: bool) -> bool {
        self.register_dir(dir.as_ref(), recurse)
    }

    fn register_dir(&self, dir: &Path, recurse: bool) -> bool {
        let Ok(entries) = std::fs::read_dir(dir) else {
            warn!("failed to read font directory '{}'", dir.display());
            return false;
        };
        let mut registered = false;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if recurse {
                    registered |= self.register_dir(&path, recurse);
                }
            } else if scan::is_font_file(&path) {
                registered |= self.register_font(&path);
            } else {
                trace!("skipping non-font file '{}'", path.display());
            }
        }
        registered
    }

    /// Returns a sorted snapshot of the registered family names.
    pub fn face_names(&self) -> Vec<String> {
        let map = self.inner.lock().unwrap();
        let mut names: Vec<String> = map.keys().map(|name| name.to_string()).collect();
        names.sort_unstable();
        names
    }

    /// Returns a snapshot of the family name to face mapping, for
    /// introspection by configuration validators.
    pub fn mapping(&self) -> std::collections::HashMap<String, (u32, PathBuf)> {
        let map = self.inner.lock().unwrap();
        map.iter()
            .map(|(name, record)| {
                (
                    name.to_string(),
                    (record.face_index, record.file_path.to_path_buf()),
                )
            })
            .collect()
    }

    /// Looks up the record registered for `family_name`.
    ///
    /// Matching is an exact string comparison on the registered family name.
    pub fn resolve(&self, family_name: &str) -> Option<FaceRecord> {
        self.inner.lock().unwrap().get(family_name).cloned()
    }
}
