// Copyright 2026 the Mapfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The face source abstraction and its production implementation.

use super::error::Error;
use super::face::Face;
use super::registry::{FaceRecord, FontRegistry};
use super::scan;
use super::stroker::Stroker;
use hashbrown::HashMap;
use peniko::Blob;
use std::path::Path;
use std::sync::Arc;

/// Capability a [`FaceCache`] needs to turn family names into loaded faces.
///
/// Production code uses [`FontEngine`], which resolves through a
/// [`FontRegistry`] and opens faces from the files the registry points at;
/// tests substitute an isolated implementation.
///
/// [`FaceCache`]: crate::FaceCache
pub trait FaceSource {
    /// Resolves a family name to its registered face record.
    fn resolve(&self, family_name: &str) -> Option<FaceRecord>;

    /// Opens the face identified by `record`.
    fn open_face(&mut self, record: &FaceRecord) -> Result<Face, Error>;

    /// Creates the stroker shared by the faces served from one cache.
    fn new_stroker(&self) -> Stroker;
}

/// Production face source backed by a [`FontRegistry`] and the font parser.
///
/// The engine keeps a per-instance cache of loaded font files so that
/// several faces backed by one file (a `ttc` collection) share a single
/// mapping. Failed loads are cached too: a file that has gone missing since
/// registration is reported on every request without re-probing the
/// filesystem each time.
///
/// An engine is context-scoped, like the [`FaceCache`] built on top of it.
///
/// [`FaceCache`]: crate::FaceCache
pub struct FontEngine {
    registry: FontRegistry,
    sources: HashMap<Arc<Path>, SourceEntry>,
}

enum SourceEntry {
    Loaded(Blob<u8>),
    Failed,
}

impl FontEngine {
    /// Creates an engine resolving through `registry`.
    pub fn new(registry: FontRegistry) -> Self {
        Self {
            registry,
            sources: HashMap::new(),
        }
    }

    fn blob(&mut self, path: &Arc<Path>) -> Option<Blob<u8>> {
        use hashbrown::hash_map::Entry;
        match self.sources.entry(path.clone()) {
            Entry::Vacant(vacant) => {
                if let Some(blob) = scan::load_blob(path) {
                    vacant.insert(SourceEntry::Loaded(blob.clone()));
                    Some(blob)
                } else {
                    vacant.insert(SourceEntry::Failed);
                    None
                }
            }
            Entry::Occupied(occupied) => match occupied.get() {
                SourceEntry::Loaded(blob) => Some(blob.clone()),
                SourceEntry::Failed => None,
            },
        }
    }
}

impl Default for FontEngine {
    /// Creates an engine resolving through the process-wide registry.
    fn default() -> Self {
        Self::new(FontRegistry::global())
    }
}

impl FaceSource for FontEngine {
    fn resolve(&self, family_name: &str) -> Option<FaceRecord> {
        self.registry.resolve(family_name)
    }

    fn open_face(&mut self, record: &FaceRecord) -> Result<Face, Error> {
        let blob = self
            .blob(&record.file_path_arc())
            .ok_or_else(|| load_error(record))?;
        Face::from_blob(record.family_name(), blob, record.face_index())
            .ok_or_else(|| load_error(record))
    }

    fn new_stroker(&self) -> Stroker {
        Stroker::new()
    }
}

fn load_error(record: &FaceRecord) -> Error {
    Error::FaceLoad {
        family_name: record.family_name().to_string(),
        face_index: record.face_index(),
        path: record.file_path().to_path_buf(),
    }
}
