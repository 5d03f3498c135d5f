// Copyright 2026 the Mapfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-context cache of loaded faces.

use super::engine::FaceSource;
use super::error::Error;
use super::face::{Face, FaceSet};
use super::font_set::FontSet;
use super::stroker::Stroker;
use hashbrown::HashMap;
use log::warn;
use std::sync::Arc;

/// Per-context cache of loaded faces, with face-set resolution on top.
///
/// A rendering context creates one `FaceCache` and keeps it for its
/// lifetime: each family is loaded at most once and returned as a shared
/// handle on every subsequent request. The cache grows monotonically and is
/// torn down wholesale with the context; a context's face set is small and
/// reused heavily, so nothing is ever evicted.
///
/// A cache is not meant to be shared between threads. Contexts rendering
/// concurrently each own their own cache, which keeps the per-glyph path
/// free of locks.
pub struct FaceCache<E: FaceSource> {
    engine: E,
    stroker: Stroker,
    faces: HashMap<Arc<str>, Face>,
}

impl<E: FaceSource> FaceCache<E> {
    /// Creates a cache serving faces from `engine`.
    pub fn new(engine: E) -> Self {
        let stroker = engine.new_stroker();
        Self {
            engine,
            stroker,
            faces: HashMap::new(),
        }
    }

    /// Returns the loaded face for `family_name`.
    ///
    /// The first request for a family resolves it through the registry and
    /// loads the backing file; every later request returns the same shared
    /// instance without touching the registry or the filesystem.
    ///
    /// Fails with [`Error::FaceNotFound`] when no font file was registered
    /// for the family, and with [`Error::FaceLoad`] when the registered file
    /// cannot be opened or parsed at load time.
    pub fn face(&mut self, family_name: &str) -> Result<Face, Error> {
        if let Some(face) = self.faces.get(family_name) {
            return Ok(face.clone());
        }
        let record = self
            .engine
            .resolve(family_name)
            .ok_or_else(|| Error::FaceNotFound {
                family_name: family_name.to_string(),
            })?;
        let face = self.engine.open_face(&record)?;
        self.faces.insert(family_name.into(), face.clone());
        Ok(face)
    }

    /// Returns a handle to the stroker shared by this cache.
    pub fn stroker(&self) -> Stroker {
        self.stroker.clone()
    }

    /// Returns a single-face fallback chain for `family_name`.
    pub fn face_set(&mut self, family_name: &str) -> Result<FaceSet, Error> {
        let mut set = FaceSet::new();
        set.push_unique(self.face(family_name)?);
        Ok(set)
    }

    /// Resolves `font_set` into an ordered fallback chain.
    ///
    /// Members that fail to resolve are skipped, so a font-set degrades
    /// gracefully when some of its fallback fonts are missing. A chain with
    /// no usable face at all is [`Error::EmptyFallbackChain`].
    pub fn face_set_from(&mut self, font_set: &FontSet) -> Result<FaceSet, Error> {
        let mut set = FaceSet::new();
        self.extend_from(&mut set, font_set);
        non_empty(set, font_set)
    }

    /// Resolves `family_name` followed by the members of `font_set`.
    ///
    /// The chain preserves request order: the primary family first, then
    /// font-set members in their declared order, deduplicated by family
    /// name so the primary never appears twice. An unresolvable primary
    /// degrades to the font-set chain rather than failing the request.
    pub fn face_set_with_fallback(
        &mut self,
        family_name: &str,
        font_set: &FontSet,
    ) -> Result<FaceSet, Error> {
        let mut set = FaceSet::new();
        match self.face(family_name) {
            Ok(face) => set.push_unique(face),
            Err(error) => warn!("{error}; falling back to font set '{}'", font_set.name()),
        }
        self.extend_from(&mut set, font_set);
        non_empty(set, font_set)
    }

    fn extend_from(&mut self, set: &mut FaceSet, font_set: &FontSet) {
        for family_name in font_set.families() {
            match self.face(family_name) {
                Ok(face) => set.push_unique(face),
                Err(error) => warn!("skipping font set member: {error}"),
            }
        }
    }
}

fn non_empty(set: FaceSet, font_set: &FontSet) -> Result<FaceSet, Error> {
    if set.is_empty() {
        Err(Error::EmptyFallbackChain {
            font_set: font_set.name().to_string(),
        })
    } else {
        Ok(set)
    }
}
