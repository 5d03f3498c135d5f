// Copyright 2026 the Mapfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loaded font faces and fallback chains built from them.

use peniko::Blob;
use peniko::kurbo::BezPath;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::TableProvider;
use skrifa::{FontRef, GlyphId, MetadataProvider};
use smallvec::SmallVec;
use std::sync::Arc;

/// A loaded, ready-to-rasterize font face.
///
/// `Face` is a cheap-to-clone shared handle; clones refer to the same
/// underlying font data, which is immutable once loaded and safe to share
/// between a cache and any fallback chains built from it.
#[derive(Clone, Debug)]
pub struct Face(Arc<FaceInner>);

#[derive(Debug)]
struct FaceInner {
    family_name: Arc<str>,
    blob: Blob<u8>,
    face_index: u32,
}

impl Face {
    /// Creates a face over `blob`, validating that face `face_index` parses.
    ///
    /// Returns `None` when the data is not a font container or does not
    /// contain the requested face.
    pub fn from_blob(
        family_name: impl Into<Arc<str>>,
        blob: Blob<u8>,
        face_index: u32,
    ) -> Option<Self> {
        FontRef::from_index(blob.as_ref(), face_index).ok()?;
        Some(Self(Arc::new(FaceInner {
            family_name: family_name.into(),
            blob,
            face_index,
        })))
    }

    /// Returns the family name the face was loaded under.
    pub fn family_name(&self) -> &str {
        &self.0.family_name
    }

    /// Returns the index of the face within its font file.
    pub fn face_index(&self) -> u32 {
        self.0.face_index
    }

    /// Returns the raw font data backing this face.
    pub fn data(&self) -> &Blob<u8> {
        &self.0.blob
    }

    /// Returns a parsed view of the face.
    pub fn font_ref(&self) -> FontRef<'_> {
        // Parse success was validated when the face was created and the
        // data is immutable from then on.
        FontRef::from_index(self.0.blob.as_ref(), self.0.face_index)
            .expect("face data was validated at load")
    }

    /// Returns the design units per em of the face, or 0 when the face
    /// carries no metrics.
    pub fn units_per_em(&self) -> u16 {
        self.font_ref()
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or_default()
    }

    /// Returns the glyph mapped for `ch`, if any.
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.font_ref().charmap().map(ch)
    }

    /// Returns `true` if the face has a mapped glyph for `ch`.
    pub fn covers(&self, ch: char) -> bool {
        self.glyph_id(ch).is_some()
    }

    /// Returns the outline of `glyph` at `size` pixels per em.
    ///
    /// Returns `None` when the face has no outline for the glyph. The
    /// result is what a [`Stroker`] expands into a halo shape.
    ///
    /// [`Stroker`]: crate::Stroker
    pub fn glyph_outline(&self, glyph: GlyphId, size: f32) -> Option<BezPath> {
        let font = self.font_ref();
        let outline = font.outline_glyphs().get(glyph)?;
        let mut pen = BezPathPen::default();
        let settings = DrawSettings::unhinted(Size::new(size), LocationRef::default());
        outline.draw(settings, &mut pen).ok()?;
        Some(pen.path)
    }
}

#[derive(Default)]
struct BezPathPen {
    path: BezPath,
}

impl OutlinePen for BezPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((x, y));
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.path.quad_to((cx, cy), (x, y));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to((cx0, cy0), (cx1, cy1), (x, y));
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// An ordered collection of loaded faces forming a fallback chain.
///
/// The order matches the request that built the set: the primary family
/// first when one was given, then font-set members in their declared order.
/// This order determines glyph-coverage fallback priority at shaping time.
/// Families are deduplicated, keeping the first occurrence.
///
/// A face set is rebuilt per resolution request; the faces it references
/// are cache hits after first use.
#[derive(Clone, Debug, Default)]
pub struct FaceSet {
    faces: SmallVec<[Face; 4]>,
}

impl FaceSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends `face` unless a face with the same family name is already
    /// present.
    pub(crate) fn push_unique(&mut self, face: Face) {
        if !self
            .faces
            .iter()
            .any(|present| present.family_name() == face.family_name())
        {
            self.faces.push(face);
        }
    }

    /// Returns the faces in fallback priority order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the number of faces in the chain.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the chain contains no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the first face in the chain with a mapped glyph for `ch`.
    pub fn face_for_char(&self, ch: char) -> Option<&Face> {
        self.faces.iter().find(|face| face.covers(ch))
    }
}

impl<'a> IntoIterator for &'a FaceSet {
    type Item = &'a Face;
    type IntoIter = core::slice::Iter<'a, Face>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}
