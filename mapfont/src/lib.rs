// Copyright 2026 the Mapfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font registration, face caching and fallback resolution for map rendering.
//!
//! This crate sits between a map-rendering pipeline and a font parser. The
//! process-wide [`FontRegistry`] discovers font files and indexes the faces
//! they contain by family name. Each rendering context owns a [`FaceCache`]
//! that turns family names and [`FontSet`]s into loaded, reusable [`Face`]
//! handles, together with the [`Stroker`] used to draw halos around glyphs.

mod engine;
mod error;
mod face;
mod face_cache;
mod font_set;
mod registry;
mod scan;
mod stroker;

pub use peniko::Blob;
pub use skrifa::GlyphId;

pub use engine::{FaceSource, FontEngine};
pub use error::Error;
pub use face::{Face, FaceSet};
pub use face_cache::FaceCache;
pub use font_set::FontSet;
pub use registry::{FaceRecord, FontRegistry};
pub use scan::{enumerate_faces, is_font_file};
pub use stroker::Stroker;
