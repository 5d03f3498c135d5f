// Copyright 2026 the Mapfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Probing and enumeration of font files.

use peniko::Blob;
use read_fonts::tables::name::{Name, NameRecord};
use read_fonts::types::NameId;
use read_fonts::{FileRef, FontRef, TableProvider};
use std::path::Path;
use std::sync::Arc;

/// Returns `true` if the file at `path` can be opened and parsed as a font
/// container.
///
/// Probing failures of any kind, including unreadable paths, are reported as
/// "not a font file", never as errors. Directory scans use this to skip
/// candidates.
pub fn is_font_file(path: impl AsRef<Path>) -> bool {
    let Some(blob) = load_blob(path.as_ref()) else {
        return false;
    };
    FileRef::new(blob.as_ref()).is_ok()
}

/// Enumerates the faces in the font file at `path`.
///
/// Returns the face index and family name of every face whose name table
/// yields a family name. An unreadable or malformed file produces an empty
/// result so that batch registration can continue past it.
pub fn enumerate_faces(path: impl AsRef<Path>) -> Vec<(u32, String)> {
    let Some(blob) = load_blob(path.as_ref()) else {
        return Vec::new();
    };
    let data = blob.as_ref();
    let count = match FileRef::new(data) {
        Ok(FileRef::Font(_)) => 1,
        Ok(FileRef::Collection(collection)) => collection.len(),
        Err(_) => return Vec::new(),
    };
    let mut faces = Vec::with_capacity(count as usize);
    for index in 0..count {
        let Ok(font) = FontRef::from_index(data, index) else {
            continue;
        };
        if let Some(family_name) = family_name(&font) {
            faces.push((index, family_name));
        }
    }
    faces
}

/// Memory-maps the file at `path` into a shared blob.
#[allow(
    unsafe_code,
    reason = "mapping font files requires unsafe; the maps are read-only and never mutated"
)]
pub(crate) fn load_blob(path: &Path) -> Option<Blob<u8>> {
    let file = std::fs::File::open(path).ok()?;
    let mapped = unsafe { memmap2::Mmap::map(&file).ok()? };
    Some(Blob::new(Arc::new(mapped)))
}

/// Extracts the family name of a face, preferring the typographic family
/// over the legacy family name.
fn family_name(font: &FontRef<'_>) -> Option<String> {
    let name = font.name().ok()?;
    find_name(&name, NameId::TYPOGRAPHIC_FAMILY_NAME)
        .or_else(|| find_name(&name, NameId::FAMILY_NAME))
}

fn find_name(name: &Name<'_>, id: NameId) -> Option<String> {
    let mut fallback: Option<String> = None;
    for record in name.name_record() {
        if record.name_id() != id || !is_decodable(record) {
            continue;
        }
        let Ok(value) = record.string(name.string_data()) else {
            continue;
        };
        let value: String = value.chars().collect();
        if value.is_empty() {
            continue;
        }
        // Prefer the English language Windows record when one exists.
        if record.platform_id() == 3 && record.language_id() == 0x409 {
            return Some(value);
        }
        fallback.get_or_insert(value);
    }
    fallback
}

fn is_decodable(record: &NameRecord) -> bool {
    match record.platform_id() {
        0 => true,
        1 => record.encoding_id() == 0,
        3 => matches!(record.encoding_id(), 0 | 1 | 10),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{enumerate_faces, is_font_file};

    #[test]
    fn missing_path_is_not_a_font_file() {
        assert!(
            !is_font_file("/nonexistent/font.ttf"),
            "an unreadable path must probe as not-a-font"
        );
        assert!(
            enumerate_faces("/nonexistent/font.ttf").is_empty(),
            "an unreadable path enumerates no faces"
        );
    }
}
