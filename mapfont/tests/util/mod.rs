// Copyright 2026 the Mapfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthesized font containers shared across tests.
//!
//! The builders produce the smallest containers the font parser accepts: a
//! table directory with a single name table declaring the family name. That
//! is all registration and face loading look at, and it keeps the tests free
//! of binary fixtures.

use mapfont::Blob;
use std::sync::Arc;

/// Builds a single-face font whose name table declares `family_name`.
pub(crate) fn font_data(family_name: &str) -> Vec<u8> {
    sfnt(family_name, 0)
}

/// Builds a font collection (`ttc`) with one face per family name.
pub(crate) fn collection_data(family_names: &[&str]) -> Vec<u8> {
    let mut file = Vec::new();
    file.extend_from_slice(b"ttcf");
    file.extend_from_slice(&1_u16.to_be_bytes()); // major version
    file.extend_from_slice(&0_u16.to_be_bytes()); // minor version
    file.extend_from_slice(&(family_names.len() as u32).to_be_bytes());
    let mut offset = 12 + 4 * family_names.len() as u32;
    let mut bodies = Vec::new();
    for family_name in family_names {
        file.extend_from_slice(&offset.to_be_bytes());
        let body = sfnt(family_name, offset);
        offset += body.len() as u32;
        bodies.push(body);
    }
    for body in &bodies {
        file.extend_from_slice(body);
    }
    file
}

/// Builds a single-face font as an in-memory blob.
pub(crate) fn font_blob(family_name: &str) -> Blob<u8> {
    Blob::new(Arc::new(font_data(family_name)))
}

/// Builds a one-table sfnt. `directory_offset` is where the table directory
/// will sit in the final file; collection members reference their tables by
/// offsets from the start of the whole file.
fn sfnt(family_name: &str, directory_offset: u32) -> Vec<u8> {
    let name = name_table(family_name);
    let mut font = Vec::new();
    font.extend_from_slice(&0x0001_0000_u32.to_be_bytes()); // sfnt version
    font.extend_from_slice(&1_u16.to_be_bytes()); // numTables
    font.extend_from_slice(&16_u16.to_be_bytes()); // searchRange
    font.extend_from_slice(&0_u16.to_be_bytes()); // entrySelector
    font.extend_from_slice(&0_u16.to_be_bytes()); // rangeShift
    font.extend_from_slice(b"name");
    font.extend_from_slice(&0_u32.to_be_bytes()); // checksum, not validated
    font.extend_from_slice(&(directory_offset + 28).to_be_bytes());
    font.extend_from_slice(&(name.len() as u32).to_be_bytes());
    font.extend_from_slice(&name);
    font
}

fn name_table(family_name: &str) -> Vec<u8> {
    let utf16: Vec<u8> = family_name
        .encode_utf16()
        .flat_map(|unit| unit.to_be_bytes())
        .collect();
    let mut table = Vec::new();
    table.extend_from_slice(&0_u16.to_be_bytes()); // format
    table.extend_from_slice(&1_u16.to_be_bytes()); // record count
    table.extend_from_slice(&18_u16.to_be_bytes()); // storage offset
    // One record: Windows platform, Unicode BMP encoding, US English,
    // family name identifier.
    for value in [3_u16, 1, 0x409, 1, utf16.len() as u16, 0] {
        table.extend_from_slice(&value.to_be_bytes());
    }
    table.extend_from_slice(&utf16);
    table
}
