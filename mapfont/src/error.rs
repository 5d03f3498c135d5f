// Copyright 2026 the Mapfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced while resolving font faces.

use std::path::PathBuf;

/// An error produced while resolving a family name or font-set into loaded
/// faces.
///
/// Per-file failures during batch registration never surface here; they are
/// absorbed into the boolean result of the registration call. This type only
/// describes failures observed at render time, when a consumer asks for a
/// face it cannot have.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested family has no entry in the font registry.
    FaceNotFound {
        /// The family name that failed to resolve.
        family_name: String,
    },

    /// The registry has an entry for the family, but the backing file could
    /// not be opened or parsed at load time.
    ///
    /// This is distinct from [`Error::FaceNotFound`]: it means the registry
    /// and the filesystem have drifted apart, for example because the file
    /// was removed or corrupted after registration.
    FaceLoad {
        /// The family name whose face failed to load.
        family_name: String,
        /// The index of the face within the font file.
        face_index: u32,
        /// The path of the font file the registry points at.
        path: PathBuf,
    },

    /// A font-set resolution produced no usable faces.
    ///
    /// Reported to the rendering layer so it can substitute a hard default
    /// rather than silently rendering no glyphs.
    EmptyFallbackChain {
        /// The name of the font-set that failed to resolve.
        font_set: String,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FaceNotFound { family_name } => {
                write!(f, "failed to find font family '{family_name}' in registered fonts")
            }
            Self::FaceLoad {
                family_name,
                face_index,
                path,
            } => {
                write!(
                    f,
                    "failed to load face {face_index} of '{}' for family '{family_name}'",
                    path.display()
                )
            }
            Self::EmptyFallbackChain { font_set } => {
                write!(f, "font set '{font_set}' resolved no usable faces")
            }
        }
    }
}

impl core::error::Error for Error {}
