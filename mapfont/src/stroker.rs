// Copyright 2026 the Mapfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The glyph outline stroking resource.

use peniko::kurbo::{self, BezPath, Cap, Join, Stroke, StrokeOpts};
use std::sync::{Arc, Mutex};

/// Tolerance for flattening stroked outlines, in path units.
const STROKE_TOLERANCE: f64 = 0.1;

/// Shared handle to the outline stroking resource used for glyph halos.
///
/// One stroker is created per [`FaceCache`] and shared by every consumer of
/// that cache. Reconfiguring the radius mutates the resource in place;
/// cloning the handle never allocates a new one, so radius changes made
/// through one handle are visible through all of them.
///
/// [`FaceCache`]: crate::FaceCache
#[derive(Clone, Debug)]
pub struct Stroker(Arc<Mutex<StrokerInner>>);

#[derive(Debug)]
struct StrokerInner {
    radius: f64,
    style: Stroke,
}

impl Stroker {
    /// Creates a stroker with a zero radius.
    ///
    /// One stroker is created per cache by its face source; consumers
    /// obtain a shared handle from the cache rather than creating their
    /// own.
    #[allow(clippy::new_without_default, reason = "strokers are created by a face source")]
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(StrokerInner {
            radius: 0.0,
            style: halo_style(0.0),
        })))
    }

    /// Sets the stroking radius.
    ///
    /// Calling this repeatedly with the same radius is a no-op.
    pub fn configure(&self, radius: f64) {
        let mut inner = self.0.lock().unwrap();
        if inner.radius != radius {
            inner.radius = radius;
            inner.style = halo_style(radius);
        }
    }

    /// Returns the configured stroking radius.
    pub fn radius(&self) -> f64 {
        self.0.lock().unwrap().radius
    }

    /// Expands `outline` by the configured radius.
    ///
    /// The result is the filled shape of a halo border around the glyph
    /// outline.
    pub fn stroke_outline(&self, outline: &BezPath) -> BezPath {
        let inner = self.0.lock().unwrap();
        kurbo::stroke(
            outline.iter(),
            &inner.style,
            &StrokeOpts::default(),
            STROKE_TOLERANCE,
        )
    }
}

/// A halo of `radius` is drawn by stroking the outline with round caps and
/// joins; the stroke spans the radius on each side of the path.
fn halo_style(radius: f64) -> Stroke {
    Stroke::new(radius * 2.0)
        .with_caps(Cap::Round)
        .with_join(Join::Round)
}

#[cfg(test)]
mod tests {
    use super::Stroker;
    use peniko::kurbo::{BezPath, Shape};

    #[test]
    fn reconfiguration_updates_the_single_resource() {
        let stroker = Stroker::new();
        let shared = stroker.clone();
        stroker.configure(2.0);
        stroker.configure(2.0);
        assert_eq!(shared.radius(), 2.0);
        stroker.configure(5.0);
        assert_eq!(shared.radius(), 5.0);
    }

    #[test]
    fn stroked_segment_spans_the_radius() {
        let stroker = Stroker::new();
        stroker.configure(2.0);
        let mut line = BezPath::new();
        line.move_to((0.0, 0.0));
        line.line_to((10.0, 0.0));
        let halo = stroker.stroke_outline(&line);
        let bounds = halo.bounding_box();
        // Round caps extend the segment by the radius at both ends.
        assert!((bounds.width() - 14.0).abs() < 0.5, "width {}", bounds.width());
        assert!((bounds.height() - 4.0).abs() < 0.5, "height {}", bounds.height());
    }
}
