//! Scribble - user correction strokes
//!
//! A scribble is an ordered run of line segments drawn by the user to
//! force pixels to a definite foreground or background classification.
//! Coordinates are in full-image pixels, like bounding boxes.

use crate::trimap::TrimapLabel;

/// What a scribble forces the touched pixels to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScribbleLabel {
    /// Mark touched pixels as definite foreground
    ForceForeground,
    /// Mark touched pixels as definite background
    ForceBackground,
}

impl ScribbleLabel {
    /// The definite trimap label this scribble stamps.
    #[inline]
    pub const fn trimap_label(self) -> TrimapLabel {
        match self {
            ScribbleLabel::ForceForeground => TrimapLabel::Foreground,
            ScribbleLabel::ForceBackground => TrimapLabel::Background,
        }
    }
}

/// One line segment of a scribble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Segment {
    /// Create a segment between two points.
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// A user-drawn stroke: segments in draw order plus label and width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scribble {
    /// The classification the stroke forces
    pub label: ScribbleLabel,
    /// Stroke width in pixels
    pub thickness: u32,
    /// Segments in the order they were drawn
    pub segments: Vec<Segment>,
}

impl Scribble {
    /// Start an empty scribble.
    pub fn new(label: ScribbleLabel, thickness: u32) -> Self {
        Self {
            label,
            thickness: thickness.max(1),
            segments: Vec::new(),
        }
    }

    /// Append a segment.
    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Whether the scribble holds no segments yet.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
