//! DOM-free half of the hotspot overlay.
//!
//! [`HotspotOverlay`] tracks the drawing surface size and the hotspot set
//! scaled onto it, and turns pointer positions into highlights and
//! navigation intents. The client owns the canvas and draws what this
//! returns.

use std::sync::Arc;

use crate::frame::FrameIndex;
use crate::geometry::{Point, Shape, Size, hit_test};
use crate::hotspot::{FloorLabel, HotspotSet, NavigationIntent};

/// Highlight fill colours, cycled by shape index.
pub const PALETTE: [&str; 16] = [
    "red", "green", "blue", "orange", "purple", "cyan", "magenta", "yellow", "brown", "pink",
    "lime", "teal", "navy", "olive", "maroon", "gold",
];

/// Opacity of a highlighted shape's fill.
pub const HIGHLIGHT_ALPHA: f64 = 0.25;

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum OverlayState {
    /// The host image has not reported its size yet.
    #[default]
    Uninitialized,
    Ready { surface: Size, shapes: Vec<Shape> },
}

/// A shape to draw for the current hover.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub index: usize,
    /// Shape in surface pixels.
    pub shape: Shape,
    pub color: &'static str,
    pub label: FloorLabel,
}

#[derive(Debug, Clone)]
pub struct HotspotOverlay {
    frame: FrameIndex,
    set: Arc<HotspotSet>,
    state: OverlayState,
    hovered: Option<usize>,
}

impl HotspotOverlay {
    pub fn new(frame: FrameIndex, set: Arc<HotspotSet>) -> Self {
        Self {
            frame,
            set,
            state: OverlayState::Uninitialized,
            hovered: None,
        }
    }

    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, OverlayState::Ready { .. })
    }

    pub fn surface(&self) -> Option<Size> {
        match &self.state {
            OverlayState::Ready { surface, .. } => Some(*surface),
            OverlayState::Uninitialized => None,
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Sizes the surface to the image's live box and rescales every shape.
    ///
    /// Runs on first load and on every resize. Any hover is dropped since it
    /// was computed against the old dimensions.
    pub fn layout(&mut self, live: Size) {
        let shapes = self.set.scaled_to(live);
        tracing::debug!(
            frame = self.frame.get(),
            width = live.width,
            height = live.height,
            shapes = shapes.len(),
            "overlay laid out"
        );
        self.state = OverlayState::Ready {
            surface: live,
            shapes,
        };
        self.hovered = None;
    }

    /// Index of the first shape under `p`, if ready.
    pub fn hit(&self, p: Point) -> Option<usize> {
        match &self.state {
            OverlayState::Ready { shapes, .. } => hit_test(shapes, p),
            OverlayState::Uninitialized => None,
        }
    }

    /// Pointer moved to `p` (surface coordinates).
    pub fn hover(&mut self, p: Point) -> Option<Highlight> {
        let OverlayState::Ready { shapes, .. } = &self.state else {
            return None;
        };
        let Some(index) = hit_test(shapes, p) else {
            self.hovered = None;
            return None;
        };
        self.hovered = Some(index);
        Some(Highlight {
            index,
            shape: shapes[index].clone(),
            color: palette_color(index),
            label: FloorLabel::for_index(index, shapes.len()),
        })
    }

    /// Pointer clicked at `p`. Only the first matching shape dispatches.
    pub fn click(&self, p: Point) -> Option<NavigationIntent> {
        let index = self.hit(p)?;
        let label = FloorLabel::for_index(index, self.set.len());
        Some(NavigationIntent::for_label(label, self.frame))
    }

    /// Whether a pointer down at `p` belongs to the overlay rather than the
    /// drag gesture underneath.
    pub fn captures(&self, p: Point) -> bool {
        self.hit(p).is_some()
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }
}
