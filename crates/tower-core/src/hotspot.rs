//! Per-frame hotspot datasets.
//!
//! Each interactive frame owns an ordered [`HotspotSet`] authored in its own
//! reference resolution. Order is meaningful: index 0 is the roof, the last
//! shape is the ground floor, and earlier shapes win hit-tests.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::frame::FrameIndex;
use crate::geometry::{Shape, Size};

/// Error raised while loading hotspot datasets.
#[derive(Debug, thiserror::Error)]
pub enum HotspotError {
    #[error("Failed to parse hotspot data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Frame {frame}: polygon {index} has {points} points, at least 3 required")]
    DegeneratePolygon {
        frame: FrameIndex,
        index: usize,
        points: usize,
    },
    #[error("Frame {frame}: reference resolution must be positive, got {width}x{height}")]
    InvalidReference {
        frame: FrameIndex,
        width: f64,
        height: f64,
    },
    #[error("Frame {0} is defined more than once")]
    DuplicateFrame(FrameIndex),
}

/// Ordered shapes for one frame, in the resolution they were authored at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotSet {
    pub reference: Size,
    pub shapes: Vec<Shape>,
}

impl HotspotSet {
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes rescaled onto a surface of `live` size.
    pub fn scaled_to(&self, live: Size) -> Vec<Shape> {
        let (scale_x, scale_y) = live.scale_from(self.reference);
        self.shapes
            .iter()
            .map(|shape| shape.scaled(scale_x, scale_y))
            .collect()
    }

    fn validate(&self, frame: FrameIndex) -> Result<(), HotspotError> {
        if !(self.reference.width > 0.0 && self.reference.height > 0.0) {
            return Err(HotspotError::InvalidReference {
                frame,
                width: self.reference.width,
                height: self.reference.height,
            });
        }
        for (index, shape) in self.shapes.iter().enumerate() {
            if let Shape::Polygon { points } = shape {
                if points.len() < 3 {
                    return Err(HotspotError::DegeneratePolygon {
                        frame,
                        index,
                        points: points.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Label shown for a hovered shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorLabel {
    Roof,
    Floor(usize),
}

impl FloorLabel {
    /// Index 0 is the roof; index `i` is floor `total - i`.
    pub fn for_index(index: usize, total: usize) -> Self {
        if index == 0 {
            Self::Roof
        } else {
            Self::Floor(total - index)
        }
    }
}

impl fmt::Display for FloorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roof => write!(f, "Roof"),
            Self::Floor(n) => write!(f, "Floor {n}"),
        }
    }
}

/// Destination a hotspot click navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Roof,
    Ground,
    Room,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationIntent {
    pub kind: NavigationKind,
    pub frame: FrameIndex,
}

impl NavigationIntent {
    pub fn for_label(label: FloorLabel, frame: FrameIndex) -> Self {
        let kind = match label {
            FloorLabel::Roof => NavigationKind::Roof,
            FloorLabel::Floor(1) => NavigationKind::Ground,
            FloorLabel::Floor(_) => NavigationKind::Room,
        };
        Self { kind, frame }
    }

    /// Router path, e.g. `/roof/1`.
    pub fn path(&self) -> String {
        let prefix = match self.kind {
            NavigationKind::Roof => "roof",
            NavigationKind::Ground => "ground",
            NavigationKind::Room => "room",
        };
        format!("/{}/{}", prefix, self.frame)
    }
}

#[derive(Deserialize)]
struct RegistryFile {
    frames: Vec<FrameEntry>,
}

#[derive(Deserialize)]
struct FrameEntry {
    frame: FrameIndex,
    reference: Size,
    shapes: Vec<Shape>,
}

/// Frame to hotspot set lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotspotRegistry {
    sets: BTreeMap<FrameIndex, Arc<HotspotSet>>,
}

impl HotspotRegistry {
    /// Loads datasets from JSON of the form
    /// `{"frames": [{"frame": 1, "reference": {...}, "shapes": [...]}]}`.
    pub fn from_json(json: &str) -> Result<Self, HotspotError> {
        let file: RegistryFile = serde_json::from_str(json)?;
        let mut registry = Self::default();
        for entry in file.frames {
            let set = HotspotSet {
                reference: entry.reference,
                shapes: entry.shapes,
            };
            registry.insert(entry.frame, set)?;
        }
        tracing::debug!(frames = registry.sets.len(), "loaded hotspot registry");
        Ok(registry)
    }

    /// Datasets shipped with the viewer.
    pub fn embedded() -> Result<Self, HotspotError> {
        const DEFAULT_HOTSPOTS_JSON: &str = include_str!("../hotspots/default.json");
        Self::from_json(DEFAULT_HOTSPOTS_JSON)
    }

    /// Adds a dataset for a frame that has none yet.
    pub fn insert(&mut self, frame: FrameIndex, set: HotspotSet) -> Result<(), HotspotError> {
        set.validate(frame)?;
        if self.sets.contains_key(&frame) {
            return Err(HotspotError::DuplicateFrame(frame));
        }
        self.sets.insert(frame, Arc::new(set));
        Ok(())
    }

    /// The set for `frame`, or `None` if the frame is not interactive.
    pub fn get(&self, frame: FrameIndex) -> Option<Arc<HotspotSet>> {
        self.sets.get(&frame).filter(|set| !set.is_empty()).cloned()
    }

    pub fn frames(&self) -> impl Iterator<Item = FrameIndex> + '_ {
        self.sets.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};

    fn frame(n: u16) -> FrameIndex {
        FrameIndex::new(n).unwrap()
    }

    #[test]
    fn test_floor_numbering() {
        let total = 17;
        assert_eq!(FloorLabel::for_index(0, total), FloorLabel::Roof);
        assert_eq!(FloorLabel::for_index(total - 1, total), FloorLabel::Floor(1));
        for i in 1..total {
            assert_eq!(FloorLabel::for_index(i, total), FloorLabel::Floor(total - i));
        }
        assert_eq!(FloorLabel::Roof.to_string(), "Roof");
        assert_eq!(FloorLabel::Floor(3).to_string(), "Floor 3");
    }

    #[test]
    fn test_navigation_paths() {
        let f = frame(181);
        assert_eq!(NavigationIntent::for_label(FloorLabel::Roof, f).path(), "/roof/181");
        assert_eq!(NavigationIntent::for_label(FloorLabel::Floor(1), f).path(), "/ground/181");
        assert_eq!(NavigationIntent::for_label(FloorLabel::Floor(7), f).path(), "/room/181");
    }

    #[test]
    fn test_embedded_datasets() {
        let registry = HotspotRegistry::embedded().expect("embedded hotspots must parse");
        let frames: Vec<u16> = registry.frames().map(FrameIndex::get).collect();
        assert_eq!(frames, vec![1, 90, 181]);

        let first = registry.get(frame(1)).unwrap();
        assert_eq!(first.reference, Size::new(1600.0, 1139.0));
        assert_eq!(first.len(), 17);
        assert!(matches!(first.shapes[0], Shape::Polygon { .. }));
        assert!(matches!(first.shapes[2], Shape::Rect(_)));

        let ninety = registry.get(frame(90)).unwrap();
        assert_eq!(ninety.reference, Size::new(3840.0, 2733.0));
        assert_eq!(ninety.len(), 16);
        for (i, shape) in ninety.shapes.iter().enumerate() {
            let Shape::Rect(rect) = shape else {
                panic!("frame 90 shape {i} is not a rect");
            };
            assert!((rect.min.y - (551.0 + 98.0 * i as f64)).abs() < 1e-9);
            assert!(rect.rotation < 0.0);
        }

        let one_eighty_one = registry.get(frame(181)).unwrap();
        assert_eq!(one_eighty_one.len(), 17);
        assert!(one_eighty_one
            .shapes
            .iter()
            .all(|s| matches!(s, Shape::Polygon { points } if points.len() == 4)));

        assert!(registry.get(frame(2)).is_none());
    }

    #[test]
    fn test_scaled_to_live_size() {
        let set = HotspotSet {
            reference: Size::new(1600.0, 1139.0),
            shapes: vec![Shape::rect(515.0, 239.0, 565.0, 47.0)],
        };
        let scaled = set.scaled_to(Size::new(800.0, 1139.0 * 2.0));
        assert_eq!(scaled, vec![Shape::rect(257.5, 478.0, 282.5, 94.0)]);
    }

    #[test]
    fn test_rejects_degenerate_polygon() {
        let json = r#"{"frames": [{
            "frame": 5,
            "reference": {"width": 100, "height": 100},
            "shapes": [{"type": "polygon", "points": [[0, 0], [1, 1]]}]
        }]}"#;
        let err = HotspotRegistry::from_json(json).unwrap_err();
        assert!(matches!(err, HotspotError::DegeneratePolygon { index: 0, points: 2, .. }));
    }

    #[test]
    fn test_rejects_duplicate_frame() {
        let mut registry = HotspotRegistry::default();
        let set = HotspotSet {
            reference: Size::new(10.0, 10.0),
            shapes: vec![Shape::Rect(Rect {
                min: Point::new(0.0, 0.0),
                width: 1.0,
                height: 1.0,
                rotation: 0.0,
            })],
        };
        registry.insert(frame(3), set.clone()).unwrap();
        assert!(matches!(
            registry.insert(frame(3), set),
            Err(HotspotError::DuplicateFrame(_))
        ));
    }

    #[test]
    fn test_rejects_zero_reference() {
        let mut registry = HotspotRegistry::default();
        let set = HotspotSet {
            reference: Size::new(0.0, 10.0),
            shapes: Vec::new(),
        };
        assert!(matches!(
            registry.insert(frame(3), set),
            Err(HotspotError::InvalidReference { .. })
        ));
    }
}
