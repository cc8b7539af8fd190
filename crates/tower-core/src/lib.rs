//! Tower-View Core Library
//!
//! Frame sequencing, drag gestures, eased animation and hotspot hit-testing
//! for the 360° tower viewer. Nothing here touches the DOM; the Yew client
//! wires these pieces to browser events.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod animator;
pub mod chat;
pub mod config;
pub mod frame;
pub mod geometry;
pub mod gesture;
pub mod hotspot;
pub mod overlay;
pub mod reveal;

pub use animator::{AnimationState, Animator, Tick};
pub use chat::{Author, ChatMessage, ChatTranscript, RelayReply, RelayRequest};
pub use config::{ConfigError, ViewerConfig};
pub use frame::{
    ANCHOR_FRAMES, FrameIndex, FrameSequencer, FrameStore, STOP_FRAMES, THUMBNAIL_FRAMES,
    TOTAL_FRAMES, frame_url,
};
pub use geometry::{Point, Rect, Shape, Size, is_point_in_shape, scale_point};
pub use gesture::{Direction, DragState, GestureController, GestureEnd, next_stop};
pub use hotspot::{
    FloorLabel, HotspotError, HotspotRegistry, HotspotSet, NavigationIntent, NavigationKind,
};
pub use overlay::{Highlight, HotspotOverlay, OverlayState, palette_color};
pub use reveal::RevealSchedule;
