//! UI components.

mod chat_panel;
mod frame_viewer;
mod hotspot_overlay;
mod thumbnail_bar;

pub use chat_panel::ChatPanel;
pub use frame_viewer::FrameViewer;
pub use hotspot_overlay::HotspotOverlayCanvas;
pub use thumbnail_bar::ThumbnailBar;
