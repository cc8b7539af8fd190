mod use_animator;
mod use_drag_gesture;
mod use_frame_sequencer;
mod use_series_preload;

pub use use_animator::{use_animator, AnimatorHandle};
pub use use_drag_gesture::use_drag_gesture;
pub use use_frame_sequencer::{use_frame_sequencer, FrameSequencerHandle};
pub use use_series_preload::use_series_preload;
