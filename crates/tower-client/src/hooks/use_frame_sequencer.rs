use std::cell::RefCell;
use std::rc::Rc;

use tower_core::{FrameIndex, FrameSequencer};
use yew::prelude::*;

use crate::storage::SessionFrameStore;

/// Handle to the viewer's current frame.
///
/// The sequencer behind the `Rc` is the source of truth and can be read from
/// long-lived event listeners; the state handle only triggers re-renders.
#[derive(Clone)]
pub struct FrameSequencerHandle {
    inner: Rc<RefCell<FrameSequencer<SessionFrameStore>>>,
    rendered: UseStateHandle<FrameIndex>,
}

impl PartialEq for FrameSequencerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner) && *self.rendered == *other.rendered
    }
}

impl FrameSequencerHandle {
    /// Latest frame, including changes not yet rendered.
    pub fn current(&self) -> FrameIndex {
        self.inner.borrow().current()
    }

    /// Frame of the render this handle belongs to.
    pub fn rendered(&self) -> FrameIndex {
        *self.rendered
    }

    /// Moves to `frame`, persisting it and scheduling a re-render.
    pub fn set(&self, frame: FrameIndex) {
        let changed = self.inner.borrow_mut().set(frame);
        if changed {
            self.rendered.set(frame);
        }
    }

    pub fn frame_url(&self, frame: FrameIndex) -> String {
        self.inner.borrow().frame_url(frame)
    }

    pub fn preload_window(&self) -> Vec<FrameIndex> {
        self.inner.borrow().preload_window()
    }
}

/// Restores the last viewed frame from session storage and keeps it there.
#[hook]
pub fn use_frame_sequencer(
    series: String,
    session_key: String,
    preload_neighbors: u16,
) -> FrameSequencerHandle {
    let inner = use_mut_ref(move || {
        FrameSequencer::restore(
            SessionFrameStore::new(session_key),
            series,
            preload_neighbors,
        )
    });
    let rendered = {
        let inner = inner.clone();
        use_state(move || inner.borrow().current())
    };

    FrameSequencerHandle { inner, rendered }
}
