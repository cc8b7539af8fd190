//! Session storage persistence for the current frame.

use tower_core::{FrameIndex, FrameStore};

/// Keeps the last viewed frame for the lifetime of the browser tab.
#[derive(Debug, Clone)]
pub struct SessionFrameStore {
    key: String,
}

impl SessionFrameStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

impl FrameStore for SessionFrameStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok()?
    }

    fn save(&self, frame: FrameIndex) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("session storage unavailable, frame not persisted");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, &frame.to_string()) {
            tracing::warn!(error = ?e, frame = frame.get(), "failed to persist frame");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_core::FrameSequencer;
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trips_through_session_storage() {
        let store = SessionFrameStore::new("test_round_trip_frame");
        store.save(FrameIndex::wrap(181));
        assert_eq!(store.load().as_deref(), Some("181"));
    }

    #[wasm_bindgen_test]
    fn test_sequencer_restores_saved_frame() {
        let key = "test_restore_frame";
        SessionFrameStore::new(key).save(FrameIndex::wrap(42));

        let sequencer = FrameSequencer::restore(SessionFrameStore::new(key), "tower-2", 5);
        assert_eq!(sequencer.current().get(), 42);
    }
}
