//! Frame image preloading into the browser cache.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::join_all;
use gloo::events::EventListener;
use tower_core::{FrameIndex, frame_url};
use web_sys::HtmlImageElement;

#[derive(Debug, thiserror::Error)]
pub enum PreloadError {
    #[error("Failed to create image element: {0}")]
    Element(String),
    #[error("Failed to load {0}")]
    Load(String),
    #[error("Load listener for {0} dropped before the image settled")]
    Dropped(String),
}

/// Outcome of a batch preload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub loaded: usize,
    pub failed: usize,
}

/// Resolves once `url` has loaded or failed.
pub async fn load_image(url: &str) -> Result<(), PreloadError> {
    let image = HtmlImageElement::new().map_err(|e| PreloadError::Element(format!("{e:?}")))?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = tx.clone();
        EventListener::once(&image, "load", move |_| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let on_error = EventListener::once(&image, "error", move |_| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });

    image.set_src(url);
    let result = match rx.await {
        Ok(true) => Ok(()),
        Ok(false) => Err(PreloadError::Load(url.to_string())),
        Err(_) => Err(PreloadError::Dropped(url.to_string())),
    };
    drop(on_load);
    drop(on_error);
    result
}

/// Requests every frame of `series` concurrently.
///
/// A failed frame is logged and counted; it never stops the others.
pub async fn preload_series(series: &str) -> PreloadReport {
    let loads = FrameIndex::all().map(|frame| {
        let url = frame_url(series, frame);
        async move {
            let result = load_image(&url).await;
            (frame, result)
        }
    });

    let mut report = PreloadReport::default();
    for (frame, result) in join_all(loads).await {
        match result {
            Ok(()) => report.loaded += 1,
            Err(e) => {
                tracing::warn!(frame = frame.get(), error = %e, "frame preload failed");
                report.failed += 1;
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_core::TOTAL_FRAMES;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    async fn test_missing_image_is_load_error() {
        let result = load_image("/does-not-exist.png").await;
        assert!(
            matches!(result, Err(PreloadError::Load(ref url)) if url == "/does-not-exist.png"),
            "unexpected result: {result:?}"
        );
    }

    #[wasm_bindgen_test]
    async fn test_missing_series_still_settles() {
        let report = preload_series("no-such-series").await;
        assert_eq!(report.loaded, 0);
        assert_eq!(report.failed, usize::from(TOTAL_FRAMES));
    }
}
