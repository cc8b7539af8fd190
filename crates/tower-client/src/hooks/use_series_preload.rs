use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::preload::preload_series;

/// Preloads every frame of `series` once. Returns `true` while loading.
///
/// The viewer becomes interactive once every request has settled, whether
/// or not some frames failed.
#[hook]
pub fn use_series_preload(series: String) -> bool {
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with(series, move |series| {
            let series = series.clone();
            spawn_local(async move {
                let report = preload_series(&series).await;
                if report.failed > 0 {
                    tracing::error!(
                        loaded = report.loaded,
                        failed = report.failed,
                        "some frames failed to preload"
                    );
                } else {
                    tracing::info!(loaded = report.loaded, "all frames preloaded");
                }
                loading.set(false);
            });
        });
    }

    *loading
}
