//! Viewer-wide shared state.

use std::rc::Rc;

use tower_core::{HotspotRegistry, ViewerConfig};
use yew::prelude::*;

/// Configuration and hotspot datasets, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ViewerContext {
    pub config: Rc<ViewerConfig>,
    pub hotspots: Rc<HotspotRegistry>,
}

impl PartialEq for ViewerContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.hotspots, &other.hotspots)
    }
}

impl ViewerContext {
    /// Loads the embedded config and hotspots.
    ///
    /// Failures are logged and replaced with defaults: built-in config, and an
    /// empty registry (no overlays) for hotspots.
    pub fn load() -> Self {
        let config = ViewerConfig::embedded().unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid viewer config, using defaults");
            ViewerConfig::default()
        });
        let hotspots = HotspotRegistry::embedded().unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid hotspot data, overlays disabled");
            HotspotRegistry::default()
        });
        tracing::info!(
            series = %config.series,
            interactive_frames = hotspots.frames().count(),
            "viewer context loaded"
        );
        Self {
            config: Rc::new(config),
            hotspots: Rc::new(hotspots),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewerProviderProps {
    pub children: Children,
}

/// Provides [`ViewerContext`] to the whole tree.
#[function_component(ViewerProvider)]
pub fn viewer_provider(props: &ViewerProviderProps) -> Html {
    let context = use_memo((), |_| ViewerContext::load());

    html! {
        <ContextProvider<ViewerContext> context={(*context).clone()}>
            { props.children.clone() }
        </ContextProvider<ViewerContext>>
    }
}

#[hook]
pub fn use_viewer_context() -> ViewerContext {
    use_context::<ViewerContext>().expect("use_viewer_context: ViewerProvider not found")
}
