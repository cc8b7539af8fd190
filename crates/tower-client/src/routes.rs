//! Application routes.

use yew_router::prelude::*;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// 360° frame viewer.
    #[at("/tower")]
    Tower,
    /// Roof detail for the frame it was opened from.
    #[at("/roof/:frame")]
    Roof { frame: u16 },
    /// Ground floor detail.
    #[at("/ground/:frame")]
    Ground { frame: u16 },
    /// Any other floor.
    #[at("/room/:frame")]
    Room { frame: u16 },
    /// Shown after a WASM panic.
    #[at("/panic")]
    Panic,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for a hotspot navigation intent.
    pub fn for_intent(intent: tower_core::NavigationIntent) -> Self {
        use tower_core::NavigationKind;

        let frame = intent.frame.get();
        match intent.kind {
            NavigationKind::Roof => Route::Roof { frame },
            NavigationKind::Ground => Route::Ground { frame },
            NavigationKind::Room => Route::Room { frame },
        }
    }
}
