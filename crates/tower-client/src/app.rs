//! Main application component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{DetailKind, DetailPage, HomePage, NotFoundPage, PanicPage, TowerPage};
use crate::routes::Route;
use crate::state::ViewerProvider;

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Tower => html! { <TowerPage /> },
        Route::Roof { frame } => html! { <DetailPage kind={DetailKind::Roof} frame={frame} /> },
        Route::Ground { frame } => {
            html! { <DetailPage kind={DetailKind::Ground} frame={frame} /> }
        }
        Route::Room { frame } => html! { <DetailPage kind={DetailKind::Room} frame={frame} /> },
        Route::Panic => html! { <PanicPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Root application component with router.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ViewerProvider>
                <Switch<Route> render={switch} />
            </ViewerProvider>
        </BrowserRouter>
    }
}
