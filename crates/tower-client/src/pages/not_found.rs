//! 404 Not Found page.

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// 404 Not Found page.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page not-found-page">
            <h1>{ "404" }</h1>
            <p>{ "This floor does not exist." }</p>
            <div class="not-found-links">
                <Link<Route> to={Route::Tower}>{ "Back to the tower" }</Link<Route>>
                <Link<Route> to={Route::Home}>{ "Go to Home" }</Link<Route>>
            </div>
        </main>
    }
}
