//! Landing page.

use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use crate::components::ChatPanel;
use crate::routes::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main class="page home-page">
            <section class="home-hero">
                <h1>{ "Tower View" }</h1>
                <p>{ "Walk around the tower, then pick a floor to look inside." }</p>
                <Link<Route> to={Route::Tower} classes="btn-primary">
                    <Icon data={IconData::LUCIDE_ROTATE_CW} width="16px" height="16px" />
                    { " Explore in 360°" }
                </Link<Route>>
            </section>
            <ChatPanel />
        </main>
    }
}
