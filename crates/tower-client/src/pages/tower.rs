//! Full-screen tower viewer page.

use yew::prelude::*;

use crate::components::FrameViewer;

#[function_component(TowerPage)]
pub fn tower_page() -> Html {
    html! {
        <main class="page tower-page">
            <FrameViewer />
        </main>
    }
}
