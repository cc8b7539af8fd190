//! 360° frame viewer: drag to scrub, thumbnails to jump, hotspots to open a floor.

use tower_core::{Direction, FrameIndex, NavigationIntent};
use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use super::{HotspotOverlayCanvas, ThumbnailBar};
use crate::hooks::{use_animator, use_drag_gesture, use_frame_sequencer, use_series_preload};
use crate::routes::Route;
use crate::state::use_viewer_context;

#[function_component(FrameViewer)]
pub fn frame_viewer() -> Html {
    let ctx = use_viewer_context();
    let config = ctx.config.clone();
    let navigator = use_navigator();

    let container_ref = use_node_ref();
    let image_ref = use_node_ref();

    let sequencer = use_frame_sequencer(
        config.series.clone(),
        config.session_key.clone(),
        config.preload_neighbors,
    );
    let animator = use_animator(sequencer.clone());
    let loading = use_series_preload(config.series.clone());

    use_drag_gesture(
        container_ref.clone(),
        sequencer.clone(),
        animator.clone(),
        config.drag_sensitivity_px,
        !loading,
    );

    let current = sequencer.rendered();

    let on_navigate = Callback::from(move |intent: NavigationIntent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::for_intent(intent));
        }
    });

    let on_select = {
        let animator = animator.clone();
        Callback::from(move |frame: FrameIndex| animator.animate_to(frame))
    };
    let on_step = {
        let animator = animator.clone();
        Callback::from(move |direction: Direction| animator.advance_to_next_stop(direction))
    };

    if loading {
        return html! {
            <div class="viewer-loading">
                <div class="spinner" />
                <p>{ "Loading tower views..." }</p>
            </div>
        };
    }

    let overlay = ctx.hotspots.get(current).map(|hotspots| {
        let [offset_x, offset_y] = config.tooltip_offset;
        html! {
            <HotspotOverlayCanvas
                key={current.get()}
                image_ref={image_ref.clone()}
                frame={current}
                {hotspots}
                tooltip_offset={(offset_x, offset_y)}
                on_navigate={on_navigate.clone()}
            />
        }
    });

    html! {
        <div class="frame-viewer" ref={container_ref}>
            <div class="viewer-back" data-nodrag="true">
                <Link<Route> to={Route::Home}>
                    <Icon data={IconData::LUCIDE_ARROW_LEFT} width="16px" height="16px" />
                    { " Back" }
                </Link<Route>>
            </div>

            <div class="frame-stage">
                <img
                    ref={image_ref}
                    class="frame-image"
                    src={sequencer.frame_url(current)}
                    alt={format!("Tower view {current}")}
                    draggable="false"
                />
                { for overlay }
            </div>

            <div class="frame-preload" aria-hidden="true">
                { for sequencer.preload_window().into_iter().map(|frame| html! {
                    <img key={frame.get()} src={sequencer.frame_url(frame)} alt="" />
                })}
            </div>

            <ThumbnailBar
                {current}
                series={AttrValue::from(config.series.clone())}
                {on_select}
                {on_step}
            />
        </div>
    }
}
