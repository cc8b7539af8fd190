//! Stop-frame thumbnails with previous/next controls.

use tower_core::{Direction, FrameIndex, THUMBNAIL_FRAMES};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct ThumbnailBarProps {
    /// Frame currently on screen.
    pub current: FrameIndex,
    pub series: AttrValue,
    pub on_select: Callback<FrameIndex>,
    pub on_step: Callback<Direction>,
}

#[function_component(ThumbnailBar)]
pub fn thumbnail_bar(props: &ThumbnailBarProps) -> Html {
    let on_prev = {
        let on_step = props.on_step.clone();
        Callback::from(move |_: MouseEvent| on_step.emit(Direction::Backward))
    };
    let on_next = {
        let on_step = props.on_step.clone();
        Callback::from(move |_: MouseEvent| on_step.emit(Direction::Forward))
    };

    html! {
        <div class="thumbnail-bar" data-nodrag="true">
            <button class="thumbnail-step" title="Previous view" onclick={on_prev}>
                <Icon data={IconData::LUCIDE_CHEVRON_LEFT} width="16px" height="16px" />
            </button>
            { for THUMBNAIL_FRAMES.iter().map(|&frame| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(frame))
                };
                let class = classes!(
                    "thumbnail",
                    (frame == props.current).then_some("active")
                );
                html! {
                    <button key={frame.get()} {class} {onclick} title={format!("Frame {frame}")}>
                        <img
                            src={tower_core::frame_url(&props.series, frame)}
                            alt={format!("Frame {frame}")}
                            draggable="false"
                        />
                    </button>
                }
            })}
            <button class="thumbnail-step" title="Next view" onclick={on_next}>
                <Icon data={IconData::LUCIDE_CHEVRON_RIGHT} width="16px" height="16px" />
            </button>
        </div>
    }
}
