//! Floor detail page: the tower frame behind a tile-by-tile reveal.

use gloo::timers::callback::Interval;
use tower_core::reveal::{GRID_COLS, GRID_ROWS, REVEAL_INTERVAL_MS};
use tower_core::{FrameIndex, RevealSchedule, frame_url};
use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use super::NotFoundPage;
use crate::routes::Route;
use crate::state::use_viewer_context;

/// Which detail image a hotspot opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Roof,
    Ground,
    Room,
}

impl DetailKind {
    fn image_url(self) -> &'static str {
        match self {
            DetailKind::Roof => "/images/roof.png",
            DetailKind::Ground => "/images/ground.png",
            DetailKind::Room => "/images/room.png",
        }
    }

    fn title(self) -> &'static str {
        match self {
            DetailKind::Roof => "Roof",
            DetailKind::Ground => "Ground floor",
            DetailKind::Room => "Floor",
        }
    }
}

/// Shows the next tile. Returns `false` once the schedule is exhausted.
fn reveal_step(schedule: &mut RevealSchedule, visible: &mut [bool]) -> bool {
    match schedule.next() {
        Some(tile) => {
            visible[tile] = true;
            true
        }
        None => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailPageProps {
    pub kind: DetailKind,
    /// Tower frame the detail was opened from, used as the backdrop.
    pub frame: u16,
}

#[function_component(DetailPage)]
pub fn detail_page(props: &DetailPageProps) -> Html {
    let ctx = use_viewer_context();
    let visible = use_mut_ref(|| vec![false; GRID_ROWS * GRID_COLS]);
    let force_update = use_force_update();

    let interval = use_mut_ref(|| None::<Interval>);

    {
        let visible = visible.clone();
        use_effect_with(props.kind, move |_| {
            visible.borrow_mut().fill(false);
            let mut schedule = RevealSchedule::new();
            let ticker = {
                let interval = interval.clone();
                Interval::new(REVEAL_INTERVAL_MS, move || {
                    if reveal_step(&mut schedule, &mut visible.borrow_mut()) {
                        force_update.force_update();
                    } else {
                        // Stops the timer once every tile is shown.
                        interval.borrow_mut().take();
                    }
                })
            };
            *interval.borrow_mut() = Some(ticker);
            move || {
                interval.borrow_mut().take();
            }
        });
    }

    let Some(frame) = FrameIndex::new(props.frame) else {
        return html! { <NotFoundPage /> };
    };

    let backdrop = format!(
        "background-image: url({});",
        frame_url(&ctx.config.series, frame)
    );
    let image = props.kind.image_url();
    let visible = visible.borrow();

    html! {
        <main class="page detail-page" style={backdrop}>
            <h1 class="detail-title">{ props.kind.title() }</h1>
            <div
                class="tile-grid"
                style={format!(
                    "grid-template-columns: repeat({GRID_COLS}, 1fr); grid-template-rows: repeat({GRID_ROWS}, 1fr);"
                )}
            >
                { for (0..GRID_ROWS * GRID_COLS).map(|tile| {
                    let opacity = if visible[tile] { 1 } else { 0 };
                    let style = format!(
                        "background-image: url({image}); background-size: {}% {}%; background-position: {}; opacity: {opacity};",
                        GRID_COLS * 100,
                        GRID_ROWS * 100,
                        RevealSchedule::background_position(tile),
                    );
                    html! { <div key={tile} class="tile" {style} /> }
                })}
            </div>
            <div class="detail-back" data-nodrag="true">
                <Link<Route> to={Route::Tower}>
                    <Icon data={IconData::LUCIDE_ARROW_LEFT} width="20px" height="20px" />
                </Link<Route>>
            </div>
        </main>
    }
}
