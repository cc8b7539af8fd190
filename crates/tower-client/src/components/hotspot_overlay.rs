//! Transparent canvas over the current frame with hoverable, clickable floors.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gloo::events::EventListener;
use tower_core::{
    FloorLabel, FrameIndex, HotspotOverlay, HotspotSet, NavigationIntent, Point, Rect, Size,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, HtmlImageElement, MouseEvent};
use yew::prelude::*;

use crate::renderer;

#[derive(Properties, PartialEq)]
pub struct HotspotOverlayProps {
    /// The displayed frame image; the canvas tracks its drawn pixels.
    pub image_ref: NodeRef,
    pub frame: FrameIndex,
    pub hotspots: Arc<HotspotSet>,
    /// Tooltip offset from the cursor in pixels.
    #[prop_or((10.0, -40.0))]
    pub tooltip_offset: (f64, f64),
    pub on_navigate: Callback<NavigationIntent>,
}

#[derive(Debug, Clone, PartialEq)]
struct Tooltip {
    label: FloorLabel,
    left: f64,
    top: f64,
}

/// Pointer position relative to the canvas's top-left corner.
fn surface_point(canvas: &HtmlCanvasElement, e: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(
        f64::from(e.client_x()) - rect.left(),
        f64::from(e.client_y()) - rect.top(),
    )
}

/// Where the frame's pixels sit inside the `<img>` box, which letterboxes
/// them with `object-fit: contain`.
fn drawn_content(image: &HtmlImageElement) -> Rect {
    let element = Size::new(
        f64::from(image.client_width()),
        f64::from(image.client_height()),
    );
    let natural = Size::new(
        f64::from(image.natural_width()),
        f64::from(image.natural_height()),
    );
    natural.contained_in(element)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Hotspot overlay for one frame.
///
/// All listeners are rebuilt whenever the frame or hotspot set changes and
/// released on unmount, so none can fire against a removed canvas.
#[function_component(HotspotOverlayCanvas)]
pub fn hotspot_overlay_canvas(props: &HotspotOverlayProps) -> Html {
    let canvas_ref = use_node_ref();
    let tooltip = use_state_eq(|| None::<Tooltip>);

    {
        let canvas_ref = canvas_ref.clone();
        let tooltip = tooltip.clone();
        let on_navigate = props.on_navigate.clone();
        let (offset_x, offset_y) = props.tooltip_offset;

        use_effect_with(
            (props.frame, props.hotspots.clone(), props.image_ref.clone()),
            move |(frame, hotspots, image_ref)| {
                let mut listeners: Vec<EventListener> = Vec::new();
                let canvas = canvas_ref.cast::<HtmlCanvasElement>();
                let image = image_ref.cast::<HtmlImageElement>();

                if let (Some(canvas), Some(image), Some(ctx)) =
                    (canvas.clone(), image, canvas.as_ref().and_then(context_2d))
                {
                    let overlay = Rc::new(RefCell::new(HotspotOverlay::new(
                        *frame,
                        hotspots.clone(),
                    )));

                    let relayout: Rc<dyn Fn()> = {
                        let canvas = canvas.clone();
                        let image = image.clone();
                        let overlay = overlay.clone();
                        let tooltip = tooltip.clone();
                        Rc::new(move || {
                            let content = drawn_content(&image);
                            // Canvas pixels follow the drawn image, not its element box.
                            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                            let (width, height) = (
                                content.width.round().max(0.0) as u32,
                                content.height.round().max(0.0) as u32,
                            );
                            canvas.set_width(width);
                            canvas.set_height(height);
                            let _ = canvas.set_attribute(
                                "style",
                                &format!(
                                    "left: {}px; top: {}px; width: {width}px; height: {height}px;",
                                    f64::from(image.offset_left()) + content.min.x,
                                    f64::from(image.offset_top()) + content.min.y,
                                ),
                            );
                            overlay
                                .borrow_mut()
                                .layout(Size::new(f64::from(width), f64::from(height)));
                            tooltip.set(None);
                        })
                    };

                    if image.complete() {
                        relayout();
                    } else {
                        let relayout = relayout.clone();
                        listeners.push(EventListener::once(&image, "load", move |_| relayout()));
                    }

                    {
                        let relayout = relayout.clone();
                        listeners.push(EventListener::new(
                            &gloo::utils::window(),
                            "resize",
                            move |_| relayout(),
                        ));
                    }

                    {
                        let canvas_for_hit = canvas.clone();
                        let overlay = overlay.clone();
                        listeners.push(EventListener::new(
                            &canvas,
                            "pointerdown",
                            move |event: &Event| {
                                let Some(e) = event.dyn_ref::<MouseEvent>() else {
                                    return;
                                };
                                let p = surface_point(&canvas_for_hit, e);
                                if overlay.borrow().captures(p) {
                                    event.stop_propagation();
                                }
                            },
                        ));
                    }

                    {
                        let canvas_for_draw = canvas.clone();
                        let ctx = ctx.clone();
                        let overlay = overlay.clone();
                        let tooltip = tooltip.clone();
                        listeners.push(EventListener::new(&canvas, "mousemove", move |event| {
                            let Some(e) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let p = surface_point(&canvas_for_draw, e);
                            let highlight = overlay.borrow_mut().hover(p);
                            match highlight {
                                Some(highlight) => {
                                    renderer::draw_highlight(&ctx, &canvas_for_draw, &highlight);
                                    tooltip.set(Some(Tooltip {
                                        label: highlight.label,
                                        left: f64::from(e.client_x()) + offset_x,
                                        top: f64::from(e.client_y()) + offset_y,
                                    }));
                                }
                                None => {
                                    renderer::clear(&ctx, &canvas_for_draw);
                                    tooltip.set(None);
                                }
                            }
                        }));
                    }

                    {
                        let canvas_for_clear = canvas.clone();
                        let overlay = overlay.clone();
                        let tooltip = tooltip.clone();
                        listeners.push(EventListener::new(&canvas, "mouseleave", move |_| {
                            overlay.borrow_mut().leave();
                            renderer::clear(&ctx, &canvas_for_clear);
                            tooltip.set(None);
                        }));
                    }

                    {
                        let canvas_for_hit = canvas.clone();
                        listeners.push(EventListener::new(&canvas, "click", move |event| {
                            let Some(e) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let p = surface_point(&canvas_for_hit, e);
                            let intent = overlay.borrow().click(p);
                            if let Some(intent) = intent {
                                tracing::info!(path = %intent.path(), "hotspot selected");
                                on_navigate.emit(intent);
                            }
                        }));
                    }
                } else {
                    tracing::warn!(frame = frame.get(), "overlay canvas or image missing");
                }

                move || {
                    drop(listeners);
                    tooltip.set(None);
                }
            },
        );
    }

    html! {
        <>
            <canvas ref={canvas_ref} class="hotspot-overlay" data-frame={props.frame.to_string()} />
            if let Some(tip) = &*tooltip {
                <div
                    class="hotspot-tooltip"
                    style={format!("left: {}px; top: {}px;", tip.left, tip.top)}
                >
                    { tip.label.to_string() }
                </div>
            }
        </>
    }
}
