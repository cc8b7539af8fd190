//! Pointer and touch drag-to-scrub wiring.

use gloo::events::EventListener;
use tower_core::{GestureController, GestureEnd};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, PointerEvent, TouchEvent};
use yew::prelude::*;

use super::{AnimatorHandle, FrameSequencerHandle};

/// Elements (and their descendants) carrying this attribute never start a drag.
const NO_DRAG_SELECTOR: &str = "[data-nodrag='true']";

fn is_no_drag_target(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(NO_DRAG_SELECTOR).ok().flatten())
        .is_some()
}

fn pointer_x(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<PointerEvent>()
        .map(|e| f64::from(e.client_x()))
}

fn touch_x(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|e| e.touches().get(0))
        .map(|t| f64::from(t.client_x()))
}

fn changed_touch_x(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|e| e.changed_touches().get(0))
        .map(|t| f64::from(t.client_x()))
}

/// Attaches drag handling to `container` while `enabled`.
///
/// Down events are taken on the container, move/up on the window so a drag
/// keeps tracking outside the viewer. Listeners are dropped when `enabled`
/// changes or the component unmounts.
#[hook]
pub fn use_drag_gesture(
    container: NodeRef,
    sequencer: FrameSequencerHandle,
    animator: AnimatorHandle,
    sensitivity: f64,
    enabled: bool,
) {
    let gesture = use_mut_ref(move || GestureController::new(sensitivity));

    use_effect_with(enabled, move |enabled| {
        let mut listeners: Vec<EventListener> = Vec::new();

        if let (true, Some(el)) = (*enabled, container.cast::<Element>()) {
            let window = gloo::utils::window();

            let begin = {
                let gesture = gesture.clone();
                let sequencer = sequencer.clone();
                let animator = animator.clone();
                move |x: f64| {
                    animator.stop();
                    gesture.borrow_mut().begin(x, sequencer.current());
                }
            };

            let update = {
                let gesture = gesture.clone();
                let sequencer = sequencer.clone();
                move |x: Option<f64>| {
                    let Some(x) = x else {
                        return;
                    };
                    let frame = gesture.borrow_mut().update(x);
                    if let Some(frame) = frame {
                        sequencer.set(frame);
                    }
                }
            };

            let end = {
                let gesture = gesture.clone();
                let animator = animator.clone();
                move |x: Option<f64>| {
                    let outcome = gesture.borrow_mut().end(x);
                    if let GestureEnd::Snap(direction) = outcome {
                        animator.advance_to_next_stop(direction);
                    }
                }
            };

            {
                let begin = begin.clone();
                let el_for_capture = el.clone();
                listeners.push(EventListener::new(&el, "pointerdown", move |event| {
                    if is_no_drag_target(event) {
                        return;
                    }
                    let Some(e) = event.dyn_ref::<PointerEvent>() else {
                        return;
                    };
                    begin(f64::from(e.client_x()));
                    let _ = el_for_capture.set_pointer_capture(e.pointer_id());
                }));
            }
            listeners.push(EventListener::new(&el, "touchstart", move |event| {
                if is_no_drag_target(event) {
                    return;
                }
                if let Some(x) = touch_x(event) {
                    begin(x);
                }
            }));

            {
                let update = update.clone();
                listeners.push(EventListener::new(&window, "pointermove", move |event| {
                    update(pointer_x(event));
                }));
            }
            listeners.push(EventListener::new(&window, "touchmove", move |event| {
                update(touch_x(event));
            }));

            {
                let end = end.clone();
                listeners.push(EventListener::new(&window, "pointerup", move |event| {
                    end(pointer_x(event));
                }));
            }
            listeners.push(EventListener::new(&window, "touchend", move |event| {
                end(changed_touch_x(event));
            }));
        }

        move || {
            gesture.borrow_mut().cancel();
            drop(listeners);
        }
    });
}
