//! requestAnimationFrame driver for eased frame transitions.

use std::cell::RefCell;
use std::rc::Rc;

use tower_core::{Animator, Direction, FrameIndex, THUMBNAIL_FRAMES, Tick, next_stop};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use super::FrameSequencerHandle;

type TickClosure = Closure<dyn FnMut(f64)>;

/// Handle returned by `use_animator`.
#[derive(Clone)]
pub struct AnimatorHandle {
    animator: Rc<RefCell<Animator>>,
    /// Pending requestAnimationFrame id, if a tick is scheduled.
    raf_id: Rc<RefCell<Option<i32>>>,
    /// Tick callback. Cleared on unmount to break the reference cycle.
    tick: Rc<RefCell<Option<TickClosure>>>,
    sequencer: FrameSequencerHandle,
}

impl AnimatorHandle {
    /// Eases from the current frame to `target`, replacing any running
    /// transition.
    pub fn animate_to(&self, target: FrameIndex) {
        self.cancel_scheduled();
        let current = self.sequencer.current();
        let started = self.animator.borrow_mut().animate_to(current, target);
        if started {
            self.schedule();
        }
    }

    /// Eases to the next thumbnail stop in `direction`.
    pub fn advance_to_next_stop(&self, direction: Direction) {
        let target = next_stop(&THUMBNAIL_FRAMES, self.sequencer.current(), direction);
        self.animate_to(target);
    }

    /// Cancels the running transition, if any.
    pub fn stop(&self) {
        self.cancel_scheduled();
        self.animator.borrow_mut().cancel();
    }

    fn on_tick(&self) {
        *self.raf_id.borrow_mut() = None;
        let current = self.sequencer.current();
        let tick = self.animator.borrow_mut().tick(current);
        match tick {
            Tick::Idle => {}
            Tick::Advanced(frame) => {
                self.sequencer.set(frame);
                self.schedule();
            }
            Tick::Arrived(frame) => self.sequencer.set(frame),
        }
    }

    fn schedule(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(ref closure) = *self.tick.borrow() {
            let id = window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .ok();
            *self.raf_id.borrow_mut() = id;
        }
    }

    fn cancel_scheduled(&self) {
        if let Some(id) = self.raf_id.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Steps the sequencer one frame per display refresh toward a target.
///
/// Any pending tick is cancelled when the component unmounts.
#[hook]
pub fn use_animator(sequencer: FrameSequencerHandle) -> AnimatorHandle {
    let animator = use_mut_ref(Animator::new);
    let raf_id = use_mut_ref(|| None::<i32>);
    let tick = use_mut_ref(|| None::<TickClosure>);

    let handle = AnimatorHandle {
        animator,
        raf_id,
        tick,
        sequencer,
    };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let ticker = handle.clone();
            *handle.tick.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
                ticker.on_tick();
            }));

            move || {
                handle.stop();
                *handle.tick.borrow_mut() = None;
            }
        });
    }

    handle
}
