//! Eased frame transitions.
//!
//! The animator steps one frame per display refresh along the shorter
//! circular path to a target. It holds no timer itself; the caller drives
//! [`Animator::tick`] from its refresh callback and cancels that callback
//! whenever the animator reports it is idle.

use crate::frame::FrameIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Running { target: FrameIndex, step: i64 },
}

/// Result of one refresh tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing is animating.
    Idle,
    /// Moved to this frame; schedule another tick.
    Advanced(FrameIndex),
    /// Moved to the target; stop scheduling.
    Arrived(FrameIndex),
}

#[derive(Debug, Clone, Default)]
pub struct Animator {
    state: AnimationState,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    pub fn target(&self) -> Option<FrameIndex> {
        match self.state {
            AnimationState::Running { target, .. } => Some(target),
            AnimationState::Idle => None,
        }
    }

    /// Starts a transition from `current` to `target`, replacing any running one.
    ///
    /// Ties between the two directions go forward. Returns `false` when
    /// `current` already equals `target`, in which case nothing runs.
    pub fn animate_to(&mut self, current: FrameIndex, target: FrameIndex) -> bool {
        if current == target {
            self.state = AnimationState::Idle;
            return false;
        }
        let step = if current.forward_distance(target) <= current.backward_distance(target) {
            1
        } else {
            -1
        };
        tracing::debug!(
            from = current.get(),
            target = target.get(),
            step,
            "animation started"
        );
        self.state = AnimationState::Running { target, step };
        true
    }

    /// Advances `current` by one step toward the target.
    pub fn tick(&mut self, current: FrameIndex) -> Tick {
        let AnimationState::Running { target, step } = self.state else {
            return Tick::Idle;
        };
        if current == target {
            self.state = AnimationState::Idle;
            return Tick::Arrived(current);
        }
        let next = current.offset(step);
        if next == target {
            tracing::debug!(frame = next.get(), "animation arrived");
            self.state = AnimationState::Idle;
            Tick::Arrived(next)
        } else {
            Tick::Advanced(next)
        }
    }

    pub fn cancel(&mut self) {
        self.state = AnimationState::Idle;
    }
}
