//! Frame indices and the frame sequencer.
//!
//! The tower is shown as a circular sequence of 362 pre-rendered images.
//! [`FrameIndex`] is the position in that sequence and always stays in
//! `[1, TOTAL_FRAMES]`; every arithmetic operation wraps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of frames in one full rotation.
pub const TOTAL_FRAMES: u16 = 362;

/// Frames the viewer snaps to after a drag.
pub const STOP_FRAMES: [FrameIndex; 4] = [
    FrameIndex(90),
    FrameIndex(181),
    FrameIndex(270),
    FrameIndex(362),
];

/// Frames shown in the thumbnail bar. Also used as snap targets after a drag.
pub const THUMBNAIL_FRAMES: [FrameIndex; 4] = [
    FrameIndex(1),
    FrameIndex(90),
    FrameIndex(181),
    FrameIndex(270),
];

/// Frames whose image asset is stored as PNG instead of JPEG.
pub const ANCHOR_FRAMES: [FrameIndex; 5] = [
    FrameIndex(1),
    FrameIndex(90),
    FrameIndex(181),
    FrameIndex(270),
    FrameIndex(362),
];

/// Position in the circular image sequence, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct FrameIndex(u16);

impl FrameIndex {
    pub const FIRST: FrameIndex = FrameIndex(1);
    pub const LAST: FrameIndex = FrameIndex(TOTAL_FRAMES);

    /// Maps any integer onto `[1, 362]` circularly (0 → 362, 363 → 1).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn wrap(index: i64) -> Self {
        let total = i64::from(TOTAL_FRAMES);
        match index.rem_euclid(total) {
            0 => FrameIndex::LAST,
            r => FrameIndex(r as u16),
        }
    }

    /// Returns the frame if `index` is already in range.
    pub fn new(index: u16) -> Option<Self> {
        (1..=TOTAL_FRAMES).contains(&index).then_some(FrameIndex(index))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Moves `delta` frames along the circle.
    #[must_use]
    pub fn offset(self, delta: i64) -> Self {
        Self::wrap(i64::from(self.0) + delta.rem_euclid(i64::from(TOTAL_FRAMES)))
    }

    /// Number of forward steps needed to reach `target`.
    pub fn forward_distance(self, target: FrameIndex) -> u16 {
        let total = i32::from(TOTAL_FRAMES);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let distance = (i32::from(target.0) - i32::from(self.0)).rem_euclid(total) as u16;
        distance
    }

    /// Number of backward steps needed to reach `target`.
    pub fn backward_distance(self, target: FrameIndex) -> u16 {
        target.forward_distance(self)
    }

    pub fn is_anchor(self) -> bool {
        ANCHOR_FRAMES.contains(&self)
    }

    /// 4-digit zero padded form used in asset file names.
    pub fn padded(self) -> String {
        format!("{:04}", self.0)
    }

    /// Iterates every frame from 1 to 362.
    pub fn all() -> impl Iterator<Item = FrameIndex> {
        (1..=TOTAL_FRAMES).map(FrameIndex)
    }
}

impl Default for FrameIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FrameIndex> for u16 {
    fn from(frame: FrameIndex) -> Self {
        frame.0
    }
}

impl TryFrom<i64> for FrameIndex {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .and_then(FrameIndex::new)
            .ok_or_else(|| format!("frame index {value} outside 1..={TOTAL_FRAMES}"))
    }
}

/// Persistence seam for the current frame.
///
/// Implementations hold a single scalar for the lifetime of a browsing
/// session. `load` returns the raw stored text so the sequencer decides how
/// to interpret it.
pub trait FrameStore {
    fn load(&self) -> Option<String>;
    fn save(&self, frame: FrameIndex);
}

/// Owns the current frame and the rules that map frames to assets.
#[derive(Debug)]
pub struct FrameSequencer<S> {
    current: FrameIndex,
    series: String,
    preload_neighbors: u16,
    store: S,
}

impl<S: FrameStore> FrameSequencer<S> {
    /// Reads the persisted frame once and starts from it.
    ///
    /// The leading integer of the stored text is used (`"181abc"` and
    /// `" 42.0"` resume at 181 and 42). Values without one, or too large for
    /// `i64`, start at frame 1; other out of range integers are wrapped onto
    /// the circle.
    pub fn restore(store: S, series: impl Into<String>, preload_neighbors: u16) -> Self {
        let current = store
            .load()
            .and_then(|raw| parse_leading_int(&raw))
            .map_or(FrameIndex::FIRST, FrameIndex::wrap);

        tracing::debug!(frame = current.get(), "restored current frame");
        store.save(current);

        Self {
            current,
            series: series.into(),
            preload_neighbors,
            store,
        }
    }

    pub fn current(&self) -> FrameIndex {
        self.current
    }

    /// Sets the current frame, persisting it. Returns `true` if it changed.
    pub fn set(&mut self, frame: FrameIndex) -> bool {
        if frame == self.current {
            return false;
        }
        self.current = frame;
        self.store.save(frame);
        true
    }

    /// Asset path for `frame`: `/{series}/{0000}.{png|jpg}`.
    pub fn frame_url(&self, frame: FrameIndex) -> String {
        frame_url(&self.series, frame)
    }

    /// The current frame followed by its circular neighbours, nearest first.
    pub fn preload_window(&self) -> Vec<FrameIndex> {
        let mut frames = vec![self.current];
        for step in 1..=i64::from(self.preload_neighbors) {
            for frame in [self.current.offset(step), self.current.offset(-step)] {
                if !frames.contains(&frame) {
                    frames.push(frame);
                }
            }
        }
        frames
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Optional sign followed by digits, after leading whitespace.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len() - sign_len);
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

/// Asset path for `frame` within an image series.
pub fn frame_url(series: &str, frame: FrameIndex) -> String {
    let ext = if frame.is_anchor() { "png" } else { "jpg" };
    format!("/{}/{}.{}", series, frame.padded(), ext)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
        writes: RefCell<usize>,
    }

    impl MemoryStore {
        fn with(value: &str) -> Self {
            Self {
                value: RefCell::new(Some(value.to_string())),
                writes: RefCell::new(0),
            }
        }
    }

    impl FrameStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, frame: FrameIndex) {
            *self.value.borrow_mut() = Some(frame.to_string());
            *self.writes.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_wrap_is_identity_in_range() {
        for i in 1..=i64::from(TOTAL_FRAMES) {
            assert_eq!(i64::from(FrameIndex::wrap(i).get()), i);
        }
    }

    #[test]
    fn test_wrap_is_circular() {
        assert_eq!(FrameIndex::wrap(0).get(), 362);
        assert_eq!(FrameIndex::wrap(363).get(), 1);
        assert_eq!(FrameIndex::wrap(-1).get(), 361);
        for k in -800..800 {
            assert_eq!(FrameIndex::wrap(362 + k), FrameIndex::wrap(k), "k = {k}");
        }
    }

    #[test]
    fn test_distances() {
        let from = FrameIndex::wrap(350);
        let to = FrameIndex::wrap(5);
        assert_eq!(from.forward_distance(to), 17);
        assert_eq!(from.backward_distance(to), 345);
        assert_eq!(from.forward_distance(from), 0);
    }

    #[test]
    fn test_frame_url_extension() {
        assert_eq!(frame_url("tower-2", FrameIndex::FIRST), "/tower-2/0001.png");
        assert_eq!(frame_url("tower-2", FrameIndex::wrap(2)), "/tower-2/0002.jpg");
        assert_eq!(frame_url("tower-2", FrameIndex::wrap(270)), "/tower-2/0270.png");
        assert_eq!(frame_url("tower-2", FrameIndex::LAST), "/tower-2/0362.png");
        assert_eq!(frame_url("tower-2", FrameIndex::wrap(100)), "/tower-2/0100.jpg");
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<FrameIndex>("0").is_err());
        assert!(serde_json::from_str::<FrameIndex>("363").is_err());
        assert_eq!(serde_json::from_str::<FrameIndex>("181").unwrap().get(), 181);
        assert_eq!(serde_json::to_string(&FrameIndex::wrap(90)).unwrap(), "90");
    }

    #[test]
    fn test_restore_defaults_to_first_frame() {
        let seq = FrameSequencer::restore(MemoryStore::default(), "tower-2", 5);
        assert_eq!(seq.current(), FrameIndex::FIRST);

        let seq = FrameSequencer::restore(MemoryStore::with("not a number"), "tower-2", 5);
        assert_eq!(seq.current(), FrameIndex::FIRST);
    }

    #[test]
    fn test_restore_reads_persisted_frame() {
        let seq = FrameSequencer::restore(MemoryStore::with("181"), "tower-2", 5);
        assert_eq!(seq.current().get(), 181);

        let seq = FrameSequencer::restore(MemoryStore::with("400"), "tower-2", 5);
        assert_eq!(seq.current().get(), 38);
    }

    #[test]
    fn test_wrap_handles_extreme_values() {
        // i64::MIN = -25_478_928_278_604_354 * 362 + 340
        assert_eq!(FrameIndex::wrap(i64::MIN).get(), 340);
        // i64::MAX = 25_478_928_278_604_353 * 362 + 21
        assert_eq!(FrameIndex::wrap(i64::MAX).get(), 21);
    }

    #[test]
    fn test_restore_survives_extreme_values() {
        let seq = FrameSequencer::restore(MemoryStore::with("-9223372036854775808"), "tower-2", 5);
        assert_eq!(seq.current().get(), 340);

        let seq = FrameSequencer::restore(MemoryStore::with("9223372036854775807"), "tower-2", 5);
        assert_eq!(seq.current().get(), 21);

        let seq = FrameSequencer::restore(MemoryStore::with("99999999999999999999"), "tower-2", 5);
        assert_eq!(seq.current(), FrameIndex::FIRST);
        assert_eq!(seq.store().load().as_deref(), Some("1"));

        assert_eq!(FrameIndex::wrap(10).offset(i64::MIN), FrameIndex::wrap(350));
        assert_eq!(FrameIndex::wrap(10).offset(i64::MAX), FrameIndex::wrap(31));
    }

    #[test]
    fn test_restore_uses_leading_integer() {
        let seq = FrameSequencer::restore(MemoryStore::with("181abc"), "tower-2", 5);
        assert_eq!(seq.current().get(), 181);

        let seq = FrameSequencer::restore(MemoryStore::with(" 42.0"), "tower-2", 5);
        assert_eq!(seq.current().get(), 42);

        let seq = FrameSequencer::restore(MemoryStore::with("-1"), "tower-2", 5);
        assert_eq!(seq.current().get(), 361);

        for raw in ["", "  ", "-", "+x", "abc181"] {
            let seq = FrameSequencer::restore(MemoryStore::with(raw), "tower-2", 5);
            assert_eq!(seq.current(), FrameIndex::FIRST, "raw = {raw:?}");
        }
    }

    #[test]
    fn test_set_persists_every_change() {
        let mut seq = FrameSequencer::restore(MemoryStore::default(), "tower-2", 5);
        let writes_after_restore = *seq.store().writes.borrow();

        assert!(seq.set(FrameIndex::wrap(42)));
        assert!(!seq.set(FrameIndex::wrap(42)));
        assert!(seq.set(FrameIndex::wrap(43)));

        assert_eq!(*seq.store().writes.borrow(), writes_after_restore + 2);
        assert_eq!(seq.store().load().as_deref(), Some("43"));
    }

    #[test]
    fn test_preload_window_wraps() {
        let seq = FrameSequencer::restore(MemoryStore::with("2"), "tower-2", 5);
        let window: Vec<u16> = seq.preload_window().into_iter().map(FrameIndex::get).collect();

        assert_eq!(window.len(), 11);
        assert_eq!(window[0], 2);
        for expected in [3, 4, 5, 6, 7, 1, 362, 361, 360, 359] {
            assert!(window.contains(&expected), "missing {expected}");
        }
    }
}
