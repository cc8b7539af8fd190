//! Tile reveal ordering for the floor detail views.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 10;
/// Delay between two tiles appearing.
pub const REVEAL_INTERVAL_MS: u32 = 5;

/// Random order in which the detail image tiles appear.
#[derive(Debug, Clone)]
pub struct RevealSchedule {
    order: Vec<usize>,
    next: usize,
}

impl RevealSchedule {
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Deterministic order for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn with_rng<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..GRID_ROWS * GRID_COLS).collect();
        order.shuffle(rng);
        Self { order, next: 0 }
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.order.len()
    }

    /// `(row, col)` of a tile index.
    pub fn cell(tile: usize) -> (usize, usize) {
        (tile / GRID_COLS, tile % GRID_COLS)
    }

    /// CSS `background-position` that shows `tile`'s slice of the image.
    #[allow(clippy::cast_precision_loss)]
    pub fn background_position(tile: usize) -> String {
        let (row, col) = Self::cell(tile);
        let x = col as f64 / (GRID_COLS - 1) as f64 * 100.0;
        let y = row as f64 / (GRID_ROWS - 1) as f64 * 100.0;
        format!("{x}% {y}%")
    }
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for RevealSchedule {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let tile = self.order.get(self.next).copied()?;
        self.next += 1;
        Some(tile)
    }
}
