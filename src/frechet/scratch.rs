//! Reusable buffers for the distance engine.

use super::continuous::Interval;
use num_traits::Float;

/// Thread-owned working memory for the Fréchet routines.
///
/// Every routine resizes and overwrites the buffers it touches before
/// reading them, so a scratch can be handed from call to call without
/// clearing. Keep one per worker thread; it is deliberately not shared.
#[derive(Debug, Clone, Default)]
pub struct DistanceScratch<F> {
    pub(crate) prev_row: Vec<F>,
    pub(crate) curr_row: Vec<F>,
    pub(crate) visited: Vec<bool>,
    pub(crate) stack: Vec<usize>,
    pub(crate) reach: Vec<Interval<F>>,
}

impl<F: Float> DistanceScratch<F> {
    /// Creates an empty scratch. Buffers grow on first use.
    pub fn new() -> Self {
        Self {
            prev_row: Vec::new(),
            curr_row: Vec::new(),
            visited: Vec::new(),
            stack: Vec::new(),
            reach: Vec::new(),
        }
    }

    /// Creates a scratch sized for curves of up to `max_len` points, so
    /// the dynamic-programming rows never reallocate.
    pub fn with_capacity(max_len: usize) -> Self {
        Self {
            prev_row: Vec::with_capacity(max_len + 1),
            curr_row: Vec::with_capacity(max_len + 1),
            visited: Vec::new(),
            stack: Vec::new(),
            reach: Vec::with_capacity(max_len),
        }
    }

    /// Resets both rows to `len` entries: the diagonal predecessor of the
    /// origin is `-inf`, everything else `+inf`.
    pub(crate) fn prepare_rows(&mut self, len: usize) {
        self.prev_row.clear();
        self.prev_row.resize(len, F::infinity());
        self.prev_row[0] = F::neg_infinity();
        self.curr_row.clear();
        self.curr_row.resize(len, F::infinity());
    }

    /// Resets the visited marks to `cells` unvisited entries and empties the stack.
    pub(crate) fn prepare_search(&mut self, cells: usize) {
        self.visited.clear();
        self.visited.resize(cells, false);
        self.stack.clear();
    }
}
