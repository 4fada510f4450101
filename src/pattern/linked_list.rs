//! `w` linked lists hanging off a single head node.
//!
//! ```text
//! n = 12, w = 4
//!
//!       0
//!       |
//!   +---+---+---+
//!   1   4   7  10
//!   2   5   8  11
//!   3   6   9
//! ```
//!
//! Each list occupies a contiguous id range. The `n - w - 1` tail nodes are
//! split as evenly as possible; the first `(n - w - 1) % w` lists get one
//! extra node.

use crate::types::{Edge, NodeId, Shape};

/// Sizes and positions of the `w` lists.
#[derive(Debug, Clone, Copy)]
pub struct Tails {
    w: u64,
    base: u64,
    extra: u64,
}

impl Tails {
    pub fn new(shape: Shape) -> Self {
        let w = shape.w();
        let tail_nodes = shape.n() - (w + 1);
        Self {
            w,
            base: tail_nodes / w,
            extra: tail_nodes % w,
        }
    }

    /// Number of nodes after the head of list `k`.
    pub fn len(&self, k: u64) -> u64 {
        self.base + u64::from(k < self.extra)
    }

    /// Id of the head of list `k`.
    pub fn head(&self, k: u64) -> NodeId {
        1 + k * (self.base + 1) + k.min(self.extra)
    }

    pub fn lens(&self) -> impl Iterator<Item = u64> {
        let tails = *self;
        (0..self.w).map(move |k| tails.len(k))
    }
}

/// Head edges `(0, head)` first, then every list from its head down.
pub fn edges(shape: Shape) -> impl Iterator<Item = Edge> {
    let tails = Tails::new(shape);
    let w = shape.w();
    (0..w)
        .map(move |k| (0, tails.head(k)))
        .chain((0..w).flat_map(move |k| {
            let head = tails.head(k);
            (head..head + tails.len(k)).map(|v| (v, v + 1))
        }))
}

pub fn num_edges(shape: Shape) -> u64 {
    shape.n() - 1
}
