//! A complete `w`-ary tree filled in breadth-first order.
//!
//! ```text
//! n = 7, w = 2
//!
//!       0
//!     1   2
//!    3 4 5 6
//! ```
//!
//! Ids are handed out level by level, left to right, so child `c` hangs off
//! parent `(c - 1) / w`. The last level may be only partially filled.

use crate::types::{Edge, Shape};

pub fn edges(shape: Shape) -> impl Iterator<Item = Edge> {
    let w = shape.w();
    (1..shape.n()).map(move |child| ((child - 1) / w, child))
}

pub fn num_edges(shape: Shape) -> u64 {
    shape.n() - 1
}
