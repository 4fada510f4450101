//! Various types related to graph generation.

use crate::error::{Error, Result};

/// The node id type.
pub type NodeId = u64;

/// A directed edge `(source, destination)`.
pub type Edge = (NodeId, NodeId);

/// Number of nodes and width (branching factor) of a generated graph.
///
/// A `Shape` can only be built through [`Shape::new`], so every generator
/// may rely on `w >= 1` and `n > w + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    n: u64,
    w: u64,
}

impl Shape {
    pub fn new(n: u64, w: u64) -> Result<Self> {
        // Ids are stored as signed 64-bit integers on disk.
        if w >= 1 && n > 1 && n - 1 > w && n <= i64::MAX as u64 {
            Ok(Self { n, w })
        } else {
            Err(Error::InvalidShape { n, w })
        }
    }

    /// Total number of nodes; every generated id is below it.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Width or branching factor.
    pub fn w(&self) -> u64 {
        self.w
    }
}

pub(crate) fn parse_number(s: &str) -> Result<u64> {
    s.trim()
        .parse()
        .map_err(|_| Error::InvalidNumber(s.to_owned()))
}
