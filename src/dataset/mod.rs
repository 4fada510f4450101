//! The binary edge-list dataset read by EMOGI.
//!
//! A dataset is three sibling files sharing a base path:
//!
//! ```text
//! <base>.bel.dst : [edge_count][0][source id x edge_count]
//! <base>.bel.col : [edge_count][0][destination id x edge_count]
//! <base>.bel.val : [edge_count][0]
//! ```
//!
//! Every value is a little-endian `i64`. The value file carries no body since
//! the graphs are unweighted.

pub use batch::write_batch;
pub use reader::{Dataset, MAX_DENSE_NODES};
pub use stream::StreamExporter;
pub use types::{Header, HEADER_SIZE};

use crate::types::{Edge, NodeId};
use std::path::{Path, PathBuf};

mod batch;
mod reader;
mod stream;
mod types;

/// Paths of the three files of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub dst: PathBuf,
    pub col: PathBuf,
    pub val: PathBuf,
}

impl DatasetPaths {
    /// The extension of `base`, if any, is replaced, so `graph` and
    /// `graph.bel` both name `graph.bel.dst` and its siblings.
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        Self {
            dst: base.with_extension("bel.dst"),
            col: base.with_extension("bel.col"),
            val: base.with_extension("bel.val"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        vec![self.dst.as_path(), self.col.as_path(), self.val.as_path()].into_iter()
    }

    /// Directory holding the files.
    pub fn dir(&self) -> &Path {
        match self.dst.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

/// Largest id that fits the on-disk `i64`.
const MAX_NODE_ID: NodeId = i64::MAX as NodeId;

/// Panics unless both endpoints are below `num_nodes` and representable on
/// disk. Generators never emit such ids; hitting this is a bug.
pub(crate) fn check_edge((src, dst): Edge, num_nodes: Option<u64>) {
    let in_range = |id: NodeId| id <= MAX_NODE_ID && num_nodes.map_or(true, |n| id < n);
    assert!(
        in_range(src) && in_range(dst),
        "edge ({}, {}) is out of range for {:?} nodes",
        src,
        dst,
        num_nodes
    );
}
