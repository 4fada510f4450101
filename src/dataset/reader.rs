use super::{DatasetPaths, Header, HEADER_SIZE};
use crate::{
    error::{Error, Result},
    memory_manager::MemoryManager,
    types::{Edge, NodeId},
};
use itertools::Itertools;
use std::{convert::TryInto, fmt, mem::size_of, path::Path};

/// Largest node count [`Dataset::dense_adjacency`] will build a matrix for.
pub const MAX_DENSE_NODES: u64 = 1024;

/// A dataset loaded back from disk.
pub struct Dataset {
    header: Header,
    dst: MemoryManager,
    col: MemoryManager,
}

impl Dataset {
    /// Opens the dataset at `base`, either reading the files into memory or
    /// mapping them.
    ///
    /// All three headers must agree, the `.dst` and `.col` bodies must hold
    /// exactly `edge_count` non-negative ids and the `.val` body must be
    /// empty.
    pub fn open<P: AsRef<Path>>(base: P, in_memory: bool) -> Result<Self> {
        let paths = DatasetPaths::new(base);
        let dst = MemoryManager::open(&paths.dst, in_memory)?;
        let col = MemoryManager::open(&paths.col, in_memory)?;
        let val = MemoryManager::open(&paths.val, in_memory)?;
        let header = read_header(&paths.dst, &dst)?;
        for (path, mm) in &[(&paths.col, &col), (&paths.val, &val)] {
            let other = read_header(path, mm)?;
            if other != header {
                return Err(Error::malformed(
                    *path,
                    format!("header {} does not match {}", other, header),
                ));
            }
        }
        check_body(&paths.dst, &dst, header.num_edges)?;
        check_body(&paths.col, &col, header.num_edges)?;
        check_body(&paths.val, &val, 0)?;
        Ok(Self {
            header,
            dst,
            col,
        })
    }

    pub fn header(&self) -> Header {
        self.header
    }

    pub fn num_edges(&self) -> usize {
        self.header.num_edges as usize
    }

    pub fn sources(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.dst.i64s(HEADER_SIZE).map(|id| id as NodeId)
    }

    pub fn destinations(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.col.i64s(HEADER_SIZE).map(|id| id as NodeId)
    }

    /// Edges in the order they were written.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.sources().zip_eq(self.destinations())
    }

    /// One more than the largest id, or 0 without edges.
    pub fn num_nodes(&self) -> u64 {
        self.sources()
            .chain(self.destinations())
            .max()
            .map_or(0, |id| id + 1)
    }

    /// `matrix[src][dst]` counts the edges from `src` to `dst`.
    ///
    /// Fails for graphs of more than [`MAX_DENSE_NODES`] nodes.
    pub fn dense_adjacency(&self) -> Result<Vec<Vec<u64>>> {
        let num_nodes = self.num_nodes();
        if num_nodes > MAX_DENSE_NODES {
            return Err(Error::DenseTooLarge {
                num_nodes,
                limit: MAX_DENSE_NODES,
            });
        }
        let num_nodes = num_nodes as usize;
        let mut matrix = vec![vec![0; num_nodes]; num_nodes];
        for (src, dst) in self.edges() {
            matrix[src as usize][dst as usize] += 1;
        }
        Ok(matrix)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "header: {}", self.header)?;
        writeln!(f, "dst: [{}]", self.sources().join(", "))?;
        write!(f, "col: [{}]", self.destinations().join(", "))
    }
}

fn read_header(path: &Path, mm: &MemoryManager) -> Result<Header> {
    let bytes: &[u8; HEADER_SIZE] = mm
        .as_bytes()
        .get(..HEADER_SIZE)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            Error::malformed(
                path,
                format!("{} bytes is shorter than the header", mm.len()),
            )
        })?;
    Header::from_bytes(bytes).ok_or_else(|| Error::malformed(path, "negative header field"))
}

fn check_body(path: &Path, mm: &MemoryManager, num_edges: u64) -> Result<()> {
    let body_len = mm.len() - HEADER_SIZE;
    if body_len % size_of::<i64>() != 0 || (body_len / size_of::<i64>()) as u64 != num_edges {
        return Err(Error::malformed(
            path,
            format!("body of {} bytes does not hold {} ids", body_len, num_edges),
        ));
    }
    match mm.i64s(HEADER_SIZE).position(|id| id < 0) {
        Some(i) => {
            let reason = format!("negative id at index {}", i);
            Err(Error::malformed(path, reason))
        }
        None => Ok(()),
    }
}
