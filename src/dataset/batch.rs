use super::{check_edge, DatasetPaths, Header};
use crate::{
    error::Result,
    types::{Edge, NodeId},
};
use log::{debug, info};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    iter,
    path::Path,
};

/// Writes `edges` as a complete dataset at `base`.
///
/// The edge count is known upfront, so each file is written header first,
/// straight to its final name. If writing fails, the files this call created
/// are removed before the error is returned; files it never reached are left
/// alone.
///
/// # Panics
///
/// Panics if an edge has an id not below `num_nodes`.
pub fn write_batch<P: AsRef<Path>>(
    base: P,
    edges: &[Edge],
    num_nodes: Option<u64>,
) -> Result<Header> {
    for &edge in edges {
        check_edge(edge, num_nodes);
    }
    let paths = DatasetPaths::new(base);
    let header = Header::new(edges.len() as u64);
    let mut created = Vec::with_capacity(3);
    if let Err(e) = write_files(&paths, header, edges, &mut created) {
        for path in created {
            if fs::remove_file(path).is_ok() {
                debug!("removed {}", path.display());
            }
        }
        return Err(e);
    }
    info!(
        "wrote {} edges to {}",
        header.num_edges,
        paths.dst.with_extension("*").display()
    );
    Ok(header)
}

fn write_files<'a>(
    paths: &'a DatasetPaths,
    header: Header,
    edges: &[Edge],
    created: &mut Vec<&'a Path>,
) -> Result<()> {
    let sources = edges.iter().map(|&(src, _)| src);
    write_file(&paths.dst, header, sources, created)?;
    let destinations = edges.iter().map(|&(_, dst)| dst);
    write_file(&paths.col, header, destinations, created)?;
    write_file(&paths.val, header, iter::empty(), created)
}

/// Pushes `path` to `created` as soon as the file exists.
fn write_file<'a, I>(
    path: &'a Path,
    header: Header,
    body: I,
    created: &mut Vec<&'a Path>,
) -> Result<()>
where
    I: IntoIterator<Item = NodeId>,
{
    let file = File::create(path)?;
    created.push(path);
    let mut writer = BufWriter::new(file);
    writer.write_all(&header.to_bytes())?;
    for id in body {
        writer.write_all(&(id as i64).to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
