use super::{check_edge, DatasetPaths, Header, HEADER_SIZE};
use crate::{
    error::{Error, Result},
    types::Edge,
};
use log::{debug, info, warn};
use std::{
    fs,
    io::{self, BufWriter, Seek, SeekFrom, Write},
    path::Path,
};
use tempfile::NamedTempFile;

/// Writes a dataset one edge at a time.
///
/// Bodies go to temporary files next to the final ones, each behind a
/// placeholder header. [`StreamExporter::finish`] writes the real header once
/// the edge count is known and only then renames the files into place.
/// Dropping an unfinished exporter deletes the temporary files, so a failed
/// export never leaves a dataset under the final names. Once a write has
/// failed, [`StreamExporter::finish`] refuses to commit.
pub struct StreamExporter {
    paths: DatasetPaths,
    dst: BufWriter<NamedTempFile>,
    col: BufWriter<NamedTempFile>,
    num_edges: u64,
    expected_edges: u64,
    report_every: u64,
    num_nodes: Option<u64>,
    failed: bool,
}

impl StreamExporter {
    /// `expected_edges` is only used to report progress.
    pub fn new<P: AsRef<Path>>(base: P, expected_edges: u64) -> Result<Self> {
        let paths = DatasetPaths::new(base);
        let dst = BufWriter::new(new_temp_file(paths.dir())?);
        let col = BufWriter::new(new_temp_file(paths.dir())?);
        debug!(
            "staging {} and {} in {}",
            paths.dst.display(),
            paths.col.display(),
            paths.dir().display()
        );
        Ok(Self {
            paths,
            dst,
            col,
            num_edges: 0,
            expected_edges,
            report_every: std::cmp::max(expected_edges / 10, 1),
            num_nodes: None,
            failed: false,
        })
    }

    /// Rejects edges with ids not below `num_nodes`.
    pub fn with_num_nodes(mut self, num_nodes: u64) -> Self {
        self.num_nodes = Some(num_nodes);
        self
    }

    /// Appends one edge.
    ///
    /// # Panics
    ///
    /// Panics if an id is out of range, see [`StreamExporter::with_num_nodes`].
    pub fn export_edge(&mut self, edge: Edge) -> Result<()> {
        check_edge(edge, self.num_nodes);
        if let Err(e) = self.write_edge(edge) {
            // `.dst` may already hold the source id.
            self.failed = true;
            return Err(e.into());
        }
        self.num_edges += 1;
        if self.num_edges % self.report_every == 0 {
            info!("exported {}/{} edges", self.num_edges, self.expected_edges);
        }
        Ok(())
    }

    fn write_edge(&mut self, (src, dst): Edge) -> io::Result<()> {
        self.dst.write_all(&(src as i64).to_le_bytes())?;
        self.col.write_all(&(dst as i64).to_le_bytes())
    }

    pub fn num_edges(&self) -> u64 {
        self.num_edges
    }

    pub fn paths(&self) -> &DatasetPaths {
        &self.paths
    }

    /// Commits the dataset and returns its header.
    pub fn finish(self) -> Result<Header> {
        let StreamExporter {
            paths,
            dst,
            col,
            num_edges,
            expected_edges,
            failed,
            ..
        } = self;
        if failed {
            return Err(Error::ExportAborted { path: paths.dst });
        }
        if num_edges != expected_edges {
            warn!("expected {} edges, exported {}", expected_edges, num_edges);
        }
        let header = Header::new(num_edges);
        // Every file is complete before any of them gets its final name.
        let dst = seal(dst.into_inner().map_err(|e| e.into_error())?, header)?;
        let col = seal(col.into_inner().map_err(|e| e.into_error())?, header)?;
        let val = seal(new_temp_file(paths.dir())?, header)?;
        let mut persisted = Vec::with_capacity(3);
        for (file, path) in vec![(dst, &paths.dst), (col, &paths.col), (val, &paths.val)] {
            if let Err(e) = file.persist(path) {
                for path in persisted {
                    let _ = fs::remove_file(path);
                }
                return Err(e.error.into());
            }
            debug!("committed {}", path.display());
            persisted.push(path);
        }
        info!(
            "wrote {} edges to {}",
            num_edges,
            paths.dst.with_extension("*").display()
        );
        Ok(header)
    }
}

fn new_temp_file(dir: &Path) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(".bel-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    file.write_all(&[0; HEADER_SIZE])?;
    Ok(file)
}

fn seal(mut file: NamedTempFile, header: Header) -> Result<NamedTempFile> {
    file.seek(SeekFrom::Start(0))?;
    file.write_all(&header.to_bytes())?;
    file.as_file().sync_all()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged_files(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter(|entry| {
                entry
                    .as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .starts_with(".bel-")
            })
            .count()
    }

    #[test]
    fn test_stream() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("graph");
        let mut exporter = StreamExporter::new(&base, 3).unwrap().with_num_nodes(3);
        for v in 0..3 {
            exporter.export_edge((v, v)).unwrap();
        }
        assert_eq!(exporter.num_edges(), 3);
        assert!(!exporter.paths().dst.exists());
        assert_eq!(staged_files(dir.path()), 2);
        assert_eq!(exporter.finish().unwrap(), Header::new(3));

        let paths = DatasetPaths::new(&base);
        let mut expected = Header::new(3).to_bytes().to_vec();
        for v in 0..3i64 {
            expected.extend_from_slice(&v.to_le_bytes());
        }
        assert_eq!(fs::read(&paths.dst).unwrap(), expected);
        assert_eq!(fs::read(&paths.col).unwrap(), expected);
        assert_eq!(fs::read(&paths.val).unwrap(), Header::new(3).to_bytes());
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[test]
    fn test_count_differs_from_expected() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("graph");
        let mut exporter = StreamExporter::new(&base, 10).unwrap();
        exporter.export_edge((4, 2)).unwrap();
        assert_eq!(exporter.finish().unwrap(), Header::new(1));
        let dst = fs::read(DatasetPaths::new(&base).dst).unwrap();
        assert_eq!(dst.len(), HEADER_SIZE + 8);
        assert_eq!(dst[0], 1);
    }

    #[test]
    fn test_drop_discards() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("graph");
        {
            let mut exporter = StreamExporter::new(&base, 2).unwrap();
            exporter.export_edge((0, 1)).unwrap();
            assert_eq!(staged_files(dir.path()), 2);
        }
        assert_eq!(staged_files(dir.path()), 0);
        assert!(DatasetPaths::new(&base).iter().all(|path| !path.exists()));
    }

    #[test]
    fn test_panic_discards() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("graph");
        let result = std::panic::catch_unwind(|| {
            let mut exporter = StreamExporter::new(&base, 2).unwrap().with_num_nodes(2);
            exporter.export_edge((0, 1)).unwrap();
            exporter.export_edge((1, 2)).unwrap();
        });
        assert!(result.is_err());
        assert_eq!(staged_files(dir.path()), 0);
        assert!(DatasetPaths::new(&base).iter().all(|path| !path.exists()));
    }

    #[test]
    fn test_failed_write_blocks_commit() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("graph");
        let mut exporter = StreamExporter::new(&base, 2).unwrap();
        exporter.export_edge((0, 1)).unwrap();
        // Stands in for a `.col` write error after `.dst` took the source id.
        exporter.dst.write_all(&1i64.to_le_bytes()).unwrap();
        exporter.failed = true;
        let result = exporter.finish();
        assert!(matches!(result, Err(Error::ExportAborted { .. })));
        assert_eq!(staged_files(dir.path()), 0);
        assert!(DatasetPaths::new(&base).iter().all(|path| !path.exists()));
    }

    #[test]
    fn test_rename_rollback() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("graph");
        let paths = DatasetPaths::new(&base);
        let mut exporter = StreamExporter::new(&base, 1).unwrap();
        exporter.export_edge((0, 1)).unwrap();
        fs::create_dir(&paths.col).unwrap();
        assert!(matches!(exporter.finish(), Err(Error::Io(_))));
        assert!(!paths.dst.exists());
        assert!(paths.col.is_dir());
        assert!(!paths.val.exists());
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("missing").join("graph");
        assert!(StreamExporter::new(&base, 1).is_err());
    }
}
