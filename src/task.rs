use crate::{
    dataset::{write_batch, Header, StreamExporter},
    error::{Error, Result},
    pattern::Pattern,
    types::{parse_number, Edge, Shape},
};
use derive_more::Display;
use log::info;
use std::{path::PathBuf, str::FromStr};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// Collects every edge in memory, then writes the files in one pass.
    #[display(fmt = "batch")]
    Batch,
    /// Writes edges as they are generated and commits on completion.
    #[display(fmt = "stream")]
    Stream,
}

impl ExportMode {
    pub const NAMES: [&'static str; 2] = ["batch", "stream"];
}

impl FromStr for ExportMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "batch" => Ok(ExportMode::Batch),
            "stream" => Ok(ExportMode::Stream),
            _ => Err(Error::UnknownMode(s.to_owned())),
        }
    }
}

/// Generates one dataset.
#[derive(Debug, Clone)]
pub struct Task {
    pattern: Pattern,
    shape: Shape,
    output: PathBuf,
    mode: ExportMode,
}

impl Task {
    pub fn new<P: Into<PathBuf>>(pattern: Pattern, shape: Shape, output: P) -> Self {
        Self {
            pattern,
            shape,
            output: output.into(),
            mode: ExportMode::Stream,
        }
    }

    /// Builds a task from textual options, validating all of them before any
    /// file is touched.
    pub fn parse<P: Into<PathBuf>>(
        output: P,
        pattern: &str,
        n: &str,
        w: &str,
        mode: &str,
    ) -> Result<Self> {
        let pattern = pattern.parse()?;
        let shape = Shape::new(parse_number(n)?, parse_number(w)?)?;
        Ok(Self::new(pattern, shape, output).mode(mode.parse()?))
    }

    pub fn mode(mut self, mode: ExportMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn output(&self) -> &PathBuf {
        &self.output
    }

    pub fn num_edges(&self) -> u64 {
        self.pattern.num_edges(self.shape)
    }

    pub fn run(&self) -> Result<Header> {
        info!(
            "generating {} graph with n={} w={} ({} edges, {} export)",
            self.pattern,
            self.shape.n(),
            self.shape.w(),
            self.num_edges(),
            self.mode
        );
        let edges = self.pattern.edges(self.shape);
        match self.mode {
            ExportMode::Batch => {
                let edges: Vec<Edge> = edges.collect();
                write_batch(&self.output, &edges, Some(self.shape.n()))
            }
            ExportMode::Stream => {
                let mut exporter = StreamExporter::new(&self.output, edges.len() as u64)?
                    .with_num_nodes(self.shape.n());
                for edge in edges {
                    exporter.export_edge(edge)?;
                }
                exporter.finish()
            }
        }
    }
}
