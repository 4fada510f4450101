//! Error management.

use derive_more::Display;
use std::path::PathBuf;

#[derive(Debug, Display)]
pub enum Error {
    #[display(
        fmt = "graphs must have width >= 1 and number of nodes > 1 + width (got n={}, w={})",
        n,
        w
    )]
    InvalidShape { n: u64, w: u64 },
    #[display(fmt = "unknown pattern {:?}", _0)]
    UnknownPattern(String),
    #[display(fmt = "unknown export mode {:?}", _0)]
    UnknownMode(String),
    #[display(fmt = "not a non-negative integer: {:?}", _0)]
    InvalidNumber(String),
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "malformed dataset file {}: {}", "path.display()", reason)]
    Malformed { path: PathBuf, reason: String },
    #[display(fmt = "export of {} aborted by an earlier write error", "path.display()")]
    ExportAborted { path: PathBuf },
    #[display(
        fmt = "dense adjacency of {} nodes exceeds the limit of {} nodes",
        num_nodes,
        limit
    )]
    DenseTooLarge { num_nodes: u64, limit: u64 },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl Error {
    pub(crate) fn malformed<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        Error::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
