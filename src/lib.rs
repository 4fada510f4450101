//! Synthetic graph datasets for EMOGI.

pub use error::{Error, Result};
pub use task::{ExportMode, Task};

pub mod dataset;
pub mod error;
pub mod memory_manager;
pub mod pattern;
pub mod task;
pub mod types;

pub(crate) mod tools;
