//! Canonical graph topologies.
//!
//! Every topology is a pure function of its [`Shape`]: the same `(n, w)`
//! always yields the same edges in the same order. Edges are produced lazily
//! so a streaming exporter never holds more than one of them.

pub mod branch;
pub mod fork_join;
pub mod linked_list;
pub mod self_loop;

use crate::{
    error::Error,
    tools::ExactSizeIter,
    types::{Edge, Shape},
};
use derive_more::Display;
use std::{convert::TryFrom, str::FromStr};

/// The edges of a generated graph, in emission order.
pub type Edges = ExactSizeIter<Box<dyn Iterator<Item = Edge>>>;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    #[display(fmt = "linked-list")]
    LinkedList,
    #[display(fmt = "branch")]
    Branch,
    #[display(fmt = "fork-join")]
    ForkJoin,
    #[display(fmt = "self-loop")]
    SelfLoop,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::LinkedList,
        Pattern::Branch,
        Pattern::ForkJoin,
        Pattern::SelfLoop,
    ];

    /// Names accepted by [`Pattern::from_str`].
    pub const NAMES: [&'static str; 4] = ["linked-list", "branch", "fork-join", "self-loop"];

    pub fn edges(self, shape: Shape) -> Edges {
        let iter: Box<dyn Iterator<Item = Edge>> = match self {
            Pattern::LinkedList => Box::new(linked_list::edges(shape)),
            Pattern::Branch => Box::new(branch::edges(shape)),
            Pattern::ForkJoin => Box::new(fork_join::edges(shape)),
            Pattern::SelfLoop => Box::new(self_loop::edges(shape)),
        };
        let len = usize::try_from(self.num_edges(shape)).unwrap_or(usize::MAX);
        ExactSizeIter::new(iter, len)
    }

    /// Exact number of edges [`Pattern::edges`] yields for `shape`.
    pub fn num_edges(self, shape: Shape) -> u64 {
        match self {
            Pattern::LinkedList => linked_list::num_edges(shape),
            Pattern::Branch => branch::num_edges(shape),
            Pattern::ForkJoin => fork_join::num_edges(shape),
            Pattern::SelfLoop => self_loop::num_edges(shape),
        }
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .iter()
            .copied()
            .find(|pattern| pattern.to_string() == s)
            .ok_or_else(|| Error::UnknownPattern(s.to_owned()))
    }
}
