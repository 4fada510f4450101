use derive_more::Display;
use std::{convert::TryInto, mem::size_of};

/// Size in bytes of the header that starts every dataset file.
pub const HEADER_SIZE: usize = 2 * size_of::<i64>();

/// `(edge_count, reserved)`, stored as two little-endian `i64`s.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "({}, {})", num_edges, reserved)]
pub struct Header {
    pub num_edges: u64,
    pub reserved: u64,
}

impl Header {
    pub fn new(num_edges: u64) -> Self {
        Self {
            num_edges,
            reserved: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0; HEADER_SIZE];
        bytes[..8].copy_from_slice(&(self.num_edges as i64).to_le_bytes());
        bytes[8..].copy_from_slice(&(self.reserved as i64).to_le_bytes());
        bytes
    }

    /// Returns `None` if either field is negative.
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Option<Self> {
        let num_edges = i64::from_le_bytes(bytes[..8].try_into().ok()?);
        let reserved = i64::from_le_bytes(bytes[8..].try_into().ok()?);
        if num_edges < 0 || reserved < 0 {
            None
        } else {
            Some(Self {
                num_edges: num_edges as u64,
                reserved: reserved as u64,
            })
        }
    }
}
