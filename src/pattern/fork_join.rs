//! Repeated fan-out / fan-in between sync points.
//!
//! ```text
//! n = 11, w = 2
//!
//!      0          sync
//!    1   2
//!      3          sync
//!    4   5
//!      6          sync
//!    7   8
//!      9          sync
//!     10
//! ```
//!
//! Sync points sit `w + 1` ids apart. The last group keeps only the children
//! below `n`, and a group joins into the next sync point only if that point
//! exists.

use crate::types::{Edge, NodeId, Shape};
use std::iter;

/// Sync point ids, ascending.
pub fn sync_points(shape: Shape) -> impl Iterator<Item = NodeId> {
    let (n, step) = (shape.n(), shape.w() + 1);
    iter::successors(Some(0), move |s: &NodeId| s.checked_add(step))
        .take_while(move |&s| s < n)
}

pub fn edges(shape: Shape) -> impl Iterator<Item = Edge> {
    let (n, w) = (shape.n(), shape.w());
    sync_points(shape).flat_map(move |sync| {
        let last_child = (sync + w).min(n - 1);
        let join = sync + w + 1;
        let last_joined = if join < n { last_child } else { sync };
        (sync + 1..=last_child)
            .map(move |child| (sync, child))
            .chain((sync + 1..=last_joined).map(move |child| (child, join)))
    })
}

pub fn num_edges(shape: Shape) -> u64 {
    let (n, w) = (shape.n(), shape.w());
    // Groups whose join target exists: sync points s with s + w + 1 < n.
    let joined = (n - w - 2) / (w + 1) + 1;
    let tail = joined * (w + 1);
    let tail_edges = if tail < n { n - 1 - tail } else { 0 };
    joined * 2 * w + tail_edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(n: u64, w: u64) -> Vec<Edge> {
        edges(Shape::new(n, w).unwrap()).collect()
    }

    #[test]
    fn test_two_wide() {
        assert_eq!(
            collect(11, 2),
            vec![
                (0, 1),
                (0, 2),
                (1, 3),
                (2, 3),
                (3, 4),
                (3, 5),
                (4, 6),
                (5, 6),
                (6, 7),
                (6, 8),
                (7, 9),
                (8, 9),
                (9, 10)
            ]
        );
    }

    #[test]
    fn test_truncated_group() {
        let edges = collect(12, 6);
        assert_eq!(edges.len(), 6 + 6 + 4);
        assert_eq!(&edges[12..], &[(7, 8), (7, 9), (7, 10), (7, 11)]);
    }

    #[test]
    fn test_ends_on_sync_point() {
        // n - 1 == 8 is the last child, 9 would be the next sync point.
        let edges = collect(9, 2);
        assert_eq!(&edges[8..], &[(6, 7), (6, 8)]);
        assert!(edges.iter().all(|&(_, d)| d < 9));
    }

    #[test]
    fn test_one_past_sync_point() {
        // Sync point 9 is the last node: the group before joins into it and
        // it has no children of its own.
        let edges = collect(10, 2);
        assert_eq!(&edges[8..], &[(6, 7), (6, 8), (7, 9), (8, 9)]);
        assert_eq!(edges.len(), 12);
    }

    #[test]
    fn test_chain() {
        assert_eq!(collect(4, 1), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_minimum_shape() {
        // n = w + 2: one full group joining into the last node.
        assert_eq!(
            collect(5, 3),
            vec![(0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (3, 4)]
        );
    }

    #[test]
    fn test_fan_in_matches_fan_out() {
        for w in 1..=8 {
            for n in w + 2..=90 {
                let shape = Shape::new(n, w).unwrap();
                let edges = collect(n, w);
                let syncs: Vec<_> = sync_points(shape).collect();
                for (i, &sync) in syncs.iter().enumerate() {
                    let fan_out = edges.iter().filter(|&&(s, _)| s == sync).count();
                    match syncs.get(i + 1) {
                        Some(&next) => {
                            let fan_in = edges.iter().filter(|&&(_, d)| d == next).count();
                            assert_eq!(fan_out, fan_in, "n={} w={} sync={}", n, w, sync);
                            assert_eq!(fan_out as u64, w);
                        }
                        None => assert!(fan_out as u64 <= w),
                    }
                }
                assert_eq!(edges.len() as u64, num_edges(shape));
            }
        }
    }
}
