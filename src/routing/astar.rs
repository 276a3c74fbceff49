//! Visibility-graph A* search.
//!
//! Fallback for legs no local strategy can resolve. The graph's nodes are
//! the shared candidate grid plus the two query points; an edge exists
//! wherever the direct elbow between two nodes is clear, weighted by
//! Manhattan distance. Edges are evaluated lazily during expansion.
//!
//! The search tree is an index arena: nodes are addressed by position in
//! a flat `Vec`, with parallel `g`-score and parent-index arrays. A node
//! reopens whenever a strictly lower `g` is recorded; superseded heap
//! entries are skipped on pop.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use log::{debug, trace};

use crate::core::Point2D;

use super::clearance::Clearance;
use super::local::{direct_elbow, rectify};

/// Heap entry ordered by lowest estimated total cost.
#[derive(Clone, Debug)]
struct SearchNode {
    index: usize,
    g: f32,
    f: f32,
}

impl Eq for SearchNode {}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other.f.partial_cmp(&self.f).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a Manhattan route from origin to goal over the candidate grid.
///
/// Returns `None` when the open set exhausts or the iteration budget runs
/// out; the caller decides what a missing route degrades to.
pub fn search(
    grid: &[Point2D],
    origin: Point2D,
    goal: Point2D,
    clearance: &Clearance,
    max_iterations: usize,
) -> Option<Vec<Point2D>> {
    // Node arena: origin and goal first, then the deduplicated grid
    let mut nodes: Vec<Point2D> = Vec::with_capacity(grid.len() + 2);
    let mut seen = HashSet::new();
    for p in [origin, goal].into_iter().chain(grid.iter().copied()) {
        if seen.insert((p.x.to_bits(), p.y.to_bits())) {
            nodes.push(p);
        }
    }
    let start = 0;
    let goal_index = nodes.iter().position(|&p| p == goal).unwrap_or(start);

    trace!(
        "[AStar] search over {} nodes: ({:.1},{:.1}) -> ({:.1},{:.1})",
        nodes.len(),
        origin.x,
        origin.y,
        goal.x,
        goal.y
    );

    let n = nodes.len();
    let mut g_scores = vec![f32::INFINITY; n];
    let mut parents = vec![usize::MAX; n];
    let mut open = BinaryHeap::new();

    g_scores[start] = 0.0;
    open.push(SearchNode {
        index: start,
        g: 0.0,
        f: origin.manhattan_distance(&goal),
    });

    let mut expanded = 0;
    while let Some(node) = open.pop() {
        if node.g > g_scores[node.index] {
            continue; // superseded by a reopened entry
        }
        if node.index == goal_index {
            trace!("[AStar] SUCCESS after {} expansions", expanded);
            return Some(finish(&nodes, &parents, goal_index, clearance));
        }

        expanded += 1;
        if expanded > max_iterations {
            debug!("[AStar] FAILED: max iterations ({}) exceeded", max_iterations);
            return None;
        }

        let current = nodes[node.index];
        for next in 0..n {
            if next == node.index {
                continue;
            }
            let elbow = direct_elbow(current, nodes[next]);
            if !clearance.is_path_clear(&elbow) {
                continue;
            }
            let tentative = node.g + current.manhattan_distance(&nodes[next]);
            if tentative < g_scores[next] {
                g_scores[next] = tentative;
                parents[next] = node.index;
                open.push(SearchNode {
                    index: next,
                    g: tentative,
                    f: tentative + nodes[next].manhattan_distance(&goal),
                });
            }
        }
    }

    debug!("[AStar] FAILED: open set exhausted after {} expansions", expanded);
    None
}

/// Reconstruct by parent indices, shortcut greedily, repair to Manhattan.
fn finish(
    nodes: &[Point2D],
    parents: &[usize],
    goal_index: usize,
    clearance: &Clearance,
) -> Vec<Point2D> {
    let mut chain = vec![goal_index];
    let mut current = goal_index;
    while parents[current] != usize::MAX {
        current = parents[current];
        chain.push(current);
    }
    chain.reverse();

    let points: Vec<Point2D> = chain.iter().map(|&i| nodes[i]).collect();
    rectify(&shortcut(&points, clearance))
}

/// Skip intermediate nodes whose direct elbow connection is clear,
/// keeping the furthest reachable node at each step.
fn shortcut(path: &[Point2D], clearance: &Clearance) -> Vec<Point2D> {
    if path.len() <= 2 {
        return path.to_vec();
    }
    let mut out = vec![path[0]];
    let mut i = 0;
    while i < path.len() - 1 {
        let mut furthest = i + 1;
        for j in (i + 2)..path.len() {
            let elbow = direct_elbow(path[i], path[j]);
            if clearance.is_path_clear(&elbow) {
                furthest = j;
            }
        }
        out.push(path[furthest]);
        i = furthest;
    }
    out
}
