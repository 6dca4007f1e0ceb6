//! A* shortest-path search over a waypoint graph.
//!
//! All per-search bookkeeping (`g`, `f`, parent back-references, open and
//! closed membership) lives in arrays owned by the call and indexed by
//! [`VertexId`], so any number of searches may run over the same `&Graph`
//! back-to-back or concurrently. Heuristics are read as-is from the graph
//! and never modified here.

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};

/// Compute the minimum-cost route from `start` to `goal`, both named by key.
///
/// Call [`Graph::compute_heuristics`] first when the heuristics should
/// reflect the current goal; stale or zero heuristics degrade the search
/// toward uniform-cost ordering but are not an error.
///
/// # Errors
///
/// [`Error::EmptyGraph`], [`Error::StartVertexNotInGraph`], and
/// [`Error::GoalVertexNotInGraph`] report precondition violations, checked
/// in that order. An unreachable goal is NOT an error: the result is `Ok`
/// with an empty path.
pub fn find_route(graph: &Graph, start: &str, goal: &str) -> Result<Vec<VertexId>> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    let start_id = graph
        .vertex_id_by_key(start)
        .ok_or_else(|| Error::StartVertexNotInGraph {
            key: start.to_string(),
        })?;
    let goal_id = graph
        .vertex_id_by_key(goal)
        .ok_or_else(|| Error::GoalVertexNotInGraph {
            key: goal.to_string(),
        })?;

    Ok(astar(graph, start_id, goal_id))
}

/// A* over already-validated vertex identifiers.
///
/// Returns the vertices from `start` to `goal` inclusive, or an empty
/// vector when the goal cannot be reached. When `start == goal` the result
/// is the single-element path `[start]`.
///
/// Ties on `f` resolve to the earliest-discovered vertex, and an open entry
/// is only relaxed on a strictly smaller `g`, so identical graphs produce
/// identical routes on every run.
pub fn astar(graph: &Graph, start: VertexId, goal: VertexId) -> Vec<VertexId> {
    let n = graph.len();
    let mut g = vec![0u64; n];
    let mut f = vec![0u64; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut in_open = vec![false; n];
    let mut in_closed = vec![false; n];

    // Open list in discovery order.
    let mut open: Vec<VertexId> = Vec::new();

    f[start] = graph.vertex(start).heuristic;
    open.push(start);
    in_open[start] = true;

    while !open.is_empty() {
        // Strict less-than keeps the earliest-inserted vertex on ties.
        let mut best_slot = 0;
        for (slot, &candidate) in open.iter().enumerate().skip(1) {
            if f[candidate] < f[open[best_slot]] {
                best_slot = slot;
            }
        }
        let current = open.remove(best_slot);
        in_open[current] = false;
        in_closed[current] = true;

        if current == goal {
            return reconstruct(&parent, current);
        }

        for edge in &graph.vertex(current).edges {
            let neighbor = edge.target;
            if in_closed[neighbor] {
                continue;
            }

            let tentative = g[current] + edge.length;
            if in_open[neighbor] {
                // Relax only on a strictly better cost; the entry keeps its
                // position in the open list.
                if tentative < g[neighbor] {
                    g[neighbor] = tentative;
                    f[neighbor] = tentative + graph.vertex(neighbor).heuristic;
                    parent[neighbor] = Some(current);
                }
            } else {
                g[neighbor] = tentative;
                f[neighbor] = tentative + graph.vertex(neighbor).heuristic;
                parent[neighbor] = Some(current);
                open.push(neighbor);
                in_open[neighbor] = true;
            }
        }
    }

    tracing::debug!(start, goal, "goal not reachable, returning empty route");
    Vec::new()
}

/// Walk the parent back-references from the goal to the start, then flip
/// the result into traversal order.
fn reconstruct(parent: &[Option<VertexId>], goal: VertexId) -> Vec<VertexId> {
    let mut route = vec![goal];
    let mut cursor = goal;
    while let Some(previous) = parent[cursor] {
        route.push(previous);
        cursor = previous;
    }
    route.reverse();
    route
}
