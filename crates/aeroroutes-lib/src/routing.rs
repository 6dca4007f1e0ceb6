//! High-level route planning over a waypoint graph.
//!
//! [`plan_route`] is the entry point map frontends call: it resolves the
//! endpoint keys, refreshes every vertex's heuristic for the requested
//! goal, runs the search, and wraps the result in a [`RoutePlan`].

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::path;

/// Route planning request naming the endpoints by vertex key.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: VertexId,
    pub goal: VertexId,
    /// Vertices from start to goal inclusive; empty when the goal is
    /// unreachable.
    pub steps: Vec<VertexId>,
    /// Sum of the traversed edge lengths in metres.
    pub total_length: u64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Whether the search reached the goal.
    pub fn is_reachable(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Compute a route between two named vertices.
///
/// Recomputes every vertex's heuristic relative to the goal before
/// searching, which is why the graph is borrowed mutably. Synthetic graphs
/// with hand-assigned heuristics should call [`path::find_route`] directly
/// to keep them.
///
/// An unreachable goal yields an empty plan, not an error; the same
/// precondition errors as [`path::find_route`] apply.
pub fn plan_route(graph: &mut Graph, request: &RouteRequest) -> Result<RoutePlan> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    let start = graph
        .vertex_id_by_key(&request.start)
        .ok_or_else(|| Error::StartVertexNotInGraph {
            key: request.start.clone(),
        })?;
    let goal = graph
        .vertex_id_by_key(&request.goal)
        .ok_or_else(|| Error::GoalVertexNotInGraph {
            key: request.goal.clone(),
        })?;

    graph.compute_heuristics(goal);
    let steps = path::astar(graph, start, goal);
    let total_length = route_length(graph, &steps);

    tracing::debug!(
        start = %request.start,
        goal = %request.goal,
        hops = steps.len().saturating_sub(1),
        total_length,
        "planned route"
    );

    Ok(RoutePlan {
        start,
        goal,
        steps,
        total_length,
    })
}

/// Sum of edge lengths along consecutive step pairs.
fn route_length(graph: &Graph, steps: &[VertexId]) -> u64 {
    steps
        .windows(2)
        .filter_map(|pair| graph.edge_length(pair[0], pair[1]))
        .sum()
}
