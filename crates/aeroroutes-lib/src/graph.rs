use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Index of a vertex within its graph's arena.
///
/// Identifiers are issued by [`Graph::add_vertex`] and stay valid for the
/// lifetime of the graph; vertices are never removed. Because keys are
/// unique, identifier equality coincides with key equality.
pub type VertexId = usize;

/// Directed arc to a destination vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Destination endpoint.
    pub target: VertexId,
    /// Non-negative weight; metres for geographic graphs.
    pub length: u64,
}

/// Named vertex with an optional geographic position.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub key: String,
    pub position: Option<GeoPoint>,
    /// Cached straight-line distance in metres to the goal of the most
    /// recent [`Graph::compute_heuristics`] pass. Stale until that pass
    /// runs for the current goal.
    pub heuristic: u64,
    /// Outgoing arcs in insertion order.
    pub edges: Vec<Edge>,
}

/// Vertices compare by key alone; position, heuristic cache, and edges do
/// not participate in identity.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Vertex {}

/// Weighted graph owning its vertices, addressed by key or by [`VertexId`].
///
/// Searches only borrow the graph immutably; the per-search bookkeeping
/// lives inside [`crate::path`], so repeated or concurrent searches over the
/// same graph cannot interfere. The heuristic cache is the one piece of
/// state mutated between searches.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    directed: bool,
}

impl Graph {
    /// Create an empty undirected graph; [`Graph::add_edge`] records both
    /// directions.
    pub fn undirected() -> Self {
        Self::default()
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices in the graph.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Insert a vertex with the given key and return its identifier.
    ///
    /// Keys are vertex identity; inserting an existing key is rejected with
    /// [`Error::DuplicateVertexKey`].
    pub fn add_vertex(&mut self, key: impl Into<String>) -> Result<VertexId> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(Error::DuplicateVertexKey { key });
        }

        let id = self.vertices.len();
        self.index.insert(key.clone(), id);
        self.vertices.push(Vertex {
            key,
            position: None,
            heuristic: 0,
            edges: Vec::new(),
        });
        Ok(id)
    }

    /// Insert a vertex at a geographic position.
    pub fn add_vertex_at(
        &mut self,
        key: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<VertexId> {
        let id = self.add_vertex(key)?;
        self.vertices[id].position = Some(GeoPoint::new(latitude, longitude));
        Ok(id)
    }

    /// Record an edge `from -> to` with the given length.
    ///
    /// Undirected graphs also record the reciprocal edge. Re-inserting an
    /// edge with an identical `(target, length)` pair is a no-op.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, length: u64) {
        self.push_edge(from, to, length);
        if !self.directed {
            self.push_edge(to, from, length);
        }
    }

    fn push_edge(&mut self, from: VertexId, to: VertexId, length: u64) {
        let edge = Edge { target: to, length };
        let edges = &mut self.vertices[from].edges;
        if !edges.contains(&edge) {
            edges.push(edge);
        }
    }

    /// Clear every vertex's edge list, keeping the vertices.
    ///
    /// Used when the caller swaps in a new dataset over the same canvas.
    pub fn remove_all_edges(&mut self) {
        for vertex in &mut self.vertices {
            vertex.edges.clear();
        }
    }

    /// Set every vertex's heuristic to its straight-line distance in metres
    /// to `goal`.
    ///
    /// Vertices without a position (or all vertices, when the goal has no
    /// position) get zero, which orders them by path cost alone. The values
    /// persist until the next call, so a search for a different goal must be
    /// preceded by another pass.
    pub fn compute_heuristics(&mut self, goal: VertexId) {
        let goal_position = self.vertices[goal].position;
        for vertex in &mut self.vertices {
            vertex.heuristic = match (vertex.position, goal_position) {
                (Some(from), Some(to)) => from.distance_meters(&to).round() as u64,
                _ => 0,
            };
        }
    }

    /// Assign a heuristic directly; synthetic graphs without positions use
    /// this.
    pub fn set_heuristic(&mut self, id: VertexId, heuristic: u64) {
        self.vertices[id].heuristic = heuristic;
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }

    /// All vertices in insertion order, for overlay rendering and other
    /// read-only walks.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Lookup a vertex identifier by its case-sensitive key.
    pub fn vertex_id_by_key(&self, key: &str) -> Option<VertexId> {
        self.index.get(key).copied()
    }

    pub fn vertex_key(&self, id: VertexId) -> &str {
        &self.vertices[id].key
    }

    /// Length of the shortest recorded edge `from -> to`, if any.
    pub fn edge_length(&self, from: VertexId, to: VertexId) -> Option<u64> {
        self.vertices[from]
            .edges
            .iter()
            .filter(|edge| edge.target == to)
            .map(|edge| edge.length)
            .min()
    }
}
