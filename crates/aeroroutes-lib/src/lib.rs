//! Aeroroutes library entry points.
//!
//! This crate models weighted graphs of named, optionally geo-positioned
//! vertices and computes shortest routes between them with A* search, using
//! straight-line geographic distance as the heuristic. Higher-level
//! consumers (CLI, map frontends) should only depend on the items exported
//! here instead of reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod path;
pub mod routing;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use geo::GeoPoint;
pub use graph::{Edge, Graph, Vertex, VertexId};
pub use path::find_route;
pub use routing::{plan_route, RoutePlan, RouteRequest};
