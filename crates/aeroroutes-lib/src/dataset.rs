//! Built-in sample datasets.
//!
//! These graphs are fixtures: real-world city and campus locations wired up
//! with a fixed adjacency, the same data the demo map frontends load. Edge
//! lengths are straight-line distances in metres between the endpoints, so
//! the geographic heuristic is admissible on every built-in graph.

use std::fmt;
use std::str::FromStr;

use crate::graph::Graph;

/// Built-in sample graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// Intercontinental city network.
    World,
    /// North American city network.
    NorthAmerica,
    /// Campus landmarks; vertices only, no edges.
    Campus,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::World, Dataset::NorthAmerica, Dataset::Campus];

    /// Stable name used by the CLI and [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::World => "world",
            Dataset::NorthAmerica => "north-america",
            Dataset::Campus => "campus",
        }
    }

    /// Build the dataset's graph.
    pub fn build(&self) -> Graph {
        match self {
            Dataset::World => build(WORLD_VERTICES, WORLD_EDGES),
            Dataset::NorthAmerica => build(NORTH_AMERICA_VERTICES, NORTH_AMERICA_EDGES),
            Dataset::Campus => build(CAMPUS_VERTICES, CAMPUS_EDGES),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|dataset| dataset.name() == value)
            .ok_or_else(|| {
                format!("unknown dataset '{value}', expected one of: world, north-america, campus")
            })
    }
}

/// Assemble an undirected graph from static vertex and adjacency tables.
fn build(vertices: &[(&str, f64, f64)], edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::undirected();
    for &(key, latitude, longitude) in vertices {
        graph
            .add_vertex_at(key, latitude, longitude)
            .expect("dataset vertex keys are unique");
    }
    for &(from_key, to_key) in edges {
        let from = graph
            .vertex_id_by_key(from_key)
            .expect("dataset edge endpoints are listed as vertices");
        let to = graph
            .vertex_id_by_key(to_key)
            .expect("dataset edge endpoints are listed as vertices");
        let length = graph
            .vertex(from)
            .position
            .expect("dataset vertices carry positions")
            .distance_meters(
                &graph
                    .vertex(to)
                    .position
                    .expect("dataset vertices carry positions"),
            )
            .round() as u64;
        graph.add_edge(from, to, length);
    }
    graph
}

const WORLD_VERTICES: &[(&str, f64, f64)] = &[
    ("Amsterdam", 57.0, -2.0),
    ("Athens", 37.0, 23.0),
    ("Auckland", -36.0, 174.0),
    ("Barcelona", 41.0, -2.0),
    ("Beijing", 39.0, 25.0),
    ("Bombay", 19.0, 72.0),
    ("Buenos Aires", 34.0, -58.0),
    ("Cairo", 30.0, 31.0),
    ("Cape Town", -33.0, 18.0),
    ("Dublin", 53.0, -6.0),
    ("Havana", 23.0, -82.0),
    ("Helsinki", 60.0, 25.0),
    ("Hong Kong", 22.0, 114.0),
    ("London", 51.0, 0.0),
    ("Moscow", 55.0, 37.0),
    ("Medellín", 6.0, -75.0),
    ("Perth", -31.0, 115.0),
    ("New York", 40.7128, -74.0060),
    ("Atlanta", 33.7490, -84.3880),
    ("Los Angeles", 34.0522, -118.2437),
    ("Mexico City", 19.4326, -99.1332),
    ("Toronto", 43.6532, -79.3832),
    ("Miami", 25.7617, -80.1918),
];

const WORLD_EDGES: &[(&str, &str)] = &[
    ("Amsterdam", "Athens"),
    ("Amsterdam", "Barcelona"),
    ("Athens", "Atlanta"),
    ("Auckland", "Perth"),
    ("Barcelona", "New York"),
    ("Beijing", "Moscow"),
    ("Beijing", "Auckland"),
    ("Bombay", "London"),
    ("Buenos Aires", "Miami"),
    ("Buenos Aires", "Medellín"),
    ("Cairo", "Barcelona"),
    ("Cairo", "Bombay"),
    ("Cape Town", "Buenos Aires"),
    ("Cape Town", "Perth"),
    ("Dublin", "Atlanta"),
    ("Havana", "Miami"),
    ("Helsinki", "London"),
    ("Helsinki", "Moscow"),
    ("Hong Kong", "Moscow"),
    ("Hong Kong", "Bombay"),
    ("Hong Kong", "Cairo"),
    ("London", "New York"),
    ("London", "Dublin"),
    ("Medellín", "Mexico City"),
    ("Medellín", "Atlanta"),
    ("Medellín", "Miami"),
    ("Perth", "Hong Kong"),
    ("Perth", "Bombay"),
    ("Atlanta", "Amsterdam"),
    ("New York", "Atlanta"),
    ("Los Angeles", "Hong Kong"),
    ("Los Angeles", "Beijing"),
    ("Mexico City", "Los Angeles"),
    ("Mexico City", "Amsterdam"),
    ("Toronto", "New York"),
    ("Toronto", "Los Angeles"),
    ("Toronto", "Atlanta"),
    ("Miami", "Toronto"),
    ("Miami", "Atlanta"),
];

const NORTH_AMERICA_VERTICES: &[(&str, f64, f64)] = &[
    ("New York", 40.7128, -74.0060),
    ("Chicago", 41.8781, -87.6298),
    ("Vancouver", 49.2827, -123.1207),
    ("Monterrey", 25.6866, -100.3161),
    ("San Francisco", 37.7749, -122.4194),
    ("Los Angeles", 34.0522, -118.2437),
    ("Toronto", 43.6532, -79.3832),
    ("Mexico City", 19.4326, -99.1332),
    ("Atlanta", 33.7490, -84.3880),
    ("Salt Lake City", 40.7608, -111.8910),
    ("Denver", 39.7392, -104.9903),
    ("Miami", 25.7617, -80.1918),
    ("Cancun", 21.1619, -86.8515),
    ("Washington DC", 38.9072, -77.0369),
];

const NORTH_AMERICA_EDGES: &[(&str, &str)] = &[
    ("New York", "Chicago"),
    ("New York", "Toronto"),
    ("New York", "Atlanta"),
    ("Chicago", "Toronto"),
    ("Chicago", "Miami"),
    ("Vancouver", "San Francisco"),
    ("Vancouver", "Los Angeles"),
    ("Vancouver", "Toronto"),
    ("Monterrey", "Los Angeles"),
    ("Monterrey", "Cancun"),
    ("Monterrey", "Atlanta"),
    ("San Francisco", "Denver"),
    ("San Francisco", "Mexico City"),
    ("Los Angeles", "Denver"),
    ("Los Angeles", "Atlanta"),
    ("Toronto", "Los Angeles"),
    ("Mexico City", "Cancun"),
    ("Mexico City", "Los Angeles"),
    ("Mexico City", "Monterrey"),
    ("Atlanta", "Los Angeles"),
    ("Atlanta", "Chicago"),
    ("Atlanta", "Miami"),
    ("Atlanta", "Monterrey"),
    ("Salt Lake City", "Denver"),
    ("Salt Lake City", "Atlanta"),
    ("Denver", "Vancouver"),
    ("Miami", "New York"),
    ("Miami", "Toronto"),
    ("Cancun", "Atlanta"),
    ("Washington DC", "Atlanta"),
];

const CAMPUS_VERTICES: &[(&str, f64, f64)] = &[
    ("Tech Tower", 33.7749, -84.3964),
    ("Clough", 33.7749, -84.3964),
    ("Paper", 33.7810, -84.4046),
    ("Ferst", 33.7750, -84.3993),
    ("Nave", 33.7730, -84.3912),
    ("West Village", 33.7792, -84.4048),
    ("CRC", 33.7756, -84.4039),
    ("Klaus", 33.7773, -84.3962),
    ("Tech Square", 33.7759, -84.3890),
    ("Home Park", 33.7845, -84.4028),
    ("Bobby Dodd", 33.7724, -84.3928),
    ("Howey", 33.7775, -84.3986),
    ("Cookout", 33.7854, -84.4079),
    ("The Varsity", 33.7716, -84.3893),
];

const CAMPUS_EDGES: &[(&str, &str)] = &[];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_names_parse_round_trip() {
        for dataset in Dataset::ALL {
            let parsed: Dataset = dataset.name().parse().expect("known name parses");
            assert_eq!(parsed, dataset);
        }
    }

    #[test]
    fn unknown_dataset_name_is_rejected() {
        let error = "atlantis".parse::<Dataset>().expect_err("unknown name");
        assert!(error.contains("unknown dataset"));
    }

    #[test]
    fn every_dataset_builds() {
        for dataset in Dataset::ALL {
            let graph = dataset.build();
            assert!(!graph.is_empty());
        }
    }
}
