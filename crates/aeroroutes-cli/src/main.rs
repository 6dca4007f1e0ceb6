use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use aeroroutes_lib::{plan_route, Dataset, Graph, RoutePlan, RouteRequest};

#[derive(Parser, Debug)]
#[command(version, about = "Waypoint-graph route planning utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in datasets.
    Datasets,
    /// Compute the shortest route between two named vertices.
    Route {
        /// Dataset to route over.
        #[arg(long)]
        dataset: String,
        /// Start vertex key.
        #[arg(long = "from")]
        from: String,
        /// Goal vertex key.
        #[arg(long = "to")]
        to: String,
        /// Emit the route as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print every vertex and its outgoing edges.
    Edges {
        /// Dataset to enumerate.
        #[arg(long)]
        dataset: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Datasets => handle_datasets(),
        Command::Route {
            dataset,
            from,
            to,
            json,
        } => handle_route(&dataset, &from, &to, json),
        Command::Edges { dataset } => handle_edges(&dataset),
    }
}

fn parse_dataset(name: &str) -> Result<Dataset> {
    name.parse().map_err(anyhow::Error::msg)
}

fn handle_datasets() -> Result<()> {
    for dataset in Dataset::ALL {
        let graph = dataset.build();
        let edge_count: usize = graph.vertices().iter().map(|v| v.edges.len()).sum();
        println!(
            "{} ({} vertices, {} edges)",
            dataset,
            graph.len(),
            edge_count
        );
    }
    Ok(())
}

fn handle_route(dataset: &str, from: &str, to: &str, json: bool) -> Result<()> {
    let dataset = parse_dataset(dataset)?;
    let mut graph = dataset.build();
    let request = RouteRequest::new(from, to);
    let plan = plan_route(&mut graph, &request)
        .with_context(|| format!("failed to plan a route over the {dataset} dataset"))?;

    if json {
        let output = route_output(dataset, &graph, from, to, &plan);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !plan.is_reachable() {
        println!("No route between {from} and {to}.");
        return Ok(());
    }

    println!(
        "Route ({} hops, {} m total):",
        plan.hop_count(),
        plan.total_length
    );
    let mut previous = None;
    for &step in &plan.steps {
        let key = graph.vertex_key(step);
        match previous {
            None => println!("- {key}"),
            Some(previous) => {
                let leg = graph.edge_length(previous, step).unwrap_or(0);
                println!("- {key} (+{leg} m)");
            }
        }
        previous = Some(step);
    }
    Ok(())
}

fn handle_edges(dataset: &str) -> Result<()> {
    let dataset = parse_dataset(dataset)?;
    let graph = dataset.build();
    for vertex in graph.vertices() {
        println!("{} ({} edges)", vertex.key, vertex.edges.len());
        for edge in &vertex.edges {
            println!("  -> {} ({} m)", graph.vertex_key(edge.target), edge.length);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct RouteOutput {
    dataset: String,
    start: String,
    goal: String,
    reachable: bool,
    total_length_meters: u64,
    steps: Vec<StepOutput>,
}

#[derive(Serialize)]
struct StepOutput {
    index: usize,
    key: String,
    /// Length of the leg arriving at this step; absent for the first step.
    leg_length_meters: Option<u64>,
}

fn route_output(
    dataset: Dataset,
    graph: &Graph,
    from: &str,
    to: &str,
    plan: &RoutePlan,
) -> RouteOutput {
    let steps = plan
        .steps
        .iter()
        .enumerate()
        .map(|(index, &step)| StepOutput {
            index,
            key: graph.vertex_key(step).to_string(),
            leg_length_meters: index
                .checked_sub(1)
                .and_then(|prev| graph.edge_length(plan.steps[prev], step)),
        })
        .collect();

    RouteOutput {
        dataset: dataset.to_string(),
        start: from.to_string(),
        goal: to.to_string(),
        reachable: plan.is_reachable(),
        total_length_meters: plan.total_length,
        steps,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
