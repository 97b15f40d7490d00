use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airgraph_lib::{
    format_airport_table, load_airport_graph, plan_route, Airport, AirportEntry, Graph,
    RouteAlgorithm, RouteRequest, RouteSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Airport route search over an undirected graph")]
struct Cli {
    /// Airport dataset (JSON array of airport records).
    #[arg(long, global = true, default_value = "data/airports.json")]
    airports: PathBuf,

    /// Route dataset (JSON array of airport code pairs).
    #[arg(long, global = true, default_value = "data/routes.json")]
    routes: PathBuf,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two airport codes.
    Route {
        /// Starting airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm: a-star, bfs or dfs.
        #[arg(long, default_value = "a-star")]
        algorithm: RouteAlgorithm,
    },
    /// List every airport in the dataset.
    Airports,
    /// List the airports directly connected to an airport code.
    Neighbours {
        /// Airport code to inspect.
        code: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = load_graph(&cli.airports, &cli.routes)?;

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
        } => handle_route(&graph, cli.format, &from, &to, algorithm),
        Command::Airports => {
            let airports: Vec<&Airport> = graph.nodes().collect();
            print_airports(cli.format, &airports)
        }
        Command::Neighbours { code } => handle_neighbours(&graph, cli.format, &code),
    }
}

fn load_graph(airports: &Path, routes: &Path) -> Result<Graph<Airport>> {
    load_airport_graph(airports, routes).with_context(|| {
        format!(
            "failed to load dataset from {} and {}",
            airports.display(),
            routes.display()
        )
    })
}

fn handle_route(
    graph: &Graph<Airport>,
    format: OutputFormat,
    from: &str,
    to: &str,
    algorithm: RouteAlgorithm,
) -> Result<()> {
    ensure_known(graph, from)?;
    ensure_known(graph, to)?;

    let request = RouteRequest::a_star(from, to).with_algorithm(algorithm);
    let plan = plan_route(graph, &request)?;
    debug!(hops = plan.hop_count(), %algorithm, "route planned");

    let summary = RouteSummary::from_plan(&plan)?;
    match format {
        OutputFormat::Text => print!("{}", summary.render_text()),
        OutputFormat::Json => print_json(&summary)?,
    }
    Ok(())
}

fn handle_neighbours(graph: &Graph<Airport>, format: OutputFormat, code: &str) -> Result<()> {
    ensure_known(graph, code)?;
    let neighbours = graph
        .neighbours(code)?
        .iter()
        .map(|id| graph.get(id.as_str()))
        .collect::<airgraph_lib::Result<Vec<_>>>()?;
    print_airports(format, &neighbours)
}

fn ensure_known(graph: &Graph<Airport>, code: &str) -> Result<()> {
    if !graph.has(code) {
        bail!("Unknown airport code '{code}'");
    }
    Ok(())
}

fn print_airports(format: OutputFormat, airports: &[&Airport]) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_airport_table(airports)),
        OutputFormat::Json => {
            let entries: Vec<AirportEntry> = airports.iter().map(|&a| a.into()).collect();
            print_json(&entries)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
