use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightroute_cli::output::{render_airports, render_plan, render_traversal, OutputFormat};
use flightroute_lib::{CostMetric, RouteNetwork, SearchOrder};

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight route planning utilities")]
struct Cli {
    /// Path to the JSON route network.
    #[arg(long, global = true, default_value = "network.json")]
    network: PathBuf,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every airport in code order.
    Airports,
    /// Find the cheapest itinerary between two airports.
    Route {
        /// Origin airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
        /// Dimension to minimise: duration, distance or price.
        #[arg(long, default_value = "duration", value_parser = CostMetric::from_str)]
        cost: CostMetric,
    },
    /// List airports reachable from an origin.
    Traverse {
        /// Origin airport code.
        #[arg(long = "from")]
        from: String,
        /// Visiting order.
        #[arg(long, value_enum, default_value_t = OrderArg::Bfs)]
        order: OrderArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    Dfs,
    Bfs,
}

impl From<OrderArg> for SearchOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Dfs => SearchOrder::DepthFirst,
            OrderArg::Bfs => SearchOrder::BreadthFirst,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = load_network(&cli.network)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Airports => handle_airports(&mut out, &network, cli.format),
        Command::Route { from, to, cost } => {
            handle_route(&mut out, &network, &from, &to, cost, cli.format)
        }
        Command::Traverse { from, order } => {
            handle_traverse(&mut out, &network, &from, order.into(), cli.format)
        }
    }
}

fn load_network(path: &Path) -> Result<RouteNetwork> {
    RouteNetwork::load(path)
        .with_context(|| format!("failed to load route network from {}", path.display()))
}

fn handle_airports<W: Write>(
    out: &mut W,
    network: &RouteNetwork,
    format: OutputFormat,
) -> Result<()> {
    render_airports(out, &network.airports(), format).context("failed to write airports")
}

fn handle_route<W: Write>(
    out: &mut W,
    network: &RouteNetwork,
    from: &str,
    to: &str,
    metric: CostMetric,
    format: OutputFormat,
) -> Result<()> {
    let plan = network
        .plan_route(from, to, metric)
        .with_context(|| format!("failed to plan a route from {} to {}", from, to))?;
    debug!(legs = plan.legs.len(), total_cost = plan.total_cost, "rendering route");
    render_plan(out, &plan, format).context("failed to write route")
}

fn handle_traverse<W: Write>(
    out: &mut W,
    network: &RouteNetwork,
    from: &str,
    order: SearchOrder,
    format: OutputFormat,
) -> Result<()> {
    let visited = network
        .reachable(from, order)
        .with_context(|| format!("failed to traverse from {}", from))?;
    render_traversal(out, order, &visited, format).context("failed to write traversal")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
