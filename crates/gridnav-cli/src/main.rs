use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridnav_lib::{
    load_map, plan_route, Coordinate, Grid, Heuristic, RouteRenderMode, RouteRequest, RouteSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Occupancy-grid pathfinding utilities")]
struct Cli {
    /// Path to the occupancy map file (`.`/`0` open, `#`/`1` blocked).
    #[arg(long)]
    map: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report map dimensions and cell counts without searching.
    Info,
    /// Compute a route between two cells on the loaded map.
    Route {
        /// Start cell as `row,col`.
        #[arg(long = "from", value_parser = parse_coordinate)]
        from: Coordinate,
        /// Goal cell as `row,col`.
        #[arg(long = "to", value_parser = parse_coordinate)]
        to: Coordinate,
        /// Heuristic guiding the search.
        #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
        heuristic: HeuristicArg,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Heuristic selector exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Euclidean,
    Zero,
}

impl From<HeuristicArg> for Heuristic {
    fn from(value: HeuristicArg) -> Self {
        match value {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Euclidean => Heuristic::Euclidean,
            HeuristicArg::Zero => Heuristic::Zero,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Compact,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let grid = load_map(&cli.map)
        .with_context(|| format!("failed to load map from {}", cli.map.display()))?;

    match cli.command {
        Command::Info => handle_info(&grid),
        Command::Route {
            from,
            to,
            heuristic,
            format,
        } => handle_route(&grid, from, to, heuristic.into(), format),
    }
}

fn handle_info(grid: &Grid) -> Result<()> {
    let open = grid.open_count();
    println!(
        "Map: {}x{} ({} open, {} blocked)",
        grid.height(),
        grid.width(),
        open,
        grid.cell_count() - open
    );
    Ok(())
}

fn handle_route(
    grid: &Grid,
    from: Coordinate,
    to: Coordinate,
    heuristic: Heuristic,
    format: OutputFormat,
) -> Result<()> {
    let request = RouteRequest {
        start: from,
        goal: to,
        heuristic,
    };
    let plan = plan_route(grid, &request).context("failed to plan route")?;
    let summary = RouteSummary::from_plan(&plan)?;

    match format {
        OutputFormat::Text => print!("{}", summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Compact => print!("{}", summary.render(RouteRenderMode::Compact)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

/// Parse a `row,col` pair into a [`Coordinate`].
fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{value}`"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row in `{value}`"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column in `{value}`"))?;
    Ok(Coordinate::new(row, col))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
