//! graphframe CLI: build a graph from node and edge table files and inspect it.
//!
//! Usage:
//!   graphframe inspect --nodes nodes.json [--edges edges.json] [--undirected]
//!   graphframe nodes --nodes nodes.yaml [--edges edges.yaml]

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphframe::frame::{read_edge_rows, read_node_rows};
use graphframe::{EdgeFormat, EdgeListing, EdgeValues, Graph, GraphOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "graphframe",
    version,
    about = "Table-backed graph construction and inspection"
)]
struct Cli {
    /// Log operations to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct TableArgs {
    /// Node table file (.json, .yaml or .yml)
    #[arg(long)]
    nodes: PathBuf,
    /// Edge table file (.json, .yaml or .yml)
    #[arg(long)]
    edges: Option<PathBuf>,
    /// Build an undirected graph
    #[arg(long)]
    undirected: bool,
    /// Name recorded in the graph metadata
    #[arg(long)]
    name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary line followed by the edge listing
    Inspect {
        #[command(flatten)]
        tables: TableArgs,
        /// Edge listing format
        #[arg(long, value_enum, default_value = "pairs")]
        format: ListingFormat,
        /// Render endpoints by label instead of ID
        #[arg(long)]
        labels: bool,
    },
    /// Print the node table
    Nodes {
        #[command(flatten)]
        tables: TableArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ListingFormat {
    Pairs,
    Table,
}

impl From<ListingFormat> for EdgeFormat {
    fn from(format: ListingFormat) -> Self {
        match format {
            ListingFormat::Pairs => EdgeFormat::Pairs,
            ListingFormat::Table => EdgeFormat::Table,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "graphframe=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_graph(tables: &TableArgs) -> Result<Graph, String> {
    let nodes = read_node_rows(&tables.nodes).map_err(|e| table_error(&tables.nodes, e))?;
    let edges = match &tables.edges {
        Some(path) => Some(read_edge_rows(path).map_err(|e| table_error(path, e))?),
        None => None,
    };

    let mut options = GraphOptions::new().directed(!tables.undirected);
    if let Some(name) = &tables.name {
        options = options.with_name(name.clone());
    }
    Graph::from_frames(options, Some(nodes), edges)
        .map_err(|e| format!("Failed to build graph: {}", e))
}

fn table_error(path: &Path, e: impl std::fmt::Display) -> String {
    format!("Failed to read {}: {}", path.display(), e)
}

fn cmd_inspect(graph: &Graph, format: ListingFormat, labels: bool) -> i32 {
    println!("{}", graph.info());

    let values = if labels { EdgeValues::Labels } else { EdgeValues::Ids };
    match graph.get_edges(format.into(), values) {
        EdgeListing::Pairs(pairs) => {
            for pair in pairs {
                println!("{}", pair);
            }
        }
        EdgeListing::Table(rows) => {
            println!("from\tto");
            for row in rows {
                println!("{}\t{}", row.from, row.to);
            }
        }
    }
    0
}

fn cmd_nodes(graph: &Graph) -> i32 {
    let frame = graph.get_node_df();

    let mut header = vec!["id", "type", "label"];
    header.extend(frame.columns.iter().map(String::as_str));
    println!("{}", header.join("\t"));

    for row in &frame.rows {
        let mut cells = vec![
            row.id.to_string(),
            na(row.node_type.as_deref()),
            na(row.label.as_deref()),
        ];
        for column in &frame.columns {
            cells.push(match row.attrs.get(column) {
                Some(value) => value.to_string(),
                None => "NA".to_string(),
            });
        }
        println!("{}", cells.join("\t"));
    }
    0
}

fn na(cell: Option<&str>) -> String {
    cell.unwrap_or("NA").to_string()
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tables = match &cli.command {
        Commands::Inspect { tables, .. } | Commands::Nodes { tables } => tables,
    };
    let graph = match load_graph(tables) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Inspect { format, labels, .. } => cmd_inspect(&graph, format, labels),
        Commands::Nodes { .. } => cmd_nodes(&graph),
    };
    std::process::exit(code);
}
