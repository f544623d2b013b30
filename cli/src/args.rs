use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bidipath")]
#[command(about = "Shortest distances on weighted undirected graphs using bidirectional Dijkstra")]
pub struct Cli {
    /// Verbose mode - show search info and statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. "debug" or "bidipath_core=trace" (overridden by BIDIPATH_LOG)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the shortest distance between two nodes of a graph file
    Distance(DistanceArgs),
    /// Write a random G(n, m) graph with integer edge weights
    Generate(GenerateArgs),
    /// Compare bidirectional search against plain Dijkstra on random pairs
    Bench(BenchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DistanceArgs {
    /// Graph file produced by `bidipath generate`
    pub graph: PathBuf,

    /// Source node UUID
    pub source: String,

    /// Target node UUID
    pub target: String,

    /// Search algorithm
    #[arg(short, long, default_value = "bidirectional", value_parser = ["bidirectional", "dijkstra"])]
    pub algorithm: String,

    /// Give up after this many search rounds
    #[arg(long, value_name = "ROUNDS")]
    pub max_rounds: Option<usize>,

    /// Stopping rule of the bidirectional search
    #[arg(long, default_value = "peek", value_parser = ["peek", "popped"])]
    pub termination: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Output graph file
    pub output: PathBuf,

    /// Number of nodes
    #[arg(short, long, default_value = "200")]
    pub nodes: usize,

    /// Fraction of all possible edges to create (0.0-1.0)
    #[arg(short, long, default_value = "0.02")]
    pub density: f64,

    /// Smallest edge weight
    #[arg(long, default_value = "1")]
    pub min_weight: u32,

    /// Largest edge weight
    #[arg(long, default_value = "30")]
    pub max_weight: u32,

    /// Seed for reproducible graphs
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Graph file produced by `bidipath generate`
    pub graph: PathBuf,

    /// Number of random source/target pairs
    #[arg(short, long, default_value = "50")]
    pub trials: usize,

    /// Seed for reproducible pair selection
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Stopping rule of the bidirectional search
    #[arg(long, default_value = "peek", value_parser = ["peek", "popped"])]
    pub termination: String,

    /// Print every trial as JSON
    #[arg(long)]
    pub json: bool,
}
