use anyhow::{Context, Result};
use bidipath_core::{read_graph_file, write_graph_file};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use crate::args::{BenchArgs, Cli, Command, DistanceArgs, GenerateArgs};
use crate::bench::run_benchmark;
use crate::colors::ColorScheme;
use crate::display;
use crate::generate::{GenerateOptions, generate_random_graph};
use crate::search::{create_search_request, execute_search, parse_termination};

pub fn run(cli: &Cli, colors: &ColorScheme) -> Result<()> {
    match &cli.command {
        Command::Distance(args) => run_distance(args, cli.verbose, colors),
        Command::Generate(args) => run_generate(args, colors),
        Command::Bench(args) => run_bench(args, cli.verbose, colors),
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub fn run_distance(args: &DistanceArgs, verbose: bool, colors: &ColorScheme) -> Result<()> {
    let request = create_search_request(args)?;
    let graph = read_graph_file(&args.graph)
        .with_context(|| format!("failed to load graph {}", args.graph.display()))?;

    if verbose && !args.json {
        display::display_search_info(&request, colors);
    }

    let result = execute_search(&request, &graph)?;

    if args.json {
        display::display_search_json(&result)?;
    } else {
        display::display_search_result(&result, verbose, colors);
    }
    Ok(())
}

pub fn run_generate(args: &GenerateArgs, colors: &ColorScheme) -> Result<()> {
    let options = GenerateOptions::from(args);
    let mut rng = seeded_rng(args.seed);

    let graph = generate_random_graph(&options, &mut rng)?;
    write_graph_file(&args.output, &graph)
        .with_context(|| format!("failed to write graph {}", args.output.display()))?;

    info!(path = %args.output.display(), "graph written");
    display::display_generated_graph(
        &args.output.display().to_string(),
        options.nodes,
        graph.edge_count(),
        colors,
    );
    Ok(())
}

pub fn run_bench(args: &BenchArgs, verbose: bool, colors: &ColorScheme) -> Result<()> {
    let graph = read_graph_file(&args.graph)
        .with_context(|| format!("failed to load graph {}", args.graph.display()))?;
    let config = bidipath_core::SearchConfig::default()
        .with_termination(parse_termination(&args.termination));
    let mut rng = seeded_rng(args.seed);

    let results = run_benchmark(&graph, args.trials, &config, &mut rng)?;

    if args.json {
        display::display_benchmark_json(&results)?;
    } else {
        display::display_benchmark(&results, verbose, colors);
    }
    Ok(())
}
