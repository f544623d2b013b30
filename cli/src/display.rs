use bidipath_core::SearchStats;
use bidipath_core::benchmark::{BenchmarkResult, BenchmarkSummary};
use serde::Serialize;

use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

#[derive(Debug, Serialize)]
pub struct DistanceReport {
    pub source: String,
    pub target: String,
    pub algorithm: &'static str,
    pub reachable: bool,
    pub distance: Option<f64>,
    pub rounds: Option<usize>,
    pub nodes_settled: Option<usize>,
    pub elapsed_ms: Option<f64>,
}

impl From<&SearchResult> for DistanceReport {
    fn from(result: &SearchResult) -> Self {
        Self {
            source: result.source.to_string(),
            target: result.target.to_string(),
            algorithm: result.algorithm.as_str(),
            reachable: result.distance.is_some(),
            distance: result.distance,
            rounds: result.stats.as_ref().map(|stats| stats.rounds),
            nodes_settled: result.stats.as_ref().map(SearchStats::nodes_settled),
            elapsed_ms: result
                .stats
                .as_ref()
                .map(|stats| stats.elapsed.as_secs_f64() * 1000.0),
        }
    }
}

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🧭 Finding distance from {} to {}",
        colors.node(&request.source.to_string()),
        colors.node(&request.target.to_string())
    );
    println!(
        "⚙️  Using {} search ({} termination)",
        request.algorithm.as_str(),
        request.config.termination.as_str()
    );
    if let Some(max_rounds) = request.config.max_rounds {
        println!(
            "⏱️  Giving up after {} rounds",
            colors.number(&format_number(max_rounds))
        );
    }
    println!("🔍 Searching...");
}

pub fn display_search_result(result: &SearchResult, verbose: bool, colors: &ColorScheme) {
    match result.distance {
        Some(distance) => println!(
            "{} Shortest distance: {}",
            colors.success("✅"),
            colors.distance(&format_distance(distance))
        ),
        None => println!(
            "{} {} and {}",
            colors.error("❌ No path between"),
            colors.node(&result.source.to_string()),
            colors.node(&result.target.to_string())
        ),
    }

    if verbose {
        if let Some(stats) = &result.stats {
            display_search_statistics(stats, colors);
        }
    }
}

pub fn display_search_json(result: &SearchResult) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(&DistanceReport::from(result))?);
    Ok(())
}

fn display_search_statistics(stats: &SearchStats, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Settled {} nodes ({} forward, {} backward) in {} rounds, {} ms",
        colors.stats("📊"),
        colors.number(&format_number(stats.nodes_settled())),
        format_number(stats.settled_forward),
        format_number(stats.settled_backward),
        colors.number(&format_number(stats.rounds)),
        colors.number(&format!("{:.3}", stats.elapsed.as_secs_f64() * 1000.0))
    );
}

pub fn display_generated_graph(path: &str, nodes: usize, edges: usize, colors: &ColorScheme) {
    println!(
        "{} Wrote graph with {} nodes and {} edges to {}",
        colors.success("✅"),
        colors.number(&format_number(nodes)),
        colors.number(&format_number(edges)),
        colors.label(path)
    );
}

pub fn display_benchmark(results: &[BenchmarkResult], verbose: bool, colors: &ColorScheme) {
    let summary = BenchmarkSummary::from(results);

    if verbose {
        for (index, result) in results.iter().enumerate() {
            println!(
                "{:3} {} -> {}: {} / {}",
                colors.label(&format!("{}.", index + 1)),
                colors.node(&result.source),
                colors.node(&result.target),
                format_optional_distance(result.bidirectional.distance),
                format_optional_distance(result.dijkstra.distance)
            );
        }
        println!("\n---\n");
    }

    for result in results.iter().filter(|result| !result.agree) {
        println!(
            "{} {} -> {}: bidirectional {}, dijkstra {}",
            colors.error("❌ Mismatch"),
            colors.node(&result.source),
            colors.node(&result.target),
            format_optional_distance(result.bidirectional.distance),
            format_optional_distance(result.dijkstra.distance)
        );
    }

    let agreement = format!("{}/{}", summary.agreements, summary.trials);
    if summary.agreements == summary.trials {
        println!("{} All trials agree ({})", colors.success("✅"), agreement);
    } else {
        println!("{} Trials agreeing: {}", colors.error("❌"), agreement);
    }
    println!(
        "{} Mean nodes settled: bidirectional {}, dijkstra {}",
        colors.stats("📊"),
        colors.number(&format!("{:.1}", summary.mean_settled_bidirectional)),
        colors.number(&format!("{:.1}", summary.mean_settled_dijkstra))
    );
}

pub fn display_benchmark_json(results: &[BenchmarkResult]) -> serde_json::Result<()> {
    #[derive(Serialize)]
    struct BenchmarkReport<'a> {
        summary: BenchmarkSummary,
        trials: &'a [BenchmarkResult],
    }

    let report = BenchmarkReport {
        summary: BenchmarkSummary::from(results),
        trials: results,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Whole numbers print without a fractional part.
pub fn format_distance(distance: f64) -> String {
    if distance.fract() == 0.0 && distance.abs() < 1e15 {
        format!("{distance:.0}")
    } else {
        format!("{distance}")
    }
}

fn format_optional_distance(distance: Option<f64>) -> String {
    distance.map_or_else(|| "unreachable".to_string(), format_distance)
}
