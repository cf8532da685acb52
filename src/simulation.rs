use crate::algorithms::{Algorithm, SearchLimits};
use crate::error::Result;
use crate::grid::Grid;
use crate::statistics::SearchResult;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    pub elapsed: Duration,
}

impl AlgorithmResult {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs each algorithm once on the grid's own start and goal.
pub fn run_algorithms(
    grid: &Grid,
    algorithms: &[Algorithm],
    limits: SearchLimits,
) -> Result<Vec<AlgorithmResult>> {
    let mut results = Vec::with_capacity(algorithms.len());

    for &algorithm in algorithms {
        let started = Instant::now();
        let result = algorithm.search_with_limits(grid, grid.start(), grid.goal(), limits)?;
        let elapsed = started.elapsed();

        log::info!(
            "{}: found={} path_length={} explored={} in {:.2?}",
            algorithm,
            result.found,
            result.path_length(),
            result.explored_count(),
            elapsed
        );
        results.push(AlgorithmResult {
            algorithm,
            result,
            elapsed,
        });
    }

    Ok(results)
}

/// Shortest path length among the runs that reached the goal.
pub fn shortest_found(results: &[AlgorithmResult]) -> Option<usize> {
    results
        .iter()
        .filter(|r| r.result.found)
        .map(|r| r.result.path_length())
        .min()
}

pub fn print_run_summary(run: &AlgorithmResult) {
    println!("\nRunning {}...", run.algorithm);
    if run.result.found {
        println!("  ✓ Path found!");
        println!("    - Path length: {}", run.result.path_length());
    } else {
        println!("  ✗ No path found ({:?})", run.result.termination);
    }
    println!("    - Cells explored: {}", run.result.explored_count());
    println!("    - Execution time: {:.2} ms", run.elapsed_ms());
}

pub fn print_comparison_results(results: &[AlgorithmResult]) {
    println!("\n=== ALGORITHM COMPARISON ===");
    println!();
    println!(
        "{:<12} {:<12} {:<12} {:<12} {:<10}",
        "Algorithm", "Path Length", "Explored", "Time (ms)", "Optimal?"
    );
    println!("{}", "-".repeat(58));

    let shortest = shortest_found(results);
    for run in results {
        let (length, optimal) = if run.result.found {
            let optimal = if Some(run.result.path_length()) == shortest { "Yes" } else { "No" };
            (run.result.path_length().to_string(), optimal)
        } else {
            ("N/A".to_string(), "N/A")
        };
        println!(
            "{:<12} {:<12} {:<12} {:<12.2} {:<10}",
            run.algorithm.name(),
            length,
            run.result.explored_count(),
            run.elapsed_ms(),
            optimal
        );
    }

    println!();
    println!("{}", "-".repeat(58));
    let (optimal, heuristic): (Vec<_>, Vec<_>) =
        Algorithm::ALL.into_iter().partition(|a| a.is_optimal());
    println!("Note: {} guarantee optimal (shortest) paths.", join_names(&optimal));
    println!("      {} do not guarantee optimal paths.", join_names(&heuristic));
}

fn join_names(algorithms: &[Algorithm]) -> String {
    algorithms
        .iter()
        .map(|a| a.name())
        .collect::<Vec<_>>()
        .join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze;

    #[test]
    fn test_run_all_on_fallback() {
        let grid = maze::fallback();
        let results = run_algorithms(&grid, &Algorithm::ALL, SearchLimits::default()).unwrap();

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.result.found));
        assert_eq!(shortest_found(&results), Some(23));

        let lengths: Vec<_> = results.iter().map(|r| r.result.path_length()).collect();
        assert_eq!(lengths, vec![23, 37, 25, 23]);
    }

    #[test]
    fn test_shortest_ignores_failures() {
        let grid = maze::fallback();
        let results = run_algorithms(
            &grid,
            &[Algorithm::Bfs, Algorithm::Greedy],
            SearchLimits::max_expansions(50),
        )
        .unwrap();
        // BFS needs 83 expansions on this maze, greedy only 29.
        assert!(!results[0].result.found);
        assert!(results[1].result.found);
        assert_eq!(shortest_found(&results), Some(25));
    }
}
