use clap::Parser;

use maze_search::config::Config;
use maze_search::maze;
use maze_search::report;
use maze_search::simulation::{self, AlgorithmResult};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> maze_search::Result<()> {
    println!("{}", "=".repeat(60));
    println!("ROBOT MAZE PATH PLANNING - SEARCH ALGORITHMS");
    println!("{}", "=".repeat(60));

    let grid = if config.fallback {
        println!("\nUsing fallback maze (10x15)...");
        maze::fallback()
    } else {
        let generator = config.maze_generator()?;
        println!(
            "\nGenerating {}x{} maze (wall probability: {})...",
            config.rows, config.cols, config.wall_prob
        );
        if let Some(seed) = config.seed {
            println!("Seed: {} (for reproducibility)", seed);
        }
        generator.generate_seeded(config.seed)
    };

    println!("\nMaze size: {} x {}", grid.rows(), grid.cols());
    println!("Start: {}", grid.start());
    println!("Goal: {}", grid.goal());

    if !config.quiet {
        println!("\nMaze Layout:");
        print!("{}", grid);
        println!("\nLegend: S=Start, G=Goal, #=Wall, .=Free");
    }

    let results = simulation::run_algorithms(&grid, &config.selected_algorithms(), config.limits())?;

    if !config.quiet {
        for run in &results {
            simulation::print_run_summary(run);
        }
    }
    simulation::print_comparison_results(&results);

    if let Some(best) = best_run(&results) {
        if !config.quiet {
            println!("\nShortest path ({}):", best.algorithm);
            print!("{}", grid.render(Some(best.result.path.as_slice())));
        }
    }

    if let Some(dir) = &config.output_dir {
        let written = report::save_results(dir, &results)?;
        for path in written {
            println!("Saved: {}", path.display());
        }
    }

    Ok(())
}

fn best_run(results: &[AlgorithmResult]) -> Option<&AlgorithmResult> {
    results
        .iter()
        .filter(|r| r.result.found)
        .min_by_key(|r| (r.result.path_length(), r.result.explored_count()))
}
