use crate::algorithms::{Algorithm, SearchLimits};
use crate::error::Result;
use crate::maze::{MazeGenerator, DEFAULT_MAX_ATTEMPTS};
use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, env = "MAZE_ROWS", default_value_t = 10)]
    pub rows: usize,

    #[arg(long, env = "MAZE_COLS", default_value_t = 15)]
    pub cols: usize,

    /// Probability that any cell other than start and goal is a wall
    #[arg(long, env = "WALL_PROB", default_value_t = 0.3)]
    pub wall_prob: f64,

    /// Seed for reproducible maze generation
    #[arg(long, env = "RANDOM_SEED")]
    pub seed: Option<u64>,

    /// Use the built-in 10x15 maze instead of generating one (env accepts 1/0, yes/no)
    #[arg(
        long,
        env = "USE_FALLBACK",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    pub fallback: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Stop a search after this many expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Algorithms to run, comma separated (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub algorithms: Vec<Algorithm>,

    /// Directory for the CSV metrics and path files
    #[arg(long, env = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    pub fn maze_generator(&self) -> Result<MazeGenerator> {
        MazeGenerator::new(self.rows, self.cols, self.wall_prob)?.with_max_attempts(self.max_attempts)
    }

    pub fn selected_algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_expansions: self.max_expansions,
        }
    }
}
