use crate::error::Result;
use crate::simulation::AlgorithmResult;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CSV_HEADER: &str = "algorithm,path_length,cells_explored,execution_time_ms,success";

/// Writes one metrics row per algorithm run.
pub fn write_csv(path: &Path, results: &[AlgorithmResult]) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{}", CSV_HEADER)?;

    for run in results {
        let length = if run.result.found {
            run.result.path_length().to_string()
        } else {
            "N/A".to_string()
        };
        writeln!(
            file,
            "{},{},{},{:.2},{}",
            run.algorithm.name(),
            length,
            run.result.explored_count(),
            run.elapsed_ms(),
            run.result.found
        )?;
    }

    log::debug!("wrote {} rows to {}", results.len(), path.display());
    Ok(())
}

/// Writes `<stem>_path.txt` listing the path cells. Returns `None` for runs
/// that found nothing.
pub fn write_path_file(dir: &Path, run: &AlgorithmResult) -> Result<Option<PathBuf>> {
    if !run.result.found {
        return Ok(None);
    }

    let path = dir.join(format!("{}_path.txt", run.algorithm.file_stem()));
    let mut file = File::create(&path)?;
    writeln!(file, "Algorithm: {}", run.algorithm.name())?;
    writeln!(file, "Path Length: {}", run.result.path_length())?;
    writeln!(file, "Cells Explored: {}", run.result.explored_count())?;
    writeln!(file, "Execution Time: {:.2} ms", run.elapsed_ms())?;
    writeln!(file, "\nPath:")?;
    for cell in &run.result.path {
        writeln!(file, "  {}", cell)?;
    }

    Ok(Some(path))
}

/// Creates `dir` and writes the CSV plus one path file per successful run.
pub fn save_results(dir: &Path, results: &[AlgorithmResult]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for run in results {
        if let Some(path) = write_path_file(dir, run)? {
            written.push(path);
        }
    }

    let csv = dir.join("performance_metrics.csv");
    write_csv(&csv, results)?;
    written.push(csv);
    Ok(written)
}
