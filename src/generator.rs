use std::path::{Path, PathBuf};

use tracing::info;

use crate::descriptor;
use crate::error::GenResult;
use crate::metrics::{MetricsSnapshot, RunMetrics};
use crate::render::{self, SizeOutcome};
use crate::source;
use crate::types::{SizeEntry, ICON_SIZES};

#[derive(Debug)]
pub struct GenerationReport {
    pub metrics: MetricsSnapshot,
    pub outcomes: Vec<SizeOutcome>,
    pub descriptors: Vec<PathBuf>,
}

impl GenerationReport {
    /// `<successes>/<total>`, counting sizes whose plain icon was written.
    pub fn summary_line(&self) -> String {
        self.metrics.summary_line()
    }
}

/// Runs the full pipeline for the fixed Android size table.
pub fn generate(source_path: &Path, output_root: &Path) -> GenResult<GenerationReport> {
    generate_sizes(source_path, output_root, &ICON_SIZES)
}

/// Loads the source, renders `entries`, then writes the descriptor files.
///
/// A source that cannot be read or decoded aborts before anything is written.
/// Per-size save failures are recorded in the report and do not stop the run.
pub fn generate_sizes(source_path: &Path, output_root: &Path, entries: &[SizeEntry]) -> GenResult<GenerationReport> {
    let source = source::load_source(source_path)?;
    info!("Writing icons to {}", output_root.display());

    let mut metrics = RunMetrics::new(entries.len());
    let outcomes = render::render_all(&source, entries, output_root, &mut metrics);
    let descriptors = descriptor::write_descriptors(output_root)?;

    let metrics = metrics.get_snapshot();
    info!(
        "Generated {} sizes (round: {} written, {} failed, {} skipped) in {:?}",
        metrics.summary_line(),
        metrics.round_written,
        metrics.round_failed,
        metrics.round_skipped,
        metrics.elapsed
    );
    Ok(GenerationReport { metrics, outcomes, descriptors })
}
