mod bootstrap;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use passa_core::settings::Settings;
use passa_data::analysis::analyze_accounts;
use passa_report::console::write_security_report;
use passa_report::detailed::write_detailed_report;
use passa_report::export::write_exports;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("passa v{} starting", env!("CARGO_PKG_VERSION"));

    let analysis = analyze_accounts(&settings.file)
        .with_context(|| format!("Failed to analyse {}", settings.file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_security_report(&mut out, &analysis.summary).context("Failed to print report")?;
    out.flush()?;

    bootstrap::ensure_output_dir(&settings.output)?;

    let report_path = settings.detailed_report_path();
    let file = File::create(&report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_detailed_report(
        &mut writer,
        &analysis.findings(),
        analysis.summary.total_accounts,
    )
    .and_then(|_| writer.flush())
    .with_context(|| format!("Failed to write {}", report_path.display()))?;
    tracing::info!("Detailed findings report saved to {}", report_path.display());

    if settings.no_export {
        tracing::info!("Skipping JSON exports");
    } else {
        write_exports(&settings.output, &analysis).context("Failed to write JSON exports")?;
    }

    tracing::info!(
        "Analysis complete: {} accounts, load {:.3}s, analysis {:.3}s",
        analysis.metadata.records_loaded,
        analysis.metadata.load_time_seconds,
        analysis.metadata.analysis_time_seconds
    );

    Ok(())
}
