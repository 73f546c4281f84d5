// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments, runs the digest, and prints the console
// lines. All work is delegated to Layer 2.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::DigestArgs;
use std::path::Path;

use crate::application::digest_use_case::DigestUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "daily-digest",
    version,
    about = "Collect the files modified today in a directory into one XML document."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: DigestArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let use_case = DigestUseCase::new(self.args.into());
        let report   = use_case.execute(|name| println!("{}", warning_line(name)))?;
        tracing::info!(
            "{} documents written, {} skipped",
            report.written,
            report.skipped.len()
        );

        println!("{}", saved_line(&report.output_file));
        Ok(())
    }
}

/// Console line for a file that no encoding could decode.
pub fn warning_line(name: &str) -> String {
    format!("Warning: Could not read {} due to encoding issues.", name)
}

/// Console line printed once the output file is written.
pub fn saved_line(output: &Path) -> String {
    format!("Updated files have been saved to {}", output.display())
}
