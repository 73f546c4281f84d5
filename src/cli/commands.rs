// ============================================================
// Layer 1 - CLI Arguments
// ============================================================
// Every flag is optional. With no arguments the run uses the two
// fixed paths from the application layer.

use clap::Args;
use std::path::PathBuf;

use crate::application::digest_use_case::{RunConfig, DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_DIR};

#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Directory whose direct entries are scanned
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// XML file to write (overwritten on every run)
    #[arg(long, short, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Number documents in file-name order instead of directory order
    #[arg(long)]
    pub sorted: bool,
}

/// Convert CLI args into the application-layer RunConfig.
impl From<DigestArgs> for RunConfig {
    fn from(a: DigestArgs) -> Self {
        RunConfig {
            source_dir:   a.source_dir,
            output_file:  a.output,
            sort_by_name: a.sorted,
        }
    }
}
