use anyhow::Result;
use std::path::Path;

use crate::config::Config;

pub mod output;
pub mod replay;
pub mod script;

pub use output::{Canvas, default_output_path};
pub use replay::{ReplayBackend, ReplayOutcome, ReplaySummary};
pub use script::{Script, ScriptError, Step};

/// Load a gesture script and replay it, saving the canvas to `output`
///
/// # Arguments
/// * `script_path` - TOML file with the `[[step]]` list to replay
/// * `output` - PNG path to write the final canvas to
/// * `config` - Brush, long-press and canvas settings
pub fn run_replay(script_path: &Path, output: &Path, config: Config) -> Result<ReplaySummary> {
    let script = Script::load(script_path)?;
    let backend = ReplayBackend::new(config);
    backend.run(&script, output)
}
