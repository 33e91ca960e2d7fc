use clap::{ArgAction, Parser};
use std::path::PathBuf;

use doodlepad::backend::{self, output};
use doodlepad::config::Config;

#[derive(Parser, Debug)]
#[command(name = "doodlepad")]
#[command(version, about = "Touch freehand drawing canvas with long-press color picking")]
struct Cli {
    /// Replay a gesture script (TOML list of [[step]] entries)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// PNG file to write the finished drawing to (defaults to the Pictures directory)
    #[arg(long, short = 'o', value_name = "FILE", requires = "script")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/doodlepad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => output::expand_tilde(path),
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Created default config at {}", path.display());
    } else if let Some(script) = &cli.script {
        let config = match &cli.config {
            Some(path) => Config::load_from(&output::expand_tilde(path))?,
            None => Config::load()?,
        };
        let output_path = cli
            .output
            .as_deref()
            .map(output::expand_tilde)
            .unwrap_or_else(output::default_output_path);

        log::info!("Replaying {}", script.display());
        let summary = backend::run_replay(&output::expand_tilde(script), &output_path, config)?;

        println!(
            "Saved {} strokes ({} visible) to {}",
            summary.strokes_stored,
            summary.strokes_visible,
            summary.output.display()
        );
    } else {
        // No flags: show usage
        println!("doodlepad: Touch freehand drawing canvas with long-press color picking");
        println!();
        println!("Usage:");
        println!("  doodlepad --script gestures.toml [--output drawing.png]");
        println!("  doodlepad --init-config           Write ~/.config/doodlepad/config.toml");
        println!("  doodlepad --help                  Show help");
        println!();
        println!("Gesture scripts:");
        println!("  [[step]]");
        println!("  action = \"down\"      # also: pointer-down, move, up, pointer-up, cancel,");
        println!("  x = 10.0             #       wait, undo, redo, clear, brush-size, color-mode");
        println!("  y = 10.0");
        println!();
        println!("Gestures:");
        println!("  - Draw: touch and move");
        println!("  - Pick color: hold still; the picker advances every half second");
        println!("  - Random colors: color-mode with random = true (disables the picker)");
    }

    Ok(())
}
