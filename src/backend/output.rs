//! Canvas surface and PNG output for the replay shell.

use anyhow::{Context, Result};
use cairo::{Format, ImageSurface};
use chrono::Local;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::draw::{Color, render_background};
use crate::input::InputState;

/// Filename template for drawings saved without an explicit path.
pub const DEFAULT_FILENAME_TEMPLATE: &str = "doodle_%Y-%m-%d_%H%M%S";

/// Offscreen canvas the shell repaints whenever the input state asks for it.
pub struct Canvas {
    surface: ImageSurface,
    background: Color,
    frames: usize,
}

impl Canvas {
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self> {
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .with_context(|| format!("Failed to create {width}x{height} canvas surface"))?;
        Ok(Self {
            surface,
            background,
            frames: 0,
        })
    }

    /// Repaints the background, the visible strokes and any picker preview.
    pub fn paint(&mut self, input_state: &InputState) -> Result<()> {
        let ctx = cairo::Context::new(&self.surface).context("Failed to create Cairo context")?;
        render_background(&ctx, self.background);
        input_state.render(&ctx);
        drop(ctx);

        self.surface.flush();
        self.frames += 1;
        log::trace!("Painted frame {}", self.frames);
        Ok(())
    }

    /// Number of repaints performed so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn into_surface(self) -> ImageSurface {
        self.surface
    }

    /// Writes the canvas as PNG, creating the parent directory if needed.
    pub fn write_png(&self, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_directory_exists(parent)?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        self.surface
            .write_to_png(&mut file)
            .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

        let written_size = fs::metadata(path)?.len();
        log::debug!("File written: {} bytes", written_size);
        log::info!("Drawing saved: {}", path.display());
        Ok(path.to_path_buf())
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Where a drawing goes when no output path is given.
///
/// Uses the user's pictures directory, or the current directory if there is none.
pub fn default_output_path() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(generate_filename(DEFAULT_FILENAME_TEMPLATE, "png"))
}

/// Ensure the directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<()> {
    if !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)
            .with_context(|| format!("Failed to create {}", directory.display()))?;
    }
    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}
