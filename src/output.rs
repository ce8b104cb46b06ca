use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::canvas::Canvas;
use crate::models::OutputSpec;

/// A banner file that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenBanner {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl WrittenBanner {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Encode the canvas as JPEG into `output_dir`, creating the directory if needed
pub fn write_banner(
    canvas: &Canvas,
    output_dir: &Path,
    spec: &OutputSpec,
) -> Result<WrittenBanner> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let path = output_dir.join(spec.file_name());
    canvas
        .save_jpeg(&path, spec.quality)
        .with_context(|| format!("Failed to save {}", path.display()))?;

    info!(
        "wrote {} ({}x{}, quality {})",
        path.display(),
        canvas.width(),
        canvas.height(),
        spec.quality
    );

    Ok(WrittenBanner {
        path,
        width: canvas.width(),
        height: canvas.height(),
    })
}
