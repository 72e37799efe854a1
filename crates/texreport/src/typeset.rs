//! Running the external typesetter

use crate::types::*;
use std::path::{Path, PathBuf};

/// Default typesetting program
pub const PDFLATEX: &str = "pdflatex";

/// Build a PDF from a finished `.tex` file with `pdflatex`
pub async fn build_pdf(tex_path: impl AsRef<Path>) -> Result<PathBuf> {
    build_with(PDFLATEX, tex_path).await
}

/// Build with a specific LaTeX program, run inside the file's directory
pub async fn build_with(program: &str, tex_path: impl AsRef<Path>) -> Result<PathBuf> {
    let tex_path = tex_path.as_ref();
    let file_name = tex_path
        .file_name()
        .ok_or_else(|| ConfigError::Invalid(format!("{} is not a file", tex_path.display())))?;
    let dir = match tex_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    log::info!("running {} on {}", program, tex_path.display());
    let status = tokio::process::Command::new(program)
        .arg("-interaction=nonstopmode")
        .arg(file_name)
        .current_dir(&dir)
        .status()
        .await?;

    if !status.success() {
        return Err(ReportError::Build { status });
    }
    Ok(tex_path.with_extension("pdf"))
}
