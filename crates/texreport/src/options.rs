use crate::constants::FIGURE_DIR;
use crate::geometry::*;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Document-level report configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportOptions {
    // Output location
    /// File name of the `.tex` file, without directories. `.tex` is
    /// appended when missing.
    pub file_name: String,
    pub working_dir: PathBuf,

    // Page setup
    pub paper: PaperSize,
    pub orientation: Orientation,
    pub margins: PageMargins,
    /// Base font size in points
    pub font_size: u32,

    // Title block
    pub title: String,
    pub author: String,
    /// Title date. Today's date when unset.
    pub date: Option<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            file_name: "report".to_string(),
            working_dir: PathBuf::from("."),
            paper: PaperSize::A4,
            orientation: Orientation::Portrait,
            margins: PageMargins::default(),
            font_size: 10,
            title: String::new(),
            author: String::new(),
            date: None,
        }
    }
}

impl ReportOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ConfigError::Invalid(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Invalid(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let name = self.file_name.trim();
        if name.is_empty() || name == ".tex" {
            return Err(ConfigError::Invalid("No report file name specified".to_string()).into());
        }
        if name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "Report file name {:?} must not contain directories; use working_dir",
                name
            ))
            .into());
        }
        if ![10, 11, 12].contains(&self.font_size) {
            return Err(ConfigError::Invalid(format!(
                "Font size must be 10, 11 or 12 pt, got {}",
                self.font_size
            ))
            .into());
        }

        let geometry = self.geometry();
        if geometry.content_width().value() <= 0.0 || geometry.content_height().value() <= 0.0 {
            return Err(ConfigError::Invalid(
                "Margins leave no room for content on the page".to_string(),
            )
            .into());
        }

        Ok(())
    }

    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.paper, self.orientation, self.margins)
    }

    /// Path of the `.tex` file
    pub fn tex_path(&self) -> PathBuf {
        let name = self.file_name.trim();
        if name.ends_with(".tex") {
            self.working_dir.join(name)
        } else {
            self.working_dir.join(format!("{}.tex", name))
        }
    }

    /// Directory rendered figures are cached in
    pub fn figure_dir(&self) -> PathBuf {
        self.working_dir.join(FIGURE_DIR)
    }

    /// The title date, defaulting to today as `dd.mm.yyyy`
    pub fn resolved_date(&self) -> String {
        match &self.date {
            Some(date) => date.clone(),
            None => chrono::Local::now().format("%d.%m.%Y").to_string(),
        }
    }
}
