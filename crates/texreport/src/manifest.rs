//! Reports described as JSON documents

use crate::constants::DEFAULT_IMAGE_DPI;
use crate::figure::{FigureRequest, SizeSpec};
use crate::image_figure::ImageFigure;
use crate::length::Length;
use crate::options::ReportOptions;
use crate::report::Report;
use crate::table::Table;
use crate::template::{BlockStyle, SectionLevel, SectionOptions};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default format image figures are written in
const IMAGE_FIGURE_FORMAT: &str = "png";

/// A whole report: options plus the ordered list of blocks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportManifest {
    pub options: ReportOptions,
    /// Re-render every figure, ignoring cached files
    pub force_all: bool,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        title: String,
        #[serde(default)]
        level: SectionLevel,
        #[serde(default)]
        newpage: bool,
        #[serde(default)]
        starred: bool,
    },
    Text {
        text: String,
    },
    Equation {
        content: String,
    },
    Table {
        #[serde(default)]
        rows: Vec<Vec<String>>,
        #[serde(default)]
        header: Option<Vec<String>>,
        /// CSV file to read rows from instead of `rows`
        #[serde(default)]
        csv: Option<PathBuf>,
        /// Whether the first CSV record is the header
        #[serde(default)]
        csv_header: bool,
        #[serde(default)]
        columns: Option<String>,
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        float: bool,
    },
    Figure {
        image: PathBuf,
        /// Pixels per inch of the source image
        #[serde(default)]
        dpi: Option<f64>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        format: Option<String>,
        #[serde(default)]
        width_ratio: Option<f64>,
        #[serde(default)]
        height_ratio: Option<f64>,
        #[serde(default)]
        width: Option<Length>,
        #[serde(default)]
        height: Option<Length>,
        #[serde(default)]
        force: bool,
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        float: bool,
    },
    /// Markup added verbatim
    Raw {
        content: String,
    },
}

impl ReportManifest {
    /// Load a manifest from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let manifest = serde_json::from_slice(&bytes)
            .map_err(|e| ConfigError::Invalid(format!("Failed to parse manifest: {}", e)))?;
        Ok(manifest)
    }

    /// Write the report. Relative paths in the manifest are taken
    /// relative to `base_dir`. Returns the path of the `.tex` file.
    pub fn render(&self, base_dir: &Path) -> Result<PathBuf> {
        let mut options = self.options.clone();
        options.working_dir = base_dir.join(&options.working_dir);

        let mut report = Report::create(options)?;
        report.set_force_all(self.force_all);

        for block in &self.blocks {
            add_block(&mut report, block, base_dir)?;
        }
        report.close()
    }
}

fn add_block(report: &mut Report, block: &Block, base_dir: &Path) -> Result<()> {
    match block {
        Block::Section {
            title,
            level,
            newpage,
            starred,
        } => {
            let options = SectionOptions {
                newpage: *newpage,
                starred: *starred,
            };
            report.add_heading(*level, title, options)
        }
        Block::Text { text } => report.add_text(text),
        Block::Equation { content } => report.add_equation(content),
        Block::Table {
            rows,
            header,
            csv,
            csv_header,
            columns,
            caption,
            float,
        } => {
            let mut table = match csv {
                Some(path) => Table::from_csv(base_dir.join(path), *csv_header)?,
                None => Table::new(rows.clone()),
            };
            if let Some(header) = header {
                table.header = Some(header.clone());
            }
            table.columns = columns.clone();
            let style = BlockStyle {
                caption: caption.clone(),
                float: *float,
            };
            report.add_table(&table, &style)
        }
        Block::Figure {
            image,
            dpi,
            name,
            format,
            width_ratio,
            height_ratio,
            width,
            height,
            force,
            caption,
            float,
        } => {
            let size = SizeSpec::from_parts(*width_ratio, *height_ratio, *width, *height)?;
            let image_path = base_dir.join(image);
            let dpi = dpi.unwrap_or(DEFAULT_IMAGE_DPI);

            let mut request =
                FigureRequest::deferred(move || ImageFigure::open(&image_path, dpi), size)
                    .format(format.as_deref().unwrap_or(IMAGE_FIGURE_FORMAT))
                    .force(*force);
            if let Some(name) = name {
                request = request.name(name.clone());
            }

            let style = BlockStyle {
                caption: caption.clone(),
                float: *float,
            };
            report.add_figure(request, &style)?;
            Ok(())
        }
        Block::Raw { content } => report.add(content),
    }
}
