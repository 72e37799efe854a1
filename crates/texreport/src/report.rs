//! Incremental report writer

use crate::figure::{FigureReference, FigureRequest, FigureSizer, NameSource, Renderable};
use crate::geometry::PageGeometry;
use crate::options::ReportOptions;
use crate::table::Table;
use crate::template::*;
use crate::types::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A LaTeX report being written block by block.
///
/// The head is written on creation and the tail on [`Report::close`].
/// Figures are rendered into the `figures` subdirectory of the working
/// directory and referenced relative to it.
pub struct Report {
    out: BufWriter<File>,
    tex_path: PathBuf,
    working_dir: PathBuf,
    sizer: FigureSizer,
    template: Box<dyn Template>,
}

impl Report {
    pub fn create(options: ReportOptions) -> Result<Self> {
        Self::create_with(options, StandardTemplate)
    }

    /// Create a report rendered with a custom template
    pub fn create_with(options: ReportOptions, template: impl Template + 'static) -> Result<Self> {
        options.validate()?;

        let figure_dir = options.figure_dir();
        std::fs::create_dir_all(&options.working_dir)?;
        std::fs::create_dir_all(&figure_dir)?;

        let tex_path = options.tex_path();
        let mut out = BufWriter::new(File::create(&tex_path)?);
        out.write_all(template.head(&options, &options.resolved_date()).as_bytes())?;
        log::debug!("started report {}", tex_path.display());

        Ok(Self {
            out,
            tex_path,
            working_dir: options.working_dir.clone(),
            sizer: FigureSizer::new(options.geometry(), figure_dir),
            template: Box::new(template),
        })
    }

    pub fn tex_path(&self) -> &Path {
        &self.tex_path
    }

    pub fn geometry(&self) -> &PageGeometry {
        self.sizer.geometry()
    }

    /// Re-render every figure, ignoring cached files
    pub fn set_force_all(&mut self, force_all: bool) {
        self.sizer.set_force_all(force_all);
    }

    /// Replace the source of names for unnamed figures
    pub fn set_name_source(&mut self, names: impl NameSource + 'static) {
        self.sizer.set_names(names);
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    pub fn add_section(&mut self, title: &str, options: SectionOptions) -> Result<()> {
        self.add_heading(SectionLevel::Section, title, options)
    }

    pub fn add_subsection(&mut self, title: &str, options: SectionOptions) -> Result<()> {
        self.add_heading(SectionLevel::Subsection, title, options)
    }

    pub fn add_subsubsection(&mut self, title: &str, options: SectionOptions) -> Result<()> {
        self.add_heading(SectionLevel::Subsubsection, title, options)
    }

    pub fn add_heading(
        &mut self,
        level: SectionLevel,
        title: &str,
        options: SectionOptions,
    ) -> Result<()> {
        let block = self.template.section(level, title, options);
        self.write(&block)
    }

    /// Add plain text, followed by a newline
    pub fn add_text(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    pub fn add_equation(&mut self, content: &str) -> Result<()> {
        let block = self.template.equation(content);
        self.write(&block)
    }

    pub fn add_table(&mut self, table: &Table, style: &BlockStyle) -> Result<()> {
        table.validate()?;
        let block = self.template.table(table, style);
        self.write(&block)
    }

    /// Size and render a figure and add its markup
    pub fn add_figure<R: Renderable>(
        &mut self,
        request: FigureRequest<'_, R>,
        style: &BlockStyle,
    ) -> Result<FigureReference> {
        let (block, reference) = self.make_figure(request, style)?;
        self.write(&block)?;
        Ok(reference)
    }

    /// Size and render a figure, returning its markup without adding it
    pub fn make_figure<R: Renderable>(
        &mut self,
        request: FigureRequest<'_, R>,
        style: &BlockStyle,
    ) -> Result<(String, FigureReference)> {
        let reference = self.sizer.place(request)?;
        let relative = FigureReference {
            path: reference
                .path
                .strip_prefix(&self.working_dir)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| reference.path.clone()),
            ..reference.clone()
        };
        Ok((self.template.figure(&relative, style), reference))
    }

    /// Add a prebuilt block verbatim, newline terminated
    pub fn add(&mut self, block: &str) -> Result<()> {
        self.write(block)?;
        if !block.ends_with('\n') {
            self.write("\n")?;
        }
        Ok(())
    }

    /// Add several prebuilt blocks, one per line
    pub fn add_all<I>(&mut self, blocks: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let joined = blocks
            .into_iter()
            .map(|block| block.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.write(&joined)?;
        self.write("\n")
    }

    /// Write the tail and flush. Returns the path of the `.tex` file.
    pub fn close(mut self) -> Result<PathBuf> {
        let tail = self.template.tail();
        self.write(&tail)?;
        self.out.flush()?;
        log::info!("wrote report {}", self.tex_path.display());
        Ok(self.tex_path)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }
}
