//! Figure sizing and render caching
//!
//! A figure request is handled in four steps:
//! 1. Resolve the requested size against the page geometry
//! 2. Decide whether a file rendered under the same name can be reused
//! 3. On a miss, build the figure, scale it uniformly and write it out
//! 4. Hand back a reference the markup layer can emit verbatim

mod names;
mod size;
mod source;

pub use names::{NameSource, RandomNames};
pub use size::{Dimension, SizeSpec};
pub use source::{FigureSource, Renderable};

use crate::constants::{DEFAULT_FIGURE_FORMAT, RENDER_RESOLUTION_FACTOR};
use crate::geometry::PageGeometry;
use crate::length::{Length, Unit};
use crate::types::*;
use std::path::{Path, PathBuf};

/// A single figure insertion
pub struct FigureRequest<'a, R> {
    pub source: FigureSource<'a, R>,
    pub size: SizeSpec,
    /// Output format, used as the file extension
    pub format: String,
    /// Cache key. Unnamed figures get a fresh name and are always rendered.
    pub name: Option<String>,
    /// Render even if a file with this name exists
    pub force: bool,
    /// Runs once after an actual render, never on a cache hit
    pub after_render: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a, R> FigureRequest<'a, R> {
    pub fn new(source: FigureSource<'a, R>, size: SizeSpec) -> Self {
        Self {
            source,
            size,
            format: DEFAULT_FIGURE_FORMAT.to_string(),
            name: None,
            force: false,
            after_render: None,
        }
    }

    pub fn prebuilt(figure: R, size: SizeSpec) -> Self {
        Self::new(FigureSource::Prebuilt(figure), size)
    }

    pub fn deferred(supplier: impl FnOnce() -> Result<R> + 'a, size: SizeSpec) -> Self {
        Self::new(FigureSource::deferred(supplier), size)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn after_render(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.after_render = Some(Box::new(hook));
        self
    }
}

/// Where a figure landed and how large it should be displayed
#[derive(Debug, Clone, PartialEq)]
pub struct FigureReference {
    pub path: PathBuf,
    pub dimension: Dimension,
    pub size: Length,
    /// Scale applied to the native figure, if it was rendered this time
    pub scale: Option<f64>,
}

impl FigureReference {
    pub fn rendered(&self) -> bool {
        self.scale.is_some()
    }
}

/// Sizes figures for one page geometry and caches renders in one directory.
pub struct FigureSizer {
    geometry: PageGeometry,
    figure_dir: PathBuf,
    force_all: bool,
    names: Box<dyn NameSource>,
}

impl FigureSizer {
    pub fn new(geometry: PageGeometry, figure_dir: impl Into<PathBuf>) -> Self {
        Self {
            geometry,
            figure_dir: figure_dir.into(),
            force_all: false,
            names: Box::new(RandomNames),
        }
    }

    /// Replace the source of names for unnamed figures
    pub fn set_names(&mut self, names: impl NameSource + 'static) {
        self.names = Box::new(names);
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn figure_dir(&self) -> &Path {
        &self.figure_dir
    }

    /// Re-render every figure regardless of existing files
    pub fn set_force_all(&mut self, force_all: bool) {
        self.force_all = force_all;
    }

    pub fn force_all(&self) -> bool {
        self.force_all
    }

    /// Destination file for a figure name and format
    pub fn figure_path(&self, name: &str, format: &str) -> PathBuf {
        self.figure_dir
            .join(format!("{}.{}", name, normalize_format(format)))
    }

    /// Size, and if needed render, one figure.
    ///
    /// On a cache hit the returned reference still carries the size of this
    /// request, even though the file on disk holds whatever was last
    /// rendered under the same name.
    pub fn place<R: Renderable>(&mut self, request: FigureRequest<'_, R>) -> Result<FigureReference> {
        let FigureRequest {
            source,
            size,
            format,
            name,
            force,
            after_render,
        } = request;

        size.validate()?;
        let dimension = size.dimension();
        let target = size.target(&self.geometry);
        let name = match name {
            Some(name) => name,
            None => self.names.fresh_name()?,
        };
        let format = normalize_format(&format).to_string();
        if format.is_empty() {
            return Err(ConfigError::Invalid("figure format must not be empty".to_string()).into());
        }
        let path = self.figure_path(&name, &format);

        if path.exists() && !force && !self.force_all {
            log::debug!("reusing cached figure {} ({}={})", path.display(), dimension, target);
            return Ok(FigureReference {
                path,
                dimension,
                size: target,
                scale: None,
            });
        }

        let mut figure = source.resolve()?;
        let scale = render_scale(&figure, dimension, target)?;
        let (width, height) = figure.size_inches();
        figure.set_size_inches(width * scale, height * scale);

        log::info!("writing figure: {}", path.display());
        figure.save(&path, &format)?;
        if let Some(hook) = after_render {
            hook();
        }

        Ok(FigureReference {
            path,
            dimension,
            size: target,
            scale: Some(scale),
        })
    }
}

/// Uniform scale that brings the figure's pinned axis to `target`.
///
/// The target is read at [`RENDER_RESOLUTION_FACTOR`] times its own
/// resolution, so point-sized targets come out slightly larger than nominal
/// whatever resolution they were expressed at.
pub fn render_scale<R: Renderable + ?Sized>(
    figure: &R,
    dimension: Dimension,
    target: Length,
) -> Result<f64> {
    let native = dimension.select(figure.size_inches());
    if native <= 0.0 || !native.is_finite() {
        return Err(ReportError::Render(format!(
            "figure reports a native {} of {} inches",
            dimension, native
        )));
    }
    let target_in = target
        .with_resolution(target.resolution() * RENDER_RESOLUTION_FACTOR)
        .value_in(Unit::In);
    if target_in <= 0.0 || !target_in.is_finite() {
        return Err(ConfigError::Invalid(format!("figure {} must be positive, got {}", dimension, target)).into());
    }
    Ok(target_in / native)
}

fn normalize_format(format: &str) -> &str {
    format.trim_matches(|c: char| c == ' ' || c == '.')
}
