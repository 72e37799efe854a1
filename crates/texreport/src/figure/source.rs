//! Renderable figures and how they are supplied

use crate::types::*;
use std::path::Path;

/// Something that can be resized and written to disk, such as a plot.
pub trait Renderable {
    /// Native `(width, height)` in inches, before any scaling
    fn size_inches(&self) -> (f64, f64);

    /// Resize to the given physical size
    fn set_size_inches(&mut self, width: f64, height: f64);

    /// Write to `path` encoded as `format` (a file extension such as `png`)
    fn save(&mut self, path: &Path, format: &str) -> Result<()>;
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn size_inches(&self) -> (f64, f64) {
        (**self).size_inches()
    }

    fn set_size_inches(&mut self, width: f64, height: f64) {
        (**self).set_size_inches(width, height)
    }

    fn save(&mut self, path: &Path, format: &str) -> Result<()> {
        (**self).save(path, format)
    }
}

/// Where a figure comes from.
///
/// A deferred supplier only runs when the figure actually has to be
/// rendered, so expensive figures cost nothing on a cache hit.
pub enum FigureSource<'a, R> {
    Prebuilt(R),
    Deferred(Box<dyn FnOnce() -> Result<R> + 'a>),
}

impl<'a, R> FigureSource<'a, R> {
    pub fn deferred(supplier: impl FnOnce() -> Result<R> + 'a) -> Self {
        FigureSource::Deferred(Box::new(supplier))
    }

    /// Produce the renderable, running the supplier if there is one
    pub fn resolve(self) -> Result<R> {
        match self {
            FigureSource::Prebuilt(figure) => Ok(figure),
            FigureSource::Deferred(supplier) => supplier(),
        }
    }
}
