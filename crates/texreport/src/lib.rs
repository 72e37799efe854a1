pub mod constants;
pub mod figure;
mod geometry;
mod image_figure;
mod length;
#[cfg(feature = "serde")]
mod manifest;
mod options;
mod report;
mod table;
pub mod template;
mod typeset;
mod types;

pub use figure::{
    Dimension, FigureReference, FigureRequest, FigureSizer, FigureSource, NameSource,
    RandomNames, Renderable, SizeSpec,
};
pub use geometry::*;
pub use image_figure::ImageFigure;
pub use length::{Length, Unit};
#[cfg(feature = "serde")]
pub use manifest::{Block, ReportManifest};
pub use options::*;
pub use report::Report;
pub use table::Table;
pub use template::{BlockStyle, SectionLevel, SectionOptions, StandardTemplate, Template};
pub use typeset::{PDFLATEX, build_pdf, build_with};
pub use types::*;
