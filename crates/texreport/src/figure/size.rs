//! Figure size requests

use crate::geometry::PageGeometry;
use crate::length::{Length, Unit};
use crate::types::*;
use std::fmt;

/// Which axis of a figure a size request pins down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    /// The `\includegraphics` key for this axis
    pub fn keyword(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }

    /// Pick this axis out of a `(width, height)` pair
    pub fn select<T>(self, (width, height): (T, T)) -> T {
        match self {
            Dimension::Width => width,
            Dimension::Height => height,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Requested figure size. Exactly one axis is fixed; the other follows
/// from the figure's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeSpec {
    /// Fraction of the content width
    WidthRatio(f64),
    /// Fraction of the content height
    HeightRatio(f64),
    AbsoluteWidth(Length),
    AbsoluteHeight(Length),
}

impl SizeSpec {
    /// Build a size request from optional parts, of which exactly one must
    /// be present.
    pub fn from_parts(
        width_ratio: Option<f64>,
        height_ratio: Option<f64>,
        width: Option<Length>,
        height: Option<Length>,
    ) -> Result<Self> {
        let given = [
            width_ratio.is_some(),
            height_ratio.is_some(),
            width.is_some(),
            height.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count();

        let spec = match (width_ratio, height_ratio, width, height) {
            (Some(ratio), None, None, None) => SizeSpec::WidthRatio(ratio),
            (None, Some(ratio), None, None) => SizeSpec::HeightRatio(ratio),
            (None, None, Some(length), None) => SizeSpec::AbsoluteWidth(length),
            (None, None, None, Some(length)) => SizeSpec::AbsoluteHeight(length),
            _ => return Err(ConfigError::AmbiguousSize { given }.into()),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Ratios and lengths must be positive and finite
    pub fn validate(&self) -> Result<()> {
        let (kind, value) = match *self {
            SizeSpec::WidthRatio(ratio) | SizeSpec::HeightRatio(ratio) => ("ratio", ratio),
            SizeSpec::AbsoluteWidth(length) | SizeSpec::AbsoluteHeight(length) => {
                ("length", length.value_in(Unit::In))
            }
        };
        if value <= 0.0 || !value.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "Figure {} {} must be positive, got {}",
                self.dimension(),
                kind,
                self
            ))
            .into());
        }
        Ok(())
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            SizeSpec::WidthRatio(_) | SizeSpec::AbsoluteWidth(_) => Dimension::Width,
            SizeSpec::HeightRatio(_) | SizeSpec::AbsoluteHeight(_) => Dimension::Height,
        }
    }

    /// Physical size of the pinned axis on the given page
    pub fn target(&self, geometry: &PageGeometry) -> Length {
        match *self {
            SizeSpec::WidthRatio(ratio) => geometry.content_width() * ratio,
            SizeSpec::HeightRatio(ratio) => geometry.content_height() * ratio,
            SizeSpec::AbsoluteWidth(length) | SizeSpec::AbsoluteHeight(length) => length,
        }
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSpec::WidthRatio(ratio) | SizeSpec::HeightRatio(ratio) => write!(f, "{}", ratio),
            SizeSpec::AbsoluteWidth(length) | SizeSpec::AbsoluteHeight(length) => {
                write!(f, "{}", length)
            }
        }
    }
}
