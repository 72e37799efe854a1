//! Page geometry: paper sizes, orientation, margins and the resulting
//! content area.

use crate::constants::DEFAULT_RESOLUTION;
use crate::length::{Length, Unit};
use crate::types::*;
use std::fmt;
use std::str::FromStr;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(ConfigError::UnknownOrientation(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standard paper sizes known to the LaTeX `geometry` package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    B0,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    Letter,
    Legal,
    Executive,
}

impl PaperSize {
    pub const ALL: [PaperSize; 17] = [
        PaperSize::A0,
        PaperSize::A1,
        PaperSize::A2,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::A6,
        PaperSize::B0,
        PaperSize::B1,
        PaperSize::B2,
        PaperSize::B3,
        PaperSize::B4,
        PaperSize::B5,
        PaperSize::B6,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Executive,
    ];

    /// Get base dimensions (always portrait: width < height)
    pub fn dimensions_cm(self) -> (f64, f64) {
        match self {
            PaperSize::A0 => (84.1, 118.9),
            PaperSize::A1 => (59.4, 84.1),
            PaperSize::A2 => (42.0, 59.4),
            PaperSize::A3 => (29.7, 42.0),
            PaperSize::A4 => (21.0, 29.7),
            PaperSize::A5 => (14.8, 21.0),
            PaperSize::A6 => (10.5, 14.8),
            PaperSize::B0 => (100.0, 129.7),
            PaperSize::B1 => (70.7, 100.0),
            PaperSize::B2 => (50.0, 70.7),
            PaperSize::B3 => (35.3, 50.0),
            PaperSize::B4 => (25.0, 35.3),
            PaperSize::B5 => (17.6, 25.0),
            PaperSize::B6 => (12.5, 17.6),
            PaperSize::Letter => (21.59, 27.94),
            PaperSize::Legal => (21.59, 35.56),
            PaperSize::Executive => (18.41, 26.6),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (Length, Length) {
        let (w, h) = self.dimensions_cm();
        let (w, h) = match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        };
        (Length::cm(w), Length::cm(h))
    }

    /// The option name LaTeX expects, e.g. `a4paper`
    pub fn latex_name(self) -> &'static str {
        match self {
            PaperSize::A0 => "a0paper",
            PaperSize::A1 => "a1paper",
            PaperSize::A2 => "a2paper",
            PaperSize::A3 => "a3paper",
            PaperSize::A4 => "a4paper",
            PaperSize::A5 => "a5paper",
            PaperSize::A6 => "a6paper",
            PaperSize::B0 => "b0paper",
            PaperSize::B1 => "b1paper",
            PaperSize::B2 => "b2paper",
            PaperSize::B3 => "b3paper",
            PaperSize::B4 => "b4paper",
            PaperSize::B5 => "b5paper",
            PaperSize::B6 => "b6paper",
            PaperSize::Letter => "letterpaper",
            PaperSize::Legal => "legalpaper",
            PaperSize::Executive => "executivepaper",
        }
    }
}

impl FromStr for PaperSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        PaperSize::ALL
            .into_iter()
            .find(|size| size.latex_name() == s)
            .ok_or_else(|| ConfigError::UnknownPaperSize(s.to_string()))
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.latex_name())
    }
}

/// Page margins
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMargins {
    pub left: Length,
    pub right: Length,
    pub top: Length,
    pub bottom: Length,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::uniform(Length::cm(2.0))
    }
}

impl PageMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin: Length) -> Self {
        Self {
            left: margin,
            right: margin,
            top: margin,
            bottom: margin,
        }
    }
}

/// The printable area of a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub paper: PaperSize,
    pub orientation: Orientation,
    pub margins: PageMargins,
    /// Points per inch of the lengths this geometry reports
    pub resolution: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new(PaperSize::default(), Orientation::default(), PageMargins::default())
    }
}

impl PageGeometry {
    pub fn new(paper: PaperSize, orientation: Orientation, margins: PageMargins) -> Self {
        Self {
            paper,
            orientation,
            margins,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Build a geometry from textual tokens such as `"a4paper"` and
    /// `"portrait"`. Unknown names fail here rather than on first use.
    pub fn parse(paper: &str, orientation: &str, margins: PageMargins) -> Result<Self> {
        Ok(Self::new(paper.parse()?, orientation.parse()?, margins))
    }

    /// Width available for content, in `pt`
    pub fn content_width(&self) -> Length {
        let (paper_width, _) = self.paper.dimensions_with_orientation(self.orientation);
        self.subtract(paper_width, self.margins.left, self.margins.right)
    }

    /// Height available for content, in `pt`
    pub fn content_height(&self) -> Length {
        let (_, paper_height) = self.paper.dimensions_with_orientation(self.orientation);
        self.subtract(paper_height, self.margins.top, self.margins.bottom)
    }

    fn subtract(&self, paper: Length, first: Length, second: Length) -> Length {
        let pt = |length: Length| length.value_in(Unit::In) * self.resolution;
        Length::pt(pt(paper) - pt(first) - pt(second)).with_resolution(self.resolution)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Both enums travel as their LaTeX option tokens
    impl Serialize for PaperSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.latex_name())
        }
    }

    impl<'de> Deserialize<'de> for PaperSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }

    impl Serialize for Orientation {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Orientation {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}
