//! Physical lengths and unit conversion
//!
//! Every conversion goes through inches, so converting A → B → C agrees
//! with A → C up to floating-point error. Only `pt` depends on the stored
//! resolution.

use crate::constants::*;
use crate::types::*;
use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

/// Recognized length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Points, `resolution` per inch
    Pt,
    In,
    Cm,
    Mm,
    M,
}

impl Unit {
    pub const ALL: [Unit; 5] = [Unit::Pt, Unit::In, Unit::Cm, Unit::Mm, Unit::M];

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Pt => "pt",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::M => "m",
        }
    }

    /// How many of this unit make up one inch
    pub fn per_inch(self, resolution: f64) -> f64 {
        match self {
            Unit::Pt => resolution,
            Unit::In => 1.0,
            Unit::Cm => CM_PER_INCH,
            Unit::Mm => MM_PER_INCH,
            Unit::M => M_PER_INCH,
        }
    }
}

impl FromStr for Unit {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pt" => Ok(Unit::Pt),
            "in" => Ok(Unit::In),
            "cm" => Ok(Unit::Cm),
            "mm" => Ok(Unit::Mm),
            "m" => Ok(Unit::M),
            other => Err(ConfigError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable physical length.
///
/// `resolution` is the number of points per inch and only matters when
/// converting to or from [`Unit::Pt`].
#[derive(Debug, Clone, Copy)]
pub struct Length {
    value: f64,
    unit: Unit,
    resolution: f64,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value,
            unit,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    pub fn pt(value: f64) -> Self {
        Self::new(value, Unit::Pt)
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::In)
    }

    pub fn cm(value: f64) -> Self {
        Self::new(value, Unit::Cm)
    }

    pub fn mm(value: f64) -> Self {
        Self::new(value, Unit::Mm)
    }

    /// Same value and unit with a different `pt` resolution
    pub fn with_resolution(self, resolution: f64) -> Self {
        Self { resolution, ..self }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Value of this length expressed in `unit`
    pub fn value_in(&self, unit: Unit) -> f64 {
        let inches = self.value / self.unit.per_inch(self.resolution);
        inches * unit.per_inch(self.resolution)
    }

    /// Convert to `unit`, keeping the resolution
    pub fn convert_to(&self, unit: Unit) -> Self {
        Self {
            value: self.value_in(unit),
            unit,
            resolution: self.resolution,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            value: self.value * factor,
            ..*self
        }
    }

    /// Compare inch values with a relative tolerance:
    /// `|a - b| <= tolerance * (|a| + |b|) / 2`
    pub fn approx_eq(&self, other: &Length, tolerance: f64) -> bool {
        almost_equal(self.value_in(Unit::In), other.value_in(Unit::In), tolerance)
    }
}

pub(crate) fn almost_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= (a.abs() + b.abs()) / 2.0 * tolerance
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, LENGTH_TOLERANCE)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, factor: f64) -> Length {
        self.scale(factor)
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, length: Length) -> Length {
        length.scale(self)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, divisor: f64) -> Length {
        self.scale(1.0 / divisor)
    }
}

impl FromStr for Length {
    type Err = ConfigError;

    /// Parse strings like `2cm`, ` 0.5 in ` or `-3pt`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let number = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        let unit: Unit = s[number.len()..].trim().parse()?;
        let value = number
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidLength(s.to_string()))?;
        Ok(Length::new(value, unit))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Length {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Length {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_almost_equal_is_relative() {
        assert!(almost_equal(1e6, 1e6 + 1e-3, 1e-8));
        assert!(!almost_equal(1.0, 1.001, 1e-8));
        assert!(almost_equal(0.0, 0.0, 1e-8));
    }

    #[test]
    fn test_parse_splits_number_and_unit() {
        let length: Length = " 12.5 mm ".parse().unwrap();
        assert_eq!(length.value(), 12.5);
        assert_eq!(length.unit(), Unit::Mm);
        assert_eq!(length.resolution(), DEFAULT_RESOLUTION);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "3furlong".parse::<Length>().unwrap_err(),
            ConfigError::UnknownUnit("furlong".to_string())
        );
        assert!(matches!(
            "abcm".parse::<Length>(),
            Err(ConfigError::UnknownUnit(_))
        ));
        assert!(matches!(
            "1.2.3cm".parse::<Length>(),
            Err(ConfigError::InvalidLength(_))
        ));
        assert!(matches!("42".parse::<Length>(), Err(ConfigError::UnknownUnit(_))));
    }
}
