//! Shared constants for report generation
//!
//! This module centralizes the magic numbers used by unit conversion
//! and figure sizing.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Default resolution of the `pt` unit (points per inch)
pub const DEFAULT_RESOLUTION: f64 = 72.0;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Meters per inch
pub const M_PER_INCH: f64 = 0.0254;

/// Default relative tolerance for length comparisons
pub const LENGTH_TOLERANCE: f64 = 1e-8;

// =============================================================================
// Figures
// =============================================================================

/// Factor applied to a target's resolution when converting it to inches
/// before rendering. Below 1 so figures are drawn a bit larger and then
/// shrunk by LaTeX, which keeps plot fonts from looking heavier than the text.
pub const RENDER_RESOLUTION_FACTOR: f64 = 0.9;

/// Largest raster figure, in pixels, an image renderable will resample to
pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;

/// Length of generated figure names
pub const GENERATED_NAME_LEN: usize = 30;

/// Subdirectory of the working directory that holds rendered figures
pub const FIGURE_DIR: &str = "figures";

/// Default figure output format
pub const DEFAULT_FIGURE_FORMAT: &str = "pdf";

/// Default resolution of raster figures without their own (pixels per inch)
pub const DEFAULT_IMAGE_DPI: f64 = 300.0;
