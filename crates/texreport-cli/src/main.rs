use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use texreport::{Length, PageGeometry, PageMargins, ReportManifest, Unit};

#[derive(Parser)]
#[command(name = "texr", about = "LaTeX report builder", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a length to another unit
    Convert {
        /// Length with unit, e.g. "2.5cm"
        length: String,

        /// Target unit
        #[arg(long, value_enum)]
        to: UnitArg,

        /// Points per inch for the pt unit
        #[arg(long, default_value = "72")]
        resolution: f64,
    },

    /// Show the content area of a page
    Geometry {
        /// Paper size, e.g. a4paper or letterpaper
        #[arg(long, default_value = "a4paper")]
        paper: String,

        /// Page orientation
        #[arg(long, default_value = "portrait")]
        orientation: String,

        /// Margin on all sides
        #[arg(long, default_value = "2cm")]
        margin: String,

        /// Left margin (overrides --margin)
        #[arg(long)]
        left: Option<String>,

        /// Right margin (overrides --margin)
        #[arg(long)]
        right: Option<String>,

        /// Top margin (overrides --margin)
        #[arg(long)]
        top: Option<String>,

        /// Bottom margin (overrides --margin)
        #[arg(long)]
        bottom: Option<String>,

        /// Unit to report the content area in
        #[arg(long, default_value = "pt", value_enum)]
        unit: UnitArg,
    },

    /// Write a report described by a JSON manifest
    Build {
        /// Manifest file
        manifest: PathBuf,

        /// Re-render every figure, ignoring cached files
        #[arg(long)]
        force_all: bool,

        /// Run pdflatex on the result
        #[arg(long)]
        pdf: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Pt,
    In,
    Cm,
    Mm,
    M,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Pt => Self::Pt,
            UnitArg::In => Self::In,
            UnitArg::Cm => Self::Cm,
            UnitArg::Mm => Self::Mm,
            UnitArg::M => Self::M,
        }
    }
}

fn parse_length(text: &str) -> Result<Length> {
    text.parse::<Length>()
        .with_context(|| format!("invalid length {:?}", text))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            length,
            to,
            resolution,
        } => {
            let length = parse_length(&length)?.with_resolution(resolution);
            println!("{}", length.convert_to(to.into()));
        }

        Commands::Geometry {
            paper,
            orientation,
            margin,
            left,
            right,
            top,
            bottom,
            unit,
        } => {
            let margin = parse_length(&margin)?;
            let side = |value: Option<String>| -> Result<Length> {
                value.as_deref().map_or(Ok(margin), parse_length)
            };
            let margins = PageMargins {
                left: side(left)?,
                right: side(right)?,
                top: side(top)?,
                bottom: side(bottom)?,
            };
            let geometry = PageGeometry::parse(&paper, &orientation, margins)?;
            let unit = Unit::from(unit);

            println!("Content area ({} {}):", geometry.paper, geometry.orientation);
            println!("  Width:  {}", geometry.content_width().convert_to(unit));
            println!("  Height: {}", geometry.content_height().convert_to(unit));
        }

        Commands::Build {
            manifest,
            force_all,
            pdf,
        } => {
            let mut report = ReportManifest::load(&manifest)
                .await
                .with_context(|| format!("loading {}", manifest.display()))?;
            report.force_all |= force_all;

            let base_dir = manifest
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            log::debug!("resolving manifest paths against {}", base_dir.display());
            let tex_path = report.render(&base_dir)?;
            println!("Report → {}", tex_path.display());

            if pdf {
                let pdf_path = texreport::build_pdf(&tex_path).await?;
                println!("PDF → {}", pdf_path.display());
            }
        }
    }

    Ok(())
}
