use texreport::*;

#[test]
fn test_a4_portrait_content_area() {
    let margins = PageMargins::uniform(Length::cm(2.0));
    let geometry = PageGeometry::parse("a4paper", "portrait", margins).unwrap();

    let width = geometry.content_width();
    assert_eq!(width.unit(), Unit::Pt);
    assert_eq!(width, Length::cm(17.0));
    assert_eq!(geometry.content_height(), Length::cm(25.7));
}

#[test]
fn test_landscape_swaps_paper_dimensions() {
    let margins = PageMargins {
        left: Length::cm(1.0),
        right: Length::cm(2.0),
        top: Length::mm(15.0),
        bottom: Length::inches(1.0),
    };
    let geometry = PageGeometry::new(PaperSize::A4, Orientation::Landscape, margins);

    assert_eq!(geometry.content_width(), Length::cm(29.7 - 3.0));
    assert_eq!(geometry.content_height(), Length::cm(21.0 - 1.5 - 2.54));
}

#[test]
fn test_mixed_margin_units() {
    let margins = PageMargins {
        left: Length::pt(72.0),
        right: Length::inches(1.0),
        top: Length::cm(2.54),
        bottom: Length::mm(25.4),
    };
    let geometry = PageGeometry::new(PaperSize::Letter, Orientation::Portrait, margins);
    assert_eq!(geometry.content_width(), Length::cm(21.59 - 5.08));
    assert_eq!(geometry.content_height(), Length::cm(27.94 - 5.08));
}

#[test]
fn test_paper_size_table() {
    assert_eq!(PaperSize::A4.dimensions_cm(), (21.0, 29.7));
    assert_eq!(PaperSize::B0.dimensions_cm(), (100.0, 129.7));
    assert_eq!(PaperSize::Executive.dimensions_cm(), (18.41, 26.6));
    for size in PaperSize::ALL {
        assert_eq!(size.latex_name().parse::<PaperSize>().unwrap(), size);
        let (w, h) = size.dimensions_cm();
        assert!(w < h, "{size} should be portrait");
    }
}

#[test]
fn test_unknown_tokens_fail_at_construction() {
    let margins = PageMargins::default();
    match PageGeometry::parse("a9paper", "portrait", margins) {
        Err(ReportError::Config(ConfigError::UnknownPaperSize(name))) => {
            assert_eq!(name, "a9paper");
        }
        _ => panic!("Expected unknown paper size"),
    }
    match PageGeometry::parse("a4paper", "landsacpe", margins) {
        Err(ReportError::Config(ConfigError::UnknownOrientation(name))) => {
            assert_eq!(name, "landsacpe");
        }
        _ => panic!("Expected unknown orientation"),
    }
}

#[test]
fn test_geometry_resolution() {
    let mut geometry = PageGeometry::default();
    geometry.resolution = 144.0;
    let width = geometry.content_width();
    assert_eq!(width.resolution(), 144.0);
    assert_eq!(width, Length::cm(17.0));
    assert!((width.value() - 2.0 * PageGeometry::default().content_width().value()).abs() < 1e-9);
}
