use texreport::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_round_trip_through_every_unit_pair() {
    for value in [0.0, 1.0, 2.5, -3.75, 1234.5678] {
        for from in Unit::ALL {
            for to in Unit::ALL {
                let length: Length = format!("{value}{from}").parse().unwrap();
                let back = length.convert_to(to).convert_to(from);
                assert_eq!(back.unit(), from);
                assert_close(back.value(), value);
            }
        }
    }
}

#[test]
fn test_known_conversions() {
    assert_close(Length::inches(1.0).value_in(Unit::Cm), 2.54);
    assert_close(Length::new(1.0, Unit::M).value_in(Unit::Cm), 100.0);
    assert_close(Length::pt(72.0).value_in(Unit::In), 1.0);
    assert_close(Length::cm(1.0).value_in(Unit::Mm), 10.0);
}

#[test]
fn test_pt_honours_resolution_both_ways() {
    let length = Length::pt(144.0).with_resolution(144.0);
    assert_close(length.value_in(Unit::In), 1.0);

    let pt = Length::inches(2.0).with_resolution(100.0).convert_to(Unit::Pt);
    assert_close(pt.value(), 200.0);
    assert_eq!(pt.resolution(), 100.0);
    assert_close(pt.value_in(Unit::In), 2.0);
}

#[test]
fn test_transitive_conversion() {
    let length = Length::new(0.37, Unit::M);
    let direct = length.convert_to(Unit::Pt);
    let via = length.convert_to(Unit::Mm).convert_to(Unit::In).convert_to(Unit::Pt);
    assert_close(via.value(), direct.value());
}

#[test]
fn test_equality_is_tolerant_and_symmetric() {
    assert_eq!(Length::mm(10.0), Length::cm(1.0));
    assert_eq!(Length::cm(1.0), Length::mm(10.0));
    assert_eq!(Length::inches(1.0), Length::pt(72.0));
    assert_ne!(Length::cm(1.0), Length::cm(1.001));
    assert!(Length::cm(1.0).approx_eq(&Length::cm(1.001), 1e-2));
}

#[test]
fn test_scaling_keeps_unit_and_resolution() {
    let length = Length::pt(10.0).with_resolution(96.0);
    for scaled in [length.scale(2.5), length * 2.5, 2.5 * length] {
        assert_eq!(scaled.value(), 25.0);
        assert_eq!(scaled.unit(), Unit::Pt);
        assert_eq!(scaled.resolution(), 96.0);
    }
    assert_eq!((length / 4.0).value(), 2.5);
}

#[test]
fn test_conversion_does_not_mutate() {
    let length = Length::cm(3.0);
    let _ = length.convert_to(Unit::In);
    assert_eq!(length.value(), 3.0);
    assert_eq!(length.unit(), Unit::Cm);
}

#[test]
fn test_parse_and_display() {
    let length: Length = "  2 cm".parse().unwrap();
    assert_eq!(length, Length::cm(2.0));
    assert_eq!(length.to_string(), "2cm");
    assert_eq!(Length::pt(387.5).to_string(), "387.5pt");
    assert_eq!("-0.5in".parse::<Length>().unwrap().value(), -0.5);
}

#[test]
fn test_parse_errors_are_config_errors() {
    let err = "12parsec".parse::<Length>().unwrap_err();
    assert_eq!(err, ConfigError::UnknownUnit("parsec".to_string()));
    let err: ReportError = "x.ycm".parse::<Length>().unwrap_err().into();
    assert!(err.is_config());
    assert!("cm".parse::<Unit>().is_ok());
    assert!("CM".parse::<Unit>().is_err());
}
