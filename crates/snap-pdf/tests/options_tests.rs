use snap_pdf::*;

#[test]
fn test_defaults() {
    let options = GenerateOptions::default();
    assert_eq!(options.output_name, "snapToPDF");
    assert_eq!(options.file_name(), "snapToPDF.pdf");
    assert_eq!(options.quality.value(), 0.75);
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
}

#[test]
fn test_file_name_uses_name_verbatim() {
    let options = GenerateOptions {
        output_name: "Trip to Lisbon (day 2)".to_string(),
        ..Default::default()
    };
    assert_eq!(options.file_name(), "Trip to Lisbon (day 2).pdf");
}

#[test]
fn test_validation_rejects_bad_names() {
    let mut options = GenerateOptions::default();
    assert!(options.validate().is_ok());

    options.output_name = String::new();
    match options.validate() {
        Err(SnapError::Config(msg)) => assert!(msg.contains("empty")),
        _ => panic!("Expected Config error"),
    }

    options.output_name = "../escape".to_string();
    assert!(options.validate().is_err());

    options.output_name = "dir\\name".to_string();
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_rejects_degenerate_paper() {
    let options = GenerateOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 100.0,
        },
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_page_size_applies_orientation() {
    let mut options = GenerateOptions::default();
    let portrait = options.page_size();
    assert!((portrait.width_pt - 595.2756).abs() < 0.01);
    assert!((portrait.height_pt - 841.8898).abs() < 0.01);

    options.orientation = Orientation::Landscape;
    let landscape = options.page_size();
    assert_eq!(landscape.width_pt, portrait.height_pt);
    assert_eq!(landscape.height_pt, portrait.width_pt);
}

#[test]
fn test_quality_snaps_to_steps() {
    assert_eq!(Quality::new(0.34).value(), 0.3);
    assert_eq!(Quality::new(0.36).value(), 0.4);
    assert_eq!(Quality::new(1.0).value(), 1.0);
    assert_eq!(Quality::new(0.1).value(), 0.1);
}

#[test]
fn test_quality_clamps() {
    assert_eq!(Quality::new(0.0).value(), 0.1);
    assert_eq!(Quality::new(-3.0).value(), 0.1);
    assert_eq!(Quality::new(7.0).value(), 1.0);
    assert_eq!(Quality::new(f32::NAN), Quality::default());
}

#[test]
fn test_quality_default_survives_construction() {
    assert_eq!(Quality::new(0.75), Quality::default());
    assert_eq!(Quality::default().jpeg_quality(), 75);
    assert_eq!(Quality::new(0.1).jpeg_quality(), 10);
    assert_eq!(Quality::new(1.0).jpeg_quality(), 100);
}

#[test]
fn test_every_step_is_reachable() {
    for tenth in 1..=10 {
        let quality = Quality::new(tenth as f32 / 10.0);
        assert_eq!(quality.percent(), tenth * 10);
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = GenerateOptions {
        quality: Quality::new(0.4),
        output_name: "scans".to_string(),
        paper_size: PaperSize::Custom {
            width_mm: 100.0,
            height_mm: 150.0,
        },
        orientation: Orientation::Landscape,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = GenerateOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_fills_missing_fields_with_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "output_name": "partial" }"#).unwrap();

    let loaded = GenerateOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.output_name, "partial");
    assert_eq!(loaded.quality, Quality::default());
    assert_eq!(loaded.paper_size, PaperSize::A4);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_json() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    match GenerateOptions::load(temp_file.path()).await {
        Err(SnapError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}
