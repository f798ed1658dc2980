//! Job configuration unit tests.

use std::path::PathBuf;

use fontatlas_core::Color;

use super::*;

#[test]
fn default_job_roundtrip() {
    let job = Job::default();
    let toml_str = job.to_toml().expect("serialize");
    let parsed = Job::from_toml(&toml_str).expect("deserialize");
    assert_eq!(parsed, job);
    assert_eq!(parsed.font_size, FONT_SIZE);
    assert_eq!(parsed.dpi, 96);
    assert_eq!(parsed.color, Color::new(255, 255, 255, 255));
}

#[test]
fn partial_toml_uses_defaults() {
    let toml_str = r#"
font_size = 22
font_path = "Arial.otf"
"#;
    let parsed = Job::from_toml(toml_str).expect("deserialize");
    assert_eq!(parsed.font_size, 22);
    assert_eq!(parsed.font_path, PathBuf::from("Arial.otf"));
    // Other fields should be defaults
    assert_eq!(parsed.bitmap_width, 512);
    assert_eq!(parsed.face_index, 0);
    assert_eq!(parsed.bitmap_path, PathBuf::from("atlas.png"));
}

#[test]
fn empty_toml_gives_defaults() {
    let parsed = Job::from_toml("").expect("deserialize");
    assert_eq!(parsed, Job::default());
}

#[test]
fn color_table_from_toml() {
    let toml_str = r#"
[color]
r = 10
g = 20
b = 30
a = 128
"#;
    let parsed = Job::from_toml(toml_str).expect("deserialize");
    assert_eq!(parsed.color, Color::new(10, 20, 30, 128));
}

#[test]
fn color_channel_out_of_range_is_rejected() {
    let toml_str = r#"
[color]
r = 256
g = 0
b = 0
a = 255
"#;
    assert!(Job::from_toml(toml_str).is_err());
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.toml");
    let err = Job::load(&path).expect_err("missing file");
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn load_reads_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("job.toml");
    std::fs::write(&path, "bitmap_width = 1024\n").expect("write");
    let job = Job::load(&path).expect("load");
    assert_eq!(job.bitmap_width, 1024);
}

#[test]
fn load_reports_parse_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "bitmap_width = \"wide\"\n").expect("write");
    assert!(matches!(Job::load(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn validate_rejects_degenerate_jobs() {
    assert!(Job::default().validate().is_ok());

    let zero_width = Job {
        bitmap_width: 0,
        ..Job::default()
    };
    assert!(zero_width.validate().is_err());

    let zero_size = Job {
        font_size: 0,
        ..Job::default()
    };
    assert!(zero_size.validate().is_err());

    let zero_dpi = Job {
        dpi: 0,
        ..Job::default()
    };
    assert!(zero_dpi.validate().is_err());
}

#[test]
fn pixel_size_uses_96_dpi() {
    let job = Job {
        font_size: 12,
        ..Job::default()
    };
    assert!((job.pixel_size() - 16.0).abs() < f32::EPSILON);
}
