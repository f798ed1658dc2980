//! End-to-end runs of the atlas pipeline.

use std::path::{Path, PathBuf};

use fontatlas::error::{ConfigError, Error, FontError};
use fontatlas::{Job, run};
use fontatlas_core::{Color, LayoutError};

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    r"C:\Windows\Fonts\arial.ttf",
];

fn system_font() -> Option<PathBuf> {
    let found = CANDIDATES.iter().map(PathBuf::from).find(|p| p.is_file());
    if found.is_none() {
        eprintln!("no system font found, skipping");
    }
    found
}

fn job_in(dir: &Path, font_path: PathBuf) -> Job {
    Job {
        font_size: 12,
        bitmap_width: 512,
        font_path,
        bitmap_path: dir.join("atlas.png"),
        metadata_path: dir.join("atlas.json"),
        color: Color::new(255, 255, 255, 255),
        ..Job::default()
    }
}

#[test]
fn bakes_system_font() {
    let Some(font) = system_font() else { return };
    let dir = tempfile::tempdir().expect("tempdir");
    let job = job_in(dir.path(), font);

    let summary = run(&job).expect("run");
    assert_eq!(summary.width, 512);
    assert!(summary.height.is_power_of_two());
    assert!(summary.glyphs > 50);
    assert!(summary.whitespaces >= 1);

    let png = image::open(&job.bitmap_path).expect("decode png").to_rgba8();
    assert_eq!(png.dimensions(), (summary.width, summary.height));

    let text = std::fs::read_to_string(&job.metadata_path).expect("metadata");
    let doc: serde_json::Value = serde_json::from_str(&text).expect("strict json");
    assert!(doc["lineHeight"].as_i64().is_some_and(|h| h > 0));

    let glyphs = doc["glyphs"].as_array().expect("glyphs");
    assert_eq!(glyphs.len(), summary.glyphs);
    let rect = |g: &serde_json::Value, k: &str| g[k].as_u64().expect("field") as u32;
    for g in glyphs {
        assert!(rect(g, "x") + rect(g, "width") <= summary.width);
        assert!(rect(g, "y") + rect(g, "height") <= summary.height);
    }

    // The space is whitespace only.
    let space = doc["whitespaces"]
        .as_array()
        .expect("whitespaces")
        .iter()
        .find(|w| w["codepoint"] == 32)
        .expect("space listed");
    assert!(space["advance"].as_i64().is_some_and(|a| a > 0));
    assert!(glyphs.iter().all(|g| g["codepoint"] != 32));

    if let Some(pairs) = doc["kerningPairs"].as_array() {
        assert!(pairs.iter().all(|p| p["kerning"] != 0));
    }
}

#[test]
fn repeated_runs_are_identical() {
    let Some(font) = system_font() else { return };
    let a = tempfile::tempdir().expect("tempdir");
    let b = tempfile::tempdir().expect("tempdir");
    run(&job_in(a.path(), font.clone())).expect("first run");
    run(&job_in(b.path(), font)).expect("second run");

    let read = |dir: &Path, name: &str| std::fs::read(dir.join(name)).expect("read");
    assert_eq!(read(a.path(), "atlas.json"), read(b.path(), "atlas.json"));
    assert_eq!(read(a.path(), "atlas.png"), read(b.path(), "atlas.png"));
}

#[test]
fn narrow_atlas_is_rejected() {
    let Some(font) = system_font() else { return };
    let dir = tempfile::tempdir().expect("tempdir");
    let job = Job {
        font_size: 48,
        bitmap_width: 4,
        ..job_in(dir.path(), font)
    };
    let err = run(&job).expect_err("glyphs wider than the atlas");
    assert!(matches!(err, Error::Layout(LayoutError::GlyphTooWide { .. })));
    assert!(!job.bitmap_path.exists(), "no partial output");
}

#[test]
fn missing_font_aborts_before_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let job = job_in(dir.path(), dir.path().join("missing.ttf"));
    let err = run(&job).expect_err("missing font");
    assert!(matches!(err, Error::Font(FontError::Read { .. })));
    assert!(err.to_string().contains("missing.ttf"));
    assert!(!job.bitmap_path.exists());
    assert!(!job.metadata_path.exists());
}

#[test]
fn zero_width_job_is_invalid() {
    let dir = tempfile::tempdir().expect("tempdir");
    let job = Job {
        bitmap_width: 0,
        ..job_in(dir.path(), dir.path().join("any.ttf"))
    };
    assert!(matches!(run(&job), Err(Error::Config(ConfigError::Invalid(_)))));
}
