//! # Gallery Config Integration Test
//!
//! Loads the shipped `gallery.toml` through the same path the binary uses.

use face_index::{parse_args, render_walk, CliCommand, GalleryConfig};

fn shipped_config() -> String {
    format!("{}/gallery.toml", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_shipped_config_loads() {
    let config = GalleryConfig::from_file(shipped_config()).unwrap();
    assert_eq!(config.count, 5);
    assert_eq!(config.reference.as_deref(), Some("9a4c80e01f80b36d80802a5f"));

    let gallery = config.gallery().unwrap();
    assert_eq!(gallery.reference().as_str(), "9a4c80e01f80b36d80802a5f");
}

#[test]
fn test_flags_override_config_file() {
    let path = shipped_config();
    let args: Vec<String> = ["--config", path.as_str(), "--count", "2", "--start", "-7"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let CliCommand::Walk(config) = parse_args(&args).unwrap() else {
        panic!("expected a walk");
    };
    assert_eq!(config.count, 2);
    assert_eq!(config.start_index, -7);
    assert_eq!(config.center_x, 150.0);

    let report = render_walk(&config).unwrap();
    assert!(report.starts_with("reference 9a4c80e01f80b36d80802a5f\n"));
    assert!(report.contains("face -7\n"));
    assert!(report.contains("face -6\n"));
    assert!(!report.contains("face -5\n"));
}

#[test]
fn test_report_is_deterministic() {
    let config = GalleryConfig::from_file(shipped_config()).unwrap();
    assert_eq!(render_walk(&config).unwrap(), render_walk(&config).unwrap());
}
