use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "vmosaic_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_config(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn placement_reads_roi_fields() {
    let tmp = temp_dir("tile_roi");
    let cfg = write_config(
        &tmp,
        "t1/config.json",
        r#"{"roi": {"x": -5, "y": 50, "w": 100, "h": 30}, "other": "ignored"}"#,
    );

    let tile = TilePlacement::from_config(&cfg).unwrap();
    assert_eq!(tile.roi, PixelRect { x: -5, y: 50, w: 100, h: 30 });
    assert_eq!(tile.dir(), cfg.parent().unwrap());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_roi_field_is_malformed() {
    let tmp = temp_dir("tile_missing_field");
    let cfg = write_config(&tmp, "c.json", r#"{"roi": {"x": 0, "y": 0, "w": 10}}"#);

    let err = TilePlacement::from_config(&cfg).unwrap_err();
    assert!(matches!(err, MosaicError::MalformedConfig(_)));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn non_numeric_roi_field_is_malformed() {
    let tmp = temp_dir("tile_non_numeric");
    let cfg = write_config(
        &tmp,
        "c.json",
        r#"{"roi": {"x": "left", "y": 0, "w": 10, "h": 10}}"#,
    );

    let err = TilePlacement::from_config(&cfg).unwrap_err();
    assert!(matches!(err, MosaicError::MalformedConfig(_)));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn zero_sized_roi_is_malformed() {
    let tmp = temp_dir("tile_zero_roi");
    let cfg = write_config(&tmp, "c.json", r#"{"roi": {"x": 0, "y": 0, "w": 0, "h": 10}}"#);

    let err = TilePlacement::from_config(&cfg).unwrap_err();
    assert!(matches!(err, MosaicError::MalformedConfig(_)));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn unreadable_config_is_malformed() {
    let err = TilePlacement::from_config("/nonexistent/config.json").unwrap_err();
    assert!(matches!(err, MosaicError::MalformedConfig(_)));
}

#[test]
fn global_extent_covers_all_placements() {
    let tmp = temp_dir("tile_extent");
    let a = write_config(&tmp, "a/c.json", r#"{"roi": {"x": 0, "y": 0, "w": 100, "h": 50}}"#);
    let b = write_config(&tmp, "b/c.json", r#"{"roi": {"x": 100, "y": 50, "w": 100, "h": 30}}"#);

    let placements = load_placements(&[a, b]).unwrap();
    let extent = global_extent(&placements).unwrap();
    assert_eq!(extent.min_x, 0);
    assert_eq!(extent.max_x, 200);
    assert_eq!(extent.min_y, 0);
    assert_eq!(extent.max_y, 80);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn empty_placement_set_has_no_extent() {
    let err = global_extent(&[]).unwrap_err();
    assert!(matches!(err, MosaicError::InsufficientInput(_)));
}
