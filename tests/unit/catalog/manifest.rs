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

#[test]
fn lines_resolve_against_manifest_directory() {
    let tmp = temp_dir("manifest_resolve");
    std::fs::create_dir_all(&tmp).unwrap();
    let manifest = tmp.join("tiles.txt");
    std::fs::write(&manifest, "t1/config.json\nt2/config.json\n").unwrap();

    let tiles = read_manifest(&manifest).unwrap();
    assert_eq!(
        tiles,
        vec![tmp.join("t1/config.json"), tmp.join("t2/config.json")]
    );

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn lines_are_trimmed_and_blank_lines_skipped() {
    let tmp = temp_dir("manifest_trim");
    std::fs::create_dir_all(&tmp).unwrap();
    let manifest = tmp.join("tiles.txt");
    std::fs::write(&manifest, "  t1/config.json  \n\n   \nt2/config.json").unwrap();

    let tiles = read_manifest(&manifest).unwrap();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[0], tmp.join("t1/config.json"));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn order_is_preserved() {
    let tmp = temp_dir("manifest_order");
    std::fs::create_dir_all(&tmp).unwrap();
    let manifest = tmp.join("tiles.txt");
    std::fs::write(&manifest, "z.json\na.json\nm.json\n").unwrap();

    let tiles = read_manifest(&manifest).unwrap();
    let names: Vec<_> = tiles
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["z.json", "a.json", "m.json"]);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn unreadable_manifest_is_a_parse_error() {
    let err = read_manifest(Path::new("/nonexistent/tiles.txt")).unwrap_err();
    assert!(matches!(err, MosaicError::Parse(_)));
}

#[test]
fn missing_entries_are_not_checked_here() {
    let tmp = temp_dir("manifest_no_check");
    std::fs::create_dir_all(&tmp).unwrap();
    let manifest = tmp.join("tiles.txt");
    std::fs::write(&manifest, "does/not/exist.json\n").unwrap();

    assert_eq!(read_manifest(&manifest).unwrap().len(), 1);

    std::fs::remove_dir_all(&tmp).ok();
}
