use super::*;
use std::collections::BTreeMap;

/// Probe answering from a fixed table, no raster tooling involved.
struct FakeProbe {
    rasters: BTreeMap<PathBuf, RasterInfo>,
}

impl FakeProbe {
    fn new(rasters: impl IntoIterator<Item = (&'static str, RasterInfo)>) -> Self {
        Self {
            rasters: rasters
                .into_iter()
                .map(|(path, info)| (PathBuf::from(path), info))
                .collect(),
        }
    }
}

impl RasterProbe for FakeProbe {
    fn probe(&self, path: &Path) -> MosaicResult<RasterInfo> {
        self.rasters.get(path).copied().ok_or_else(|| {
            MosaicError::external_tool(format!("no such raster '{}'", path.display()))
        })
    }
}

fn info(width: u32, height: u32, band_count: u32, pixel_type: PixelType) -> RasterInfo {
    RasterInfo {
        width,
        height,
        band_count,
        pixel_type,
    }
}

fn placement(source: &str, dst_x: i64, dst_y: i64) -> DirectPlacement {
    DirectPlacement {
        source: PathBuf::from(source),
        dst_x,
        dst_y,
    }
}

#[test]
fn composite_spans_the_farthest_tile_edges() {
    let probe = FakeProbe::new([
        ("a.tif", info(100, 50, 1, PixelType::Byte)),
        ("b.tif", info(60, 80, 1, PixelType::Byte)),
    ]);

    let descriptor = compose_direct(
        &[placement("a.tif", 0, 0), placement("b.tif", 150, 10)],
        &probe,
        true,
    )
    .unwrap();

    assert_eq!(descriptor.width(), 210);
    assert_eq!(descriptor.height(), 90);
    assert_eq!(descriptor.band_count(), 1);
    assert_eq!(descriptor.pixel_type(), PixelType::Byte);
}

#[test]
fn entries_follow_placement_order_per_band() {
    let probe = FakeProbe::new([
        ("a.tif", info(10, 10, 2, PixelType::UInt16)),
        ("b.tif", info(10, 10, 2, PixelType::UInt16)),
    ]);

    let descriptor = compose_direct(
        &[placement("a.tif", 0, 0), placement("b.tif", 5, 5)],
        &probe,
        true,
    )
    .unwrap();

    assert_eq!(descriptor.band_count(), 2);
    for (idx, band) in descriptor.bands().iter().enumerate() {
        assert_eq!(band.len(), 2);
        assert_eq!(band[0].source_file, "a.tif");
        assert_eq!(band[1].source_file, "b.tif");
        assert!(band.iter().all(|e| e.source_band == idx as u32 + 1));
    }
    assert_eq!(descriptor.bands()[0][1].dst_rect, PixelRect { x: 5, y: 5, w: 10, h: 10 });
}

#[test]
fn band_count_mismatch_is_a_consistency_error() {
    let probe = FakeProbe::new([
        ("a.tif", info(10, 10, 1, PixelType::Byte)),
        ("b.tif", info(10, 10, 3, PixelType::Byte)),
    ]);

    let err = compose_direct(
        &[placement("a.tif", 0, 0), placement("b.tif", 10, 0)],
        &probe,
        true,
    )
    .unwrap_err();
    assert!(matches!(err, MosaicError::Consistency(_)));
}

#[test]
fn pixel_type_mismatch_is_a_consistency_error() {
    let probe = FakeProbe::new([
        ("a.tif", info(10, 10, 1, PixelType::Byte)),
        ("b.tif", info(10, 10, 1, PixelType::Float32)),
    ]);

    let err = compose_direct(
        &[placement("a.tif", 0, 0), placement("b.tif", 10, 0)],
        &probe,
        true,
    )
    .unwrap_err();
    assert!(matches!(err, MosaicError::Consistency(_)));
}

#[test]
fn mismatch_writes_no_output_file() {
    let tmp = std::env::temp_dir().join(format!(
        "vmosaic_direct_no_output_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&tmp).unwrap();
    let out = tmp.join("direct.vrt");

    let probe = FakeProbe::new([
        ("a.tif", info(10, 10, 1, PixelType::Byte)),
        ("b.tif", info(10, 10, 2, PixelType::Byte)),
    ]);

    let err = write_direct(
        &[placement("a.tif", 0, 0), placement("b.tif", 10, 0)],
        &probe,
        &out,
        true,
    )
    .unwrap_err();
    assert!(matches!(err, MosaicError::Consistency(_)));
    assert!(!out.exists());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn empty_placement_list_is_insufficient_input() {
    let probe = FakeProbe::new([]);
    let err = compose_direct(&[], &probe, true).unwrap_err();
    assert!(matches!(err, MosaicError::InsufficientInput(_)));
}

#[test]
fn relative_flag_follows_the_given_path() {
    let probe = FakeProbe::new([
        ("rel.tif", info(10, 10, 1, PixelType::Byte)),
        ("/abs/t.tif", info(10, 10, 1, PixelType::Byte)),
    ]);

    let descriptor = compose_direct(
        &[placement("rel.tif", 0, 0), placement("/abs/t.tif", 10, 0)],
        &probe,
        true,
    )
    .unwrap();

    let band = &descriptor.bands()[0];
    assert!(band[0].relative_to_descriptor);
    assert!(!band[1].relative_to_descriptor);
}
