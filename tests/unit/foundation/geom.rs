use super::*;

fn rect(x: i64, y: i64, w: u32, h: u32) -> PixelRect {
    PixelRect::new(x, y, w, h).unwrap()
}

#[test]
fn rect_rejects_zero_size() {
    assert!(PixelRect::new(0, 0, 0, 5).is_err());
    assert!(PixelRect::new(0, 0, 5, 0).is_err());
    assert!(PixelRect::new(-3, -4, 1, 1).is_ok());
}

#[test]
fn extent_is_min_over_origins_and_max_over_far_edges() {
    let extent = GlobalExtent::from_rois([
        rect(0, 0, 100, 50),
        rect(100, 0, 100, 50),
        rect(-20, 50, 60, 30),
    ])
    .unwrap();

    assert_eq!(extent.min_x, -20);
    assert_eq!(extent.max_x, 200);
    assert_eq!(extent.min_y, 0);
    assert_eq!(extent.max_y, 80);
    assert_eq!(extent.width(), 220);
    assert_eq!(extent.height(), 80);
}

#[test]
fn extent_of_single_rect_is_the_rect() {
    let extent = GlobalExtent::from_rois([rect(7, -3, 10, 20)]).unwrap();
    assert_eq!(extent.min_x, 7);
    assert_eq!(extent.max_x, 17);
    assert_eq!(extent.min_y, -3);
    assert_eq!(extent.max_y, 17);
}

#[test]
fn empty_set_has_no_extent() {
    let err = GlobalExtent::from_rois([]).unwrap_err();
    assert!(matches!(err, MosaicError::InsufficientInput(_)));
}

#[test]
fn raster_size_round_trips_positive_extents() {
    let extent = GlobalExtent::from_rois([rect(-10, -10, 30, 20)]).unwrap();
    assert_eq!(extent.raster_size().unwrap(), (30, 20));
}

#[test]
fn pixel_type_names_round_trip() {
    for ty in [
        PixelType::Byte,
        PixelType::Int16,
        PixelType::UInt16,
        PixelType::Int32,
        PixelType::UInt32,
        PixelType::Float32,
        PixelType::Float64,
    ] {
        assert_eq!(ty.gdal_name().parse::<PixelType>().unwrap(), ty);
    }
}

#[test]
fn unknown_pixel_type_is_malformed() {
    let err = "Complex64".parse::<PixelType>().unwrap_err();
    assert!(matches!(err, MosaicError::MalformedConfig(_)));
}
