// Host-side tests for formatting, the point repository, the built-in dataset
// and the gallery fallback.

mod common;

use app_core::dataset::driftmap_locations;
use app_core::*;
use common::point;

#[test]
fn readout_uses_two_decimals_and_axis_labels() {
    let (lat, lng) = format_readout(&GeoPoint::new(-34.55, -58.48));
    assert_eq!(lat, "LAT: -34.55°");
    assert_eq!(lng, "LNG: -58.48°");
}

#[test]
fn preview_and_detail_coords_use_four_decimals() {
    let p = GeoPoint::new(-34.4493333, -58.74275);
    assert_eq!(format_preview_coords(&p), "-34.4493° / -58.7428°");
    assert_eq!(format_detail_coords(&p), "LAT -34.4493° // LNG -58.7428°");
}

#[test]
fn positive_coordinates_have_no_sign() {
    let p = GeoPoint::new(10.0, 0.5);
    assert_eq!(format_preview_coords(&p), "10.0000° / 0.5000°");
}

#[test]
fn repository_rejects_duplicate_ids() {
    let err = PointRepository::new(vec![
        point(7, "a", 0.0, 0.0, None),
        point(7, "b", 1.0, 1.0, None),
    ])
    .unwrap_err();
    assert_eq!(err, RepositoryError::DuplicateId(7));
}

#[test]
fn repository_rejects_out_of_range_and_non_finite_positions() {
    for (lat, lng) in [(91.0, 0.0), (0.0, -180.5), (f64::NAN, 0.0), (0.0, f64::INFINITY)] {
        let result = PointRepository::new(vec![point(1, "x", lat, lng, None)]);
        assert!(
            matches!(result, Err(RepositoryError::InvalidPosition { id: 1, .. })),
            "({lat}, {lng}) accepted"
        );
    }
}

#[test]
fn repository_accepts_range_edges() {
    let repo = PointRepository::new(vec![
        point(1, "n", 90.0, 180.0, None),
        point(2, "s", -90.0, -180.0, None),
    ])
    .unwrap();
    assert_eq!(repo.len(), 2);
}

#[test]
fn repository_rejects_empty_image_list() {
    let err = PointRepository::new(vec![point(3, "x", 0.0, 0.0, Some(vec![]))]).unwrap_err();
    assert_eq!(err, RepositoryError::EmptyImages(3));
}

#[test]
fn repository_preserves_order_and_looks_up_by_id() {
    let repo = PointRepository::new(vec![
        point(30, "c", 0.0, 0.0, None),
        point(10, "a", 0.0, 0.0, None),
        point(20, "b", 0.0, 0.0, None),
    ])
    .unwrap();
    let names: Vec<_> = repo.all().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
    assert_eq!(repo.get(20).map(|p| p.name.as_str()), Some("b"));
    assert!(repo.get(40).is_none());
}

#[test]
fn builtin_dataset_is_valid() {
    let repo = PointRepository::new(driftmap_locations()).unwrap();
    assert_eq!(repo.len(), 23);
    assert_eq!(repo.all()[0].name, "Rotondita");
    let with_images = repo.all().iter().filter(|p| p.images.is_some()).count();
    assert_eq!(with_images, 3);
    assert!(repo
        .all()
        .iter()
        .all(|p| p.tags == vec!["underground".to_string(), "urban".to_string()]));
}

#[test]
fn gallery_keeps_local_images() {
    let p = point(1, "x", -34.0, -58.0, Some(vec!["/imgs/a.jpeg", "/imgs/b.jpeg"]));
    let images = StreetLevelGallery::default().images_for(&p);
    assert_eq!(images, vec!["/imgs/a.jpeg", "/imgs/b.jpeg"]);
}

#[test]
fn gallery_synthesizes_four_headings() {
    let gallery = StreetLevelGallery::new("sv?loc={lat},{lng}&h={heading}");
    let missing = point(1, "x", -34.5, -58.25, None);
    let remote = point(2, "y", -34.5, -58.25, Some(vec!["https://cdn.example/a.jpeg"]));

    let expected = vec![
        "sv?loc=-34.5,-58.25&h=0",
        "sv?loc=-34.5,-58.25&h=90",
        "sv?loc=-34.5,-58.25&h=180",
        "sv?loc=-34.5,-58.25&h=270",
    ];
    assert_eq!(gallery.images_for(&missing), expected);
    assert_eq!(gallery.images_for(&remote), expected);
}

#[test]
fn local_address_detection() {
    assert!(is_locally_addressable("/imgs/a.jpeg"));
    assert!(is_locally_addressable("./a.jpeg"));
    assert!(is_locally_addressable("../a.jpeg"));
    assert!(!is_locally_addressable("https://example.com/a.jpeg"));
    assert!(!is_locally_addressable("imgs/a.jpeg"));
}

#[test]
fn camera_pose_lerp_hits_endpoints_and_clamps() {
    let cfg = SequenceConfig::default();
    let (a, b) = (cfg.start_pose, cfg.target_pose);
    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
    assert_eq!(a.lerp(&b, 2.0), b);
    let mid = a.lerp(&b, 0.5);
    assert!((mid.altitude - (a.altitude + b.altitude) / 2.0).abs() < 1e-9);
}

#[test]
fn default_config_hands_off_after_zoom() {
    let cfg = SessionConfig::default();
    assert!(cfg.sequence.handoff_follows_zoom());
    assert!(cfg.view.settle_delay_ms < cfg.view.cleanup_delay_ms);
    assert!(cfg.map.min_zoom <= cfg.map.initial_zoom && cfg.map.initial_zoom <= cfg.map.max_zoom);
    assert!(cfg.map.marker_zoom <= cfg.map.max_zoom);
}
