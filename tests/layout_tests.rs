// Host-side tests for photo placement on the sphere.

use sphere_core::*;

#[test]
fn no_points_for_zero_count() {
    assert!(generate_sphere_points(0, SPHERE_RADIUS).is_empty());
}

#[test]
fn single_point_sits_at_the_pole() {
    let points = generate_sphere_points(1, 5.0);
    assert_eq!(points.len(), 1);
    assert!((points[0] - glam::Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
}

#[test]
fn every_point_lies_on_the_sphere() {
    for count in [1, 2, 7, 50, 333] {
        let points = generate_sphere_points(count, 5.0);
        assert_eq!(points.len(), count);
        for p in &points {
            assert!((p.length() - 5.0).abs() < 1e-4, "point {:?} off sphere", p);
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let a = generate_sphere_points(120, 3.5);
    let b = generate_sphere_points(120, 3.5);
    assert_eq!(a, b);
}

#[test]
fn height_falls_linearly_from_pole_to_pole() {
    // equal-area bands: z_i = r * (1 - 2i/n)
    let n = 64;
    let r = 5.0;
    let points = generate_sphere_points(n, r);
    for (i, p) in points.iter().enumerate() {
        let expected = r * (1.0 - 2.0 * i as f32 / n as f32);
        assert!((p.z - expected).abs() < 1e-4);
    }
    for pair in points.windows(2) {
        assert!(pair[1].z < pair[0].z);
    }
}

#[test]
fn points_are_spread_evenly() {
    let n = 200;
    let r = 5.0;
    let points = generate_sphere_points(n, r);

    let centroid = points.iter().copied().sum::<glam::Vec3>() / n as f32;
    assert!(centroid.length() < 0.1 * r, "centroid {:?}", centroid);

    // mean spacing for n points on the sphere's area
    let spacing = (4.0 * std::f32::consts::PI * r * r / n as f32).sqrt();
    for (i, a) in points.iter().enumerate() {
        let nearest = points
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, b)| a.distance(*b))
            .fold(f32::MAX, f32::min);
        assert!(nearest > 0.3 * spacing, "point {} crowded: {}", i, nearest);
    }
}

#[test]
fn images_are_reused_cyclically() {
    let refs = parse_image_list("a.jpg,b.jpg,c.jpg", ',');
    assert_eq!(image_for_index(&refs, 0).map(ImageRef::as_str), Some("a.jpg"));
    assert_eq!(image_for_index(&refs, 2).map(ImageRef::as_str), Some("c.jpg"));
    assert_eq!(image_for_index(&refs, 4).map(ImageRef::as_str), Some("b.jpg"));
    assert_eq!(image_for_index(&refs, 300).map(ImageRef::as_str), Some("a.jpg"));
    assert!(image_for_index(&[], 3).is_none());
}

#[test]
fn size_without_jitter_is_uniform() {
    let config = SphereConfig::default();
    for i in 0..20 {
        assert_eq!(entity_size(&config, i), config.photo_size);
    }
}

#[test]
fn jittered_size_stays_within_bounds() {
    let config = SphereConfig {
        size_jitter: 0.25,
        ..SphereConfig::default()
    };
    let lo = config.photo_size * 0.75;
    let hi = config.photo_size * 1.25;
    let sizes: Vec<f32> = (0..100).map(|i| entity_size(&config, i)).collect();
    assert!(sizes.iter().all(|s| (lo..=hi).contains(s)));
    assert!(sizes.iter().any(|s| (s - config.photo_size).abs() > 1e-3));
    // same index, same size
    assert_eq!(entity_size(&config, 17), sizes[17]);
}

#[test]
fn four_unit_points_have_distinct_azimuths() {
    let points = generate_sphere_points(4, 1.0);
    assert_eq!(points.len(), 4);
    let azimuths: Vec<f32> = points
        .iter()
        .skip(1) // the first point sits on the pole
        .map(|p| p.y.atan2(p.x))
        .collect();
    for (i, a) in azimuths.iter().enumerate() {
        for b in &azimuths[i + 1..] {
            assert!((a - b).abs() > 1e-3);
        }
    }
    for p in &points {
        assert!((p.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn points_are_distinct() {
    let points = generate_sphere_points(150, 2.0);
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            assert!(a.distance(*b) > 1e-3);
        }
    }
}
