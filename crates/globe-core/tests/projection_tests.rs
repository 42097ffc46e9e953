use globe_core::projection::{
    facing_yaw, project, project_lat_lon, rotate, to_unit_vector, GlobeGeometry,
};

const GEOM: GlobeGeometry = GlobeGeometry {
    cx: 400.0,
    cy: 300.0,
    radius: 204.0,
};

#[test]
fn unit_vectors_have_unit_length_everywhere() {
    for lat in (-90..=90).step_by(5) {
        for lon in (-180..=180).step_by(5) {
            let v = to_unit_vector(lat as f64, lon as f64);
            assert!(
                (v.length() - 1.0).abs() < 1e-12,
                "lat={} lon={} len={}",
                lat,
                lon,
                v.length()
            );
        }
    }
}

#[test]
fn projection_is_deterministic() {
    for (yaw, pitch) in [(0.0, 0.0), (0.45, -0.2), (-12.3, 0.8), (1e4, -0.8)] {
        let a = project(rotate(to_unit_vector(35.6764, 139.65), yaw, pitch), &GEOM);
        let b = project(rotate(to_unit_vector(35.6764, 139.65), yaw, pitch), &GEOM);
        assert_eq!(a, b);
    }
}

#[test]
fn projected_points_stay_inside_the_silhouette() {
    for lat in (-90..=90).step_by(15) {
        for lon in (-180..=180).step_by(15) {
            let p = project_lat_lon(lat as f64, lon as f64, 0.7, -0.3, &GEOM);
            let d = (p.x - GEOM.cx).hypot(p.y - GEOM.cy);
            assert!(d <= GEOM.radius + 1e-9);
        }
    }
}

#[test]
fn screen_y_grows_downward() {
    let north = project_lat_lon(45.0, 0.0, 0.0, 0.0, &GEOM);
    let south = project_lat_lon(-45.0, 0.0, 0.0, 0.0, &GEOM);
    assert!(north.y < GEOM.cy);
    assert!(south.y > GEOM.cy);
}

#[test]
fn facing_yaw_centres_any_longitude() {
    for lon in (-180..=180).step_by(10) {
        for lat in [-60.0, 0.0, 35.0, 64.1466] {
            let yaw = facing_yaw(lat, lon as f64);
            let p = project_lat_lon(lat, lon as f64, yaw, 0.0, &GEOM);
            assert!((p.x - GEOM.cx).abs() < 1e-9, "lat={} lon={}", lat, lon);
            assert!(p.depth > 0.0);
        }
    }
}
