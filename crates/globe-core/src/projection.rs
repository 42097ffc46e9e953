//! Sphere geometry: geographic coordinates to unit vectors, view rotation,
//! and orthographic projection onto the canvas.
//!
//! World space is right-handed with +Y up and +Z toward the viewer. Screen
//! space has +Y down, so `project` flips the vertical axis.

use glam::DVec3;

/// Screen placement of a globe and its radius, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl GlobeGeometry {
    /// Centre the globe on a surface of `width` x `height` pixels.
    pub fn for_surface(width: f64, height: f64, radius_fraction: f64) -> Self {
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            radius: width.min(height) * radius_fraction,
        }
    }
}

/// A projected point. `depth` is the rotated z-component: 1 faces the
/// viewer, 0 sits on the silhouette, negative values are behind the sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

#[inline]
pub fn to_unit_vector(lat_deg: f64, lon_deg: f64) -> DVec3 {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    DVec3::new(lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin())
}

/// Yaw about the vertical axis, then pitch about the resulting horizontal axis.
#[inline]
pub fn rotate(v: DVec3, yaw: f64, pitch: f64) -> DVec3 {
    let (sin_y, cos_y) = yaw.sin_cos();
    let x1 = v.x * cos_y - v.z * sin_y;
    let z1 = v.x * sin_y + v.z * cos_y;

    let (sin_p, cos_p) = pitch.sin_cos();
    DVec3::new(x1, v.y * cos_p - z1 * sin_p, v.y * sin_p + z1 * cos_p)
}

#[inline]
pub fn project(v: DVec3, geometry: &GlobeGeometry) -> ScreenPoint {
    ScreenPoint {
        x: geometry.cx + v.x * geometry.radius,
        y: geometry.cy - v.y * geometry.radius,
        depth: v.z,
    }
}

/// `to_unit_vector` -> `rotate` -> `project` in one call.
#[inline]
pub fn project_lat_lon(
    lat_deg: f64,
    lon_deg: f64,
    yaw: f64,
    pitch: f64,
    geometry: &GlobeGeometry,
) -> ScreenPoint {
    project(rotate(to_unit_vector(lat_deg, lon_deg), yaw, pitch), geometry)
}

#[inline]
pub fn is_front_facing(depth: f64, cutoff: f64) -> bool {
    depth >= cutoff
}

/// Yaw that turns the given coordinate onto the vertical centre line,
/// facing the viewer when pitch is zero.
///
/// Pitch is ignored: with a non-zero pitch the point still lands on the
/// centre line but is foreshortened vertically.
#[inline]
pub fn facing_yaw(lat_deg: f64, lon_deg: f64) -> f64 {
    let v = to_unit_vector(lat_deg, lon_deg);
    std::f64::consts::FRAC_PI_2 - v.z.atan2(v.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOM: GlobeGeometry = GlobeGeometry {
        cx: 400.0,
        cy: 300.0,
        radius: 200.0,
    };

    #[test]
    fn equator_prime_meridian_is_plus_x() {
        let v = to_unit_vector(0.0, 0.0);
        assert!((v - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn north_pole_projects_above_centre() {
        let p = project_lat_lon(90.0, 0.0, 0.0, 0.0, &GEOM);
        assert!((p.x - GEOM.cx).abs() < 1e-9);
        assert!((p.y - (GEOM.cy - GEOM.radius)).abs() < 1e-9);
        assert!(p.depth.abs() < 1e-9);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = to_unit_vector(35.0, 139.0);
        let r = rotate(v, 2.3, -0.7);
        assert!((r.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn geometry_uses_smaller_dimension() {
        let g = GlobeGeometry::for_surface(1000.0, 500.0, 0.34);
        assert_eq!(g.cx, 500.0);
        assert_eq!(g.cy, 250.0);
        assert!((g.radius - 170.0).abs() < 1e-9);
    }

    #[test]
    fn cutoff_is_inclusive() {
        assert!(is_front_facing(-0.06, -0.06));
        assert!(!is_front_facing(-0.0601, -0.06));
    }
}
