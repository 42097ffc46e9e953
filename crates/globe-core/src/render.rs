//! One frame of the globe: shaded sphere, clipped graticule, depth-sorted
//! pins and a specular highlight.

use crate::catalog::Catalog;
use crate::constants::*;
use crate::pins::{back_to_front, project_pins, PinFrame, ProjectedPin};
use crate::projection::{is_front_facing, project_lat_lon, GlobeGeometry};
use crate::surface::{DrawSurface, Paint, RadialGradient};

/// Orientation snapshot passed to the renderer.
#[derive(Clone, Copy, Debug)]
pub struct Pose {
    pub yaw: f64,
    pub pitch: f64,
    pub front_face_cutoff: f64,
}

pub fn ocean_gradient(g: &GlobeGeometry) -> RadialGradient {
    RadialGradient {
        inner: (g.cx - g.radius * 0.45, g.cy - g.radius * 0.48, g.radius * 0.2),
        outer: (g.cx, g.cy, g.radius),
        stops: OCEAN_GRADIENT_STOPS
            .iter()
            .map(|(t, c)| (*t, c.to_string()))
            .collect(),
    }
}

/// One graticule polyline: a parallel at a latitude or a meridian at a
/// longitude, in whole degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraticuleLine {
    Parallel(i32),
    Meridian(i32),
}

impl GraticuleLine {
    /// Sampled (lat, lon) points in degrees. Meridians stop short of the poles.
    pub fn samples(self) -> impl Iterator<Item = (f64, f64)> {
        let (first, last, step) = match self {
            GraticuleLine::Parallel(_) => (-180, 180, PARALLEL_SAMPLE_DEG),
            GraticuleLine::Meridian(_) => (
                -MERIDIAN_MAX_LAT_DEG,
                MERIDIAN_MAX_LAT_DEG,
                MERIDIAN_SAMPLE_DEG,
            ),
        };
        (first..=last)
            .step_by(step as usize)
            .map(move |v| match self {
                GraticuleLine::Parallel(lat) => (lat as f64, v as f64),
                GraticuleLine::Meridian(lon) => (v as f64, lon as f64),
            })
    }
}

/// Parallels then meridians. Nothing is allocated; samples are generated
/// as they are drawn.
pub fn graticule() -> impl Iterator<Item = GraticuleLine> {
    let parallels = (-PARALLEL_MAX_LAT_DEG..=PARALLEL_MAX_LAT_DEG)
        .step_by(PARALLEL_STEP_DEG as usize)
        .map(GraticuleLine::Parallel);
    let meridians = (MERIDIAN_FIRST_LON_DEG..=180)
        .step_by(MERIDIAN_STEP_DEG as usize)
        .map(GraticuleLine::Meridian);
    parallels.chain(meridians)
}

/// Draw a full frame and return the pin positions used for hit-testing.
pub fn draw_frame(
    surface: &mut dyn DrawSurface,
    geometry: &GlobeGeometry,
    pose: Pose,
    catalog: &Catalog,
    selected: usize,
) -> PinFrame {
    surface.clear();
    draw_sphere(surface, geometry);
    draw_graticule(surface, geometry, pose);

    let pins = project_pins(catalog, pose.yaw, pose.pitch, geometry);
    for i in back_to_front(&pins) {
        let pin = &pins[i];
        if !is_front_facing(pin.depth, pose.front_face_cutoff) {
            continue;
        }
        draw_pin(surface, pin, pin.index == selected);
    }

    draw_specular(surface, geometry);
    pins
}

fn draw_sphere(surface: &mut dyn DrawSurface, g: &GlobeGeometry) {
    let gradient = ocean_gradient(g);
    surface.begin_path();
    surface.circle(g.cx, g.cy, g.radius);
    surface.fill(&Paint::Radial(&gradient));
}

fn draw_graticule(surface: &mut dyn DrawSurface, g: &GlobeGeometry, pose: Pose) {
    surface.save();
    surface.begin_path();
    surface.circle(g.cx, g.cy, g.radius);
    surface.clip();

    for line in graticule() {
        surface.begin_path();
        for (i, (lat, lon)) in line.samples().enumerate() {
            let p = project_lat_lon(lat, lon, pose.yaw, pose.pitch, g);
            if i == 0 {
                surface.move_to(p.x, p.y);
            } else {
                surface.line_to(p.x, p.y);
            }
        }
        surface.stroke(GRID_COLOR, GRID_LINE_WIDTH);
    }
    surface.restore();
}

fn draw_pin(surface: &mut dyn DrawSurface, pin: &ProjectedPin, active: bool) {
    let (hx, hy) = pin.head();

    surface.begin_path();
    surface.move_to(hx, hy);
    surface.line_to(pin.x, pin.y - PIN_FOOT_OFFSET_PX);
    let stem_width = if active {
        PIN_STEM_WIDTH_ACTIVE
    } else {
        PIN_STEM_WIDTH
    };
    surface.stroke(PIN_STEM_COLOR, stem_width);

    surface.begin_path();
    if active {
        surface.circle(hx, hy, PIN_HEAD_RADIUS_ACTIVE);
        surface.fill(&Paint::Solid(PIN_HEAD_COLOR_ACTIVE));

        surface.begin_path();
        surface.circle(hx, hy, PIN_HALO_RADIUS);
        surface.stroke(PIN_HALO_COLOR, PIN_HALO_WIDTH);
    } else {
        surface.circle(hx, hy, PIN_HEAD_RADIUS);
        surface.fill(&Paint::Solid(PIN_HEAD_COLOR));
    }
}

fn draw_specular(surface: &mut dyn DrawSurface, g: &GlobeGeometry) {
    surface.begin_path();
    surface.circle(
        g.cx - g.radius * 0.3,
        g.cy - g.radius * 0.38,
        g.radius * 0.9,
    );
    surface.fill(&Paint::Solid(SPECULAR_COLOR));
}
