//! Per-frame screen positions of destination pins and click picking.

use crate::catalog::Catalog;
use crate::constants::PIN_HEAD_OFFSET_PX;
use crate::projection::{is_front_facing, project_lat_lon, GlobeGeometry};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPin {
    /// Projected surface point of the destination.
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    /// Position in the catalog.
    pub index: usize,
}

impl ProjectedPin {
    /// Centre of the marker head, drawn above the surface point.
    #[inline]
    pub fn head(&self) -> (f64, f64) {
        (self.x, self.y - PIN_HEAD_OFFSET_PX)
    }
}

/// One entry per destination, in catalog order. Rebuilt wholesale each frame.
pub type PinFrame = SmallVec<[ProjectedPin; 8]>;

pub fn project_pins(catalog: &Catalog, yaw: f64, pitch: f64, geometry: &GlobeGeometry) -> PinFrame {
    catalog
        .iter()
        .enumerate()
        .map(|(index, d)| {
            let p = project_lat_lon(d.lat, d.lon, yaw, pitch, geometry);
            ProjectedPin {
                x: p.x,
                y: p.y,
                depth: p.depth,
                index,
            }
        })
        .collect()
}

/// Indices into `pins` ordered back to front, so later pins draw on top.
pub fn back_to_front(pins: &[ProjectedPin]) -> SmallVec<[usize; 8]> {
    let mut order: SmallVec<[usize; 8]> = (0..pins.len()).collect();
    order.sort_by(|&a, &b| pins[a].depth.total_cmp(&pins[b].depth));
    order
}

/// Nearest front-facing pin whose head lies strictly within `radius_px`
/// of `(x, y)`. Returns its catalog index.
pub fn hit_test(
    pins: &[ProjectedPin],
    x: f64,
    y: f64,
    radius_px: f64,
    front_face_cutoff: f64,
) -> Option<usize> {
    let mut best = None::<(usize, f64)>;
    for pin in pins {
        if !is_front_facing(pin.depth, front_face_cutoff) {
            continue;
        }
        let (hx, hy) = pin.head();
        let distance = (x - hx).hypot(y - hy);
        if distance < radius_px {
            match best {
                Some((_, bd)) if distance >= bd => {}
                _ => best = Some((pin.index, distance)),
            }
        }
    }
    best.map(|(i, _)| i)
}
