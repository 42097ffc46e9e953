//! Globe orientation and its per-frame inertia.

use crate::params::GlobeParams;
use crate::projection::facing_yaw;

/// Direction of an arrow-key step through the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    #[inline]
    pub fn delta(self) -> i64 {
        match self {
            Step::Next => 1,
            Step::Previous => -1,
        }
    }
}

/// Yaw and pitch in radians plus their per-frame velocities.
///
/// Yaw is unbounded. Pitch is clamped to `[-pitch_limit, pitch_limit]` by
/// every method that changes it.
#[derive(Clone, Debug, PartialEq)]
pub struct Orientation {
    pub yaw: f64,
    pub pitch: f64,
    pub spin_velocity: f64,
    pub pitch_velocity: f64,
}

impl Orientation {
    pub fn new(params: &GlobeParams) -> Self {
        Self {
            yaw: params.initial_yaw,
            pitch: params.initial_pitch.clamp(-params.pitch_limit, params.pitch_limit),
            spin_velocity: params.initial_spin_velocity,
            pitch_velocity: 0.0,
        }
    }

    /// One frame of motion. Velocities decay only while no drag is active;
    /// spin never decays below the idle floor.
    pub fn advance(&mut self, dragging: bool, params: &GlobeParams) {
        self.yaw += self.spin_velocity;
        self.pitch = clamp_pitch(self.pitch + self.pitch_velocity, params);

        if !dragging {
            self.spin_velocity *= params.spin_decay;
            if self.spin_velocity.abs() < params.spin_floor {
                self.spin_velocity = params.spin_floor;
            }
            self.pitch_velocity *= params.pitch_velocity_decay;
        }
    }

    /// Rotate directly by a pointer delta and set momentum from it.
    pub fn apply_drag(&mut self, dx: f64, dy: f64, params: &GlobeParams) {
        self.yaw += dx * params.drag_yaw_per_px;
        self.pitch = clamp_pitch(self.pitch + dy * params.drag_pitch_per_px, params);
        self.spin_velocity = dx * params.drag_spin_per_px;
        self.pitch_velocity = dy * params.drag_pitch_velocity_per_px;
    }

    /// Turn a coordinate to face the viewer and kick the spin in the
    /// direction of travel.
    pub fn snap_to(&mut self, lat_deg: f64, lon_deg: f64, step: Step, params: &GlobeParams) {
        self.yaw = facing_yaw(lat_deg, lon_deg);
        self.spin_velocity = step.delta() as f64 * params.key_snap_spin;
    }
}

#[inline]
fn clamp_pitch(pitch: f64, params: &GlobeParams) -> f64 {
    pitch.clamp(-params.pitch_limit, params.pitch_limit)
}
