//! Tunable parameters for a globe instance.
//!
//! Defaults come from `constants.rs`. Embedders and tests may override
//! individual fields with struct update syntax before constructing a
//! [`GlobeController`](crate::GlobeController).

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeParams {
    pub initial_yaw: f64,
    pub initial_pitch: f64,
    pub initial_spin_velocity: f64,

    /// Pitch is kept within `[-pitch_limit, pitch_limit]`.
    pub pitch_limit: f64,
    pub spin_decay: f64,
    /// Minimum idle spin magnitude; decay never goes below it.
    pub spin_floor: f64,
    pub pitch_velocity_decay: f64,

    pub drag_yaw_per_px: f64,
    pub drag_pitch_per_px: f64,
    pub drag_spin_per_px: f64,
    pub drag_pitch_velocity_per_px: f64,

    pub click_slop_px: f64,
    pub hit_radius_px: f64,
    pub key_snap_spin: f64,

    pub radius_fraction: f64,
    pub front_face_cutoff: f64,
}

impl Default for GlobeParams {
    fn default() -> Self {
        Self {
            initial_yaw: INITIAL_YAW,
            initial_pitch: INITIAL_PITCH,
            initial_spin_velocity: INITIAL_SPIN_VELOCITY,
            pitch_limit: PITCH_LIMIT,
            spin_decay: SPIN_DECAY,
            spin_floor: SPIN_FLOOR,
            pitch_velocity_decay: PITCH_VELOCITY_DECAY,
            drag_yaw_per_px: DRAG_YAW_PER_PX,
            drag_pitch_per_px: DRAG_PITCH_PER_PX,
            drag_spin_per_px: DRAG_SPIN_PER_PX,
            drag_pitch_velocity_per_px: DRAG_PITCH_VELOCITY_PER_PX,
            click_slop_px: CLICK_SLOP_PX,
            hit_radius_px: PIN_HIT_RADIUS_PX,
            key_snap_spin: KEY_SNAP_SPIN,
            radius_fraction: GLOBE_RADIUS_FRACTION,
            front_face_cutoff: FRONT_FACE_CUTOFF,
        }
    }
}
