// Shared tuning constants for the globe: projection, physics, interaction
// and palette. `GlobeParams::default()` is assembled from these.

// Projection
pub const GLOBE_RADIUS_FRACTION: f64 = 0.34; // of min(width, height)
pub const FRONT_FACE_CUTOFF: f64 = -0.06; // pins with depth below this are hidden

// Initial orientation
pub const INITIAL_YAW: f64 = 0.45;
pub const INITIAL_PITCH: f64 = -0.2;
pub const INITIAL_SPIN_VELOCITY: f64 = 0.0023;

// Orientation limits and inertia
pub const PITCH_LIMIT: f64 = 0.8;
pub const SPIN_DECAY: f64 = 0.995;
pub const SPIN_FLOOR: f64 = 0.0015;
pub const PITCH_VELOCITY_DECAY: f64 = 0.9;

// Drag sensitivity: direct rotation per pixel, and momentum per pixel
pub const DRAG_YAW_PER_PX: f64 = 0.0052;
pub const DRAG_PITCH_PER_PX: f64 = 0.0046;
pub const DRAG_SPIN_PER_PX: f64 = 0.00052;
pub const DRAG_PITCH_VELOCITY_PER_PX: f64 = 0.00042;

// Interaction
pub const CLICK_SLOP_PX: f64 = 2.0; // movement beyond this on either axis is a drag
pub const PIN_HIT_RADIUS_PX: f64 = 20.0;
pub const KEY_SNAP_SPIN: f64 = 0.012; // spin cue after arrow-key navigation

// Pin geometry (screen pixels, relative to the projected surface point)
pub const PIN_HEAD_OFFSET_PX: f64 = 20.0;
pub const PIN_FOOT_OFFSET_PX: f64 = 3.0;
pub const PIN_HEAD_RADIUS: f64 = 5.5;
pub const PIN_HEAD_RADIUS_ACTIVE: f64 = 7.0;
pub const PIN_STEM_WIDTH: f64 = 2.6;
pub const PIN_STEM_WIDTH_ACTIVE: f64 = 3.8;
pub const PIN_HALO_RADIUS: f64 = 12.0;
pub const PIN_HALO_WIDTH: f64 = 3.0;

// Graticule sampling (degrees)
pub const PARALLEL_STEP_DEG: i32 = 30;
pub const PARALLEL_MAX_LAT_DEG: i32 = 60;
pub const PARALLEL_SAMPLE_DEG: i32 = 4;
pub const MERIDIAN_STEP_DEG: i32 = 30;
pub const MERIDIAN_FIRST_LON_DEG: i32 = -150;
pub const MERIDIAN_MAX_LAT_DEG: i32 = 85; // poles are skipped
pub const MERIDIAN_SAMPLE_DEG: i32 = 3;
pub const GRID_LINE_WIDTH: f64 = 1.0;

// Palette
pub const OCEAN_GRADIENT_STOPS: [(f64, &str); 3] =
    [(0.0, "#68b4ff"), (0.55, "#2e89e6"), (1.0, "#1a5ea7")];
pub const GRID_COLOR: &str = "rgba(255, 255, 255, 0.38)";
pub const PIN_STEM_COLOR: &str = "#102a43";
pub const PIN_HEAD_COLOR: &str = "#142f48";
pub const PIN_HEAD_COLOR_ACTIVE: &str = "#ff5f49";
pub const PIN_HALO_COLOR: &str = "rgba(255, 95, 73, 0.35)";
pub const SPECULAR_COLOR: &str = "rgba(255, 255, 255, 0.12)";

// Views
pub const GLOBE_VIEW_ID: &str = "discoverView";
