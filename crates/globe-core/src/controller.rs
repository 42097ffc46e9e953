//! The globe's single owner of mutable state.
//!
//! Input handlers and the frame tick all go through [`GlobeController`], so
//! several globes can coexist and the whole interaction model runs in tests
//! without a browser.

use crate::catalog::{Catalog, Destination};
use crate::orientation::{Orientation, Step};
use crate::panel::{sync_panel, DetailsPanel};
use crate::params::GlobeParams;
use crate::pins::{hit_test, PinFrame};
use crate::pointer::PointerGesture;
use crate::projection::GlobeGeometry;
use crate::render::{draw_frame, Pose};
use crate::surface::DrawSurface;
use crate::view::ViewState;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Rendered,
    /// Another view is active; nothing moved or was drawn.
    Idle,
    /// The frame loop is paused.
    Paused,
}

pub struct GlobeController<P: DetailsPanel> {
    params: GlobeParams,
    catalog: Catalog,
    orientation: Orientation,
    gesture: PointerGesture,
    selected: usize,
    view: ViewState,
    pins: PinFrame,
    panel: P,
}

impl<P: DetailsPanel> GlobeController<P> {
    /// Selects the first destination and pushes it to `panel`.
    pub fn new(catalog: Catalog, params: GlobeParams, panel: P) -> Self {
        let orientation = Orientation::new(&params);
        let mut controller = Self {
            params,
            catalog,
            orientation,
            gesture: PointerGesture::Idle,
            selected: 0,
            view: ViewState::default(),
            pins: PinFrame::new(),
            panel,
        };
        controller.set_destination(0);
        controller
    }

    pub fn params(&self) -> &GlobeParams {
        &self.params
    }
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }
    pub fn orientation_mut(&mut self) -> &mut Orientation {
        &mut self.orientation
    }
    pub fn gesture(&self) -> &PointerGesture {
        &self.gesture
    }
    pub fn selected(&self) -> usize {
        self.selected
    }
    pub fn selected_destination(&self) -> &Destination {
        self.catalog.get(self.selected)
    }
    pub fn view(&self) -> &ViewState {
        &self.view
    }
    /// Pin positions from the most recent drawn frame.
    pub fn pins(&self) -> &PinFrame {
        &self.pins
    }
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Select `index` wrapped into the catalog and sync the panel.
    pub fn set_destination(&mut self, index: i64) -> usize {
        self.selected = self.catalog.wrap_index(index);
        let destination = self.catalog.get(self.selected);
        log::debug!("[select] {} {}", self.selected, destination.name);
        sync_panel(&mut self.panel, destination);
        self.selected
    }

    /// Move one destination along the catalog and turn the globe to face it.
    pub fn step(&mut self, step: Step) -> usize {
        let index = self.set_destination(self.selected as i64 + step.delta());
        let (lat, lon) = {
            let d = self.catalog.get(index);
            (d.lat, d.lon)
        };
        self.orientation.snap_to(lat, lon, step, &self.params);
        index
    }

    /// Arrow keys step through destinations while the globe view is active.
    /// Returns `true` when the key was consumed.
    pub fn key_down(&mut self, key: &str) -> bool {
        if !self.view.is_globe_active() {
            return false;
        }
        let step = match key {
            "ArrowRight" => Step::Next,
            "ArrowLeft" => Step::Previous,
            _ => return false,
        };
        self.step(step);
        true
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.gesture.press(DVec2::new(x, y));
        log::debug!("[pointer] down at ({:.1},{:.1})", x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let Some(delta) = self.gesture.motion(DVec2::new(x, y), self.params.click_slop_px) {
            self.orientation.apply_drag(delta.x, delta.y, &self.params);
        }
    }

    /// End a gesture; a click selects the pin under the pointer, if any.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<usize> {
        if !self.gesture.is_dragging() {
            return None;
        }
        if !self.gesture.release() {
            return None;
        }
        let hit = hit_test(
            &self.pins,
            x,
            y,
            self.params.hit_radius_px,
            self.params.front_face_cutoff,
        )?;
        Some(self.set_destination(hit as i64))
    }

    pub fn pointer_cancel(&mut self) {
        self.gesture.cancel();
    }

    pub fn switch_view(&mut self, view_id: &str) -> bool {
        self.view.switch_to(view_id)
    }

    /// Advance the physics one step and draw, when the globe view is active.
    pub fn frame(&mut self, surface: &mut dyn DrawSurface) -> FrameOutcome {
        if !self.view.is_globe_active() {
            return FrameOutcome::Idle;
        }
        self.orientation
            .advance(self.gesture.is_dragging(), &self.params);
        self.draw(surface);
        FrameOutcome::Rendered
    }

    /// Draw the current orientation without advancing it.
    pub fn draw(&mut self, surface: &mut dyn DrawSurface) {
        let (w, h) = surface.size();
        let geometry = GlobeGeometry::for_surface(w, h, self.params.radius_fraction);
        let pose = Pose {
            yaw: self.orientation.yaw,
            pitch: self.orientation.pitch,
            front_face_cutoff: self.params.front_face_cutoff,
        };
        self.pins = draw_frame(surface, &geometry, pose, &self.catalog, self.selected);
    }
}
