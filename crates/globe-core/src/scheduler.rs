use crate::controller::{FrameOutcome, GlobeController};
use crate::panel::DetailsPanel;
use crate::surface::DrawSurface;

/// Restartable per-frame task. The host calls [`FrameLoop::tick`] once per
/// display refresh; pausing turns ticks into no-ops without tearing the
/// loop down.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    paused: bool,
    rendered: u64,
}

impl FrameLoop {
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Frames actually drawn since the loop was created.
    pub fn rendered_frames(&self) -> u64 {
        self.rendered
    }

    pub fn tick<P: DetailsPanel>(
        &mut self,
        controller: &mut GlobeController<P>,
        surface: &mut dyn DrawSurface,
    ) -> FrameOutcome {
        if self.paused {
            return FrameOutcome::Paused;
        }
        let outcome = controller.frame(surface);
        if outcome == FrameOutcome::Rendered {
            self.rendered += 1;
        }
        outcome
    }
}
