use glam::DVec2;

/// Press/drag/release tracking for a single pointer.
///
/// `moved` flips once the pointer strays more than the click slop from the
/// press point on either axis, and never flips back within a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerGesture {
    #[default]
    Idle,
    Dragging {
        origin: DVec2,
        last: DVec2,
        moved: bool,
    },
}

impl PointerGesture {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, PointerGesture::Dragging { .. })
    }

    /// Begin a gesture. A press while already dragging restarts it.
    pub fn press(&mut self, pos: DVec2) {
        *self = PointerGesture::Dragging {
            origin: pos,
            last: pos,
            moved: false,
        };
    }

    /// Returns the delta from the previous pointer position, or `None` when idle.
    pub fn motion(&mut self, pos: DVec2, click_slop_px: f64) -> Option<DVec2> {
        match self {
            PointerGesture::Idle => None,
            PointerGesture::Dragging {
                origin,
                last,
                moved,
            } => {
                let delta = pos - *last;
                let travel = (pos - *origin).abs();
                if travel.x > click_slop_px || travel.y > click_slop_px {
                    *moved = true;
                }
                *last = pos;
                Some(delta)
            }
        }
    }

    /// End the gesture. Returns `true` when it was a click rather than a drag.
    pub fn release(&mut self) -> bool {
        let was_click = matches!(self, PointerGesture::Dragging { moved: false, .. });
        *self = PointerGesture::Idle;
        was_click
    }

    /// Abandon the gesture without treating it as a click.
    #[inline]
    pub fn cancel(&mut self) {
        *self = PointerGesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_while_idle_is_ignored() {
        let mut g = PointerGesture::Idle;
        assert_eq!(g.motion(DVec2::new(5.0, 5.0), 2.0), None);
        assert!(!g.is_dragging());
    }

    #[test]
    fn small_jitter_stays_a_click() {
        let mut g = PointerGesture::default();
        g.press(DVec2::new(100.0, 100.0));
        g.motion(DVec2::new(101.0, 102.0), 2.0);
        g.motion(DVec2::new(99.0, 98.0), 2.0);
        assert!(g.release());
    }

    #[test]
    fn slow_drag_accumulates_past_slop() {
        let mut g = PointerGesture::default();
        g.press(DVec2::new(0.0, 0.0));
        for i in 1..=5 {
            g.motion(DVec2::new(i as f64, 0.0), 2.0);
        }
        assert!(!g.release());
    }

    #[test]
    fn deltas_are_relative_to_last_position() {
        let mut g = PointerGesture::default();
        g.press(DVec2::new(10.0, 10.0));
        assert_eq!(g.motion(DVec2::new(14.0, 7.0), 2.0), Some(DVec2::new(4.0, -3.0)));
        assert_eq!(g.motion(DVec2::new(15.0, 7.0), 2.0), Some(DVec2::new(1.0, 0.0)));
    }

    #[test]
    fn cancel_is_never_a_click() {
        let mut g = PointerGesture::default();
        g.press(DVec2::ZERO);
        g.cancel();
        assert!(!g.is_dragging());
        assert!(!g.release());
    }
}
