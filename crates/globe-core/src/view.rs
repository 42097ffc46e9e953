use crate::constants::GLOBE_VIEW_ID;

/// Which named panel is visible. Exactly one is active at a time; the
/// globe only animates while its own view is the active one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    active: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active: GLOBE_VIEW_ID.to_string(),
        }
    }
}

impl ViewState {
    #[inline]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Returns `true` when the active view changed.
    pub fn switch_to(&mut self, view_id: &str) -> bool {
        if self.active == view_id {
            return false;
        }
        log::info!("[view] {} -> {}", self.active, view_id);
        self.active = view_id.to_string();
        true
    }

    #[inline]
    pub fn is_globe_active(&self) -> bool {
        self.active == GLOBE_VIEW_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_globe_view() {
        assert!(ViewState::default().is_globe_active());
    }

    #[test]
    fn switching_away_and_back() {
        let mut v = ViewState::default();
        assert!(v.switch_to("tripsView"));
        assert!(!v.is_globe_active());
        assert!(!v.switch_to("tripsView"));
        assert!(v.switch_to(GLOBE_VIEW_ID));
        assert!(v.is_globe_active());
    }
}
