use crate::catalog::Destination;

/// Receiver of selection changes: the details panel and status line.
pub trait DetailsPanel {
    /// Replace title, image, summary and fact list with `destination`'s.
    fn show_destination(&mut self, destination: &Destination);
    fn set_status(&mut self, text: &str);
}

#[inline]
pub fn status_text(destination: &Destination) -> String {
    format!("Selected: {}", destination.name)
}

/// Push a destination to every surface of the panel.
pub fn sync_panel(panel: &mut dyn DetailsPanel, destination: &Destination) {
    panel.show_destination(destination);
    panel.set_status(&status_text(destination));
}
