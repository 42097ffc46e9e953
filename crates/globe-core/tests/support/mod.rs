// Recording doubles for the drawing surface and the details panel.
#![allow(dead_code)]

use globe_core::{Destination, DetailsPanel, DrawSurface, Paint};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Circle(f64, f64, f64),
    FillSolid(String),
    FillGradient,
    Stroke(String, f64),
    Save,
    Clip,
    Restore,
}

pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Radii of circles filled with a solid colour, in draw order.
    pub fn filled_circle_radii(&self) -> Vec<f64> {
        let mut out = Vec::new();
        let mut last_circle = None;
        for c in &self.calls {
            match c {
                Call::Circle(_, _, r) => last_circle = Some(*r),
                Call::FillSolid(_) => {
                    if let Some(r) = last_circle.take() {
                        out.push(r);
                    }
                }
                Call::BeginPath => last_circle = None,
                _ => {}
            }
        }
        out
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }
    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::LineTo(x, y));
    }
    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.calls.push(Call::Circle(x, y, radius));
    }
    fn fill(&mut self, paint: &Paint<'_>) {
        match paint {
            Paint::Solid(c) => self.calls.push(Call::FillSolid(c.to_string())),
            Paint::Radial(_) => self.calls.push(Call::FillGradient),
        }
    }
    fn stroke(&mut self, color: &str, width: f64) {
        self.calls.push(Call::Stroke(color.to_string(), width));
    }
    fn save(&mut self) {
        self.calls.push(Call::Save);
    }
    fn clip(&mut self) {
        self.calls.push(Call::Clip);
    }
    fn restore(&mut self) {
        self.calls.push(Call::Restore);
    }
}

#[derive(Default)]
pub struct RecordingPanel {
    pub title: String,
    pub image: String,
    pub summary: String,
    pub facts: Vec<String>,
    pub status: String,
    pub updates: usize,
}

impl DetailsPanel for RecordingPanel {
    fn show_destination(&mut self, destination: &Destination) {
        self.title = destination.name.clone();
        self.image = destination.image.clone();
        self.summary = destination.summary.clone();
        self.facts.clear();
        self.facts.extend(destination.facts.iter().cloned());
        self.updates += 1;
    }
    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }
}

/// Two destinations on the equator, 30 degrees apart.
pub fn equator_pair() -> Vec<Destination> {
    vec![
        Destination::new("Zero", 0.0, 0.0, "zero.jpg", "At the origin.", &["first"]),
        Destination::new("Thirty", 0.0, 30.0, "thirty.jpg", "A little east.", &["second"]),
    ]
}
