//! Immediate-mode 2D drawing surface the globe renders onto.
//!
//! The browser front-end implements this over `CanvasRenderingContext2d`;
//! tests implement it with a recorder. Path calls accumulate into the current
//! path until the next `begin_path`, the same model as Canvas 2D.

/// Radial gradient between two circles, with colour stops in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner: (f64, f64, f64),
    pub outer: (f64, f64, f64),
    pub stops: Vec<(f64, String)>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint<'a> {
    Solid(&'a str),
    Radial(&'a RadialGradient),
}

pub trait DrawSurface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Full circle as a closed sub-path.
    fn circle(&mut self, x: f64, y: f64, radius: f64);

    fn fill(&mut self, paint: &Paint<'_>);
    fn stroke(&mut self, color: &str, width: f64);

    fn save(&mut self);
    /// Intersect the clip region with the current path.
    fn clip(&mut self);
    fn restore(&mut self);
}
